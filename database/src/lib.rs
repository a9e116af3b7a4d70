use std::str::FromStr;

use sqlx::sqlite::SqliteConnectOptions;
use tracing::{debug, instrument};

pub mod models;

use models::Song;

pub struct Database {
    pool: sqlx::Pool<sqlx::Sqlite>,
}

impl Database {
    pub async fn connect(url: &str) -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
        let pool = sqlx::SqlitePool::connect_with(options).await?;

        Ok(Self { pool })
    }

    pub fn from_pool(pool: sqlx::SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn ensure_schema(&self) -> Result<(), sqlx::Error> {
        sqlx::query(
            "
            CREATE TABLE IF NOT EXISTS songs (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                length INTEGER NOT NULL
            )
        ",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    #[instrument(skip(self), level = "trace")]
    pub async fn all(&self) -> Result<Vec<Song>, sqlx::Error> {
        let rows = sqlx::query("SELECT * FROM songs")
            .fetch_all(&self.pool)
            .await?;
        debug!(n_rows = rows.len(), "fetched songs");

        rows.iter().map(Song::new_from_db).collect()
    }

    #[instrument(skip(self), level = "trace")]
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Song>, sqlx::Error> {
        let row = sqlx::query("SELECT * FROM songs WHERE name = ? LIMIT 1")
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;
        debug!(found = row.is_some(), "looked up song by name");

        row.as_ref().map(Song::new_from_db).transpose()
    }

    #[instrument(skip(self, song), ret, level = "trace")]
    pub async fn insert_song(&self, song: &Song) -> Result<i64, sqlx::Error> {
        let (song_id,): (i64,) = sqlx::query_as(
            "
            INSERT INTO songs (name, length)
            VALUES (?, ?)
            RETURNING id
        ",
        )
        .bind(&song.name)
        .bind(song.length)
        .fetch_one(&self.pool)
        .await?;

        Ok(song_id)
    }
}
