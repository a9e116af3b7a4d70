use clap::Parser;
use tracing::{debug, info};

#[derive(Debug, clap::Parser)]
enum Command {
    Add {
        name: String,
        length: i64,
        #[arg(short, long)]
        db: String,
    },
    List {
        #[arg(short, long)]
        db: String,
    },
    Find {
        name: String,
        #[arg(short, long)]
        db: String,
    },
}

#[tokio::main]
async fn main() {
    {
        use tracing_subscriber::prelude::*;

        tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer())
            .with(tracing_subscriber::EnvFilter::from_default_env())
            .init()
    }

    match Command::parse() {
        Command::Add { name, length, db } => add_song(&name, length, &db).await,
        Command::List { db } => list_songs(&db).await,
        Command::Find { name, db } => find_song(&name, &db).await,
    };
}

async fn add_song(name: &str, length: i64, db_url: &str) {
    let db = database::Database::connect(db_url)
        .await
        .expect("failed to connect to db");
    db.ensure_schema()
        .await
        .expect("failed to create songs table");

    let song = database::models::Song::new(name, length);
    let song_id = db.insert_song(&song).await.expect("failed to insert song");

    info!(song_id, name, length, "inserted song");
}

async fn list_songs(db_url: &str) {
    let db = database::Database::connect(db_url)
        .await
        .expect("failed to connect to db");
    debug!("querying database");
    let songs = db.all().await.expect("failed to fetch songs");

    for song in &songs {
        println!("{song:?}");
    }
}

async fn find_song(name: &str, db_url: &str) {
    let db = database::Database::connect(db_url)
        .await
        .expect("failed to connect to db");
    debug!("querying database");

    match db.find_by_name(name).await.expect("failed to fetch song") {
        Some(song) => println!("{song:?}"),
        None => println!("no song named {name:?}"),
    }
}
