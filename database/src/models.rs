use sqlx::{sqlite::SqliteRow, Row};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Song {
    pub id: Option<i64>,
    pub name: String,
    pub length: i64,
}

impl Song {
    pub fn new(name: impl Into<String>, length: i64) -> Self {
        Self {
            id: None,
            name: name.into(),
            length,
        }
    }

    // columns must be (id, name, length), in table order
    pub fn new_from_db(row: &SqliteRow) -> Result<Self, sqlx::Error> {
        if row.len() != 3 {
            return Err(sqlx::Error::Decode(
                format!("expected a 3 column songs row, got {} columns", row.len()).into(),
            ));
        }

        Ok(Self {
            id: Some(row.try_get(0)?),
            name: row.try_get(1)?,
            length: row.try_get(2)?,
        })
    }
}
