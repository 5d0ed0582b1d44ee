use rocket::serde::json::Json;
use rocket::*;
use sqlx::Row;

mod request_error;
pub mod requests;
mod score;

pub use request_error::*;
pub use score::{Confirmation, Highscores, LeaderboardEntry, PlayerScore, ScoreData};

pub type DatabasePool = sqlx::any::AnyPool;

/// Creates the `scores` table if it is absent. Safe to run on every startup.
pub async fn init_db(database: &DatabasePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS scores ( \
             id INTEGER PRIMARY KEY AUTOINCREMENT, \
             player_name TEXT NOT NULL, \
             score BIGINT NOT NULL, \
             timestamp DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP \
         )",
    )
    .execute(database)
    .await?;

    Ok(())
}
