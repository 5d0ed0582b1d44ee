use ::log::info;

use super::*;

/// Appends one score record for the player. Earlier records are kept as-is,
/// only a player's best ever shows up on the leaderboard.
#[post("/submit_score", format = "json", data = "<data>")]
pub async fn submit_score(
    data: Json<ScoreData>,
    database: &State<DatabasePool>,
) -> RequestResult<Json<Confirmation>> {
    let data = data.0;

    if data.player_name.is_empty() {
        return Err(RequestError::InvalidPlayerName);
    }

    // Insert score; id and timestamp are assigned by the store
    let mut transaction = database.begin().await?;
    sqlx::query("INSERT INTO scores (player_name, score) VALUES (?, ?)")
        .bind(&data.player_name)
        .bind(data.score)
        .execute(&mut transaction)
        .await?;
    transaction.commit().await?;

    info!("stored score {} for player '{}'", data.score, data.player_name);

    Ok(Json(Confirmation {
        message: format!("Score of {} saved for {}", data.score, data.player_name),
    }))
}

/// Fetches the top 10 unique players with their highest scores.
/// The timestamp reported per player is the latest among the records
/// attaining their maximum score.
#[get("/highscore", format = "json")]
pub async fn get_highscore(database: &State<DatabasePool>) -> RequestResult<Json<Highscores>> {
    let rows = sqlx::query(
        "SELECT grouped.player_name, grouped.max_score, MAX(scores.timestamp) \
         FROM scores \
         JOIN (SELECT player_name, MAX(score) AS max_score \
               FROM scores GROUP BY player_name) grouped \
         ON scores.player_name = grouped.player_name AND scores.score = grouped.max_score \
         GROUP BY grouped.player_name, grouped.max_score \
         ORDER BY grouped.max_score DESC \
         LIMIT 10",
    )
    .fetch_all(database.inner())
    .await?;

    // An empty board is reported as missing, not as an empty success
    if rows.is_empty() {
        return Err(RequestError::NoScores);
    }

    let mut top_10_scores = Vec::with_capacity(rows.len());
    for (place, row) in rows.iter().enumerate() {
        top_10_scores.push(LeaderboardEntry {
            rank: place + 1,
            player_name: row.try_get_unchecked(0)?,
            score: row.try_get_unchecked(1)?,
            timestamp: row.try_get_unchecked(2)?,
        });
    }

    Ok(Json(Highscores { top_10_scores }))
}

/// Deletes a player and every score they have submitted.
/// The name must match exactly, case included.
#[delete("/delete_player/<player_name>")]
pub async fn delete_player(
    player_name: &str,
    database: &State<DatabasePool>,
) -> RequestResult<Json<Confirmation>> {
    let mut transaction = database.begin().await?;

    // Check the player exists before attempting deletion
    let row = sqlx::query("SELECT COUNT(*) FROM scores WHERE player_name = ?")
        .bind(player_name)
        .fetch_one(&mut transaction)
        .await?;
    let records = row.try_get_unchecked::<i64, usize>(0)?;

    if records == 0 {
        return Err(RequestError::PlayerNotFound {
            player_name: player_name.to_owned(),
        });
    }

    sqlx::query("DELETE FROM scores WHERE player_name = ?")
        .bind(player_name)
        .execute(&mut transaction)
        .await?;
    transaction.commit().await?;

    info!("deleted {} records for player '{}'", records, player_name);

    Ok(Json(Confirmation {
        message: format!(
            "Player '{}' and all their scores have been deleted",
            player_name
        ),
    }))
}
