use rocket::serde::{Deserialize, Serialize};

pub type PlayerScore = i64;

/// A score submission for a single play session.
#[derive(Clone, Serialize, Deserialize, PartialEq, Debug)]
#[serde(crate = "rocket::serde")]
pub struct ScoreData {
    pub player_name: String,
    pub score: PlayerScore,
}

/// One leaderboard row: a player's best score and when they achieved it.
/// The timestamp is store-assigned, never client-supplied.
#[derive(Clone, Serialize, Deserialize, PartialEq, Debug)]
#[serde(crate = "rocket::serde")]
pub struct LeaderboardEntry {
    pub rank: usize,
    pub player_name: String,
    pub score: PlayerScore,
    pub timestamp: String,
}

#[derive(Clone, Serialize, Deserialize, PartialEq, Debug)]
#[serde(crate = "rocket::serde")]
pub struct Highscores {
    pub top_10_scores: Vec<LeaderboardEntry>,
}

/// Success payload echoing what an operation did.
#[derive(Clone, Serialize, Deserialize, PartialEq, Debug)]
#[serde(crate = "rocket::serde")]
pub struct Confirmation {
    pub message: String,
}
