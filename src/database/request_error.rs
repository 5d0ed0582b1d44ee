use log::error;
use rocket::http::Status;
use rocket::response::{self, Responder, Response};
use rocket::serde::json::Json;
use rocket::serde::Serialize;
use rocket::Request;

/// Everything that can fail while serving a request.
#[derive(Debug)]
pub enum RequestError {
    InvalidPlayerName,
    NoScores,
    PlayerNotFound { player_name: String },
    Storage(sqlx::Error),
}

impl std::error::Error for RequestError {}

impl std::fmt::Display for RequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPlayerName => write!(f, "player_name must be a non-empty string"),
            Self::NoScores => write!(f, "No scores found."),
            Self::PlayerNotFound { player_name } => {
                write!(f, "Player '{}' not found in database.", player_name)
            }
            Self::Storage(error) => write!(f, "storage failure: {}", error),
        }
    }
}

impl From<sqlx::Error> for RequestError {
    fn from(error: sqlx::Error) -> Self {
        Self::Storage(error)
    }
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
struct ErrorDetail {
    detail: String,
}

impl<'r> Responder<'r, 'static> for RequestError {
    fn respond_to(self, request: &'r Request<'_>) -> response::Result<'static> {
        let (status, detail) = match &self {
            Self::InvalidPlayerName => (Status::UnprocessableEntity, self.to_string()),
            Self::NoScores | Self::PlayerNotFound { .. } => (Status::NotFound, self.to_string()),
            Self::Storage(error) => {
                // Driver internals stay out of the response body
                error!("storage failure: {}", error);
                (Status::InternalServerError, "Internal storage error.".to_owned())
            }
        };

        Response::build_from(Json(ErrorDetail { detail }).respond_to(request)?)
            .status(status)
            .ok()
    }
}

pub type RequestResult<T> = std::result::Result<T, RequestError>;
