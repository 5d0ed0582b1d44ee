use rocket::serde::json::{json, Value};
use rocket::*;

mod cors;
mod database;

use database::DatabasePool;

#[launch]
async fn rocket() -> _ {
    // Connect to a database
    dotenv::dotenv().ok();
    let database_url =
        dotenv::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://scores.db?mode=rwc".to_owned());

    let database_pool = DatabasePool::connect(&database_url)
        .await
        .expect("failed to connect to a database");

    // Prepare the schema before accepting requests
    database::init_db(&database_pool)
        .await
        .expect("failed to initialize the scores table");

    build_rocket(database_pool)
}

fn build_rocket(database_pool: DatabasePool) -> Rocket<Build> {
    rocket::build()
        .mount(
            "/",
            routes![
                index,
                cors::preflight,
                database::requests::submit_score,
                database::requests::get_highscore,
                database::requests::delete_player
            ],
        )
        .register("/", catchers![not_found, unprocessable])
        .manage::<DatabasePool>(database_pool)
        .attach(cors::Cors)
}

#[get("/")]
fn index() -> Value {
    json!({
        "message": "Score store service is running",
        "usage": {
            "POST /submit_score": { "player_name": "Deepak", "score": 450 },
            "GET /highscore": "Returns top 10 unique players with their highest scores",
            "DELETE /delete_player/{player_name}": "Deletes a player and all their scores"
        }
    })
}

#[catch(404)]
fn not_found() -> Value {
    json!({ "detail": "Resource not found." })
}

#[catch(422)]
fn unprocessable() -> Value {
    json!({ "detail": "Malformed request body." })
}
