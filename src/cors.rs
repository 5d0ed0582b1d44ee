use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::Header;
use rocket::*;

/// Attaches permissive cross-origin headers to every response.
/// Origin restrictions are left to the reverse proxy in deployment.
pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "Permissive cross-origin headers",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new("Access-Control-Allow-Origin", "*"));
        response.set_header(Header::new(
            "Access-Control-Allow-Methods",
            "GET, POST, DELETE, OPTIONS",
        ));
        response.set_header(Header::new("Access-Control-Allow-Headers", "*"));
    }
}

/// Answers preflight requests for any path; the headers come from the fairing.
#[options("/<_..>")]
pub fn preflight() {}
