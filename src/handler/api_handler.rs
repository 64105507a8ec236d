use rocket::serde::{json::Json, Serialize};

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct ApiVersion {
    version: String,
}

impl ApiVersion {
    fn new() -> ApiVersion {
        ApiVersion {
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

#[get("/version")]
pub fn api_version() -> Json<ApiVersion> {
    Json(ApiVersion::new())
}
