use rocket::serde::Deserialize;

/// names a profile for add / select / delete style requests
#[derive(Deserialize, Debug)]
#[serde(crate = "rocket::serde")]
pub struct ProfileName {
    pub name: String,
}

/// bulk removal of every record a profile owns. `confirmation` has to be the
/// exact typed phrase or nothing is deleted
#[derive(Deserialize, Debug)]
#[serde(crate = "rocket::serde")]
pub struct PurgeRequest {
    pub owner: String,
    #[serde(default)]
    pub confirmation: String,
}

/// points the session mirror at a local directory
#[derive(Deserialize, Debug)]
#[serde(crate = "rocket::serde")]
pub struct MirrorRequest {
    pub path: String,
}
