use chrono::NaiveDateTime;
use rocket::serde::json::Json;
use rocket::serde::{Deserialize, Serialize};

use crate::model::repository::DiscardRecord;

pub mod profile_responses;
pub mod record_responses;
pub mod settings_responses;

/// represents a basic json message
#[derive(Responder, Serialize, Deserialize, Debug, PartialEq)]
#[serde(crate = "rocket::serde")]
pub struct BasicMessage {
    pub message: String,
}

impl BasicMessage {
    pub fn new(message: &str) -> Json<BasicMessage> {
        Json::from(BasicMessage {
            message: message.to_string(),
        })
    }
}

/// this is the same shape no matter if it's a request or a response; on the
/// way in `image` is a `data:` URI, on the way out it's a resolvable
/// `/photos/...` reference (or an inline data URI for the detail view)
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
#[serde(crate = "rocket::serde")]
pub struct RecordApi {
    /// will be None if new
    pub id: Option<u32>,
    /// falls back to the current profile when omitted on create
    pub owner: Option<String>,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub comment: String,
    /// assigned at create when omitted; never changed by an edit
    pub date: Option<NaiveDateTime>,
    pub image: String,
}

impl From<DiscardRecord> for RecordApi {
    fn from(value: DiscardRecord) -> Self {
        RecordApi {
            id: value.id,
            owner: Some(value.owner),
            reason: value.reason,
            comment: value.comment,
            date: Some(value.date),
            image: format!("/photos/{}", value.storage_path),
        }
    }
}

/// a single profile entry with how many records it owns
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
#[serde(crate = "rocket::serde")]
pub struct ProfileApi {
    pub name: String,
    pub records: u32,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[serde(crate = "rocket::serde")]
pub struct ProfilesApi {
    pub current: String,
    pub profiles: Vec<ProfileApi>,
}

/// how many records a purge removed
#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[serde(crate = "rocket::serde")]
pub struct PurgeResultApi {
    pub count: u32,
}

/// the session mirror directory, if one has been granted
#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[serde(crate = "rocket::serde")]
pub struct MirrorApi {
    pub path: Option<String>,
}
