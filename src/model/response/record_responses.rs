use rocket::http::ContentType;
use rocket::serde::json::Json;

use crate::model::response::{BasicMessage, PurgeResultApi, RecordApi};

pub type NoContent = ();

#[derive(Responder)]
pub enum CreateRecordResponse {
    #[response(status = 201, content_type = "json")]
    Success(Json<RecordApi>),
    /// the form was submitted without a photo, or with one we can't decode
    #[response(status = 400, content_type = "json")]
    BadRequest(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    Failure(Json<BasicMessage>),
}

#[derive(Responder)]
pub enum GetRecordsResponse {
    #[response(status = 200, content_type = "json")]
    Success(Json<Vec<RecordApi>>),
    #[response(status = 500, content_type = "json")]
    Failure(Json<BasicMessage>),
}

#[derive(Responder)]
pub enum GetRecordResponse {
    #[response(status = 200, content_type = "json")]
    Success(Json<RecordApi>),
    #[response(status = 404, content_type = "json")]
    NotFound(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    Failure(Json<BasicMessage>),
}

#[derive(Responder)]
pub enum UpdateRecordResponse {
    #[response(status = 200, content_type = "json")]
    Success(Json<RecordApi>),
    #[response(status = 400, content_type = "json")]
    BadRequest(Json<BasicMessage>),
    #[response(status = 404, content_type = "json")]
    NotFound(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    Failure(Json<BasicMessage>),
}

#[derive(Responder)]
pub enum DeleteRecordResponse {
    #[response(status = 204)]
    Deleted(NoContent),
    #[response(status = 404, content_type = "json")]
    NotFound(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    Failure(Json<BasicMessage>),
}

#[derive(Responder)]
pub enum PurgeRecordsResponse {
    #[response(status = 200, content_type = "json")]
    Success(Json<PurgeResultApi>),
    /// the typed confirmation phrase didn't match; nothing was deleted
    #[response(status = 400, content_type = "json")]
    BadConfirmation(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    Failure(Json<BasicMessage>),
}

#[derive(Responder)]
pub enum DownloadPhotoResponse {
    #[response(status = 200)]
    Success((ContentType, Vec<u8>)),
    #[response(status = 404, content_type = "json")]
    NotFound(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    Failure(Json<BasicMessage>),
}
