use rocket::serde::json::Json;

use crate::model::response::{BasicMessage, ProfilesApi};

type NoContent = ();

#[derive(Responder)]
pub enum GetProfilesResponse {
    #[response(status = 200, content_type = "json")]
    Success(Json<ProfilesApi>),
    #[response(status = 500, content_type = "json")]
    Failure(Json<BasicMessage>),
}

#[derive(Responder)]
pub enum AddProfileResponse {
    #[response(status = 201, content_type = "json")]
    Success(Json<ProfilesApi>),
    #[response(status = 400, content_type = "json")]
    BadRequest(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    Failure(Json<BasicMessage>),
}

#[derive(Responder)]
pub enum SelectProfileResponse {
    #[response(status = 200, content_type = "json")]
    Success(Json<ProfilesApi>),
    #[response(status = 404, content_type = "json")]
    NotFound(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    Failure(Json<BasicMessage>),
}

#[derive(Responder)]
pub enum DeleteProfileResponse {
    #[response(status = 204)]
    Deleted(NoContent),
    /// the current and the seed profile can never be removed
    #[response(status = 409, content_type = "json")]
    Rejected(Json<BasicMessage>),
    #[response(status = 404, content_type = "json")]
    NotFound(Json<BasicMessage>),
    #[response(status = 500, content_type = "json")]
    Failure(Json<BasicMessage>),
}
