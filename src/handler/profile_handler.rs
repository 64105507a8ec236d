use rocket::serde::json::Json;

use crate::model::error::profile_errors::{
    AddProfileError, DeleteProfileError, GetProfilesError, SelectProfileError,
};
use crate::model::request::ProfileName;
use crate::model::response::profile_responses::{
    AddProfileResponse, DeleteProfileResponse, GetProfilesResponse, SelectProfileResponse,
};
use crate::model::response::BasicMessage;
use crate::service::profile_service;

#[get("/")]
pub fn get_profiles() -> GetProfilesResponse {
    return match profile_service::get_profiles() {
        Ok(profiles) => GetProfilesResponse::Success(Json::from(profiles)),
        Err(GetProfilesError::DbError) => GetProfilesResponse::Failure(BasicMessage::new(
            "Failed to pull profiles from the database. Check server logs for details",
        )),
    };
}

/// adds a profile and selects it. Adding a name that already exists just
/// selects it
#[post("/", data = "<profile>")]
pub fn add_profile(profile: Json<ProfileName>) -> AddProfileResponse {
    return match profile_service::add_profile(&profile.name) {
        Ok(profiles) => AddProfileResponse::Success(Json::from(profiles)),
        Err(AddProfileError::EmptyName) => AddProfileResponse::BadRequest(BasicMessage::new(
            "A profile name can't be empty.",
        )),
        Err(AddProfileError::DbError) => AddProfileResponse::Failure(BasicMessage::new(
            "Failed to save the profile. Check server logs for details",
        )),
    };
}

#[put("/current", data = "<profile>")]
pub fn select_profile(profile: Json<ProfileName>) -> SelectProfileResponse {
    return match profile_service::select_profile(&profile.name) {
        Ok(profiles) => SelectProfileResponse::Success(Json::from(profiles)),
        Err(SelectProfileError::NotFound) => SelectProfileResponse::NotFound(BasicMessage::new(
            "The profile with the passed name could not be found.",
        )),
        Err(SelectProfileError::DbError) => SelectProfileResponse::Failure(BasicMessage::new(
            "Failed to select the profile. Check server logs for details",
        )),
    };
}

#[delete("/<name>")]
pub fn delete_profile(name: String) -> DeleteProfileResponse {
    return match profile_service::delete_profile(&name) {
        Ok(()) => DeleteProfileResponse::Deleted(()),
        Err(DeleteProfileError::CurrentProfile) => DeleteProfileResponse::Rejected(
            BasicMessage::new("The selected profile can't be deleted. Switch profiles first."),
        ),
        Err(DeleteProfileError::SeedProfile) => DeleteProfileResponse::Rejected(
            BasicMessage::new("The default profile can't be deleted."),
        ),
        Err(DeleteProfileError::NotFound) => DeleteProfileResponse::NotFound(BasicMessage::new(
            "The profile with the passed name could not be found.",
        )),
        Err(DeleteProfileError::PurgeFailed | DeleteProfileError::DbError) => {
            DeleteProfileResponse::Failure(BasicMessage::new(
                "Failed to delete the profile. Check server logs for details",
            ))
        }
    };
}
