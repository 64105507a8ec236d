use rocket::serde::json::Json;
use rocket::State;

use crate::model::error::record_errors::{
    CreateRecordError, DeleteRecordError, GetRecordError, GetRecordsError, PurgeRecordsError,
    UpdateRecordError,
};
use crate::model::request::PurgeRequest;
use crate::model::response::record_responses::{
    CreateRecordResponse, DeleteRecordResponse, GetRecordResponse, GetRecordsResponse,
    PurgeRecordsResponse, UpdateRecordResponse,
};
use crate::model::response::{BasicMessage, PurgeResultApi, RecordApi};
use crate::service::mirror_service::MirrorState;
use crate::service::record_service;

#[post("/", data = "<record>")]
pub fn create_record(record: Json<RecordApi>, mirror: &State<MirrorState>) -> CreateRecordResponse {
    return match record_service::create_record(record.into_inner(), mirror.root().as_deref()) {
        Ok(created) => CreateRecordResponse::Success(Json::from(created)),
        Err(CreateRecordError::MissingImage) => CreateRecordResponse::BadRequest(
            BasicMessage::new("A record needs a photo. Submit the image as a data uri."),
        ),
        Err(CreateRecordError::InvalidImage) => CreateRecordResponse::BadRequest(
            BasicMessage::new("The submitted image could not be decoded."),
        ),
        Err(CreateRecordError::FailWriteBlob) => CreateRecordResponse::Failure(BasicMessage::new(
            "Failed to save the photo. Check server logs for details",
        )),
        Err(CreateRecordError::DbError) => CreateRecordResponse::Failure(BasicMessage::new(
            "Failed to save record info to the database. Check server logs for details",
        )),
    };
}

#[get("/?<owner>")]
pub fn get_records(owner: Option<String>) -> GetRecordsResponse {
    return match record_service::get_records(owner) {
        Ok(records) => GetRecordsResponse::Success(Json::from(records)),
        Err(GetRecordsError::DbError) => GetRecordsResponse::Failure(BasicMessage::new(
            "Failed to pull records from the database. Check server logs for details",
        )),
    };
}

#[get("/<id>")]
pub fn get_record(id: u32) -> GetRecordResponse {
    return match record_service::get_record_detail(id) {
        Ok(record) => GetRecordResponse::Success(Json::from(record)),
        Err(GetRecordError::NotFound) => GetRecordResponse::NotFound(BasicMessage::new(
            "The record with the passed id could not be found.",
        )),
        Err(GetRecordError::DbError) => GetRecordResponse::Failure(BasicMessage::new(
            "Failed to pull record info from the database. Check server logs for details",
        )),
    };
}

#[put("/<id>", data = "<record>")]
pub fn update_record(id: u32, record: Json<RecordApi>) -> UpdateRecordResponse {
    return match record_service::update_record(id, record.into_inner()) {
        Ok(updated) => UpdateRecordResponse::Success(Json::from(updated)),
        Err(UpdateRecordError::NotFound) => UpdateRecordResponse::NotFound(BasicMessage::new(
            "The record with the passed id could not be found.",
        )),
        Err(UpdateRecordError::InvalidImage) => UpdateRecordResponse::BadRequest(
            BasicMessage::new("The replacement image could not be decoded."),
        ),
        Err(UpdateRecordError::FailWriteBlob) => UpdateRecordResponse::Failure(BasicMessage::new(
            "Failed to save the replacement photo. Check server logs for details",
        )),
        Err(UpdateRecordError::DbError) => UpdateRecordResponse::Failure(BasicMessage::new(
            "Failed to update record info in the database. Check server logs for details",
        )),
    };
}

#[delete("/<id>")]
pub fn delete_record(id: u32, mirror: &State<MirrorState>) -> DeleteRecordResponse {
    return match record_service::delete_record(id, mirror.root().as_deref()) {
        Ok(()) => DeleteRecordResponse::Deleted(()),
        Err(DeleteRecordError::NotFound) => DeleteRecordResponse::NotFound(BasicMessage::new(
            "The record with the passed id could not be found.",
        )),
        Err(DeleteRecordError::DbError) => DeleteRecordResponse::Failure(BasicMessage::new(
            "Failed to delete the record. Check server logs for details",
        )),
    };
}

#[post("/purge", data = "<request>")]
pub fn purge_records(request: Json<PurgeRequest>) -> PurgeRecordsResponse {
    let request = request.into_inner();
    if request.confirmation != record_service::PURGE_CONFIRMATION {
        return PurgeRecordsResponse::BadConfirmation(BasicMessage::new(
            "The confirmation phrase did not match. Nothing was deleted.",
        ));
    }
    return match record_service::purge_records(&request.owner) {
        Ok(count) => PurgeRecordsResponse::Success(Json::from(PurgeResultApi { count })),
        Err(PurgeRecordsError::DbError) => PurgeRecordsResponse::Failure(BasicMessage::new(
            "Failed to purge records. Check server logs for details",
        )),
    };
}
