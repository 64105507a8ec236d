#[derive(PartialEq, Debug)]
pub enum CreateRecordError {
    /// the submission carried no inline photo; nothing was persisted
    MissingImage,
    /// a data URI was present but could not be decoded
    InvalidImage,
    /// the photo binary could not be written to the object store
    FailWriteBlob,
    /// generic database error
    DbError,
}

#[derive(PartialEq, Debug)]
pub enum GetRecordsError {
    DbError,
}

#[derive(PartialEq, Debug)]
pub enum GetRecordError {
    /// record not found in the repository
    NotFound,
    DbError,
}

#[derive(PartialEq, Debug)]
pub enum UpdateRecordError {
    NotFound,
    /// a replacement data URI was present but could not be decoded
    InvalidImage,
    /// the replacement binary could not be written
    FailWriteBlob,
    DbError,
}

#[derive(PartialEq, Debug)]
pub enum DeleteRecordError {
    NotFound,
    DbError,
}

#[derive(PartialEq, Debug)]
pub enum PurgeRecordsError {
    DbError,
}
