use chrono::NaiveDateTime;

/// one logged "item given up", as stored in the DiscardRecords table
#[derive(Debug, Clone, PartialEq)]
pub struct DiscardRecord {
    /// the id, will only be populated when pulled from the database
    pub id: Option<u32>,
    /// the profile name this record belongs to
    pub owner: String,
    pub reason: String,
    pub comment: String,
    /// set once at creation and preserved across edits
    pub date: NaiveDateTime,
    /// where the photo binary lives in the active object store, `<owner>/<file>.jpg`
    pub storage_path: String,
    /// file name of the best-effort mirror copy, if one was written
    pub mirror_file: Option<String>,
}
