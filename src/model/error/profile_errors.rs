#[derive(PartialEq, Debug)]
pub enum GetProfilesError {
    DbError,
}

#[derive(PartialEq, Debug)]
pub enum AddProfileError {
    /// a profile name has to be non-empty after trimming
    EmptyName,
    DbError,
}

#[derive(PartialEq, Debug)]
pub enum SelectProfileError {
    NotFound,
    DbError,
}

#[derive(PartialEq, Debug)]
pub enum DeleteProfileError {
    /// the currently selected profile can't be removed
    CurrentProfile,
    /// the seed profile always exists
    SeedProfile,
    NotFound,
    /// the record cascade failed; the profile list was left untouched
    PurgeFailed,
    DbError,
}
