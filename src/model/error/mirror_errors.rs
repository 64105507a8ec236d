#[derive(PartialEq, Debug)]
pub enum SetMirrorError {
    /// the path doesn't exist or isn't a directory
    NotADirectory,
    /// the directory exists but we aren't allowed to touch it
    PermissionDenied,
}
