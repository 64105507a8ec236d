#[derive(PartialEq, Debug)]
pub enum ExportError {
    /// there is nothing to export
    NoPhotos,
    DbError,
    /// building the archive itself failed
    ArchiveError,
}
