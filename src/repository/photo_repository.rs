use rusqlite::Connection;

/// a photo binary pulled from the Photos table
pub struct PhotoRow {
    pub mime: String,
    pub bytes: Vec<u8>,
}

/// writes (or overwrites) the blob stored at the passed path
pub fn save_photo(
    path: &str,
    mime: &str,
    bytes: &[u8],
    con: &Connection,
) -> Result<(), rusqlite::Error> {
    let mut pst = con.prepare(include_str!("../assets/queries/photos/create_photo.sql"))?;
    pst.execute(rusqlite::params![path, mime, bytes])?;
    Ok(())
}

pub fn get_photo(path: &str, con: &Connection) -> Result<PhotoRow, rusqlite::Error> {
    let mut pst = con.prepare(include_str!(
        "../assets/queries/photos/get_photo_by_path.sql"
    ))?;
    pst.query_row([path], |row| {
        Ok(PhotoRow {
            mime: row.get(0)?,
            bytes: row.get(1)?,
        })
    })
}

pub fn delete_photo(path: &str, con: &Connection) -> Result<(), rusqlite::Error> {
    let mut pst = con.prepare(include_str!(
        "../assets/queries/photos/delete_photo_by_path.sql"
    ))?;
    pst.execute([path])?;
    Ok(())
}
