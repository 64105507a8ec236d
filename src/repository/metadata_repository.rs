use rusqlite::Connection;

pub fn get_version(con: &Connection) -> Result<String, rusqlite::Error> {
    get_value("version", con)
}

/// reads a single value from the Metadata name/value table
pub fn get_value(name: &str, con: &Connection) -> Result<String, rusqlite::Error> {
    let mut pst = con.prepare(include_str!("../assets/queries/metadata/get_value.sql"))?;
    pst.query_row([name], |row| row.get(0))
}

/// writes (or overwrites) a single value in the Metadata name/value table
pub fn set_value(name: &str, value: &str, con: &Connection) -> Result<(), rusqlite::Error> {
    let mut pst = con.prepare(include_str!("../assets/queries/metadata/set_value.sql"))?;
    pst.execute([name, value])?;
    Ok(())
}
