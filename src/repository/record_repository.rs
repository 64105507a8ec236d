use rusqlite::Connection;

use crate::model::repository::DiscardRecord;

pub fn create_record(record: &DiscardRecord, con: &Connection) -> Result<u32, rusqlite::Error> {
    let mut pst = con.prepare(include_str!(
        "../assets/queries/records/create_record.sql"
    ))?;
    let id = pst.insert(rusqlite::params![
        record.owner,
        record.reason,
        record.comment,
        record.date,
        record.storage_path,
        record.mirror_file
    ])? as u32;
    Ok(id)
}

pub fn get_by_id(id: u32, con: &Connection) -> Result<DiscardRecord, rusqlite::Error> {
    let mut pst = con.prepare(include_str!(
        "../assets/queries/records/get_record_by_id.sql"
    ))?;
    pst.query_row([id], record_mapper)
}

/// all the records the passed owner has, newest first
pub fn get_by_owner(owner: &str, con: &Connection) -> Result<Vec<DiscardRecord>, rusqlite::Error> {
    let mut pst = con.prepare(include_str!(
        "../assets/queries/records/get_records_by_owner.sql"
    ))?;
    let rows = pst.query_map([owner], record_mapper)?;
    rows.collect()
}

/// every record in the database regardless of owner, newest first
pub fn get_all(con: &Connection) -> Result<Vec<DiscardRecord>, rusqlite::Error> {
    let mut pst = con.prepare(include_str!(
        "../assets/queries/records/get_all_records.sql"
    ))?;
    let rows = pst.query_map([], record_mapper)?;
    rows.collect()
}

/// writes the mutable fields of the passed record. `owner` and `date` are
/// deliberately not part of the statement, so they can never drift from the
/// values assigned at creation
pub fn update_record(record: &DiscardRecord, con: &Connection) -> Result<(), rusqlite::Error> {
    let mut pst = con.prepare(include_str!(
        "../assets/queries/records/update_record.sql"
    ))?;
    pst.execute(rusqlite::params![
        record.id,
        record.reason,
        record.comment,
        record.storage_path,
        record.mirror_file
    ])?;
    Ok(())
}

/// removes the record with the passed id from the database.
/// The removed record is returned so the caller can clean up its binary
pub fn delete_by_id(id: u32, con: &Connection) -> Result<DiscardRecord, rusqlite::Error> {
    let record = get_by_id(id, con)?;
    let mut pst = con.prepare(include_str!(
        "../assets/queries/records/delete_record_by_id.sql"
    ))?;
    pst.execute([id])?;
    Ok(record)
}

/// removes every record of the passed owner, returning how many rows went away
pub fn delete_by_owner(owner: &str, con: &Connection) -> Result<u32, rusqlite::Error> {
    let mut pst = con.prepare(include_str!(
        "../assets/queries/records/delete_records_by_owner.sql"
    ))?;
    let count = pst.execute([owner])?;
    Ok(count as u32)
}

pub fn count_by_owner(owner: &str, con: &Connection) -> Result<u32, rusqlite::Error> {
    let mut pst = con.prepare(include_str!(
        "../assets/queries/records/count_records_by_owner.sql"
    ))?;
    pst.query_row([owner], |row| row.get(0))
}

/// 1. id
/// 2. owner
/// 3. reason
/// 4. comment
/// 5. date
/// 6. storagePath
/// 7. mirrorFile
fn record_mapper(row: &rusqlite::Row) -> Result<DiscardRecord, rusqlite::Error> {
    Ok(DiscardRecord {
        id: row.get(0)?,
        owner: row.get(1)?,
        reason: row.get(2)?,
        comment: row.get(3)?,
        date: row.get(4)?,
        storage_path: row.get(5)?,
        mirror_file: row.get(6)?,
    })
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::repository::open_connection;
    use crate::test::{cleanup, refresh_db, test_record};

    #[test]
    fn get_by_owner_filters_and_orders() {
        refresh_db();
        let con = open_connection();
        let t1 = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        let t2 = NaiveDate::from_ymd_opt(2024, 1, 2)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        create_record(&test_record("A", "old mug", t1), &con).unwrap();
        create_record(&test_record("A", "worn shoes", t2), &con).unwrap();
        create_record(&test_record("B", "broken lamp", t1), &con).unwrap();
        let records = get_by_owner("A", &con).unwrap();
        con.close().unwrap();
        assert_eq!(2, records.len());
        assert_eq!("worn shoes", records[0].reason);
        assert_eq!("old mug", records[1].reason);
        cleanup();
    }

    #[test]
    fn update_record_preserves_date_and_owner() {
        refresh_db();
        let con = open_connection();
        let date = NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        let mut record = test_record("A", "old mug", date);
        record.id = Some(create_record(&record, &con).unwrap());
        record.reason = String::from("chipped mug");
        record.owner = String::from("B");
        update_record(&record, &con).unwrap();
        let stored = get_by_id(record.id.unwrap(), &con).unwrap();
        con.close().unwrap();
        assert_eq!("chipped mug", stored.reason);
        // the update statement can't touch these
        assert_eq!("A", stored.owner);
        assert_eq!(date, stored.date);
        cleanup();
    }

    #[test]
    fn delete_by_owner_returns_count() {
        refresh_db();
        let con = open_connection();
        let date = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        create_record(&test_record("A", "one", date), &con).unwrap();
        create_record(&test_record("A", "two", date), &con).unwrap();
        create_record(&test_record("B", "three", date), &con).unwrap();
        let count = delete_by_owner("A", &con).unwrap();
        let remaining = get_all(&con).unwrap();
        con.close().unwrap();
        assert_eq!(2, count);
        assert_eq!(1, remaining.len());
        assert_eq!("B", remaining[0].owner);
        cleanup();
    }
}
