use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::{params, Connection};

use crate::db::DatabaseError;
use crate::models::{HeadacheRecord, NewRecord};

/// Fixed-width RFC 3339 so lexicographic order in SQLite equals time order.
fn timestamp_column(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub fn insert_record(conn: &Connection, record: &NewRecord) -> Result<i64, DatabaseError> {
    let recommendations = serde_json::to_string(&record.recommendations).map_err(|e| {
        DatabaseError::CorruptColumn {
            column: "recommendations",
            reason: e.to_string(),
        }
    })?;

    conn.execute(
        "INSERT INTO headache_records (symptoms, diagnosis, recommendations, created_at, used_fallback)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            record.symptoms,
            record.diagnosis,
            recommendations,
            timestamp_column(&record.created_at),
            record.used_fallback as i32,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// All records, newest first. Equal timestamps fall back to id order.
pub fn list_records(conn: &Connection) -> Result<Vec<HeadacheRecord>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, symptoms, diagnosis, recommendations, created_at, used_fallback
         FROM headache_records ORDER BY created_at DESC, id DESC",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok((
            row.get::<_, i64>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, String>(2)?,
            row.get::<_, String>(3)?,
            row.get::<_, String>(4)?,
            row.get::<_, i32>(5)?,
        ))
    })?;

    let mut records = Vec::new();
    for row in rows {
        let (id, symptoms, diagnosis, recommendations, created_at, used_fallback) = row?;
        records.push(HeadacheRecord {
            id,
            symptoms,
            diagnosis,
            recommendations: serde_json::from_str(&recommendations).map_err(|e| {
                DatabaseError::CorruptColumn {
                    column: "recommendations",
                    reason: e.to_string(),
                }
            })?,
            created_at: DateTime::parse_from_rfc3339(&created_at)
                .map_err(|e| DatabaseError::CorruptColumn {
                    column: "created_at",
                    reason: e.to_string(),
                })?
                .with_timezone(&Utc),
            used_fallback: used_fallback != 0,
        });
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};

    use super::*;
    use crate::db::sqlite::open_memory_database;

    fn make_record(symptoms: &str, created_at: DateTime<Utc>) -> NewRecord {
        NewRecord {
            symptoms: symptoms.into(),
            diagnosis: "Possible tension headache.".into(),
            recommendations: vec!["Rest".into(), "Hydrate".into()],
            created_at,
            used_fallback: true,
        }
    }

    #[test]
    fn insert_and_list_preserves_fields() {
        let conn = open_memory_database().unwrap();
        let ts = Utc.with_ymd_and_hms(2026, 3, 1, 9, 30, 0).unwrap();
        let id = insert_record(&conn, &make_record("tight band", ts)).unwrap();

        let records = list_records(&conn).unwrap();
        assert_eq!(records.len(), 1);
        let rec = &records[0];
        assert_eq!(rec.id, id);
        assert_eq!(rec.symptoms, "tight band");
        assert_eq!(rec.recommendations, vec!["Rest".to_string(), "Hydrate".to_string()]);
        assert_eq!(rec.created_at, ts);
        assert!(rec.used_fallback);
    }

    #[test]
    fn ids_are_monotonic() {
        let conn = open_memory_database().unwrap();
        let now = Utc::now();
        let a = insert_record(&conn, &make_record("a", now)).unwrap();
        let b = insert_record(&conn, &make_record("b", now)).unwrap();
        assert!(b > a);
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let conn = open_memory_database().unwrap();
        let now = Utc::now();
        let a = insert_record(&conn, &make_record("a", now)).unwrap();
        conn.execute("DELETE FROM headache_records WHERE id = ?1", [a]).unwrap();
        let b = insert_record(&conn, &make_record("b", now)).unwrap();
        assert!(b > a);
    }

    #[test]
    fn list_is_newest_first_regardless_of_insert_order() {
        let conn = open_memory_database().unwrap();
        let base = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        insert_record(&conn, &make_record("middle", base + Duration::hours(1))).unwrap();
        insert_record(&conn, &make_record("oldest", base)).unwrap();
        insert_record(&conn, &make_record("newest", base + Duration::hours(2))).unwrap();

        let order: Vec<String> = list_records(&conn)
            .unwrap()
            .into_iter()
            .map(|r| r.symptoms)
            .collect();
        assert_eq!(order, vec!["newest", "middle", "oldest"]);
    }

    #[test]
    fn sub_second_timestamps_order_correctly() {
        let conn = open_memory_database().unwrap();
        let base = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        insert_record(&conn, &make_record("later", base + Duration::microseconds(250))).unwrap();
        insert_record(&conn, &make_record("earlier", base)).unwrap();

        let records = list_records(&conn).unwrap();
        assert_eq!(records[0].symptoms, "later");
        assert!(records[0].created_at > records[1].created_at);
    }

    #[test]
    fn corrupt_recommendations_column_is_reported() {
        let conn = open_memory_database().unwrap();
        conn.execute(
            "INSERT INTO headache_records (symptoms, diagnosis, recommendations, created_at, used_fallback)
             VALUES ('x', 'y', 'not json', '2026-01-01T00:00:00.000000Z', 0)",
            [],
        )
        .unwrap();
        let err = list_records(&conn).unwrap_err();
        assert!(matches!(
            err,
            DatabaseError::CorruptColumn { column: "recommendations", .. }
        ));
    }
}
