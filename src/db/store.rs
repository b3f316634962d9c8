//! Record store: owns the lifecycle of persisted analyses.
//!
//! Handlers never touch SQL directly. They go through `RecordStore`, which
//! the analysis service holds behind a trait object so tests can swap in a
//! store that fails on demand.

use std::path::{Path, PathBuf};

use super::repository;
use super::sqlite::open_database;
use super::DatabaseError;
use crate::models::{HeadacheRecord, NewRecord};

pub trait RecordStore: Send + Sync {
    /// Persist a record and return its store-assigned id.
    fn create(&self, record: &NewRecord) -> Result<i64, DatabaseError>;

    /// Every record, newest first.
    fn list_all(&self) -> Result<Vec<HeadacheRecord>, DatabaseError>;
}

/// SQLite-backed store. Opens one connection per operation so concurrent
/// requests never share a transaction.
pub struct SqliteRecordStore {
    path: PathBuf,
}

impl SqliteRecordStore {
    /// Create the store and run migrations eagerly so a broken path is
    /// reported at startup rather than on the first request.
    pub fn open(path: &Path) -> Result<Self, DatabaseError> {
        drop(open_database(path)?);
        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    /// Create the store without touching the file. Migrations run on the
    /// first operation instead.
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }
}

impl RecordStore for SqliteRecordStore {
    fn create(&self, record: &NewRecord) -> Result<i64, DatabaseError> {
        let mut conn = open_database(&self.path)?;
        // Dropping an uncommitted transaction rolls it back.
        let tx = conn.transaction()?;
        let id = repository::insert_record(&tx, record)?;
        tx.commit()?;
        tracing::debug!(record_id = id, "Headache record stored");
        Ok(id)
    }

    fn list_all(&self) -> Result<Vec<HeadacheRecord>, DatabaseError> {
        let conn = open_database(&self.path)?;
        repository::list_records(&conn)
    }
}
