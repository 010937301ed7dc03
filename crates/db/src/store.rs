//! Generic keyed-record persistence backed by one JSON file per collection.
//!
//! A [`RecordStore`] owns an ordered in-memory collection and its backing
//! file `<dir>/<name>.json`. Every mutation rewrites the whole file as a
//! pretty-printed JSON array. Save failures are logged and swallowed: the
//! in-memory state stays authoritative for the running process and callers
//! still receive the mutated record.
//!
//! Mutations hold the write lock across read-modify-write and the file save,
//! so concurrent requests in one process observe each other's changes. Two
//! processes pointed at the same file still race (last writer wins).

use std::cmp::Ordering;
use std::fmt;
use std::path::{Path, PathBuf};

use folio_core::error::CoreError;
use folio_core::types::NumericId;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::RwLock;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Failure reading or writing a collection file.
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

// ---------------------------------------------------------------------------
// Record traits
// ---------------------------------------------------------------------------

/// An id type together with its generation policy.
pub trait RecordId:
    Clone + PartialEq + fmt::Display + fmt::Debug + Send + Sync + 'static
{
    /// Produce an id not present among `existing`.
    fn next_id<'a, I>(existing: I) -> Self
    where
        I: Iterator<Item = &'a Self>,
        Self: 'a;
}

/// Numeric ids count up from the current maximum, starting at 1.
impl RecordId for NumericId {
    fn next_id<'a, I>(existing: I) -> Self
    where
        I: Iterator<Item = &'a Self>,
        Self: 'a,
    {
        existing.copied().max().map_or(1, |max| max + 1)
    }
}

/// String ids are the current Unix time in milliseconds.
///
/// When the clock has not advanced past the largest numeric id already
/// issued (two creates in the same millisecond, or a clock step backwards),
/// that id plus one is used so ids stay unique and increasing.
impl RecordId for String {
    fn next_id<'a, I>(existing: I) -> Self
    where
        I: Iterator<Item = &'a Self>,
        Self: 'a,
    {
        let now = chrono::Utc::now().timestamp_millis();
        let max = existing.filter_map(|id| id.parse::<i64>().ok()).max();
        match max {
            Some(max) if max >= now => (max + 1).to_string(),
            _ => now.to_string(),
        }
    }
}

/// A value that can live in a [`RecordStore`].
pub trait Record: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    type Id: RecordId;
    /// Input accepted by [`RecordStore::create`]; everything but the id.
    type Draft: Send;

    /// Entity name used in logs and not-found errors.
    const ENTITY: &'static str;

    fn id(&self) -> &Self::Id;
    fn set_id(&mut self, id: Self::Id);
    fn from_draft(id: Self::Id, draft: Self::Draft) -> Self;
}

// ---------------------------------------------------------------------------
// Store
// ---------------------------------------------------------------------------

/// Ordered collection of `T` persisted to a single JSON file.
pub struct RecordStore<T: Record> {
    path: PathBuf,
    records: RwLock<Vec<T>>,
}

impl<T: Record> RecordStore<T> {
    /// Open (or initialise) the collection `name` inside `dir`.
    ///
    /// A missing file adopts `defaults` and writes them out. An unreadable or
    /// malformed file is logged, replaced by `defaults`, and overwritten.
    pub async fn open(dir: &Path, name: &str, defaults: Vec<T>) -> Self {
        crate::ensure_data_dir(dir).await;
        let path = dir.join(format!("{name}.json"));

        let records = match load_file::<T>(&path).await {
            Ok(Some(records)) => {
                tracing::debug!(path = %path.display(), count = records.len(), "Loaded collection");
                records
            }
            Ok(None) => {
                tracing::info!(path = %path.display(), count = defaults.len(), "Collection file missing, writing defaults");
                log_save_failure(save_file(&path, &defaults).await);
                defaults
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to load collection, falling back to defaults");
                log_save_failure(save_file(&path, &defaults).await);
                defaults
            }
        };

        Self {
            path,
            records: RwLock::new(records),
        }
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }

    /// Snapshot of every record in insertion order.
    pub async fn get_all(&self) -> Vec<T> {
        self.records.read().await.clone()
    }

    pub async fn get_by_id(&self, id: &T::Id) -> Option<T> {
        self.records
            .read()
            .await
            .iter()
            .find(|r| r.id() == id)
            .cloned()
    }

    /// Records matching `predicate`, in insertion order.
    pub async fn filter<P>(&self, predicate: P) -> Vec<T>
    where
        P: Fn(&T) -> bool,
    {
        self.records
            .read()
            .await
            .iter()
            .filter(|r| predicate(r))
            .cloned()
            .collect()
    }

    /// Snapshot sorted with `compare`. The stored order is untouched.
    pub async fn sorted_by<F>(&self, compare: F) -> Vec<T>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let mut snapshot = self.get_all().await;
        snapshot.sort_by(compare);
        snapshot
    }

    /// Assign a fresh id to `draft`, append it, and persist.
    pub async fn create(&self, draft: T::Draft) -> T {
        let mut records = self.records.write().await;
        let id = T::Id::next_id(records.iter().map(|r| r.id()));
        let record = T::from_draft(id, draft);
        records.push(record.clone());
        self.persist(&records).await;
        tracing::debug!(entity = T::ENTITY, id = %record.id(), "Record created");
        record
    }

    /// Like [`create`](Self::create), but first runs `check` over the current
    /// records while holding the same write lock.
    pub async fn create_checked<C>(&self, draft: T::Draft, check: C) -> Result<T, CoreError>
    where
        C: FnOnce(&[T]) -> Result<(), CoreError>,
    {
        let mut records = self.records.write().await;
        check(&records)?;
        let id = T::Id::next_id(records.iter().map(|r| r.id()));
        let record = T::from_draft(id, draft);
        records.push(record.clone());
        self.persist(&records).await;
        Ok(record)
    }

    /// Append a record whose id was chosen by the caller.
    pub async fn insert(&self, record: T) -> Result<T, CoreError> {
        let mut records = self.records.write().await;
        if records.iter().any(|r| r.id() == record.id()) {
            return Err(CoreError::Conflict(format!(
                "{} with id {} already exists",
                T::ENTITY,
                record.id()
            )));
        }
        records.push(record.clone());
        self.persist(&records).await;
        Ok(record)
    }

    /// Apply `patch` to the record with `id` and persist.
    ///
    /// Returns `None` when no such record exists. The record's id is
    /// restored if `patch` changed it.
    pub async fn update<F>(&self, id: &T::Id, patch: F) -> Option<T>
    where
        F: FnOnce(&mut T),
    {
        let mut records = self.records.write().await;
        let record = records.iter_mut().find(|r| r.id() == id)?;
        patch(record);
        if record.id() != id {
            record.set_id(id.clone());
        }
        let updated = record.clone();
        self.persist(&records).await;
        Some(updated)
    }

    /// Remove the record with `id`. Returns `false` when absent.
    pub async fn delete(&self, id: &T::Id) -> bool {
        let mut records = self.records.write().await;
        let Some(index) = records.iter().position(|r| r.id() == id) else {
            return false;
        };
        records.remove(index);
        self.persist(&records).await;
        true
    }

    /// Write the current collection to disk, surfacing any failure.
    pub async fn flush(&self) -> Result<(), PersistenceError> {
        let records = self.records.read().await;
        save_file(&self.path, &records).await
    }

    async fn persist(&self, records: &[T]) {
        log_save_failure(save_file(&self.path, records).await);
    }
}

fn log_save_failure(result: Result<(), PersistenceError>) {
    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to persist collection; in-memory state kept");
    }
}

/// Read a collection file. `Ok(None)` means the file does not exist.
async fn load_file<T: DeserializeOwned>(path: &Path) -> Result<Option<Vec<T>>, PersistenceError> {
    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(PersistenceError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    serde_json::from_slice(&bytes)
        .map(Some)
        .map_err(|source| PersistenceError::Json {
            path: path.to_path_buf(),
            source,
        })
}

async fn save_file<T: Serialize>(path: &Path, records: &[T]) -> Result<(), PersistenceError> {
    let rendered =
        serde_json::to_string_pretty(records).map_err(|source| PersistenceError::Json {
            path: path.to_path_buf(),
            source,
        })?;
    tokio::fs::write(path, rendered)
        .await
        .map_err(|source| PersistenceError::Io {
            path: path.to_path_buf(),
            source,
        })
}
