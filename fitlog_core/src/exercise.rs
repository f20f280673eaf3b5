//! Append-only exercise logging.
//!
//! Entries are appended to a user's record and persisted through the
//! credential store (whole-file read-modify-write). There is no update or
//! delete; the log only grows, and `entries()` always returns insertion
//! order.

use crate::{Error, ExerciseEntry, Result, Session, UserRecord, UserStore};
use std::path::{Path, PathBuf};

/// Reject entries with an empty name or a non-positive/non-finite weight.
///
/// The image reference is opaque and accepted verbatim; whether it points
/// at a readable file is the presentation layer's problem.
pub fn validate_entry(entry: &ExerciseEntry) -> Result<()> {
    if entry.name.trim().is_empty() {
        return Err(Error::Validation("Exercise name is required".into()));
    }
    if !entry.weight.is_finite() || entry.weight <= 0.0 {
        return Err(Error::Validation(
            "Weight must be a positive finite number".into(),
        ));
    }
    Ok(())
}

impl UserRecord {
    /// Return a copy of this record with `entry` appended to the log
    pub fn append_entry(&self, entry: ExerciseEntry) -> Result<UserRecord> {
        validate_entry(&entry)?;
        let mut record = self.clone();
        record.exercise_data.push(entry);
        Ok(record)
    }
}

/// Persistent exercise log for authenticated users
#[derive(Clone, Debug)]
pub struct ExerciseLog {
    store_path: PathBuf,
}

impl ExerciseLog {
    pub fn new(store_path: impl Into<PathBuf>) -> Self {
        Self {
            store_path: store_path.into(),
        }
    }

    pub fn store_path(&self) -> &Path {
        &self.store_path
    }

    /// Validate and append an entry for the session's user, then persist.
    ///
    /// The session record is refreshed with the stored state so callers see
    /// the appended entry immediately. Fails with `InvalidCredentials` if
    /// the user no longer exists in the store.
    pub fn append(&self, session: &mut Session, entry: ExerciseEntry) -> Result<()> {
        validate_entry(&entry)?;

        let (mut store, _warning) = UserStore::load_or_empty(&self.store_path)?;

        let record = store
            .get_mut(&session.username)
            .ok_or(Error::InvalidCredentials)?;
        record.exercise_data.push(entry);

        let updated = record.clone();
        store.save(&self.store_path)?;

        tracing::info!(
            "Logged exercise #{} for '{}'",
            updated.exercise_data.len(),
            session.username
        );
        session.record = updated;
        Ok(())
    }

    /// Entries for the session's user, oldest first
    pub fn list<'a>(&self, session: &'a Session) -> &'a [ExerciseEntry] {
        session.record.entries()
    }
}
