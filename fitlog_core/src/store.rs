//! Credential store persistence with file locking.
//!
//! The store is a single JSON document mapping username to user record.
//! Every mutation is a whole-file read-modify-write; saves go through a
//! locked temp file and an atomic rename. There is no cross-process
//! coordination between the read and the write, so concurrent writers can
//! lose updates (last writer wins) — acceptable for a single local user.

use crate::{Error, Result, UserRecord};
use fs2::FileExt;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// In-memory image of the persisted user store.
///
/// Backed by a `BTreeMap` so serialization order is deterministic and
/// saving a just-loaded store reproduces the file byte for byte.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserStore {
    users: BTreeMap<String, UserRecord>,
}

impl UserStore {
    /// Load the store from a file with shared locking.
    ///
    /// A missing file is an empty store. An unreadable file is an IO error.
    /// An unparsable file is `StoreCorrupt`; see [`UserStore::load_or_empty`]
    /// for the recovering variant.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::info!("No user store found at {:?}, starting empty", path);
            return Ok(Self::default());
        }

        let file = File::open(path)?;

        // Shared lock for reading
        file.lock_shared()?;

        let mut contents = String::new();
        let read_result = {
            let mut reader = std::io::BufReader::new(&file);
            reader.read_to_string(&mut contents)
        };
        file.unlock()?;
        read_result?;

        match serde_json::from_str::<BTreeMap<String, UserRecord>>(&contents) {
            Ok(users) => {
                tracing::debug!("Loaded {} user(s) from {:?}", users.len(), path);
                Ok(Self { users })
            }
            Err(e) => Err(Error::StoreCorrupt {
                path: path.to_path_buf(),
                detail: e.to_string(),
            }),
        }
    }

    /// Load the store, falling back to an empty store on corruption.
    ///
    /// The corruption error is returned alongside the store so callers can
    /// surface it; the next save overwrites the damaged file (documented,
    /// lossy). IO errors still propagate.
    pub fn load_or_empty(path: &Path) -> Result<(Self, Option<Error>)> {
        match Self::load(path) {
            Ok(store) => Ok((store, None)),
            Err(e @ Error::StoreCorrupt { .. }) => {
                tracing::warn!("{}. Treating store as empty; next save will overwrite it.", e);
                Ok((Self::default(), Some(e)))
            }
            Err(e) => Err(e),
        }
    }

    /// Save the store to a file with exclusive locking.
    ///
    /// Whole-file rewrite:
    /// 1. Write compact JSON to a temp file in the same directory
    /// 2. Sync to disk
    /// 3. Rename over the original
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let temp = NamedTempFile::new_in(path.parent().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::Other, "store path missing parent")
        })?)?;

        temp.as_file().lock_exclusive()?;

        {
            let mut writer = std::io::BufWriter::new(temp.as_file());
            let contents = serde_json::to_string(&self.users)?;
            writer.write_all(contents.as_bytes())?;
            writer.flush()?;
        }

        temp.as_file().sync_all()?;
        temp.as_file().unlock()?;

        temp.persist(path).map_err(|e| Error::Io(e.error))?;

        tracing::debug!("Saved {} user(s) to {:?}", self.users.len(), path);
        Ok(())
    }

    pub fn contains(&self, username: &str) -> bool {
        self.users.contains_key(username)
    }

    pub fn get(&self, username: &str) -> Option<&UserRecord> {
        self.users.get(username)
    }

    pub fn get_mut(&mut self, username: &str) -> Option<&mut UserRecord> {
        self.users.get_mut(username)
    }

    pub fn insert(&mut self, username: impl Into<String>, record: UserRecord) {
        self.users.insert(username.into(), record);
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
