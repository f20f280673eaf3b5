//! User registration and login.
//!
//! Passwords are stored as salted bcrypt hashes (fresh salt per
//! registration, tunable cost). Login verifies against the stored hash;
//! there is no decryption path and no password reset flow.

use crate::{Error, Result, Session, UserRecord, UserStore};
use std::path::{Path, PathBuf};

/// Hash tags accepted as valid bcrypt output.
///
/// `$2a$`/`$2b$` are what the legacy store contains; `$2y$` is the
/// remaining bcrypt family variant. Anything else is treated as corrupt.
const BCRYPT_TAGS: [&str; 3] = ["$2a$", "$2b$", "$2y$"];

/// Registration and login against a store file
#[derive(Clone, Debug)]
pub struct AuthService {
    store_path: PathBuf,
    bcrypt_cost: u32,
}

impl AuthService {
    /// Create a service writing to the given store file with the given
    /// bcrypt cost factor
    pub fn new(store_path: impl Into<PathBuf>, bcrypt_cost: u32) -> Self {
        Self {
            store_path: store_path.into(),
            bcrypt_cost,
        }
    }

    /// Create a service with the default bcrypt cost
    pub fn with_default_cost(store_path: impl Into<PathBuf>) -> Self {
        Self::new(store_path, bcrypt::DEFAULT_COST)
    }

    pub fn store_path(&self) -> &Path {
        &self.store_path
    }

    /// Register a new user.
    ///
    /// Fails with `Validation` on empty fields or a password mismatch, and
    /// with `DuplicateUser` if the username is taken. On success the store
    /// file is rewritten with the new record; on any failure it is left
    /// untouched.
    pub fn register(&self, username: &str, password: &str, confirm_password: &str) -> Result<()> {
        if username.is_empty() || password.is_empty() || confirm_password.is_empty() {
            return Err(Error::Validation("All fields are required".into()));
        }
        if password != confirm_password {
            return Err(Error::Validation("Passwords do not match".into()));
        }

        let (mut store, _warning) = UserStore::load_or_empty(&self.store_path)?;

        if store.contains(username) {
            return Err(Error::DuplicateUser(username.to_string()));
        }

        let hash = bcrypt::hash(password, self.bcrypt_cost)
            .map_err(|e| Error::Config(format!("Password hashing failed: {e}")))?;

        store.insert(username, UserRecord::new(hash));
        store.save(&self.store_path)?;

        tracing::info!("Registered user '{}'", username);
        Ok(())
    }

    /// Authenticate a user and return their session.
    ///
    /// Unknown usernames and wrong passwords both fail with
    /// `InvalidCredentials`. A stored hash without a bcrypt tag, or one the
    /// verifier cannot parse, fails with `CorruptHash`.
    pub fn login(&self, username: &str, password: &str) -> Result<Session> {
        let (store, _warning) = UserStore::load_or_empty(&self.store_path)?;

        let record = store.get(username).ok_or(Error::InvalidCredentials)?;

        if !BCRYPT_TAGS.iter().any(|tag| record.password.starts_with(tag)) {
            return Err(Error::CorruptHash(format!(
                "hash for '{username}' has no bcrypt tag"
            )));
        }

        // bcrypt::verify is the constant-time comparison primitive
        let matches = bcrypt::verify(password, &record.password)
            .map_err(|e| Error::CorruptHash(e.to_string()))?;

        if !matches {
            return Err(Error::InvalidCredentials);
        }

        tracing::info!("User '{}' logged in", username);
        Ok(Session {
            username: username.to_string(),
            record: record.clone(),
        })
    }
}
