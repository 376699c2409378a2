//! Durable state for the whitelisted stores.
//!
//! Only the auth session and the cart lines survive a process restart; every
//! other store starts empty and transient status is never persisted. The app
//! rehydrates before the first screen renders, behind a loading placeholder.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use mockall::automock;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::{auth::Session, cart::CartLine};

/// Storage key for the auth session snapshot.
pub const AUTH_KEY: &str = "auth";

/// Storage key for the cart snapshot.
pub const CART_KEY: &str = "cart";

/// Errors from the storage provider.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// Reading or writing the underlying storage failed.
    #[error("io error: {0}")]
    Io(#[from] io::Error),

    /// A snapshot could not be serialized.
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Durable key-value storage for store snapshots.
#[automock]
pub trait StateStorage: Send + Sync {
    /// Load the raw snapshot stored under `key`, if any.
    fn load(&self, key: &str) -> Result<Option<String>, PersistenceError>;

    /// Save a raw snapshot under `key`, replacing any previous value.
    fn save(&self, key: &str, value: &str) -> Result<(), PersistenceError>;

    /// Remove the snapshot under `key`. Removing an absent key is a no-op.
    fn remove(&self, key: &str) -> Result<(), PersistenceError>;
}

/// One JSON file per key inside a directory.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    dir: PathBuf,
}

impl JsonFileStorage {
    /// Create a storage rooted at `dir`. The directory is created lazily on
    /// first save.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    /// The directory snapshots are stored in.
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl StateStorage for JsonFileStorage {
    fn load(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(error) => Err(error.into()),
        }
    }

    fn save(&self, key: &str, value: &str) -> Result<(), PersistenceError> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path_for(key), value)?;

        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), PersistenceError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(error) => Err(error.into()),
        }
    }
}

/// The whitelisted subset of state that survives restarts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PersistedState {
    /// The saved session, if the user was signed in.
    pub session: Option<Session>,

    /// The saved cart lines. Totals are recomputed on restore.
    pub cart_lines: Vec<CartLine>,
}

/// Restore the whitelisted stores from storage.
///
/// Missing or corrupt snapshots fall back to empty state with a warning;
/// rehydration never fails the startup path.
pub fn rehydrate(storage: &dyn StateStorage) -> PersistedState {
    PersistedState {
        session: load_snapshot(storage, AUTH_KEY),
        cart_lines: load_snapshot(storage, CART_KEY).unwrap_or_default(),
    }
}

/// Save the whitelisted stores.
///
/// # Errors
///
/// Returns a [`PersistenceError`] when serialization or the storage provider
/// fails; the stores themselves are unaffected.
pub fn persist(
    storage: &dyn StateStorage,
    session: Option<&Session>,
    cart_lines: &[CartLine],
) -> Result<(), PersistenceError> {
    match session {
        Some(session) => storage.save(AUTH_KEY, &serde_json::to_string(session)?)?,
        None => storage.remove(AUTH_KEY)?,
    }

    storage.save(CART_KEY, &serde_json::to_string(cart_lines)?)?;

    Ok(())
}

fn load_snapshot<T: DeserializeOwned>(storage: &dyn StateStorage, key: &str) -> Option<T> {
    match storage.load(key) {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(error) => {
                tracing::warn!(key, %error, "discarding corrupt snapshot");
                None
            }
        },
        Ok(None) => None,
        Err(error) => {
            tracing::warn!(key, %error, "failed to read snapshot");
            None
        }
    }
}
