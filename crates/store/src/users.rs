//! Whole-state JSON user repository.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tally_core::auth::{User, UserRepository};
use tracing::{debug, info, warn};

use crate::error::StoreError;

/// Every user in memory, written to one JSON object keyed by login.
#[derive(Debug)]
pub struct JsonUserRepository {
    path: PathBuf,
    users: BTreeMap<String, User>,
}

impl JsonUserRepository {
    /// Loads the repository stored at `path`.
    ///
    /// A missing or empty file gives an empty repository. Malformed JSON is
    /// logged and also gives an empty repository; the file itself is left
    /// alone until the next save.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if an existing file cannot be read.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(path = %path.display(), "No user file yet, starting empty");
                return Ok(Self::empty(path));
            }
            Err(e) => return Err(StoreError::io(path, e)),
        };

        if content.trim().is_empty() {
            return Ok(Self::empty(path));
        }

        let stored: BTreeMap<String, User> = match serde_json::from_str(&content) {
            Ok(stored) => stored,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Malformed user file, starting empty");
                return Ok(Self::empty(path));
            }
        };

        let users: BTreeMap<String, User> = stored
            .into_values()
            .map(|user| (user.login().to_owned(), user))
            .collect();

        for user in balance_mismatches(&users) {
            warn!(
                login = user.login(),
                stored = %user.wallet().balance(),
                recomputed = %user.wallet().recomputed_balance(),
                "Stored balance does not match transaction history"
            );
        }

        info!(path = %path.display(), users = users.len(), "Loaded users");
        Ok(Self { path, users })
    }

    fn empty(path: PathBuf) -> Self {
        Self {
            path,
            users: BTreeMap::new(),
        }
    }

    /// File this repository saves to.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of registered users.
    #[must_use]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Returns true when nobody is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

/// Users whose stored balance disagrees with their transaction history.
fn balance_mismatches(users: &BTreeMap<String, User>) -> impl Iterator<Item = &User> {
    users.values().filter(|user| {
        let wallet = user.wallet();
        wallet.balance() != wallet.recomputed_balance()
    })
}

impl UserRepository for JsonUserRepository {
    type Error = StoreError;

    fn find(&self, login: &str) -> Option<&User> {
        self.users.get(login)
    }

    fn find_mut(&mut self, login: &str) -> Option<&mut User> {
        self.users.get_mut(login)
    }

    fn insert(&mut self, user: User) -> Option<User> {
        self.users.insert(user.login().to_owned(), user)
    }

    fn remove(&mut self, login: &str) -> Option<User> {
        self.users.remove(login)
    }

    fn logins(&self) -> Vec<String> {
        self.users.keys().cloned().collect()
    }

    fn save_all(&mut self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
        }

        let json = serde_json::to_string_pretty(&self.users).map_err(|source| StoreError::Json {
            path: self.path.clone(),
            source,
        })?;
        fs::write(&self.path, json).map_err(|e| StoreError::io(&self.path, e))?;

        debug!(path = %self.path.display(), users = self.users.len(), "Saved users");
        Ok(())
    }
}
