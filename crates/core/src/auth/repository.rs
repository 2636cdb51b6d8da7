//! The persistence seam for users.

use std::collections::BTreeMap;
use std::convert::Infallible;

use super::user::User;

/// Storage of all users keyed by login.
///
/// Implementations hold the whole state in memory; [`save_all`](Self::save_all)
/// writes it out in one piece.
pub trait UserRepository {
    /// Error raised by [`save_all`](Self::save_all).
    type Error: std::error::Error + Send + Sync + 'static;

    /// User with `login`, if registered.
    fn find(&self, login: &str) -> Option<&User>;

    /// Mutable user with `login`, if registered.
    fn find_mut(&mut self, login: &str) -> Option<&mut User>;

    /// Returns true when `login` is taken.
    fn contains(&self, login: &str) -> bool {
        self.find(login).is_some()
    }

    /// Stores `user` under its login, returning any user it replaced.
    fn insert(&mut self, user: User) -> Option<User>;

    /// Removes and returns the user with `login`.
    fn remove(&mut self, login: &str) -> Option<User>;

    /// All registered logins in ascending order.
    fn logins(&self) -> Vec<String>;

    /// Persists every user.
    ///
    /// # Errors
    ///
    /// Implementation-specific write failures.
    fn save_all(&mut self) -> Result<(), Self::Error>;
}

/// Repository that lives only in memory. `save_all` is a no-op.
#[derive(Debug, Default)]
pub struct MemoryUserRepository {
    users: BTreeMap<String, User>,
}

impl MemoryUserRepository {
    /// Empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserRepository for MemoryUserRepository {
    type Error = Infallible;

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

    fn save_all(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}
