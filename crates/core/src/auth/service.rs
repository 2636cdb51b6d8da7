//! Registration, login and the single active session.

use rust_decimal::Decimal;
use tally_shared::types::UserId;

use super::error::AuthError;
use super::password::{hash_password, verify_password};
use super::repository::UserRepository;
use super::user::User;
use crate::ledger::validation::{require_positive, require_text};
use crate::ledger::{LedgerError, LedgerService};

/// Authentication service over a [`UserRepository`].
///
/// At most one user is logged in at a time.
#[derive(Debug)]
pub struct AuthService<R> {
    repository: R,
    current: Option<String>,
}

impl<R: UserRepository> AuthService<R> {
    /// Service with nobody logged in.
    #[must_use]
    pub const fn new(repository: R) -> Self {
        Self {
            repository,
            current: None,
        }
    }

    /// The underlying repository.
    #[must_use]
    pub const fn repository(&self) -> &R {
        &self.repository
    }

    /// Consumes the service and returns the repository.
    #[must_use]
    pub fn into_repository(self) -> R {
        self.repository
    }

    /// Registers a new user with an empty wallet. Does not log them in.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a blank login or password,
    /// `AuthError::LoginTaken` for a duplicate login and
    /// `AuthError::Password` if hashing fails.
    pub fn register(&mut self, login: &str, password: &str) -> Result<UserId, AuthError> {
        require_text(login, "Login")?;
        require_text(password, "Password")?;

        if self.repository.contains(login) {
            return Err(AuthError::LoginTaken(login.to_owned()));
        }

        let user = User::new(login, hash_password(password)?);
        let id = user.id();
        self.repository.insert(user);
        Ok(id)
    }

    /// Logs `login` in, replacing any previous session.
    ///
    /// # Errors
    ///
    /// Returns a validation error for blank input, a not-found error for an
    /// unknown login and `AuthError::WrongPassword` on a mismatch.
    pub fn authenticate(&mut self, login: &str, password: &str) -> Result<&User, AuthError> {
        require_text(login, "Login")?;
        require_text(password, "Password")?;

        let user = self.user(login)?;
        if !verify_password(password, user.password_hash())? {
            return Err(AuthError::WrongPassword(login.to_owned()));
        }

        self.current = Some(login.to_owned());
        self.current_user()
    }

    /// Looks up any registered user.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::UserNotFound` for an unknown login.
    pub fn user(&self, login: &str) -> Result<&User, AuthError> {
        self.repository
            .find(login)
            .ok_or_else(|| LedgerError::UserNotFound(login.to_owned()).into())
    }

    /// Returns true while someone is logged in.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    /// The logged-in user.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::NotAuthenticated` without a session.
    pub fn current_user(&self) -> Result<&User, AuthError> {
        let login = self.current.as_deref().ok_or(AuthError::NotAuthenticated)?;
        self.repository
            .find(login)
            .ok_or(AuthError::NotAuthenticated)
    }

    /// The logged-in user, mutably.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::NotAuthenticated` without a session.
    pub fn current_user_mut(&mut self) -> Result<&mut User, AuthError> {
        let login = self.current.as_deref().ok_or(AuthError::NotAuthenticated)?;
        self.repository
            .find_mut(login)
            .ok_or(AuthError::NotAuthenticated)
    }

    /// Transfers `amount` from the logged-in user to `recipient`.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::NotAuthenticated` without a session, a validation
    /// error for a non-positive amount or a transfer to oneself, and a
    /// not-found error for an unknown recipient.
    pub fn transfer_to(&mut self, recipient: &str, amount: Decimal) -> Result<(), AuthError> {
        let sender = self.current.clone().ok_or(AuthError::NotAuthenticated)?;
        require_positive(amount, "Amount")?;
        if sender == recipient {
            return Err(LedgerError::SelfTransfer.into());
        }

        let mut to = self
            .repository
            .remove(recipient)
            .ok_or_else(|| LedgerError::UserNotFound(recipient.to_owned()))?;

        let result = match self.repository.find_mut(&sender) {
            Some(from) => LedgerService::transfer(from, &mut to, amount).map_err(AuthError::from),
            None => Err(AuthError::NotAuthenticated),
        };
        self.repository.insert(to);
        result
    }

    /// Ends the session and writes every user back to storage.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Storage` if the repository cannot save. The
    /// session is cleared either way.
    pub fn logout(&mut self) -> Result<(), AuthError> {
        self.current = None;
        self.repository
            .save_all()
            .map_err(|e| AuthError::Storage(e.to_string()))
    }
}
