//! Registered users.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tally_shared::types::{EntityMeta, UserId};

use crate::ledger::Wallet;

/// A registered user and the wallet they own.
///
/// Identity is the login: two users are equal iff their logins are.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(flatten)]
    meta: EntityMeta<UserId>,
    login: String,
    password_hash: String,
    wallet: Wallet,
}

impl User {
    /// New user with an empty wallet. `password_hash` must already be a PHC string.
    #[must_use]
    pub fn new(login: impl Into<String>, password_hash: String) -> Self {
        let meta = EntityMeta::<UserId>::now();
        Self {
            wallet: Wallet::new(meta.id),
            meta,
            login: login.into(),
            password_hash,
        }
    }

    /// User ID.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.meta.id
    }

    /// Registration timestamp.
    #[must_use]
    pub const fn created_at(&self) -> NaiveDateTime {
        self.meta.created_at
    }

    /// Unique login.
    #[must_use]
    pub fn login(&self) -> &str {
        &self.login
    }

    /// Argon2id PHC hash of the password.
    #[must_use]
    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    /// The user's wallet.
    #[must_use]
    pub const fn wallet(&self) -> &Wallet {
        &self.wallet
    }

    /// Mutable access to the user's wallet.
    pub const fn wallet_mut(&mut self) -> &mut Wallet {
        &mut self.wallet
    }
}

impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.login == other.login
    }
}

impl Eq for User {}
