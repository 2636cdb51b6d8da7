//! Common types used across the application.

pub mod id;
pub mod meta;
pub mod money;

pub use id::*;
pub use meta::EntityMeta;
pub use money::{format_amount, format_percent};
