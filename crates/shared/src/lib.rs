//! Shared types and configuration for Tally.
//!
//! This crate provides common types used across all other crates:
//! - Typed IDs for type-safe entity references
//! - Entity metadata (identity + creation timestamp)
//! - Money formatting helpers
//! - Configuration management

pub mod config;
pub mod types;

pub use config::AppConfig;
