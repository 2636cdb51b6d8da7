//! Threshold notifications for budgets, balance and overall spending.

pub mod service;
pub mod types;


pub use service::NotificationService;
pub use types::{Notification, NotificationThresholds};
