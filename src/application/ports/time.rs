// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Supplies the timestamp stored on creation revisions.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
