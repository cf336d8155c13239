// src/application/commands/revisions/mod.rs
mod record;
mod service;

pub use record::{RecordChangesCommand, RecordCreationCommand};
pub use service::RevisionCommandService;
