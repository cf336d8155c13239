mod common;
mod list;
mod service;

pub use list::{GetRevisionQuery, ListSubjectRevisionsQuery};
pub use service::RevisionQueryService;
