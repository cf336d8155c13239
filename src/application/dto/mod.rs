pub mod pagination;
pub mod revisions;

pub use pagination::CursorPage;
pub use revisions::{RevisionDto, RevisionUserDto};
