pub mod cursor;
pub mod entity;
pub mod format;
pub mod naming;
pub mod repository;
pub mod value_objects;

pub use cursor::RevisionCursor;
pub use entity::{NewRevision, Revision};
pub use format::{FieldFormat, FormattedFields};
pub use repository::RevisionRepository;
pub use value_objects::{FieldKey, RELATION_SUFFIX, RevisionId, SubjectId, SubjectType, ValueSide};
