pub mod definition;
pub mod model;
pub mod record;

pub use definition::{
    DEFAULT_NULL_PLACEHOLDER, DEFAULT_UNKNOWN_PLACEHOLDER, FieldResolver, Mutator,
    RelationDescriptor, RelationRegistry, SubjectDefinition, TypeRegistry,
};
pub use model::ModelDefinition;
pub use record::{Record, stored_value};
