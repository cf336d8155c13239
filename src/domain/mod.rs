pub mod errors;
pub mod registry;
pub mod revision;
pub mod user;
