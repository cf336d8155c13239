// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_record_store;
mod postgres_revision;

pub use error::map_sqlx;
pub use postgres_record_store::PostgresRecordStore;
pub use postgres_revision::PostgresRevisionRepository;
