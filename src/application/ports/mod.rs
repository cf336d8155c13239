// src/application/ports/mod.rs
pub mod record_store;
pub mod settings;
pub mod time;

// Type aliases to make port injection sites more descriptive and reduce `dyn` noise
pub type RecordStorePort = dyn record_store::RecordStore;
pub type SettingsSourcePort = dyn settings::SettingsSource;
pub type ClockPort = dyn time::Clock;
