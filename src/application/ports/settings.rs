// src/application/ports/settings.rs

/// Flat key/value settings, e.g. `auth.model`.
pub trait SettingsSource: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
}
