/// Scoped key-value store for persisted display preferences.
///
/// Only two settings exist per entity type: view mode and density.
/// Writes are fire-and-forget, last-write-wins; implementations swallow
/// storage failures rather than surfacing them to the UI path.
pub trait PrefStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// Namespace prefix shared by all admin list screens
pub const DEFAULT_PREFIX: &str = "admin";

pub const SETTING_VIEW_MODE: &str = "view-mode";
pub const SETTING_DENSITY: &str = "density";

/// Compose a preference key: `"{prefix}-{entity}-{setting}"`
pub fn pref_key(prefix: &str, entity: &str, setting: &str) -> String {
    format!("{}-{}-{}", prefix, entity, setting)
}
