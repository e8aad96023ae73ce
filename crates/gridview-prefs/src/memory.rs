use gridview_types::PrefStore;
use std::collections::HashMap;
use std::sync::Mutex;

/// In-memory preference store for tests and ephemeral sessions
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        // A poisoned lock still holds usable preference data
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PrefStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries().insert(key.to_string(), value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let store = MemoryStore::new();
        assert!(store.is_empty());
        assert_eq!(store.get("admin-requests-view-mode"), None);
    }

    #[test]
    fn overwrites_existing_value() {
        let store = MemoryStore::new();
        store.set("admin-requests-view-mode", "cards");
        store.set("admin-requests-view-mode", "table");

        assert_eq!(store.len(), 1);
        assert_eq!(
            store.get("admin-requests-view-mode"),
            Some("table".to_string())
        );
    }
}
