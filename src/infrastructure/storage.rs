use std::cell::RefCell;
use std::collections::HashMap;

use gloo::storage::{LocalStorage, Storage};

use crate::domain::logging::LogComponent;
use crate::domain::theme::PreferenceStore;
use crate::log_warn;

/// Browser `localStorage` behind the domain's preference-store port.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStoragePreferences;

impl LocalStoragePreferences {
    pub fn new() -> Self {
        Self
    }
}

impl PreferenceStore for LocalStoragePreferences {
    fn get(&self, key: &str) -> Option<String> {
        LocalStorage::get::<String>(key).ok()
    }

    fn set(&self, key: &str, value: &str) {
        // a full or unavailable store loses the preference, nothing else
        if let Err(error) = LocalStorage::set(key, value) {
            log_warn!(
                LogComponent::Infrastructure("Storage"),
                "failed to persist {key}: {error:?}"
            );
        }
    }
}

/// In-memory store for tests and storage-less environments.
#[derive(Debug, Default)]
pub struct InMemoryPreferences {
    values: RefCell<HashMap<String, String>>,
}

impl InMemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for InMemoryPreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values.borrow_mut().insert(key.to_string(), value.to_string());
    }
}
