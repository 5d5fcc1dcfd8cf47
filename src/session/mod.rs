use std::collections::HashMap;
use std::sync::Mutex;

// ============================================================================
// Customer Session
// ============================================================================
//
// Per-customer key/value storage that survives between checkout requests.
//
// ============================================================================

pub trait SessionStore: Send + Sync {
    fn set(&self, key: &str, value: String);
    fn get(&self, key: &str) -> Option<String>;
    /// Reads and removes the value, for messages shown once.
    fn take(&self, key: &str) -> Option<String>;
}

#[derive(Debug, Default)]
pub struct MemorySession {
    values: Mutex<HashMap<String, String>>,
}

impl MemorySession {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySession {
    fn set(&self, key: &str, value: String) {
        if let Ok(mut values) = self.values.lock() {
            values.insert(key.to_string(), value);
        }
    }

    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().ok()?.get(key).cloned()
    }

    fn take(&self, key: &str) -> Option<String> {
        self.values.lock().ok()?.remove(key)
    }
}
