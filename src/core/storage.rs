use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Persistent string key/value storage for user preferences.
///
/// Reads and writes are best effort: a backend that cannot reach its store
/// returns `None` from [`get`](Self::get) and drops writes.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// Process-local store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.set(key, value);
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for Rc<T> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_store_sees_writes() {
        let store = Rc::new(MemoryStore::with_value("theme", "light"));
        let handle = Rc::clone(&store);
        handle.set("theme", "dark");
        assert_eq!(store.get("theme").as_deref(), Some("dark"));
        assert_eq!(store.get("missing"), None);
    }
}
