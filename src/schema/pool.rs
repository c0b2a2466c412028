use rustc_hash::{FxHashMap, FxHashSet};

/// Keyed vocabulary cache.
///
/// Each semantic key owns an ordered list of accepted entries (acceptance
/// order). An entry belongs to at most one key and appears once within it.
#[derive(Debug, Clone, Default)]
pub struct KeyedPool {
    entries: FxHashMap<String, Vec<String>>,
    all: FxHashSet<String>,
}

impl KeyedPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries accepted under `key`, oldest first. Unseen keys are empty.
    pub fn get(&self, key: &str) -> &[String] {
        self.entries.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns true if `value` is stored under any key.
    pub fn contains(&self, value: &str) -> bool {
        self.all.contains(value)
    }

    /// Store `value` under `key`. Refuses values already present anywhere.
    pub fn insert(&mut self, key: &str, value: String) -> bool {
        if !self.all.insert(value.clone()) {
            return false;
        }
        self.entries.entry(key.to_string()).or_default().push(value);
        true
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(key, values)| (key.as_str(), values.as_slice()))
    }

    /// Total number of entries across all keys.
    pub fn len(&self) -> usize {
        self.all.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unseen_key_is_empty() {
        let pool = KeyedPool::new();
        assert!(pool.get("river").is_empty());
        assert!(pool.is_empty());
    }

    #[test]
    fn insert_keeps_order() {
        let mut pool = KeyedPool::new();
        assert!(pool.insert("river", "ka".to_string()));
        assert!(pool.insert("river", "mo".to_string()));
        assert_eq!(pool.get("river"), &["ka".to_string(), "mo".to_string()]);
        assert_eq!(pool.len(), 2);
    }

    #[test]
    fn values_are_unique_across_keys() {
        let mut pool = KeyedPool::new();
        assert!(pool.insert("", "ka".to_string()));
        assert!(!pool.insert("of", "ka".to_string()));
        assert!(!pool.insert("", "ka".to_string()));
        assert!(pool.get("of").is_empty());
        assert!(pool.contains("ka"));
        assert_eq!(pool.len(), 1);
    }
}
