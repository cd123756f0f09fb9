//! HashMap-based handler table.
//!
//! This is the default table used by `DispatcherBuilder`.

use mapis_core::{BuildError, HandlerTable, SelectorKey, TableBuilder};
use std::collections::HashMap;

/// A handler table backed by `HashMap`.
pub struct HashMapTable<H> {
    map: HashMap<String, H>,
}

impl<H> HashMapTable<H> {
    /// Create a new empty table.
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    /// Create a table from an existing HashMap.
    pub fn from_map(map: HashMap<String, H>) -> Self {
        Self { map }
    }

    /// Get the handler registered under `key`.
    pub fn get(&self, key: &str) -> Option<&H> {
        self.map.get(key)
    }
}

impl<H> Default for HashMapTable<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> std::fmt::Debug for HashMapTable<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut keys: Vec<&str> = self.map.keys().map(String::as_str).collect();
        keys.sort_unstable();
        f.debug_struct("HashMapTable").field("keys", &keys).finish()
    }
}

/// Later entries replace earlier ones with the same key.
impl<K: SelectorKey, H> FromIterator<(K, H)> for HashMapTable<H> {
    fn from_iter<I: IntoIterator<Item = (K, H)>>(iter: I) -> Self {
        Self {
            map: iter
                .into_iter()
                .map(|(k, h)| (k.selector_key().into_owned(), h))
                .collect(),
        }
    }
}

impl<H> HandlerTable for HashMapTable<H> {
    type Handler = H;

    fn lookup(&self, key: &str) -> Option<&H> {
        self.map.get(key)
    }

    fn keys(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(self.map.keys().map(String::as_str))
    }

    fn len(&self) -> usize {
        self.map.len()
    }
}

/// Builder for `HashMapTable`.
pub struct HashMapTableBuilder<H> {
    map: HashMap<String, H>,
    allow_duplicates: bool,
}

impl<H> HashMapTableBuilder<H> {
    /// Allow duplicate keys (later insertions override earlier ones).
    pub fn allow_duplicates(mut self) -> Self {
        self.allow_duplicates = true;
        self
    }

    /// Number of keys inserted so far.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether nothing has been inserted yet.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl<H> Default for HashMapTableBuilder<H> {
    fn default() -> Self {
        Self {
            map: HashMap::new(),
            allow_duplicates: false,
        }
    }
}

impl<H> TableBuilder<H> for HashMapTableBuilder<H> {
    type Table = HashMapTable<H>;

    fn insert(&mut self, key: String, handler: H) -> Result<(), BuildError> {
        if !self.allow_duplicates && self.map.contains_key(&key) {
            return Err(BuildError::DuplicateKey(key));
        }
        self.map.insert(key, handler);
        Ok(())
    }

    fn build(self) -> Result<Self::Table, BuildError> {
        Ok(HashMapTable { map: self.map })
    }
}
