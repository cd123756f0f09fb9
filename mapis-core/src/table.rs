//! Handler table abstraction.
//!
//! A handler table maps selector keys to handlers. The trait lets different
//! backends (HashMap, const arrays, phf) be swapped without changing the
//! dispatcher.

use crate::error::BuildError;
use std::sync::Arc;

/// An immutable mapping from selector keys to handlers.
pub trait HandlerTable {
    /// The handler type stored in the table.
    type Handler;

    /// Look up the handler for `key`.
    fn lookup(&self, key: &str) -> Option<&Self::Handler>;

    /// Every registered key, in no particular order.
    fn keys(&self) -> Box<dyn Iterator<Item = &str> + '_>;

    /// Number of registered keys.
    fn len(&self) -> usize {
        self.keys().count()
    }

    /// Whether the table has no handlers.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check if a key exists in the table.
    fn contains(&self, key: &str) -> bool {
        self.lookup(key).is_some()
    }
}

impl<Tb: HandlerTable + ?Sized> HandlerTable for &Tb {
    type Handler = Tb::Handler;

    fn lookup(&self, key: &str) -> Option<&Self::Handler> {
        (**self).lookup(key)
    }

    fn keys(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        (**self).keys()
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}

impl<Tb: HandlerTable + ?Sized> HandlerTable for Arc<Tb> {
    type Handler = Tb::Handler;

    fn lookup(&self, key: &str) -> Option<&Self::Handler> {
        (**self).lookup(key)
    }

    fn keys(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        (**self).keys()
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}

/// Builder for constructing handler tables at runtime.
pub trait TableBuilder<H>: Default {
    /// The table type this builder produces.
    type Table: HandlerTable<Handler = H>;

    /// Insert a handler under `key`.
    ///
    /// Returns an error if the key already exists.
    fn insert(&mut self, key: String, handler: H) -> Result<(), BuildError>;

    /// Build the table, consuming the builder.
    fn build(self) -> Result<Self::Table, BuildError>;
}

/// Compare a table's keys against a declared set of selector values.
///
/// Fails with [`BuildError::MissingHandlers`] when a declared value has no
/// handler, and [`BuildError::UnknownVariants`] when a handler is registered
/// for an undeclared key. Reported keys are sorted.
pub fn check_exhaustive<Tb, I, S>(table: &Tb, declared: I) -> Result<(), BuildError>
where
    Tb: HandlerTable + ?Sized,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let declared: Vec<String> = declared
        .into_iter()
        .map(|s| s.as_ref().to_string())
        .collect();

    let mut missing: Vec<String> = declared
        .iter()
        .filter(|key| !table.contains(key))
        .cloned()
        .collect();
    if !missing.is_empty() {
        missing.sort();
        missing.dedup();
        return Err(BuildError::MissingHandlers(missing));
    }

    let mut unknown: Vec<String> = table
        .keys()
        .filter(|key| !declared.iter().any(|d| d.as_str() == *key))
        .map(str::to_string)
        .collect();
    if !unknown.is_empty() {
        unknown.sort();
        return Err(BuildError::UnknownVariants(unknown));
    }

    Ok(())
}

/// Reject a table that lists the same key more than once.
///
/// Tables assembled without a [`TableBuilder`] (such as fixed arrays) are not
/// checked on insertion; a repeated key there would silently shadow a handler.
pub fn check_unique<Tb>(table: &Tb) -> Result<(), BuildError>
where
    Tb: HandlerTable + ?Sized,
{
    let mut keys: Vec<&str> = table.keys().collect();
    keys.sort_unstable();
    match keys.windows(2).find(|pair| pair[0] == pair[1]) {
        Some(pair) => Err(BuildError::DuplicateKey(pair[0].to_string())),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    struct MapTable(BTreeMap<String, i32>);

    impl HandlerTable for MapTable {
        type Handler = i32;

        fn lookup(&self, key: &str) -> Option<&i32> {
            self.0.get(key)
        }

        fn keys(&self) -> Box<dyn Iterator<Item = &str> + '_> {
            Box::new(self.0.keys().map(String::as_str))
        }
    }

    fn table(keys: &[&str]) -> MapTable {
        MapTable(
            keys.iter()
                .enumerate()
                .map(|(i, k)| (k.to_string(), i as i32))
                .collect(),
        )
    }

    #[test]
    fn test_default_len_and_contains() {
        let t = table(&["circle", "square"]);
        assert_eq!(t.len(), 2);
        assert!(!t.is_empty());
        assert!(t.contains("circle"));
        assert!(!t.contains("triangle"));
    }

    #[test]
    fn test_shared_tables_delegate() {
        let t = Arc::new(table(&["circle"]));
        assert_eq!(HandlerTable::lookup(&t, "circle"), Some(&0));
        assert!(HandlerTable::contains(&&*t, "circle"));
    }

    #[test]
    fn test_exhaustive_match() {
        let t = table(&["circle", "square"]);
        assert_eq!(check_exhaustive(&t, ["square", "circle"]), Ok(()));
    }

    #[test]
    fn test_exhaustive_reports_missing() {
        let t = table(&["circle"]);
        assert_eq!(
            check_exhaustive(&t, ["square", "circle", "hexagon"]),
            Err(BuildError::MissingHandlers(vec![
                "hexagon".to_string(),
                "square".to_string()
            ]))
        );
    }

    #[test]
    fn test_exhaustive_reports_unknown() {
        let t = table(&["circle", "square", "blob"]);
        assert_eq!(
            check_exhaustive(&t, ["circle", "square"]),
            Err(BuildError::UnknownVariants(vec!["blob".to_string()]))
        );
    }

    struct Pairs(Vec<(&'static str, i32)>);

    impl HandlerTable for Pairs {
        type Handler = i32;

        fn lookup(&self, key: &str) -> Option<&i32> {
            self.0.iter().find(|(k, _)| *k == key).map(|(_, h)| h)
        }

        fn keys(&self) -> Box<dyn Iterator<Item = &str> + '_> {
            Box::new(self.0.iter().map(|(k, _)| *k))
        }
    }

    #[test]
    fn test_unique_keys() {
        assert_eq!(check_unique(&table(&["circle", "square"])), Ok(()));

        let repeated = Pairs(vec![("square", 1), ("circle", 2), ("square", 3)]);
        assert_eq!(
            check_unique(&repeated),
            Err(BuildError::DuplicateKey("square".to_string()))
        );
    }
}
