//! Perfect hash handler table.
//!
//! For large selector sets known when compiling: the `phf_map!` macro builds
//! the map at compile time and lookups hash each key exactly once.

use mapis_core::HandlerTable;

/// A handler table over a `static` `phf::Map`.
///
/// There is no builder; the map is fixed when the crate is compiled.
///
/// ```rust,ignore
/// static OPS: phf::Map<&'static str, Op> = phf_map! {
///     "create" => create as Op,
///     "delete" => delete as Op,
/// };
/// let ops = mapis::build(["op"], Path::root(), PhfTable::new(&OPS))?;
/// ```
pub struct PhfTable<H: 'static> {
    map: &'static phf::Map<&'static str, H>,
}

impl<H: 'static> PhfTable<H> {
    /// Wrap a static map.
    pub const fn new(map: &'static phf::Map<&'static str, H>) -> Self {
        Self { map }
    }

    /// Get the handler registered under `key`.
    pub fn get(&self, key: &str) -> Option<&'static H> {
        self.map.get(key)
    }
}

impl<H: 'static> Clone for PhfTable<H> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<H: 'static> Copy for PhfTable<H> {}

impl<H: 'static> std::fmt::Debug for PhfTable<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PhfTable")
            .field("len", &self.map.len())
            .finish()
    }
}

impl<H: 'static> HandlerTable for PhfTable<H> {
    type Handler = H;

    fn lookup(&self, key: &str) -> Option<&H> {
        self.get(key)
    }

    fn keys(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(self.map.keys().copied())
    }

    fn len(&self) -> usize {
        self.map.len()
    }
}
