//! Const generics handler table.
//!
//! A fixed-size table embedded directly in the value, suited to small sets of
//! `fn` handlers known up front. Needs no allocation and can live in a
//! `static`.

use mapis_core::HandlerTable;

/// A handler table with a fixed number of entries.
///
/// # Example
///
/// ```rust,ignore
/// use mapis::tables::ConstTable;
///
/// static AREA: ConstTable<fn(&Shape) -> f64, 2> = ConstTable::new([
///     ("circle", circle_area),
///     ("square", square_area),
/// ]);
/// ```
///
/// # Performance
///
/// For N <= 4, linear search is used.
/// For larger N, binary search provides O(log N) lookup when the entries are
/// sorted by key. [`ConstTable::new`] records whether they are; unsorted
/// tables fall back to a linear scan. Use [`ConstTable::new_sorted`] to get
/// binary search for input in arbitrary order.
pub struct ConstTable<H, const N: usize> {
    routes: [(&'static str, H); N],
    sorted: bool,
}

impl<H, const N: usize> ConstTable<H, N> {
    /// Create a table from entries in any order.
    pub const fn new(routes: [(&'static str, H); N]) -> Self {
        let mut sorted = true;
        let mut i = 1;
        while i < N {
            if !precedes(routes[i - 1].0, routes[i].0) {
                sorted = false;
            }
            i += 1;
        }
        Self { routes, sorted }
    }

    /// Create a table and sort the entries at runtime.
    pub fn new_sorted(mut routes: [(&'static str, H); N]) -> Self {
        routes.sort_by(|a, b| a.0.cmp(b.0));
        Self {
            routes,
            sorted: true,
        }
    }

    /// Look up a handler by key.
    #[inline]
    pub fn get(&self, key: &str) -> Option<&H> {
        if N <= 4 || !self.sorted {
            self.routes.iter().find(|(k, _)| *k == key).map(|(_, h)| h)
        } else {
            self.routes
                .binary_search_by(|(k, _)| (*k).cmp(key))
                .ok()
                .map(|idx| &self.routes[idx].1)
        }
    }
}

/// Byte-wise `a < b`, usable in const context.
const fn precedes(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut i = 0;
    while i < a.len() && i < b.len() {
        if a[i] != b[i] {
            return a[i] < b[i];
        }
        i += 1;
    }
    a.len() < b.len()
}

impl<H, const N: usize> HandlerTable for ConstTable<H, N> {
    type Handler = H;

    fn lookup(&self, key: &str) -> Option<&H> {
        self.get(key)
    }

    fn keys(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(self.routes.iter().map(|(k, _)| *k))
    }

    fn len(&self) -> usize {
        N
    }
}
