//! # Dispatcher
//!
//! A [`Dispatcher`] binds a selector to a handler table. Dispatching a value
//! extracts its key, looks the key up and invokes the handler with the value
//! and the caller's extra arguments.
//!
//! # Example
//!
//! ```rust,ignore
//! use mapis::{Path, build, tables::ConstTable};
//! use serde_json::json;
//!
//! fn circle(v: &Value) -> f64 { ... }
//! fn square(v: &Value) -> f64 { ... }
//!
//! type Area = fn(&Value) -> f64;
//! let area = build(["kind"], Path::root(), ConstTable::new([
//!     ("circle", circle as Area),
//!     ("square", square as Area),
//! ]))?;
//!
//! let a = area.dispatch(&json!({"kind": "circle", "radius": 2.0}), ())?;
//! ```

use crate::selectors::PathSelector;
use mapis_core::{
    BuildError, DispatchError, Handler, HandlerTable, Path, Selector, UnhandledVariantError,
    check_unique,
};
use std::sync::Arc;

/// A selector bound to a shared handler table.
///
/// Cloning a dispatcher shares the table; nothing is copied per call and no
/// state is kept between calls.
pub struct Dispatcher<S, Tb> {
    selector: S,
    table: Arc<Tb>,
}

impl<S: Clone, Tb> Clone for Dispatcher<S, Tb> {
    fn clone(&self) -> Self {
        Self {
            selector: self.selector.clone(),
            table: Arc::clone(&self.table),
        }
    }
}

impl<S: std::fmt::Debug, Tb: HandlerTable> std::fmt::Debug for Dispatcher<S, Tb> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut keys: Vec<&str> = self.table.keys().collect();
        keys.sort_unstable();
        f.debug_struct("Dispatcher")
            .field("selector", &self.selector)
            .field("keys", &keys)
            .finish()
    }
}

impl<S, Tb: HandlerTable> Dispatcher<S, Tb> {
    /// Bind `selector` to `table` without validation.
    pub fn new(selector: S, table: Tb) -> Self {
        Self::shared(selector, Arc::new(table))
    }

    /// Bind `selector` to a table shared with other dispatchers.
    pub fn shared(selector: S, table: Arc<Tb>) -> Self {
        Self { selector, table }
    }

    /// Bind `selector` to `table`, rejecting an empty table or one that
    /// lists a key twice.
    pub fn try_new(selector: S, table: Tb) -> Result<Self, BuildError> {
        if table.is_empty() {
            return Err(BuildError::EmptyTable);
        }
        check_unique(&table)?;
        Ok(Self::new(selector, table))
    }

    /// The selector used to extract keys.
    pub fn selector(&self) -> &S {
        &self.selector
    }

    /// The handler table.
    pub fn table(&self) -> &Tb {
        &self.table
    }

    /// Every key with a registered handler, sorted.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.table.keys().collect();
        keys.sort_unstable();
        keys
    }

    /// Find the handler `value` selects, without invoking it.
    pub fn resolve<T>(&self, value: &T) -> Result<&Tb::Handler, DispatchError>
    where
        T: ?Sized,
        S: Selector<T>,
    {
        let key = self.selector.select(value)?;

        #[cfg(feature = "tracing")]
        tracing::trace!(key = %key, path = %self.selector.path(), "resolving handler");

        match self.table.lookup(&key) {
            Some(handler) => Ok(handler),
            None => Err(UnhandledVariantError {
                key: key.into_owned(),
                path: self.selector.path().clone(),
            }
            .into()),
        }
    }

    /// Dispatch `value` to its handler, forwarding `args`.
    ///
    /// The handler's output is returned unchanged. Errors are returned only
    /// for failures of the dispatch itself; whatever the handler returns or
    /// panics with reaches the caller untouched.
    pub fn dispatch<T, Args>(
        &self,
        value: &T,
        args: Args,
    ) -> Result<<Tb::Handler as Handler<T, Args>>::Output, DispatchError>
    where
        T: ?Sized,
        S: Selector<T>,
        Tb::Handler: Handler<T, Args>,
    {
        let handler = self.resolve(value)?;
        Ok(handler.call(value, args))
    }

    /// Dispatch to fallible handlers, merging dispatch failures into the
    /// handler's own error type.
    pub fn try_dispatch<T, Args, O, E>(&self, value: &T, args: Args) -> Result<O, E>
    where
        T: ?Sized,
        S: Selector<T>,
        Tb::Handler: Handler<T, Args, Output = Result<O, E>>,
        E: From<DispatchError>,
    {
        self.dispatch(value, args)?
    }

    /// Turn the dispatcher into a plain function.
    pub fn into_fn<T, Args>(
        self,
    ) -> impl Fn(&T, Args) -> Result<<Tb::Handler as Handler<T, Args>>::Output, DispatchError>
    where
        T: ?Sized,
        S: Selector<T>,
        Tb::Handler: Handler<T, Args>,
    {
        move |value, args| self.dispatch(value, args)
    }
}

/// Build a dispatcher following `reduce ++ subset` into `table`.
///
/// Fails if the combined path is empty, the table has no handlers or lists
/// a key twice. Values are not inspected until they are dispatched.
pub fn build<Tb: HandlerTable>(
    reduce: impl Into<Path>,
    subset: impl Into<Path>,
    table: Tb,
) -> Result<Dispatcher<PathSelector, Tb>, BuildError> {
    let selector = PathSelector::compose(reduce, subset);
    if selector.path().is_empty() {
        return Err(BuildError::EmptyPath);
    }
    let dispatcher = Dispatcher::try_new(selector, table)?;

    #[cfg(feature = "tracing")]
    tracing::debug!(
        path = %dispatcher.selector().path(),
        handlers = dispatcher.table().len(),
        "built dispatcher"
    );

    Ok(dispatcher)
}

#[cfg(all(test, feature = "json"))]
mod tests {
    use super::*;
    use crate::tables::{ConstTable, HashMapTable};
    use mapis_core::ResolutionFailure;
    use serde_json::{Value, json};

    type Area = fn(&Value) -> f64;

    fn circle(v: &Value) -> f64 {
        let r = v["radius"].as_f64().unwrap_or_default();
        3.0 * r * r
    }

    fn square(v: &Value) -> f64 {
        let s = v["side"].as_f64().unwrap_or_default();
        s * s
    }

    fn areas() -> Dispatcher<PathSelector, ConstTable<Area, 2>> {
        build(
            ["kind"],
            Path::root(),
            ConstTable::new([("circle", circle as Area), ("square", square as Area)]),
        )
        .unwrap()
    }

    #[test]
    fn test_dispatch_to_matching_handler() {
        let d = areas();
        assert_eq!(d.dispatch(&json!({"kind": "circle", "radius": 2.0}), ()), Ok(12.0));
        assert_eq!(d.dispatch(&json!({"kind": "square", "side": 3.0}), ()), Ok(9.0));
    }

    #[test]
    fn test_unhandled_variant() {
        let err = areas()
            .dispatch(&json!({"kind": "triangle"}), ())
            .unwrap_err();
        assert_eq!(
            err,
            DispatchError::UnhandledVariant(UnhandledVariantError {
                key: "triangle".to_string(),
                path: Path::from(["kind"]),
            })
        );
    }

    #[test]
    fn test_path_failure_skips_lookup() {
        let err = areas().resolve(&json!({"shape": 1})).unwrap_err();
        match err {
            DispatchError::PathResolution(e) => {
                assert_eq!(e.reason, ResolutionFailure::MissingField)
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_build_rejects_empty_path_and_table() {
        let empty: HashMapTable<Area> = HashMapTable::new();
        assert_eq!(
            build(Path::root(), Path::root(), ConstTable::new([("a", circle as Area)])).err(),
            Some(BuildError::EmptyPath)
        );
        assert_eq!(build(["kind"], Path::root(), empty).err(), Some(BuildError::EmptyTable));

        let unchecked = Dispatcher::new(PathSelector::new(["kind"]), HashMapTable::<Area>::new());
        assert!(matches!(
            unchecked.dispatch(&json!({"kind": "circle"}), ()),
            Err(DispatchError::UnhandledVariant(_))
        ));
    }

    #[test]
    fn test_build_rejects_repeated_keys() {
        let table = ConstTable::new([
            ("circle", circle as Area),
            ("square", square as Area),
            ("circle", square as Area),
        ]);
        assert_eq!(
            build(["kind"], Path::root(), table).err(),
            Some(BuildError::DuplicateKey("circle".to_string()))
        );
    }

    #[test]
    fn test_try_dispatch_merges_errors() {
        #[derive(Debug, PartialEq)]
        enum AppError {
            Dispatch(DispatchError),
            Negative,
        }
        impl From<DispatchError> for AppError {
            fn from(e: DispatchError) -> Self {
                AppError::Dispatch(e)
            }
        }

        type Check = fn(&Value) -> Result<i64, AppError>;
        fn check(v: &Value) -> Result<i64, AppError> {
            match v["n"].as_i64() {
                Some(n) if n >= 0 => Ok(n),
                _ => Err(AppError::Negative),
            }
        }

        let d = build(["op"], Path::root(), ConstTable::new([("check", check as Check)])).unwrap();
        assert_eq!(d.try_dispatch(&json!({"op": "check", "n": 4}), ()), Ok(4));
        assert_eq!(
            d.try_dispatch(&json!({"op": "check", "n": -1}), ()),
            Err(AppError::Negative)
        );
        assert!(matches!(
            d.try_dispatch(&json!({"op": "other"}), ()),
            Err(AppError::Dispatch(DispatchError::UnhandledVariant(_)))
        ));
    }

    #[test]
    fn test_into_fn() {
        let area = areas().into_fn::<Value, ()>();
        assert_eq!(area(&json!({"kind": "square", "side": 2.0}), ()), Ok(4.0));
    }

    #[test]
    fn test_clone_shares_table() {
        let d = areas();
        let copy = d.clone();
        assert!(std::ptr::eq(d.table(), copy.table()));
        assert_eq!(copy.keys(), vec!["circle", "square"]);
    }
}
