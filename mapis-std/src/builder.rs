//! Fluent construction of dispatchers over boxed handlers.

use crate::{
    dispatcher::Dispatcher,
    selectors::PathSelector,
    tables::{HashMapTable, HashMapTableBuilder},
};
use mapis_core::{
    BoxHandler, BuildError, Handler, HandlerTable, Path, Selector, SelectorKey, TableBuilder,
    Variants, check_exhaustive,
};

/// A dispatcher over a runtime-built table of boxed handlers.
pub type BoxedDispatcher<T, Args, R, S = PathSelector> =
    Dispatcher<S, HashMapTable<BoxHandler<T, Args, R>>>;

/// Builder for dispatchers whose handlers are registered one by one.
///
/// Registration errors are kept until [`build`](Self::build) so calls can be
/// chained. Validation happens in this order: empty path, duplicate key,
/// empty table, then the declared variant set if one was given.
///
/// # Example
///
/// ```rust,ignore
/// let area = DispatcherBuilder::<Value, (), f64>::new()
///     .path(["kind"])
///     .expect_variants(["circle", "square"])
///     .on("circle", |v: &Value| circle_area(v))
///     .on("square", |v: &Value| square_area(v))
///     .build()?;
/// ```
pub struct DispatcherBuilder<T: ?Sized, Args, R> {
    reduce: Path,
    subset: Path,
    table: HashMapTableBuilder<BoxHandler<T, Args, R>>,
    declared: Option<Vec<String>>,
    error: Option<BuildError>,
}

impl<T: ?Sized, Args, R> Default for DispatcherBuilder<T, Args, R> {
    fn default() -> Self {
        Self {
            reduce: Path::root(),
            subset: Path::root(),
            table: HashMapTableBuilder::default(),
            declared: None,
            error: None,
        }
    }
}

impl<T: ?Sized, Args, R> DispatcherBuilder<T, Args, R> {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the path leading to the substructure holding the selector.
    pub fn reduce(mut self, path: impl Into<Path>) -> Self {
        self.reduce = path.into();
        self
    }

    /// Set the path from that substructure to the selector.
    pub fn subset(mut self, path: impl Into<Path>) -> Self {
        self.subset = path.into();
        self
    }

    /// Set the whole selector path at once.
    pub fn path(self, path: impl Into<Path>) -> Self {
        self.reduce(path).subset(Path::root())
    }

    /// The combined selector path configured so far.
    pub fn selector_path(&self) -> Path {
        self.reduce.join(&self.subset)
    }

    /// Register `handler` for the selector value `key`.
    pub fn on<K, H>(mut self, key: K, handler: H) -> Self
    where
        K: SelectorKey,
        H: Handler<T, Args, Output = R> + Send + Sync + 'static,
    {
        let key = key.selector_key().into_owned();
        if let Err(e) = self.table.insert(key, BoxHandler::new(handler)) {
            if self.error.is_none() {
                self.error = Some(e);
            }
        }
        self
    }

    /// Let a later registration replace an earlier one with the same key.
    pub fn allow_overrides(mut self) -> Self {
        self.table = self.table.allow_duplicates();
        self
    }

    /// Declare the valid selector values as the variants of `V`.
    pub fn variants<V: Variants>(self) -> Self {
        self.expect_variants(V::VARIANTS.iter().copied())
    }

    /// Declare the valid selector values explicitly.
    pub fn expect_variants<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.declared = Some(keys.into_iter().map(Into::into).collect());
        self
    }

    /// Apply a loaded configuration: paths and, if present, the variant set.
    #[cfg(feature = "config")]
    pub fn from_config(config: &crate::config::DispatchConfig) -> Self {
        let builder = Self::new()
            .reduce(config.reduce.clone())
            .subset(config.subset.clone());
        match &config.variants {
            Some(variants) => builder.expect_variants(variants.iter().cloned()),
            None => builder,
        }
    }

    /// Build a dispatcher following the configured string path.
    pub fn build(self) -> Result<BoxedDispatcher<T, Args, R>, BuildError> {
        let selector = PathSelector::new(self.selector_path());
        if selector.path().is_empty() {
            return Err(BuildError::EmptyPath);
        }
        let table = self.finish()?;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            path = %selector.path(),
            handlers = table.len(),
            "built dispatcher"
        );

        Ok(Dispatcher::new(selector, table))
    }

    /// Build a dispatcher using `selector` instead of the configured paths.
    pub fn build_with<S>(self, selector: S) -> Result<BoxedDispatcher<T, Args, R, S>, BuildError>
    where
        S: Selector<T>,
    {
        let table = self.finish()?;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            path = %selector.path(),
            handlers = table.len(),
            "built dispatcher"
        );

        Ok(Dispatcher::new(selector, table))
    }

    fn finish(self) -> Result<HashMapTable<BoxHandler<T, Args, R>>, BuildError> {
        if let Some(e) = self.error {
            return Err(e);
        }
        let table = self.table.build()?;
        if table.is_empty() {
            return Err(BuildError::EmptyTable);
        }
        if let Some(declared) = &self.declared {
            check_exhaustive(&table, declared)?;
        }
        Ok(table)
    }
}
