//! Typed accessor composition.
//!
//! Instead of looking fields up by name at runtime, typed values are walked
//! with plain functions supplied at build time. Each accessor still carries a
//! field name so failures are reported with the same [`PathResolutionError`]
//! shape as string paths.
//!
//! ```rust,ignore
//! use mapis::selectors::{field, key, Accessor};
//!
//! let selector = field("shape", |doc: &Document| doc.shape.as_ref())
//!     .then(key("kind", |shape: &Shape| Some(&shape.kind)));
//! ```

use mapis_core::{
    Path, PathResolutionError, Reduce, ResolutionFailure, Selector, SelectorKey,
};
use std::{borrow::Cow, marker::PhantomData};

/// Common surface of the accessor types: their steps and composition.
pub trait Accessor: Sized {
    /// The steps this accessor covers.
    fn steps(&self) -> &Path;

    /// Follow this accessor, then `next` on its result.
    fn then<N: Accessor>(self, next: N) -> Then<Self, N> {
        let path = self.steps().join(next.steps());
        Then {
            first: self,
            second: next,
            path,
        }
    }
}

/// A reduce step reading one field of `T` as a `U`.
///
/// `None` from the accessor function means the field is absent.
pub struct Field<T: ?Sized, U: ?Sized, F> {
    path: Path,
    get: F,
    _marker: PhantomData<fn(&T) -> &U>,
}

/// Build a [`Field`] reduce step named `name`.
pub fn field<T, U, F>(name: impl Into<String>, get: F) -> Field<T, U, F>
where
    T: ?Sized,
    U: ?Sized,
    F: Fn(&T) -> Option<&U>,
{
    Field {
        path: Path::new([name.into()]),
        get,
        _marker: PhantomData,
    }
}

impl<T: ?Sized, U: ?Sized, F> Accessor for Field<T, U, F> {
    fn steps(&self) -> &Path {
        &self.path
    }
}

impl<T: ?Sized, U: ?Sized, F> Reduce<T> for Field<T, U, F>
where
    F: Fn(&T) -> Option<&U>,
{
    type Target = U;

    fn path(&self) -> &Path {
        &self.path
    }

    fn reduce<'v>(&self, value: &'v T) -> Result<&'v U, PathResolutionError> {
        (self.get)(value)
            .ok_or_else(|| PathResolutionError::new(&self.path, 0, ResolutionFailure::MissingField))
    }
}

/// A terminal step reading the selector field of `T`.
///
/// The key type must be owned (`'static`), e.g. an enum or `str`.
pub struct KeyField<T: ?Sized, K: ?Sized, F> {
    path: Path,
    get: F,
    _marker: PhantomData<fn(&T) -> &K>,
}

/// Build a [`KeyField`] selector named `name`.
pub fn key<T, K, F>(name: impl Into<String>, get: F) -> KeyField<T, K, F>
where
    T: ?Sized,
    K: SelectorKey + ?Sized,
    F: Fn(&T) -> Option<&K>,
{
    KeyField {
        path: Path::new([name.into()]),
        get,
        _marker: PhantomData,
    }
}

impl<T: ?Sized, K: ?Sized, F> Accessor for KeyField<T, K, F> {
    fn steps(&self) -> &Path {
        &self.path
    }
}

impl<T: ?Sized, K, F> Selector<T> for KeyField<T, K, F>
where
    K: SelectorKey + ?Sized + 'static,
    F: Fn(&T) -> Option<&K>,
{
    fn path(&self) -> &Path {
        &self.path
    }

    fn select<'v>(&self, value: &'v T) -> Result<Cow<'v, str>, PathResolutionError> {
        let found = (self.get)(value).ok_or_else(|| {
            PathResolutionError::new(&self.path, 0, ResolutionFailure::MissingField)
        })?;
        Ok(found.selector_key())
    }
}

/// Two accessors followed one after the other.
///
/// A reduce step followed by a selector is a selector; two reduce steps are
/// again a reduce step. Failures in the second accessor are reported at
/// their position in the combined path. Intermediate types must be owned.
pub struct Then<A, B> {
    first: A,
    second: B,
    path: Path,
}

impl<A, B> Accessor for Then<A, B> {
    fn steps(&self) -> &Path {
        &self.path
    }
}

impl<T, A, B> Selector<T> for Then<A, B>
where
    T: ?Sized,
    A: Reduce<T>,
    A::Target: 'static,
    B: Selector<A::Target>,
{
    fn path(&self) -> &Path {
        &self.path
    }

    fn select<'v>(&self, value: &'v T) -> Result<Cow<'v, str>, PathResolutionError> {
        let inner = self.first.reduce(value).map_err(|mut e| {
            e.path = self.path.clone();
            e
        })?;
        self.second
            .select(inner)
            .map_err(|e| e.rebase(self.first.path()))
    }
}

impl<T, A, B> Reduce<T> for Then<A, B>
where
    T: ?Sized,
    A: Reduce<T>,
    A::Target: 'static,
    B: Reduce<A::Target>,
{
    type Target = B::Target;

    fn path(&self) -> &Path {
        &self.path
    }

    fn reduce<'v>(&self, value: &'v T) -> Result<&'v Self::Target, PathResolutionError> {
        let inner = self.first.reduce(value).map_err(|mut e| {
            e.path = self.path.clone();
            e
        })?;
        self.second
            .reduce(inner)
            .map_err(|e| e.rebase(self.first.path()))
    }
}
