//! Selector extraction.
//!
//! A [`Selector`] reads the discriminator out of a value. A [`Reduce`] narrows
//! a value down to a substructure; composing a reduce step with a selector on
//! the substructure gives a selector on the whole value.

use crate::{error::PathResolutionError, path::Path};
use std::borrow::Cow;

/// Extracts the selector key from a value of type `T`.
pub trait Selector<T: ?Sized> {
    /// The path this selector follows, for error reports.
    fn path(&self) -> &Path;

    /// Resolve the selector key of `value`.
    fn select<'v>(&self, value: &'v T) -> Result<Cow<'v, str>, PathResolutionError>;
}

/// Narrows a value of type `T` to one of its substructures.
pub trait Reduce<T: ?Sized> {
    /// The substructure type.
    type Target: ?Sized;

    /// The steps this reduction covers, for error reports.
    fn path(&self) -> &Path;

    /// Follow the reduction.
    fn reduce<'v>(&self, value: &'v T) -> Result<&'v Self::Target, PathResolutionError>;
}

impl<T: ?Sized, S: Selector<T> + ?Sized> Selector<T> for &S {
    fn path(&self) -> &Path {
        (**self).path()
    }

    fn select<'v>(&self, value: &'v T) -> Result<Cow<'v, str>, PathResolutionError> {
        (**self).select(value)
    }
}

impl<T: ?Sized, S: Selector<T> + ?Sized> Selector<T> for Box<S> {
    fn path(&self) -> &Path {
        (**self).path()
    }

    fn select<'v>(&self, value: &'v T) -> Result<Cow<'v, str>, PathResolutionError> {
        (**self).select(value)
    }
}
