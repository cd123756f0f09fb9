//! Error types for mapis.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`MapisError`] - Top-level error type
//! - [`DispatchError`] - Errors raised while dispatching a value
//! - [`PathResolutionError`] - A path step could not be read
//! - [`UnhandledVariantError`] - The selector has no handler
//! - [`BuildError`] - Errors raised while building a dispatcher

use crate::{
    path::{ParsePathError, Path},
    traverse::ValueKind,
};
use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Top-level error type for all mapis operations.
#[derive(Error, Debug)]
pub enum MapisError {
    /// Building a dispatcher failed.
    #[error("build error: {0}")]
    Build(#[from] BuildError),

    /// Dispatching a value failed.
    #[error("dispatch error: {0}")]
    Dispatch(#[from] DispatchError),

    /// A path string could not be parsed.
    #[error(transparent)]
    Path(#[from] ParsePathError),

    /// A custom error occurred, e.g. while loading configuration.
    #[error(transparent)]
    Custom(BoxError),
}

/// Errors that can occur while dispatching a value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// The selector could not be reached.
    #[error(transparent)]
    PathResolution(#[from] PathResolutionError),

    /// The selector was reached but no handler is registered for it.
    #[error(transparent)]
    UnhandledVariant(#[from] UnhandledVariantError),
}

impl DispatchError {
    /// The path the failing dispatcher was built with.
    pub fn path(&self) -> &Path {
        match self {
            DispatchError::PathResolution(e) => &e.path,
            DispatchError::UnhandledVariant(e) => &e.path,
        }
    }
}

/// Why a path step failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionFailure {
    /// The field does not exist on the current value.
    MissingField,
    /// The current value cannot be indexed by field name.
    NotIndexable {
        /// Kind of the value the step was attempted on.
        found: ValueKind,
    },
    /// The path ended on a value that cannot be used as a key.
    NotAKey {
        /// Kind of the value found at the end of the path.
        found: ValueKind,
    },
}

impl std::fmt::Display for ResolutionFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResolutionFailure::MissingField => f.write_str("field is missing"),
            ResolutionFailure::NotIndexable { found } => {
                write!(f, "cannot read a field of {found}")
            }
            ResolutionFailure::NotAKey { found } => write!(f, "{found} is not a selector key"),
        }
    }
}

/// A step of the selector path could not be read.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("cannot resolve `{path}` at step {index} (`{step}`): {reason}")]
pub struct PathResolutionError {
    /// The full path being traversed.
    pub path: Path,
    /// Zero-based index of the failing step.
    pub index: usize,
    /// Name of the failing step.
    pub step: String,
    /// What went wrong.
    pub reason: ResolutionFailure,
}

impl PathResolutionError {
    /// Create an error for step `index` of `path`.
    pub fn new(path: &Path, index: usize, reason: ResolutionFailure) -> Self {
        Self {
            step: path.get(index).unwrap_or_default().to_string(),
            path: path.clone(),
            index,
            reason,
        }
    }

    /// Re-anchor an error raised by a nested selector under `prefix`.
    ///
    /// The step index is shifted by the prefix length and the reported path
    /// becomes `prefix ++ path`.
    pub fn rebase(mut self, prefix: &Path) -> Self {
        self.index += prefix.len();
        self.path = prefix.join(&self.path);
        self
    }
}

/// The selector has no entry in the handler table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("no handler registered for variant `{key}` (selected by `{path}`)")]
pub struct UnhandledVariantError {
    /// The selector value that was found.
    pub key: String,
    /// The path used to find it.
    pub path: Path,
}

/// Errors that can occur while building a dispatcher.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// The combined selector path has no steps.
    #[error("selector path is empty")]
    EmptyPath,

    /// No handlers were registered.
    #[error("handler table is empty")]
    EmptyTable,

    /// The same key was registered twice.
    #[error("duplicate handler for key: {0}")]
    DuplicateKey(String),

    /// Declared variants without a handler.
    #[error("no handler for declared variants: {}", .0.join(", "))]
    MissingHandlers(Vec<String>),

    /// Handlers registered for keys that were not declared.
    #[error("handlers registered for undeclared variants: {}", .0.join(", "))]
    UnknownVariants(Vec<String>),
}

impl From<BoxError> for MapisError {
    fn from(err: BoxError) -> Self {
        MapisError::Custom(err)
    }
}

impl From<PathResolutionError> for MapisError {
    fn from(err: PathResolutionError) -> Self {
        MapisError::Dispatch(err.into())
    }
}

impl From<UnhandledVariantError> for MapisError {
    fn from(err: UnhandledVariantError) -> Self {
        MapisError::Dispatch(err.into())
    }
}
