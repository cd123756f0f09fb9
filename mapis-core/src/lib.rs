//! # mapis-core
//!
//! Core traits for mapis, a runtime discriminator dispatch library.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! code that provides its own value types, selectors or handler tables
//! without pulling in the `mapis-std` implementations.
//!
//! # Dispatch in Three Steps
//!
//! ## Step 1: Selection ([`Selector`])
//!
//! A selector follows a [`Path`] from the root of a value down to its
//! discriminator field and renders that field as a string key. Dynamically
//! shaped values implement [`Traverse`] so string paths can walk them; typed
//! values compose a [`Reduce`] step with a selector instead.
//!
//! ## Step 2: Lookup ([`HandlerTable`])
//!
//! The key is looked up in an immutable table. A missing key is an
//! [`UnhandledVariantError`]; [`check_exhaustive`] and [`Variants`] move that
//! failure to build time whenever the set of selector values is known, and
//! [`check_unique`] rejects tables that list a key twice.
//!
//! ## Step 3: Invocation ([`Handler`])
//!
//! The matched handler receives the unmodified value plus the caller's extra
//! arguments and its output is returned verbatim.
//!
//! # Error Types
//!
//! - [`MapisError`] - Top-level error type
//! - [`DispatchError`] - Dispatch-time errors
//! - [`BuildError`] - Build-time errors

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod error;
mod handler;
mod key;
mod path;
mod selector;
mod table;
mod traverse;

// Re-exports
pub use error::{
    BoxError, BuildError, DispatchError, MapisError, PathResolutionError, ResolutionFailure,
    UnhandledVariantError,
};
pub use handler::{BoxHandler, Handler, boxed};
pub use key::{SelectorKey, Variants};
pub use path::{ParsePathError, Path};
pub use selector::{Reduce, Selector};
pub use table::{HandlerTable, TableBuilder, check_exhaustive, check_unique};
pub use traverse::{Traverse, ValueKind};
