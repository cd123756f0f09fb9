//! # mapis - Runtime Discriminator Dispatch
//!
//! `mapis` routes a value to one of several handlers by reading a
//! discriminator field at a fixed path inside the value. The path is split in
//! two: a *reduce* path locating a substructure and a *subset* path locating
//! the discriminator within it. Dispatching a value:
//!
//! 1. follows `reduce ++ subset` to the discriminator,
//! 2. looks its string form up in an immutable handler table,
//! 3. calls the handler with the original value and any extra arguments.
//!
//! Failures are typed: a path that cannot be followed is a
//! [`PathResolutionError`], a discriminator without a handler is an
//! [`UnhandledVariantError`]. Handler results, errors and panics reach the
//! caller unchanged.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use mapis::prelude::*;
//! use serde_json::{Value, json};
//!
//! let area = DispatcherBuilder::<Value, (), f64>::new()
//!     .reduce(["shape"])
//!     .subset(["kind"])
//!     .on("circle", |v: &Value| 3.14 * v["shape"]["r"].as_f64().unwrap_or(0.0).powi(2))
//!     .on("square", |v: &Value| v["shape"]["side"].as_f64().unwrap_or(0.0).powi(2))
//!     .build()?;
//!
//! let a = area.dispatch(&json!({"shape": {"kind": "square", "side": 2}}), ())?;
//! ```
//!
//! ## Closed Variant Sets
//!
//! Whenever the discriminator values are known up front, declare them with
//! `#[derive(Variants)]` (or [`DispatcherBuilder::expect_variants`]) and the
//! builder rejects tables with missing or unknown keys.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use mapis_core::{
    // Error types
    BoxError,
    // Handler
    BoxHandler,
    BuildError,
    DispatchError,
    Handler,
    // Tables
    HandlerTable,
    MapisError,
    ParsePathError,
    // Paths
    Path,
    PathResolutionError,
    // Selection
    Reduce,
    ResolutionFailure,
    Selector,
    SelectorKey,
    TableBuilder,
    Traverse,
    UnhandledVariantError,
    ValueKind,
    Variants,
    boxed,
    check_exhaustive,
    check_unique,
};

// Dispatch
pub use mapis_std::{BoxedDispatcher, Dispatcher, DispatcherBuilder, build};

/// Handler table implementations.
pub mod tables {
    pub use mapis_std::tables::{ConstTable, HashMapTable, HashMapTableBuilder};

    #[cfg(feature = "phf")]
    pub use mapis_std::tables::PhfTable;
}

/// Selector implementations.
pub mod selectors {
    pub use mapis_std::selectors::{
        Accessor, Field, KeyField, PathSelector, Then, field, key,
    };
}

/// Loading dispatcher paths and variant sets from JSON.
#[cfg(feature = "config")]
pub mod config {
    pub use mapis_std::config::{ConfigError, DispatchConfig};
}

/// Testing utilities.
pub mod testing {
    pub use mapis_std::testing::{CountingHandler, RecordingHandler};
}

/// Prelude module - common imports for mapis.
///
/// With the `macros` feature, `Variants` names both the trait and its derive.
///
/// # Usage
///
/// ```rust,ignore
/// use mapis::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        // Errors
        BuildError,
        DispatchError,
        // Dispatch
        Dispatcher,
        DispatcherBuilder,
        // Core traits
        Handler,
        HandlerTable,
        Path,
        Selector,
        SelectorKey,
        Variants,
        build,
        selectors::{Accessor, PathSelector, field, key},
        tables::{ConstTable, HashMapTable},
    };
}

#[cfg(feature = "macros")]
pub use mapis_macros::Variants;

#[cfg(feature = "phf")]
pub use phf;
