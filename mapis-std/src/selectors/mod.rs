//! Selector implementations.
//!
//! - [`PathSelector`]: walks a string [`Path`](mapis_core::Path) over any
//!   [`Traverse`](mapis_core::Traverse) value, e.g. `serde_json::Value`.
//! - [`field`] / [`key`] / [`Accessor::then`]: typed accessor functions
//!   composed into a selector, for values with a static shape.

mod accessor;
mod path;

pub use accessor::{Accessor, Field, KeyField, Then, field, key};
pub use path::PathSelector;
