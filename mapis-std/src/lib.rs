//! # mapis-std
//!
//! Standard implementations for the mapis dispatch library.
//!
//! This crate provides:
//! - **Dispatch**: [`Dispatcher`], [`build`] and [`DispatcherBuilder`]
//! - **Selectors**: string paths over JSON values, typed accessors
//! - **Tables**: `HashMap`, const array and perfect hash handler tables
//! - **Configuration**: paths and variant sets loaded from JSON (`config` feature)
//! - **Testing**: recording and counting handlers

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use mapis_core;

// Modules
pub mod builder;
#[cfg(feature = "config")]
pub mod config;
pub mod dispatcher;
pub mod selectors;
pub mod tables;
pub mod testing;

pub use builder::{BoxedDispatcher, DispatcherBuilder};
pub use dispatcher::{Dispatcher, build};
