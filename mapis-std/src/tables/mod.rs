//! # Handler Tables
//!
//! This module provides the handler table implementations:
//!
//! - **HashMap tables**: Built at runtime, any number of keys.
//! - **Const tables**: Fixed-size arrays, no allocation.
//! - **PHF tables**: Compile-time perfect hash maps (`phf` feature).
//!
//! # Choosing a Table
//!
//! | Table | Use Case | Lookup |
//! |-------|----------|--------|
//! | `HashMapTable` | Handlers registered at runtime, boxed closures | Hash |
//! | `ConstTable` | Small fixed set of `fn` handlers | Linear / binary search |
//! | `PhfTable` | Large static set known at compile time | Perfect hash |

mod const_table;
mod hashmap;
#[cfg(feature = "phf")]
mod phf_table;

pub use const_table::ConstTable;
pub use hashmap::{HashMapTable, HashMapTableBuilder};
#[cfg(feature = "phf")]
pub use phf_table::PhfTable;
