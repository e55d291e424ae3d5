//! structeq: structural equivalence of possibly cyclic type graphs.
//!
//! Two types are equivalent when they have the same shape: same kinds, same
//! struct tags and member names in the same order, and equivalent member
//! types. Graphs may be cyclic; the check assumes a struct pair equal while
//! comparing its members, so every comparison terminates.
//!
//! # Example
//!
//! ```
//! use structeq_core::{Primitive, TypeGraph};
//! use structeq_lib::is_compatible;
//!
//! let mut graph = TypeGraph::new();
//! let int = graph.primitive(Primitive::Int);
//!
//! let list = |graph: &mut TypeGraph| {
//!     let node = graph.declare_struct("list");
//!     let next = graph.pointer(node).unwrap();
//!     graph.define_struct(node, [("value", int), ("next", next)]).unwrap();
//!     node
//! };
//! let a = list(&mut graph);
//! let b = list(&mut graph);
//!
//! assert_ne!(a, b);
//! assert!(is_compatible(&graph, a, b));
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod classes;
mod config;
mod engine;
mod mismatch;
mod trail;

#[cfg(test)]
mod test_utils;

#[cfg(test)]
mod engine_tests;

pub use config::{Config, NamePolicy, TagPolicy};
pub use engine::{Checker, is_compatible};
pub use mismatch::{Mismatch, MismatchReason, Path, PathStep};
pub use trail::Trail;
