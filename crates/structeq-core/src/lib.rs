#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Type graph data model for structural equivalence checking.
//!
//! Two layers:
//! - **Description layer** (`raw`): 1:1 mapping to the JSON graph description
//! - **Graph layer** (`TypeGraph`): arena of type nodes addressed by `TypeId`
//!
//! Struct members refer to other nodes by `TypeId`, so cycles are expressed
//! without shared ownership: declare a struct first, point at it, then define
//! its members.

mod colors;
pub mod dump;
mod error;
mod graph;
mod interner;
mod invariants;
pub mod raw;
mod types;

#[cfg(test)]
mod types_tests;

pub use colors::Colors;
pub use error::GraphError;
pub use graph::TypeGraph;
use interner::Interner;
pub use interner::Symbol;
pub use raw::NamedGraph;
pub use types::{Kind, Member, Primitive, StructType, TypeId, TypeKind};
