//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use crate::{TypeGraph, TypeId, TypeKind};

impl TypeGraph {
    pub(crate) fn ensure_node(&self, id: TypeId) -> &TypeKind {
        self.get(id).unwrap_or_else(|| {
            panic!(
                "TypeGraph: type {id} not found among {} nodes \
                 (ids must come from the graph they are used with)",
                self.len()
            )
        })
    }
}
