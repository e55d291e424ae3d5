//! The equivalence walk.
//!
//! Two roots are compared by draining a stack of obligations. Comparing two
//! structs first consults the assumption trail: a pair that is already being
//! compared further up the same path counts as equal. Otherwise the pair is
//! pushed onto a fresh trail shared by all of its member obligations.
//!
//! Obligations are pushed in reverse member order, so they are discharged in
//! the same depth-first order a recursive descent would use. The verdict is
//! the conjunction of all obligations and the first failure ends the walk.

use structeq_core::dump::type_name;
use structeq_core::{Symbol, TypeGraph, TypeId, TypeKind};
use tracing::{debug, trace};

use crate::config::{Config, NamePolicy, TagPolicy};
use crate::mismatch::{Mismatch, MismatchReason, Path, PathStep};
use crate::trail::{Stack, Trail};

#[derive(Clone, Copy, Debug)]
enum Step {
    Pointee,
    Member(Symbol),
}

enum Task {
    /// Compare two nodes.
    Compare {
        a: TypeId,
        b: TypeId,
        trail: Trail,
        route: Stack<Step>,
    },
    /// Compare member `index` of two structs already known to match in tag and arity.
    Member {
        a: TypeId,
        b: TypeId,
        index: usize,
        trail: Trail,
        route: Stack<Step>,
    },
}

#[derive(Default)]
struct Walk {
    tasks: Vec<Task>,
    visited: usize,
    deepest: usize,
}

/// Structural equivalence checker over one graph.
///
/// Holds no state between calls; a `Checker` can be shared freely and used
/// from several threads at once.
#[derive(Clone, Copy, Debug)]
pub struct Checker<'g> {
    graph: &'g TypeGraph,
    config: Config,
}

impl<'g> Checker<'g> {
    pub fn new(graph: &'g TypeGraph) -> Self {
        Self {
            graph,
            config: Config::default(),
        }
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    pub fn graph(&self) -> &'g TypeGraph {
        self.graph
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Whether `a` and `b` are structurally equivalent.
    pub fn is_compatible(&self, a: TypeId, b: TypeId) -> bool {
        self.explain(a, b).is_ok()
    }

    /// Like `is_compatible`, but reports the first difference found.
    pub fn explain(&self, a: TypeId, b: TypeId) -> Result<(), Mismatch> {
        let mut walk = Walk::default();
        walk.tasks.push(Task::Compare {
            a,
            b,
            trail: Trail::new(),
            route: Stack::new(),
        });

        let result = self.drain(&mut walk);

        debug!(
            left = %a,
            right = %b,
            compatible = result.is_ok(),
            visited = walk.visited,
            deepest = walk.deepest,
            "comparison finished"
        );
        result
    }

    fn drain(&self, walk: &mut Walk) -> Result<(), Mismatch> {
        while let Some(task) = walk.tasks.pop() {
            walk.visited += 1;
            match task {
                Task::Compare { a, b, trail, route } => self.compare(walk, a, b, trail, route)?,
                Task::Member {
                    a,
                    b,
                    index,
                    trail,
                    route,
                } => self.member(walk, a, b, index, trail, route)?,
            }
        }
        Ok(())
    }

    fn compare(
        &self,
        walk: &mut Walk,
        a: TypeId,
        b: TypeId,
        trail: Trail,
        route: Stack<Step>,
    ) -> Result<(), Mismatch> {
        if a == b {
            return Ok(());
        }

        match (self.graph.kind(a), self.graph.kind(b)) {
            (TypeKind::Primitive(pa), TypeKind::Primitive(pb)) => {
                if pa != pb {
                    return Err(self.mismatch(
                        &route,
                        MismatchReason::Primitive {
                            left: pa.name(),
                            right: pb.name(),
                        },
                    ));
                }
                Ok(())
            }

            (TypeKind::Pointer(ta), TypeKind::Pointer(tb)) => {
                walk.tasks.push(Task::Compare {
                    a: *ta,
                    b: *tb,
                    trail,
                    route: route.push(Step::Pointee),
                });
                Ok(())
            }

            (TypeKind::Struct(sa), TypeKind::Struct(sb)) => {
                if trail.assumes(a, b) {
                    trace!(left = %a, right = %b, depth = trail.depth(), "pair assumed by trail");
                    return Ok(());
                }

                if sa.members.len() != sb.members.len() {
                    return Err(self.mismatch(
                        &route,
                        MismatchReason::Arity {
                            left: sa.members.len(),
                            right: sb.members.len(),
                        },
                    ));
                }

                if self.config.tags == TagPolicy::Exact && sa.tag != sb.tag {
                    return Err(self.mismatch(
                        &route,
                        MismatchReason::Tag {
                            left: self.graph.resolve(sa.tag).to_owned(),
                            right: self.graph.resolve(sb.tag).to_owned(),
                        },
                    ));
                }

                let trail = trail.extend(a, b);
                walk.deepest = walk.deepest.max(trail.depth());
                trace!(left = %a, right = %b, depth = trail.depth(), "assuming pair");

                for index in (0..sa.members.len()).rev() {
                    walk.tasks.push(Task::Member {
                        a,
                        b,
                        index,
                        trail: trail.clone(),
                        route: route.clone(),
                    });
                }
                Ok(())
            }

            (ka, kb) => Err(self.mismatch(
                &route,
                MismatchReason::Kind {
                    left: ka.kind(),
                    right: kb.kind(),
                    left_type: type_name(self.graph, a),
                    right_type: type_name(self.graph, b),
                },
            )),
        }
    }

    fn member(
        &self,
        walk: &mut Walk,
        a: TypeId,
        b: TypeId,
        index: usize,
        trail: Trail,
        route: Stack<Step>,
    ) -> Result<(), Mismatch> {
        let (Some(ma), Some(mb)) = (self.graph.member(a, index), self.graph.member(b, index))
        else {
            unreachable!("member obligations are only created within arity");
        };

        if self.config.member_names == NamePolicy::Exact && ma.name != mb.name {
            return Err(self.mismatch(
                &route,
                MismatchReason::MemberName {
                    index,
                    left: self.graph.resolve(ma.name).to_owned(),
                    right: self.graph.resolve(mb.name).to_owned(),
                },
            ));
        }

        walk.tasks.push(Task::Compare {
            a: ma.ty,
            b: mb.ty,
            trail,
            route: route.push(Step::Member(ma.name)),
        });
        Ok(())
    }

    fn mismatch(&self, route: &Stack<Step>, reason: MismatchReason) -> Mismatch {
        let mut steps: Vec<_> = route
            .iter()
            .map(|step| match step {
                Step::Pointee => PathStep::Pointee,
                Step::Member(name) => PathStep::Member(self.graph.resolve(*name).to_owned()),
            })
            .collect();
        steps.reverse();

        trace!(%reason, "mismatch");
        Mismatch {
            path: Path(steps),
            reason,
        }
    }
}

/// Whether two nodes of `graph` are structurally equivalent, using the
/// default configuration.
pub fn is_compatible(graph: &TypeGraph, a: TypeId, b: TypeId) -> bool {
    Checker::new(graph).is_compatible(a, b)
}
