//! Where and why two types are not structurally equivalent.

use std::fmt;

use structeq_core::Kind;

/// One step from a root towards the point of divergence.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum PathStep {
    /// Into the pointee of a pointer.
    Pointee,
    /// Into a struct member, named as on the left-hand side.
    Member(String),
}

/// Route from the compared roots, rendered C-style: `.next->value`.
/// A route ending at a pointee is wrapped in a dereference: `*(.next)`.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Path(pub Vec<PathStep>);

impl Path {
    pub fn steps(&self) -> &[PathStep] {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_steps(f, &self.0)
    }
}

/// A path ending at a pointee renders as a dereference of the pointer:
/// `*(.next)`, or `*<root>` for the pointee of the root itself.
fn write_steps(f: &mut fmt::Formatter<'_>, steps: &[PathStep]) -> fmt::Result {
    match steps.split_last() {
        None => f.write_str("<root>"),
        Some((PathStep::Pointee, [])) => f.write_str("*<root>"),
        Some((PathStep::Pointee, inner)) => {
            f.write_str("*(")?;
            write_steps(f, inner)?;
            f.write_str(")")
        }
        Some((PathStep::Member(_), _)) => {
            let mut after_pointee = false;
            for step in steps {
                match step {
                    PathStep::Pointee => {
                        f.write_str("->")?;
                        after_pointee = true;
                    }
                    PathStep::Member(name) => {
                        if !after_pointee {
                            f.write_str(".")?;
                        }
                        f.write_str(name)?;
                        after_pointee = false;
                    }
                }
            }
            Ok(())
        }
    }
}

/// The concrete difference found.
#[derive(Clone, PartialEq, Eq, Debug, thiserror::Error)]
pub enum MismatchReason {
    #[error("kind mismatch: {left} `{left_type}` vs {right} `{right_type}`")]
    Kind {
        left: Kind,
        right: Kind,
        left_type: String,
        right_type: String,
    },

    #[error("primitive mismatch: `{left}` vs `{right}`")]
    Primitive {
        left: &'static str,
        right: &'static str,
    },

    #[error("tag mismatch: `{left}` vs `{right}`")]
    Tag { left: String, right: String },

    #[error("member count mismatch: {left} vs {right}")]
    Arity { left: usize, right: usize },

    #[error("member {index} name mismatch: `{left}` vs `{right}`")]
    MemberName {
        index: usize,
        left: String,
        right: String,
    },
}

/// First difference found in depth-first member order.
#[derive(Clone, PartialEq, Eq, Debug, thiserror::Error)]
#[error("{reason} at {path}")]
pub struct Mismatch {
    pub path: Path,
    pub reason: MismatchReason,
}
