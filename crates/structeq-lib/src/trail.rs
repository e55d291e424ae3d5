//! Persistent stacks for the comparison walk.
//!
//! Extending a stack allocates one frame and shares the tail, so every
//! pending obligation can hold its own view of the trail without copying.
//! Nothing is ever popped: a view simply stops being referenced when the
//! obligation holding it is done.

use std::rc::Rc;

use structeq_core::TypeId;

#[derive(Debug)]
struct Frame<T> {
    value: T,
    link: Option<Rc<Frame<T>>>,
}

/// Immutable cons list. Cloning is O(1).
#[derive(Debug)]
pub(crate) struct Stack<T> {
    head: Option<Rc<Frame<T>>>,
    len: usize,
}

impl<T> Stack<T> {
    pub(crate) fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// A new stack with `value` on top of `self`; `self` is unchanged.
    pub(crate) fn push(&self, value: T) -> Self {
        Self {
            head: Some(Rc::new(Frame {
                value,
                link: self.head.clone(),
            })),
            len: self.len + 1,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Iterate from the most recent entry to the oldest.
    pub(crate) fn iter(&self) -> impl Iterator<Item = &T> {
        std::iter::successors(self.head.as_deref(), |frame| frame.link.as_deref())
            .map(|frame| &frame.value)
    }
}

impl<T> Clone for Stack<T> {
    fn clone(&self) -> Self {
        Self {
            head: self.head.clone(),
            len: self.len,
        }
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Unlink frames one at a time; the default drop recurses once per frame.
impl<T> Drop for Stack<T> {
    fn drop(&mut self) {
        let mut next = self.head.take();
        while let Some(frame) = next {
            match Rc::try_unwrap(frame) {
                Ok(mut frame) => next = frame.link.take(),
                Err(_) => break,
            }
        }
    }
}

/// Struct pairs assumed equivalent while their members are being compared.
#[derive(Debug, Clone, Default)]
pub struct Trail {
    pairs: Stack<(TypeId, TypeId)>,
}

impl Trail {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `(a, b)` or `(b, a)` is already assumed.
    pub fn assumes(&self, a: TypeId, b: TypeId) -> bool {
        self.pairs
            .iter()
            .any(|&(x, y)| (x == a && y == b) || (x == b && y == a))
    }

    /// A trail that additionally assumes `(a, b)`.
    pub fn extend(&self, a: TypeId, b: TypeId) -> Self {
        Self {
            pairs: self.pairs.push((a, b)),
        }
    }

    /// Number of assumed pairs.
    pub fn depth(&self) -> usize {
        self.pairs.len()
    }

    /// Assumed pairs, innermost first.
    pub fn pairs(&self) -> impl Iterator<Item = (TypeId, TypeId)> + '_ {
        self.pairs.iter().copied()
    }
}
