//! Grouping types into structural equivalence classes.

use structeq_core::TypeId;
use tracing::debug;

use crate::Checker;

impl Checker<'_> {
    /// Partition `ids` into equivalence classes, in first-seen order.
    ///
    /// Each id is compared against the first member of every existing class.
    /// This relies on the relation being transitive, which holds for
    /// structural equivalence of regular trees under any `Config`.
    pub fn partition<I>(&self, ids: I) -> Vec<Vec<TypeId>>
    where
        I: IntoIterator<Item = TypeId>,
    {
        let mut classes: Vec<Vec<TypeId>> = Vec::new();

        for id in ids {
            match classes
                .iter_mut()
                .find(|class| self.is_compatible(class[0], id))
            {
                Some(class) => class.push(id),
                None => classes.push(vec![id]),
            }
        }

        debug!(classes = classes.len(), "partition finished");
        classes
    }
}
