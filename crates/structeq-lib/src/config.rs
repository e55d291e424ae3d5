//! Comparison options.
//!
//! The defaults give the exact algorithm: tags and member names are compared
//! literally. Relaxing either yields a coarser, still symmetric, relation.

use serde::{Deserialize, Serialize};

/// How struct tags take part in the comparison.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagPolicy {
    /// Tags must be equal before members are visited.
    #[default]
    Exact,
    /// Tags are not compared; only shape counts.
    Ignore,
}

/// How member names take part in the comparison.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NamePolicy {
    /// Member `i` must carry the same name on both sides.
    #[default]
    Exact,
    /// Members are matched by position and type only.
    Ignore,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub(crate) tags: TagPolicy,
    pub(crate) member_names: NamePolicy,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tags(mut self, policy: TagPolicy) -> Self {
        self.tags = policy;
        self
    }

    pub fn member_names(mut self, policy: NamePolicy) -> Self {
        self.member_names = policy;
        self
    }

    pub fn tag_policy(&self) -> TagPolicy {
        self.tags
    }

    pub fn name_policy(&self) -> NamePolicy {
        self.member_names
    }
}
