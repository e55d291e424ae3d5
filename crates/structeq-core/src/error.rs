//! Errors raised while building a type graph.

use crate::TypeId;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    #[error("type {0} is not a struct")]
    NotAStruct(TypeId),

    #[error("struct {tag} ({id}) is already defined")]
    AlreadyDefined { id: TypeId, tag: String },

    #[error("type {0} does not belong to this graph")]
    UnknownTypeId(TypeId),

    #[error("struct {tag} ({id}) is declared but never defined")]
    Incomplete { id: TypeId, tag: String },

    /// A description refers to a name that is neither a primitive nor a definition.
    #[error("unknown type `{0}`")]
    UnknownType(String),

    #[error("definition `{0}` shadows a primitive type")]
    ShadowsPrimitive(String),

    #[error("definition `{0}` appears more than once")]
    DuplicateDefinition(String),

    #[error("invalid graph description: {0}")]
    InvalidJson(String),
}

impl From<serde_json::Error> for GraphError {
    fn from(e: serde_json::Error) -> Self {
        Self::InvalidJson(e.to_string())
    }
}
