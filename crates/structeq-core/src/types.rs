//! Type node definitions.
//!
//! A node is one of three closed variants: a primitive leaf, a pointer to
//! another node, or a struct with an ordered list of named members.

use std::fmt;

use crate::Symbol;

/// Arena handle for a type node. Identity of a node is identity of its id.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct TypeId(pub(crate) u32);

impl TypeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Build an id from a raw index. The id is only valid for a graph that
    /// has at least `index + 1` nodes.
    #[inline]
    pub fn from_raw(index: u32) -> Self {
        Self(index)
    }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Scalar leaf kinds. Two primitives are compatible iff they are the same kind.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[repr(u8)]
pub enum Primitive {
    Char = 0,
    Short = 1,
    Int = 2,
    Long = 3,
    Float = 4,
    Double = 5,
}

impl Primitive {
    pub const ALL: [Primitive; 6] = [
        Primitive::Char,
        Primitive::Short,
        Primitive::Int,
        Primitive::Long,
        Primitive::Float,
        Primitive::Double,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Char => "char",
            Self::Short => "short",
            Self::Int => "int",
            Self::Long => "long",
            Self::Float => "float",
            Self::Double => "double",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }
}

/// Discriminant of a `TypeKind`, used where only the variant matters.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Kind {
    Primitive,
    Pointer,
    Struct,
}

impl Kind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Primitive => "primitive",
            Self::Pointer => "pointer",
            Self::Struct => "struct",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A named struct member. Members are matched by position, not by name.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Member {
    pub name: Symbol,
    pub ty: TypeId,
}

/// Struct payload.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct StructType {
    /// Label compared literally before any member is visited.
    pub tag: Symbol,
    pub members: Vec<Member>,
    /// False between `declare_struct` and `define_struct`.
    pub(crate) defined: bool,
}

impl StructType {
    pub fn is_defined(&self) -> bool {
        self.defined
    }
}

/// One type node.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum TypeKind {
    Primitive(Primitive),
    /// Non-owning reference to the pointee.
    Pointer(TypeId),
    Struct(StructType),
}

impl TypeKind {
    pub fn kind(&self) -> Kind {
        match self {
            Self::Primitive(_) => Kind::Primitive,
            Self::Pointer(_) => Kind::Pointer,
            Self::Struct(_) => Kind::Struct,
        }
    }

    pub fn as_struct(&self) -> Option<&StructType> {
        match self {
            Self::Struct(s) => Some(s),
            _ => None,
        }
    }

    pub fn pointee(&self) -> Option<TypeId> {
        match self {
            Self::Pointer(to) => Some(*to),
            _ => None,
        }
    }
}
