//! TypeGraph: arena of type nodes plus the interner for tags and member names.
//!
//! Nodes never move and are never removed, so a `TypeId` stays valid for the
//! lifetime of the graph. Cycles are built in two steps: `declare_struct`
//! hands out an id for a struct whose members are not known yet, pointers can
//! target that id, and `define_struct` fills the members in afterwards.

use crate::{GraphError, Interner, Member, Primitive, StructType, Symbol, TypeId, TypeKind};

#[derive(Debug, Clone, Default)]
pub struct TypeGraph {
    interner: Interner,
    nodes: Vec<TypeKind>,
    /// Shared primitive nodes, indexed by `Primitive as usize`.
    primitives: [Option<TypeId>; Primitive::ALL.len()],
}

impl TypeGraph {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, kind: TypeKind) -> TypeId {
        let id = TypeId(self.nodes.len() as u32);
        self.nodes.push(kind);
        id
    }

    fn check_owned(&self, id: TypeId) -> Result<(), GraphError> {
        if self.contains(id) {
            Ok(())
        } else {
            Err(GraphError::UnknownTypeId(id))
        }
    }

    // ========== Construction ==========

    /// Get the node for a primitive kind, creating it on first use.
    pub fn primitive(&mut self, primitive: Primitive) -> TypeId {
        let slot = primitive as usize;
        if let Some(id) = self.primitives[slot] {
            return id;
        }

        let id = self.push(TypeKind::Primitive(primitive));
        self.primitives[slot] = Some(id);
        id
    }

    /// Allocate a pointer node. Every call yields a distinct node.
    pub fn pointer(&mut self, to: TypeId) -> Result<TypeId, GraphError> {
        self.check_owned(to)?;
        Ok(self.push(TypeKind::Pointer(to)))
    }

    /// Allocate a struct whose members will be supplied by `define_struct`.
    pub fn declare_struct(&mut self, tag: &str) -> TypeId {
        let tag = self.interner.intern(tag);
        self.push(TypeKind::Struct(StructType {
            tag,
            members: Vec::new(),
            defined: false,
        }))
    }

    /// Supply the members of a declared struct. Allowed once per struct.
    pub fn define_struct<'a, I>(&mut self, id: TypeId, members: I) -> Result<(), GraphError>
    where
        I: IntoIterator<Item = (&'a str, TypeId)>,
    {
        self.check_owned(id)?;

        let mut resolved = Vec::new();
        for (name, ty) in members {
            self.check_owned(ty)?;
            resolved.push(Member {
                name: self.interner.intern(name),
                ty,
            });
        }

        let TypeKind::Struct(info) = &mut self.nodes[id.index()] else {
            return Err(GraphError::NotAStruct(id));
        };
        if info.defined {
            let tag = self.interner.resolve(info.tag).to_owned();
            return Err(GraphError::AlreadyDefined { id, tag });
        }

        info.members = resolved;
        info.defined = true;
        Ok(())
    }

    /// Declare and define a struct in one step (no self-reference possible).
    pub fn struct_type<'a, I>(&mut self, tag: &str, members: I) -> Result<TypeId, GraphError>
    where
        I: IntoIterator<Item = (&'a str, TypeId)>,
    {
        let id = self.declare_struct(tag);
        self.define_struct(id, members)?;
        Ok(id)
    }

    /// Check that every declared struct has been defined.
    pub fn validate(&self) -> Result<(), GraphError> {
        for (id, kind) in self.iter() {
            if let TypeKind::Struct(info) = kind {
                if !info.defined {
                    return Err(GraphError::Incomplete {
                        id,
                        tag: self.resolve(info.tag).to_owned(),
                    });
                }
            }
        }
        Ok(())
    }

    // ========== Structural access ==========

    pub fn get(&self, id: TypeId) -> Option<&TypeKind> {
        self.nodes.get(id.index())
    }

    pub fn contains(&self, id: TypeId) -> bool {
        id.index() < self.nodes.len()
    }

    /// Node for an id owned by this graph.
    ///
    /// # Panics
    /// Panics if `id` was not produced by this graph.
    pub fn kind(&self, id: TypeId) -> &TypeKind {
        self.ensure_node(id)
    }

    pub fn pointee(&self, id: TypeId) -> Option<TypeId> {
        self.ensure_node(id).pointee()
    }

    pub fn tag(&self, id: TypeId) -> Option<Symbol> {
        self.ensure_node(id).as_struct().map(|s| s.tag)
    }

    /// Members of a struct; empty for other kinds.
    pub fn members(&self, id: TypeId) -> &[Member] {
        match self.ensure_node(id) {
            TypeKind::Struct(info) => &info.members,
            _ => &[],
        }
    }

    pub fn member_count(&self, id: TypeId) -> usize {
        self.members(id).len()
    }

    pub fn member(&self, id: TypeId, index: usize) -> Option<&Member> {
        self.members(id).get(index)
    }

    #[inline]
    pub fn resolve(&self, sym: Symbol) -> &str {
        self.interner.resolve(sym)
    }

    // ========== Iteration ==========

    pub fn iter(&self) -> impl Iterator<Item = (TypeId, &TypeKind)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, k)| (TypeId(i as u32), k))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
