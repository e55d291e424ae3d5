//! JSON graph description.
//!
//! The description maps definition names to struct definitions. Member types
//! refer to primitives or to other definitions by name, or wrap a reference
//! in `{ "ptr": ... }`:
//!
//! ```
//! use structeq_core::NamedGraph;
//!
//! let named = NamedGraph::from_json(r#"{
//!     "list": { "tag": "list", "members": [
//!         { "name": "value", "type": "int" },
//!         { "name": "next", "type": { "ptr": "list" } }
//!     ] }
//! }"#).unwrap();
//!
//! assert!(named.get("list").is_some());
//! ```
//!
//! Every definition is declared before any is defined, so definitions may
//! refer to each other in any order and form cycles.

use std::fmt;

use indexmap::IndexMap;
use indexmap::map::Entry;
use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};

use crate::{GraphError, Primitive, TypeGraph, TypeId};

/// Struct definition as written in the description.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct RawStruct {
    pub tag: String,
    #[serde(default)]
    pub members: Vec<RawMember>,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct RawMember {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: RawTypeRef,
}

/// Reference to a type: a primitive or definition name, or a pointer.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(untagged)]
pub enum RawTypeRef {
    Named(String),
    Pointer { ptr: Box<RawTypeRef> },
}

/// Definitions in document order.
pub type RawGraph = IndexMap<String, RawStruct>;

/// Top-level entries exactly as written, repeated names included.
struct RawEntries(Vec<(String, RawStruct)>);

impl<'de> Deserialize<'de> for RawEntries {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = RawEntries;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map from definition names to structs")
            }

            fn visit_map<A>(self, mut map: A) -> Result<RawEntries, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry()? {
                    entries.push(entry);
                }
                Ok(RawEntries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

/// Parse a description into its raw definitions.
///
/// A name defined twice is an error rather than a silent override.
pub fn parse_graph(json: &str) -> Result<RawGraph, GraphError> {
    let RawEntries(entries) = serde_json::from_str(json)?;

    let mut raw = RawGraph::with_capacity(entries.len());
    for (name, def) in entries {
        match raw.entry(name) {
            Entry::Occupied(entry) => {
                return Err(GraphError::DuplicateDefinition(entry.key().clone()));
            }
            Entry::Vacant(entry) => {
                entry.insert(def);
            }
        }
    }
    Ok(raw)
}

/// A resolved graph together with the ids of its named definitions.
#[derive(Debug, Clone)]
pub struct NamedGraph {
    graph: TypeGraph,
    names: IndexMap<String, TypeId>,
}

impl NamedGraph {
    pub fn from_json(json: &str) -> Result<Self, GraphError> {
        Self::from_raw(&parse_graph(json)?)
    }

    pub fn from_raw(raw: &RawGraph) -> Result<Self, GraphError> {
        let mut graph = TypeGraph::new();
        let mut names = IndexMap::with_capacity(raw.len());

        for (name, def) in raw {
            if Primitive::from_name(name).is_some() {
                return Err(GraphError::ShadowsPrimitive(name.clone()));
            }
            names.insert(name.clone(), graph.declare_struct(&def.tag));
        }

        for (name, def) in raw {
            let mut members = Vec::with_capacity(def.members.len());
            for member in &def.members {
                let ty = resolve_ref(&mut graph, &names, &member.ty)?;
                members.push((member.name.as_str(), ty));
            }
            graph.define_struct(names[name], members)?;
        }

        Ok(Self { graph, names })
    }

    pub fn graph(&self) -> &TypeGraph {
        &self.graph
    }

    /// Id of a definition by name.
    pub fn get(&self, name: &str) -> Option<TypeId> {
        self.names.get(name).copied()
    }

    /// Definitions in document order.
    pub fn definitions(&self) -> impl Iterator<Item = (&str, TypeId)> {
        self.names.iter().map(|(name, &id)| (name.as_str(), id))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

fn resolve_ref(
    graph: &mut TypeGraph,
    names: &IndexMap<String, TypeId>,
    ty: &RawTypeRef,
) -> Result<TypeId, GraphError> {
    match ty {
        RawTypeRef::Named(name) => {
            if let Some(p) = Primitive::from_name(name) {
                return Ok(graph.primitive(p));
            }
            names
                .get(name)
                .copied()
                .ok_or_else(|| GraphError::UnknownType(name.clone()))
        }
        RawTypeRef::Pointer { ptr } => {
            let to = resolve_ref(graph, names, ptr)?;
            graph.pointer(to)
        }
    }
}
