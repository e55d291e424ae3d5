//! Graph fixtures shared by the engine tests.

use structeq_core::{Primitive, TypeGraph, TypeId};

/// Member layout of the six-struct cluster: (tag, pointer targets of members `b`, `c`, ...).
///
/// str1 -> str2 -> {str6, str3}, str3 -> str1, str4 -> str5 -> {str3, str6}, str6 -> str4.
const CLUSTER: [(&str, &[usize]); 6] = [
    ("tag1", &[1]),
    ("tag2", &[5, 2]),
    ("tag3", &[0]),
    ("tag4", &[4]),
    ("tag5", &[2, 5]),
    ("tag6", &[3]),
];

const POINTER_MEMBERS: [&str; 2] = ["b", "c"];

/// Options for building a variant of the cluster.
#[derive(Default, Clone, Copy)]
pub struct ClusterVariant {
    /// Prefix prepended to every tag.
    pub tag_prefix: &'static str,
    /// Index of a struct that gets an extra trailing `int d` member.
    pub extra_member_in: Option<usize>,
}

/// Build the six mutually recursive structs; returns their ids in tag order.
pub fn cluster(graph: &mut TypeGraph, variant: ClusterVariant) -> [TypeId; 6] {
    let int = graph.primitive(Primitive::Int);
    let ids = CLUSTER.map(|(tag, _)| graph.declare_struct(&format!("{}{tag}", variant.tag_prefix)));

    for (i, (_, targets)) in CLUSTER.iter().enumerate() {
        let mut members = vec![("a", int)];
        for (&name, &target) in POINTER_MEMBERS.iter().zip(targets.iter()) {
            members.push((name, graph.pointer(ids[target]).unwrap()));
        }
        if variant.extra_member_in == Some(i) {
            members.push(("d", int));
        }
        graph.define_struct(ids[i], members).unwrap();
    }
    ids
}

/// The `str1c` / `str2c` / `str1d` triple: two structs pointing at themselves
/// and at each other, and one struct pointing at itself twice.
pub fn hard_way(graph: &mut TypeGraph) -> [TypeId; 3] {
    let int = graph.primitive(Primitive::Int);
    let str1c = graph.declare_struct("tag");
    let str2c = graph.declare_struct("tag");
    let str1d = graph.declare_struct("tag");

    let links = [(str1c, str1c, str2c), (str2c, str2c, str1c), (str1d, str1d, str1d)];
    for (id, b, c) in links {
        let pb = graph.pointer(b).unwrap();
        let pc = graph.pointer(c).unwrap();
        graph
            .define_struct(id, [("a", int), ("b", pb), ("c", pc)])
            .unwrap();
    }
    [str1c, str2c, str1d]
}

/// `struct tag { int value; struct tag *next; }`
pub fn linked_list(graph: &mut TypeGraph, tag: &str) -> TypeId {
    let int = graph.primitive(Primitive::Int);
    let node = graph.declare_struct(tag);
    let next = graph.pointer(node).unwrap();
    graph
        .define_struct(node, [("value", int), ("next", next)])
        .unwrap();
    node
}

/// A chain of `len` distinct structs, each pointing at the next.
pub fn chain(graph: &mut TypeGraph, len: usize) -> TypeId {
    let int = graph.primitive(Primitive::Int);
    let mut head = graph.struct_type("link", [("value", int)]).unwrap();
    for _ in 1..len {
        let next = graph.pointer(head).unwrap();
        head = graph
            .struct_type("link", [("value", int), ("next", next)])
            .unwrap();
    }
    head
}
