//! C-like rendering of type graphs.
//!
//! Structs are referred to by `struct tag`, so cyclic graphs render finitely.

use std::fmt::Write as _;

use crate::{Colors, NamedGraph, TypeGraph, TypeId, TypeKind};

/// Split a type into its base spelling and the number of pointer levels.
fn spell(graph: &TypeGraph, mut id: TypeId) -> (String, usize) {
    let mut stars = 0;
    loop {
        match graph.kind(id) {
            TypeKind::Pointer(to) => {
                stars += 1;
                id = *to;
            }
            TypeKind::Primitive(p) => return (p.name().to_owned(), stars),
            TypeKind::Struct(info) => {
                return (format!("struct {}", graph.resolve(info.tag)), stars);
            }
        }
    }
}

/// Spelling of a type as it would appear in a cast, e.g. `struct node *`.
pub fn type_name(graph: &TypeGraph, id: TypeId) -> String {
    let (base, stars) = spell(graph, id);
    if stars == 0 {
        base
    } else {
        format!("{base} {}", "*".repeat(stars))
    }
}

fn write_struct(out: &mut String, graph: &TypeGraph, id: TypeId, c: Colors) {
    let Some(info) = graph.kind(id).as_struct() else {
        return;
    };
    let tag = graph.resolve(info.tag);

    if !info.is_defined() {
        writeln!(out, "{}struct {tag}{}{};{}", c.blue, c.reset, c.dim, c.reset).unwrap();
        return;
    }

    writeln!(out, "{}struct {tag}{} {}{{{}", c.blue, c.reset, c.dim, c.reset).unwrap();
    for member in &info.members {
        let (base, stars) = spell(graph, member.ty);
        writeln!(
            out,
            "  {}{base}{} {}{}{}{};{}",
            c.blue,
            c.reset,
            "*".repeat(stars),
            graph.resolve(member.name),
            c.reset,
            c.dim,
            c.reset
        )
        .unwrap();
    }
    writeln!(out, "{}}};{}", c.dim, c.reset).unwrap();
}

/// Render every struct node of a graph in arena order.
pub fn dump(graph: &TypeGraph, colors: Colors) -> String {
    let mut out = String::new();
    let structs = graph
        .iter()
        .filter(|(_, kind)| kind.as_struct().is_some());

    for (i, (id, _)) in structs.enumerate() {
        if i > 0 {
            out.push('\n');
        }
        write_struct(&mut out, graph, id, colors);
    }
    out
}

/// Render the definitions of a described graph, each under its name.
pub fn dump_named(named: &NamedGraph, colors: Colors) -> String {
    let mut out = String::new();
    for (i, (name, id)) in named.definitions().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        writeln!(out, "{}// {name}{}", colors.dim, colors.reset).unwrap();
        write_struct(&mut out, named.graph(), id, colors);
    }
    out
}
