use structeq_core::{Kind, Primitive, TypeGraph};

use crate::test_utils::{chain, linked_list};
use crate::{Checker, Config, MismatchReason, NamePolicy, PathStep, TagPolicy, is_compatible};

#[test]
fn identical_node_is_compatible() {
    let mut graph = TypeGraph::new();
    let list = linked_list(&mut graph, "list");

    assert!(is_compatible(&graph, list, list));
}

#[test]
fn primitives_compare_by_kind() {
    let mut graph = TypeGraph::new();
    let int = graph.primitive(Primitive::Int);
    let char = graph.primitive(Primitive::Char);

    assert!(is_compatible(&graph, int, int));
    assert!(!is_compatible(&graph, int, char));

    let err = Checker::new(&graph).explain(int, char).unwrap_err();
    assert_eq!(
        err.reason,
        MismatchReason::Primitive {
            left: "int",
            right: "char"
        }
    );
    assert_eq!(err.to_string(), "primitive mismatch: `int` vs `char` at <root>");
}

#[test]
fn distinct_pointer_nodes_compare_pointees() {
    let mut graph = TypeGraph::new();
    let int = graph.primitive(Primitive::Int);
    let p1 = graph.pointer(int).unwrap();
    let p2 = graph.pointer(int).unwrap();
    let pp = graph.pointer(p1).unwrap();

    assert!(is_compatible(&graph, p1, p2));
    assert!(!is_compatible(&graph, pp, p2));

    let err = Checker::new(&graph).explain(pp, p2).unwrap_err();
    assert_eq!(err.path.steps(), [PathStep::Pointee]);
    insta::assert_snapshot!(err, @"kind mismatch: pointer `int *` vs primitive `int` at *<root>");
}

#[test]
fn kind_mismatch_in_every_combination() {
    let mut graph = TypeGraph::new();
    let int = graph.primitive(Primitive::Int);
    let ptr = graph.pointer(int).unwrap();
    let st = graph.struct_type("s", [("a", int)]).unwrap();

    for (a, b) in [(int, ptr), (int, st), (ptr, st)] {
        assert!(!is_compatible(&graph, a, b));
        assert!(!is_compatible(&graph, b, a));
    }

    let err = Checker::new(&graph).explain(ptr, st).unwrap_err();
    assert_eq!(
        err.reason,
        MismatchReason::Kind {
            left: Kind::Pointer,
            right: Kind::Struct,
            left_type: "int *".to_owned(),
            right_type: "struct s".to_owned(),
        }
    );
}

#[test]
fn differing_tags_short_circuit() {
    let mut graph = TypeGraph::new();
    let a = linked_list(&mut graph, "a");
    let b = linked_list(&mut graph, "b");

    assert!(!is_compatible(&graph, a, b));
    insta::assert_snapshot!(
        Checker::new(&graph).explain(a, b).unwrap_err(),
        @"tag mismatch: `a` vs `b` at <root>"
    );
}

#[test]
fn differing_arity_short_circuits() {
    let mut graph = TypeGraph::new();
    let int = graph.primitive(Primitive::Int);
    let two = graph.struct_type("s", [("a", int), ("b", int)]).unwrap();
    let three = graph
        .struct_type("s", [("a", int), ("b", int), ("c", int)])
        .unwrap();

    assert!(!is_compatible(&graph, two, three));
    let err = Checker::new(&graph).explain(three, two).unwrap_err();
    assert_eq!(err.reason, MismatchReason::Arity { left: 3, right: 2 });
}

#[test]
fn arity_is_reported_before_tag() {
    let mut graph = TypeGraph::new();
    let int = graph.primitive(Primitive::Int);
    let a = graph.struct_type("a", [("x", int)]).unwrap();
    let b = graph.struct_type("b", []).unwrap();

    let err = Checker::new(&graph).explain(a, b).unwrap_err();
    assert_eq!(err.reason, MismatchReason::Arity { left: 1, right: 0 });
}

#[test]
fn members_match_by_position() {
    let mut graph = TypeGraph::new();
    let int = graph.primitive(Primitive::Int);
    let xy = graph.struct_type("p", [("x", int), ("y", int)]).unwrap();
    let yx = graph.struct_type("p", [("y", int), ("x", int)]).unwrap();

    assert!(!is_compatible(&graph, xy, yx));
    insta::assert_snapshot!(
        Checker::new(&graph).explain(xy, yx).unwrap_err(),
        @"member 0 name mismatch: `x` vs `y` at <root>"
    );
}

#[test]
fn reordered_members_with_different_types_stay_incompatible_without_names() {
    let mut graph = TypeGraph::new();
    let int = graph.primitive(Primitive::Int);
    let ptr = graph.pointer(int).unwrap();
    let a = graph.struct_type("p", [("x", int), ("y", ptr)]).unwrap();
    let b = graph.struct_type("p", [("y", ptr), ("x", int)]).unwrap();

    let relaxed = Checker::new(&graph).with_config(Config::new().member_names(NamePolicy::Ignore));
    assert!(!relaxed.is_compatible(a, b));
    assert!(matches!(
        relaxed.explain(a, b).unwrap_err().reason,
        MismatchReason::Kind { .. }
    ));
}

#[test]
fn empty_structs_with_same_tag() {
    let mut graph = TypeGraph::new();
    let a = graph.struct_type("unit", []).unwrap();
    let b = graph.struct_type("unit", []).unwrap();

    assert!(is_compatible(&graph, a, b));
}

#[test]
fn mismatch_deep_in_a_cycle_reports_path() {
    let mut graph = TypeGraph::new();
    let int = graph.primitive(Primitive::Int);
    let char = graph.primitive(Primitive::Char);
    let list = linked_list(&mut graph, "l");

    // l1 -> l2 -> l1, where l2 carries a char payload
    let l1 = graph.declare_struct("l");
    let l2 = graph.declare_struct("l");
    let p1 = graph.pointer(l1).unwrap();
    let p2 = graph.pointer(l2).unwrap();
    graph.define_struct(l1, [("value", int), ("next", p2)]).unwrap();
    graph.define_struct(l2, [("value", char), ("next", p1)]).unwrap();

    assert!(!is_compatible(&graph, list, l1));

    let err = Checker::new(&graph).explain(list, l1).unwrap_err();
    assert_eq!(
        err.path.steps(),
        [
            PathStep::Member("next".to_owned()),
            PathStep::Pointee,
            PathStep::Member("value".to_owned()),
        ]
    );
    insta::assert_snapshot!(err, @"primitive mismatch: `int` vs `char` at .next->value");
}

#[test]
fn ignoring_tags_compares_shape_only() {
    let mut graph = TypeGraph::new();
    let a = linked_list(&mut graph, "a");
    let b = linked_list(&mut graph, "b");

    let checker = Checker::new(&graph).with_config(Config::new().tags(TagPolicy::Ignore));
    assert!(checker.is_compatible(a, b));
    assert_eq!(checker.config().tag_policy(), TagPolicy::Ignore);
}

#[test]
fn ignoring_names_compares_member_types_only() {
    let mut graph = TypeGraph::new();
    let int = graph.primitive(Primitive::Int);
    let xy = graph.struct_type("p", [("x", int), ("y", int)]).unwrap();
    let uv = graph.struct_type("p", [("u", int), ("v", int)]).unwrap();

    let checker = Checker::new(&graph).with_config(Config::new().member_names(NamePolicy::Ignore));
    assert!(checker.is_compatible(xy, uv));
    assert!(!is_compatible(&graph, xy, uv));
}

#[test]
fn long_chains_do_not_exhaust_the_stack() {
    let mut graph = TypeGraph::new();
    let a = chain(&mut graph, 10_000);
    let b = chain(&mut graph, 10_000);
    let shorter = chain(&mut graph, 9_999);

    assert!(is_compatible(&graph, a, b));
    assert!(!is_compatible(&graph, a, shorter));
}

#[test]
fn checker_is_shareable_across_threads() {
    let mut graph = TypeGraph::new();
    let lists: Vec<_> = (0..4).map(|_| linked_list(&mut graph, "list")).collect();
    let checker = Checker::new(&graph);

    std::thread::scope(|scope| {
        for &a in &lists {
            let lists = &lists;
            scope.spawn(move || {
                for &b in lists {
                    assert!(checker.is_compatible(a, b));
                }
            });
        }
    });
}
