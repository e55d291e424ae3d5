use crate::{Kind, Primitive, TypeId, TypeKind};

#[test]
fn primitive_names_roundtrip() {
    for p in Primitive::ALL {
        assert_eq!(Primitive::from_name(p.name()), Some(p));
    }
}

#[test]
fn primitive_from_unknown_name() {
    assert_eq!(Primitive::from_name("bool"), None);
    assert_eq!(Primitive::from_name("Int"), None);
}

#[test]
fn kind_of_each_variant() {
    let id = TypeId::from_raw(0);

    assert_eq!(TypeKind::Primitive(Primitive::Int).kind(), Kind::Primitive);
    assert_eq!(TypeKind::Pointer(id).kind(), Kind::Pointer);
    assert_eq!(TypeKind::Pointer(id).pointee(), Some(id));
    assert_eq!(TypeKind::Primitive(Primitive::Int).pointee(), None);
    assert!(TypeKind::Pointer(id).as_struct().is_none());
}

#[test]
fn type_id_display() {
    assert_eq!(TypeId::from_raw(7).to_string(), "#7");
    assert_eq!(Kind::Struct.to_string(), "struct");
}
