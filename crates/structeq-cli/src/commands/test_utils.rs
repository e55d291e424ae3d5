use indoc::indoc;

/// Linked-list variants: `list` and `other` have the same shape and tag,
/// `renamed` differs only in its tag, `relabeled` only in its member names,
/// `wide` has an extra member and `chars` carries a `char` payload.
pub const LISTS: &str = indoc! {r#"
    {
      "list": { "tag": "node", "members": [
        { "name": "value", "type": "int" },
        { "name": "next", "type": { "ptr": "list" } } ] },
      "other": { "tag": "node", "members": [
        { "name": "value", "type": "int" },
        { "name": "next", "type": { "ptr": "other" } } ] },
      "renamed": { "tag": "item", "members": [
        { "name": "value", "type": "int" },
        { "name": "next", "type": { "ptr": "renamed" } } ] },
      "relabeled": { "tag": "node", "members": [
        { "name": "data", "type": "int" },
        { "name": "link", "type": { "ptr": "relabeled" } } ] },
      "wide": { "tag": "node", "members": [
        { "name": "value", "type": "int" },
        { "name": "next", "type": { "ptr": "wide" } },
        { "name": "extra", "type": "char" } ] },
      "chars": { "tag": "node", "members": [
        { "name": "value", "type": "char" },
        { "name": "next", "type": { "ptr": "list" } } ] }
    }
"#};
