use crate::{Seq, Value, tree};

#[test]
fn scalar_equality_is_by_value() {
    assert_eq!(Value::Int(3), Value::Int(3));
    assert_ne!(Value::Int(3), Value::Int(4));
    assert_eq!(Value::Str("a".into()), Value::from("a"));
    assert_eq!(Value::Null, Value::Null);
    assert_eq!(Value::Bool(true), Value::from(true));
}

#[test]
fn int_and_float_never_compare_equal() {
    assert_ne!(Value::Int(1), Value::Float(1.0));
    assert_eq!(Value::Float(1.0), Value::Float(1.0));
}

#[test]
fn seq_equality_is_structural() {
    let a = tree![1, 2, ["a", "b"]];
    let b = tree![1, 2, ["a", "b"]];
    assert!(!a.ptr_eq(&b));
    assert_eq!(a, b);

    let c = tree![1, 2, ["a", "c"]];
    assert_ne!(a, c);
    let short = tree![1, 2];
    assert_ne!(a, short);
}

#[test]
fn seq_equality_short_circuits_on_aliases() {
    let a = tree![1, 2, 3];
    let alias = a.clone();
    assert!(a.ptr_eq(&alias));
    assert_eq!(a, alias);
}

#[test]
fn clones_alias_the_same_storage() {
    let a = tree![1, 2, 3];
    let alias = a.clone();
    alias.splice(3, 3, vec![Value::Int(4)]);
    assert_eq!(a.len(), 4);
    assert_eq!(a.get(3), Some(Value::Int(4)));
}

#[test]
fn splice_replaces_an_interval_in_place() {
    let a = tree![1, 2, 3, 4, 5];
    a.splice(1, 4, vec![Value::from("cut")]);
    assert_eq!(a, tree![1, "cut", 5]);
}

#[test]
fn splice_with_empty_replacement_deletes() {
    let a = tree![1, 2, 3];
    a.splice(0, 2, vec![]);
    assert_eq!(a, tree![3]);
}

#[test]
fn slice_copies_an_interval() {
    let a = tree![1, 2, 3, 4];
    assert_eq!(a.slice(1, 3), vec![Value::Int(2), Value::Int(3)]);
    assert_eq!(a.slice(2, 2), Vec::<Value>::new());
}

#[test]
fn get_clones_nested_handles() {
    let a = tree![1, [2, 3]];
    let Some(Value::Seq(inner)) = a.get(1) else {
        panic!("expected a nested sequence");
    };
    inner.splice(2, 2, vec![Value::Int(4)]);
    // The clone aliases the stored child.
    assert_eq!(a, tree![1, [2, 3, 4]]);
}

#[test]
fn tree_macro_shapes() {
    let empty = tree![];
    assert!(empty.is_empty());

    let t = tree![1, 2.5, "x", true, null, [1, [2]]];
    assert_eq!(t.len(), 6);
    assert_eq!(t.get(0), Some(Value::Int(1)));
    assert_eq!(t.get(1), Some(Value::Float(2.5)));
    assert_eq!(t.get(2), Some(Value::from("x")));
    assert_eq!(t.get(3), Some(Value::Bool(true)));
    assert_eq!(t.get(4), Some(Value::Null));
    assert_eq!(t.get(5), Some(Value::Seq(tree![1, [2]])));
}

#[test]
fn display_renders_json_like_text() {
    let t = tree![1, 4.0, "a", null, [true]];
    assert_eq!(t.to_string(), r#"[1, 4.0, "a", null, [true]]"#);
}

#[test]
fn value_conversions() {
    assert_eq!(Value::from(3i64), Value::Int(3));
    assert_eq!(Value::from(3i32), Value::Int(3));
    assert_eq!(Value::from(String::from("s")), Value::Str("s".into()));
    let seq = Seq::from_vec(vec![Value::Int(1)]);
    assert_eq!(Value::from(seq.clone()), Value::Seq(seq));
}
