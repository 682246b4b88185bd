use crate::{FromJsonError, Value, tree};

#[test]
fn parses_scalars_and_arrays() {
    let v = Value::from_json(r#"[1, 2.5, "a", true, null, [3]]"#).unwrap();
    assert_eq!(v, Value::Seq(tree![1, 2.5, "a", true, null, [3]]));
}

#[test]
fn integral_json_numbers_stay_ints() {
    let v = Value::from_json("[1, 1.0]").unwrap();
    let Value::Seq(seq) = v else { panic!("expected array") };
    assert_eq!(seq.get(0), Some(Value::Int(1)));
    assert_eq!(seq.get(1), Some(Value::Float(1.0)));
}

#[test]
fn top_level_scalar_parses() {
    assert_eq!(Value::from_json("42").unwrap(), Value::Int(42));
    assert_eq!(Value::from_json("null").unwrap(), Value::Null);
}

#[test]
fn objects_are_rejected() {
    let err = Value::from_json(r#"[{"a": 1}]"#).unwrap_err();
    assert!(matches!(err, FromJsonError::ObjectUnsupported));
}

#[test]
fn malformed_text_is_a_parse_error() {
    let err = Value::from_json("[1, 2").unwrap_err();
    assert!(matches!(err, FromJsonError::Parse(_)));
}

#[test]
fn round_trips_through_text() {
    let text = r#"[1,2.5,"a",[true,null]]"#;
    let v = Value::from_json(text).unwrap();
    assert_eq!(v.to_json(), text);
}
