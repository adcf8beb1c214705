use crate::input::VariableValue;
use crate::input::VariableValueParseError;

#[test]
fn parses_const_literals() {
    let value = VariableValue::from_const_literal(r#"{ id: 4, tags: ["a", "b"], on: true, mode: FAST, none: null }"#).unwrap();
    let VariableValue::Object(fields) = &value else {
        panic!("expected an object");
    };
    assert_eq!(fields["id"], VariableValue::Int(4));
    assert_eq!(
        fields["tags"],
        VariableValue::List(vec![VariableValue::String("a".to_string()), VariableValue::String("b".to_string())]),
    );
    assert_eq!(fields["on"], VariableValue::Boolean(true));
    assert_eq!(fields["mode"], VariableValue::String("FAST".to_string()));
    assert!(fields["none"].is_null());
    assert_eq!(value.to_string(), r#"{ id: 4, tags: ["a", "b"], on: true, mode: "FAST", none: null }"#);
}

#[test]
fn huge_ints_stay_out_of_range() {
    let value = VariableValue::from_const_literal("99999999999999999999").unwrap();
    assert!(matches!(value, VariableValue::Float(f) if f > 1e19));
}

#[test]
fn rejects_variables_and_garbage() {
    assert!(matches!(
        VariableValue::from_const_literal("$x"),
        Err(VariableValueParseError::Parse(_)),
    ));
    assert!(VariableValue::from_const_literal("{ a: ").is_err());
}
