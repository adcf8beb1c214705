use crate::commands::plan::parse_variable;
use graphplan_core::input::VariableValue;
use indexmap::IndexMap;

#[test]
fn scalar_variables() {
    assert_eq!(parse_variable("first=10").unwrap(), ("first".to_string(), VariableValue::Int(10)));
    assert_eq!(
        parse_variable("$term = \"rust\"").unwrap(),
        ("term".to_string(), VariableValue::String("rust".to_string())),
    );
    assert_eq!(parse_variable("flag=null").unwrap().1, VariableValue::Null);
}

#[test]
fn enum_values_become_strings() {
    assert_eq!(parse_variable("role=ADMIN").unwrap().1, VariableValue::String("ADMIN".to_string()));
}

#[test]
fn object_variables_keep_key_order() {
    let (name, value) = parse_variable("filter={ published: true, authorId: 4 }").unwrap();
    assert_eq!(name, "filter");
    assert_eq!(
        value,
        VariableValue::Object(IndexMap::from([
            ("published".to_string(), VariableValue::Boolean(true)),
            ("authorId".to_string(), VariableValue::Int(4)),
        ])),
    );
}

#[test]
fn malformed_arguments() {
    assert!(parse_variable("first").is_err());
    assert!(parse_variable("=1").is_err());
    assert!(parse_variable("first={").is_err());
}
