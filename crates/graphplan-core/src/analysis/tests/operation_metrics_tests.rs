use crate::analysis::ComplexityConfig;
use crate::analysis::OperationMetrics;
use crate::test::valid_document;
use proptest::prelude::*;

fn measure(text: &str) -> OperationMetrics {
    measure_with(text, &ComplexityConfig::default())
}

fn measure_with(text: &str, config: &ComplexityConfig) -> OperationMetrics {
    let doc = valid_document(text);
    OperationMetrics::measure(doc.operations().values().next().unwrap(), config)
}

#[test]
fn depth_counts_real_selection_sets() {
    assert_eq!(measure("{ __typename }").depth(), 1);
    assert_eq!(measure("{ me { id } }").depth(), 2);
    assert_eq!(measure("{ me { id posts { id } } a { b { c } } }").depth(), 3);
    assert_eq!(
        measure("{ me { ... on User { ... { friends { posts { id } } } } } }").depth(),
        4,
    );
}

#[test]
fn scalar_fields_cost_their_base() {
    let metrics = measure("{ me { id name email } }");
    // me (1) + three scalars
    assert_eq!(metrics.complexity(), 4.0);
}

#[test]
fn typename_is_free() {
    assert_eq!(measure("{ me { __typename id } }").complexity(), 2.0);
}

#[test]
fn declared_cost_overrides_default() {
    assert_eq!(measure("{ expensive }").complexity(), 50.0);
    let config = ComplexityConfig {
        default_field_cost: 2.0,
        ..ComplexityConfig::default()
    };
    assert_eq!(measure_with("{ expensive me { id } }", &config).complexity(), 54.0);
}

#[test]
fn list_fan_out() {
    // Unpaginated lists multiply by the default fan-out.
    assert_eq!(measure("{ me { friends { id } } }").complexity(), 1.0 + 10.0 * 2.0);
    // A pagination literal replaces it.
    assert_eq!(measure("{ me { friends(first: 3) { id } } }").complexity(), 1.0 + 3.0 * 2.0);
    // Zero is clamped to one.
    assert_eq!(measure("{ me { friends(first: 0) { id } } }").complexity(), 1.0 + 2.0);
    // Nested lists compound.
    assert_eq!(
        measure("{ posts(first: 2) { comments(first: 5) { id } } }").complexity(),
        2.0 * (1.0 + 5.0 * 2.0),
    );
}

#[test]
fn variable_page_sizes_use_the_default() {
    let metrics = measure("query ($n: Int) { me { friends(first: $n) { id } } }");
    assert_eq!(metrics.complexity(), 1.0 + 10.0 * 2.0);
}

#[test]
fn custom_pagination_arguments() {
    let config = ComplexityConfig {
        default_list_fan_out: 4.0,
        pagination_arguments: vec!["limit".to_string()],
        ..ComplexityConfig::default()
    };
    let metrics = measure_with("{ me { friends(first: 100) { id } } }", &config);
    assert_eq!(metrics.complexity(), 1.0 + 4.0 * 2.0);
}

#[test]
fn only_the_costliest_concrete_type_counts() {
    let metrics = measure(
        r#"{ search(term: "a", first: 1) {
            __typename
            ... on User { id name email }
            ... on Post { title }
        } }"#,
    );
    // search (1) + User group: __typename (0) + id + name + email
    assert_eq!(metrics.complexity(), 1.0 + 3.0);
}

#[test]
fn document_reports_the_maximum() {
    let doc = valid_document(
        "query Small { me { id } }
         query Big { me { friends(first: 2) { posts(first: 2) { id } } } }",
    );
    let config = ComplexityConfig::default();
    assert_eq!(doc.max_depth(), 4);
    let big = OperationMetrics::measure(doc.operation("Big").unwrap(), &config);
    assert_eq!(doc.max_complexity(&config), big.complexity());
}

const USER_FIELDS: [&str; 5] = ["id", "name", "email", "role", "posts { id }"];

fn user_query(mask: u8, fan_out: u32) -> String {
    let fields = USER_FIELDS
        .iter()
        .enumerate()
        .filter(|(idx, _)| mask & (1 << idx) != 0)
        .map(|(_, field)| *field)
        .collect::<Vec<_>>()
        .join(" ");
    format!("{{ me {{ friends(first: {fan_out}) {{ id {fields} }} }} }}")
}

proptest! {
    #[test]
    fn adding_fields_never_lowers_complexity(mask in 0u8..32, extra in 0usize..5, fan_out in 0u32..500) {
        let base = measure(&user_query(mask, fan_out)).complexity();
        let more = measure(&user_query(mask | (1 << extra), fan_out)).complexity();
        prop_assert!(more >= base);
    }

    #[test]
    fn raising_fan_out_never_lowers_complexity(mask in 0u8..32, fan_out in 0u32..500, step in 0u32..500) {
        let base = measure(&user_query(mask, fan_out)).complexity();
        let more = measure(&user_query(mask, fan_out + step)).complexity();
        prop_assert!(more >= base);
    }
}
