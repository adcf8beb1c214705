/// Weights used by [`OperationMetrics`](crate::analysis::OperationMetrics).
///
/// A field scores `fan_out * (cost + children)`. `cost` is the field's
/// declared cost or `default_field_cost`. `fan_out` is 1 for non-list
/// fields; list fields use the literal integer value of the first
/// pagination argument present, else `default_list_fan_out`.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ComplexityConfig {
    pub default_field_cost: f64,
    pub default_list_fan_out: f64,
    pub pagination_arguments: Vec<String>,
}
impl Default for ComplexityConfig {
    fn default() -> Self {
        Self {
            default_field_cost: 1.0,
            default_list_fan_out: 10.0,
            pagination_arguments: vec![
                "first".to_string(),
                "last".to_string(),
                "limit".to_string(),
            ],
        }
    }
}
