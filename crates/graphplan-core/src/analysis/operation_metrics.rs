use crate::analysis::ComplexityConfig;
use crate::operation::FieldSelection;
use crate::operation::FieldSelectionSet;
use crate::operation::Operation;
use crate::operation::SelectedField;
use crate::operation::SuppliedValue;
use graphplan_parser::syntax::ScalarValueKind;

/// Depth and weighted complexity of one operation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OperationMetrics {
    complexity: f64,
    depth: usize,
}
impl OperationMetrics {
    pub fn measure(operation: &Operation<'_>, config: &ComplexityConfig) -> Self {
        let metrics = Self {
            complexity: Self::complexity_of(operation.selection_set(), config),
            depth: Self::depth_of(operation.selection_set()),
        };
        log::trace!(
            "operation {:?} measured depth {} complexity {}",
            operation.name().unwrap_or(""),
            metrics.depth,
            metrics.complexity,
        );
        metrics
    }

    pub fn complexity(&self) -> f64 {
        self.complexity
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Root fields are at depth 1. Fragments were inlined during assembly,
    /// so only real selection sets count.
    pub fn depth_of(selection_set: &FieldSelectionSet<'_>) -> usize {
        selection_set
            .iter()
            .map(|selection| 1 + Self::depth_of(selection.selection_set()))
            .max()
            .unwrap_or(0)
    }

    /// Unrestricted fields always run; of the fields restricted to one
    /// concrete type only the most expensive type's group can.
    pub fn complexity_of(selection_set: &FieldSelectionSet<'_>, config: &ComplexityConfig) -> f64 {
        let unrestricted: f64 = selection_set
            .unrestricted()
            .map(|selection| Self::field_score(selection, config))
            .sum();
        let costliest_group = selection_set
            .restriction_names()
            .into_iter()
            .map(|type_name| {
                selection_set
                    .restricted_to(type_name)
                    .map(|selection| Self::field_score(selection, config))
                    .sum::<f64>()
            })
            .fold(0.0, f64::max);
        unrestricted + costliest_group
    }

    fn field_score(selection: &FieldSelection<'_>, config: &ComplexityConfig) -> f64 {
        let base_cost = match selection.field() {
            SelectedField::Declared(field) => field.cost().unwrap_or(config.default_field_cost),
            SelectedField::TypeName => 0.0,
        };
        let children = Self::complexity_of(selection.selection_set(), config);
        Self::fan_out(selection, config) * (base_cost.max(0.0) + children)
    }

    fn fan_out(selection: &FieldSelection<'_>, config: &ComplexityConfig) -> f64 {
        let is_list = selection
            .field()
            .as_declared()
            .is_some_and(|field| field.type_annotation().is_list());
        if !is_list {
            return 1.0;
        }
        let page_size = config
            .pagination_arguments
            .iter()
            .find_map(|arg_name| selection.argument(arg_name))
            .and_then(|value| match value {
                SuppliedValue::Scalar(literal) if literal.kind() == ScalarValueKind::Int => {
                    literal.text().parse::<f64>().ok()
                },
                _ => None,
            });
        page_size.unwrap_or(config.default_list_fan_out).max(1.0)
    }
}
