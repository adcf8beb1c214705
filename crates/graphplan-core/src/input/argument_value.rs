use crate::input::input_value_resolver::ValueCoercer;
use crate::input::InvalidArgumentError;
use crate::input::ResolvedValue;
use crate::input::VariableValues;
use crate::operation::SuppliedValue;
use crate::operation::Variable;
use crate::schema::Schema;
use crate::types::TypeAnnotation;
use indexmap::IndexMap;

/// The outcome of resolving an argument while planning.
///
/// `Resolved` values depend only on the document and may be reused across
/// requests; `Deferred` values must be re-resolved against each request's
/// variables.
#[derive(Clone, Debug)]
pub enum ArgumentValue<'schema> {
    Resolved(ResolvedValue),
    Deferred(DeferredArgument<'schema>),
}
impl<'schema> ArgumentValue<'schema> {
    pub fn as_deferred(&self) -> Option<&DeferredArgument<'schema>> {
        if let Self::Deferred(deferred) = self {
            Some(deferred)
        } else {
            None
        }
    }

    pub fn as_resolved(&self) -> Option<&ResolvedValue> {
        if let Self::Resolved(value) = self {
            Some(value)
        } else {
            None
        }
    }

    pub fn is_deferred(&self) -> bool {
        matches!(self, Self::Deferred(_))
    }

    /// The final value given the runtime `variables`. Resolved values ignore
    /// them.
    pub fn resolve(&self, variables: &VariableValues) -> Result<ResolvedValue, InvalidArgumentError> {
        match self {
            Self::Resolved(value) => Ok(value.clone()),
            Self::Deferred(deferred) => deferred.resolve(variables),
        }
    }
}
impl std::fmt::Display for ArgumentValue<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Resolved(value) => write!(f, "{value}"),
            Self::Deferred(deferred) => write!(f, "deferred({})", deferred.value()),
        }
    }
}

/// A supplied value that references variables, bound to everything needed to
/// resolve it once variable values are known.
#[derive(Clone, Debug)]
pub struct DeferredArgument<'schema> {
    pub(super) fallback: Option<SuppliedValue>,
    pub(super) schema: &'schema Schema,
    pub(super) target: TypeAnnotation,
    pub(super) value: SuppliedValue,
    /// Declarations of the variables `value` references.
    pub(super) variables: IndexMap<String, Variable>,
}
impl<'schema> DeferredArgument<'schema> {
    pub fn resolve(&self, values: &VariableValues) -> Result<ResolvedValue, InvalidArgumentError> {
        let coercer = ValueCoercer::with_variables(self.schema, &self.variables, values);
        match &self.fallback {
            Some(fallback) if coercer.is_absent_variable(&self.value) => {
                coercer.coerce_supplied(fallback, &self.target)
            },
            _ => coercer.coerce_supplied(&self.value, &self.target),
        }
    }

    pub fn target(&self) -> &TypeAnnotation {
        &self.target
    }

    pub fn value(&self) -> &SuppliedValue {
        &self.value
    }

    /// Names of the variables this value depends on, in first-use order.
    pub fn variable_names(&self) -> impl Iterator<Item = &str> {
        self.variables.keys().map(String::as_str)
    }
}
