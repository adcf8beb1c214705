//! Resolution of supplied input values into typed runtime values.
//!
//! A value written entirely from literals resolves immediately. A value that
//! references a variable anywhere inside it is [deferred](ArgumentValue::Deferred)
//! until the runtime [`VariableValues`] are bound.

mod argument_value;
mod input_value_resolver;
mod invalid_argument_error;
mod resolved_value;
mod scalar_literal;
mod scalar_value_resolver;
mod variable_value;

pub use argument_value::ArgumentValue;
pub use argument_value::DeferredArgument;
pub use input_value_resolver::InputValueResolver;
pub use invalid_argument_error::InvalidArgumentError;
pub use resolved_value::ResolvedValue;
pub use scalar_literal::ScalarLiteral;
pub use scalar_value_resolver::BooleanResolver;
pub use scalar_value_resolver::CustomScalarResolver;
pub use scalar_value_resolver::FloatResolver;
pub use scalar_value_resolver::IdResolver;
pub use scalar_value_resolver::IntResolver;
pub use scalar_value_resolver::ScalarValueResolver;
pub use scalar_value_resolver::StringResolver;
pub use variable_value::VariableValue;
pub use variable_value::VariableValueParseError;
pub use variable_value::VariableValues;

pub(crate) use input_value_resolver::ValueCoercer;

#[cfg(test)]
mod tests;
