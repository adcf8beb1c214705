use thiserror::Error;

/// Why a supplied value could not be resolved against its target type.
///
/// Returned as a value from resolution; the plan generator turns it into an
/// `INVALID_ARGUMENT_VALUE` (or `MISSING_REQUIRED_VARIABLE`) message.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum InvalidArgumentError {
    #[error("`{type_name}` cannot be used as an input type")]
    NotAnInputType { type_name: String },

    #[error("{literal} is out of range for a 32-bit `Int`")]
    IntOutOfRange { literal: String },

    #[error("expected a value of type `{type_name}`, found {found}")]
    InvalidLiteral { type_name: String, found: String },

    #[error("input object `{type_name}` is missing required field `{field_name}`")]
    MissingInputField { type_name: String, field_name: String },

    #[error("variable `${variable_name}` of non-null type `{type_annotation}` was not provided")]
    MissingRequiredVariable {
        variable_name: String,
        type_annotation: String,
    },

    #[error("no scalar resolver is registered for `{type_name}`")]
    NoScalarResolver { type_name: String },

    #[error("null is not allowed for non-null type `{type_annotation}`")]
    NullForNonNull { type_annotation: String },

    #[error("variable `${variable_name}` is not declared by the operation")]
    UndeclaredVariable { variable_name: String },

    #[error("`{value}` is not a value of enum `{type_name}`")]
    UnknownEnumValue { type_name: String, value: String },

    #[error("input object `{type_name}` has no field `{field_name}`")]
    UnknownInputField { type_name: String, field_name: String },

    #[error("unknown type `{type_name}`")]
    UnknownType { type_name: String },
}
