use graphplan_parser::syntax::OperationKind;
use thiserror::Error;

/// A problem found while building a [`Schema`](crate::schema::Schema).
///
/// `owner` values name the offending member: `Type`, `Type.field`,
/// `Type.field(arg:)`, `Input.field` or `@directive(arg:)`.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum SchemaBuildError {
    #[error("directive `@{directive_name}` is defined more than once")]
    DuplicateDirectiveName { directive_name: String },

    #[error("enum `{type_name}` declares value `{value}` more than once")]
    DuplicateEnumValue { type_name: String, value: String },

    #[error("`{type_name}` declares field `{field_name}` more than once")]
    DuplicateFieldName { type_name: String, field_name: String },

    #[error("`{owner}` declares parameter `{parameter_name}` more than once")]
    DuplicateParameterName { owner: String, parameter_name: String },

    #[error("`{type_name}` is defined more than once")]
    DuplicateTypeName { type_name: String },

    #[error("`{type_name}` must declare at least one field")]
    EmptyType { type_name: String },

    #[error("`{type_name}` implements `{interface_name}` which is not an interface")]
    ImplementsNonInterface { type_name: String, interface_name: String },

    #[error("`{type_name}.{field_name}` does not match `{interface_name}.{field_name}`: {reason}")]
    IncompatibleInterfaceField {
        type_name: String,
        interface_name: String,
        field_name: String,
        reason: String,
    },

    #[error("default value `{default_value}` of `{owner}` is invalid: {reason}")]
    InvalidDefaultValue {
        owner: String,
        default_value: String,
        reason: String,
    },

    #[error("`{owner}` has an invalid type annotation `{annotation}`: {reason}")]
    InvalidTypeAnnotation {
        owner: String,
        annotation: String,
        reason: String,
    },

    #[error("`{type_name}` does not declare field `{field_name}` required by interface `{interface_name}`")]
    MissingInterfaceField {
        type_name: String,
        interface_name: String,
        field_name: String,
    },

    #[error("`{owner}` takes `{type_name}`, which is not an input type")]
    NonInputParameterType { owner: String, type_name: String },

    #[error("`{owner}` returns `{type_name}`, which is not an output type")]
    NonOutputFieldType { owner: String, type_name: String },

    #[error("`{name}` is reserved: names beginning with `__` are used by introspection")]
    ReservedName { name: String },

    #[error("the {operation} root type `{type_name}` is not an object type")]
    RootTypeNotObject {
        operation: OperationKind,
        type_name: String,
    },

    #[error("`{owner}` references undefined type `{type_name}`")]
    UndefinedTypeReference { owner: String, type_name: String },

    #[error("the {operation} root type `{type_name}` is not defined")]
    UndefinedRootType {
        operation: OperationKind,
        type_name: String,
    },

    #[error("union `{union_name}` member `{member_name}` is not an object type")]
    UnionMemberNotObject { union_name: String, member_name: String },
}
