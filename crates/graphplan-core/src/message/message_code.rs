/// Stable, machine-readable identifier of a [`DocumentMessage`](crate::message::DocumentMessage).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Serialize)]
pub enum MessageCode {
    // Parsing
    LexicalError,
    SyntaxError,

    // Operations
    AnonymousOperationNotAlone,
    DuplicateOperationName,
    SubscriptionMultipleRootFields,
    UnsupportedOperation,

    // Fragments
    DuplicateFragmentName,
    FragmentCycle,
    FragmentNeverApplies,
    InvalidTypeCondition,
    UnknownFragment,
    UnknownType,
    UnusedFragment,

    // Fields
    FieldConflict,
    LeafFieldSelection,
    MissingSelectionSet,
    UnknownField,

    // Arguments
    DuplicateArgument,
    DuplicateInputField,
    InvalidArgumentValue,
    MissingRequiredArgument,
    UnknownArgument,

    // Directives
    DuplicateDirective,
    MisplacedDirective,
    UnknownDirective,

    // Variables
    DuplicateVariable,
    InvalidDefaultValue,
    NonInputVariableType,
    UndeclaredVariable,
    UnusedVariable,
    VariableTypeMismatch,

    // Admission control
    MaxComplexityExceeded,
    MaxDepthExceeded,

    // Planning
    AmbiguousOperation,
    InvalidVariableValue,
    MissingRequiredVariable,
    OperationNotFound,
}
impl MessageCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LexicalError => "LEXICAL_ERROR",
            Self::SyntaxError => "SYNTAX_ERROR",
            Self::AnonymousOperationNotAlone => "ANONYMOUS_OPERATION_NOT_ALONE",
            Self::DuplicateOperationName => "DUPLICATE_OPERATION_NAME",
            Self::SubscriptionMultipleRootFields => "SUBSCRIPTION_MULTIPLE_ROOT_FIELDS",
            Self::UnsupportedOperation => "UNSUPPORTED_OPERATION",
            Self::DuplicateFragmentName => "DUPLICATE_FRAGMENT_NAME",
            Self::FragmentCycle => "FRAGMENT_CYCLE",
            Self::FragmentNeverApplies => "FRAGMENT_NEVER_APPLIES",
            Self::InvalidTypeCondition => "INVALID_TYPE_CONDITION",
            Self::UnknownFragment => "UNKNOWN_FRAGMENT",
            Self::UnknownType => "UNKNOWN_TYPE",
            Self::UnusedFragment => "UNUSED_FRAGMENT",
            Self::FieldConflict => "FIELD_CONFLICT",
            Self::LeafFieldSelection => "LEAF_FIELD_SELECTION",
            Self::MissingSelectionSet => "MISSING_SELECTION_SET",
            Self::UnknownField => "UNKNOWN_FIELD",
            Self::DuplicateArgument => "DUPLICATE_ARGUMENT",
            Self::DuplicateInputField => "DUPLICATE_INPUT_FIELD",
            Self::InvalidArgumentValue => "INVALID_ARGUMENT_VALUE",
            Self::MissingRequiredArgument => "MISSING_REQUIRED_ARGUMENT",
            Self::UnknownArgument => "UNKNOWN_ARGUMENT",
            Self::DuplicateDirective => "DUPLICATE_DIRECTIVE",
            Self::MisplacedDirective => "MISPLACED_DIRECTIVE",
            Self::UnknownDirective => "UNKNOWN_DIRECTIVE",
            Self::DuplicateVariable => "DUPLICATE_VARIABLE",
            Self::InvalidDefaultValue => "INVALID_DEFAULT_VALUE",
            Self::NonInputVariableType => "NON_INPUT_VARIABLE_TYPE",
            Self::UndeclaredVariable => "UNDECLARED_VARIABLE",
            Self::UnusedVariable => "UNUSED_VARIABLE",
            Self::VariableTypeMismatch => "VARIABLE_TYPE_MISMATCH",
            Self::MaxComplexityExceeded => "MAX_COMPLEXITY_EXCEEDED",
            Self::MaxDepthExceeded => "MAX_DEPTH_EXCEEDED",
            Self::AmbiguousOperation => "AMBIGUOUS_OPERATION",
            Self::InvalidVariableValue => "INVALID_VARIABLE_VALUE",
            Self::MissingRequiredVariable => "MISSING_REQUIRED_VARIABLE",
            Self::OperationNotFound => "OPERATION_NOT_FOUND",
        }
    }
}
impl std::fmt::Display for MessageCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
