use crate::input::InvalidArgumentError;
use crate::input::ResolvedValue;
use crate::input::ScalarLiteral;
use crate::input::VariableValue;
use graphplan_parser::syntax::ScalarValueKind;
use graphplan_parser::token::parse_string_value;

/// Resolves values of one scalar type. Registered per scalar type name in
/// the [`Schema`](crate::schema::Schema) and shared across threads.
///
/// `null` never reaches a resolver; nullability is checked before dispatch.
pub trait ScalarValueResolver: std::fmt::Debug + Send + Sync {
    /// Resolve a literal written in the document.
    fn resolve(&self, literal: &ScalarLiteral) -> Result<ResolvedValue, InvalidArgumentError>;

    /// Resolve a runtime variable value.
    fn resolve_variable(&self, value: &VariableValue) -> Result<ResolvedValue, InvalidArgumentError>;
}

fn invalid_literal(type_name: &str, literal: &ScalarLiteral) -> InvalidArgumentError {
    InvalidArgumentError::InvalidLiteral {
        type_name: type_name.to_string(),
        found: literal.text().to_string(),
    }
}

fn invalid_variable(type_name: &str, value: &VariableValue) -> InvalidArgumentError {
    InvalidArgumentError::InvalidLiteral {
        type_name: type_name.to_string(),
        found: value.to_string(),
    }
}

fn decode_string(type_name: &str, literal: &ScalarLiteral) -> Result<String, InvalidArgumentError> {
    parse_string_value(literal.text()).map_err(|_| invalid_literal(type_name, literal))
}

/// Signed 32-bit integers.
#[derive(Debug, Default)]
pub struct IntResolver;
impl ScalarValueResolver for IntResolver {
    fn resolve(&self, literal: &ScalarLiteral) -> Result<ResolvedValue, InvalidArgumentError> {
        if literal.kind() != ScalarValueKind::Int {
            return Err(invalid_literal("Int", literal));
        }
        // The lexer only admits well-formed integers, so a failed parse means
        // the literal does not fit.
        literal.text()
            .parse::<i32>()
            .map(ResolvedValue::Int)
            .map_err(|_| InvalidArgumentError::IntOutOfRange {
                literal: literal.text().to_string(),
            })
    }

    fn resolve_variable(&self, value: &VariableValue) -> Result<ResolvedValue, InvalidArgumentError> {
        let out_of_range = || InvalidArgumentError::IntOutOfRange {
            literal: value.to_string(),
        };
        match value {
            VariableValue::Int(int) => i32::try_from(*int)
                .map(ResolvedValue::Int)
                .map_err(|_| out_of_range()),
            VariableValue::Float(float) if float.fract() == 0.0 => {
                if *float >= f64::from(i32::MIN) && *float <= f64::from(i32::MAX) {
                    Ok(ResolvedValue::Int(*float as i32))
                } else {
                    Err(out_of_range())
                }
            },
            _ => Err(invalid_variable("Int", value)),
        }
    }
}

/// Double-precision floats; integer literals are accepted.
#[derive(Debug, Default)]
pub struct FloatResolver;
impl ScalarValueResolver for FloatResolver {
    fn resolve(&self, literal: &ScalarLiteral) -> Result<ResolvedValue, InvalidArgumentError> {
        match literal.kind() {
            ScalarValueKind::Int | ScalarValueKind::Float => literal.text()
                .parse::<f64>()
                .ok()
                .filter(|value| value.is_finite())
                .map(ResolvedValue::Float)
                .ok_or_else(|| invalid_literal("Float", literal)),
            _ => Err(invalid_literal("Float", literal)),
        }
    }

    fn resolve_variable(&self, value: &VariableValue) -> Result<ResolvedValue, InvalidArgumentError> {
        match value {
            VariableValue::Int(int) => Ok(ResolvedValue::Float(*int as f64)),
            VariableValue::Float(float) if float.is_finite() => Ok(ResolvedValue::Float(*float)),
            _ => Err(invalid_variable("Float", value)),
        }
    }
}

#[derive(Debug, Default)]
pub struct StringResolver;
impl ScalarValueResolver for StringResolver {
    fn resolve(&self, literal: &ScalarLiteral) -> Result<ResolvedValue, InvalidArgumentError> {
        match literal.kind() {
            ScalarValueKind::String => decode_string("String", literal).map(ResolvedValue::String),
            _ => Err(invalid_literal("String", literal)),
        }
    }

    fn resolve_variable(&self, value: &VariableValue) -> Result<ResolvedValue, InvalidArgumentError> {
        match value {
            VariableValue::String(string) => Ok(ResolvedValue::String(string.clone())),
            _ => Err(invalid_variable("String", value)),
        }
    }
}

#[derive(Debug, Default)]
pub struct BooleanResolver;
impl ScalarValueResolver for BooleanResolver {
    fn resolve(&self, literal: &ScalarLiteral) -> Result<ResolvedValue, InvalidArgumentError> {
        match literal.kind() {
            ScalarValueKind::Boolean => Ok(ResolvedValue::Boolean(literal.text() == "true")),
            _ => Err(invalid_literal("Boolean", literal)),
        }
    }

    fn resolve_variable(&self, value: &VariableValue) -> Result<ResolvedValue, InvalidArgumentError> {
        match value {
            VariableValue::Boolean(boolean) => Ok(ResolvedValue::Boolean(*boolean)),
            _ => Err(invalid_variable("Boolean", value)),
        }
    }
}

/// `ID` accepts string and integer input, serialized as a string.
#[derive(Debug, Default)]
pub struct IdResolver;
impl ScalarValueResolver for IdResolver {
    fn resolve(&self, literal: &ScalarLiteral) -> Result<ResolvedValue, InvalidArgumentError> {
        match literal.kind() {
            ScalarValueKind::String => decode_string("ID", literal).map(ResolvedValue::Id),
            ScalarValueKind::Int => Ok(ResolvedValue::Id(literal.text().to_string())),
            _ => Err(invalid_literal("ID", literal)),
        }
    }

    fn resolve_variable(&self, value: &VariableValue) -> Result<ResolvedValue, InvalidArgumentError> {
        match value {
            VariableValue::String(string) => Ok(ResolvedValue::Id(string.clone())),
            VariableValue::Int(int) => Ok(ResolvedValue::Id(int.to_string())),
            _ => Err(invalid_variable("ID", value)),
        }
    }
}

/// Accepts any non-composite value for a custom scalar without
/// interpreting it. String literals are decoded; other literals keep their
/// source text.
#[derive(Debug)]
pub struct CustomScalarResolver {
    type_name: String,
}
impl CustomScalarResolver {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
        }
    }
}
impl ScalarValueResolver for CustomScalarResolver {
    fn resolve(&self, literal: &ScalarLiteral) -> Result<ResolvedValue, InvalidArgumentError> {
        match literal.kind() {
            ScalarValueKind::String => {
                decode_string(&self.type_name, literal).map(ResolvedValue::Custom)
            },
            _ => Ok(ResolvedValue::Custom(literal.text().to_string())),
        }
    }

    fn resolve_variable(&self, value: &VariableValue) -> Result<ResolvedValue, InvalidArgumentError> {
        match value {
            VariableValue::String(string) => Ok(ResolvedValue::Custom(string.clone())),
            VariableValue::List(_) | VariableValue::Object(_) => {
                Err(invalid_variable(&self.type_name, value))
            },
            other => Ok(ResolvedValue::Custom(other.to_string())),
        }
    }
}
