use indexmap::IndexMap;

/// A fully resolved, typed input value.
#[derive(Clone, Debug, PartialEq)]
pub enum ResolvedValue {
    Null,
    Boolean(bool),
    Int(i32),
    Float(f64),
    String(String),
    Id(String),
    Enum(String),
    /// The value of a custom scalar, as produced by its resolver.
    Custom(String),
    List(Vec<ResolvedValue>),
    /// Fields in the input object type's declaration order.
    Object(IndexMap<String, ResolvedValue>),
}
impl ResolvedValue {
    pub fn as_bool(&self) -> Option<bool> {
        if let Self::Boolean(value) = self {
            Some(*value)
        } else {
            None
        }
    }

    pub fn as_int(&self) -> Option<i32> {
        if let Self::Int(value) = self {
            Some(*value)
        } else {
            None
        }
    }
}
impl std::fmt::Display for ResolvedValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Boolean(value) => write!(f, "{value}"),
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value:?}"),
            Self::String(value) | Self::Id(value) | Self::Custom(value) => {
                write!(f, "{value:?}")
            },
            Self::Enum(value) => f.write_str(value),
            Self::List(items) => {
                f.write_str("[")?;
                for (idx, item) in items.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            },
            Self::Object(fields) => {
                f.write_str("{")?;
                for (idx, (key, value)) in fields.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, " {key}: {value}")?;
                }
                f.write_str(if fields.is_empty() { "}" } else { " }" })
            },
        }
    }
}
