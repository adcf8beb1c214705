use crate::loc;
use indexmap::IndexMap;

/// Represents an
/// [enum type](https://spec.graphql.org/October2021/#sec-Enums) defined
/// within some [`Schema`](crate::schema::Schema).
#[derive(Clone, Debug, PartialEq)]
pub struct EnumType {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) name: String,
    pub(crate) values: IndexMap<String, EnumValue>,
}
impl EnumType {
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn has_value(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The values of this enum in declaration order.
    pub fn values(&self) -> &IndexMap<String, EnumValue> {
        &self.values
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct EnumValue {
    pub(crate) name: String,
    pub(crate) parent_type_name: String,
}
impl EnumValue {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn parent_type_name(&self) -> &str {
        self.parent_type_name.as_str()
    }
}
