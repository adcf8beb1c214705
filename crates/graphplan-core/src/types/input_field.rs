use crate::loc;
use crate::operation::SuppliedValue;
use crate::types::TypeAnnotation;

/// Represents an
/// [input field](https://spec.graphql.org/October2021/#InputFieldsDefinition)
/// defined on an [`InputObjectType`](crate::types::InputObjectType).
#[derive(Clone, Debug, PartialEq)]
pub struct InputField {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) default_value: Option<SuppliedValue>,
    pub(crate) name: String,
    pub(crate) parent_type_name: String,
    pub(crate) type_annotation: TypeAnnotation,
}
impl InputField {
    /// The [`SourceLocation`](loc::SourceLocation) indicating where this
    /// [`InputField`] was defined.
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn default_value(&self) -> Option<&SuppliedValue> {
        self.default_value.as_ref()
    }

    /// A field must be supplied when it is non-null and has no default.
    pub fn is_required(&self) -> bool {
        !self.type_annotation.nullable() && self.default_value.is_none()
    }

    /// The name of this [`InputField`].
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn parent_type_name(&self) -> &str {
        self.parent_type_name.as_str()
    }

    /// The [`TypeAnnotation`] specifying the schema-defined type of this
    /// [`InputField`].
    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}
