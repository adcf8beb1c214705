use crate::loc;
use crate::named_ref::DerefByName;
use crate::named_ref::DerefByNameError;
use crate::named_ref::NamedRef;
use crate::operation::SuppliedValue;
use crate::types::TypeAnnotation;
use indexmap::IndexMap;

/// A variable declared by an [`Operation`](crate::operation::Operation).
#[derive(Clone, Debug, PartialEq)]
pub struct Variable {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) default_value: Option<SuppliedValue>,
    pub(crate) name: String,
    pub(crate) type_annotation: TypeAnnotation,
}
impl Variable {
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn default_value(&self) -> Option<&SuppliedValue> {
        self.default_value.as_ref()
    }

    /// Absent at execution time is an error only for non-null variables
    /// without a default.
    pub fn is_required(&self) -> bool {
        !self.type_annotation.nullable() && self.default_value.is_none()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}
impl DerefByName for Variable {
    type Source = IndexMap<String, Variable>;
    type RefLocation = loc::SourceLocation;

    fn deref_name<'a>(
        vardef_map: &'a Self::Source,
        name: &str,
    ) -> Result<&'a Self, DerefByNameError> {
        vardef_map.get(name).ok_or_else(
            || DerefByNameError::DanglingReference(name.to_string()),
        )
    }
}

pub type NamedVariableRef = NamedRef<
    /* TSource = */ IndexMap<String, Variable>,
    /* TRefLocation = */ loc::SourceLocation,
    /* TResource = */ Variable,
>;
