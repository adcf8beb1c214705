use crate::loc::DocumentPosition;
use crate::operation::DirectiveAnnotation;
use crate::operation::FieldSelectionSet;
use crate::operation::SuppliedValue;
use crate::schema::Schema;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::ObjectType;
use indexmap::IndexMap;

pub const TYPENAME_FIELD: &str = "__typename";

/// The schema member a [`FieldSelection`] resolves to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SelectedField<'schema> {
    Declared(&'schema Field),

    /// The `__typename` meta-field, available on every composite type.
    TypeName,
}
impl<'schema> SelectedField<'schema> {
    pub fn as_declared(&self) -> Option<&'schema Field> {
        if let Self::Declared(field) = self {
            Some(field)
        } else {
            None
        }
    }

    pub fn is_typename(&self) -> bool {
        matches!(self, Self::TypeName)
    }

    pub fn name(&self) -> &'schema str {
        match self {
            Self::Declared(field) => field.name(),
            Self::TypeName => TYPENAME_FIELD,
        }
    }

    /// The named type at the bottom of this field's type annotation.
    pub fn return_type(&self, schema: &'schema Schema) -> Option<&'schema GraphQLType> {
        match self {
            Self::Declared(field) => field.return_type(schema),
            Self::TypeName => schema.type_named("String"),
        }
    }
}

/// One entry of a [`FieldSelectionSet`] after fragments were inlined and
/// same-keyed selections merged.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldSelection<'schema> {
    pub(super) alias: Option<String>,
    pub(super) argument_locations: IndexMap<String, DocumentPosition>,
    pub(super) arguments: IndexMap<String, SuppliedValue>,
    pub(super) def_location: DocumentPosition,
    pub(super) directives: Vec<DirectiveAnnotation<'schema>>,
    pub(super) field: SelectedField<'schema>,
    pub(super) restriction: Option<&'schema ObjectType>,
    pub(super) selection_set: FieldSelectionSet<'schema>,
}
impl<'schema> FieldSelection<'schema> {
    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    pub fn argument(&self, name: &str) -> Option<&SuppliedValue> {
        self.arguments.get(name)
    }

    pub fn argument_location(&self, name: &str) -> Option<DocumentPosition> {
        self.argument_locations.get(name).copied()
    }

    /// Arguments in the order they were written.
    pub fn arguments(&self) -> &IndexMap<String, SuppliedValue> {
        &self.arguments
    }

    pub fn def_location(&self) -> DocumentPosition {
        self.def_location
    }

    /// Directives of the enclosing fragment spreads and inline fragments,
    /// outermost first, followed by the field's own.
    pub fn directives(&self) -> &[DirectiveAnnotation<'schema>] {
        &self.directives
    }

    pub fn field(&self) -> SelectedField<'schema> {
        self.field
    }

    pub fn name(&self) -> &'schema str {
        self.field.name()
    }

    /// The alias if one was given, otherwise the field name.
    pub fn response_key(&self) -> &str {
        self.alias().unwrap_or_else(|| self.name())
    }

    /// Set when the field was reached only through type-conditional
    /// fragments: it then applies to this concrete type alone.
    pub fn restriction(&self) -> Option<&'schema ObjectType> {
        self.restriction
    }

    /// Empty for leaf fields.
    pub fn selection_set(&self) -> &FieldSelectionSet<'schema> {
        &self.selection_set
    }
}
