use crate::loc;
use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::types::Parameter;
use crate::types::TypeAnnotation;
use indexmap::IndexMap;

/// Represents a field defined on an
/// [`ObjectType`](crate::types::ObjectType) or
/// [`InterfaceType`](crate::types::InterfaceType).
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    pub(crate) cost: Option<f64>,
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) is_virtual: bool,
    pub(crate) name: String,
    pub(crate) parameters: IndexMap<String, Parameter>,
    pub(crate) parent_type_name: String,
    pub(crate) type_annotation: TypeAnnotation,
}
impl Field {
    /// The per-field base cost declared in the schema, if any.
    pub fn cost(&self) -> Option<f64> {
        self.cost
    }

    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    /// Virtual fields exist only to group nested route fields; they have no
    /// resolver of their own.
    pub fn is_virtual(&self) -> bool {
        self.is_virtual
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn parameter(&self, name: &str) -> Option<&Parameter> {
        self.parameters.get(name)
    }

    /// The parameters of this field in declaration order.
    pub fn parameters(&self) -> &IndexMap<String, Parameter> {
        &self.parameters
    }

    pub fn parent_type_name(&self) -> &str {
        self.parent_type_name.as_str()
    }

    /// The innermost named type this field returns.
    pub fn return_type<'schema>(&self, schema: &'schema Schema) -> Option<&'schema GraphQLType> {
        self.type_annotation.innermost_named_type_annotation().graphql_type(schema)
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}
