use crate::loc::DocumentPosition;
use crate::operation::SuppliedValue;
use crate::types::Directive;
use indexmap::IndexMap;

/// A directive applied to a field, fragment, operation or variable, bound to
/// its schema definition.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveAnnotation<'schema> {
    pub(super) argument_locations: IndexMap<String, DocumentPosition>,
    pub(super) arguments: IndexMap<String, SuppliedValue>,
    pub(super) def_location: DocumentPosition,
    pub(super) directive: &'schema Directive,
}
impl<'schema> DirectiveAnnotation<'schema> {
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

    pub fn directive(&self) -> &'schema Directive {
        self.directive
    }

    pub fn name(&self) -> &'schema str {
        self.directive.name()
    }
}
