use crate::loc::DocumentPosition;
use crate::operation::DirectiveAnnotation;
use crate::operation::FieldSelectionSet;
use crate::types::GraphQLType;

/// A named fragment definition, assembled against its own type condition.
///
/// Operations do not point at fragments: spreads are inlined into each
/// operation's [`FieldSelectionSet`] during assembly.
#[derive(Clone, Debug, PartialEq)]
pub struct Fragment<'schema> {
    pub(super) def_location: DocumentPosition,
    pub(super) directives: Vec<DirectiveAnnotation<'schema>>,
    pub(super) name: String,
    pub(super) selection_set: FieldSelectionSet<'schema>,
    pub(super) type_condition: &'schema GraphQLType,
}
impl<'schema> Fragment<'schema> {
    pub fn def_location(&self) -> DocumentPosition {
        self.def_location
    }

    pub fn directives(&self) -> &[DirectiveAnnotation<'schema>] {
        &self.directives
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn selection_set(&self) -> &FieldSelectionSet<'schema> {
        &self.selection_set
    }

    pub fn type_condition(&self) -> &'schema GraphQLType {
        self.type_condition
    }
}
