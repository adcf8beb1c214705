use crate::loc::DocumentPosition;
use crate::operation::DirectiveAnnotation;
use crate::operation::FieldSelectionSet;
use crate::operation::Variable;
use crate::types::ObjectType;
use graphplan_parser::syntax::OperationKind;
use indexmap::IndexMap;

#[derive(Clone, Debug, PartialEq)]
pub struct Operation<'schema> {
    pub(super) def_location: DocumentPosition,
    pub(super) directives: Vec<DirectiveAnnotation<'schema>>,
    pub(super) kind: OperationKind,
    pub(super) name: Option<String>,
    pub(super) root_type: &'schema ObjectType,
    pub(super) selection_set: FieldSelectionSet<'schema>,
    pub(super) variables: IndexMap<String, Variable>,
}
impl<'schema> Operation<'schema> {
    pub fn def_location(&self) -> DocumentPosition {
        self.def_location
    }

    pub fn directives(&self) -> &[DirectiveAnnotation<'schema>] {
        &self.directives
    }

    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    /// `None` for an anonymous operation.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn root_type(&self) -> &'schema ObjectType {
        self.root_type
    }

    pub fn selection_set(&self) -> &FieldSelectionSet<'schema> {
        &self.selection_set
    }

    pub fn variable(&self, name: &str) -> Option<&Variable> {
        self.variables.get(name)
    }

    pub fn variables(&self) -> &IndexMap<String, Variable> {
        &self.variables
    }
}
