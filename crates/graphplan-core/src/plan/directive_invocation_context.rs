use crate::input::ArgumentValue;
use crate::loc::DocumentPosition;
use crate::types::Directive;
use indexmap::IndexMap;

#[derive(Clone, Debug)]
pub struct DirectiveInvocationContext<'schema> {
    pub(super) arguments: IndexMap<String, ArgumentValue<'schema>>,
    pub(super) directive: &'schema Directive,
    pub(super) location: DocumentPosition,
}
impl<'schema> DirectiveInvocationContext<'schema> {
    pub fn argument(&self, name: &str) -> Option<&ArgumentValue<'schema>> {
        self.arguments.get(name)
    }

    /// In the directive's declared parameter order.
    pub fn arguments(&self) -> &IndexMap<String, ArgumentValue<'schema>> {
        &self.arguments
    }

    pub fn directive(&self) -> &'schema Directive {
        self.directive
    }

    pub fn location(&self) -> DocumentPosition {
        self.location
    }

    pub fn name(&self) -> &'schema str {
        self.directive.name()
    }
}
