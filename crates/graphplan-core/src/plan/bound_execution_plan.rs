use crate::input::ResolvedValue;
use crate::message::DocumentMessages;
use crate::plan::FieldResolver;
use crate::types::ObjectType;
use graphplan_parser::syntax::OperationKind;
use indexmap::IndexMap;

/// An [`ExecutionPlan`](crate::plan::ExecutionPlan) with every argument
/// resolved against one request's variable values.
#[derive(Clone, Debug)]
pub struct BoundExecutionPlan<'schema> {
    pub(super) directives: Vec<BoundDirectiveInvocation>,
    pub(super) messages: DocumentMessages,
    pub(super) operation_kind: Option<OperationKind>,
    pub(super) operation_name: Option<String>,
    pub(super) roots: Vec<BoundFieldInvocation<'schema>>,
}
impl<'schema> BoundExecutionPlan<'schema> {
    pub fn directives(&self) -> &[BoundDirectiveInvocation] {
        &self.directives
    }

    pub fn is_executable(&self) -> bool {
        self.operation_kind.is_some() && self.messages.is_executable()
    }

    pub fn messages(&self) -> &DocumentMessages {
        &self.messages
    }

    pub fn operation_kind(&self) -> Option<OperationKind> {
        self.operation_kind
    }

    pub fn operation_name(&self) -> Option<&str> {
        self.operation_name.as_deref()
    }

    pub fn roots(&self) -> &[BoundFieldInvocation<'schema>] {
        &self.roots
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BoundDirectiveInvocation {
    pub(super) arguments: IndexMap<String, ResolvedValue>,
    pub(super) name: String,
}
impl BoundDirectiveInvocation {
    pub fn argument(&self, name: &str) -> Option<&ResolvedValue> {
        self.arguments.get(name)
    }

    pub fn arguments(&self) -> &IndexMap<String, ResolvedValue> {
        &self.arguments
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

#[derive(Clone, Debug)]
pub struct BoundFieldInvocation<'schema> {
    pub(super) alias: Option<String>,
    pub(super) arguments: IndexMap<String, ResolvedValue>,
    pub(super) children: Vec<BoundFieldInvocation<'schema>>,
    pub(super) concrete_type: Option<&'schema ObjectType>,
    pub(super) directives: Vec<BoundDirectiveInvocation>,
    pub(super) field_name: &'schema str,
    pub(super) injected: bool,
    pub(super) resolver: FieldResolver<'schema>,
}
impl<'schema> BoundFieldInvocation<'schema> {
    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    pub fn argument(&self, name: &str) -> Option<&ResolvedValue> {
        self.arguments.get(name)
    }

    pub fn arguments(&self) -> &IndexMap<String, ResolvedValue> {
        &self.arguments
    }

    pub fn child(&self, response_key: &str) -> Option<&BoundFieldInvocation<'schema>> {
        self.children.iter().find(|child| child.response_key() == response_key)
    }

    pub fn children(&self) -> &[BoundFieldInvocation<'schema>] {
        &self.children
    }

    pub fn concrete_type(&self) -> Option<&'schema ObjectType> {
        self.concrete_type
    }

    pub fn directives(&self) -> &[BoundDirectiveInvocation] {
        &self.directives
    }

    pub fn field_name(&self) -> &'schema str {
        self.field_name
    }

    pub fn injected(&self) -> bool {
        self.injected
    }

    /// `false` when `@skip(if: true)` or `@include(if: false)` applies.
    pub fn is_included(&self) -> bool {
        let flag = |name: &str| {
            self.directives
                .iter()
                .filter(|directive| directive.name == name)
                .filter_map(|directive| directive.argument("if").and_then(ResolvedValue::as_bool))
                .collect::<Vec<_>>()
        };
        !flag("skip").contains(&true) && !flag("include").contains(&false)
    }

    pub fn resolver(&self) -> FieldResolver<'schema> {
        self.resolver
    }

    pub fn response_key(&self) -> &str {
        self.alias().unwrap_or(self.field_name)
    }
}
