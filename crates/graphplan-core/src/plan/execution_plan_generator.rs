use crate::analysis::OperationMetrics;
use crate::input::ArgumentValue;
use crate::input::InputValueResolver;
use crate::message::DocumentMessage;
use crate::message::DocumentMessages;
use crate::message::MessageCode;
use crate::loc::DocumentPosition;
use crate::operation::DirectiveAnnotation;
use crate::operation::FieldSelection;
use crate::operation::FieldSelectionSet;
use crate::operation::Operation;
use crate::operation::QueryDocument;
use crate::operation::SelectedField;
use crate::operation::SuppliedValue;
use crate::operation::TYPENAME_FIELD;
use crate::operation::directive_owner;
use crate::operation::field_owner;
use crate::operation::invalid_argument_message;
use crate::plan::DirectiveInvocationContext;
use crate::plan::ExecutionPlan;
use crate::plan::FieldInvocationContext;
use crate::plan::FieldResolver;
use crate::plan::InternalResolver;
use crate::plan::PlanConfig;
use crate::schema::Schema;
use crate::types::Parameter;
use indexmap::IndexMap;

/// Turns one operation of a [`QueryDocument`] into an [`ExecutionPlan`].
///
/// A generator holds no per-request state; one instance can plan any number
/// of documents, from any number of threads.
#[derive(Debug)]
pub struct ExecutionPlanGenerator<'schema> {
    config: PlanConfig,
    schema: &'schema Schema,
}
impl<'schema> ExecutionPlanGenerator<'schema> {
    pub fn new(schema: &'schema Schema, config: PlanConfig) -> Self {
        Self { config, schema }
    }

    pub fn config(&self) -> &PlanConfig {
        &self.config
    }

    /// Plans the operation named `operation_name`, or the document's only
    /// operation when no name is given.
    ///
    /// The plan carries the document's messages plus any raised while
    /// planning; it is returned even when some of them are errors.
    pub fn generate(
        &self,
        document: &QueryDocument<'schema>,
        operation_name: Option<&str>,
    ) -> ExecutionPlan<'schema> {
        let mut messages = document.messages().clone();
        let Some(operation) = self.select_operation(document, operation_name, &mut messages) else {
            return ExecutionPlan::empty(self.schema, messages);
        };

        let metrics = OperationMetrics::measure(operation, &self.config.complexity);
        messages.extend(self.config.limits.check(&metrics, Some(operation.def_location())));

        let mut planner = OperationPlanner {
            config: &self.config,
            messages,
            resolver: InputValueResolver::new(self.schema, operation.variables()),
            schema: self.schema,
        };
        let directives = planner.plan_directives(operation.directives());
        let roots = planner.plan_selection_set(operation.selection_set());
        log::debug!(
            "planned {} operation {:?}: {} root field(s), depth {}, complexity {}",
            operation.kind(),
            operation.name().unwrap_or(""),
            roots.len(),
            metrics.depth(),
            metrics.complexity(),
        );

        ExecutionPlan {
            complexity: metrics.complexity(),
            depth: metrics.depth(),
            directives,
            messages: planner.messages,
            operation_kind: Some(operation.kind()),
            operation_name: operation.name().map(str::to_string),
            roots,
            schema: self.schema,
            variables: operation.variables().clone(),
        }
    }

    fn select_operation<'doc>(
        &self,
        document: &'doc QueryDocument<'schema>,
        operation_name: Option<&str>,
        messages: &mut DocumentMessages,
    ) -> Option<&'doc Operation<'schema>> {
        if let Some(name) = operation_name {
            let operation = document.operation(name);
            if operation.is_none() {
                messages.push(DocumentMessage::error(
                    MessageCode::OperationNotFound,
                    format!("the document has no operation named `{name}`"),
                ));
            }
            return operation;
        }

        let mut operations = document.operations().values();
        match (operations.next(), operations.next()) {
            (Some(operation), None) => Some(operation),
            (None, _) => {
                messages.push(DocumentMessage::error(
                    MessageCode::OperationNotFound,
                    "the document contains no executable operation",
                ));
                None
            },
            (Some(_), Some(_)) => {
                messages.push(DocumentMessage::error(
                    MessageCode::AmbiguousOperation,
                    format!(
                        "the document contains {} operations; an operation name is required",
                        document.operations().len(),
                    ),
                ));
                None
            },
        }
    }
}

/// Per-operation planning state.
struct OperationPlanner<'schema, 'cfg, 'op> {
    config: &'cfg PlanConfig,
    messages: DocumentMessages,
    resolver: InputValueResolver<'schema, 'op>,
    schema: &'schema Schema,
}
impl<'schema> OperationPlanner<'schema, '_, '_> {
    fn plan_selection_set(
        &mut self,
        selection_set: &FieldSelectionSet<'schema>,
    ) -> Vec<FieldInvocationContext<'schema>> {
        selection_set
            .iter()
            .map(|selection| self.plan_field(selection))
            .collect()
    }

    fn plan_field(&mut self, selection: &FieldSelection<'schema>) -> FieldInvocationContext<'schema> {
        let (resolver, arguments) = match selection.field() {
            SelectedField::Declared(field) => {
                let resolver = if field.is_virtual() {
                    FieldResolver::Internal(InternalResolver::VirtualRouteGroup)
                } else {
                    FieldResolver::Declared(field)
                };
                let arguments = self.plan_arguments(
                    &field_owner(field),
                    field.parameters(),
                    selection.arguments(),
                    |name| selection.argument_location(name),
                    selection.def_location(),
                );
                (resolver, arguments)
            },
            SelectedField::TypeName => {
                (FieldResolver::Internal(InternalResolver::TypeName), IndexMap::new())
            },
        };

        let mut children = self.plan_selection_set(selection.selection_set());
        let returns_abstract = selection
            .field()
            .return_type(self.schema)
            .is_some_and(|return_type| return_type.is_abstract());
        if self.config.inject_typename
            && returns_abstract
            && !children.iter().any(|child| child.field_name == TYPENAME_FIELD)
        {
            children.push(FieldInvocationContext {
                alias: None,
                arguments: IndexMap::new(),
                children: vec![],
                concrete_type: None,
                directives: vec![],
                field_name: TYPENAME_FIELD,
                injected: true,
                location: selection.def_location(),
                resolver: FieldResolver::Internal(InternalResolver::TypeName),
            });
        }

        FieldInvocationContext {
            alias: selection.alias().map(str::to_string),
            arguments,
            children,
            concrete_type: selection.restriction(),
            directives: self.plan_directives(selection.directives()),
            field_name: selection.name(),
            injected: false,
            location: selection.def_location(),
            resolver,
        }
    }

    fn plan_directives(
        &mut self,
        annotations: &[DirectiveAnnotation<'schema>],
    ) -> Vec<DirectiveInvocationContext<'schema>> {
        annotations
            .iter()
            .map(|annot| DirectiveInvocationContext {
                arguments: self.plan_arguments(
                    &directive_owner(annot.directive()),
                    annot.directive().parameters(),
                    annot.arguments(),
                    |name| annot.argument_location(name),
                    annot.def_location(),
                ),
                directive: annot.directive(),
                location: annot.def_location(),
            })
            .collect()
    }

    /// Resolves arguments in declared parameter order. Omitted parameters
    /// take their default; omitted optional parameters without one are left
    /// out. Failures become messages and the argument is dropped.
    fn plan_arguments(
        &mut self,
        owner: &str,
        parameters: &'schema IndexMap<String, Parameter>,
        supplied: &IndexMap<String, SuppliedValue>,
        argument_location: impl Fn(&str) -> Option<DocumentPosition>,
        owner_location: DocumentPosition,
    ) -> IndexMap<String, ArgumentValue<'schema>> {
        let mut arguments = IndexMap::with_capacity(parameters.len());
        for (name, param) in parameters {
            let resolved = match (supplied.get(name), param.default_value()) {
                (Some(value), default) => {
                    self.resolver.resolve_with_default(value, param.type_annotation(), default)
                },
                (None, Some(default)) => self.resolver.resolve(default, param.type_annotation()),
                (None, None) => continue,
            };
            match resolved {
                Ok(value) => {
                    arguments.insert(name.clone(), value);
                },
                Err(err) => {
                    let location = argument_location(name).unwrap_or(owner_location);
                    self.messages.push(invalid_argument_message(owner, name, &err, Some(location)));
                },
            }
        }
        arguments
    }
}
