use crate::input::ArgumentValue;
use crate::input::ResolvedValue;
use crate::input::ValueCoercer;
use crate::input::VariableValues;
use crate::loc::DocumentPosition;
use crate::message::DocumentMessage;
use crate::message::DocumentMessages;
use crate::message::MessageCode;
use crate::operation::Variable;
use crate::operation::field_owner;
use crate::operation::invalid_argument_message;
use crate::plan::BoundDirectiveInvocation;
use crate::plan::BoundExecutionPlan;
use crate::plan::BoundFieldInvocation;
use crate::plan::DirectiveInvocationContext;
use crate::plan::FieldInvocationContext;
use crate::schema::Schema;
use graphplan_parser::syntax::OperationKind;
use indexmap::IndexMap;
use std::collections::HashSet;

/// The invocation tree of one operation, with its metrics and every message
/// raised while assembling and planning it.
///
/// A plan holding any error-severity message must not be executed.
#[derive(Clone, Debug)]
pub struct ExecutionPlan<'schema> {
    pub(super) complexity: f64,
    pub(super) depth: usize,
    pub(super) directives: Vec<DirectiveInvocationContext<'schema>>,
    pub(super) messages: DocumentMessages,
    pub(super) operation_kind: Option<OperationKind>,
    pub(super) operation_name: Option<String>,
    pub(super) roots: Vec<FieldInvocationContext<'schema>>,
    pub(super) schema: &'schema Schema,
    pub(super) variables: IndexMap<String, Variable>,
}
impl<'schema> ExecutionPlan<'schema> {
    /// A plan with no operation to run.
    pub(super) fn empty(schema: &'schema Schema, messages: DocumentMessages) -> Self {
        Self {
            complexity: 0.0,
            depth: 0,
            directives: vec![],
            messages,
            operation_kind: None,
            operation_name: None,
            roots: vec![],
            schema,
            variables: IndexMap::new(),
        }
    }

    pub fn complexity(&self) -> f64 {
        self.complexity
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Directives applied to the operation itself.
    pub fn directives(&self) -> &[DirectiveInvocationContext<'schema>] {
        &self.directives
    }

    /// `true` when at least one argument waits on variable values.
    pub fn has_deferred_arguments(&self) -> bool {
        fn deferred(ctx: &FieldInvocationContext<'_>) -> bool {
            ctx.arguments.values().any(ArgumentValue::is_deferred)
                || ctx.directives.iter().any(|d| d.arguments.values().any(ArgumentValue::is_deferred))
                || ctx.children.iter().any(deferred)
        }
        self.roots.iter().any(deferred)
    }

    pub fn is_executable(&self) -> bool {
        self.operation_kind.is_some() && self.messages.is_executable()
    }

    pub fn messages(&self) -> &DocumentMessages {
        &self.messages
    }

    /// `None` when no operation could be selected.
    pub fn operation_kind(&self) -> Option<OperationKind> {
        self.operation_kind
    }

    pub fn operation_name(&self) -> Option<&str> {
        self.operation_name.as_deref()
    }

    pub fn roots(&self) -> &[FieldInvocationContext<'schema>] {
        &self.roots
    }

    pub fn variables(&self) -> &IndexMap<String, Variable> {
        &self.variables
    }

    /// Resolves every deferred argument against one request's `values`.
    ///
    /// Provided values are checked against their declared types first; an
    /// argument depending on a variable that failed that check is not
    /// reported a second time.
    pub fn bind_variables(&self, values: &VariableValues) -> BoundExecutionPlan<'schema> {
        let mut binder = VariableBinder {
            failed_variables: HashSet::new(),
            messages: self.messages.clone(),
            values,
        };
        binder.check_variables(self.schema, &self.variables);
        let roots = self.roots.iter().map(|root| binder.bind_field(root)).collect();
        let directives = binder.bind_directives(&self.directives);
        log::debug!(
            "bound {} variable value(s) to operation {:?}",
            values.len(),
            self.operation_name.as_deref().unwrap_or(""),
        );
        BoundExecutionPlan {
            directives,
            messages: binder.messages,
            operation_kind: self.operation_kind,
            operation_name: self.operation_name.clone(),
            roots,
        }
    }
}
impl std::fmt::Display for ExecutionPlan<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.operation_kind {
            Some(kind) => write!(f, "{kind}")?,
            None => f.write_str("(no operation)")?,
        }
        if let Some(name) = &self.operation_name {
            write!(f, " {name}")?;
        }
        writeln!(f, " (depth {}, complexity {})", self.depth, self.complexity)?;
        for root in &self.roots {
            root.write_tree(f, 1)?;
        }
        Ok(())
    }
}

struct VariableBinder<'v> {
    failed_variables: HashSet<String>,
    messages: DocumentMessages,
    values: &'v VariableValues,
}
impl VariableBinder<'_> {
    fn check_variables(&mut self, schema: &Schema, variables: &IndexMap<String, Variable>) {
        let coercer = ValueCoercer::with_variables(schema, variables, self.values);
        for (name, variable) in variables {
            let location = variable.def_location().document_position();
            match self.values.get(name) {
                Some(value) => {
                    if let Err(err) = coercer.coerce_variable_value(value, variable.type_annotation()) {
                        self.failed_variables.insert(name.clone());
                        self.messages.push(
                            DocumentMessage::error(
                                MessageCode::InvalidVariableValue,
                                format!("variable `${name}` has an invalid value {value}: {err}"),
                            ).at_optional(location),
                        );
                    }
                },
                None if variable.is_required() => {
                    self.failed_variables.insert(name.clone());
                    self.messages.push(
                        DocumentMessage::error(
                            MessageCode::MissingRequiredVariable,
                            format!(
                                "variable `${name}` of non-null type `{}` was not provided",
                                variable.type_annotation(),
                            ),
                        ).at_optional(location),
                    );
                },
                None => (),
            }
        }
    }

    fn bind_arguments(
        &mut self,
        owner: String,
        arguments: &IndexMap<String, ArgumentValue<'_>>,
        location: DocumentPosition,
    ) -> IndexMap<String, ResolvedValue> {
        let mut bound = IndexMap::with_capacity(arguments.len());
        for (name, value) in arguments {
            match value.resolve(self.values) {
                Ok(resolved) => {
                    bound.insert(name.clone(), resolved);
                },
                Err(err) => {
                    let already_reported = value.as_deferred().is_some_and(|deferred| {
                        deferred.variable_names().any(|var| self.failed_variables.contains(var))
                    });
                    if !already_reported {
                        self.messages.push(invalid_argument_message(&owner, name, &err, Some(location)));
                    }
                },
            }
        }
        bound
    }

    fn bind_directives(
        &mut self,
        directives: &[DirectiveInvocationContext<'_>],
    ) -> Vec<BoundDirectiveInvocation> {
        directives
            .iter()
            .map(|directive| BoundDirectiveInvocation {
                arguments: self.bind_arguments(
                    format!("directive `@{}`", directive.name()),
                    &directive.arguments,
                    directive.location,
                ),
                name: directive.name().to_string(),
            })
            .collect()
    }

    fn bind_field<'schema>(
        &mut self,
        ctx: &FieldInvocationContext<'schema>,
    ) -> BoundFieldInvocation<'schema> {
        let owner = match ctx.resolver.as_declared() {
            Some(field) => field_owner(field),
            None => format!("field `{}`", ctx.field_name),
        };
        BoundFieldInvocation {
            alias: ctx.alias.clone(),
            arguments: self.bind_arguments(owner, &ctx.arguments, ctx.location),
            children: ctx.children.iter().map(|child| self.bind_field(child)).collect(),
            concrete_type: ctx.concrete_type,
            directives: self.bind_directives(&ctx.directives),
            field_name: ctx.field_name,
            injected: ctx.injected,
            resolver: ctx.resolver,
        }
    }
}
