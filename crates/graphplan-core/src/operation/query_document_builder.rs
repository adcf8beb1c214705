use crate::input::ValueCoercer;
use crate::loc;
use crate::loc::DocumentPosition;
use crate::message::DocumentMessage;
use crate::message::DocumentMessages;
use crate::message::MessageCode;
use crate::operation::Fragment;
use crate::operation::Operation;
use crate::operation::QueryDocument;
use crate::operation::Variable;
use crate::operation::assembly_context::AssemblyContext;
use crate::operation::fragment_registry::FragmentRegistry;
use crate::operation::selection_set_builder::SelectionSetBuilder;
use crate::schema::Schema;
use crate::types::DirectiveLocation;
use crate::types::TypeAnnotation;
use graphplan_parser::syntax::NodeIndex;
use graphplan_parser::syntax::NodeRange;
use graphplan_parser::syntax::OperationKind;
use graphplan_parser::syntax::SyntaxNodeKind;
use graphplan_parser::syntax::SyntaxTree;
use indexmap::IndexMap;
use std::collections::HashSet;

/// Assembles a parsed [`SyntaxTree`] into a [`QueryDocument`].
pub struct QueryDocumentBuilder<'schema, 'tree, 'src> {
    schema: &'schema Schema,
    tree: &'tree SyntaxTree<'src>,
}
impl<'schema, 'tree, 'src> QueryDocumentBuilder<'schema, 'tree, 'src> {
    pub fn from_syntax_tree(schema: &'schema Schema, tree: &'tree SyntaxTree<'src>) -> Self {
        Self { schema, tree }
    }

    pub fn build(self) -> QueryDocument<'schema> {
        let mut messages = DocumentMessages::new();
        let registry = FragmentRegistry::collect(self.schema, self.tree, &mut messages);
        let mut used_fragments = HashSet::new();

        let operation_count = self.tree
            .definitions()
            .filter(|(_, node)| matches!(node.kind, SyntaxNodeKind::Operation { .. }))
            .count();
        let mut operations = IndexMap::new();
        for (index, node) in self.tree.definitions() {
            let SyntaxNodeKind::Operation { name, .. } = &node.kind else {
                continue;
            };
            let location = DocumentPosition::from_span(&node.span);
            let key = name.map(|span| self.tree.text(span)).unwrap_or("");
            if key.is_empty() && operation_count > 1 {
                messages.push(
                    DocumentMessage::error(
                        MessageCode::AnonymousOperationNotAlone,
                        "an anonymous operation must be the only operation in its document",
                    ).at(location),
                );
            }
            if operations.contains_key(key) {
                if !key.is_empty() {
                    messages.push(
                        DocumentMessage::error(
                            MessageCode::DuplicateOperationName,
                            format!("operation `{key}` is defined more than once"),
                        ).at(location),
                    );
                }
                if let SyntaxNodeKind::Operation { selection_set, .. } = &node.kind {
                    self.mark_spread_fragments(*selection_set, &registry, &mut used_fragments);
                }
                continue;
            }
            if let Some(operation) = self.build_operation(index, &registry, &mut messages, &mut used_fragments) {
                operations.insert(key.to_string(), operation);
            }
        }

        let mut fragments = IndexMap::new();
        for definition in registry.definitions() {
            let Some(type_condition) = definition.type_condition else {
                continue;
            };
            let mut ctx = AssemblyContext::new(self.schema, self.tree, &registry, None);
            ctx.visiting_fragments.push(definition.name.clone());
            let directives =
                ctx.bind_directives(definition.directives, DirectiveLocation::FragmentDefinition);
            let selection_set =
                SelectionSetBuilder::build(&mut ctx, type_condition, &[definition.selection_set]);
            messages.extend(ctx.messages);

            if !used_fragments.contains(&definition.name) {
                messages.push(
                    DocumentMessage::error(
                        MessageCode::UnusedFragment,
                        format!("fragment `{}` is never used", definition.name),
                    ).at(definition.def_location),
                );
            }
            fragments.insert(definition.name.clone(), Fragment {
                def_location: definition.def_location,
                directives,
                name: definition.name.clone(),
                selection_set,
                type_condition,
            });
        }

        log::debug!(
            "assembled {} operation(s) and {} fragment(s) with {} message(s)",
            operations.len(),
            fragments.len(),
            messages.len(),
        );
        QueryDocument {
            fragments,
            messages,
            operations,
            schema: self.schema,
        }
    }

    /// Records every fragment reachable by spreads from `selections`
    /// without assembling anything.
    fn mark_spread_fragments(
        &self,
        selections: NodeRange,
        registry: &FragmentRegistry<'schema>,
        used_fragments: &mut HashSet<String>,
    ) {
        for (_, node) in self.tree.children(selections) {
            match &node.kind {
                SyntaxNodeKind::Field { selection_set, .. }
                | SyntaxNodeKind::InlineFragment { selection_set, .. } => {
                    self.mark_spread_fragments(*selection_set, registry, used_fragments);
                },
                SyntaxNodeKind::FragmentSpread { name, .. } => {
                    let name = self.tree.text(*name);
                    if !used_fragments.insert(name.to_string()) {
                        continue;
                    }
                    if let Some(definition) = registry.get(name) {
                        self.mark_spread_fragments(definition.selection_set, registry, used_fragments);
                    }
                },
                _ => (),
            }
        }
    }

    fn build_operation(
        &self,
        index: NodeIndex,
        registry: &FragmentRegistry<'schema>,
        messages: &mut DocumentMessages,
        used_fragments: &mut HashSet<String>,
    ) -> Option<Operation<'schema>> {
        let node = self.tree.node(index);
        let SyntaxNodeKind::Operation {
            kind,
            name,
            variables,
            directives,
            selection_set,
        } = &node.kind else {
            return None;
        };
        let def_location = DocumentPosition::from_span(&node.span);
        let name = name.map(|span| self.tree.text(span).to_string());

        let root = self.schema
            .root_type(*kind)
            .and_then(|root_type| Some((root_type, self.schema.type_named(root_type.name())?)));
        let Some((root_type, root_graphql_type)) = root else {
            messages.push(
                DocumentMessage::error(
                    MessageCode::UnsupportedOperation,
                    format!("the schema does not support {kind} operations"),
                ).at(def_location),
            );
            // The operation is dropped, but its spreads still count as uses.
            self.mark_spread_fragments(*selection_set, registry, used_fragments);
            return None;
        };

        let mut variable_ctx = AssemblyContext::new(self.schema, self.tree, registry, None);
        let variable_defs = self.build_variables(&mut variable_ctx, *variables);
        messages.extend(variable_ctx.messages);

        let mut ctx = AssemblyContext::new(self.schema, self.tree, registry, Some(&variable_defs));
        let directives = ctx.bind_directives(*directives, DirectiveLocation::for_operation(*kind));
        let selection_set = SelectionSetBuilder::build(&mut ctx, root_graphql_type, &[*selection_set]);

        if *kind == OperationKind::Subscription {
            let mut root_keys: Vec<&str> = vec![];
            for selection in selection_set.iter().filter(|selection| !selection.field().is_typename()) {
                if !root_keys.contains(&selection.response_key()) {
                    root_keys.push(selection.response_key());
                }
            }
            if root_keys.len() > 1 {
                ctx.error(
                    MessageCode::SubscriptionMultipleRootFields,
                    format!(
                        "a subscription must select exactly one root field, found {}",
                        root_keys.join(", "),
                    ),
                    def_location,
                );
            }
        }

        for (var_name, variable) in &variable_defs {
            if !ctx.used_variables.contains(var_name) {
                ctx.messages.push(
                    DocumentMessage::warning(
                        MessageCode::UnusedVariable,
                        format!("variable `${var_name}` is never used"),
                    ).at_optional(variable.def_location().document_position()),
                );
            }
        }
        messages.extend(ctx.messages);
        used_fragments.extend(ctx.used_fragments);

        log::trace!(
            "assembled {kind} operation {:?} with {} root field(s)",
            name.as_deref().unwrap_or(""),
            selection_set.len(),
        );
        Some(Operation {
            def_location,
            directives,
            kind: *kind,
            name,
            root_type,
            selection_set,
            variables: variable_defs,
        })
    }

    fn build_variables(
        &self,
        ctx: &mut AssemblyContext<'schema, '_, 'src>,
        definitions: NodeRange,
    ) -> IndexMap<String, Variable> {
        let mut variables = IndexMap::with_capacity(definitions.len());
        for (_, node) in self.tree.children(definitions) {
            let SyntaxNodeKind::VariableDefinition {
                name,
                type_annotation,
                default_value,
                directives,
            } = &node.kind else {
                continue;
            };
            let location = DocumentPosition::from_span(&node.span);
            let name = self.tree.text(*name);
            if variables.contains_key(name) {
                ctx.error(
                    MessageCode::DuplicateVariable,
                    format!("variable `${name}` is declared more than once"),
                    location,
                );
                continue;
            }

            let def_location = loc::SourceLocation::ExecutableDocument(location);
            let type_annotation =
                TypeAnnotation::from_syntax(self.tree, *type_annotation, &def_location);
            let type_name = type_annotation.innermost_named_type_annotation().graphql_type_name();
            let is_input = match self.schema.type_named(type_name) {
                Some(type_) if type_.is_input_type() => true,
                Some(_) => {
                    ctx.error(
                        MessageCode::NonInputVariableType,
                        format!("variable `${name}` cannot be of non-input type `{type_name}`"),
                        location,
                    );
                    false
                },
                None => {
                    ctx.error(
                        MessageCode::UnknownType,
                        format!("unknown type `{type_name}` for variable `${name}`"),
                        location,
                    );
                    false
                },
            };

            let default_value = default_value.map(|default_index| ctx.supplied_value(default_index));
            if is_input
                && let Some(default) = &default_value
                && let Err(err) = ValueCoercer::new(self.schema).coerce_supplied(default, &type_annotation)
            {
                ctx.error(
                    MessageCode::InvalidDefaultValue,
                    format!("default value `{default}` of variable `${name}` is invalid: {err}"),
                    location,
                );
            }
            ctx.bind_directives(*directives, DirectiveLocation::VariableDefinition);

            variables.insert(name.to_string(), Variable {
                def_location,
                default_value,
                name: name.to_string(),
                type_annotation,
            });
        }
        variables
    }
}
