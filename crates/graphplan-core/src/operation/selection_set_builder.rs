use crate::loc::DocumentPosition;
use crate::message::DocumentMessage;
use crate::message::MessageCode;
use crate::operation::DirectiveAnnotation;
use crate::operation::FieldSelection;
use crate::operation::FieldSelectionSet;
use crate::operation::SelectedField;
use crate::operation::TYPENAME_FIELD;
use crate::operation::assembly_context::AssemblyContext;
use crate::operation::assembly_context::BoundArguments;
use crate::operation::assembly_context::field_owner;
use crate::types::DirectiveLocation;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::ObjectType;
use graphplan_parser::syntax::NodeIndex;
use graphplan_parser::syntax::NodeRange;
use graphplan_parser::syntax::SyntaxNodeKind;
use indexmap::IndexMap;

/// What the selections currently being visited apply to.
#[derive(Clone, Debug)]
struct Scope<'schema> {
    /// Directives of the enclosing fragment spreads and inline fragments.
    inherited_directives: Vec<DirectiveAnnotation<'schema>>,
    /// `None` while every possible type of the parent applies.
    restriction: Option<Vec<&'schema ObjectType>>,
    /// The innermost type condition in effect; fields are looked up here.
    selection_type: &'schema GraphQLType,
}

/// A merged entry whose children are not assembled yet.
#[derive(Clone, Debug)]
struct PendingField<'schema> {
    alias: Option<String>,
    arguments: BoundArguments,
    child_selections: Vec<NodeRange>,
    def_location: DocumentPosition,
    directives: Vec<DirectiveAnnotation<'schema>>,
    field: SelectedField<'schema>,
    response_key: String,
    restriction: Option<&'schema ObjectType>,
}
impl PendingField<'_> {
    fn arguments_match(&self, other: &PendingField<'_>) -> bool {
        let ours = &self.arguments.values;
        let theirs = &other.arguments.values;
        ours.len() == theirs.len()
            && ours.iter().all(|(name, value)| {
                theirs.get(name).is_some_and(|other_value| value.is_equivalent_to(other_value))
            })
    }
}

/// Flattens one or more source selection sets on `parent_type` into a
/// [`FieldSelectionSet`].
///
/// Spreads and inline fragments are walked depth-first. A type-conditional
/// fragment that narrows an abstract parent emits each captured field once
/// per concrete type both in the condition and in the parent; entries with
/// the same response key and concrete type are merged, their child
/// selections assembled together afterwards.
///
/// A restricted entry that repeats an unrestricted one is folded into it
/// when it selects nothing further. Otherwise the unrestricted entry is
/// spread over every possible type of the parent so each concrete type
/// ends up with exactly one entry per response key.
pub(super) struct SelectionSetBuilder<'schema> {
    parent_type: &'schema GraphQLType,
    pending: IndexMap<(String, Option<String>), PendingField<'schema>>,
}
impl<'schema> SelectionSetBuilder<'schema> {
    pub(super) fn build(
        ctx: &mut AssemblyContext<'schema, '_, '_>,
        parent_type: &'schema GraphQLType,
        selections: &[NodeRange],
    ) -> FieldSelectionSet<'schema> {
        let mut builder = Self {
            parent_type,
            pending: IndexMap::new(),
        };
        let scope = Scope {
            inherited_directives: vec![],
            restriction: None,
            selection_type: parent_type,
        };
        for range in selections {
            builder.visit_selections(ctx, *range, &scope);
        }
        builder.finish(ctx)
    }

    fn visit_selections(
        &mut self,
        ctx: &mut AssemblyContext<'schema, '_, '_>,
        selections: NodeRange,
        scope: &Scope<'schema>,
    ) {
        let tree = ctx.tree;
        for (index, node) in tree.children(selections) {
            match &node.kind {
                SyntaxNodeKind::Field { .. } => self.visit_field(ctx, index, scope),

                SyntaxNodeKind::FragmentSpread { name, directives } => {
                    let location = DocumentPosition::from_span(&node.span);
                    let name = tree.text(*name);
                    ctx.used_fragments.insert(name.to_string());
                    let fragments = ctx.fragments;
                    let Some(fragment) = fragments.get(name) else {
                        ctx.error(
                            MessageCode::UnknownFragment,
                            format!("unknown fragment `{name}`"),
                            location,
                        );
                        continue;
                    };
                    let Some(type_condition) = fragment.type_condition else {
                        continue;
                    };
                    if fragments.is_cyclic(name)
                        || ctx.visiting_fragments.iter().any(|visiting| visiting == name) {
                        continue;
                    }
                    let directives =
                        ctx.bind_directives(*directives, DirectiveLocation::FragmentSpread);
                    let description = format!("fragment `{name}`");
                    let Some(inner) =
                        self.enter_fragment(ctx, scope, type_condition, directives, &description, location)
                    else {
                        continue;
                    };
                    ctx.visiting_fragments.push(name.to_string());
                    self.visit_selections(ctx, fragment.selection_set, &inner);
                    ctx.visiting_fragments.pop();
                },

                SyntaxNodeKind::InlineFragment { type_condition, directives, selection_set } => {
                    let location = DocumentPosition::from_span(&node.span);
                    let condition = match type_condition {
                        None => scope.selection_type,
                        Some(span) => {
                            let condition_name = tree.text(*span);
                            match ctx.schema.type_named(condition_name) {
                                Some(type_) if type_.is_composite() => type_,
                                Some(_) => {
                                    ctx.error(
                                        MessageCode::InvalidTypeCondition,
                                        format!(
                                            "inline fragment cannot condition on non-composite \
                                            type `{condition_name}`",
                                        ),
                                        location,
                                    );
                                    continue;
                                },
                                None => {
                                    ctx.error(
                                        MessageCode::UnknownType,
                                        format!("unknown type `{condition_name}` in inline fragment"),
                                        location,
                                    );
                                    continue;
                                },
                            }
                        },
                    };
                    let directives =
                        ctx.bind_directives(*directives, DirectiveLocation::InlineFragment);
                    let Some(inner) =
                        self.enter_fragment(ctx, scope, condition, directives, "inline fragment", location)
                    else {
                        continue;
                    };
                    self.visit_selections(ctx, *selection_set, &inner);
                },

                _ => (),
            }
        }
    }

    /// Narrows `scope` by a fragment's type condition, or reports that the
    /// fragment can never apply here.
    fn enter_fragment(
        &self,
        ctx: &mut AssemblyContext<'schema, '_, '_>,
        scope: &Scope<'schema>,
        condition: &'schema GraphQLType,
        directives: Vec<DirectiveAnnotation<'schema>>,
        description: &str,
        location: DocumentPosition,
    ) -> Option<Scope<'schema>> {
        let mut inherited_directives = scope.inherited_directives.clone();
        inherited_directives.extend(directives);

        if condition.name() == scope.selection_type.name() {
            return Some(Scope {
                inherited_directives,
                restriction: scope.restriction.clone(),
                selection_type: condition,
            });
        }

        let candidates = match &scope.restriction {
            Some(types) => types.clone(),
            None => ctx.schema.possible_types(self.parent_type.name()),
        };
        let allowed: Vec<&'schema ObjectType> = candidates
            .iter()
            .copied()
            .filter(|obj| ctx.schema.is_possible_type(condition.name(), obj.name()))
            .collect();
        if allowed.is_empty() {
            ctx.error(
                MessageCode::FragmentNeverApplies,
                format!(
                    "{description} on `{}` can never apply within `{}`",
                    condition.name(),
                    scope.selection_type.name(),
                ),
                location,
            );
            return None;
        }

        let restriction = if scope.restriction.is_none() && allowed.len() == candidates.len() {
            None
        } else {
            Some(allowed)
        };
        Some(Scope {
            inherited_directives,
            restriction,
            selection_type: condition,
        })
    }

    fn visit_field(
        &mut self,
        ctx: &mut AssemblyContext<'schema, '_, '_>,
        index: NodeIndex,
        scope: &Scope<'schema>,
    ) {
        let tree = ctx.tree;
        let SyntaxNodeKind::Field {
            alias,
            name,
            arguments,
            directives,
            selection_set,
        } = &tree.node(index).kind else {
            return;
        };
        let location = ctx.position(index);
        let field_name = tree.text(*name);

        let field = if field_name == TYPENAME_FIELD {
            SelectedField::TypeName
        } else {
            match lookup_field(scope.selection_type, field_name) {
                Some(field) => SelectedField::Declared(field),
                None => {
                    ctx.error(
                        MessageCode::UnknownField,
                        format!(
                            "cannot query field `{field_name}` on type `{}`",
                            scope.selection_type.name(),
                        ),
                        location,
                    );
                    return;
                },
            }
        };

        let arguments = match field {
            SelectedField::Declared(declared) => ctx.bind_arguments(
                &field_owner(declared),
                declared.parameters(),
                *arguments,
                location,
            ),
            SelectedField::TypeName => {
                for (arg_index, arg_node) in tree.children(*arguments) {
                    if let SyntaxNodeKind::Argument { name, .. } = &arg_node.kind {
                        let arg_location = ctx.position(arg_index);
                        ctx.error(
                            MessageCode::UnknownArgument,
                            format!("unknown argument `{}` on `{TYPENAME_FIELD}`", tree.text(*name)),
                            arg_location,
                        );
                    }
                }
                BoundArguments::default()
            },
        };
        let mut field_directives = scope.inherited_directives.clone();
        field_directives.extend(ctx.bind_directives(*directives, DirectiveLocation::Field));

        if let Some(return_type) = field.return_type(ctx.schema) {
            if return_type.is_leaf() && !selection_set.is_empty() {
                ctx.error(
                    MessageCode::LeafFieldSelection,
                    format!(
                        "field `{field_name}` returns leaf type `{}` and cannot have a selection set",
                        return_type.name(),
                    ),
                    location,
                );
            } else if return_type.is_composite() && selection_set.is_empty() {
                ctx.error(
                    MessageCode::MissingSelectionSet,
                    format!(
                        "field `{field_name}` returns composite type `{}` and must have a \
                        selection set",
                        return_type.name(),
                    ),
                    location,
                );
            }
        }

        let targets: Vec<Option<&'schema ObjectType>> = match &scope.restriction {
            Some(types) => types.iter().copied().map(Some).collect(),
            None if field.is_typename() && self.parent_type.as_union().is_some() => ctx.schema
                .possible_types(self.parent_type.name())
                .into_iter()
                .map(Some)
                .collect(),
            None => vec![None],
        };
        let alias = alias.as_ref().map(|span| tree.text(*span).to_string());
        let response_key = alias.clone().unwrap_or_else(|| field_name.to_string());
        for restriction in targets {
            // Restricted entries resolve through the concrete type's own field.
            let concrete_field = match (field, restriction) {
                (SelectedField::Declared(declared), Some(obj)) => {
                    SelectedField::Declared(obj.field(declared.name()).unwrap_or(declared))
                },
                _ => field,
            };
            self.emit(ctx, PendingField {
                alias: alias.clone(),
                arguments: arguments.clone(),
                child_selections: vec![],
                def_location: location,
                directives: field_directives.clone(),
                field: concrete_field,
                response_key: response_key.clone(),
                restriction,
            }, *selection_set);
        }
    }

    /// Adds `pending`, merging it into an existing entry for the same
    /// response key and concrete type. Entries that could both apply to one
    /// object must select the same field with the same arguments.
    fn emit(
        &mut self,
        ctx: &mut AssemblyContext<'schema, '_, '_>,
        mut pending: PendingField<'schema>,
        children: NodeRange,
    ) {
        let restriction_name = pending.restriction.map(|obj| obj.name().to_string());
        for ((key, other_restriction), other) in &self.pending {
            if key != &pending.response_key {
                continue;
            }
            let overlapping = other_restriction == &restriction_name
                || other_restriction.is_none()
                || restriction_name.is_none();
            if !overlapping {
                continue;
            }
            let conflict = if other.field.name() != pending.field.name() {
                Some(format!(
                    "`{}` selects both `{}` and `{}`; use different aliases",
                    pending.response_key,
                    other.field.name(),
                    pending.field.name(),
                ))
            } else if !other.arguments_match(&pending) {
                Some(format!(
                    "`{}` selects `{}` with different arguments",
                    pending.response_key,
                    pending.field.name(),
                ))
            } else {
                None
            };
            if let Some(text) = conflict {
                ctx.messages.push(
                    DocumentMessage::error(MessageCode::FieldConflict, text)
                        .at(other.def_location)
                        .at(pending.def_location),
                );
                return;
            }
        }

        let key = (pending.response_key.clone(), restriction_name);
        match self.pending.get_mut(&key) {
            Some(existing) => {
                if !children.is_empty() {
                    existing.child_selections.push(children);
                }
            },
            None => {
                if !children.is_empty() {
                    pending.child_selections.push(children);
                }
                self.pending.insert(key, pending);
            },
        }
    }

    /// Resolves overlaps between unrestricted entries and restricted entries
    /// sharing their response key. Conflicting overlaps never reach here.
    fn fold_restrictions(&mut self, ctx: &AssemblyContext<'schema, '_, '_>) {
        let mut covered: Vec<(String, Option<String>)> = vec![];
        let mut spread_keys: Vec<String> = vec![];
        for (entry_key, pending) in &self.pending {
            let (response_key, restriction) = entry_key;
            if restriction.is_none() || !self.pending.contains_key(&(response_key.clone(), None)) {
                continue;
            }
            if !pending.child_selections.is_empty() && !spread_keys.contains(response_key) {
                spread_keys.push(response_key.clone());
            }
            covered.push(entry_key.clone());
        }
        if covered.is_empty() {
            return;
        }

        let possible_types = ctx.schema.possible_types(self.parent_type.name());
        let mut old = std::mem::take(&mut self.pending);
        let order: Vec<(String, Option<String>)> = old.keys().cloned().collect();
        for entry_key in order {
            let (response_key, restriction) = &entry_key;
            if restriction.is_some() {
                // Covered entries are dropped or rebuilt where the unrestricted one sits.
                if covered.contains(&entry_key) {
                    continue;
                }
                if let Some(pending) = old.shift_remove(&entry_key) {
                    self.pending.insert(entry_key, pending);
                }
                continue;
            }
            let Some(pending) = old.shift_remove(&entry_key) else {
                continue;
            };
            if !spread_keys.contains(response_key) {
                self.pending.insert(entry_key, pending);
                continue;
            }
            for obj in &possible_types {
                let restricted_key = (response_key.clone(), Some(obj.name().to_string()));
                let mut spread = pending.clone();
                spread.restriction = Some(*obj);
                if let SelectedField::Declared(declared) = pending.field {
                    spread.field = SelectedField::Declared(obj.field(declared.name()).unwrap_or(declared));
                }
                if let Some(restricted) = old.shift_remove(&restricted_key) {
                    spread.child_selections.extend(restricted.child_selections);
                }
                self.pending.insert(restricted_key, spread);
            }
        }
    }

    fn finish(mut self, ctx: &mut AssemblyContext<'schema, '_, '_>) -> FieldSelectionSet<'schema> {
        self.fold_restrictions(ctx);
        let mut fields = Vec::with_capacity(self.pending.len());
        for pending in self.pending.into_values() {
            let selection_set = match pending.field.return_type(ctx.schema) {
                Some(child_type) if child_type.is_composite() && !pending.child_selections.is_empty() => {
                    SelectionSetBuilder::build(ctx, child_type, &pending.child_selections)
                },
                _ => FieldSelectionSet::default(),
            };
            fields.push(FieldSelection {
                alias: pending.alias,
                argument_locations: pending.arguments.locations,
                arguments: pending.arguments.values,
                def_location: pending.def_location,
                directives: pending.directives,
                field: pending.field,
                restriction: pending.restriction,
                selection_set,
            });
        }
        FieldSelectionSet { fields }
    }
}

fn lookup_field<'schema>(type_: &'schema GraphQLType, name: &str) -> Option<&'schema Field> {
    match type_ {
        GraphQLType::Object(obj) => obj.field(name),
        GraphQLType::Interface(iface) => iface.field(name),
        _ => None,
    }
}
