use crate::loc::DocumentPosition;
use crate::message::DocumentMessage;
use crate::message::DocumentMessages;
use crate::message::MessageCode;
use crate::schema::Schema;
use crate::types::GraphQLType;
use graphplan_parser::syntax::NodeRange;
use graphplan_parser::syntax::SyntaxNodeKind;
use graphplan_parser::syntax::SyntaxTree;
use indexmap::IndexMap;
use std::collections::HashSet;

/// A fragment definition as written, before it is inlined anywhere.
#[derive(Debug)]
pub(super) struct FragmentDefinition<'schema> {
    pub(super) def_location: DocumentPosition,
    pub(super) directives: NodeRange,
    pub(super) name: String,
    pub(super) selection_set: NodeRange,
    /// `None` when the type condition names an unknown or non-composite
    /// type; spreads of such fragments contribute nothing.
    pub(super) type_condition: Option<&'schema GraphQLType>,
}

/// Every fragment defined by a document, keyed by name.
///
/// Forward references are allowed, so the registry is collected before any
/// operation is assembled.
#[derive(Debug)]
pub(super) struct FragmentRegistry<'schema> {
    cyclic: HashSet<String>,
    definitions: IndexMap<String, FragmentDefinition<'schema>>,
}
impl<'schema> FragmentRegistry<'schema> {
    pub(super) fn collect(
        schema: &'schema Schema,
        tree: &SyntaxTree<'_>,
        messages: &mut DocumentMessages,
    ) -> Self {
        let mut definitions = IndexMap::new();
        for (_, node) in tree.definitions() {
            let SyntaxNodeKind::Fragment {
                name,
                type_condition,
                directives,
                selection_set,
            } = &node.kind else {
                continue;
            };
            let def_location = DocumentPosition::from_span(&node.span);
            let name = tree.text(*name);
            if definitions.contains_key(name) {
                messages.push(
                    DocumentMessage::error(
                        MessageCode::DuplicateFragmentName,
                        format!("fragment `{name}` is defined more than once"),
                    ).at(def_location),
                );
                continue;
            }

            let condition_name = tree.text(*type_condition);
            let type_condition = match schema.type_named(condition_name) {
                Some(type_) if type_.is_composite() => Some(type_),
                Some(_) => {
                    messages.push(
                        DocumentMessage::error(
                            MessageCode::InvalidTypeCondition,
                            format!(
                                "fragment `{name}` cannot condition on non-composite type \
                                `{condition_name}`",
                            ),
                        ).at(def_location),
                    );
                    None
                },
                None => {
                    messages.push(
                        DocumentMessage::error(
                            MessageCode::UnknownType,
                            format!("unknown type `{condition_name}` in fragment `{name}`"),
                        ).at(def_location),
                    );
                    None
                },
            };

            definitions.insert(name.to_string(), FragmentDefinition {
                def_location,
                directives: *directives,
                name: name.to_string(),
                selection_set: *selection_set,
                type_condition,
            });
        }

        let mut registry = Self {
            cyclic: HashSet::new(),
            definitions,
        };
        registry.validate_no_cycles(tree, messages);
        log::trace!(
            "collected {} fragment definition(s), {} in cycles",
            registry.definitions.len(),
            registry.cyclic.len(),
        );
        registry
    }

    pub(super) fn definitions(&self) -> impl Iterator<Item = &FragmentDefinition<'schema>> {
        self.definitions.values()
    }

    pub(super) fn get(&self, name: &str) -> Option<&FragmentDefinition<'schema>> {
        self.definitions.get(name)
    }

    /// Spreads of a fragment that takes part in a cycle are never inlined.
    pub(super) fn is_cyclic(&self, name: &str) -> bool {
        self.cyclic.contains(name)
    }

    fn validate_no_cycles(&mut self, tree: &SyntaxTree<'_>, messages: &mut DocumentMessages) {
        let spreads: IndexMap<&str, Vec<String>> = self.definitions
            .iter()
            .map(|(name, def)| {
                let mut names = vec![];
                collect_spread_names(tree, def.selection_set, &mut names);
                (name.as_str(), names)
            })
            .collect();

        let mut seen_normalized = HashSet::new();
        let mut cycles = vec![];
        for fragment_name in spreads.keys() {
            let mut path = vec![];
            let mut visiting = HashSet::new();
            check_fragment_cycles(
                &spreads,
                fragment_name,
                &mut path,
                &mut visiting,
                &mut cycles,
                &mut seen_normalized,
            );
        }

        for cycle in cycles {
            let locations: Vec<DocumentPosition> = cycle[..cycle.len() - 1]
                .iter()
                .filter_map(|name| self.definitions.get(name))
                .map(|def| def.def_location)
                .collect();
            let mut message = DocumentMessage::error(
                MessageCode::FragmentCycle,
                format!("fragment spreads form a cycle: {}", cycle.join(" -> ")),
            );
            for location in locations {
                message = message.at(location);
            }
            messages.push(message);
            self.cyclic.extend(cycle);
        }
    }
}

fn collect_spread_names(tree: &SyntaxTree<'_>, selections: NodeRange, names: &mut Vec<String>) {
    for (_, node) in tree.children(selections) {
        match &node.kind {
            SyntaxNodeKind::FragmentSpread { name, .. } => {
                let name = tree.text(*name);
                if !names.iter().any(|existing| existing == name) {
                    names.push(name.to_string());
                }
            },
            SyntaxNodeKind::Field { selection_set, .. }
            | SyntaxNodeKind::InlineFragment { selection_set, .. } => {
                collect_spread_names(tree, *selection_set, names);
            },
            _ => (),
        }
    }
}

fn check_fragment_cycles(
    spreads: &IndexMap<&str, Vec<String>>,
    fragment_name: &str,
    path: &mut Vec<String>,
    visiting: &mut HashSet<String>,
    cycles: &mut Vec<Vec<String>>,
    seen_normalized: &mut HashSet<Vec<String>>,
) {
    if visiting.contains(fragment_name) {
        path.push(fragment_name.to_string());
        // Only the looping tail of the path is part of the cycle.
        let start = path.iter().position(|name| name == fragment_name).unwrap_or(0);
        let cycle = path[start..].to_vec();
        if seen_normalized.insert(normalize_cycle(&cycle)) {
            cycles.push(cycle);
        }
        path.pop();
        return;
    }

    // Unknown fragments are reported where they are spread.
    let Some(spread_names) = spreads.get(fragment_name) else {
        return;
    };

    path.push(fragment_name.to_string());
    visiting.insert(fragment_name.to_string());
    for spread_name in spread_names {
        check_fragment_cycles(spreads, spread_name, path, visiting, cycles, seen_normalized);
    }
    path.pop();
    visiting.remove(fragment_name);
}

/// Rotates a closed cycle (`[B, C, A, B]`) to start at its smallest name
/// (`[A, B, C, A]`) so phase-shifted discoveries compare equal.
fn normalize_cycle(cycle: &[String]) -> Vec<String> {
    if cycle.is_empty() {
        return vec![];
    }
    let open = &cycle[..cycle.len() - 1];
    let min_idx = open
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| a.cmp(b))
        .map(|(idx, _)| idx)
        .unwrap_or(0);

    let mut normalized = Vec::with_capacity(cycle.len());
    normalized.extend_from_slice(&open[min_idx..]);
    normalized.extend_from_slice(&open[..min_idx]);
    if let Some(first) = normalized.first().cloned() {
        normalized.push(first);
    }
    normalized
}
