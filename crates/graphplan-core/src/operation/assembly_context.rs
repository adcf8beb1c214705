use crate::input::InvalidArgumentError;
use crate::input::ValueCoercer;
use crate::loc::DocumentPosition;
use crate::message::DocumentMessage;
use crate::message::DocumentMessages;
use crate::message::MessageCode;
use crate::operation::DirectiveAnnotation;
use crate::operation::NamedVariableRef;
use crate::operation::SuppliedValue;
use crate::operation::Variable;
use crate::operation::fragment_registry::FragmentRegistry;
use crate::schema::Schema;
use crate::types::Directive;
use crate::types::DirectiveLocation;
use crate::types::Field;
use crate::types::Parameter;
use crate::types::TypeAnnotation;
use graphplan_parser::syntax::NodeIndex;
use graphplan_parser::syntax::NodeRange;
use graphplan_parser::syntax::SyntaxNodeKind;
use graphplan_parser::syntax::SyntaxTree;
use indexmap::IndexMap;
use std::collections::HashSet;

/// How a field or directive is named in argument messages.
pub(crate) fn field_owner(field: &Field) -> String {
    format!("field `{}.{}`", field.parent_type_name(), field.name())
}

pub(crate) fn directive_owner(directive: &Directive) -> String {
    format!("directive `@{}`", directive.name())
}

/// The message for a value that failed to resolve against its argument.
///
/// Assembly and plan generation both report through here so the same failure
/// is deduplicated rather than listed twice.
pub(crate) fn invalid_argument_message(
    owner: &str,
    argument_name: &str,
    error: &InvalidArgumentError,
    location: Option<DocumentPosition>,
) -> DocumentMessage {
    let code = match error {
        InvalidArgumentError::MissingRequiredVariable { .. } => MessageCode::MissingRequiredVariable,
        _ => MessageCode::InvalidArgumentValue,
    };
    DocumentMessage::error(
        code,
        format!("invalid value for argument `{argument_name}` of {owner}: {error}"),
    ).at_optional(location)
}

#[derive(Clone, Debug, Default)]
pub(super) struct BoundArguments {
    pub(super) locations: IndexMap<String, DocumentPosition>,
    pub(super) values: IndexMap<String, SuppliedValue>,
}

/// Per-operation (or per-fragment) state threaded through assembly.
pub(super) struct AssemblyContext<'schema, 'a, 'src> {
    pub(super) fragments: &'a FragmentRegistry<'schema>,
    pub(super) messages: DocumentMessages,
    pub(super) schema: &'schema Schema,
    pub(super) tree: &'a SyntaxTree<'src>,
    pub(super) used_fragments: HashSet<String>,
    pub(super) used_variables: HashSet<String>,
    /// `None` while assembling a fragment on its own, where variable usages
    /// cannot be checked.
    pub(super) variables: Option<&'a IndexMap<String, Variable>>,
    pub(super) visiting_fragments: Vec<String>,
}
impl<'schema, 'a, 'src> AssemblyContext<'schema, 'a, 'src> {
    pub(super) fn new(
        schema: &'schema Schema,
        tree: &'a SyntaxTree<'src>,
        fragments: &'a FragmentRegistry<'schema>,
        variables: Option<&'a IndexMap<String, Variable>>,
    ) -> Self {
        Self {
            fragments,
            messages: DocumentMessages::new(),
            schema,
            tree,
            used_fragments: HashSet::new(),
            used_variables: HashSet::new(),
            variables,
            visiting_fragments: vec![],
        }
    }

    pub(super) fn error(
        &mut self,
        code: MessageCode,
        text: impl Into<String>,
        location: DocumentPosition,
    ) {
        self.messages.push(DocumentMessage::error(code, text).at(location));
    }

    pub(super) fn position(&self, index: NodeIndex) -> DocumentPosition {
        DocumentPosition::from_span(&self.tree.node(index).span)
    }

    /// Binds written arguments to `parameters`. Unknown and repeated names
    /// are reported and dropped; missing required parameters are reported
    /// at `owner_location`.
    pub(super) fn bind_arguments(
        &mut self,
        owner: &str,
        parameters: &'schema IndexMap<String, Parameter>,
        arguments: NodeRange,
        owner_location: DocumentPosition,
    ) -> BoundArguments {
        let tree = self.tree;
        let mut bound = BoundArguments::default();
        for (_, node) in tree.children(arguments) {
            let SyntaxNodeKind::Argument { name, value } = &node.kind else {
                continue;
            };
            let location = DocumentPosition::from_span(&node.span);
            let name = tree.text(*name);
            let Some(param) = parameters.get(name) else {
                self.error(
                    MessageCode::UnknownArgument,
                    format!("unknown argument `{name}` on {owner}"),
                    location,
                );
                continue;
            };
            if bound.values.contains_key(name) {
                self.error(
                    MessageCode::DuplicateArgument,
                    format!("argument `{name}` of {owner} is supplied more than once"),
                    location,
                );
                continue;
            }

            let value = self.supplied_value(*value);
            self.check_argument_value(owner, param, &value, location);
            bound.locations.insert(name.to_string(), location);
            bound.values.insert(name.to_string(), value);
        }

        for (param_name, param) in parameters {
            if param.is_required() && !bound.values.contains_key(param_name) {
                self.error(
                    MessageCode::MissingRequiredArgument,
                    format!(
                        "{owner} requires argument `{param_name}: {}`",
                        param.type_annotation(),
                    ),
                    owner_location,
                );
            }
        }
        bound
    }

    /// Binds the directives of one annotated item.
    pub(super) fn bind_directives(
        &mut self,
        directives: NodeRange,
        location: DirectiveLocation,
    ) -> Vec<DirectiveAnnotation<'schema>> {
        let tree = self.tree;
        let mut annotations: Vec<DirectiveAnnotation<'schema>> = vec![];
        for (_, node) in tree.children(directives) {
            let SyntaxNodeKind::Directive { name, arguments } = &node.kind else {
                continue;
            };
            let def_location = DocumentPosition::from_span(&node.span);
            let name = tree.text(*name);
            let Some(directive) = self.schema.directive(name) else {
                self.error(
                    MessageCode::UnknownDirective,
                    format!("unknown directive `@{name}`"),
                    def_location,
                );
                continue;
            };
            if !directive.is_allowed_at(location) {
                self.error(
                    MessageCode::MisplacedDirective,
                    format!("directive `@{name}` may not be used on {location}"),
                    def_location,
                );
                continue;
            }
            if !directive.is_repeatable() && annotations.iter().any(|annot| annot.name() == name) {
                self.error(
                    MessageCode::DuplicateDirective,
                    format!("directive `@{name}` may only be used once on {location}"),
                    def_location,
                );
                continue;
            }

            let bound = self.bind_arguments(
                &directive_owner(directive),
                directive.parameters(),
                *arguments,
                def_location,
            );
            annotations.push(DirectiveAnnotation {
                argument_locations: bound.locations,
                arguments: bound.values,
                def_location,
                directive,
            });
        }
        annotations
    }

    /// Converts a value node, reporting repeated input-object keys.
    pub(super) fn supplied_value(&mut self, index: NodeIndex) -> SuppliedValue {
        let mut duplicate_keys = vec![];
        let value = SuppliedValue::from_syntax(self.tree, index, &mut duplicate_keys);
        for (key, location) in duplicate_keys {
            self.error(
                MessageCode::DuplicateInputField,
                format!("input field `{key}` is supplied more than once"),
                location,
            );
        }
        value
    }

    /// Literal values are resolved right away; values holding variables are
    /// checked for compatible variable usage instead.
    fn check_argument_value(
        &mut self,
        owner: &str,
        param: &Parameter,
        value: &SuppliedValue,
        location: DocumentPosition,
    ) {
        if value.contains_variable() {
            self.check_variable_usages(
                value,
                param.type_annotation(),
                param.default_value().is_some(),
            );
            return;
        }
        if let Err(err) = ValueCoercer::new(self.schema).coerce_supplied(value, param.type_annotation()) {
            self.messages.push(invalid_argument_message(owner, param.name(), &err, Some(location)));
        }
    }

    fn check_variable_usages(
        &mut self,
        value: &SuppliedValue,
        expected: &TypeAnnotation,
        location_has_default: bool,
    ) {
        match value {
            SuppliedValue::Scalar(_) => (),
            SuppliedValue::Variable(var_ref) => {
                self.check_variable_usage(var_ref, expected, location_has_default);
            },
            SuppliedValue::List(items) => {
                let item_type = match expected {
                    TypeAnnotation::List(list_annot) => list_annot.inner_type_annotation(),
                    TypeAnnotation::Named(_) => expected,
                };
                for item in items {
                    self.check_variable_usages(item, item_type, false);
                }
            },
            SuppliedValue::Object(fields) => {
                let TypeAnnotation::Named(named) = expected else {
                    return;
                };
                let Some(input_type) = named.graphql_type(self.schema).and_then(|t| t.as_input_object()) else {
                    return;
                };
                for (key, field_value) in fields {
                    if let Some(input_field) = input_type.field(key) {
                        self.check_variable_usages(
                            field_value,
                            input_field.type_annotation(),
                            input_field.default_value().is_some(),
                        );
                    }
                }
            },
        }
    }

    /// A nullable variable may feed a non-null position only when the
    /// variable or the position has a default.
    fn check_variable_usage(
        &mut self,
        var_ref: &NamedVariableRef,
        expected: &TypeAnnotation,
        location_has_default: bool,
    ) {
        let Some(variables) = self.variables else {
            return;
        };
        let location = var_ref.ref_location().document_position().unwrap_or_default();
        self.used_variables.insert(var_ref.name().to_string());
        let Ok(variable) = var_ref.deref(variables) else {
            self.error(
                MessageCode::UndeclaredVariable,
                format!("variable `${}` is not declared by the operation", var_ref.name()),
                location,
            );
            return;
        };

        let var_type = variable.type_annotation();
        let assignable = var_type.is_assignable_to(expected)
            || ((variable.default_value().is_some() || location_has_default)
                && var_type.is_assignable_to(&expected.as_nullable()));
        if !assignable {
            self.error(
                MessageCode::VariableTypeMismatch,
                format!(
                    "variable `${}` of type `{var_type}` cannot be used where `{expected}` is \
                    expected",
                    variable.name(),
                ),
                location,
            );
        }
    }
}
