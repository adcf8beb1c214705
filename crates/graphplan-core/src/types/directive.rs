use crate::loc;
use crate::types::Parameter;
use graphplan_parser::syntax::OperationKind;
use indexmap::IndexMap;

/// The executable-document positions a [`Directive`] may be applied at.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum DirectiveLocation {
    Field,
    FragmentDefinition,
    FragmentSpread,
    InlineFragment,
    Mutation,
    Query,
    Subscription,
    VariableDefinition,
}
impl DirectiveLocation {
    pub fn for_operation(kind: OperationKind) -> Self {
        match kind {
            OperationKind::Query => Self::Query,
            OperationKind::Mutation => Self::Mutation,
            OperationKind::Subscription => Self::Subscription,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Field => "FIELD",
            Self::FragmentDefinition => "FRAGMENT_DEFINITION",
            Self::FragmentSpread => "FRAGMENT_SPREAD",
            Self::InlineFragment => "INLINE_FRAGMENT",
            Self::Mutation => "MUTATION",
            Self::Query => "QUERY",
            Self::Subscription => "SUBSCRIPTION",
            Self::VariableDefinition => "VARIABLE_DEFINITION",
        }
    }
}
impl std::fmt::Display for DirectiveLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Represents a directive definition: built-in (`@skip`, `@include`) or
/// registered through the [`SchemaBuilder`](crate::schema::SchemaBuilder).
#[derive(Clone, Debug, PartialEq)]
pub struct Directive {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) locations: Vec<DirectiveLocation>,
    pub(crate) name: String,
    pub(crate) parameters: IndexMap<String, Parameter>,
    pub(crate) repeatable: bool,
}
impl Directive {
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn is_allowed_at(&self, location: DirectiveLocation) -> bool {
        self.locations.contains(&location)
    }

    pub fn is_builtin(&self) -> bool {
        self.def_location == loc::SourceLocation::GraphQLBuiltIn
    }

    pub fn is_repeatable(&self) -> bool {
        self.repeatable
    }

    pub fn locations(&self) -> &[DirectiveLocation] {
        &self.locations
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn parameters(&self) -> &IndexMap<String, Parameter> {
        &self.parameters
    }
}
