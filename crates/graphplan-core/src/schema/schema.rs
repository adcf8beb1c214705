use crate::input::ScalarValueResolver;
use crate::schema::SchemaBuilder;
use crate::types::Directive;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::ObjectType;
use graphplan_parser::syntax::OperationKind;
use indexmap::IndexMap;
use std::collections::HashMap;
use std::sync::Arc;

/// Represents a fully built, typechecked, and immutable GraphQL schema.
///
/// A `Schema` is `Send + Sync` and is shared by reference across every
/// request that is planned against it.
#[derive(Debug)]
pub struct Schema {
    pub(crate) directives: IndexMap<String, Directive>,
    pub(crate) mutation_type: Option<String>,
    /// Composite type name -> names of the object types it may resolve to.
    pub(crate) possible_types: HashMap<String, Vec<String>>,
    pub(crate) query_type: String,
    pub(crate) scalar_resolvers: HashMap<String, Arc<dyn ScalarValueResolver>>,
    pub(crate) subscription_type: Option<String>,
    pub(crate) types: IndexMap<String, GraphQLType>,
}
impl Schema {
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    pub fn directive(&self, name: &str) -> Option<&Directive> {
        self.directives.get(name)
    }

    pub fn directives(&self) -> &IndexMap<String, Directive> {
        &self.directives
    }

    /// Look up a field declared on an object or interface type.
    pub fn field(&self, type_name: &str, field_name: &str) -> Option<&Field> {
        match self.types.get(type_name)? {
            GraphQLType::Object(obj) => obj.field(field_name),
            GraphQLType::Interface(iface) => iface.field(field_name),
            _ => None,
        }
    }

    /// Whether `object_name` is one of the concrete types `type_name` may
    /// resolve to.
    pub fn is_possible_type(&self, type_name: &str, object_name: &str) -> bool {
        self.possible_types
            .get(type_name)
            .is_some_and(|names| names.iter().any(|name| name == object_name))
    }

    pub fn mutation_type(&self) -> Option<&ObjectType> {
        self.mutation_type.as_deref().and_then(|name| self.object_type(name))
    }

    pub fn object_type(&self, name: &str) -> Option<&ObjectType> {
        self.types.get(name).and_then(GraphQLType::as_object)
    }

    /// The concrete object types a composite type may resolve to: the type
    /// itself for objects, implementors for interfaces, members for unions.
    /// Empty for leaf and input types.
    pub fn possible_types(&self, type_name: &str) -> Vec<&ObjectType> {
        self.possible_types
            .get(type_name)
            .map(|names| {
                names.iter()
                    .filter_map(|name| self.object_type(name))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn query_type(&self) -> Option<&ObjectType> {
        self.object_type(&self.query_type)
    }

    /// The root object type for operations of `kind`, if the schema defines
    /// one.
    pub fn root_type(&self, kind: OperationKind) -> Option<&ObjectType> {
        match kind {
            OperationKind::Query => self.query_type(),
            OperationKind::Mutation => self.mutation_type(),
            OperationKind::Subscription => self.subscription_type(),
        }
    }

    pub fn scalar_resolver(&self, type_name: &str) -> Option<&dyn ScalarValueResolver> {
        self.scalar_resolvers.get(type_name).map(|resolver| resolver.as_ref())
    }

    pub fn subscription_type(&self) -> Option<&ObjectType> {
        self.subscription_type.as_deref().and_then(|name| self.object_type(name))
    }

    pub fn type_named(&self, name: &str) -> Option<&GraphQLType> {
        self.types.get(name)
    }

    pub fn types(&self) -> &IndexMap<String, GraphQLType> {
        &self.types
    }
}
