use crate::loc;
use crate::schema::Schema;
use crate::types::NamedGraphQLTypeRef;
use crate::types::ObjectType;
use indexmap::IndexMap;

/// Represents a
/// [union type](https://spec.graphql.org/October2021/#sec-Unions) defined
/// within some [`Schema`].
#[derive(Clone, Debug, PartialEq)]
pub struct UnionType {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) name: String,
    pub(crate) members: IndexMap<String, NamedGraphQLTypeRef>,
}
impl UnionType {
    /// The [`SourceLocation`](loc::SourceLocation) indicating where this
    /// [`UnionType`] was defined.
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn has_member(&self, type_name: &str) -> bool {
        self.members.contains_key(type_name)
    }

    /// An ordered list of the names of each member of this union.
    ///
    /// The order of this `Vec` retains the same ordering as the order of
    /// members defined on the union type.
    pub fn member_type_names(&self) -> Vec<&str> {
        self.members.keys()
            .map(|type_name| type_name.as_str())
            .collect()
    }

    /// An ordered list of the [`ObjectType`]s that are members of this union.
    pub fn member_types<'schema>(
        &self,
        schema: &'schema Schema,
    ) -> Vec<&'schema ObjectType> {
        self.members.values()
            .filter_map(|type_ref| type_ref.deref(schema).ok())
            .filter_map(|type_| type_.as_object())
            .collect()
    }

    /// The name of this [`UnionType`].
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
