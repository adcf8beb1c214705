use crate::loc;
use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::types::NamedGraphQLTypeRef;

#[derive(Clone, Debug, PartialEq)]
pub struct NamedTypeAnnotation {
    pub(crate) nullable: bool,
    pub(crate) type_ref: NamedGraphQLTypeRef,
}

impl NamedTypeAnnotation {
    /// `None` when the annotation names a type the schema does not define.
    pub fn graphql_type<'schema>(
        &self,
        schema: &'schema Schema,
    ) -> Option<&'schema GraphQLType> {
        self.type_ref.deref(schema).ok()
    }

    pub fn graphql_type_name(&self) -> &str {
        self.type_ref.name()
    }

    /// Check if two named type annotations are definitionally equal.
    ///
    /// Two named type annotations are equivalent if they have:
    /// - Same type name
    /// - Same nullability
    ///
    /// Source location is intentionally ignored for semantic comparison.
    pub fn is_equivalent_to(&self, other: &Self) -> bool {
        self.nullable == other.nullable
            && self.type_ref.name() == other.type_ref.name()
    }

    /// Name-level subtyping: identical types, an object or interface
    /// implementing an interface, or an object that is a member of a union.
    /// Nullability is checked by [`TypeAnnotation::is_subtype_of()`](crate::types::TypeAnnotation::is_subtype_of).
    pub fn is_subtype_of(
        &self,
        schema: &Schema,
        other: &Self,
    ) -> bool {
        if self.type_ref.name() == other.type_ref.name() {
            return true;
        }
        let (Some(self_type), Some(other_type)) =
            (self.graphql_type(schema), other.graphql_type(schema))
        else {
            return false;
        };

        match (self_type, other_type) {
            (GraphQLType::Interface(self_iface),
             GraphQLType::Interface(other_iface))
                => self_iface.implements_interface(other_iface),
            (GraphQLType::Object(self_obj),
             GraphQLType::Interface(other_iface))
                => self_obj.implements_interface(other_iface),
            (GraphQLType::Object(self_obj),
             GraphQLType::Union(other_union))
                => other_union.has_member(self_obj.name()),
            (_, _) => false,
        }
    }

    pub fn nullable(&self) -> bool {
        self.nullable
    }

    pub fn ref_location(&self) -> &loc::SourceLocation {
        self.type_ref.ref_location()
    }
}
