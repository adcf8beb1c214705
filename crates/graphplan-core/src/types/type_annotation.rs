use crate::loc;
use crate::schema::Schema;
use crate::types::ListTypeAnnotation;
use crate::types::NamedGraphQLTypeRef;
use crate::types::NamedTypeAnnotation;
use graphplan_parser::syntax::NodeIndex;
use graphplan_parser::syntax::SyntaxNodeKind;
use graphplan_parser::syntax::SyntaxTree;
use graphplan_parser::GraphQLParseError;

/// Represents the annotated type for a [`Field`](crate::types::Field),
/// [`Variable`](crate::operation::Variable),
/// [`InputField`](crate::types::InputField) or
/// [`Parameter`](crate::types::Parameter).
#[derive(Clone, Debug, PartialEq)]
pub enum TypeAnnotation {
    List(ListTypeAnnotation),
    Named(NamedTypeAnnotation),
}
impl TypeAnnotation {
    /// Unwrap the [`ListTypeAnnotation`] if this annotation is one.
    pub fn as_list_annotation(&self) -> Option<&ListTypeAnnotation> {
        if let Self::List(annot) = self {
            Some(annot)
        } else {
            None
        }
    }

    /// Unwrap the [`NamedTypeAnnotation`] if this annotation is one.
    pub fn as_named_annotation(&self) -> Option<&NamedTypeAnnotation> {
        if let Self::Named(annot) = self {
            Some(annot)
        } else {
            None
        }
    }

    /// The same annotation with its outermost level made nullable.
    pub fn as_nullable(&self) -> Self {
        let mut annot = self.clone();
        match &mut annot {
            Self::List(list_annot) => list_annot.nullable = true,
            Self::Named(named_annot) => named_annot.nullable = true,
        }
        annot
    }

    /// Parses standalone type-annotation text such as `[User!]!`.
    pub fn parse(
        text: &str,
        location: loc::SourceLocation,
    ) -> Result<Self, GraphQLParseError> {
        let tree = graphplan_parser::parse_type_annotation(text)?;
        Ok(Self::from_syntax(&tree, tree.root_index(), &location))
    }

    /// Builds an annotation from a `NamedType`/`ListType` node.
    pub(crate) fn from_syntax(
        tree: &SyntaxTree<'_>,
        index: NodeIndex,
        location: &loc::SourceLocation,
    ) -> Self {
        match &tree.node(index).kind {
            SyntaxNodeKind::ListType { inner, nullable } =>
                Self::List(ListTypeAnnotation {
                    inner_type_ref: Box::new(Self::from_syntax(tree, *inner, location)),
                    nullable: *nullable,
                    ref_location: location.to_owned(),
                }),

            SyntaxNodeKind::NamedType { name, nullable } =>
                Self::Named(NamedTypeAnnotation {
                    nullable: *nullable,
                    type_ref: NamedGraphQLTypeRef::new(
                        tree.text(*name),
                        location.clone(),
                    ),
                }),

            // The parser only produces type nodes at type positions.
            _ => Self::Named(NamedTypeAnnotation {
                nullable: true,
                type_ref: NamedGraphQLTypeRef::new(
                    tree.node_text(index),
                    location.clone(),
                ),
            }),
        }
    }

    /// Recursively unwrap this [`TypeAnnotation`] and return the inner-most
    /// [`NamedTypeAnnotation`] from it.
    pub fn innermost_named_type_annotation(&self) -> &NamedTypeAnnotation {
        match self {
            TypeAnnotation::List(ListTypeAnnotation { inner_type_ref, .. })
                => inner_type_ref.innermost_named_type_annotation(),
            TypeAnnotation::Named(named_annot)
                => named_annot,
        }
    }

    /// A value of this type may be passed where `target` is expected:
    /// identical structure and type names, where a non-null level may flow
    /// into a nullable one but not the reverse.
    pub fn is_assignable_to(&self, target: &Self) -> bool {
        if !target.nullable() && self.nullable() {
            return false;
        }
        match (self, target) {
            (Self::List(self_list), Self::List(target_list))
                => self_list.inner_type_ref.is_assignable_to(&target_list.inner_type_ref),
            (Self::Named(self_named), Self::Named(target_named))
                => self_named.graphql_type_name() == target_named.graphql_type_name(),
            _ => false,
        }
    }

    /// Check if two type annotations are definitionally equal.
    ///
    /// Two type annotations are equivalent if they have:
    /// - Same type structure (Named vs List)
    /// - Same nullability at each level
    /// - Same innermost type name
    ///
    /// Source location is intentionally ignored for semantic comparison.
    pub fn is_equivalent_to(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::List(self_list), Self::List(other_list))
                => self_list.is_equivalent_to(other_list),
            (Self::Named(self_named), Self::Named(other_named))
                => self_named.is_equivalent_to(other_named),
            _ => false, // List vs Named mismatch
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    /// Covariant output-type subtyping, used to check that an object's field
    /// satisfies the interface field it implements.
    pub fn is_subtype_of(&self, schema: &Schema, other: &Self) -> bool {
        if !other.nullable() && self.nullable() {
            return false;
        }
        match (self, other) {
            (Self::List(self_inner), Self::List(other_inner))
                => self_inner.inner_type_ref.is_subtype_of(schema, &other_inner.inner_type_ref),
            (Self::List(_), Self::Named(_))
                => false,
            (Self::Named(self_named), Self::Named(other_named))
                => self_named.is_subtype_of(schema, other_named),
            (Self::Named(_), Self::List(_))
                => false,
        }
    }

    /// Indicates if this [`TypeAnnotation`] is [nullable or
    /// non-nullable](https://spec.graphql.org/October2021/#sec-Non-Null).
    pub fn nullable(&self) -> bool {
        match self {
            TypeAnnotation::List(ListTypeAnnotation { nullable, .. }) => *nullable,
            TypeAnnotation::Named(NamedTypeAnnotation { nullable, .. }) => *nullable,
        }
    }

    /// The [`SourceLocation`](loc::SourceLocation) indicating where this
    /// [`TypeAnnotation`] was written.
    pub fn ref_location(&self) -> &loc::SourceLocation {
        match self {
            Self::List(annot) => annot.ref_location(),
            Self::Named(annot) => annot.ref_location(),
        }
    }
}
impl std::convert::From<ListTypeAnnotation> for TypeAnnotation {
    fn from(value: ListTypeAnnotation) -> Self {
        Self::List(value)
    }
}
impl std::convert::From<NamedTypeAnnotation> for TypeAnnotation {
    fn from(value: NamedTypeAnnotation) -> Self {
        Self::Named(value)
    }
}
impl std::fmt::Display for TypeAnnotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::List(list_annot) => write!(
                f,
                "[{}]{}",
                list_annot.inner_type_annotation(),
                if list_annot.nullable() { "" } else { "!" },
            ),

            Self::Named(named_annot) => write!(
                f,
                "{}{}",
                named_annot.graphql_type_name(),
                if named_annot.nullable() { "" } else { "!" },
            ),
        }
    }
}
