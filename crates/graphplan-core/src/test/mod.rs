//! Fixtures shared by the unit tests of every module.

use crate::input::VariableValue;
use crate::input::VariableValues;
use crate::operation::QueryDocument;
use crate::schema::DirectiveBuilder;
use crate::schema::FieldBuilder;
use crate::schema::InputObjectTypeBuilder;
use crate::schema::InterfaceTypeBuilder;
use crate::schema::ObjectTypeBuilder;
use crate::schema::Schema;
use crate::schema::SchemaBuilder;
use crate::types::DirectiveLocation;
use std::sync::LazyLock;

static SCHEMA: LazyLock<Schema> = LazyLock::new(|| {
    test_schema_builder().build().expect("the test schema builds")
});

/// A small blogging schema covering every kind of type.
pub(crate) fn test_schema() -> &'static Schema {
    &SCHEMA
}

pub(crate) fn test_schema_builder() -> SchemaBuilder {
    SchemaBuilder::new()
        .scalar("DateTime")
        .enum_type("Role", ["ADMIN", "EDITOR", "READER"])
        .interface(
            InterfaceTypeBuilder::new("Node")
                .field(FieldBuilder::new("id", "ID!")),
        )
        .object(
            ObjectTypeBuilder::new("User")
                .implements("Node")
                .field(FieldBuilder::new("id", "ID!"))
                .field(FieldBuilder::new("name", "String!"))
                .field(FieldBuilder::new("email", "String"))
                .field(FieldBuilder::new("role", "Role!"))
                .field(FieldBuilder::new("posts", "[Post!]!").arg_with_default("first", "Int", "10"))
                .field(FieldBuilder::new("friends", "[User!]!").arg("first", "Int")),
        )
        .object(
            ObjectTypeBuilder::new("Post")
                .implements("Node")
                .field(FieldBuilder::new("id", "ID!"))
                .field(FieldBuilder::new("title", "String!"))
                .field(FieldBuilder::new("publishedAt", "DateTime"))
                .field(FieldBuilder::new("author", "User!"))
                .field(FieldBuilder::new("comments", "[Comment!]!").arg("first", "Int")),
        )
        .object(
            ObjectTypeBuilder::new("Comment")
                .implements("Node")
                .field(FieldBuilder::new("id", "ID!"))
                .field(FieldBuilder::new("text", "String!"))
                .field(FieldBuilder::new("author", "User!")),
        )
        .union("SearchResult", ["User", "Post"])
        .input_object(
            InputObjectTypeBuilder::new("Range")
                .field("min", "Int")
                .field("max", "Int"),
        )
        .input_object(
            InputObjectTypeBuilder::new("PostFilter")
                .field("authorId", "ID")
                .field("titleContains", "String")
                .field_with_default("published", "Boolean", "true")
                .field("commentCount", "Range"),
        )
        .input_object(
            InputObjectTypeBuilder::new("CreatePostInput")
                .field("title", "String!")
                .field("tags", "[String!]"),
        )
        .object(
            ObjectTypeBuilder::new("Query")
                .field(FieldBuilder::new("me", "User"))
                .field(FieldBuilder::new("user", "User").arg("id", "ID!"))
                .field(FieldBuilder::new("node", "Node").arg("id", "ID!"))
                .field(
                    FieldBuilder::new("search", "[SearchResult!]!")
                        .arg("term", "String!")
                        .arg("first", "Int"),
                )
                .field(
                    FieldBuilder::new("posts", "[Post!]!")
                        .arg("filter", "PostFilter")
                        .arg_with_default("first", "Int", "20"),
                )
                .field(FieldBuilder::new("usersByRole", "[User!]!").arg("role", "Role!"))
                .field(FieldBuilder::new("admin", "Admin!").virtual_field())
                .field(FieldBuilder::new("a", "A"))
                .field(FieldBuilder::new("expensive", "String").cost(50.0)),
        )
        .object(
            ObjectTypeBuilder::new("Admin")
                .field(FieldBuilder::new("userCount", "Int!")),
        )
        .object(
            ObjectTypeBuilder::new("A")
                .field(FieldBuilder::new("b", "C").arg("x", "Int")),
        )
        .object(
            ObjectTypeBuilder::new("C")
                .field(FieldBuilder::new("c", "String")),
        )
        .object(
            ObjectTypeBuilder::new("Mutation")
                .field(FieldBuilder::new("createPost", "Post!").arg("input", "CreatePostInput!")),
        )
        .object(
            ObjectTypeBuilder::new("Subscription")
                .field(FieldBuilder::new("postAdded", "Post!"))
                .field(FieldBuilder::new("commentAdded", "Comment!")),
        )
        .directive(
            DirectiveBuilder::new("cached")
                .arg("ttl", "Int")
                .location(DirectiveLocation::Field)
                .location(DirectiveLocation::Query),
        )
}

/// Parses and assembles `text` against [`test_schema()`].
pub(crate) fn document(text: &str) -> QueryDocument<'static> {
    QueryDocument::parse(test_schema(), text)
}

/// Like [`document()`], but fails the test on any error message.
pub(crate) fn valid_document(text: &str) -> QueryDocument<'static> {
    let doc = document(text);
    assert!(
        doc.is_executable(),
        "expected a valid document, got:\n{}",
        doc.messages().iter().map(|m| m.to_string()).collect::<Vec<_>>().join("\n"),
    );
    doc
}

pub(crate) fn variables<const N: usize>(values: [(&str, VariableValue); N]) -> VariableValues {
    values.into_iter().map(|(name, value)| (name.to_string(), value)).collect()
}
