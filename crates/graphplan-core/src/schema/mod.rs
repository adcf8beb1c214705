//! The read-only schema lookup API shared by every request, and the
//! programmatic [`SchemaBuilder`] that produces it.

mod schema;
mod schema_build_error;
mod schema_builder;
mod type_builders;

pub use schema::Schema;
pub use schema_build_error::SchemaBuildError;
pub use schema_builder::SchemaBuilder;
pub use type_builders::DirectiveBuilder;
pub use type_builders::FieldBuilder;
pub use type_builders::InputObjectTypeBuilder;
pub use type_builders::InterfaceTypeBuilder;
pub use type_builders::ObjectTypeBuilder;

#[cfg(test)]
mod tests;
