//! Schema-bound executable documents.
//!
//! [`QueryDocumentBuilder`] binds a parsed syntax tree to a
//! [`Schema`](crate::schema::Schema): fields, arguments and directives are
//! resolved to their schema definitions, fragment spreads and inline
//! fragments are inlined, and same-keyed field selections are merged.

mod assembly_context;
mod directive_annotation;
mod field_selection;
mod field_selection_set;
mod fragment;
mod fragment_registry;
mod operation;
mod query_document;
mod query_document_builder;
mod selection_set_builder;
mod supplied_value;
mod variable;

pub use directive_annotation::DirectiveAnnotation;
pub use field_selection::FieldSelection;
pub use field_selection::SelectedField;
pub use field_selection::TYPENAME_FIELD;
pub use field_selection_set::FieldSelectionSet;
pub use fragment::Fragment;
pub use operation::Operation;
pub use query_document::QueryDocument;
pub use query_document_builder::QueryDocumentBuilder;
pub use supplied_value::SuppliedValue;
pub use variable::NamedVariableRef;
pub use variable::Variable;

pub(crate) use assembly_context::directive_owner;
pub(crate) use assembly_context::field_owner;
pub(crate) use assembly_context::invalid_argument_message;

#[cfg(test)]
mod tests;
