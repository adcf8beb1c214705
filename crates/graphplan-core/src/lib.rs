//! Schema-bound processing of GraphQL executable documents.
//!
//! [`QueryDocument::parse()`](operation::QueryDocument::parse) binds a parsed
//! [`SyntaxTree`](graphplan_parser::syntax::SyntaxTree) against a
//! [`Schema`](schema::Schema), inlining fragments and merging field
//! selections. [`OperationMetrics`](analysis::OperationMetrics) measure depth
//! and complexity of each operation, and an
//! [`ExecutionPlanGenerator`](plan::ExecutionPlanGenerator) turns one
//! operation into an [`ExecutionPlan`](plan::ExecutionPlan) whose arguments are
//! either resolved or deferred until runtime variables are bound.
//!
//! ```
//! use graphplan_core::operation::QueryDocument;
//! use graphplan_core::plan::ExecutionPlanGenerator;
//! use graphplan_core::plan::PlanConfig;
//! use graphplan_core::schema::FieldBuilder;
//! use graphplan_core::schema::ObjectTypeBuilder;
//! use graphplan_core::schema::SchemaBuilder;
//!
//! let schema = SchemaBuilder::new()
//!     .object(
//!         ObjectTypeBuilder::new("Query")
//!             .field(FieldBuilder::new("hello", "String").arg("name", "String")),
//!     )
//!     .build()
//!     .unwrap();
//!
//! let document = QueryDocument::parse(&schema, r#"{ hello(name: "you") }"#);
//! assert!(document.is_executable());
//!
//! let generator = ExecutionPlanGenerator::new(&schema, PlanConfig::default());
//! let plan = generator.generate(&document, None);
//! assert!(plan.is_executable());
//! assert_eq!(plan.roots().len(), 1);
//! ```

pub mod analysis;
pub mod input;
pub mod loc;
pub mod message;
pub mod named_ref;
pub mod operation;
pub mod plan;
pub mod schema;
pub mod types;

#[cfg(test)]
mod test;
