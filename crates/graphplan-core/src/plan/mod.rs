//! Execution plans: one [`FieldInvocationContext`] tree per operation, with
//! every argument either resolved or deferred until variables are bound.

mod bound_execution_plan;
mod directive_invocation_context;
mod execution_plan;
mod execution_plan_generator;
mod field_invocation_context;
mod field_resolver;
mod plan_config;

pub use bound_execution_plan::BoundDirectiveInvocation;
pub use bound_execution_plan::BoundExecutionPlan;
pub use bound_execution_plan::BoundFieldInvocation;
pub use directive_invocation_context::DirectiveInvocationContext;
pub use execution_plan::ExecutionPlan;
pub use execution_plan_generator::ExecutionPlanGenerator;
pub use field_invocation_context::FieldInvocationContext;
pub use field_resolver::FieldResolver;
pub use field_resolver::InternalResolver;
pub use plan_config::PlanConfig;

#[cfg(test)]
mod tests;
