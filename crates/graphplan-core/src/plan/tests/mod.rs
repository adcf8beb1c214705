
use crate::operation::QueryDocument;
use crate::plan::ExecutionPlan;
use crate::plan::ExecutionPlanGenerator;
use crate::plan::PlanConfig;
use crate::test::test_schema;

fn generate_plan(doc: &QueryDocument<'static>, operation_name: Option<&str>) -> ExecutionPlan<'static> {
    plan_with(doc, operation_name, PlanConfig::default())
}

fn plan_with(
    doc: &QueryDocument<'static>,
    operation_name: Option<&str>,
    config: PlanConfig,
) -> ExecutionPlan<'static> {
    ExecutionPlanGenerator::new(test_schema(), config).generate(doc, operation_name)
}
