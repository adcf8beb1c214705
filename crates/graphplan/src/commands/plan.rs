use crate::output_utils;
use crate::schema_config::ConfigFile;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use anyhow::Context;
use graphplan_core::input::VariableValue;
use graphplan_core::input::VariableValues;
use graphplan_core::operation::QueryDocument;
use graphplan_core::plan::ExecutionPlanGenerator;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct PlanCmd {
    #[arg(
        help="Name of the operation to plan. Only needed when the document \
             defines more than one.",
        long,
        short='o',
    )]
    operation: Option<String>,

    #[arg(
        help="TOML file describing the schema and planning limits.",
        long,
        short='s',
    )]
    schema: PathBuf,

    #[arg(
        help="Bind a variable, e.g. `--var first=10` or \
             `--var 'filter={ published: true }'`. Values use GraphQL \
             constant syntax.",
        long="var",
        value_parser=parse_variable,
    )]
    variables: Vec<(String, VariableValue)>,

    #[arg(
        help="Path to the executable GraphQL document.",
        name="FILE",
    )]
    file: PathBuf,
}

#[inherent::inherent]
impl RunnableCommand for PlanCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        match self.render() {
            Ok(result) => result,
            Err(err) => err.into(),
        }
    }
}
impl PlanCmd {
    fn render(&self) -> anyhow::Result<CommandResult> {
        let config = ConfigFile::load(&self.schema)?;
        let schema = config.schema.build()?;
        let text = std::fs::read_to_string(&self.file)
            .with_context(|| format!("failed to read {}", self.file.display()))?;

        let document = QueryDocument::parse(&schema, &text);
        let generator = ExecutionPlanGenerator::new(&schema, config.plan_config());
        let plan = generator.generate(&document, self.operation.as_deref());

        let mut out = plan.to_string();
        let messages = if self.variables.is_empty() {
            plan.messages().clone()
        } else {
            let values: VariableValues = self.variables.iter().cloned().collect();
            let bound = plan.bind_variables(&values);
            for (name, value) in &values {
                out.push_str(&format!("  ${name} = {value}\n"));
            }
            bound.messages().clone()
        };
        out.push_str(&output_utils::format_messages(&self.file, &messages));

        let result = if messages.is_executable() && plan.is_executable() {
            CommandResult::stdout(format_args!("{out}{} Plan is executable.", output_utils::GREEN_CHECK))
        } else {
            CommandResult::stdout(format_args!("{out}{} Plan is not executable.", output_utils::RED_X))
                .with_failure()
        };
        Ok(result)
    }
}

/// Parses `name=literal`, with an optional leading `$` on the name.
pub(crate) fn parse_variable(arg: &str) -> anyhow::Result<(String, VariableValue)> {
    let (name, literal) = arg
        .split_once('=')
        .with_context(|| format!("expected `name=value`, got `{arg}`"))?;
    let name = name.trim().trim_start_matches('$');
    if name.is_empty() {
        anyhow::bail!("variable name is empty in `{arg}`");
    }
    let value = VariableValue::from_const_literal(literal.trim())
        .with_context(|| format!("invalid value for `${name}`"))?;
    Ok((name.to_string(), value))
}
