mod plan;
mod validate;

use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use plan::PlanCmd;
use validate::ValidateCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "graphplan")]
pub(crate) enum CommandEnum {
    /// Assemble and analyze every operation in a set of documents.
    Validate(Box<ValidateCmd>),

    /// Print the execution plan for one operation.
    Plan(Box<PlanCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Plan(cmd) => cmd.run(cli).await,
            Self::Validate(cmd) => cmd.run(cli).await,
        }
    }
}

#[cfg(test)]
mod tests;
