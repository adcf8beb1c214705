use crate::output_utils;
use crate::schema_config::ConfigFile;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use graphplan_core::operation::QueryDocument;
use graphplan_core::plan::ExecutionPlanGenerator;
use std::collections::HashSet;
use std::path::PathBuf;
use walkdir::WalkDir;

#[derive(Debug, clap::Args)]
pub(crate) struct ValidateCmd {
    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "gql".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,

    #[arg(
        help="TOML file describing the schema and planning limits.",
        long,
        short='s',
    )]
    schema: PathBuf,

    #[arg(
        help="Paths to one or more executable GraphQL documents or \
             directories containing them.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}
impl ValidateCmd {
    fn collect_files(&self) -> anyhow::Result<(Vec<PathBuf>, usize)> {
        // Normalize the set of file extensions to filter with
        let graphql_file_exts: HashSet<String> =
            self.graphql_file_exts.iter()
                .map(|ext| ext.trim_start_matches('.').to_owned())
                .collect();

        log::debug!(
            "Scanning {} input paths...",
            self.file_or_dir_paths.len(),
        );
        let mut num_skipped = 0;
        let mut file_paths = vec![];
        for path in &self.file_or_dir_paths {
            for entry in WalkDir::new(path.as_path()).follow_links(true) {
                let entry = entry?;
                let path = entry.path();
                if !entry.file_type().is_file() {
                    log::trace!("Skipping non-file: {path:#?}.");
                    continue;
                }
                let matches_ext = path
                    .extension()
                    .is_some_and(|ext| graphql_file_exts.contains(ext.to_string_lossy().as_ref()));
                if matches_ext {
                    log::trace!("Found file at {path:#?}.");
                    file_paths.push(path.to_path_buf());
                } else {
                    num_skipped += 1;
                }
            }
        }

        // A single file argument is validated whatever its extension.
        if file_paths.is_empty()
            && self.file_or_dir_paths.len() == 1
            && let Some(first_arg_path) = self.file_or_dir_paths.first()
            && first_arg_path.is_file() {
            log::warn!(
                "Proceeding to validate {first_arg_path:#?} even though it \
                doesn't match any of the --graphql-file-exts.",
            );
            file_paths.push(first_arg_path.clone());
            num_skipped = 0;
        }
        Ok((file_paths, num_skipped))
    }
}

#[inherent::inherent]
impl RunnableCommand for ValidateCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let config = match ConfigFile::load(&self.schema) {
            Ok(config) => config,
            Err(err) => return err.into(),
        };
        let schema = match config.schema.build() {
            Ok(schema) => schema,
            Err(err) => return err.into(),
        };
        let (file_paths, num_skipped) = match self.collect_files() {
            Ok(found) => found,
            Err(err) => return err.into(),
        };
        log::debug!(
            "Found {} GraphQL files to be validated.",
            file_paths.len(),
        );

        let generator = ExecutionPlanGenerator::new(&schema, config.plan_config());
        let mut report = String::new();
        let mut num_errors = 0;
        let mut num_operations = 0;
        for path in &file_paths {
            let text = match std::fs::read_to_string(path) {
                Ok(text) => text,
                Err(err) => {
                    return CommandResult::stderr(format_args!(
                        "{} Failed to read {}: {err}",
                        output_utils::RED_X,
                        path.display(),
                    ));
                },
            };
            let document = QueryDocument::parse(&schema, &text);
            let mut messages = document.messages().clone();
            for operation in document.operations().values() {
                num_operations += 1;
                let plan = generator.generate(&document, operation.name());
                messages.extend(plan.messages().iter().cloned());
            }
            num_errors += messages.errors().count();
            report.push_str(&output_utils::format_messages(path, &messages));
        }

        if num_errors > 0 {
            return CommandResult::stderr(format_args!(
                "{report}{} {num_errors} GraphQL validation error(s).",
                output_utils::RED_X,
            ));
        }

        CommandResult::stdout(format_args!(
            concat!(
                "{}{} All GraphQL validated successfully:\n",
                "  * Analyzed {} files.\n",
                "  * Skipped {} non-graphql files.\n",
                "  * Validated {} operations.",
            ),
            report,
            output_utils::GREEN_CHECK,
            file_paths.len(),
            num_skipped,
            num_operations,
        ))
    }
}
