//! Implementation of the `aoc-scaffold generate` command.

use crate::cli::GenerateArgs;
use crate::config::{Config, load_env};
use crate::context::Context;
use crate::error::{Result, ScaffoldError};
use crate::fetch::PuzzleClient;
use crate::generator::build_actions;
use crate::pipeline::{Pipeline, PipelineReport, StepStatus};
use std::io::{self, BufRead, Write};
use std::path::Path;
use tracing::{debug, info};

/// Question asked when `--day` is not given.
const DAY_PROMPT: &str = "What Day of the puzzle to initialize?";

/// Execute the `generate` command.
///
/// 1. Load `scaffold.yaml` and pick the generator
/// 2. Load the env file (`year`, `session`)
/// 3. Get the day from `--day` or stdin and build the context
/// 4. Run the generator's actions and print one line per action
pub async fn cmd_generate(root: &Path, args: GenerateArgs) -> Result<()> {
    let config = Config::load_for_project(root)?;
    let mut generator = config.generator(&args.generator)?.clone();
    if args.allow_duplicate_entry
        && let Some(manifest) = generator.manifest.as_mut()
    {
        manifest.deduplicate = false;
    }

    let env_path = match &args.env_file {
        Some(path) => root.join(path),
        None => root.join(&config.env_file),
    };
    let env = load_env(&env_path)?;

    let raw_day = match args.day {
        Some(day) => day,
        None => {
            let stdin = io::stdin();
            prompt_line(&mut stdin.lock(), &mut io::stdout(), DAY_PROMPT)?
        }
    };
    let ctx = Context::build(&raw_day, &env)?;
    debug!(keys = ?ctx.keys().collect::<Vec<_>>(), "context built");

    let client = PuzzleClient::new(config.puzzle_base_url.as_str())?;
    let pipeline = Pipeline::new(root, build_actions(&generator, &config.puzzle_base_url), &client)
        .with_overwrite(args.force);

    info!(
        generator = %args.generator,
        day = ctx.day(),
        actions = pipeline.actions().len(),
        writers = pipeline.actions().iter().filter(|a| a.writes_files()).count(),
        base_url = client.base_url(),
        root = %pipeline.root().display(),
        "running generator"
    );

    let report = pipeline.run(ctx).await;
    print_report(&report);
    if report.is_success() {
        info!(completed = report.messages().len(), day = report.context.day(), "generator finished");
    }
    report.into_result().map(|_| ())
}

/// Ask `question` on `output` and read one line of `input`.
fn prompt_line<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> Result<String> {
    write!(output, "? {} ", question)
        .and_then(|()| output.flush())
        .map_err(|e| ScaffoldError::Io(format!("failed to write prompt: {}", e)))?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .map_err(|e| ScaffoldError::Io(format!("failed to read answer: {}", e)))?;

    Ok(line.trim().to_string())
}

fn print_report(report: &PipelineReport) {
    for line in report_lines(report) {
        println!("{}", line);
    }
}

/// One line per step. A failed step shows only its label; `main` prints the error.
fn report_lines(report: &PipelineReport) -> Vec<String> {
    report
        .steps
        .iter()
        .map(|step| match step.status {
            StepStatus::Done => format!("✔  {}", step.message),
            StepStatus::Skipped => format!("↷  {}", step.message),
            StepStatus::Failed => format!("✖  {} failed", step.label),
            StepStatus::NotRun => format!("-  {} (not run)", step.label),
        })
        .collect()
}
