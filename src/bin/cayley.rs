use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use cayley_search::jobs::{load_job_file, run_batch, run_task, TaskOutcome, TaskSpec, TaskStatus};
use cayley_search::report::ReportFormat;
use cayley_search::scenario::StructureKind;
use clap::{ArgAction, Args, Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Enumerate semigroups, Abelian groups and subgroups of Zm × Zn.
#[derive(Debug, Parser)]
#[command(name = "cayley", version, about)]
struct Cli {
    /// More log output (-v: debug, -vv: trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Args)]
struct OutputArgs {
    /// Report file [default depends on the subcommand].
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    format: ReportFormat,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// All associative operations on {0, .., n-1}.
    Semigroups {
        #[arg(allow_negative_numbers = true, required_unless_present = "input")]
        n: Option<i64>,
        /// Read `n` from the first line of this file instead.
        #[arg(long, conflicts_with = "n")]
        input: Option<PathBuf>,
        #[command(flatten)]
        out: OutputArgs,
    },
    /// All Abelian group tables on {0, .., n-1}.
    AbelianGroups {
        #[arg(allow_negative_numbers = true, required_unless_present = "input")]
        n: Option<i64>,
        #[arg(long, conflicts_with = "n")]
        input: Option<PathBuf>,
        /// Only tables whose identity element is 0.
        #[arg(long)]
        identity_at_zero: bool,
        #[command(flatten)]
        out: OutputArgs,
    },
    /// All subgroups of Zm × Zn.
    Subgroups {
        #[arg(allow_negative_numbers = true, requires = "n", required_unless_present = "input")]
        m: Option<i64>,
        #[arg(allow_negative_numbers = true)]
        n: Option<i64>,
        /// Read `m n` from the first line of this file instead.
        #[arg(long, conflicts_with_all = ["m", "n"])]
        input: Option<PathBuf>,
        #[command(flatten)]
        out: OutputArgs,
    },
    /// Run every task of a JSON job file.
    Batch { job: PathBuf },
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}

fn task(
    kind: StructureKind,
    m: Option<i64>,
    n: Option<i64>,
    input: Option<PathBuf>,
    identity_at_zero: bool,
    out: OutputArgs,
) -> TaskSpec {
    TaskSpec {
        kind,
        n,
        m,
        input,
        identity_at_zero,
        output: out.output,
        format: out.format,
    }
}

/// Print a summary line (or the diagnostic) and map the outcome to an exit code.
fn summarize(outcome: TaskOutcome) -> Result<ExitCode> {
    let kind = outcome.kind;
    let path = outcome.output.display();
    match outcome.status {
        TaskStatus::Completed { count } => {
            println!("{kind}: {count} found, report written to {path}");
            Ok(ExitCode::SUCCESS)
        }
        TaskStatus::Rejected { error } => {
            debug!(%error, "invalid input");
            eprintln!("{}", kind.invalid_input_message());
            Ok(ExitCode::from(2))
        }
        TaskStatus::Failed { error } => {
            Err(error).with_context(|| format!("{kind} task could not write {path}"))
        }
    }
}

fn batch(job: &Path) -> Result<ExitCode> {
    let file = load_job_file(job).with_context(|| format!("loading job file {}", job.display()))?;
    let base_dir = job.parent().unwrap_or_else(|| Path::new(""));

    let outcomes = run_batch(&file, base_dir);
    let mut all_ok = true;
    for (i, outcome) in outcomes.iter().enumerate() {
        let path = outcome.output.display();
        match &outcome.status {
            TaskStatus::Completed { count } => {
                println!("task {}: {}: {count} found -> {path}", i + 1, outcome.kind)
            }
            TaskStatus::Rejected { error } => {
                all_ok = false;
                println!("task {}: {}: rejected ({error}) -> {path}", i + 1, outcome.kind)
            }
            TaskStatus::Failed { error } => {
                all_ok = false;
                println!("task {}: {}: failed: {error}", i + 1, outcome.kind)
            }
        }
    }

    Ok(if all_ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn run(cli: Cli) -> Result<ExitCode> {
    let here = Path::new("");
    match cli.command {
        Command::Semigroups { n, input, out } => summarize(run_task(
            &task(StructureKind::Semigroups, None, n, input, false, out),
            here,
        )),
        Command::AbelianGroups {
            n,
            input,
            identity_at_zero,
            out,
        } => summarize(run_task(
            &task(
                StructureKind::AbelianGroups,
                None,
                n,
                input,
                identity_at_zero,
                out,
            ),
            here,
        )),
        Command::Subgroups { m, n, input, out } => summarize(run_task(
            &task(StructureKind::Subgroups, m, n, input, false, out),
            here,
        )),
        Command::Batch { job } => batch(&job),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
