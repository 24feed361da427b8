//! Batch jobs: several independent enumerations described by one JSON file.
//!
//! ```json
//! {
//!   "tasks": [
//!     { "kind": "semigroups", "n": 3, "output": "out/semigroups3.txt" },
//!     { "kind": "abelian-groups", "input": "InputA1.txt", "format": "json" },
//!     { "kind": "subgroups", "m": 2, "n": 2 }
//!   ]
//! }
//! ```
//!
//! Parameters come either inline (`n`, or `m` and `n`) or from the first line of an `input` text
//! file. Relative paths are resolved against the directory holding the job file. A task with
//! bad parameters gets the fixed diagnostic in its output file; the remaining tasks still run.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::report::{write_file, write_invalid_input, ReportFormat};
use crate::scenario::{Request, SearchError, StructureKind};
use crate::search::enumerate;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobFile {
    pub tasks: Vec<TaskSpec>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskSpec {
    pub kind: StructureKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub n: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub m: Option<i64>,
    /// Text file whose first line holds `n` (or `m n`). Takes precedence over inline values.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<PathBuf>,
    #[serde(default)]
    pub identity_at_zero: bool,
    /// Defaults to [`StructureKind::default_output`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
    #[serde(default)]
    pub format: ReportFormat,
}

impl TaskSpec {
    /// A task with inline parameters and default output settings.
    pub fn inline(request: Request) -> Self {
        let (n, m, identity_at_zero) = match request {
            Request::Semigroups { n } => (Some(n), None, false),
            Request::AbelianGroups {
                n,
                identity_at_zero,
            } => (Some(n), None, identity_at_zero),
            Request::Subgroups { m, n } => (Some(n), Some(m), false),
        };
        Self {
            kind: request.kind(),
            n,
            m,
            input: None,
            identity_at_zero,
            output: None,
            format: ReportFormat::default(),
        }
    }

    pub fn output_path(&self, base_dir: &Path) -> PathBuf {
        let out = self
            .output
            .clone()
            .unwrap_or_else(|| PathBuf::from(self.kind.default_output()));
        base_dir.join(out)
    }

    /// Turn the task into a [`Request`], reading the input file if one is given.
    ///
    /// The parameters are not range-checked here; [`enumerate`] does that.
    pub fn resolve(&self, base_dir: &Path) -> Result<Request, SearchError> {
        if let Some(input) = &self.input {
            let path = base_dir.join(input);
            let text = fs::read_to_string(&path).map_err(|error| SearchError::Io {
                stage: "read_input",
                path: path.display().to_string(),
                error,
            })?;
            return Request::parse(
                self.kind,
                &path.display().to_string(),
                &text,
                self.identity_at_zero,
            );
        }

        let missing = |what: &str| SearchError::Parse {
            source_name: format!("{} task", self.kind),
            reason: format!("missing `{what}` (give it inline or via `input`)"),
        };
        match self.kind {
            StructureKind::Semigroups => Ok(Request::Semigroups {
                n: self.n.ok_or_else(|| missing("n"))?,
            }),
            StructureKind::AbelianGroups => Ok(Request::AbelianGroups {
                n: self.n.ok_or_else(|| missing("n"))?,
                identity_at_zero: self.identity_at_zero,
            }),
            StructureKind::Subgroups => Ok(Request::Subgroups {
                m: self.m.ok_or_else(|| missing("m"))?,
                n: self.n.ok_or_else(|| missing("n"))?,
            }),
        }
    }
}

#[derive(Debug)]
pub enum TaskStatus {
    /// The report was written.
    Completed { count: usize },
    /// Bad parameters; the diagnostic was written instead of a report.
    Rejected { error: SearchError },
    /// The search or the output write failed.
    Failed { error: SearchError },
}

#[derive(Debug)]
pub struct TaskOutcome {
    pub kind: StructureKind,
    pub output: PathBuf,
    pub status: TaskStatus,
}

impl TaskOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self.status, TaskStatus::Completed { .. })
    }
}

pub fn load_job_file(path: &Path) -> Result<JobFile, SearchError> {
    let bytes = fs::read(path).map_err(|error| SearchError::Io {
        stage: "read_job_file",
        path: path.display().to_string(),
        error,
    })?;
    serde_json::from_slice(&bytes).map_err(|e| SearchError::Parse {
        source_name: path.display().to_string(),
        reason: e.to_string(),
    })
}

fn reject(kind: StructureKind, output: PathBuf, error: SearchError) -> TaskOutcome {
    warn!(%kind, output = %output.display(), %error, "task rejected");
    let status = match write_file(&output, |out| write_invalid_input(kind, out)) {
        Ok(()) => TaskStatus::Rejected { error },
        Err(write_error) => TaskStatus::Failed { error: write_error },
    };
    TaskOutcome {
        kind,
        output,
        status,
    }
}

/// Run one task and write its output. Never panics and never returns early on bad input.
pub fn run_task(task: &TaskSpec, base_dir: &Path) -> TaskOutcome {
    let kind = task.kind;
    let output = task.output_path(base_dir);

    let request = match task.resolve(base_dir) {
        Ok(r) => r,
        Err(error) => return reject(kind, output, error),
    };

    let enumeration = match enumerate(&request) {
        Ok(e) => e,
        Err(error) if error.is_invalid_input() => return reject(kind, output, error),
        Err(error) => {
            return TaskOutcome {
                kind,
                output,
                status: TaskStatus::Failed { error },
            }
        }
    };

    let status = match write_file(&output, |out| enumeration.write(task.format, out)) {
        Ok(()) => {
            info!(%kind, count = enumeration.count, output = %output.display(), "report written");
            TaskStatus::Completed {
                count: enumeration.count,
            }
        }
        Err(error) => TaskStatus::Failed { error },
    };

    TaskOutcome {
        kind,
        output,
        status,
    }
}

/// Run every task in order. A failing task does not stop the batch.
pub fn run_batch(job: &JobFile, base_dir: &Path) -> Vec<TaskOutcome> {
    job.tasks
        .iter()
        .map(|task| run_task(task, base_dir))
        .collect()
}
