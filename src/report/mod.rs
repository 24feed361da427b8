//! Serialization of finished enumerations.
//!
//! Two formats are supported:
//! - **text**: the numbered listing followed by a `The total number of .. is ..` line,
//! - **json**: the request, counters and raw structures, for scripting.
//!
//! Invalid parameters never produce a partial report; the sink receives the fixed diagnostic of
//! [`StructureKind::invalid_input_message`] instead.

pub mod format;

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::subgroup::Subgroup;
use crate::core::table::OperationTable;
use crate::scenario::{Request, SearchError, SearchStats, StructureKind};

use self::format::{format_operation_table, format_subgroup};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Structures {
    Tables(Vec<OperationTable>),
    Subgroups(Vec<Subgroup>),
}

impl Structures {
    pub fn len(&self) -> usize {
        match self {
            Structures::Tables(t) => t.len(),
            Structures::Subgroups(s) => s.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A finished search: what was asked, what was found, and how much work it took.
#[derive(Debug, Clone, Serialize)]
pub struct Enumeration {
    pub request: Request,
    pub count: usize,
    pub stats: SearchStats,
    #[serde(flatten)]
    pub structures: Structures,
}

impl Enumeration {
    pub fn kind(&self) -> StructureKind {
        self.request.kind()
    }

    pub fn write_text<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let noun = self.kind().total_noun();
        match &self.structures {
            Structures::Tables(tables) => {
                for (i, table) in tables.iter().enumerate() {
                    writeln!(out, "Operation table number {}:", i + 1)?;
                    writeln!(out, "{}", format_operation_table(table))?;
                    writeln!(out)?;
                }
                writeln!(out, "The total number of {noun} is {}", self.count)
            }
            Structures::Subgroups(subgroups) => {
                for (i, subgroup) in subgroups.iter().enumerate() {
                    writeln!(out, "H{}: {}", i + 1, format_subgroup(subgroup))?;
                }
                writeln!(out)?;
                writeln!(out, "The total number of {noun} is {}.", self.count)
            }
        }
    }

    pub fn write_json<W: Write>(&self, out: &mut W) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut *out, self)?;
        writeln!(out)
    }

    pub fn write<W: Write>(&self, format: ReportFormat, out: &mut W) -> io::Result<()> {
        match format {
            ReportFormat::Text => self.write_text(out),
            ReportFormat::Json => self.write_json(out),
        }
    }

    pub fn to_text(&self) -> String {
        let mut buf = Vec::new();
        // Writing into a Vec cannot fail.
        let _ = self.write_text(&mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }
}

pub fn write_invalid_input<W: Write>(kind: StructureKind, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", kind.invalid_input_message())
}

/// Create (truncate) `path`, and any missing parent directories, and hand a buffered writer to `f`.
pub fn write_file(
    path: &Path,
    f: impl FnOnce(&mut BufWriter<File>) -> io::Result<()>,
) -> Result<(), SearchError> {
    let io_err = |error: io::Error| SearchError::Io {
        stage: "write_report",
        path: path.display().to_string(),
        error,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_err)?;
    }
    let file = File::create(path).map_err(io_err)?;
    let mut out = BufWriter::new(file);
    f(&mut out).map_err(io_err)?;
    out.flush().map_err(io_err)
}
