//! Scenario layer: validated search parameters and the error type shared by every engine.
//!
//! A search is described by a [`Request`]:
//! - the kind of structure to enumerate ([`StructureKind`])
//! - its raw size parameters, validated into an [`Order`] or [`Moduli`] before any search starts
//!
//! Raw parameters are kept as signed integers so that non-positive input coming from files or
//! the command line can be carried to the engine entry points and rejected there uniformly.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The size `n` of the element set `{0, .., n-1}`. Always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Order(usize);

impl Order {
    pub fn new(n: usize) -> Result<Self, SearchError> {
        if n < 1 {
            return Err(SearchError::InvalidOrder { value: n as i64 });
        }
        Ok(Self(n))
    }

    #[inline]
    pub fn get(self) -> usize {
        self.0
    }
}

impl TryFrom<i64> for Order {
    type Error = SearchError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value < 1 {
            return Err(SearchError::InvalidOrder { value });
        }
        let n = usize::try_from(value).map_err(|_| SearchError::InvalidOrder { value })?;
        Order::new(n)
    }
}

/// The moduli `(m, n)` of `Zm × Zn`. Both are at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Moduli {
    m: usize,
    n: usize,
}

impl Moduli {
    pub fn new(m: usize, n: usize) -> Result<Self, SearchError> {
        if m < 1 || n < 1 || m.checked_mul(n).is_none() {
            return Err(SearchError::InvalidModuli {
                m: m as i64,
                n: n as i64,
            });
        }
        Ok(Self { m, n })
    }

    pub fn from_signed(m: i64, n: i64) -> Result<Self, SearchError> {
        let invalid = || SearchError::InvalidModuli { m, n };
        if m < 1 || n < 1 {
            return Err(invalid());
        }
        let m_u = usize::try_from(m).map_err(|_| invalid())?;
        let n_u = usize::try_from(n).map_err(|_| invalid())?;
        Moduli::new(m_u, n_u).map_err(|_| invalid())
    }

    #[inline]
    pub fn m(self) -> usize {
        self.m
    }

    #[inline]
    pub fn n(self) -> usize {
        self.n
    }

    /// `m · n`, the order of `Zm × Zn`.
    #[inline]
    pub fn size(self) -> usize {
        self.m * self.n
    }
}

/// Which family of structures a search enumerates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StructureKind {
    Semigroups,
    AbelianGroups,
    Subgroups,
}

impl StructureKind {
    /// Plural noun used in the trailing count line of a report.
    pub fn total_noun(self) -> &'static str {
        match self {
            StructureKind::Semigroups => "associative operations",
            StructureKind::AbelianGroups => "Abelian Groups",
            StructureKind::Subgroups => "subgroups",
        }
    }

    /// Fixed diagnostic written in place of a report when the parameters are invalid.
    pub fn invalid_input_message(self) -> &'static str {
        match self {
            StructureKind::Semigroups | StructureKind::AbelianGroups => {
                "n must be a non-zero natural number or file couldn't be opened! Try again!"
            }
            StructureKind::Subgroups => {
                "m and n must be a non-zero natural number or file couldn't be opened! Try again!"
            }
        }
    }

    /// Default output path of the command-line driver.
    pub fn default_output(self) -> &'static str {
        match self {
            StructureKind::Semigroups => "semigroups_output.txt",
            StructureKind::AbelianGroups => "abeliangroups_output.txt",
            StructureKind::Subgroups => "subgroups_output.txt",
        }
    }
}

impl fmt::Display for StructureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StructureKind::Semigroups => "semigroups",
            StructureKind::AbelianGroups => "abelian-groups",
            StructureKind::Subgroups => "subgroups",
        };
        f.write_str(s)
    }
}

/// A single enumeration task with unvalidated parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Request {
    Semigroups {
        n: i64,
    },
    AbelianGroups {
        n: i64,
        /// Only enumerate tables whose identity element is `0`.
        #[serde(default)]
        identity_at_zero: bool,
    },
    Subgroups {
        m: i64,
        n: i64,
    },
}

impl Request {
    pub fn kind(&self) -> StructureKind {
        match self {
            Request::Semigroups { .. } => StructureKind::Semigroups,
            Request::AbelianGroups { .. } => StructureKind::AbelianGroups,
            Request::Subgroups { .. } => StructureKind::Subgroups,
        }
    }

    /// Build a request of `kind` from the first line of an input text (`n`, or `m n`).
    pub fn parse(
        kind: StructureKind,
        source: &str,
        text: &str,
        identity_at_zero: bool,
    ) -> Result<Self, SearchError> {
        match kind {
            StructureKind::Semigroups => Ok(Request::Semigroups {
                n: parse_order_line(source, text)?,
            }),
            StructureKind::AbelianGroups => Ok(Request::AbelianGroups {
                n: parse_order_line(source, text)?,
                identity_at_zero,
            }),
            StructureKind::Subgroups => {
                let (m, n) = parse_moduli_line(source, text)?;
                Ok(Request::Subgroups { m, n })
            }
        }
    }

    /// Check the parameters without running anything.
    pub fn validate(&self) -> Result<(), SearchError> {
        match *self {
            Request::Semigroups { n } | Request::AbelianGroups { n, .. } => {
                Order::try_from(n).map(|_| ())
            }
            Request::Subgroups { m, n } => Moduli::from_signed(m, n).map(|_| ()),
        }
    }
}

fn first_line(text: &str) -> &str {
    text.lines().next().unwrap_or("").trim()
}

/// Parse `n` from the first line of `text`. Range checks are left to [`Order`].
pub fn parse_order_line(source: &str, text: &str) -> Result<i64, SearchError> {
    let line = first_line(text);
    line.parse::<i64>().map_err(|e| SearchError::Parse {
        source_name: source.to_string(),
        reason: format!("expected an integer, found {line:?}: {e}"),
    })
}

/// Parse `m n` (whitespace separated) from the first line of `text`.
pub fn parse_moduli_line(source: &str, text: &str) -> Result<(i64, i64), SearchError> {
    let line = first_line(text);
    let parse_err = |reason: String| SearchError::Parse {
        source_name: source.to_string(),
        reason,
    };

    let fields: Vec<&str> = line.split_whitespace().collect();
    let [m, n] = fields.as_slice() else {
        return Err(parse_err(format!(
            "expected two integers `m n`, found {line:?}"
        )));
    };
    let m = m
        .parse::<i64>()
        .map_err(|e| parse_err(format!("invalid m {m:?}: {e}")))?;
    let n = n
        .parse::<i64>()
        .map_err(|e| parse_err(format!("invalid n {n:?}: {e}")))?;
    Ok((m, n))
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Counters collected during one top-level search.
pub struct SearchStats {
    /// Recursive search calls (including the root).
    pub nodes: u64,
    /// Candidate rows / combinations examined.
    pub candidates: u64,
    /// Candidates rejected by a consistency predicate.
    pub pruned: u64,
    /// Candidates skipped before any predicate ran (subgroup search only).
    pub skipped: u64,
    /// Structures recorded.
    pub solutions: u64,
}

#[derive(Debug, Error)]
/// Structured errors returned by search routines and their drivers.
pub enum SearchError {
    #[error("order must be a positive integer, got {value}")]
    InvalidOrder { value: i64 },

    #[error("moduli must be positive integers, got m={m}, n={n}")]
    InvalidModuli { m: i64, n: i64 },

    #[error("invalid operation table: {reason}")]
    InvalidTable { reason: String },

    #[error("cannot parse {source_name}: {reason}")]
    Parse { source_name: String, reason: String },

    /// A `try_reserve` allocation failed for a large structure.
    #[error(
        "allocation failed at {stage} for {structure}; \
         stats(nodes={}, candidates={}, pruned={}, solutions={})",
        .stats.nodes, .stats.candidates, .stats.pruned, .stats.solutions
    )]
    AllocationFailed {
        stage: &'static str,
        structure: &'static str,
        stats: SearchStats,
    },

    #[error("io error at {stage} for {path}: {error}")]
    Io {
        stage: &'static str,
        path: String,
        #[source]
        error: std::io::Error,
    },
}

impl SearchError {
    /// Errors caused by bad parameters (as opposed to I/O or resource failures).
    ///
    /// Drivers report these with [`StructureKind::invalid_input_message`].
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            SearchError::InvalidOrder { .. }
                | SearchError::InvalidModuli { .. }
                | SearchError::Parse { .. }
        )
    }
}
