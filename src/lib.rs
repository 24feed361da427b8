//! Exhaustive enumeration of small algebraic structures.
//!
//! - associative binary operations (semigroups) on `{0, .., n-1}`
//! - Abelian group operation tables on `{0, .., n-1}`
//! - subgroups of `(Zm × Zn, +)`
//!
//! Results are written as plain-text reports (or JSON) by [`report`]; several searches can be
//! described in one batch file, see [`jobs`].

pub mod core;
pub mod jobs;
pub mod report;
pub mod rules;
pub mod scenario;
pub mod search;

pub use crate::search::abelian::{generate_abelian_groups, generate_abelian_groups_with, AbelianOptions};
pub use crate::search::enumerate;
pub use crate::search::semigroups::generate_semigroups;
pub use crate::search::subgroups::find_subgroups;
