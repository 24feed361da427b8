//! Exhaustive backtracking engines.
//!
//! - [`semigroups`]: associative tables, rows drawn from all `n^n` tuples.
//! - [`abelian`]: Abelian group tables, rows drawn from the `n!` permutations.
//! - [`subgroups`]: closed subsets of `Zm × Zn`, deduplicated as sets.
//!
//! Every engine owns its working buffer and result list for the duration of one top-level call;
//! nothing is shared between calls.

pub mod abelian;
pub mod candidates;
pub mod semigroups;
pub mod stats;
pub mod subgroups;
pub(crate) mod tables;

use crate::report::{Enumeration, Structures};
use crate::scenario::{Moduli, Order, Request, SearchError, SearchStats};

use self::abelian::{generate_abelian_groups_with, AbelianOptions};
use self::semigroups::generate_semigroups_with_stats;
use self::subgroups::find_subgroups_with_stats;

/// Results of one top-level search together with its counters.
#[derive(Debug, Clone)]
pub struct SearchOutcome<T> {
    pub structures: Vec<T>,
    pub stats: SearchStats,
}

/// Validate `request` and run the matching engine.
pub fn enumerate(request: &Request) -> Result<Enumeration, SearchError> {
    let (structures, stats) = match *request {
        Request::Semigroups { n } => {
            let order = Order::try_from(n)?;
            let out = generate_semigroups_with_stats(order.get())?;
            (Structures::Tables(out.structures), out.stats)
        }
        Request::AbelianGroups {
            n,
            identity_at_zero,
        } => {
            let order = Order::try_from(n)?;
            let out = generate_abelian_groups_with(order.get(), AbelianOptions { identity_at_zero })?;
            (Structures::Tables(out.structures), out.stats)
        }
        Request::Subgroups { m, n } => {
            let moduli = Moduli::from_signed(m, n)?;
            let out = find_subgroups_with_stats(moduli.m(), moduli.n())?;
            (Structures::Subgroups(out.structures), out.stats)
        }
    };

    Ok(Enumeration {
        request: *request,
        count: structures.len(),
        stats,
        structures,
    })
}
