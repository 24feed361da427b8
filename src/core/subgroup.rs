use serde::{Deserialize, Serialize};

use crate::core::pair::{Pair, PairSet};
use crate::rules::closure::is_closed_subset;
use crate::scenario::Moduli;

/// A subset of `Zm × Zn` in canonical form: sorted, without duplicates.
///
/// Two subsets that are equal as sets compare (and hash) equal.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<Pair>", into = "Vec<Pair>")]
pub struct Subgroup {
    elements: Vec<Pair>,
}

impl Subgroup {
    pub fn from_elements(mut elements: Vec<Pair>) -> Self {
        elements.sort_unstable();
        elements.dedup();
        Self { elements }
    }

    #[inline]
    pub fn elements(&self) -> &[Pair] {
        &self.elements
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn contains(&self, p: Pair) -> bool {
        self.elements.binary_search(&p).is_ok()
    }

    pub fn iter(&self) -> impl Iterator<Item = Pair> + '_ {
        self.elements.iter().copied()
    }

    /// Closure under addition mod `(m, n)`.
    pub fn is_closed(&self, moduli: Moduli) -> bool {
        if self
            .elements
            .iter()
            .any(|p| p.x >= moduli.m() || p.y >= moduli.n())
        {
            return false;
        }
        is_closed_subset(&PairSet::from_pairs(moduli, self.iter()))
    }
}

impl From<Vec<Pair>> for Subgroup {
    fn from(elements: Vec<Pair>) -> Self {
        Subgroup::from_elements(elements)
    }
}

impl From<Subgroup> for Vec<Pair> {
    fn from(s: Subgroup) -> Self {
        s.elements
    }
}
