use std::fmt;

use serde::{Deserialize, Serialize};

use crate::scenario::Moduli;

/// An element `(x, y)` of `Zm × Zn`.
///
/// Ordering is lexicographic, which is also the natural product order `range(m) × range(n)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "(usize, usize)", into = "(usize, usize)")]
pub struct Pair {
    pub x: usize,
    pub y: usize,
}

impl Pair {
    pub const ZERO: Pair = Pair { x: 0, y: 0 };

    #[inline]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Componentwise addition mod `(m, n)`.
    #[inline]
    pub fn add_mod(self, rhs: Pair, moduli: Moduli) -> Pair {
        Pair::new((self.x + rhs.x) % moduli.m(), (self.y + rhs.y) % moduli.n())
    }

    /// Position of this element in the product order.
    #[inline]
    pub fn index(self, moduli: Moduli) -> usize {
        self.x * moduli.n() + self.y
    }

    #[inline]
    pub fn from_index(index: usize, moduli: Moduli) -> Pair {
        Pair::new(index / moduli.n(), index % moduli.n())
    }
}

impl From<(usize, usize)> for Pair {
    fn from((x, y): (usize, usize)) -> Self {
        Pair::new(x, y)
    }
}

impl From<Pair> for (usize, usize) {
    fn from(p: Pair) -> Self {
        (p.x, p.y)
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// All elements of `Zm × Zn` in product order.
pub fn universe(moduli: Moduli) -> Vec<Pair> {
    (0..moduli.m())
        .flat_map(|x| (0..moduli.n()).map(move |y| Pair::new(x, y)))
        .collect()
}

/// Membership bitmap over `Zm × Zn`, indexed by [`Pair::index`].
#[derive(Debug, Clone)]
pub struct PairSet {
    moduli: Moduli,
    bits: Vec<bool>,
    len: usize,
}

impl PairSet {
    pub fn new(moduli: Moduli) -> Self {
        Self {
            moduli,
            bits: vec![false; moduli.size()],
            len: 0,
        }
    }

    pub fn from_pairs(moduli: Moduli, pairs: impl IntoIterator<Item = Pair>) -> Self {
        let mut set = Self::new(moduli);
        for p in pairs {
            set.insert(p);
        }
        set
    }

    #[inline]
    pub fn moduli(&self) -> Moduli {
        self.moduli
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Elements outside `Zm × Zn` are never members.
    #[inline]
    pub fn contains(&self, p: Pair) -> bool {
        p.x < self.moduli.m() && p.y < self.moduli.n() && self.bits[p.index(self.moduli)]
    }

    #[inline]
    pub fn contains_index(&self, index: usize) -> bool {
        self.bits.get(index).copied().unwrap_or(false)
    }

    /// Returns `true` if `p` was not already present.
    #[inline]
    pub fn insert(&mut self, p: Pair) -> bool {
        let idx = p.index(self.moduli);
        let fresh = !self.bits[idx];
        self.bits[idx] = true;
        self.len += fresh as usize;
        fresh
    }

    #[inline]
    pub fn remove(&mut self, p: Pair) -> bool {
        let idx = p.index(self.moduli);
        let present = self.bits[idx];
        self.bits[idx] = false;
        self.len -= present as usize;
        present
    }

    /// Members in product order.
    pub fn iter(&self) -> impl Iterator<Item = Pair> + '_ {
        let moduli = self.moduli;
        self.bits
            .iter()
            .enumerate()
            .filter(|(_, &b)| b)
            .map(move |(i, _)| Pair::from_index(i, moduli))
    }
}
