//! Deterministic candidate generators.
//!
//! Enumeration order is part of the contract: result lists are reproducible run to run, and
//! their order follows directly from the orders produced here.

use crate::scenario::SearchError;
use crate::search::stats::StatsTracker;

/// A list of equal-width candidate rows, stored flat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateRows {
    width: usize,
    cells: Vec<usize>,
}

impl CandidateRows {
    /// A list holding exactly one row.
    pub fn single(row: &[usize]) -> Self {
        Self {
            width: row.len(),
            cells: row.to_vec(),
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len() / self.width.max(1)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn get(&self, i: usize) -> &[usize] {
        &self.cells[i * self.width..(i + 1) * self.width]
    }

    pub fn iter(&self) -> impl Iterator<Item = &[usize]> + '_ {
        self.cells.chunks_exact(self.width.max(1))
    }
}

fn reserve_rows(
    tracker: &StatsTracker,
    structure: &'static str,
    count: Option<usize>,
    width: usize,
) -> Result<Vec<usize>, SearchError> {
    let total = count
        .and_then(|c| c.checked_mul(width))
        .ok_or_else(|| tracker.allocation_failed("candidates", structure))?;
    let mut cells = Vec::new();
    tracker.try_reserve_vec("candidates", structure, &mut cells, total)?;
    Ok(cells)
}

/// Every `n`-tuple over `0..n` (repetition allowed), lexicographic: the last position varies
/// fastest.
pub fn cartesian_rows(n: usize, tracker: &StatsTracker) -> Result<CandidateRows, SearchError> {
    let count = u32::try_from(n).ok().and_then(|e| n.checked_pow(e));
    let mut cells = reserve_rows(tracker, "cartesian_rows", count, n)?;

    let mut cur = vec![0usize; n];
    'odometer: loop {
        cells.extend_from_slice(&cur);
        let mut pos = n;
        loop {
            if pos == 0 {
                break 'odometer;
            }
            pos -= 1;
            cur[pos] += 1;
            if cur[pos] < n {
                break;
            }
            cur[pos] = 0;
        }
    }

    Ok(CandidateRows { width: n, cells })
}

/// Rearrange `v` into the next permutation in lexicographic order.
///
/// Returns `false` (leaving `v` untouched) if `v` is already the last one.
pub fn next_permutation(v: &mut [usize]) -> bool {
    let Some(i) = (1..v.len()).rev().find(|&i| v[i - 1] < v[i]).map(|i| i - 1) else {
        return false;
    };
    // v[i+1..] is non-increasing, so the rightmost element above v[i] is the smallest one.
    let j = (i + 1..v.len())
        .rev()
        .find(|&j| v[j] > v[i])
        .unwrap_or(i + 1);
    v.swap(i, j);
    v[i + 1..].reverse();
    true
}

/// Every permutation of `0..n`, lexicographic.
pub fn permutation_rows(n: usize, tracker: &StatsTracker) -> Result<CandidateRows, SearchError> {
    let count = (1..=n).try_fold(1usize, |acc, k| acc.checked_mul(k));
    let mut cells = reserve_rows(tracker, "permutation_rows", count, n)?;

    let mut cur: Vec<usize> = (0..n).collect();
    loop {
        cells.extend_from_slice(&cur);
        if !next_permutation(&mut cur) {
            break;
        }
    }

    Ok(CandidateRows { width: n, cells })
}

/// `k`-element combinations of the indices `0..pool`, lexicographic.
///
/// This is a lending iterator: each combination borrows the generator until the next call.
#[derive(Debug, Clone)]
pub struct Combinations {
    pool: usize,
    indices: Vec<usize>,
    started: bool,
    done: bool,
}

impl Combinations {
    pub fn new(pool: usize, k: usize) -> Self {
        Self {
            pool,
            indices: (0..k).collect(),
            started: false,
            done: k > pool,
        }
    }

    pub fn next_combination(&mut self) -> Option<&[usize]> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(&self.indices);
        }

        let k = self.indices.len();
        let mut i = k;
        loop {
            if i == 0 {
                self.done = true;
                return None;
            }
            i -= 1;
            if self.indices[i] < self.pool - k + i {
                break;
            }
        }

        self.indices[i] += 1;
        for j in i + 1..k {
            self.indices[j] = self.indices[j - 1] + 1;
        }
        Some(&self.indices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(rows: &CandidateRows) -> Vec<Vec<usize>> {
        rows.iter().map(<[usize]>::to_vec).collect()
    }

    #[test]
    fn cartesian_rows_follow_product_order() {
        let t = StatsTracker::new();
        let rows = cartesian_rows(2, &t).unwrap();
        assert_eq!(collect(&rows), vec![vec![0, 0], vec![0, 1], vec![1, 0], vec![1, 1]]);
        assert_eq!(cartesian_rows(3, &t).unwrap().len(), 27);
        assert_eq!(collect(&cartesian_rows(1, &t).unwrap()), vec![vec![0]]);
    }

    #[test]
    fn permutation_rows_are_lexicographic() {
        let t = StatsTracker::new();
        let rows = permutation_rows(3, &t).unwrap();
        assert_eq!(
            collect(&rows),
            vec![
                vec![0, 1, 2],
                vec![0, 2, 1],
                vec![1, 0, 2],
                vec![1, 2, 0],
                vec![2, 0, 1],
                vec![2, 1, 0],
            ]
        );
        assert_eq!(permutation_rows(5, &t).unwrap().len(), 120);
    }

    #[test]
    fn oversized_candidate_space_is_an_error() {
        let t = StatsTracker::new();
        assert!(matches!(
            cartesian_rows(64, &t),
            Err(SearchError::AllocationFailed { .. })
        ));
    }

    #[test]
    fn combinations_are_lexicographic() {
        let mut c = Combinations::new(4, 2);
        let mut seen = Vec::new();
        while let Some(x) = c.next_combination() {
            seen.push(x.to_vec());
        }
        assert_eq!(
            seen,
            vec![
                vec![0, 1],
                vec![0, 2],
                vec![0, 3],
                vec![1, 2],
                vec![1, 3],
                vec![2, 3]
            ]
        );
    }

    #[test]
    fn combinations_edge_sizes() {
        let mut full = Combinations::new(3, 3);
        assert_eq!(full.next_combination(), Some(&[0, 1, 2][..]));
        assert_eq!(full.next_combination(), None);

        let mut too_many = Combinations::new(2, 3);
        assert_eq!(too_many.next_combination(), None);
    }
}
