use std::collections::HashSet;
use std::sync::OnceLock;

use cayley_search::core::pair::{Pair, PairSet};
use cayley_search::core::subgroup::Subgroup;
use cayley_search::core::table::OperationTable;
use cayley_search::rules::associativity::{is_associative, is_partially_associative};
use cayley_search::rules::closure::is_closed_subset;
use cayley_search::rules::commutativity::is_commutative;
use cayley_search::rules::latin::{is_latin_square, last_row_columns_unique};
use cayley_search::scenario::Moduli;
use cayley_search::{find_subgroups, generate_semigroups};
use proptest::prelude::*;

fn table_from_cells(n: usize, cells: &[usize]) -> OperationTable {
    let rows: Vec<&[usize]> = cells.chunks(n).collect();
    OperationTable::from_rows(n, &rows).unwrap()
}

fn brute_force_associative(n: usize, cells: &[usize]) -> bool {
    let op = |a: usize, b: usize| cells[a * n + b];
    (0..n).all(|a| (0..n).all(|b| (0..n).all(|c| op(op(a, b), c) == op(a, op(b, c)))))
}

fn prefixes(t: &OperationTable) -> impl Iterator<Item = OperationTable> + '_ {
    (1..=t.len()).map(move |k| {
        let rows: Vec<&[usize]> = t.rows().take(k).collect();
        OperationTable::from_rows(t.order(), &rows).unwrap()
    })
}

fn semigroups_of_order_three() -> &'static HashSet<OperationTable> {
    static CACHE: OnceLock<HashSet<OperationTable>> = OnceLock::new();
    CACHE.get_or_init(|| generate_semigroups(3).unwrap().into_iter().collect())
}

fn table_strategy(max_n: usize) -> impl Strategy<Value = (usize, Vec<usize>)> {
    (1..=max_n).prop_flat_map(|n| (Just(n), prop::collection::vec(0..n, n * n)))
}

fn permutation_table_strategy(max_n: usize) -> impl Strategy<Value = (usize, Vec<usize>)> {
    (1..=max_n).prop_flat_map(|n| {
        let row = Just((0..n).collect::<Vec<usize>>()).prop_shuffle();
        (Just(n), prop::collection::vec(row, n))
            .prop_map(|(n, rows)| (n, rows.into_iter().flatten().collect()))
    })
}

fn subset_strategy() -> impl Strategy<Value = (usize, usize, Vec<bool>)> {
    (1usize..=4, 1usize..=3)
        .prop_flat_map(|(m, n)| (Just(m), Just(n), prop::collection::vec(any::<bool>(), m * n)))
}

proptest! {
    #[test]
    fn associativity_matches_brute_force((n, cells) in table_strategy(4)) {
        let t = table_from_cells(n, &cells);
        prop_assert_eq!(is_associative(&t), brute_force_associative(n, &cells));
    }

    #[test]
    fn every_prefix_of_an_associative_table_passes((n, cells) in table_strategy(4)) {
        let t = table_from_cells(n, &cells);
        if is_associative(&t) {
            for prefix in prefixes(&t) {
                prop_assert!(is_partially_associative(&prefix));
            }
        }
    }

    #[test]
    fn commutativity_matches_transpose((n, cells) in table_strategy(4)) {
        let t = table_from_cells(n, &cells);
        let symmetric = (0..n).all(|i| (0..n).all(|j| cells[i * n + j] == cells[j * n + i]));
        prop_assert_eq!(is_commutative(&t), symmetric);
    }

    #[test]
    fn incremental_column_check_builds_latin_squares((n, cells) in permutation_table_strategy(5)) {
        let t = table_from_cells(n, &cells);
        let every_step_ok = prefixes(&t).all(|p| last_row_columns_unique(&p));
        prop_assert_eq!(is_latin_square(&t), every_step_ok);
    }

    #[test]
    fn semigroup_search_finds_exactly_the_associative_tables(cells in prop::collection::vec(0usize..3, 9)) {
        let t = table_from_cells(3, &cells);
        prop_assert_eq!(semigroups_of_order_three().contains(&t), brute_force_associative(3, &cells));
    }

    #[test]
    fn closure_matches_brute_force((m, n, mask) in subset_strategy()) {
        let moduli = Moduli::new(m, n).unwrap();
        let members: Vec<Pair> = mask
            .iter()
            .enumerate()
            .filter(|(_, &b)| b)
            .map(|(i, _)| Pair::from_index(i, moduli))
            .collect();
        let set = PairSet::from_pairs(moduli, members.iter().copied());

        let closed = members
            .iter()
            .all(|&a| members.iter().all(|&b| members.contains(&a.add_mod(b, moduli))));
        prop_assert_eq!(is_closed_subset(&set), closed);

        // Every non-empty closed subset is one of the enumerated subgroups.
        if closed && !members.is_empty() {
            let h = Subgroup::from_elements(members);
            prop_assert!(find_subgroups(m, n).unwrap().contains(&h));
        }
    }
}
