use crate::core::pair::PairSet;

/// `(i + j) mod (m, n)` is a member for every pair of members `i`, `j`.
///
/// In a finite group every non-empty subset closed under the operation is a subgroup: each
/// member `g` has finite order `k`, so `g^k` (the identity) and `g^(k-1)` (its inverse) are
/// sums of members. No separate identity or inverse check is needed.
pub fn is_closed_subset(set: &PairSet) -> bool {
    let moduli = set.moduli();
    let members: Vec<_> = set.iter().collect();
    members
        .iter()
        .all(|&i| members.iter().all(|&j| set.contains(i.add_mod(j, moduli))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::pair::Pair;
    use crate::scenario::Moduli;

    #[test]
    fn singleton_zero_is_closed() {
        let z = Moduli::new(3, 3).unwrap();
        assert!(is_closed_subset(&PairSet::from_pairs(z, [Pair::ZERO])));
    }

    #[test]
    fn generated_cyclic_subgroup_is_closed() {
        let z = Moduli::new(4, 2).unwrap();
        let h = [Pair::new(0, 0), Pair::new(2, 0)];
        assert!(is_closed_subset(&PairSet::from_pairs(z, h)));
    }

    #[test]
    fn missing_sum_breaks_closure() {
        let z = Moduli::new(4, 1).unwrap();
        let s = [Pair::new(0, 0), Pair::new(1, 0)];
        assert!(!is_closed_subset(&PairSet::from_pairs(z, s)));
    }
}
