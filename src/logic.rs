use std::ops::Index;

use itertools::Itertools;
use varisat::{Lit, Var};

pub(crate) fn exactly_one(vars: &[Var]) -> Vec<Vec<Lit>> {
    let mut clauses = Vec::with_capacity(vars.len() * (vars.len() + 1) / 2 + 1);

    // every pair holds a false var; !A + !B for all pairs
    clauses.extend(vars.iter()
        .combinations(2)
        .map(|pair| vec![pair.index(0).negative(), pair.index(1).negative()])
    );
    // and some var is true; A + B + C + ...
    clauses.push(vars.iter().map(|v| v.positive()).collect_vec());

    clauses
}

// at most k are true; any k + 1 of them contain a false one
pub(crate) fn at_most_k(vars: &[Var], k: usize) -> Vec<Vec<Lit>> {
    if k >= vars.len() {
        // nothing to rule out
        return Vec::new();
    }

    vars.iter()
        .combinations(k + 1)
        .map(|selection| selection.into_iter().map(|v| v.negative()).collect_vec())
        .collect_vec()
}

// at least k are true; any n - k + 1 of them contain a true one
pub(crate) fn at_least_k(vars: &[Var], k: usize) -> Vec<Vec<Lit>> {
    if k == 0 {
        return Vec::new();
    }
    if k > vars.len() {
        // the empty clause; more true vars than vars
        return vec![Vec::new()];
    }

    vars.iter()
        .combinations(vars.len() - k + 1)
        .map(|selection| selection.into_iter().map(|v| v.positive()).collect_vec())
        .collect_vec()
}

pub(crate) fn exactly_k(vars: &[Var], k: usize) -> Vec<Vec<Lit>> {
    let mut clauses = at_most_k(vars, k);
    clauses.extend(at_least_k(vars, k));

    clauses
}

#[cfg(test)]
mod tests {
    use varisat::Var;

    use super::*;

    fn fresh_vars(n: usize) -> Vec<Var> {
        (0..n).map(Var::from_index).collect_vec()
    }

    // count assignments over `n` vars satisfying every clause, by exhaustion
    fn models(clauses: &[Vec<Lit>], n: usize) -> usize {
        (0..1usize << n)
            .filter(|assignment| {
                clauses.iter().all(|clause| {
                    clause.iter().any(|lit| {
                        ((assignment >> lit.var().index()) & 1 == 1) == lit.is_positive()
                    })
                })
            })
            .count()
    }

    fn binomial(n: usize, k: usize) -> usize {
        if k > n {
            return 0;
        }
        (1..=k).fold(1, |acc, i| acc * (n - i + 1) / i)
    }

    #[test]
    fn exactly_one_admits_each_singleton() {
        for n in 1..=6 {
            assert_eq!(models(&exactly_one(&fresh_vars(n)), n), n);
        }
    }

    #[test]
    fn exactly_k_matches_binomial() {
        for k in 0..=5 {
            assert_eq!(models(&exactly_k(&fresh_vars(5), k), 5), binomial(5, k));
        }
    }

    #[test]
    fn at_most_k_counts_partial_sums() {
        let expected: usize = (0..=2).map(|k| binomial(6, k)).sum();
        assert_eq!(models(&at_most_k(&fresh_vars(6), 2), 6), expected);
    }

    #[test]
    fn at_least_k_counts_partial_sums() {
        let expected: usize = (4..=6).map(|k| binomial(6, k)).sum();
        assert_eq!(models(&at_least_k(&fresh_vars(6), 4), 6), expected);
    }

    #[test]
    fn degenerate_bounds() {
        // at most n of n is vacuous, at least 0 is vacuous
        assert!(at_most_k(&fresh_vars(3), 3).is_empty());
        assert!(at_least_k(&fresh_vars(3), 0).is_empty());
        // at least n + 1 of n is the empty clause
        assert_eq!(at_least_k(&fresh_vars(3), 4), vec![Vec::new()]);
    }
}
