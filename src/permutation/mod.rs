//! Permutation engine over `0..n`.
//!
//! Two interchangeable strategies produce the same `n!` orderings:
//!
//! - [`PermutationStrategy::Lexicographic`]: successor stepping with
//!   [`next_permutation`]. Strictly increasing order, O(n) per step.
//! - [`PermutationStrategy::Swap`]: recursive in-place swapping. Swap-tree
//!   order, O(1) amortized per leaf.
//!
//! Visitors borrow the working sequence and return a
//! [`ControlFlow`](std::ops::ControlFlow) so callers can stop early (e.g.
//! the Hamiltonian check stops at the first valid cycle).
//!
//! # References
//!
//! - Knuth (2011), *TAOCP* Vol. 4A, §7.2.1.2 "Generating all permutations"

mod lexicographic;
mod swap;

pub use lexicographic::{next_permutation, Lexicographic};
pub use swap::{for_each_swap_permutation, permute_in_place};

use std::collections::HashSet;
use std::ops::ControlFlow;

use crate::error::{Result, TourError};

/// Enumeration order used by the permutation engine.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PermutationStrategy {
    /// Lexicographic successor stepping from the identity.
    Lexicographic,
    /// Recursive swap-based backtracking.
    #[default]
    Swap,
}

/// Visits every permutation of `seq[fixed..]`, leaving `seq[..fixed]` in
/// place, with the chosen strategy.
///
/// For [`PermutationStrategy::Lexicographic`] the suffix must start sorted
/// ascending to cover all orderings. On return the suffix is restored to
/// its starting arrangement for the swap strategy; the lexicographic
/// strategy leaves it at the last permutation visited.
pub fn for_each_suffix_permutation<F>(
    seq: &mut [usize],
    fixed: usize,
    strategy: PermutationStrategy,
    mut visit: F,
) -> ControlFlow<()>
where
    F: FnMut(&[usize]) -> ControlFlow<()>,
{
    let fixed = fixed.min(seq.len());
    match strategy {
        PermutationStrategy::Swap => permute_in_place(seq, fixed, visit),
        PermutationStrategy::Lexicographic => loop {
            let flow = visit(seq);
            if flow.is_break() {
                return flow;
            }
            if !next_permutation(&mut seq[fixed..]) {
                return ControlFlow::Continue(());
            }
        },
    }
}

/// Visits every permutation of `0..n` with the chosen strategy.
///
/// # Errors
///
/// [`TourError::EmptyPermutation`] if `n == 0`.
pub fn for_each_permutation<F>(
    n: usize,
    strategy: PermutationStrategy,
    visit: F,
) -> Result<ControlFlow<()>>
where
    F: FnMut(&[usize]) -> ControlFlow<()>,
{
    if n == 0 {
        return Err(TourError::EmptyPermutation);
    }
    let mut seq: Vec<usize> = (0..n).collect();
    Ok(for_each_suffix_permutation(&mut seq, 0, strategy, visit))
}

/// Collects all permutations of `0..n` into a set.
///
/// Memory grows as `n!`; intended for small `n` and for cross-checking the
/// two strategies.
///
/// # Examples
///
/// ```
/// use u_tour::permutation::{all_permutations, PermutationStrategy};
///
/// let lex = all_permutations(4, PermutationStrategy::Lexicographic).unwrap();
/// let swap = all_permutations(4, PermutationStrategy::Swap).unwrap();
/// assert_eq!(lex.len(), 24);
/// assert_eq!(lex, swap);
/// ```
pub fn all_permutations(n: usize, strategy: PermutationStrategy) -> Result<HashSet<Vec<usize>>> {
    let mut out = HashSet::new();
    for_each_permutation(n, strategy, |perm| {
        out.insert(perm.to_vec());
        ControlFlow::Continue(())
    })?;
    Ok(out)
}

/// `n!`, or `None` on overflow.
pub fn permutation_count(n: usize) -> Option<u64> {
    (1..=n as u64).try_fold(1u64, |acc, k| acc.checked_mul(k))
}
