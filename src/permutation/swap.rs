//! Swap-based backtracking generation.

use std::ops::ControlFlow;

use crate::error::{Result, TourError};

/// Visits every permutation of `0..n` in swap-tree order.
///
/// # Errors
///
/// [`TourError::EmptyPermutation`] if `n == 0`.
///
/// # Examples
///
/// ```
/// use std::ops::ControlFlow;
/// use u_tour::permutation::for_each_swap_permutation;
///
/// let mut seen = Vec::new();
/// for_each_swap_permutation(3, |p| {
///     seen.push(p.to_vec());
///     ControlFlow::Continue(())
/// })
/// .unwrap();
/// assert_eq!(seen[0], vec![0, 1, 2]);
/// assert_eq!(seen.len(), 6);
/// ```
pub fn for_each_swap_permutation<F>(n: usize, visit: F) -> Result<ControlFlow<()>>
where
    F: FnMut(&[usize]) -> ControlFlow<()>,
{
    if n == 0 {
        return Err(TourError::EmptyPermutation);
    }
    let mut seq: Vec<usize> = (0..n).collect();
    Ok(permute_in_place(&mut seq, 0, visit))
}

/// Permutes `seq[fixed..]` in place, calling `visit` once per arrangement.
///
/// Position `k` takes each candidate from `seq[k..]` in turn by swapping it
/// into place, recursing on `k + 1`, then swapping back. When only the last
/// position is left the arrangement is complete. `seq` is restored to its
/// original order on return, including after an early
/// [`ControlFlow::Break`].
pub fn permute_in_place<F>(seq: &mut [usize], fixed: usize, mut visit: F) -> ControlFlow<()>
where
    F: FnMut(&[usize]) -> ControlFlow<()>,
{
    fix_position(seq, fixed, &mut visit)
}

fn fix_position<F>(seq: &mut [usize], k: usize, visit: &mut F) -> ControlFlow<()>
where
    F: FnMut(&[usize]) -> ControlFlow<()>,
{
    if k + 1 >= seq.len() {
        return visit(seq);
    }
    for i in k..seq.len() {
        seq.swap(k, i);
        let flow = fix_position(seq, k + 1, visit);
        seq.swap(k, i);
        if flow.is_break() {
            return flow;
        }
    }
    ControlFlow::Continue(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_swap_order_n3() {
        let mut seen = Vec::new();
        for_each_swap_permutation(3, |p| {
            seen.push(p.to_vec());
            ControlFlow::Continue(())
        })
        .unwrap();
        assert_eq!(
            seen,
            vec![
                vec![0, 1, 2],
                vec![0, 2, 1],
                vec![1, 0, 2],
                vec![1, 2, 0],
                vec![2, 1, 0],
                vec![2, 0, 1],
            ]
        );
    }

    #[test]
    fn test_each_exactly_once() {
        let mut seen = HashSet::new();
        let mut total = 0;
        for_each_swap_permutation(6, |p| {
            seen.insert(p.to_vec());
            total += 1;
            ControlFlow::Continue(())
        })
        .unwrap();
        assert_eq!(total, 720);
        assert_eq!(seen.len(), 720);
    }

    #[test]
    fn test_restores_sequence() {
        let mut seq = vec![4, 7, 1, 9];
        let flow = permute_in_place(&mut seq, 0, |_| ControlFlow::Continue(()));
        assert!(flow.is_continue());
        assert_eq!(seq, vec![4, 7, 1, 9]);

        let mut calls = 0;
        let flow = permute_in_place(&mut seq, 0, |_| {
            calls += 1;
            if calls == 5 {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });
        assert!(flow.is_break());
        assert_eq!(seq, vec![4, 7, 1, 9]);
    }

    #[test]
    fn test_fully_fixed_visits_once() {
        let mut seq = vec![2, 0, 1];
        let mut calls = 0;
        let _ = permute_in_place(&mut seq, 3, |p| {
            assert_eq!(p, &[2, 0, 1]);
            calls += 1;
            ControlFlow::Continue(())
        });
        assert_eq!(calls, 1);
    }
}
