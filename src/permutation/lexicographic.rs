//! Lexicographic successor generation.

use crate::error::{Result, TourError};

/// Rearranges `seq` into its lexicographic successor.
///
/// Returns `false` and leaves `seq` untouched when it is already the last
/// (non-increasing) arrangement.
///
/// # Algorithm
///
/// 1. Find the longest non-increasing suffix `seq[i..]`
/// 2. If `i == 0` there is no pivot: this is the final permutation
/// 3. Swap the pivot `seq[i - 1]` with the rightmost suffix element greater
///    than it
/// 4. Reverse the suffix
///
/// # Examples
///
/// ```
/// use u_tour::permutation::next_permutation;
///
/// let mut seq = [0, 2, 1];
/// assert!(next_permutation(&mut seq));
/// assert_eq!(seq, [1, 0, 2]);
///
/// let mut last = [2, 1, 0];
/// assert!(!next_permutation(&mut last));
/// ```
pub fn next_permutation<T: Ord>(seq: &mut [T]) -> bool {
    if seq.len() < 2 {
        return false;
    }
    let mut i = seq.len() - 1;
    while i > 0 && seq[i - 1] >= seq[i] {
        i -= 1;
    }
    if i == 0 {
        return false;
    }
    let mut j = seq.len() - 1;
    while seq[j] <= seq[i - 1] {
        j -= 1;
    }
    seq.swap(i - 1, j);
    seq[i..].reverse();
    true
}

/// Lazy, restartable lexicographic enumeration of the permutations of
/// `0..n`, starting at the identity and ending at `n-1, ..., 0`.
///
/// [`advance`](Self::advance) lends the working sequence without copying;
/// the [`Iterator`] impl yields owned copies.
///
/// # Examples
///
/// ```
/// use u_tour::permutation::Lexicographic;
///
/// let perms: Vec<Vec<usize>> = Lexicographic::new(3).unwrap().collect();
/// assert_eq!(perms.len(), 6);
/// assert_eq!(perms[0], vec![0, 1, 2]);
/// assert_eq!(perms[5], vec![2, 1, 0]);
/// ```
#[derive(Debug, Clone)]
pub struct Lexicographic {
    current: Vec<usize>,
    started: bool,
    exhausted: bool,
}

impl Lexicographic {
    /// Creates the enumeration for `0..n`.
    ///
    /// # Errors
    ///
    /// [`TourError::EmptyPermutation`] if `n == 0`.
    pub fn new(n: usize) -> Result<Self> {
        if n == 0 {
            return Err(TourError::EmptyPermutation);
        }
        Ok(Self {
            current: (0..n).collect(),
            started: false,
            exhausted: false,
        })
    }

    /// Moves to the next permutation and borrows it, or returns `None`
    /// once the descending permutation has been produced.
    pub fn advance(&mut self) -> Option<&[usize]> {
        if self.exhausted {
            return None;
        }
        if !self.started {
            self.started = true;
        } else if !next_permutation(&mut self.current) {
            self.exhausted = true;
            return None;
        }
        Some(&self.current)
    }

    /// Restarts from the identity permutation.
    pub fn reset(&mut self) {
        for (i, slot) in self.current.iter_mut().enumerate() {
            *slot = i;
        }
        self.started = false;
        self.exhausted = false;
    }

    /// Length of the permuted sequence.
    pub fn len(&self) -> usize {
        self.current.len()
    }

    /// Always `false`; empty enumerations are rejected by [`Self::new`].
    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }
}

impl Iterator for Lexicographic {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        self.advance().map(<[usize]>::to_vec)
    }
}

impl std::iter::FusedIterator for Lexicographic {}
