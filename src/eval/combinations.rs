//! k-element subsets of an ordered sequence.
//!
//! Subsets are produced in lexicographic order of their index sets, which
//! is the order of the include-first recursion: every subset containing the
//! first element comes before every subset that skips it. Each subset keeps
//! the relative order of its elements from the input.

/// Iterator over all `k`-element subsets of `items`.
///
/// Index-based: only the current index vector is kept between steps.
#[derive(Debug, Clone)]
pub struct Combinations<'a, T> {
    items: &'a [T],
    indices: Vec<usize>,
    done: bool,
}

impl<'a, T: Clone> Combinations<'a, T> {
    /// Create an iterator over the `k`-subsets of `items`.
    pub fn new(items: &'a [T], k: usize) -> Self {
        Self {
            items,
            indices: (0..k).collect(),
            done: k > items.len(),
        }
    }

    /// Advance `indices` to the next subset in lexicographic order.
    fn advance(&mut self) {
        let n = self.items.len();
        let k = self.indices.len();

        // rightmost index that can still move right
        let Some(i) = (0..k).rev().find(|&i| self.indices[i] < n - k + i) else {
            self.done = true;
            return;
        };
        self.indices[i] += 1;
        for j in i + 1..k {
            self.indices[j] = self.indices[j - 1] + 1;
        }
    }
}

impl<T: Clone> Iterator for Combinations<'_, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let subset = self.indices.iter().map(|&i| self.items[i].clone()).collect();
        self.advance();
        Some(subset)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        // subsets at or after the current index set in lexicographic order
        let n = self.items.len();
        let k = self.indices.len();
        let remaining = 1 + self
            .indices
            .iter()
            .enumerate()
            .map(|(i, &c)| binomial(n - 1 - c, k - i))
            .sum::<usize>();
        (remaining, Some(remaining))
    }
}

impl<T: Clone> ExactSizeIterator for Combinations<'_, T> {}

/// Collect every `k`-element subset of `items`.
///
/// `k == 0` yields one empty subset and `k > items.len()` yields none.
pub fn combinations<T: Clone>(items: &[T], k: usize) -> Vec<Vec<T>> {
    Combinations::new(items, k).collect()
}

/// Number of `k`-subsets of an `n`-set.
pub fn binomial(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    (0..k).fold(1, |acc, i| acc * (n - i) / (i + 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn test_seven_choose_five() {
        let items: Vec<u8> = (0..7).collect();
        let subsets = combinations(&items, 5);
        assert_eq!(subsets.len(), 21);
        assert!(subsets.iter().all(|s| s.len() == 5));

        let unique: FxHashSet<Vec<u8>> = subsets.iter().cloned().collect();
        assert_eq!(unique.len(), 21);

        // order within each subset follows the input
        assert!(subsets.iter().all(|s| s.windows(2).all(|w| w[0] < w[1])));
    }

    #[test]
    fn test_include_first_ordering() {
        let subsets = combinations(&['a', 'b', 'c', 'd'], 2);
        let expected: Vec<Vec<char>> = vec![
            vec!['a', 'b'],
            vec!['a', 'c'],
            vec!['a', 'd'],
            vec!['b', 'c'],
            vec!['b', 'd'],
            vec!['c', 'd'],
        ];
        assert_eq!(subsets, expected);
    }

    #[test]
    fn test_len_counts_down() {
        let items = ['a', 'b', 'c', 'd'];
        let mut iter = Combinations::new(&items, 2);
        for left in (0..=6).rev() {
            assert_eq!(iter.len(), left);
            if left > 0 {
                assert!(iter.next().is_some());
            }
        }
        assert!(iter.next().is_none());
        assert_eq!(Combinations::new(&items, 5).len(), 0);
        assert_eq!(Combinations::new(&items, 0).len(), 1);
    }

    #[test]
    fn test_base_cases() {
        let items = [1, 2, 3];
        assert_eq!(combinations(&items, 0), vec![Vec::<i32>::new()]);
        assert_eq!(combinations(&items, 3), vec![vec![1, 2, 3]]);
        assert_eq!(combinations(&items, 1), vec![vec![1], vec![2], vec![3]]);
        assert!(combinations(&items, 4).is_empty());
        assert_eq!(combinations::<i32>(&[], 0), vec![Vec::<i32>::new()]);
    }

    #[test]
    fn test_counts_match_binomial() {
        let items: Vec<usize> = (0..10).collect();
        for k in 0..=11 {
            assert_eq!(Combinations::new(&items, k).count(), binomial(10, k), "k = {}", k);
        }
        assert_eq!(Combinations::new(&items, 4).len(), binomial(10, 4));
        assert_eq!(binomial(7, 5), 21);
        assert_eq!(binomial(52, 5), 2_598_960);
    }
}
