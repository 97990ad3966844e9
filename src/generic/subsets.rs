/*!
An iterator through the non-empty subsets of `0..n`, by size and then lexicographically.

Each subset is given as a strictly increasing list of indices.

```rust
# use sleuth::generic::subsets::SizeOrderedSubsets;
let subsets = SizeOrderedSubsets::new(3).collect::<Vec<_>>();
assert_eq!(
    subsets,
    vec![
        vec![0], vec![1], vec![2],
        vec![0, 1], vec![0, 2], vec![1, 2],
        vec![0, 1, 2],
    ]
);
```

There are 2^n - 1 such subsets, so the iterator is only practical for small n.
*/

pub struct SizeOrderedSubsets {
    /// The size of the set whose subsets are iterated.
    n: usize,

    /// The most recently returned subset, or empty before the first.
    current: Vec<usize>,

    /// Set once every subset has been returned.
    exhausted: bool,
}

impl SizeOrderedSubsets {
    pub fn new(n: usize) -> Self {
        SizeOrderedSubsets {
            n,
            current: Vec::default(),
            exhausted: n == 0,
        }
    }

    /// Advances the current subset to the lexicographically next subset of the same size, if one exists.
    fn advance_within_size(&mut self) -> bool {
        let k = self.current.len();
        for i in (0..k).rev() {
            if self.current[i] < self.n - k + i {
                self.current[i] += 1;
                for j in (i + 1)..k {
                    self.current[j] = self.current[j - 1] + 1;
                }
                return true;
            }
        }
        false
    }
}

impl Iterator for SizeOrderedSubsets {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        if !self.advance_within_size() {
            let k = self.current.len() + 1;
            if k > self.n {
                self.exhausted = true;
                return None;
            }
            self.current = (0..k).collect();
        }

        Some(self.current.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty() {
        assert_eq!(SizeOrderedSubsets::new(0).next(), None);
    }

    #[test]
    fn counts() {
        for n in 1..10 {
            assert_eq!(SizeOrderedSubsets::new(n).count(), (1 << n) - 1);
        }
    }

    #[test]
    fn sizes_never_decrease() {
        let mut previous = 0;
        for subset in SizeOrderedSubsets::new(6) {
            assert!(subset.len() >= previous);
            assert!(subset.windows(2).all(|pair| pair[0] < pair[1]));
            previous = subset.len();
        }
    }
}
