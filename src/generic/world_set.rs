//! A set of world indices, as a fixed-capacity bit set backed by u64 words.
//!
//! Used to cache the worlds on which a statement is true, so the worlds consistent with a collection of statements are found by intersection rather than evaluation.
//!
//! ```rust
//! # use sleuth::generic::world_set::WorldSet;
//! let mut evens = WorldSet::empty(100);
//! let mut threes = WorldSet::empty(100);
//! for i in 0..100 {
//!     if i % 2 == 0 { evens.insert(i) }
//!     if i % 3 == 0 { threes.insert(i) }
//! }
//!
//! let mut both = WorldSet::full(100);
//! both.intersect_with(&evens);
//! both.intersect_with(&threes);
//! assert_eq!(both.len(), 17);
//! assert_eq!(both.first(), Some(0));
//! ```

use crate::db::world_space::WorldIndex;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorldSet {
    /// Each u64 holds 64 bits.
    words: Vec<u64>,

    /// The number of worlds the set may contain.
    capacity: usize,
}

impl WorldSet {
    const BITS_PER_WORD: usize = 64;

    fn word_count(capacity: usize) -> usize {
        capacity.div_ceil(Self::BITS_PER_WORD)
    }

    /// A set containing no world.
    pub fn empty(capacity: usize) -> Self {
        WorldSet {
            words: vec![0; Self::word_count(capacity)],
            capacity,
        }
    }

    /// A set containing every world with index less than the capacity.
    pub fn full(capacity: usize) -> Self {
        let mut words = vec![u64::MAX; Self::word_count(capacity)];
        let remainder = capacity % Self::BITS_PER_WORD;
        if remainder != 0 {
            if let Some(last) = words.last_mut() {
                *last = (1_u64 << remainder) - 1;
            }
        }
        WorldSet { words, capacity }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Adds the world to the set.
    ///
    /// # Panics
    /// If the index is not less than the capacity of the set.
    pub fn insert(&mut self, index: WorldIndex) {
        assert!(index < self.capacity, "world {index} beyond capacity");
        self.words[index / Self::BITS_PER_WORD] |= 1_u64 << (index % Self::BITS_PER_WORD);
    }

    pub fn contains(&self, index: WorldIndex) -> bool {
        index < self.capacity && self.words[index / Self::BITS_PER_WORD] & (1_u64 << (index % Self::BITS_PER_WORD)) != 0
    }

    /// Removes every world not in the other set.
    pub fn intersect_with(&mut self, other: &WorldSet) {
        for (word, other_word) in self.words.iter_mut().zip(other.words.iter()) {
            *word &= other_word;
        }
    }

    /// A count of the worlds in the set.
    pub fn len(&self) -> usize {
        self.words.iter().map(|word| word.count_ones() as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|word| *word == 0)
    }

    /// The least world in the set, if any.
    pub fn first(&self) -> Option<WorldIndex> {
        self.words
            .iter()
            .enumerate()
            .find(|(_, word)| **word != 0)
            .map(|(position, word)| position * Self::BITS_PER_WORD + word.trailing_zeros() as usize)
    }

    /// The worlds of the set, in increasing order.
    pub fn iter(&self) -> impl Iterator<Item = WorldIndex> + '_ {
        (0..self.capacity).filter(|index| self.contains(*index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_respects_capacity() {
        for capacity in [0, 1, 63, 64, 65, 130] {
            let set = WorldSet::full(capacity);
            assert_eq!(set.len(), capacity);
            assert!(!set.contains(capacity));
        }
    }

    #[test]
    fn intersection() {
        let mut a = WorldSet::empty(70);
        let mut b = WorldSet::empty(70);
        a.insert(3);
        a.insert(66);
        b.insert(66);
        b.insert(69);
        a.intersect_with(&b);
        assert_eq!(a.iter().collect::<Vec<_>>(), vec![66]);
        assert_eq!(a.first(), Some(66));
    }

    #[test]
    fn empty_has_no_first() {
        let set = WorldSet::empty(10);
        assert!(set.is_empty());
        assert_eq!(set.first(), None);
    }
}
