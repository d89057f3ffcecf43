// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Sources of randomness for shuffling candidates and back-filling the grid.
//!
//! Everything in this crate that needs randomness takes a [`RandomSource`], so a
//! [`Sequence`] can be substituted to make a round fully reproducible.

/// Number of letters cells are filled from.
pub const ALPHABET_LEN: usize = 26;

/// A supplier of uniformly distributed indexes.
pub trait RandomSource {
    /// Return a value in `[0, bound)`. Panics if `bound` is 0.
    fn next_below(&mut self, bound: usize) -> usize;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_below(&mut self, bound: usize) -> usize {
        (**self).next_below(bound)
    }
}

/// Deterministic source that cycles through a fixed list of values, reducing each
/// modulo the requested bound. An empty list always yields 0.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Sequence {
    values: Vec<usize>,
    next: usize,
}

impl Sequence {
    /// Create a source that yields `values` in order, then starts over.
    pub fn new(values: Vec<usize>) -> Self {
        Self { values, next: 0 }
    }

    /// A source that always yields 0.
    pub fn zeros() -> Self {
        Self::default()
    }
}

impl RandomSource for Sequence {
    fn next_below(&mut self, bound: usize) -> usize {
        assert!(bound > 0, "next_below called with bound 0");
        if self.values.is_empty() {
            return 0;
        }
        let value = self.values[self.next];
        self.next = (self.next + 1) % self.values.len();
        value % bound
    }
}

/// Adapter that draws from any [`rand::Rng`].
#[cfg(feature = "rng_gen")]
#[derive(Debug, Clone)]
pub struct RngSource<R>(R);

#[cfg(feature = "rng_gen")]
impl<R: rand::Rng> RngSource<R> {
    /// Wrap the given rng.
    pub fn new(rng: R) -> Self {
        RngSource(rng)
    }
}

#[cfg(feature = "rng_gen")]
impl<R: rand::Rng> RandomSource for RngSource<R> {
    fn next_below(&mut self, bound: usize) -> usize {
        self.0.gen_range(0, bound)
    }
}

/// Pick a letter uniformly from `A` to `Z`.
pub fn random_letter<R: RandomSource + ?Sized>(rng: &mut R) -> char {
    (b'A' + rng.next_below(ALPHABET_LEN) as u8) as char
}

/// Shuffle `items` in place, walking from the back and swapping each item with one at
/// or before it.
pub fn shuffle<T, R: RandomSource + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.next_below(i + 1);
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_cycles_and_wraps() {
        let mut seq = Sequence::new(vec![1, 30, 4]);
        assert_eq!(seq.next_below(26), 1);
        assert_eq!(seq.next_below(26), 4);
        assert_eq!(seq.next_below(2), 0);
        assert_eq!(seq.next_below(26), 1);
        assert_eq!(Sequence::zeros().next_below(10), 0);
    }

    #[test]
    fn letters_cover_the_alphabet() {
        let mut seq = Sequence::new((0..ALPHABET_LEN).collect());
        let letters: String = (0..ALPHABET_LEN).map(|_| random_letter(&mut seq)).collect();
        assert_eq!(letters, "ABCDEFGHIJKLMNOPQRSTUVWXYZ");
    }

    #[test]
    fn shuffle_with_zeros_rotates() {
        // Each step swaps position i with position 0.
        let mut items = vec!['a', 'b', 'c', 'd'];
        shuffle(&mut items, &mut Sequence::zeros());
        assert_eq!(items, vec!['b', 'c', 'd', 'a']);
    }

    #[test]
    fn shuffle_keeps_every_item() {
        let mut items: Vec<_> = (0..10).collect();
        shuffle(&mut items, &mut Sequence::new(vec![7, 3, 9, 2]));
        let mut sorted = items.clone();
        sorted.sort();
        assert_eq!(sorted, (0..10).collect::<Vec<_>>());
    }
}
