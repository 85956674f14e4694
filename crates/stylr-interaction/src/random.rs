//! Injectable random source.
//!
//! Mock analyses, bundle picks, order numbers and delivery dates all draw
//! from a [`ChoiceSource`], so a seeded or scripted source makes every
//! reply reproducible.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

/// Uniform choices used by reply builders.
pub trait ChoiceSource: Send {
    /// Uniform index in `0..len`. `len` must be non-zero.
    fn pick_index(&mut self, len: usize) -> usize;

    /// Uniform integer in `low..=high`.
    fn int_inclusive(&mut self, low: i64, high: i64) -> i64;
}

/// Picks one element of `items` uniformly; `None` for an empty slice.
pub fn choose<'a, T>(source: &mut dyn ChoiceSource, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    items.get(source.pick_index(items.len()))
}

/// [`ChoiceSource`] backed by a [`StdRng`].
#[derive(Debug, Clone)]
pub struct SeededChoice {
    rng: StdRng,
}

impl SeededChoice {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Seeded when `seed` is set, entropy otherwise.
    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::from_seed(seed),
            None => Self::from_entropy(),
        }
    }
}

impl ChoiceSource for SeededChoice {
    fn pick_index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }

    fn int_inclusive(&mut self, low: i64, high: i64) -> i64 {
        self.rng.gen_range(low..=high)
    }
}

/// Replays a fixed list of picks, for tests.
///
/// Each call consumes the next value: `pick_index` reduces it modulo `len`,
/// `int_inclusive` clamps `low + value` into range. Once exhausted every
/// call returns the lowest choice.
#[derive(Debug, Clone, Default)]
pub struct ScriptedChoice {
    picks: VecDeque<usize>,
}

impl ScriptedChoice {
    pub fn new(picks: impl IntoIterator<Item = usize>) -> Self {
        Self {
            picks: picks.into_iter().collect(),
        }
    }
}

impl ChoiceSource for ScriptedChoice {
    fn pick_index(&mut self, len: usize) -> usize {
        self.picks.pop_front().unwrap_or(0) % len
    }

    fn int_inclusive(&mut self, low: i64, high: i64) -> i64 {
        let offset = self.picks.pop_front().unwrap_or(0) as i64;
        (low + offset).min(high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_choice_is_reproducible() {
        let mut a = SeededChoice::from_seed(42);
        let mut b = SeededChoice::from_seed(42);
        let left: Vec<_> = (0..16).map(|_| a.pick_index(10)).collect();
        let right: Vec<_> = (0..16).map(|_| b.pick_index(10)).collect();
        assert_eq!(left, right);
    }

    #[test]
    fn test_int_inclusive_bounds() {
        let mut source = SeededChoice::from_seed(7);
        for _ in 0..500 {
            let value = source.int_inclusive(2, 7);
            assert!((2..=7).contains(&value));
        }
    }

    #[test]
    fn test_scripted_choice() {
        let mut source = ScriptedChoice::new([1, 5, 9]);
        assert_eq!(choose(&mut source, &["a", "b", "c"]), Some(&"b"));
        assert_eq!(source.pick_index(3), 2);
        assert_eq!(source.int_inclusive(2, 7), 7);
        assert_eq!(source.int_inclusive(2, 7), 2);
    }

    #[test]
    fn test_choose_empty() {
        let mut source = ScriptedChoice::default();
        let empty: [u8; 0] = [];
        assert!(choose(&mut source, &empty).is_none());
    }
}
