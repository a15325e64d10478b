//! The three one-shot lifelines and the randomness behind them.

use std::fmt;

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::models::{Question, NUM_OPTIONS};

/// Base audience vote range for every option, inclusive.
const POLL_BASE: std::ops::RangeInclusive<u32> = 5..=20;
/// Bonus added to the correct option's vote.
const POLL_BOOST: u32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Lifeline {
    FiftyFifty,
    AudiencePoll,
    Flip,
}

impl Lifeline {
    pub const ALL: [Lifeline; 3] = [Lifeline::FiftyFifty, Lifeline::AudiencePoll, Lifeline::Flip];

    pub fn label(self) -> &'static str {
        match self {
            Lifeline::FiftyFifty => "50-50",
            Lifeline::AudiencePoll => "Audience",
            Lifeline::Flip => "Flip",
        }
    }

    fn slot(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Lifeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What a lifeline did when it was used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifelineEffect {
    /// Two wrong options removed, ascending.
    FiftyFifty { eliminated: [usize; 2] },
    /// Display-only vote percentages, not normalised to 100.
    AudiencePoll { percentages: [u32; NUM_OPTIONS] },
    /// Position the current question was swapped with, if any remained.
    Flip { swapped_with: Option<usize> },
}

/// Tracks which lifelines have been spent this session.
#[derive(Debug, Clone, Default)]
pub struct LifelineRegistry {
    used: [bool; 3],
}

impl LifelineRegistry {
    pub fn is_used(&self, lifeline: Lifeline) -> bool {
        self.used[lifeline.slot()]
    }

    pub fn is_available(&self, lifeline: Lifeline) -> bool {
        !self.is_used(lifeline)
    }

    /// Marks `lifeline` used. Returns false if it was already spent.
    pub fn claim(&mut self, lifeline: Lifeline) -> bool {
        let slot = &mut self.used[lifeline.slot()];
        if *slot {
            return false;
        }
        *slot = true;
        true
    }

    pub fn available(&self) -> impl Iterator<Item = Lifeline> + '_ {
        Lifeline::ALL.into_iter().filter(|l| self.is_available(*l))
    }
}

/// Picks two of the three wrong options without replacement.
pub fn fifty_fifty<R: Rng + ?Sized>(question: &Question, rng: &mut R) -> [usize; 2] {
    let wrong: Vec<usize> = question.wrong_options().collect();
    let mut picked: Vec<usize> = wrong.choose_multiple(rng, 2).copied().collect();
    picked.sort_unstable();
    [picked[0], picked[1]]
}

pub fn audience_poll<R: Rng + ?Sized>(question: &Question, rng: &mut R) -> [u32; NUM_OPTIONS] {
    let mut percentages = [0; NUM_OPTIONS];
    for pct in percentages.iter_mut() {
        *pct = rng.random_range(POLL_BASE);
    }
    percentages[question.correct_index] += POLL_BOOST;
    percentages
}

/// Picks a position strictly after `position` to swap with, if one exists.
pub fn flip_target<R: Rng + ?Sized>(position: usize, deck_len: usize, rng: &mut R) -> Option<usize> {
    let first_later = position + 1;
    (first_later < deck_len).then(|| rng.random_range(first_later..deck_len))
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn question(correct_index: usize) -> Question {
        Question {
            prompt: "Which planet is known for its rings?".to_string(),
            options: ["Saturn", "Jupiter", "Mercury", "Venus"].map(String::from),
            correct_index,
        }
    }

    #[test]
    fn test_fifty_fifty_removes_two_wrong() {
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let q = question((seed % 4) as usize);
            let [a, b] = fifty_fifty(&q, &mut rng);
            assert_ne!(a, b);
            assert!(a < b);
            assert!(!q.is_correct(a) && !q.is_correct(b));
        }
    }

    #[test]
    fn test_fifty_fifty_covers_every_pair() {
        let q = question(0);
        let mut seen = std::collections::HashSet::new();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..300 {
            seen.insert(fifty_fifty(&q, &mut rng));
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn test_audience_poll_ranges() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let q = question(2);
            let poll = audience_poll(&q, &mut rng);
            for (i, pct) in poll.iter().enumerate() {
                if i == 2 {
                    assert!((55..=70).contains(pct));
                } else {
                    assert!((5..=20).contains(pct));
                }
            }
        }
    }

    #[test]
    fn test_flip_target_strictly_later() {
        let mut rng = StdRng::seed_from_u64(3);
        for position in 0..9 {
            for _ in 0..50 {
                let target = flip_target(position, 10, &mut rng).unwrap();
                assert!(target > position && target < 10);
            }
        }
        assert_eq!(flip_target(9, 10, &mut rng), None);
    }

    #[test]
    fn test_registry_claims_once() {
        let mut registry = LifelineRegistry::default();
        assert!(registry.claim(Lifeline::Flip));
        assert!(!registry.claim(Lifeline::Flip));
        assert!(registry.is_used(Lifeline::Flip));
        assert_eq!(
            registry.available().collect::<Vec<_>>(),
            vec![Lifeline::FiftyFifty, Lifeline::AudiencePoll]
        );
    }
}
