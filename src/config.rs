//! Runtime settings assembled from the command line.

use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;

/// Delays between presentation steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    pub welcome: Duration,
    pub first_question: Duration,
    pub reveal_options: Duration,
    pub reveal_answer: Duration,
    pub after_correct: Duration,
    pub after_wrong: Duration,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            welcome: Duration::from_millis(400),
            first_question: Duration::from_millis(1400),
            reveal_options: Duration::from_millis(400),
            reveal_answer: Duration::from_millis(700),
            after_correct: Duration::from_millis(1400),
            after_wrong: Duration::from_millis(1200),
        }
    }
}

impl Pacing {
    /// No delays at all; every step fires on the next tick.
    pub fn instant() -> Self {
        Self {
            welcome: Duration::ZERO,
            first_question: Duration::ZERO,
            reveal_options: Duration::ZERO,
            reveal_answer: Duration::ZERO,
            after_correct: Duration::ZERO,
            after_wrong: Duration::ZERO,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Seed for the shuffle, lifelines and confetti. `None` uses OS entropy.
    pub seed: Option<u64>,
    /// Time to type one character of a chat message.
    pub typing_speed: Duration,
    /// Ring the terminal bell for sound cues.
    pub bell: bool,
    pub pacing: Pacing,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            typing_speed: Duration::from_millis(6),
            bell: false,
            pacing: Pacing::default(),
        }
    }
}

impl GameConfig {
    /// Independent random stream `stream`, reproducible when seeded.
    pub fn rng(&self, stream: u64) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(stream.wrapping_mul(0x9E37_79B9_7F4A_7C15))),
            None => StdRng::from_os_rng(),
        }
    }
}
