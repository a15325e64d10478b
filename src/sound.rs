//! Best-effort sound cues rendered as the terminal bell.

use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    Theme,
    Correct,
    Wrong,
    Win,
}

impl Cue {
    fn rings(self) -> usize {
        match self {
            Cue::Theme | Cue::Correct => 1,
            Cue::Wrong => 2,
            Cue::Win => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Sound {
    enabled: bool,
}

impl Sound {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Never fails; a broken stdout just means no sound.
    pub fn play(&self, cue: Cue) {
        if !self.enabled {
            return;
        }

        let mut out = io::stdout();
        let result = out
            .write_all("\x07".repeat(cue.rings()).as_bytes())
            .and_then(|()| out.flush());
        if let Err(e) = result {
            tracing::debug!(?cue, error = %e, "sound cue dropped");
        }
    }
}
