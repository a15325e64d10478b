//! Progression tracker: the game session state machine.

use std::collections::BTreeSet;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::models::{PrizeLadder, Question, NUM_OPTIONS};

use super::lifeline::{
    audience_poll, fifty_fifty, flip_target, Lifeline, LifelineEffect, LifelineRegistry,
};

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every question answered correctly.
    Completed,
    WrongAnswer,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingAnswer,
    AnswerLocked { chosen: usize },
    RoundResolved { chosen: usize, correct: bool },
    GameOver(Outcome),
}

/// A transition the session went through, for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    QuestionPresented { number: usize, prize: u64 },
    AnswerLocked { chosen: usize },
    RoundResolved {
        chosen: usize,
        correct_index: usize,
        correct: bool,
        winnings: u64,
    },
    LifelineUsed(LifelineEffect),
    GameOver { outcome: Outcome, winnings: u64 },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("not waiting for an answer")]
    NotAwaiting,
    #[error("option {0} does not exist")]
    InvalidOption(usize),
    #[error("option {0} was eliminated by a lifeline")]
    Eliminated(usize),
    #[error("lifeline '{0}' already used")]
    LifelineUsed(Lifeline),
    #[error("the game is over")]
    GameOver,
    #[error("deck is empty")]
    EmptyDeck,
    #[error("deck has {deck} questions but the ladder has {ladder} rungs")]
    LadderMismatch { deck: usize, ladder: usize },
    #[error("question {number} has correct_index {index}, expected 0..4")]
    BadAnswerIndex { number: usize, index: usize },
}

/// One play-through: a shuffled deck walked strictly forward.
pub struct Session<R = StdRng> {
    deck: Vec<Question>,
    ladder: PrizeLadder,
    position: usize,
    winnings: u64,
    lifelines: LifelineRegistry,
    eliminated: BTreeSet<usize>,
    phase: Phase,
    rng: R,
}

impl Session<StdRng> {
    /// Seeded sessions replay identically; `None` draws from the OS.
    pub fn seeded(
        deck: Vec<Question>,
        ladder: PrizeLadder,
        seed: Option<u64>,
    ) -> Result<Self, SessionError> {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self::new(deck, ladder, rng)
    }
}

impl<R: Rng> Session<R> {
    /// Shuffles `deck` once and waits on its first question.
    pub fn new(mut deck: Vec<Question>, ladder: PrizeLadder, mut rng: R) -> Result<Self, SessionError> {
        if deck.is_empty() {
            return Err(SessionError::EmptyDeck);
        }
        if deck.len() != ladder.len() {
            return Err(SessionError::LadderMismatch {
                deck: deck.len(),
                ladder: ladder.len(),
            });
        }
        if let Some((i, q)) = deck
            .iter()
            .enumerate()
            .find(|(_, q)| q.correct_index >= NUM_OPTIONS)
        {
            return Err(SessionError::BadAnswerIndex {
                number: i + 1,
                index: q.correct_index,
            });
        }

        deck.shuffle(&mut rng);

        Ok(Self {
            deck,
            ladder,
            position: 0,
            winnings: 0,
            lifelines: LifelineRegistry::default(),
            eliminated: BTreeSet::new(),
            phase: Phase::AwaitingAnswer,
            rng,
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// 1-indexed number of the current question.
    pub fn question_number(&self) -> usize {
        self.position + 1
    }

    pub fn deck(&self) -> &[Question] {
        &self.deck
    }

    pub fn deck_len(&self) -> usize {
        self.deck.len()
    }

    pub fn current_question(&self) -> &Question {
        &self.deck[self.position]
    }

    pub fn winnings(&self) -> u64 {
        self.winnings
    }

    pub fn ladder(&self) -> &PrizeLadder {
        &self.ladder
    }

    /// Prize for answering the current question correctly.
    pub fn prize_at_stake(&self) -> u64 {
        self.ladder.prize(self.question_number())
    }

    pub fn lifelines(&self) -> &LifelineRegistry {
        &self.lifelines
    }

    pub fn eliminated(&self) -> &BTreeSet<usize> {
        &self.eliminated
    }

    pub fn is_eliminated(&self, option: usize) -> bool {
        self.eliminated.contains(&option)
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::GameOver(_))
    }

    pub fn presented(&self) -> GameEvent {
        GameEvent::QuestionPresented {
            number: self.question_number(),
            prize: self.prize_at_stake(),
        }
    }

    fn ensure_awaiting(&self) -> Result<(), SessionError> {
        match self.phase {
            Phase::AwaitingAnswer => Ok(()),
            Phase::GameOver(_) => Err(SessionError::GameOver),
            _ => Err(SessionError::NotAwaiting),
        }
    }

    /// Locks in `option` as the answer to the current question.
    pub fn select(&mut self, option: usize) -> Result<GameEvent, SessionError> {
        self.ensure_awaiting()?;
        if option >= NUM_OPTIONS {
            return Err(SessionError::InvalidOption(option));
        }
        if self.is_eliminated(option) {
            return Err(SessionError::Eliminated(option));
        }

        self.phase = Phase::AnswerLocked { chosen: option };
        tracing::debug!(question = self.question_number(), option, "answer locked");
        Ok(GameEvent::AnswerLocked { chosen: option })
    }

    /// Scores the locked answer and settles winnings.
    pub fn resolve(&mut self) -> Result<GameEvent, SessionError> {
        let chosen = match self.phase {
            Phase::AnswerLocked { chosen } => chosen,
            Phase::GameOver(_) => return Err(SessionError::GameOver),
            _ => return Err(SessionError::NotAwaiting),
        };

        let question = &self.deck[self.position];
        let correct = question.is_correct(chosen);
        let correct_index = question.correct_index;

        self.winnings = if correct {
            self.ladder.prize(self.position + 1)
        } else {
            // Falls back to the last rung cleared; prize(0) is zero.
            self.ladder.prize(self.position)
        };
        self.phase = Phase::RoundResolved { chosen, correct };

        tracing::info!(
            question = self.question_number(),
            chosen,
            correct,
            winnings = self.winnings,
            "round resolved"
        );

        Ok(GameEvent::RoundResolved {
            chosen,
            correct_index,
            correct,
            winnings: self.winnings,
        })
    }

    /// Moves past a resolved round: next question, or game over.
    pub fn advance(&mut self) -> Result<GameEvent, SessionError> {
        let correct = match self.phase {
            Phase::RoundResolved { correct, .. } => correct,
            Phase::GameOver(_) => return Err(SessionError::GameOver),
            _ => return Err(SessionError::NotAwaiting),
        };

        if !correct {
            return Ok(self.finish(Outcome::WrongAnswer));
        }
        if self.position + 1 >= self.deck.len() {
            return Ok(self.finish(Outcome::Completed));
        }

        self.position += 1;
        self.eliminated.clear();
        self.phase = Phase::AwaitingAnswer;
        tracing::info!(
            question = self.question_number(),
            prize = self.prize_at_stake(),
            "question presented"
        );
        Ok(self.presented())
    }

    /// Walks away with the current winnings.
    pub fn quit(&mut self) -> Result<GameEvent, SessionError> {
        self.ensure_awaiting()?;
        Ok(self.finish(Outcome::Quit))
    }

    fn finish(&mut self, outcome: Outcome) -> GameEvent {
        self.phase = Phase::GameOver(outcome);
        tracing::info!(?outcome, winnings = self.winnings, "game over");
        GameEvent::GameOver {
            outcome,
            winnings: self.winnings,
        }
    }

    pub fn use_lifeline(&mut self, lifeline: Lifeline) -> Result<GameEvent, SessionError> {
        self.ensure_awaiting()?;
        if !self.lifelines.claim(lifeline) {
            return Err(SessionError::LifelineUsed(lifeline));
        }

        let effect = match lifeline {
            Lifeline::FiftyFifty => {
                let eliminated = fifty_fifty(&self.deck[self.position], &mut self.rng);
                self.eliminated.extend(eliminated);
                LifelineEffect::FiftyFifty { eliminated }
            }
            Lifeline::AudiencePoll => LifelineEffect::AudiencePoll {
                percentages: audience_poll(&self.deck[self.position], &mut self.rng),
            },
            Lifeline::Flip => {
                let swapped_with = flip_target(self.position, self.deck.len(), &mut self.rng);
                if let Some(target) = swapped_with {
                    self.deck.swap(self.position, target);
                    self.eliminated.clear();
                }
                LifelineEffect::Flip { swapped_with }
            }
        };

        tracing::info!(%lifeline, question = self.question_number(), ?effect, "lifeline used");
        Ok(GameEvent::LifelineUsed(effect))
    }
}
