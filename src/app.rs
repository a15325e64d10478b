//! Presentation adapter between the game core and the terminal UI.
//!
//! [`App`] owns the [`Session`] and reacts to the [`GameEvent`]s it returns:
//! it writes chat messages, restyles buttons, drives confetti and schedules
//! the pacing delays on a [`Timeline`]. All time is passed in explicitly so
//! the adapter can be driven without a clock.

use std::time::{Duration, Instant};

use crate::anim::{ChatLog, Confetti};
use crate::config::GameConfig;
use crate::game::{
    Command, GameEvent, InputError, Lifeline, LifelineEffect, Outcome, Session, SessionError,
};
use crate::models::{format_rupees, option_label, NUM_OPTIONS};
use crate::sound::{Cue, Sound};
use crate::timeline::Timeline;

/// Random stream used for confetti, separate from the session's.
pub const CONFETTI_STREAM: u64 = 1;

const MAX_INPUT_LEN: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionStyle {
    /// Not revealed yet.
    Hidden,
    Normal,
    /// Removed by fifty-fifty.
    Eliminated,
    /// Locked in, waiting for the reveal.
    Selected,
    Correct,
    Wrong,
}

/// A clickable button on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Option(usize),
    Lifeline(Lifeline),
}

/// Final result shown in the end-of-game popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ending {
    pub outcome: Outcome,
    pub winnings: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Welcome,
    PresentQuestion,
    RevealOptions,
    ResolveAnswer,
    Advance,
}

// Clicks on dead buttons are silent; typed input always gets a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Source {
    Click,
    Typed,
}

pub struct App {
    session: Session,
    config: GameConfig,
    chat: ChatLog,
    confetti: Confetti,
    timeline: Timeline<Action>,
    sound: Sound,
    option_styles: [OptionStyle; NUM_OPTIONS],
    options_revealed: bool,
    /// Set once the first question has been posted to the chat.
    question_presented: bool,
    input: String,
    ending: Option<Ending>,
    last_tick: Option<Instant>,
    pub should_quit: bool,
}

impl App {
    pub fn new(session: Session, config: GameConfig) -> Self {
        Self {
            chat: ChatLog::new(config.typing_speed),
            confetti: Confetti::new(config.rng(CONFETTI_STREAM)),
            sound: Sound::new(config.bell),
            session,
            config,
            timeline: Timeline::new(),
            option_styles: [OptionStyle::Hidden; NUM_OPTIONS],
            options_revealed: false,
            question_presented: false,
            input: String::new(),
            ending: None,
            last_tick: None,
            should_quit: false,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn chat(&self) -> &ChatLog {
        &self.chat
    }

    pub fn confetti(&self) -> &Confetti {
        &self.confetti
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn option_style(&self, option: usize) -> OptionStyle {
        self.option_styles[option]
    }

    pub fn options_revealed(&self) -> bool {
        self.options_revealed
    }

    pub fn ending(&self) -> Option<Ending> {
        self.ending
    }

    /// Schedules the welcome message and the first question.
    pub fn start(&mut self, now: Instant) {
        self.last_tick = Some(now);
        self.sound.play(Cue::Theme);
        let pacing = self.config.pacing;
        self.timeline.schedule(now + pacing.welcome, Action::Welcome);
        self.timeline
            .schedule(now + pacing.first_question, Action::PresentQuestion);
    }

    /// Advances animations and fires every pacing action that is due.
    pub fn tick(&mut self, now: Instant) {
        let elapsed = self
            .last_tick
            .map_or(Duration::ZERO, |last| now.saturating_duration_since(last));
        self.last_tick = Some(now);

        self.chat.tick(elapsed);
        self.confetti.step();

        for action in self.timeline.due(now) {
            self.perform(action, now);
        }
    }

    pub fn push_input(&mut self, c: char) {
        if self.input.chars().count() < MAX_INPUT_LEN {
            self.input.push(c);
        }
    }

    pub fn pop_input(&mut self) {
        self.input.pop();
    }

    /// Handles the line in the text entry, then clears it.
    pub fn submit_input(&mut self, now: Instant) {
        let line = std::mem::take(&mut self.input);
        if self.ending.is_some() {
            return;
        }

        match Command::parse(&line) {
            Ok(Command::Answer(option)) => self.answer(option, Source::Typed, now),
            Ok(Command::Lifeline(lifeline)) => self.lifeline(lifeline, Source::Typed, now),
            Ok(Command::Quit) => self.quit(now),
            Err(InputError::Empty) => {}
            Err(InputError::Unknown(text)) => {
                tracing::debug!(%text, "unrecognised input");
                self.chat
                    .post("\nPlease enter a valid option (a/b/c/d) or click one of the buttons.");
            }
        }
    }

    pub fn click(&mut self, target: ClickTarget, now: Instant) {
        if self.ending.is_some() {
            return;
        }

        match target {
            ClickTarget::Option(option) => self.answer(option, Source::Click, now),
            ClickTarget::Lifeline(lifeline) => self.lifeline(lifeline, Source::Click, now),
        }
    }

    /// Lifeline from a key binding; answered like typed input.
    pub fn use_lifeline(&mut self, lifeline: Lifeline, now: Instant) {
        self.lifeline(lifeline, Source::Typed, now);
    }

    /// Dismisses the end-of-game popup.
    pub fn dismiss(&mut self) {
        if self.ending.is_some() {
            self.should_quit = true;
        }
    }

    pub fn close(&mut self) {
        self.should_quit = true;
    }

    fn answer(&mut self, option: usize, source: Source, now: Instant) {
        if !self.options_revealed {
            if source == Source::Typed {
                self.chat.post("\nHold on, the options are not up yet.");
            }
            return;
        }

        match self.session.select(option) {
            Ok(event) => self.apply(event, now),
            Err(SessionError::Eliminated(_)) if source == Source::Typed => {
                self.chat.post("\nThat option is disabled by lifeline.");
            }
            Err(e) => tracing::debug!(option, error = %e, "selection ignored"),
        }
    }

    fn lifeline(&mut self, lifeline: Lifeline, source: Source, now: Instant) {
        if self.ending.is_some() {
            return;
        }
        if !self.question_presented {
            if source == Source::Typed {
                self.chat.post("\nHold on, the question is not up yet.");
            }
            return;
        }

        match self.session.use_lifeline(lifeline) {
            Ok(event) => self.apply(event, now),
            Err(SessionError::LifelineUsed(used)) => {
                self.chat.post(format!("\nLifeline '{}' already used.", used));
            }
            Err(SessionError::NotAwaiting) if source == Source::Typed => {
                self.chat.post("\nHold on, your answer is locked in.");
            }
            Err(e) => tracing::debug!(%lifeline, error = %e, "lifeline ignored"),
        }
    }

    fn quit(&mut self, now: Instant) {
        match self.session.quit() {
            Ok(event) => self.apply(event, now),
            Err(e) => {
                tracing::debug!(error = %e, "quit ignored");
                self.chat.post("\nHold on, your answer is locked in.");
            }
        }
    }

    fn perform(&mut self, action: Action, now: Instant) {
        match action {
            Action::Welcome => self.chat.post("Welcome to Kaun Banega Crorepati!"),
            Action::PresentQuestion => {
                let event = self.session.presented();
                self.apply(event, now);
            }
            Action::RevealOptions => self.reveal_options(),
            Action::ResolveAnswer => match self.session.resolve() {
                Ok(event) => self.apply(event, now),
                Err(e) => tracing::debug!(error = %e, "nothing to resolve"),
            },
            Action::Advance => {
                self.confetti.stop();
                match self.session.advance() {
                    Ok(event) => self.apply(event, now),
                    Err(e) => tracing::debug!(error = %e, "nothing to advance"),
                }
            }
        }
    }

    fn apply(&mut self, event: GameEvent, now: Instant) {
        let pacing = self.config.pacing;

        match event {
            GameEvent::QuestionPresented { .. } => {
                self.question_presented = true;
                self.option_styles = [OptionStyle::Hidden; NUM_OPTIONS];
                self.options_revealed = false;
                self.post_question();
                self.timeline
                    .schedule(now + pacing.reveal_options, Action::RevealOptions);
            }
            GameEvent::AnswerLocked { chosen } => {
                self.option_styles[chosen] = OptionStyle::Selected;
                self.timeline
                    .schedule(now + pacing.reveal_answer, Action::ResolveAnswer);
            }
            GameEvent::RoundResolved {
                chosen,
                correct_index,
                correct,
                ..
            } => {
                if correct {
                    self.option_styles[chosen] = OptionStyle::Correct;
                    self.sound.play(Cue::Correct);
                    self.chat.post("\nCorrect!");
                    self.confetti.start();
                    self.timeline
                        .schedule(now + pacing.after_correct, Action::Advance);
                } else {
                    self.option_styles[chosen] = OptionStyle::Wrong;
                    self.option_styles[correct_index] = OptionStyle::Correct;
                    self.sound.play(Cue::Wrong);
                    self.chat.post("\nWrong answer.");
                    self.timeline
                        .schedule(now + pacing.after_wrong, Action::Advance);
                }
            }
            GameEvent::LifelineUsed(effect) => self.show_lifeline(effect),
            GameEvent::GameOver { outcome, winnings } => self.finish(outcome, winnings),
        }
    }

    fn show_lifeline(&mut self, effect: LifelineEffect) {
        match effect {
            LifelineEffect::FiftyFifty { eliminated } => {
                if self.options_revealed {
                    for option in eliminated {
                        self.option_styles[option] = OptionStyle::Eliminated;
                    }
                }
                self.chat.post("\n50-50 used. Two wrong options removed.");
            }
            LifelineEffect::AudiencePoll { percentages } => {
                let question = self.session.current_question();
                let mut msg = String::from("\nAudience Poll:");
                for (i, pct) in percentages.iter().enumerate() {
                    msg.push_str(&format!(
                        "\n{}: {} — {}%",
                        option_label(i),
                        question.options[i],
                        pct
                    ));
                }
                self.chat.post(msg);
            }
            LifelineEffect::Flip { .. } => {
                self.chat
                    .post("\nFlip used — switching to a different question.");
                self.post_question();
                self.reveal_options();
            }
        }
    }

    fn finish(&mut self, outcome: Outcome, winnings: u64) {
        self.timeline.clear();
        self.options_revealed = false;

        match outcome {
            Outcome::Completed => {
                self.chat
                    .post("\nCONGRATULATIONS! You completed all questions!");
                self.sound.play(Cue::Win);
                self.confetti.start();
            }
            Outcome::Quit => {
                self.chat
                    .post("\nYou chose to quit. Thank you for playing!");
                self.chat
                    .post(format!("\nGame Over! You won {}", format_rupees(winnings)));
            }
            Outcome::WrongAnswer => {
                self.chat
                    .post(format!("\nGame Over! You won {}", format_rupees(winnings)));
            }
        }

        self.ending = Some(Ending { outcome, winnings });
    }

    fn post_question(&mut self) {
        let question = self.session.current_question();
        let options = question
            .options
            .iter()
            .enumerate()
            .map(|(i, option)| format!("{}. {}", option_label(i), option))
            .collect::<Vec<_>>()
            .join("\n");

        let text = format!(
            "\nQ{} for {}\n\n{}\n\n{}\n\n(Type a/b/c/d or click an option)",
            self.session.question_number(),
            format_rupees(self.session.prize_at_stake()),
            question.prompt,
            options
        );
        self.chat.post(text);
    }

    fn reveal_options(&mut self) {
        for (option, style) in self.option_styles.iter_mut().enumerate() {
            *style = if self.session.is_eliminated(option) {
                OptionStyle::Eliminated
            } else {
                OptionStyle::Normal
            };
        }
        self.options_revealed = true;
    }
}
