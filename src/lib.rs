//! # kbc-quiz
//!
//! A terminal quiz show in the style of "Kaun Banega Crorepati": ten
//! shuffled questions, a prize ladder and three one-shot lifelines.
//!
//! The [`game`] module is the pure state machine; [`App`] adapts its events
//! to the terminal UI.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use kbc_quiz::{GameConfig, GameError, Show};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), GameError> {
//!     let show = Show::new(GameConfig::default())?;
//!     let ending = show.run().await?;
//!     println!("{:?}", ending);
//!     Ok(())
//! }
//! ```

mod anim;
mod app;
mod config;
mod data;
pub mod game;
mod models;
mod sound;
pub mod terminal;
mod timeline;
mod ui;

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{
    Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use futures_util::StreamExt;
use ratatui::layout::Rect;
use tokio::time::MissedTickBehavior;

pub use app::{App, ClickTarget, Ending, OptionStyle};
pub use config::{GameConfig, Pacing};
pub use data::{load_builtin_deck, parse_deck, LoadError, DECK_SIZE};
pub use game::{Outcome, Session, SessionError};
pub use models::{format_rupees, PrizeLadder, Question};

/// Random stream used for the deck shuffle and lifelines.
const SESSION_STREAM: u64 = 0;

/// Frame tick for typing, confetti and pacing timers.
const FRAME_INTERVAL: Duration = Duration::from_millis(30);

/// Error type for running the show.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("failed to load questions: {0}")]
    Load(#[from] LoadError),
    #[error("failed to start session: {0}")]
    Session(#[from] SessionError),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// One game, ready to take over the terminal.
pub struct Show {
    app: App,
}

impl Show {
    /// Builds a session over the built-in deck and default ladder.
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        let deck = load_builtin_deck()?;
        let session = Session::new(deck, PrizeLadder::default(), config.rng(SESSION_STREAM))?;
        tracing::info!(seed = ?config.seed, questions = session.deck_len(), "session started");
        Ok(Self {
            app: App::new(session, config),
        })
    }

    /// Run the game in the terminal.
    ///
    /// Returns the ending if the game reached one, or `None` if the player
    /// closed it early.
    pub async fn run(mut self) -> Result<Option<Ending>, GameError> {
        let mut term = terminal::init()?;
        let result = run_event_loop(&mut term, &mut self.app).await;
        terminal::restore()?;
        result.map(|()| self.app.ending())
    }
}

async fn run_event_loop(terminal: &mut terminal::GameTerminal, app: &mut App) -> Result<(), GameError> {
    let mut events = EventStream::new();
    let mut frames = tokio::time::interval(FRAME_INTERVAL);
    frames.set_missed_tick_behavior(MissedTickBehavior::Skip);

    app.start(Instant::now());

    while !app.should_quit {
        terminal.draw(|frame| ui::render(frame, app))?;

        tokio::select! {
            _ = frames.tick() => app.tick(Instant::now()),
            event = events.next() => match event {
                Some(Ok(event)) => {
                    let size = terminal.size()?;
                    let area = Rect::new(0, 0, size.width, size.height);
                    handle_event(app, event, area);
                }
                Some(Err(e)) => return Err(e.into()),
                None => break,
            },
        }
    }

    Ok(())
}

fn handle_event(app: &mut App, event: Event, area: Rect) {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
        Event::Mouse(mouse) => handle_mouse(app, mouse, area),
        _ => {}
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Esc
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
    {
        app.close();
        return;
    }

    if app.ending().is_some() {
        app.dismiss();
        return;
    }

    let now = Instant::now();
    match key.code {
        KeyCode::Char(_) if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {}
        KeyCode::Char(c) => app.push_input(c),
        KeyCode::Backspace => app.pop_input(),
        KeyCode::Enter => app.submit_input(now),
        KeyCode::F(n @ 1..=3) => app.use_lifeline(game::Lifeline::ALL[usize::from(n) - 1], now),
        _ => {}
    }
}

fn handle_mouse(app: &mut App, mouse: MouseEvent, area: Rect) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }

    if app.ending().is_some() {
        app.dismiss();
        return;
    }

    if let Some(target) = ui::ScreenLayout::new(area).hit_test(mouse.column, mouse.row) {
        app.click(target, Instant::now());
    }
}
