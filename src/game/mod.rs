//! Game core: deck progression, lifelines and typed-command parsing.
//!
//! Nothing here touches the terminal. Every operation returns a
//! [`GameEvent`] describing the transition, or a [`SessionError`] when the
//! session refuses it.

mod input;
mod lifeline;
mod session;

pub use input::{Command, InputError};
pub use lifeline::{Lifeline, LifelineEffect, LifelineRegistry};
pub use session::{GameEvent, Outcome, Phase, Session, SessionError};
