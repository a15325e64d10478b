//! Cosmetic animation state driven by the frame tick.

mod confetti;
mod typing;

pub use confetti::{Confetti, CANVAS_HEIGHT, CANVAS_WIDTH};
pub use typing::ChatLog;
