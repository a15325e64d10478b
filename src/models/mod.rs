mod ladder;
mod question;

pub use ladder::{format_rupees, PrizeLadder};
pub use question::{option_label, Question, NUM_OPTIONS};
