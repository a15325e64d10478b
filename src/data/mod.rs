mod loader;

pub use loader::{load_builtin_deck, parse_deck, LoadError, DECK_SIZE};
