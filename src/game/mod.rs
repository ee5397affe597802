//! Game state
//!
//! The session state machine that drives a single game, and the keyboard
//! aggregate that accumulates the best-known status of every letter across
//! the session's guesses.

mod keyboard;
mod session;

pub use keyboard::Keyboard;
pub use session::{DEFAULT_MAX_GUESSES, GameError, GameSession, Guess, Outcome};
