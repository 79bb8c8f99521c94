//! The shared game-state machine.
//!
//! Pure pieces, leaf-first:
//!
//! - [`Choice`] and [`Outcome::resolve`]: who won
//! - [`Schedule`] and [`Rules`]: how many coins that is worth
//! - [`Stats`]: lifetime counters and streaks
//! - [`GameState`]: balance, check-in gate, withdrawal validator
mod choice;
mod error;
mod outcome;
mod reward;
mod state;
mod stats;

pub use choice::*;
pub use error::*;
pub use outcome::*;
pub use reward::*;
pub use state::*;
pub use stats::*;
