mod robot;

pub use robot::*;

use crate::game::Choice;

/// Whoever picks the computer's move.
pub trait Opponent: Send + Sync {
    fn throw(&self) -> Choice;
}
