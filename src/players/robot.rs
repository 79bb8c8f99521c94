use super::*;
use crate::Arbitrary;
use crate::game::Choice;

/// Computer opponent drawing uniformly from the three moves.
#[derive(Debug, Default, Clone, Copy)]
pub struct Robot;

impl Opponent for Robot {
    fn throw(&self) -> Choice {
        Choice::random()
    }
}

/// An opponent that always plays the same move.
impl Opponent for Choice {
    fn throw(&self) -> Choice {
        *self
    }
}

/// Cycles through a fixed sequence of moves.
#[derive(Debug)]
pub struct Script {
    moves: Vec<Choice>,
    next: AtomicUsize,
}

impl From<Vec<Choice>> for Script {
    fn from(moves: Vec<Choice>) -> Self {
        Self {
            moves,
            next: AtomicUsize::new(0),
        }
    }
}

impl Opponent for Script {
    fn throw(&self) -> Choice {
        match self.moves.len() {
            0 => Choice::random(),
            n => self.moves[self.next.fetch_add(1, Ordering::Relaxed) % n],
        }
    }
}

use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
