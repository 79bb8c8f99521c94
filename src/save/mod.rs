//! Persistence for the client variant.
//!
//! A [`Storage`] is a flat string key/value store; a [`Record`] lays one
//! player's [`GameState`](crate::game::GameState) out over it.
mod disk;
mod memory;
mod record;
mod storage;

pub use disk::*;
pub use memory::*;
pub use record::*;
pub use storage::*;
