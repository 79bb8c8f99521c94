//! Reward ledger capability.
//!
//! Game results and withdrawals can be mirrored to an on-chain token. Only a
//! mock implementation exists; it answers with random transaction hashes and
//! never leaves the process.
mod address;
mod mock;
mod network;
mod receipt;

#[cfg(feature = "server")]
mod handlers;

pub use address::*;
#[cfg(feature = "server")]
pub use handlers::*;
pub use mock::*;
pub use network::*;
pub use receipt::*;

use crate::game::GameError;
use crate::game::Outcome;

/// Token payouts for game results.
pub trait Ledger: Send + Sync {
    fn reward(&self, address: &Address, outcome: Outcome) -> Receipt;
    fn withdraw(&self, address: &Address, amount: i64) -> Result<Receipt, GameError>;
    fn balance(&self, address: &Address) -> Holding;
    fn deployment(&self) -> Deployment;
}
