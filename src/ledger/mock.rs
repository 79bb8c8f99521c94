use super::*;
use crate::Arbitrary;
use crate::Coins;
use crate::game::*;

/// Placeholder reward token contract.
pub const CONTRACT: &str = "0x1234567890123456789012345678901234567890";

/// A ledger that touches no chain. Hashes and balances are random.
#[derive(Debug, Clone, Copy)]
pub struct MockLedger {
    schedule: Schedule,
}

impl Default for MockLedger {
    fn default() -> Self {
        Self::from(Schedule::Tiered)
    }
}

impl From<Schedule> for MockLedger {
    fn from(schedule: Schedule) -> Self {
        Self { schedule }
    }
}

impl Ledger for MockLedger {
    fn reward(&self, address: &Address, outcome: Outcome) -> Receipt {
        let tokens = self.schedule.reward(outcome);
        log::info!("mock reward of {} tokens to {}", tokens, address);
        Receipt::Reward {
            tx: TxHash::random(),
            outcome,
            tokens,
        }
    }
    fn withdraw(&self, address: &Address, amount: i64) -> Result<Receipt, GameError> {
        let tokens = Coins::try_from(amount)
            .ok()
            .filter(|n| *n > 0)
            .ok_or_else(|| GameError::Validation("Invalid withdrawal amount".to_string()))?;
        log::info!("mock withdrawal of {} tokens to {}", tokens, address);
        Ok(Receipt::Withdrawal {
            tx: TxHash::random(),
            tokens,
        })
    }
    fn balance(&self, address: &Address) -> Holding {
        let balance = format!("{:.2}", rand::random_range(0.0..1000.0));
        Holding {
            address: address.clone(),
            balance: balance.clone(),
            stats: HoldingStats {
                wins: 0,
                total_rewards: balance,
                last_reward_time: chrono::Utc::now().timestamp_millis(),
            },
        }
    }
    fn deployment(&self) -> Deployment {
        Deployment {
            network: Network::base_sepolia(),
            contract_address: CONTRACT,
        }
    }
}
