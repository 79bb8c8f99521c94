use super::*;
use crate::Arbitrary;
use crate::Coins;
use crate::game::Outcome;

/// A 32-byte transaction hash.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct TxHash([u8; 32]);

impl Arbitrary for TxHash {
    fn random() -> Self {
        Self(rand::random())
    }
}

impl std::fmt::Display for TxHash {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl serde::Serialize for TxHash {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// What the ledger did for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Receipt {
    Reward {
        tx: TxHash,
        outcome: Outcome,
        tokens: Coins,
    },
    Withdrawal {
        tx: TxHash,
        tokens: Coins,
    },
}

impl Receipt {
    pub fn tx(&self) -> TxHash {
        match self {
            Self::Reward { tx, .. } | Self::Withdrawal { tx, .. } => *tx,
        }
    }
    pub fn tokens(&self) -> Coins {
        match self {
            Self::Reward { tokens, .. } | Self::Withdrawal { tokens, .. } => *tokens,
        }
    }
    pub fn message(&self) -> String {
        match self {
            Self::Reward {
                outcome, tokens, ..
            } => format!("Player rewarded {} RPS tokens for {}", tokens, outcome),
            Self::Withdrawal { tokens, .. } => format!(
                "Successfully withdrew {} RPS tokens to Base network",
                tokens
            ),
        }
    }
    pub fn json(&self) -> serde_json::Value {
        match self {
            Self::Reward { tx, tokens, .. } => serde_json::json!({
                "success": true,
                "txHash": tx,
                "reward": tokens,
                "message": self.message(),
            }),
            Self::Withdrawal { tx, tokens } => serde_json::json!({
                "success": true,
                "txHash": tx,
                "amount": tokens,
                "message": self.message(),
            }),
        }
    }
}

/// Token holdings reported for an address.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    pub address: Address,
    pub balance: String,
    pub stats: HoldingStats,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HoldingStats {
    pub wins: u64,
    pub total_rewards: String,
    pub last_reward_time: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_prefixed_hex() {
        let hash = TxHash::random().to_string();
        assert_eq!(hash.len(), 66);
        assert!(hash.starts_with("0x"));
        assert!(hash[2..].bytes().all(|b| b.is_ascii_hexdigit()));
    }
    #[test]
    fn reward_json_shape() {
        let receipt = Receipt::Reward {
            tx: TxHash::random(),
            outcome: Outcome::Win,
            tokens: 10,
        };
        let json = receipt.json();
        assert_eq!(json["success"], true);
        assert_eq!(json["reward"], 10);
        assert_eq!(json["txHash"], receipt.tx().to_string());
        assert_eq!(json["message"], "Player rewarded 10 RPS tokens for win");
    }
}
