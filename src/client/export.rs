use crate::Coins;
use crate::game::*;
use chrono::DateTime;
use chrono::NaiveDate;
use chrono::Utc;

/// Portable backup of a player's record.
///
/// Every field is optional on import; absent fields keep their current value.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Export {
    #[serde(default)]
    balance: Option<Coins>,
    #[serde(default)]
    last_checkin_date: Option<NaiveDate>,
    #[serde(default)]
    game_stats: Option<Stats>,
    #[serde(default)]
    export_date: Option<DateTime<Utc>>,
}

impl From<(&GameState, DateTime<Utc>)> for Export {
    fn from((state, at): (&GameState, DateTime<Utc>)) -> Self {
        Self {
            balance: Some(state.balance()),
            last_checkin_date: state.last_checkin_date(),
            game_stats: Some(*state.stats()),
            export_date: Some(at),
        }
    }
}

impl TryFrom<&str> for Export {
    type Error = GameError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        serde_json::from_str(s).map_err(|e| GameError::Validation(format!("invalid backup: {}", e)))
    }
}

impl Export {
    /// Overlays this backup onto `state`.
    pub fn merge(&self, state: &GameState) -> GameState {
        let mut merged = GameState::from((
            self.balance.unwrap_or(state.balance()),
            self.last_checkin_date.or(state.last_checkin_date()),
            self.game_stats.unwrap_or(*state.stats()),
        ));
        merged.sanitize();
        merged
    }
    pub fn export_date(&self) -> Option<DateTime<Utc>> {
        self.export_date
    }
}
