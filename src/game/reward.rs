use super::*;
use crate::*;

/// Coin payout table for rounds and daily check-ins.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Schedule {
    /// +1 per win, nothing otherwise, +1 per check-in.
    Flat,
    /// +10 / +5 / +2 for win / draw / lose, +50 per check-in.
    #[default]
    Tiered,
}

impl Schedule {
    pub const fn reward(&self, outcome: Outcome) -> Coins {
        match (self, outcome) {
            (Self::Flat, Outcome::Win) => FLAT_WIN,
            (Self::Flat, Outcome::Draw) => FLAT_DRAW,
            (Self::Flat, Outcome::Lose) => FLAT_LOSE,
            (Self::Tiered, Outcome::Win) => TIERED_WIN,
            (Self::Tiered, Outcome::Draw) => TIERED_DRAW,
            (Self::Tiered, Outcome::Lose) => TIERED_LOSE,
        }
    }
    pub const fn daily(&self) -> Coins {
        match self {
            Self::Flat => FLAT_DAILY,
            Self::Tiered => TIERED_DAILY,
        }
    }
}

impl TryFrom<&str> for Schedule {
    type Error = GameError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "flat" => Ok(Self::Flat),
            "tiered" => Ok(Self::Tiered),
            _ => Err(GameError::Validation(format!(
                "unknown schedule '{}', expected flat or tiered",
                s
            ))),
        }
    }
}

impl std::fmt::Display for Schedule {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Flat => write!(f, "flat"),
            Self::Tiered => write!(f, "tiered"),
        }
    }
}

/// Everything a transition needs to know about payouts and limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    schedule: Schedule,
    daily: Coins,
    opening: Coins,
    cap: Coins,
}

impl Default for Rules {
    fn default() -> Self {
        Self::from(Schedule::default())
    }
}

impl From<Schedule> for Rules {
    fn from(schedule: Schedule) -> Self {
        Self {
            schedule,
            daily: schedule.daily(),
            opening: OPENING_BALANCE,
            cap: WITHDRAW_CAP,
        }
    }
}

impl Rules {
    pub fn with_opening(self, opening: Coins) -> Self {
        Self { opening, ..self }
    }
    pub fn with_daily(self, daily: Coins) -> Self {
        Self { daily, ..self }
    }
    pub fn with_cap(self, cap: Coins) -> Self {
        Self { cap, ..self }
    }
    pub fn schedule(&self) -> Schedule {
        self.schedule
    }
    pub fn reward(&self, outcome: Outcome) -> Coins {
        self.schedule.reward(outcome)
    }
    /// Daily check-in reward.
    pub fn daily(&self) -> Coins {
        self.daily
    }
    /// Balance a fresh session starts with.
    pub fn opening(&self) -> Coins {
        self.opening
    }
    /// Per-transaction withdrawal ceiling.
    pub fn cap(&self) -> Coins {
        self.cap
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiered_pays_every_outcome() {
        let rules = Rules::default();
        assert_eq!(rules.reward(Outcome::Win), 10);
        assert_eq!(rules.reward(Outcome::Draw), 5);
        assert_eq!(rules.reward(Outcome::Lose), 2);
        assert_eq!(rules.daily(), 50);
        assert_eq!(rules.opening(), 0);
        assert_eq!(rules.cap(), 1000);
    }
    #[test]
    fn flat_pays_only_wins() {
        let rules = Rules::from(Schedule::Flat);
        assert_eq!(rules.reward(Outcome::Win), 1);
        assert_eq!(rules.reward(Outcome::Draw), 0);
        assert_eq!(rules.reward(Outcome::Lose), 0);
        assert_eq!(rules.daily(), 1);
    }
    #[test]
    fn schedule_names() {
        assert_eq!(Schedule::try_from("Flat"), Ok(Schedule::Flat));
        assert_eq!(Schedule::try_from("tiered"), Ok(Schedule::Tiered));
        assert!(Schedule::try_from("generous").is_err());
    }
}
