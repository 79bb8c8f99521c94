use super::*;
use crate::Coins;
use chrono::NaiveDate;

/// The ephemeral record of the most recent play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Round {
    player: Choice,
    computer: Choice,
    outcome: Outcome,
    reward: Coins,
}

impl Round {
    pub fn player(&self) -> Choice {
        self.player
    }
    pub fn computer(&self) -> Choice {
        self.computer
    }
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }
    pub fn reward(&self) -> Coins {
        self.reward
    }
}

/// Result of a daily check-in attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Claim {
    /// Reward credited; carries the amount.
    Claimed(Coins),
    /// Today's reward was already taken. Nothing changed.
    AlreadyClaimed,
}

/// One player's balance, check-in day and counters.
///
/// All transitions are pure with respect to the outside world: the
/// computer's move and the current day are parameters. Each transition
/// either applies fully or leaves the state untouched.
#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    #[serde(default)]
    balance: Coins,
    #[serde(default)]
    last_checkin_date: Option<NaiveDate>,
    #[serde(default)]
    stats: Stats,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    round: Option<Round>,
}

impl From<(Coins, Option<NaiveDate>, Stats)> for GameState {
    fn from((balance, last_checkin_date, stats): (Coins, Option<NaiveDate>, Stats)) -> Self {
        Self {
            balance,
            last_checkin_date,
            stats,
            round: None,
        }
    }
}

impl GameState {
    /// A brand new player under `rules`.
    pub fn opening(rules: &Rules) -> Self {
        Self::from((rules.opening(), None, Stats::default()))
    }

    pub fn play(&mut self, player: Choice, computer: Choice, rules: &Rules) -> Round {
        let outcome = Outcome::resolve(player, computer);
        let reward = rules.reward(outcome);
        let round = Round {
            player,
            computer,
            outcome,
            reward,
        };
        self.stats.record(outcome);
        self.credit(reward);
        self.round = Some(round);
        round
    }

    /// Credits the daily reward unless one was already claimed on `today`.
    /// Days compare by calendar date, not by elapsed time.
    pub fn claim(&mut self, today: NaiveDate, rules: &Rules) -> Claim {
        if self.last_checkin_date == Some(today) {
            Claim::AlreadyClaimed
        } else {
            self.credit(rules.daily());
            self.last_checkin_date = Some(today);
            Claim::Claimed(rules.daily())
        }
    }

    /// Debits `amount` and returns the new balance.
    pub fn withdraw(&mut self, amount: i64, rules: &Rules) -> Result<Coins, GameError> {
        let amount = Self::validate(amount, self.balance, rules)?;
        self.balance -= amount;
        Ok(self.balance)
    }

    /// Checks a withdrawal against the balance and the per-transaction cap.
    pub fn validate(amount: i64, balance: Coins, rules: &Rules) -> Result<Coins, GameError> {
        let amount = Coins::try_from(amount)
            .ok()
            .filter(|n| *n > 0)
            .ok_or_else(|| {
                GameError::Validation("Please enter a valid amount greater than 0".to_string())
            })?;
        if amount > balance {
            return Err(GameError::Validation(format!(
                "Insufficient balance. Available: {} coins",
                balance
            )));
        }
        if amount > rules.cap() {
            return Err(GameError::Validation(format!(
                "Maximum withdrawal is {} coins per transaction",
                rules.cap()
            )));
        }
        Ok(amount)
    }

    pub fn credit(&mut self, amount: Coins) {
        self.balance = self.balance.saturating_add(amount);
    }

    /// Clears the last round, keeping balance and counters.
    pub fn restart(&mut self) {
        self.round = None;
    }

    /// Full wipe back to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Restores counter invariants on state read from outside.
    pub fn sanitize(&mut self) {
        self.stats = self.stats.repaired();
    }

    pub fn balance(&self) -> Coins {
        self.balance
    }
    pub fn last_checkin_date(&self) -> Option<NaiveDate> {
        self.last_checkin_date
    }
    pub fn stats(&self) -> &Stats {
        &self.stats
    }
    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }
    pub fn claimed_on(&self, today: NaiveDate) -> bool {
        self.last_checkin_date == Some(today)
    }
}
