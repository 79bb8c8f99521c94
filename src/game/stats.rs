use super::*;

/// Lifetime round counters.
///
/// Invariants: `games_played = wins + losses + draws` and
/// `best_streak >= win_streak`. Deserialization fills missing fields with
/// zero; [`Stats::repaired`] restores the invariants on loaded data.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Stats {
    games_played: u64,
    wins: u64,
    losses: u64,
    draws: u64,
    win_streak: u64,
    best_streak: u64,
}

impl Stats {
    /// Counters saturate rather than wrap; loaded records may hold any value.
    pub fn record(&mut self, outcome: Outcome) {
        self.games_played = self.games_played.saturating_add(1);
        match outcome {
            Outcome::Win => {
                self.wins = self.wins.saturating_add(1);
                self.win_streak = self.win_streak.saturating_add(1);
                self.best_streak = self.best_streak.max(self.win_streak);
            }
            Outcome::Lose => {
                self.losses = self.losses.saturating_add(1);
                self.win_streak = 0;
            }
            Outcome::Draw => {
                self.draws = self.draws.saturating_add(1);
            }
        }
    }
    pub fn repaired(self) -> Self {
        Self {
            games_played: self
                .wins
                .saturating_add(self.losses)
                .saturating_add(self.draws),
            best_streak: self.best_streak.max(self.win_streak),
            ..self
        }
    }
    /// Rounded percentage of games won; zero before the first game.
    pub fn win_rate(&self) -> u64 {
        match self.games_played {
            0 => 0,
            n => {
                let (wins, n) = (self.wins.min(n) as u128, n as u128);
                ((wins * 100 + n / 2) / n) as u64
            }
        }
    }
    pub fn games_played(&self) -> u64 {
        self.games_played
    }
    pub fn wins(&self) -> u64 {
        self.wins
    }
    pub fn losses(&self) -> u64 {
        self.losses
    }
    pub fn draws(&self) -> u64 {
        self.draws
    }
    pub fn win_streak(&self) -> u64 {
        self.win_streak
    }
    pub fn best_streak(&self) -> u64 {
        self.best_streak
    }
}
