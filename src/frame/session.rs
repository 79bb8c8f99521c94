use crate::game::*;
use chrono::NaiveDate;

/// Correlates a sequence of Frame requests to one in-memory game.
///
/// Minted from the wall clock in milliseconds, so two sessions opened in
/// the same millisecond collide.
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct SessionId(String);

impl SessionId {
    pub fn now() -> Self {
        Self(chrono::Utc::now().timestamp_millis().to_string())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for SessionId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for SessionId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which card a Frame session is showing.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    #[default]
    Start,
    Result,
    Balance,
    Stats,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::Result => write!(f, "result"),
            Self::Balance => write!(f, "balance"),
            Self::Stats => write!(f, "stats"),
        }
    }
}

/// One Frame player's game plus the card it is looking at.
///
/// Every transition is accepted from every phase, since a stale card can
/// still post any of its buttons.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Session {
    state: GameState,
    phase: Phase,
    notice: Option<String>,
}

impl From<GameState> for Session {
    fn from(state: GameState) -> Self {
        Self {
            state,
            phase: Phase::Start,
            notice: None,
        }
    }
}

impl Session {
    pub fn opening(rules: &Rules) -> Self {
        Self::from(GameState::opening(rules))
    }

    pub fn play(&mut self, player: Choice, computer: Choice, rules: &Rules) -> Round {
        let round = self.state.play(player, computer, rules);
        self.phase = Phase::Result;
        self.notice = None;
        round
    }

    pub fn restart(&mut self) {
        self.state.restart();
        self.phase = Phase::Start;
        self.notice = None;
    }

    pub fn balance(&mut self) {
        self.phase = Phase::Balance;
    }

    /// Claims the daily reward and leaves a notice on the balance card.
    pub fn reward(&mut self, today: NaiveDate, rules: &Rules) -> Claim {
        let claim = self.state.claim(today, rules);
        self.notice = Some(match claim {
            Claim::Claimed(n) => format!("+{} coins claimed!", n),
            Claim::AlreadyClaimed => "Already claimed today!".to_string(),
        });
        self.phase = Phase::Balance;
        claim
    }

    pub fn stats(&mut self) {
        self.phase = Phase::Stats;
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }
    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }
}
