use super::*;
use crate::Arbitrary;

/// A player's move.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Choice {
    Rock,
    Paper,
    Scissors,
}

impl Choice {
    pub const fn all() -> [Self; 3] {
        [Self::Rock, Self::Paper, Self::Scissors]
    }
    /// The move this one defeats.
    pub const fn beats(&self) -> Self {
        match self {
            Self::Rock => Self::Scissors,
            Self::Paper => Self::Rock,
            Self::Scissors => Self::Paper,
        }
    }
    pub const fn emoji(&self) -> &'static str {
        match self {
            Self::Rock => "🗿",
            Self::Paper => "📄",
            Self::Scissors => "✂️",
        }
    }
    /// Exact lowercase name only, as sent by Frame buttons.
    pub fn named(s: &str) -> Result<Self, GameError> {
        Self::all()
            .into_iter()
            .find(|choice| choice.to_string() == s)
            .ok_or_else(|| GameError::InvalidChoice(s.to_string()))
    }
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Rock => "Rock",
            Self::Paper => "Paper",
            Self::Scissors => "Scissors",
        }
    }
}

impl Arbitrary for Choice {
    fn random() -> Self {
        Self::all()[rand::random_range(0..3)]
    }
}

impl TryFrom<&str> for Choice {
    type Error = GameError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "rock" | "r" => Ok(Self::Rock),
            "paper" | "p" => Ok(Self::Paper),
            "scissors" | "s" => Ok(Self::Scissors),
            _ => Err(GameError::InvalidChoice(s.to_string())),
        }
    }
}

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Rock => "rock",
                Self::Paper => "paper",
                Self::Scissors => "scissors",
            }
        )
    }
}
