use super::*;

/// Result of one round from the player's point of view.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Win,
    Lose,
    Draw,
}

impl Outcome {
    /// Resolves `player` against `computer`.
    /// Rock beats scissors, paper beats rock, scissors beats paper.
    pub fn resolve(player: Choice, computer: Choice) -> Self {
        if player == computer {
            Self::Draw
        } else if player.beats() == computer {
            Self::Win
        } else {
            Self::Lose
        }
    }
    /// The same round seen from the other side.
    pub fn flip(&self) -> Self {
        match self {
            Self::Win => Self::Lose,
            Self::Lose => Self::Win,
            Self::Draw => Self::Draw,
        }
    }
}

impl From<(Choice, Choice)> for Outcome {
    fn from((player, computer): (Choice, Choice)) -> Self {
        Self::resolve(player, computer)
    }
}

/// Accepts the wire names used by reward requests; `tie` is an alias for `draw`.
impl TryFrom<&str> for Outcome {
    type Error = GameError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "win" => Ok(Self::Win),
            "lose" => Ok(Self::Lose),
            "draw" | "tie" => Ok(Self::Draw),
            _ => Err(GameError::Validation("Invalid game result".to_string())),
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Win => write!(f, "win"),
            Self::Lose => write!(f, "lose"),
            Self::Draw => write!(f, "draw"),
        }
    }
}
