use crate::game::GameError;

/// Client views. Switching screens never touches game state.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Screen {
    #[default]
    Home,
    Game,
    Leaderboard,
    Checkin,
    Stats,
    Withdraw,
}

impl Screen {
    pub const fn all() -> [Self; 6] {
        [
            Self::Home,
            Self::Game,
            Self::Leaderboard,
            Self::Checkin,
            Self::Stats,
            Self::Withdraw,
        ]
    }
}

impl TryFrom<&str> for Screen {
    type Error = GameError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "home" => Ok(Self::Home),
            "game" => Ok(Self::Game),
            "leaderboard" => Ok(Self::Leaderboard),
            "checkin" => Ok(Self::Checkin),
            "stats" => Ok(Self::Stats),
            "withdraw" => Ok(Self::Withdraw),
            _ => Err(GameError::UnknownCommand(format!("show {}", s.trim()))),
        }
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Home => write!(f, "home"),
            Self::Game => write!(f, "game"),
            Self::Leaderboard => write!(f, "leaderboard"),
            Self::Checkin => write!(f, "checkin"),
            Self::Stats => write!(f, "stats"),
            Self::Withdraw => write!(f, "withdraw"),
        }
    }
}
