use crate::game::*;

/// How a reply should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    AlreadyClaimed,
    Error,
    Info,
}

/// User-facing answer to one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    status: Status,
    message: String,
}

impl Reply {
    pub fn success(message: impl Into<String>) -> Self {
        Self::from((Status::Success, message.into()))
    }
    pub fn info(message: impl Into<String>) -> Self {
        Self::from((Status::Info, message.into()))
    }
    pub fn status(&self) -> Status {
        self.status
    }
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<(Status, String)> for Reply {
    fn from((status, message): (Status, String)) -> Self {
        Self { status, message }
    }
}

impl From<&GameError> for Reply {
    fn from(e: &GameError) -> Self {
        Self::from((Status::Error, e.to_string()))
    }
}

impl From<Claim> for Reply {
    fn from(claim: Claim) -> Self {
        match claim {
            Claim::Claimed(n) => Self::success(format!(
                "🎉 Daily reward claimed! +{} coins added to your balance.",
                n
            )),
            Claim::AlreadyClaimed => Self::from((
                Status::AlreadyClaimed,
                "You have already claimed your daily reward today!".to_string(),
            )),
        }
    }
}

impl From<Round> for Reply {
    fn from(round: Round) -> Self {
        let (player, computer) = (round.player(), round.computer());
        let message = match round.outcome() {
            Outcome::Win => format!(
                "🎉 You Win! {} beats {}. +{} coins!",
                player.name(),
                computer,
                round.reward()
            ),
            Outcome::Lose => format!(
                "😔 You Lose! {} beats {}. +{} coins.",
                computer.name(),
                player,
                round.reward()
            ),
            Outcome::Draw => format!(
                "🤝 It's a Draw! Both chose {}. +{} coins.",
                player,
                round.reward()
            ),
        };
        Self::success(message)
    }
}
