use super::*;
use crate::Coins;
use crate::game::*;

/// Every action a client view can dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Play(Choice),
    Checkin,
    Withdraw(i64),
    Show(Screen),
    Restart,
    Reset,
    Add(Coins),
    Share,
    Export,
    Import(String),
    Sync,
    Help,
    Quit,
}

impl Command {
    pub fn help() -> &'static str {
        "\
play <rock|paper|scissors>  play a round (or just: rock, paper, scissors)
checkin                     claim the daily reward
withdraw <amount>           withdraw coins (1..=1000 per transaction)
show <screen>               home, game, leaderboard, checkin, stats, withdraw
restart                     clear the last round
share                       share your score
export                      print a backup of your record
import <json>               restore a backup
sync                        reload the record if another view changed it
reset                       wipe all data
add <amount>                add coins (debug)
quit                        leave"
    }
    fn amount(arg: Option<&str>) -> Result<i64, GameError> {
        arg.and_then(|s| s.parse::<i64>().ok())
            .ok_or_else(Self::invalid)
    }
    fn invalid() -> GameError {
        GameError::Validation("Please enter a valid amount greater than 0".to_string())
    }
}

impl TryFrom<&str> for Command {
    type Error = GameError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.trim();
        let (head, rest) = s.split_once(char::is_whitespace).unwrap_or((s, ""));
        let rest = rest.trim();
        let arg = Some(rest).filter(|r| !r.is_empty());
        match head.to_lowercase().as_str() {
            "play" => Choice::try_from(rest).map(Self::Play),
            "rock" | "paper" | "scissors" | "r" | "p" | "s" => {
                Choice::try_from(head).map(Self::Play)
            }
            "checkin" | "claim" | "daily" => Ok(Self::Checkin),
            "withdraw" => Self::amount(arg).map(Self::Withdraw),
            "show" => Screen::try_from(rest).map(Self::Show),
            "home" | "leaderboard" | "stats" => Screen::try_from(head).map(Self::Show),
            "restart" | "again" => Ok(Self::Restart),
            "reset" => Ok(Self::Reset),
            "add" => Self::amount(arg)
                .and_then(|n| Coins::try_from(n).map_err(|_| Self::invalid()))
                .map(Self::Add),
            "share" => Ok(Self::Share),
            "export" => Ok(Self::Export),
            "import" => Ok(Self::Import(rest.to_string())),
            "sync" => Ok(Self::Sync),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            _ => Err(GameError::UnknownCommand(s.to_string())),
        }
    }
}
