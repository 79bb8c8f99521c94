use super::*;
use crate::Coins;
use crate::clock::*;
use crate::game::*;
use crate::players::*;
use crate::save::*;

/// One view of a persisted player record.
///
/// Commands run to completion one at a time. Before each command the view
/// checks the record's version and reloads if another view has written
/// since; every mutation then writes the full state back under a newer
/// version. Two views writing between polls still race, last write wins.
pub struct Client<S, C = Calendar, O = Robot> {
    state: GameState,
    screen: Screen,
    version: u64,
    rules: Rules,
    record: Record<S>,
    clock: C,
    opponent: O,
}

impl<S, C, O> Client<S, C, O>
where
    S: Storage,
    C: Clock,
    O: Opponent,
{
    pub fn new(storage: S, rules: Rules, clock: C, opponent: O) -> Self {
        let record = Record::from(storage);
        let (state, version) = match record.is_blank() {
            true => (GameState::opening(&rules), 0),
            false => record.load(),
        };
        log::info!("loaded record v{} with {} coins", version, state.balance());
        Self {
            state,
            screen: Screen::default(),
            version,
            rules,
            record,
            clock,
            opponent,
        }
    }

    /// Dispatches one command.
    pub fn execute(&mut self, command: Command) -> Result<Reply, GameError> {
        let reloaded = self.poll();
        match command {
            Command::Play(choice) => Ok(Reply::from(self.play(choice))),
            Command::Checkin => Ok(Reply::from(self.checkin())),
            Command::Withdraw(amount) => self
                .withdraw(amount)
                .map(|_| Reply::success(format!("Successfully withdrew {} coins! 💰", amount))),
            Command::Show(screen) => Ok(Reply::info(self.show(screen).to_string())),
            Command::Restart => {
                self.restart();
                Ok(Reply::info("Pick your move."))
            }
            Command::Reset => {
                self.reset();
                Ok(Reply::info("Game data reset."))
            }
            Command::Add(amount) => {
                self.add(amount);
                Ok(Reply::success(format!("+{} coins added.", amount)))
            }
            Command::Share => self.share().map(Reply::success),
            Command::Export => serde_json::to_string_pretty(&self.export())
                .map(Reply::info)
                .map_err(|e| GameError::Persistence(e.to_string())),
            Command::Import(json) => Export::try_from(json.as_str())
                .map(|backup| self.import(&backup))
                .map(|_| Reply::success("Backup restored.")),
            Command::Sync => Ok(Reply::info(match reloaded {
                true => format!("Reloaded record v{}.", self.version),
                false => format!("Record v{} is up to date.", self.version),
            })),
            Command::Help => Ok(Reply::info(Command::help())),
            Command::Quit => Ok(Reply::info("Bye!")),
        }
    }

    /// Reloads the record if another view wrote a newer version.
    pub fn poll(&mut self) -> bool {
        let stored = self.record.version();
        if stored > self.version {
            let (state, version) = self.record.load();
            log::info!("record moved v{} -> v{}, reloading", self.version, version);
            self.state = state;
            self.version = version;
            true
        } else {
            false
        }
    }

    pub fn play(&mut self, choice: Choice) -> Round {
        let computer = self.opponent.throw();
        let round = self.state.play(choice, computer, &self.rules);
        log::debug!("{} vs {}: {}", choice, computer, round.outcome());
        self.screen = Screen::Game;
        self.commit();
        round
    }

    pub fn checkin(&mut self) -> Claim {
        self.screen = Screen::Checkin;
        let claim = self.state.claim(self.clock.today(), &self.rules);
        if let Claim::Claimed(_) = claim {
            self.commit();
        }
        claim
    }

    pub fn withdraw(&mut self, amount: i64) -> Result<Coins, GameError> {
        self.screen = Screen::Withdraw;
        let left = self.state.withdraw(amount, &self.rules)?;
        self.commit();
        Ok(left)
    }

    pub fn show(&mut self, screen: Screen) -> Screen {
        self.screen = screen;
        screen
    }

    pub fn restart(&mut self) {
        self.state.restart();
        self.screen = Screen::Game;
    }

    /// Wipes the record, for testing and debugging.
    pub fn reset(&mut self) {
        self.record
            .clear()
            .inspect_err(|e| log::warn!("could not clear record: {}", e))
            .ok();
        self.state.reset();
        self.screen = Screen::Home;
        self.commit();
    }

    /// Debug credit.
    pub fn add(&mut self, amount: Coins) {
        self.state.credit(amount);
        self.commit();
    }

    pub fn share(&self) -> Result<String, GameError> {
        match self.state.balance() {
            0 => Err(GameError::Validation(
                "No score to share! Play some games first. 🎮".to_string(),
            )),
            n => Ok(format!(
                "Score shared! 🎉 {} coins, {}% win rate",
                n,
                self.state.stats().win_rate()
            )),
        }
    }

    pub fn export(&self) -> Export {
        Export::from((&self.state, chrono::Utc::now()))
    }

    pub fn import(&mut self, backup: &Export) {
        self.state = backup.merge(&self.state);
        self.commit();
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }
    pub fn screen(&self) -> Screen {
        self.screen
    }
    pub fn version(&self) -> u64 {
        self.version
    }
    pub fn rules(&self) -> &Rules {
        &self.rules
    }
    pub fn today(&self) -> chrono::NaiveDate {
        self.clock.today()
    }
}

impl<S, C, O> Client<S, C, O>
where
    S: Storage,
{
    /// Persists the full state. Failures are logged and never undo the
    /// in-memory transition.
    fn commit(&mut self) {
        match self.record.store(&self.state, self.version) {
            Ok(version) => self.version = version,
            Err(e) => log::warn!("could not persist record: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }
    fn client(storage: MemoryStorage, computer: Choice) -> Client<MemoryStorage, NaiveDate, Choice> {
        Client::new(storage, Rules::default(), today(), computer)
    }

    #[test]
    fn fresh_record_starts_at_zero() {
        let client = client(MemoryStorage::default(), Choice::Rock);
        assert_eq!(client.state().balance(), 0);
        assert_eq!(client.screen(), Screen::Home);
        assert_eq!(client.version(), 0);
    }
    #[test]
    fn forced_win_is_persisted() {
        let storage = MemoryStorage::default();
        let mut client = client(storage.clone(), Choice::Scissors);
        let reply = client.execute(Command::Play(Choice::Rock)).unwrap();
        assert_eq!(reply.status(), Status::Success);
        assert_eq!(client.state().balance(), 10);
        assert_eq!(client.state().stats().wins(), 1);
        assert_eq!(client.state().stats().win_streak(), 1);
        assert_eq!(client.screen(), Screen::Game);
        assert_eq!(storage.get(BALANCE).unwrap(), Some("10".to_string()));
    }
    #[test]
    fn checkin_twice() {
        let storage = MemoryStorage::default();
        let mut client = client(storage.clone(), Choice::Rock);
        let first = client.execute(Command::Checkin).unwrap();
        assert_eq!(first.status(), Status::Success);
        assert_eq!(client.state().balance(), 50);
        assert_eq!(storage.get(CHECKIN).unwrap(), Some("2026-10-18".to_string()));
        let version = client.version();
        let second = client.execute(Command::Checkin).unwrap();
        assert_eq!(second.status(), Status::AlreadyClaimed);
        assert_eq!(client.state().balance(), 50);
        assert_eq!(client.version(), version);
    }
    #[test]
    fn rejected_withdrawal_changes_nothing() {
        let storage = MemoryStorage::default();
        let mut client = client(storage.clone(), Choice::Rock);
        client.add(50);
        let version = client.version();
        assert!(matches!(
            client.execute(Command::Withdraw(1500)),
            Err(GameError::Validation(_))
        ));
        assert_eq!(client.state().balance(), 50);
        assert_eq!(client.version(), version);
        assert_eq!(storage.get(BALANCE).unwrap(), Some("50".to_string()));
    }
    #[test]
    fn withdraw_everything() {
        let mut client = client(MemoryStorage::default(), Choice::Rock);
        client.add(50);
        assert_eq!(client.withdraw(50), Ok(0));
    }
    #[test]
    fn second_view_sees_first_views_writes() {
        let storage = MemoryStorage::default();
        let mut a = client(storage.clone(), Choice::Scissors);
        let mut b = client(storage.clone(), Choice::Scissors);
        a.execute(Command::Play(Choice::Rock)).unwrap();
        assert_eq!(b.state().balance(), 0);
        assert!(b.poll());
        assert_eq!(b.state().balance(), 10);
        b.execute(Command::Checkin).unwrap();
        a.execute(Command::Play(Choice::Rock)).unwrap();
        assert_eq!(a.state().balance(), 70);
        assert_eq!(a.state().stats().wins(), 2);
        assert!(!a.poll());
    }
    #[test]
    fn reset_wipes_every_view() {
        let storage = MemoryStorage::default();
        let mut a = client(storage.clone(), Choice::Scissors);
        let mut b = client(storage.clone(), Choice::Scissors);
        a.execute(Command::Play(Choice::Rock)).unwrap();
        b.poll();
        b.execute(Command::Reset).unwrap();
        assert!(a.poll());
        assert_eq!(a.state(), &GameState::default());
    }
    #[test]
    fn share_needs_coins() {
        let mut client = client(MemoryStorage::default(), Choice::Scissors);
        assert!(client.share().is_err());
        client.play(Choice::Rock);
        client.play(Choice::Paper);
        assert_eq!(
            client.share(),
            Ok("Score shared! 🎉 12 coins, 50% win rate".to_string())
        );
    }
    #[test]
    fn export_import_round_trip() {
        let mut source = client(MemoryStorage::default(), Choice::Scissors);
        source.play(Choice::Rock);
        source.checkin();
        source.restart();
        let json = serde_json::to_string(&source.export()).unwrap();
        let mut target = client(MemoryStorage::default(), Choice::Rock);
        target.execute(Command::Import(json)).unwrap();
        assert_eq!(target.state(), source.state());
    }
    #[test]
    fn unreadable_storage_keeps_playing() {
        let dir = std::env::temp_dir().join(format!("roshambo-blocked-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        // a directory where the record file should be makes every read fail
        let storage = DiskStorage::from(dir.clone());
        let mut client = Client::new(storage, Rules::default(), today(), Choice::Scissors);
        assert_eq!(client.play(Choice::Rock).outcome(), Outcome::Win);
        assert_eq!(client.state().balance(), 10);
    }
}
