use super::*;
use crate::Coins;
use crate::clock::format_day;
use crate::clock::parse_day;
use crate::game::*;
use chrono::NaiveDate;

/// Coin balance as a decimal integer string.
pub const BALANCE: &str = "rps_balance";
/// Last check-in day.
pub const CHECKIN: &str = "rps_last_checkin";
/// Counters as JSON.
pub const STATS: &str = "rps_game_stats";
/// Monotonic write counter shared by every view of the record.
pub const VERSION: &str = "rps_version";

/// The persisted player record, spread over four storage keys.
///
/// Reads never fail: each key falls back to its default on a missing,
/// corrupt or unreadable value, with a warning. Writes report failures and
/// leave recovery to the caller.
#[derive(Debug, Clone)]
pub struct Record<S> {
    storage: S,
}

impl<S> From<S> for Record<S> {
    fn from(storage: S) -> Self {
        Self { storage }
    }
}

impl<S> Record<S>
where
    S: Storage,
{
    /// Reads the whole record and the version it was written at.
    pub fn load(&self) -> (GameState, u64) {
        let mut state = GameState::from((self.balance(), self.checkin(), self.stats()));
        state.sanitize();
        (state, self.version())
    }

    /// Writes the whole record in one batch and returns its new version,
    /// which is greater than both the stored version and `seen` until the
    /// counter saturates.
    pub fn store(&self, state: &GameState, seen: u64) -> Result<u64, GameError> {
        let version = self.version().max(seen).saturating_add(1);
        let stats = serde_json::to_string(state.stats())?;
        self.storage.batch(&[
            (BALANCE, Some(state.balance().to_string())),
            (CHECKIN, state.last_checkin_date().map(format_day)),
            (STATS, Some(stats)),
            (VERSION, Some(version.to_string())),
        ])?;
        Ok(version)
    }

    /// True when nothing has ever been written.
    pub fn is_blank(&self) -> bool {
        self.read(BALANCE).is_none() && self.read(VERSION).is_none()
    }

    pub fn version(&self) -> u64 {
        self.read(VERSION)
            .and_then(|text| text.trim().parse().ok())
            .unwrap_or_default()
    }

    /// Removes every key of the record.
    pub fn clear(&self) -> Result<(), GameError> {
        for key in [BALANCE, CHECKIN, STATS, VERSION] {
            self.storage.remove(key)?;
        }
        Ok(())
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

impl<S> Record<S>
where
    S: Storage,
{
    fn read(&self, key: &str) -> Option<String> {
        self.storage
            .get(key)
            .inspect_err(|e| log::warn!("reading {}: {}", key, e))
            .ok()
            .flatten()
    }

    fn balance(&self) -> Coins {
        let Some(text) = self.read(BALANCE) else {
            return 0;
        };
        match text.trim().parse::<i64>() {
            Ok(n) => Coins::try_from(n).unwrap_or_else(|_| {
                log::warn!("negative balance {} clamped to 0", n);
                0
            }),
            Err(_) => {
                log::warn!("unreadable balance {:?} reset to 0", text);
                0
            }
        }
    }

    fn checkin(&self) -> Option<NaiveDate> {
        let text = self.read(CHECKIN)?;
        match parse_day(&text) {
            Some(day) => Some(day),
            None => {
                log::warn!("discarding malformed check-in date {:?}", text);
                self.storage
                    .remove(CHECKIN)
                    .inspect_err(|e| log::warn!("removing {}: {}", CHECKIN, e))
                    .ok();
                None
            }
        }
    }

    fn stats(&self) -> Stats {
        self.read(STATS)
            .and_then(|text| {
                serde_json::from_str::<Stats>(&text)
                    .inspect_err(|e| log::warn!("discarding corrupt stats: {}", e))
                    .ok()
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    #[test]
    fn empty_storage_loads_defaults() {
        let record = Record::from(MemoryStorage::default());
        assert_eq!(record.load(), (GameState::default(), 0));
    }
    #[test]
    fn blank_until_first_store() {
        let record = Record::from(MemoryStorage::default());
        assert!(record.is_blank());
        record.store(&GameState::default(), 0).unwrap();
        assert!(!record.is_blank());
    }
    #[test]
    fn store_then_load() {
        let rules = Rules::default();
        let record = Record::from(MemoryStorage::default());
        let mut state = GameState::default();
        state.claim(today(), &rules);
        state.play(Choice::Rock, Choice::Scissors, &rules);
        state.restart();
        let version = record.store(&state, 0).unwrap();
        assert_eq!(version, 1);
        assert_eq!(record.load(), (state, 1));
    }
    #[test]
    fn versions_only_move_forward() {
        let record = Record::from(MemoryStorage::default());
        let state = GameState::default();
        assert_eq!(record.store(&state, 7).unwrap(), 8);
        assert_eq!(record.store(&state, 3).unwrap(), 9);
    }
    #[test]
    fn overflowing_stats_load() {
        let storage = MemoryStorage::default();
        storage
            .set(STATS, r#"{"wins":18446744073709551615,"losses":1}"#)
            .unwrap();
        let (state, _) = Record::from(storage).load();
        assert_eq!(state.stats().wins(), u64::MAX);
        assert_eq!(state.stats().games_played(), u64::MAX);
    }
    #[test]
    fn saturated_version_still_stores() {
        let storage = MemoryStorage::default();
        storage.set(VERSION, "18446744073709551615").unwrap();
        let record = Record::from(storage);
        assert_eq!(record.store(&GameState::default(), 0), Ok(u64::MAX));
        assert_eq!(record.store(&GameState::default(), u64::MAX), Ok(u64::MAX));
    }
    #[test]
    fn failed_store_keeps_previous_record() {
        let dir = std::env::temp_dir().join(format!("roshambo-torn-{}", std::process::id()));
        let path = dir.join("record.json");
        let _ = std::fs::remove_dir_all(&dir);
        let record = Record::from(DiskStorage::from(path.clone()));
        let before = GameState::from((30, Some(today()), Stats::default()));
        record.store(&before, 0).unwrap();
        // a directory in place of the temp file makes the next write fail
        std::fs::create_dir_all(path.with_extension("json.tmp")).unwrap();
        let after = GameState::from((99, None, Stats::default()));
        assert!(record.store(&after, 1).is_err());
        assert_eq!(record.load(), (before, 1));
    }
    #[test]
    fn negative_balance_is_clamped() {
        let storage = MemoryStorage::default();
        storage.set(BALANCE, "-40").unwrap();
        let (state, _) = Record::from(storage).load();
        assert_eq!(state.balance(), 0);
    }
    #[test]
    fn garbage_falls_back_per_key() {
        let storage = MemoryStorage::default();
        storage.set(BALANCE, "12").unwrap();
        storage.set(CHECKIN, "not a date").unwrap();
        storage.set(STATS, "{broken").unwrap();
        let record = Record::from(storage.clone());
        let (state, _) = record.load();
        assert_eq!(state.balance(), 12);
        assert_eq!(state.last_checkin_date(), None);
        assert_eq!(state.stats(), &Stats::default());
        assert_eq!(storage.get(CHECKIN).unwrap(), None);
    }
    #[test]
    fn legacy_date_strings_load() {
        let storage = MemoryStorage::default();
        storage.set(CHECKIN, "Sun Oct 18 2026").unwrap();
        let (state, _) = Record::from(storage).load();
        assert_eq!(state.last_checkin_date(), Some(today()));
    }
    #[test]
    fn partial_stats_merge_with_defaults() {
        let storage = MemoryStorage::default();
        storage.set(STATS, r#"{"wins":2,"draws":1}"#).unwrap();
        let (state, _) = Record::from(storage).load();
        assert_eq!(state.stats().games_played(), 3);
        assert_eq!(state.stats().wins(), 2);
    }
    #[test]
    fn clear_removes_everything() {
        let storage = MemoryStorage::default();
        let record = Record::from(storage.clone());
        record.store(&GameState::from((9, Some(today()), Stats::default())), 0).unwrap();
        record.clear().unwrap();
        for key in [BALANCE, CHECKIN, STATS, VERSION] {
            assert_eq!(storage.get(key).unwrap(), None);
        }
    }
}
