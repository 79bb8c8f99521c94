use super::*;
use crate::clock::*;
use crate::game::*;
use crate::players::*;

/// Runs Frame transitions against a session store.
///
/// Each call is read, apply, write. Two requests for the same session may
/// interleave, in which case the later write wins.
pub struct Lobby<S = MemorySessions> {
    store: S,
    rules: Rules,
    clock: Box<dyn Clock>,
    opponent: Box<dyn Opponent>,
}

impl From<Rules> for Lobby {
    fn from(rules: Rules) -> Self {
        Self {
            store: MemorySessions::default(),
            rules,
            clock: Box::new(Calendar),
            opponent: Box::new(Robot),
        }
    }
}

impl Default for Lobby {
    fn default() -> Self {
        Self::from(Rules::default())
    }
}

impl<S> Lobby<S>
where
    S: SessionStore,
{
    pub fn with_store<T: SessionStore>(self, store: T) -> Lobby<T> {
        Lobby {
            store,
            rules: self.rules,
            clock: self.clock,
            opponent: self.opponent,
        }
    }
    pub fn with_clock(self, clock: impl Clock + 'static) -> Self {
        Self {
            clock: Box::new(clock),
            ..self
        }
    }
    pub fn with_opponent(self, opponent: impl Opponent + 'static) -> Self {
        Self {
            opponent: Box::new(opponent),
            ..self
        }
    }

    /// Mints a session and stores its opening state.
    pub async fn open(&self) -> (SessionId, Session) {
        let id = SessionId::now();
        let session = Session::opening(&self.rules);
        self.store.save(id.clone(), session.clone()).await;
        log::info!("opened session {}", id);
        (id, session)
    }

    /// The stored session, or a fresh one when the id is unknown.
    pub async fn fetch(&self, id: &SessionId) -> Session {
        match self.store.get(id).await {
            Ok(session) => session,
            Err(e) => {
                log::debug!("{}, starting fresh", e);
                Session::opening(&self.rules)
            }
        }
    }

    /// Same as [`Lobby::fetch`] but never stores anything.
    pub async fn peek(&self, id: &SessionId) -> Session {
        self.fetch(id).await
    }

    /// Rejects anything but an exact move name before touching the session.
    pub async fn play(&self, id: &SessionId, choice: &str) -> Result<Session, GameError> {
        let player = Choice::named(choice)?;
        let computer = self.opponent.throw();
        let mut session = self.fetch(id).await;
        let round = session.play(player, computer, &self.rules);
        log::debug!("session {}: {} vs {}, {}", id, player, computer, round.outcome());
        self.store.save(id.clone(), session.clone()).await;
        Ok(session)
    }

    pub async fn restart(&self, id: &SessionId) -> Session {
        self.apply(id, Session::restart).await
    }

    pub async fn balance(&self, id: &SessionId) -> Session {
        self.apply(id, Session::balance).await
    }

    pub async fn reward(&self, id: &SessionId) -> Session {
        let today = self.clock.today();
        let rules = self.rules;
        self.apply(id, |session| {
            if let Claim::AlreadyClaimed = session.reward(today, &rules) {
                log::debug!("session {} already claimed {}", id, today);
            }
        })
        .await
    }

    pub async fn stats(&self, id: &SessionId) -> Session {
        self.apply(id, Session::stats).await
    }

    pub async fn sessions(&self) -> usize {
        self.store.len().await
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    async fn apply(&self, id: &SessionId, f: impl FnOnce(&mut Session)) -> Session {
        let mut session = self.fetch(id).await;
        f(&mut session);
        self.store.save(id.clone(), session.clone()).await;
        session
    }
}
