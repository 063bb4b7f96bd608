#![cfg(feature = "std")]
//! A session behind one async mutex, for front ends that drive a game from
//! more than one task.
//!
//! The whole session is the unit of locking: individual transitions are not
//! atomic on their own, so every call takes the lock for its full duration.
//! Opponent shots are taken one lock at a time with a yield in between, which
//! keeps long hit chains from starving other tasks.

use std::sync::Arc;
use std::time::Duration;

use log::warn;
use tokio::sync::Mutex;

use crate::{
    common::{EngineError, ShotOutcome},
    game::{GameSession, Side},
    grid::Coord,
    ship::Orientation,
};

#[derive(Clone)]
pub struct SharedSession {
    inner: Arc<Mutex<GameSession>>,
}

impl SharedSession {
    pub fn new(session: GameSession) -> Self {
        Self {
            inner: Arc::new(Mutex::new(session)),
        }
    }

    /// Run `f` with exclusive access to the session.
    pub async fn with<T>(&self, f: impl FnOnce(&mut GameSession) -> T) -> T {
        let mut session = self.inner.lock().await;
        f(&mut session)
    }

    pub async fn winner(&self) -> Option<Side> {
        self.inner.lock().await.winner()
    }

    pub async fn place(&self, origin: Coord, orientation: Orientation) -> Result<bool, EngineError> {
        self.inner.lock().await.place(origin, orientation)
    }

    pub async fn auto_place(&self) -> Result<usize, EngineError> {
        self.inner.lock().await.auto_place_player()
    }

    /// Fire at the opponent and play out the opponent's reply, if any.
    pub async fn fire(&self, target: Coord) -> Result<Option<ShotOutcome>, EngineError> {
        let outcome = self.inner.lock().await.player_shoot(target)?;
        self.finish_opponent_turn().await?;
        Ok(outcome)
    }

    /// [`SharedSession::fire`] bounded by `limit`. On timeout the session is
    /// left exactly where the interrupted step left it; a later call to
    /// [`SharedSession::finish_opponent_turn`] resumes the opponent's turn.
    pub async fn fire_with_timeout(
        &self,
        target: Coord,
        limit: Duration,
    ) -> Result<Option<ShotOutcome>, EngineError> {
        match tokio::time::timeout(limit, self.fire(target)).await {
            Ok(result) => result,
            Err(_) => {
                warn!("turn at {target} timed out after {limit:?}");
                Err(EngineError::TurnTimeout {
                    millis: limit.as_millis() as u64,
                })
            }
        }
    }

    /// Take opponent shots one at a time, yielding between them, until the
    /// turn passes back or the game ends. Returns the number of shots.
    pub async fn finish_opponent_turn(&self) -> Result<usize, EngineError> {
        let mut fired = 0;
        loop {
            let step = self.inner.lock().await.opponent_step()?;
            if step.is_none() {
                return Ok(fired);
            }
            fired += 1;
            tokio::task::yield_now().await;
        }
    }
}
