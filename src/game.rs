//! Game flow: fleet placement, alternating turns with hit chaining, and the
//! end of the game.

#[cfg(not(feature = "std"))]
use alloc::{boxed::Box, vec::Vec};
use core::mem;

use log::{debug, info, warn};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::{
    ai,
    board::{Board, BoardView},
    common::{EngineError, ShotOutcome},
    config::{Fleet, TurnMode},
    grid::Coord,
    player::Player,
    player_ai::RandomPlayer,
    ship::{Orientation, ShipType},
};

/// One of the two sides of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Side {
    Player,
    Opponent,
}

impl Side {
    pub fn other(self) -> Self {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }

    fn index(self) -> usize {
        match self {
            Side::Player => 0,
            Side::Opponent => 1,
        }
    }
}

/// Current phase of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Phase {
    /// The player is placing ships; see [`GameSession::remaining_to_place`].
    Placement,
    PlayerTurn,
    OpponentTurn,
    /// Terminal. Carries the winner.
    GameOver(Side),
}

/// Everything the presentation layer may want to react to, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum GameEvent {
    /// The player placed a ship.
    ShipPlaced {
        ship: &'static str,
        origin: Coord,
        orientation: Orientation,
    },
    /// Both fleets are deployed and combat begins.
    FleetDeployed { ships: usize },
    ShotFired {
        by: Side,
        target: Coord,
        outcome: ShotOutcome,
    },
    /// A miss handed the turn to `to`.
    TurnPassed { to: Side },
    GameOver { winner: Side },
}

/// A single game between the human player and a computer opponent.
///
/// Sessions are never reset; start a new game by building a new session.
pub struct GameSession {
    fleet: Fleet,
    boards: [Board; 2],
    phase: Phase,
    placed: usize,
    opponent: Box<dyn Player>,
    rng: SmallRng,
    mode: TurnMode,
    shots: [usize; 2],
    events: Vec<GameEvent>,
}

impl GameSession {
    /// New session in `Placement`, with the opponent driven by `opponent` and
    /// all randomness drawn from `rng`.
    pub fn new(fleet: Fleet, opponent: Box<dyn Player>, rng: SmallRng) -> Self {
        GameSession {
            fleet,
            boards: [Board::new(&fleet, false), Board::new(&fleet, true)],
            phase: Phase::Placement,
            placed: 0,
            opponent,
            rng,
            mode: TurnMode::default(),
            shots: [0; 2],
            events: Vec::new(),
        }
    }

    /// Session against a [`RandomPlayer`] with a reproducible seed.
    pub fn seeded(fleet: Fleet, seed: u64) -> Self {
        Self::new(fleet, Box::new(RandomPlayer::new()), SmallRng::seed_from_u64(seed))
    }

    pub fn with_mode(mut self, mode: TurnMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn fleet(&self) -> Fleet {
        self.fleet
    }

    pub fn mode(&self) -> TurnMode {
        self.mode
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn winner(&self) -> Option<Side> {
        match self.phase {
            Phase::GameOver(winner) => Some(winner),
            _ => None,
        }
    }

    pub fn is_over(&self) -> bool {
        self.winner().is_some()
    }

    pub fn board(&self, side: Side) -> &Board {
        &self.boards[side.index()]
    }

    pub fn ships_remaining(&self, side: Side) -> usize {
        self.board(side).ships_remaining()
    }

    /// Shots fired so far by `side`.
    pub fn shots_fired(&self, side: Side) -> usize {
        self.shots[side.index()]
    }

    /// Presentation view of `side`'s board. The opponent's ships stay hidden
    /// until the game is over.
    pub fn view(&self, side: Side) -> BoardView {
        self.board(side).view(self.is_over())
    }

    /// Ship types the player still has to place, next one first.
    pub fn remaining_to_place(&self) -> &'static [ShipType] {
        match self.phase {
            Phase::Placement => &self.fleet.ships()[self.placed..],
            _ => &[],
        }
    }

    /// The ship the next placement request will place.
    pub fn next_ship_type(&self) -> Option<ShipType> {
        self.remaining_to_place().first().copied()
    }

    /// Drain the events recorded since the last call.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        mem::take(&mut self.events)
    }

    /// Place the next ship of the player's fleet.
    ///
    /// Returns `Ok(false)` when the position is illegal or the session is not
    /// in `Placement`. Placing the last ship deploys the opponent's fleet and
    /// starts the player's turn; failing to deploy it is the only error.
    pub fn place(&mut self, origin: Coord, orientation: Orientation) -> Result<bool, EngineError> {
        let Some(ship_type) = self.next_ship_type() else {
            warn!("placement at {origin} ignored in {:?}", self.phase);
            return Ok(false);
        };
        match self.boards[Side::Player.index()].try_place(ship_type, origin, orientation) {
            Ok(_) => {
                self.record_placement(ship_type, origin, orientation);
                self.finish_placement_if_done()?;
                Ok(true)
            }
            Err(reason) => {
                debug!("cannot place {} at {origin}: {reason}", ship_type.name());
                Ok(false)
            }
        }
    }

    /// Randomly place every ship the player has left to place, then start
    /// combat. Returns how many ships were placed.
    pub fn auto_place_player(&mut self) -> Result<usize, EngineError> {
        let remaining = self.remaining_to_place();
        for &ship_type in remaining {
            let (origin, orientation) = ai::random_placement(
                &mut self.rng,
                &mut self.boards[Side::Player.index()],
                ship_type,
            )?;
            self.record_placement(ship_type, origin, orientation);
        }
        self.finish_placement_if_done()?;
        Ok(remaining.len())
    }

    fn record_placement(&mut self, ship_type: ShipType, origin: Coord, orientation: Orientation) {
        self.placed += 1;
        self.events.push(GameEvent::ShipPlaced {
            ship: ship_type.name(),
            origin,
            orientation,
        });
    }

    fn finish_placement_if_done(&mut self) -> Result<(), EngineError> {
        if self.phase != Phase::Placement || self.placed < self.fleet.size() {
            return Ok(());
        }
        self.opponent.place_ships(
            &mut self.rng,
            &mut self.boards[Side::Opponent.index()],
            &self.fleet,
        )?;
        self.phase = Phase::PlayerTurn;
        self.events.push(GameEvent::FleetDeployed {
            ships: self.fleet.size(),
        });
        info!("both fleets deployed, player to fire");
        Ok(())
    }

    /// Fire at the opponent's board.
    ///
    /// Returns `Ok(None)` without touching anything when it is not the
    /// player's turn or the cell was already fired upon. A hit keeps the turn;
    /// a miss hands it to the opponent, whose whole turn runs before this
    /// returns unless the session is in [`TurnMode::Stepped`].
    pub fn player_shoot(&mut self, target: Coord) -> Result<Option<ShotOutcome>, EngineError> {
        if self.phase != Phase::PlayerTurn {
            warn!("shot at {target} ignored in {:?}", self.phase);
            return Ok(None);
        }
        if self.board(Side::Opponent).grid().was_shot(target) {
            debug!("{target} already fired upon, ignoring");
            return Ok(None);
        }
        let outcome = self.resolve_shot(Side::Player, target);
        if self.mode == TurnMode::Synchronous {
            self.run_opponent_turn()?;
        }
        Ok(Some(outcome))
    }

    /// Resolve a single opponent shot. This is the yield point of the
    /// opponent's turn: callers may return to their event loop between steps.
    ///
    /// Returns `Ok(None)` when it is not the opponent's turn.
    pub fn opponent_step(&mut self) -> Result<Option<(Coord, ShotOutcome)>, EngineError> {
        if self.phase != Phase::OpponentTurn {
            return Ok(None);
        }
        let target = self
            .opponent
            .select_target(&mut self.rng, &self.boards[Side::Player.index()])?;
        if self.board(Side::Player).grid().was_shot(target) {
            return Err(EngineError::InvalidTarget(target));
        }
        let outcome = self.resolve_shot(Side::Opponent, target);
        self.opponent.handle_shot_result(target, outcome);
        Ok(Some((target, outcome)))
    }

    /// Run opponent shots until the turn passes back or the game ends.
    /// Returns the number of shots fired.
    pub fn run_opponent_turn(&mut self) -> Result<usize, EngineError> {
        let mut fired = 0;
        while self.opponent_step()?.is_some() {
            fired += 1;
        }
        Ok(fired)
    }

    /// Apply `shooter`'s shot to the other board and advance the phase: the
    /// game ends when the last ship sinks, a hit keeps the turn, a miss
    /// passes it. Identical for both sides.
    fn resolve_shot(&mut self, shooter: Side, target: Coord) -> ShotOutcome {
        let defender = shooter.other();
        let board = &mut self.boards[defender.index()];
        let outcome = board.fire(target);
        let remaining = board.ships_remaining();
        self.shots[shooter.index()] += 1;
        self.events.push(GameEvent::ShotFired {
            by: shooter,
            target,
            outcome,
        });
        debug!("{shooter:?} fired at {target}: {outcome}");

        if remaining == 0 {
            self.phase = Phase::GameOver(shooter);
            self.events.push(GameEvent::GameOver { winner: shooter });
            match shooter {
                Side::Player => info!("all enemy ships destroyed, you win"),
                Side::Opponent => info!("all of your ships were destroyed, you lose"),
            }
        } else if !outcome.is_hit() {
            self.phase = match defender {
                Side::Player => Phase::PlayerTurn,
                Side::Opponent => Phase::OpponentTurn,
            };
            self.events.push(GameEvent::TurnPassed { to: defender });
        }
        outcome
    }
}
