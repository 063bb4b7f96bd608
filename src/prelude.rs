//! Commonly used types for ease of import.

pub use crate::{
    Coord, EngineError, Fleet, GameEvent, GameSession, Orientation, Phase, Player, RandomPlayer,
    ShotOutcome, Side, TurnMode, CLASSIC_FLEET, REDUCED_FLEET,
};

#[cfg(feature = "std")]
pub use crate::SharedSession;
