#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;
mod ai;
mod bitboard;
mod board;
#[cfg(feature = "std")]
pub mod cli;
mod common;
mod config;
mod game;
mod grid;
#[cfg(feature = "std")]
mod logging;
mod placement;
mod player;
mod player_ai;
#[cfg(feature = "std")]
pub mod shared;
mod ship;
pub mod prelude;
pub mod sim;

pub use ai::{random_placement, random_target};
pub use bitboard::{BitBoard, BitBoardError};
pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use grid::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, LOG_ENV};
pub use placement::Footprint;
pub use player::*;
pub use player_ai::*;
#[cfg(feature = "std")]
pub use shared::SharedSession;
pub use ship::*;
pub use sim::{autoplay, SimReport};
