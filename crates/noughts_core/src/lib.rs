//! Noughts core - pure tic-tac-toe game logic
//!
//! # Architecture
//!
//! - **Rules**: win and draw detection over the eight fixed lines
//! - **Opponent**: a greedy one-ply move selector (win, block, center,
//!   corner, random)
//! - **Controller**: the state machine that sequences turns and keeps score
//!
//! # Example
//!
//! ```
//! use noughts_core::{GameController, GameMode, SeededRandom};
//!
//! let mut game = GameController::new(GameMode::PlayerVsPlayer, SeededRandom::new(1));
//! for cell in [0, 1, 3, 4, 6] {
//!     game.apply_move(cell).unwrap();
//! }
//! assert_eq!(game.status().to_string(), "Winner: X");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod controller;
mod mode;
mod opponent;
mod position;
mod rng;
pub mod rules;
mod score;
mod state;
mod types;

pub use action::{Move, MoveError};
pub use controller::{COMPUTER, GameController};
pub use mode::GameMode;
pub use opponent::select_move;
pub use position::Position;
pub use rng::{RandomSource, SeededRandom};
pub use score::Scoreboard;
pub use state::{GameState, GameStatus, Outcome, Phase};
pub use types::{Board, Player, Square};
