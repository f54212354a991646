//! Game rules for tic-tac-toe.
//!
//! Pure functions over a borrowed [`Board`](crate::Board). Nothing here
//! mutates game state.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, check_winner};
