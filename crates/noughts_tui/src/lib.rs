//! Terminal front end for noughts.
//!
//! The core crate owns every game rule; this crate only renders snapshots
//! and turns key presses and clicks into cell indices.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
mod ui;

pub use app::App;
pub use cli::{Cli, ModeArg};
pub use config::{ConfigError, TuiConfig};
pub use input::{Action, action_for, move_cursor};
pub use ui::{board_cells, cell_at, draw};
