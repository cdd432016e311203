//! Maze generation and pursuit logic for a snake-chases-mouse arcade game.
//!
//! The crate produces the data a front end needs (grids, positions, game
//! rules) and leaves drawing, input and sound to the caller.

pub mod config;
pub mod error;
pub mod grid;
pub mod level;
pub mod maze;
pub mod pursuit;
pub mod rng;
pub mod session;

pub use config::{GameConfig, Rules};
pub use error::{GridError, SessionError};
pub use grid::{Dir, Grid, Pos, Tile};
pub use level::{build_levels, Level};
pub use maze::generate;
pub use pursuit::{next_move, relocate};
pub use rng::{RandomSource, Scripted};
pub use session::{GameOver, GameOverReason, Session, Status, StepOutcome};
