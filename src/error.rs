//! Error types for grid construction and session play.

use crate::session::Status;

/// Errors raised while building a grid or a level list.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("grid {width}x{height} is too small: both sides must be at least {min}")]
    TooSmall {
        width: usize,
        height: usize,
        min: usize,
    },

    #[error("map has no rows")]
    Empty,

    #[error("map row {row} has {found} tiles, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("border tile ({x}, {y}) is open")]
    OpenBorder { x: usize, y: usize },

    #[error("a session needs at least one level")]
    NoLevels,
}

/// Errors surfaced by [`crate::session::Session`] operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Grid(#[from] GridError),

    #[error("session is not in play (status: {status:?})")]
    NotPlaying { status: Status },

    #[error("level has not been cleared yet (status: {status:?})")]
    NotCleared { status: Status },
}
