use thiserror::Error;

/// Reasons a `GridEngine` could not be built.
#[derive(Debug, Error)]
pub enum ConstructionError {
    #[error("grid size must be at least 1")]
    EmptyGrid,
    #[error("grid size {0} is too large")]
    GridTooLarge(usize),
    #[error("cannot place {requested} live cells on a grid with {capacity} cells")]
    TooManyCells { requested: usize, capacity: usize },
    #[error("failed to gather entropy for seeding: {0}")]
    Entropy(getrandom::Error),
}

/// A coordinate outside `[0, size)` was passed to a cell accessor.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("cell ({x}, {y}) is outside the {size}x{size} grid")]
pub struct OutOfBounds {
    pub x: usize,
    pub y: usize,
    pub size: usize,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error(transparent)]
    Construction(#[from] ConstructionError),
    #[error("rendering failed: {0}")]
    Pixels(#[from] pixels::Error),
    #[error("could not open window: {0}")]
    Window(#[from] winit::error::OsError),
    #[error("terminal output failed: {0}")]
    Io(#[from] std::io::Error),
}
