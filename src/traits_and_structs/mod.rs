pub mod cell;
pub mod error;
pub mod grid_engine;
pub mod renderer_trait;

pub use cell::Cell;
pub use error::{AppError, ConstructionError, OutOfBounds};
pub use grid_engine::GridEngine;
pub use renderer_trait::Renderer;
