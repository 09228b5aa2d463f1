use crate::traits_and_structs::error::AppError;
use crate::traits_and_structs::grid_engine::GridEngine;

/// Presents the current state of a grid. Renderers only read the grid.
pub trait Renderer {
    fn render(&mut self, grid: &GridEngine) -> Result<(), AppError>;
}
