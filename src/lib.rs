//! Conway's Game of Life on a fixed size wrapping grid, with a text
//! console front end and a `pixels` window front end.

pub mod auxiliary;
pub mod projects;
pub mod traits_and_structs;

pub use traits_and_structs::{Cell, ConstructionError, GridEngine, OutOfBounds};
