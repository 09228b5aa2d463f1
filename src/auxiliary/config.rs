use std::time::Duration;

use clap::{Args, Parser, Subcommand};

use crate::auxiliary::randomizer::seed_from_u64;
use crate::traits_and_structs::{AppError, ConstructionError, GridEngine};

#[derive(Parser, Debug)]
#[command(name = "petri_dish", about = "Conway's Game of Life on a wrapping grid")]
pub struct Cli {
    #[command(subcommand)]
    pub mode: Mode,
}

#[derive(Subcommand, Debug)]
pub enum Mode {
    /// Animate the dish in a window; drag the mouse to paint live cells
    Window(WindowArgs),
    /// Print a fixed number of generations as text
    Console(ConsoleArgs),
}

#[derive(Args, Debug)]
pub struct WindowArgs {
    /// size of the n x n grid
    #[arg(long, default_value_t = 32, value_parser = clap::value_parser!(u32).range(1..))]
    pub grid: u32,

    /// number of live cells to place
    #[arg(long, default_value_t = 100)]
    pub cells: u64,

    /// time in seconds between generations
    #[arg(long, default_value = "0.5", value_parser = parse_interval)]
    pub interval: Duration,

    /// fixed seed for a reproducible starting grid
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Args, Debug)]
pub struct ConsoleArgs {
    /// size of the n x n grid
    #[arg(long, default_value_t = 32, value_parser = clap::value_parser!(u32).range(1..))]
    pub grid: u32,

    /// number of live cells to place
    #[arg(long, default_value_t = 205)]
    pub cells: u64,

    /// number of generations to print
    #[arg(long, default_value_t = 10)]
    pub generations: u64,

    /// clear the terminal between generations
    #[arg(long)]
    pub clear: bool,

    /// time in seconds between generations
    #[arg(long, default_value = "1", value_parser = parse_interval)]
    pub interval: Duration,

    /// fixed seed for a reproducible starting grid
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Validated dish parameters, ready to build a `GridEngine` from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DishConfig {
    pub grid: usize,
    pub cells: usize,
    pub seed: Option<(u64, u64)>,
}

impl DishConfig {
    pub fn validate(grid: u32, cells: u64, seed: Option<u64>) -> Result<Self, AppError> {
        let size = grid as usize;
        let capacity = size
            .checked_mul(size)
            .ok_or_else(|| AppError::InvalidConfig(format!("grid size {} is too large", grid)))?;
        let cells = usize::try_from(cells)
            .ok()
            .filter(|&c| c <= capacity)
            .ok_or_else(|| {
                AppError::InvalidConfig(format!(
                    "--cells {} does not fit on a {}x{} grid (at most {})",
                    cells, grid, grid, capacity
                ))
            })?;
        Ok(Self {
            grid: size,
            cells,
            seed: seed.map(seed_from_u64),
        })
    }

    /// Seeded from the fixed seed when one was given, from OS entropy otherwise.
    pub fn build(&self) -> Result<GridEngine, ConstructionError> {
        match self.seed {
            Some(seed) => GridEngine::with_seed(self.grid, self.cells, seed),
            None => GridEngine::new(self.grid, self.cells),
        }
    }
}

impl WindowArgs {
    pub fn dish(&self) -> Result<DishConfig, AppError> {
        DishConfig::validate(self.grid, self.cells, self.seed)
    }
}

impl ConsoleArgs {
    pub fn dish(&self) -> Result<DishConfig, AppError> {
        DishConfig::validate(self.grid, self.cells, self.seed)
    }
}

fn parse_interval(s: &str) -> Result<Duration, String> {
    let secs: f64 = s
        .parse()
        .map_err(|_| format!("`{}` is not a number of seconds", s))?;
    Duration::try_from_secs_f64(secs)
        .map_err(|_| format!("interval must be a finite, non-negative number of seconds, got {}", s))
}
