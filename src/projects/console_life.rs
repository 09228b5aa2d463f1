use std::io::{self, Write};
use std::thread;

use crossterm::{cursor::MoveTo, execute, terminal::{Clear, ClearType}};
use log::{debug, info};

use crate::auxiliary::config::ConsoleArgs;
use crate::traits_and_structs::{AppError, GridEngine, Renderer};

/// Prints each generation as text, under a numbered banner.
pub struct ConsoleRenderer<W: Write> {
    out: W,
    clear: bool,
}

impl<W: Write> ConsoleRenderer<W> {
    pub fn new(out: W, clear: bool) -> Self {
        Self { out, clear }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for ConsoleRenderer<W> {
    fn render(&mut self, grid: &GridEngine) -> Result<(), AppError> {
        if self.clear {
            execute!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        writeln!(self.out, "Generation {} -------------------", grid.generation())?;
        writeln!(self.out, "{}", grid)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Advance then print, `generations` times. The starting grid is never shown.
pub fn play<W: Write>(
    grid: &mut GridEngine,
    renderer: &mut ConsoleRenderer<W>,
    args: &ConsoleArgs,
) -> Result<(), AppError> {
    for _ in 0..args.generations {
        grid.advance();
        debug!("generation {}: {} live cells", grid.generation(), grid.live_count());
        renderer.render(grid)?;
        if !args.interval.is_zero() {
            thread::sleep(args.interval);
        }
    }
    Ok(())
}

pub fn run_console(args: ConsoleArgs) -> Result<(), AppError> {
    let dish = args.dish()?;
    let mut grid = dish.build()?;
    info!(
        "console dish: {}x{} grid, {} live cells, {} generations",
        dish.grid, dish.grid, dish.cells, args.generations
    );
    let mut renderer = ConsoleRenderer::new(io::stdout(), args.clear);
    play(&mut grid, &mut renderer, &args)
}
