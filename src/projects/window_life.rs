
#![deny(clippy::all)]
#![forbid(unsafe_code)]

use std::time::{Duration, Instant};

use log::{debug, error, info};
use pixels::{Pixels, SurfaceTexture};
use winit::event::{Event, VirtualKeyCode};
use winit::event_loop::{ControlFlow, EventLoop};
use winit_input_helper::WinitInputHelper;

use crate::auxiliary::config::{DishConfig, WindowArgs};
use crate::auxiliary::window::{create_window, ALIVE_COLOR, DEAD_COLOR, TARGET_FPS};
use crate::traits_and_structs::{AppError, Cell, GridEngine, Renderer};

const FRAME_TIME: Duration = Duration::from_millis(1000 / TARGET_FPS);

/// Paints one RGBA pixel per cell into a `pixels` frame buffer that is
/// exactly `grid x grid` pixels; the surface scales it up to the window.
pub struct FrameRenderer {
    pixels: Pixels,
}

impl FrameRenderer {
    pub fn new(pixels: Pixels) -> Self {
        Self { pixels }
    }

    /// Window position to grid cell, clamped onto the grid.
    fn cell_at(&self, pos: (f32, f32)) -> (isize, isize) {
        let (x, y) = self
            .pixels
            .window_pos_to_pixel(pos)
            .unwrap_or_else(|pos| self.pixels.clamp_pixel_pos(pos));
        (x as isize, y as isize)
    }
}

impl Renderer for FrameRenderer {
    fn render(&mut self, grid: &GridEngine) -> Result<(), AppError> {
        draw_cells(grid, self.pixels.get_frame());
        self.pixels.render()?;
        Ok(())
    }
}

pub fn draw_cells(grid: &GridEngine, screen: &mut [u8]) {
    let n = grid.dimensions();
    debug_assert_eq!(screen.len(), 4 * n * n);
    for (row, pixel_row) in grid.rows().zip(screen.chunks_exact_mut(4 * n)) {
        for (c, pix) in row.iter().zip(pixel_row.chunks_exact_mut(4)) {
            let color = if c.is_alive() { ALIVE_COLOR } else { DEAD_COLOR };
            pix.copy_from_slice(&color);
        }
    }
}

/// Paint a continuous stroke of live cells, stopping where it leaves the grid.
pub fn paint_line(grid: &mut GridEngine, from: (isize, isize), to: (isize, isize)) {
    for (x, y) in line_drawing::Bresenham::new(from, to) {
        let inside = usize::try_from(x)
            .ok()
            .zip(usize::try_from(y).ok())
            .map(|(x, y)| grid.set_cell(x, y, Cell::Alive).is_ok())
            .unwrap_or(false);
        if !inside {
            break;
        }
    }
}

/// Decides when the next generation is due, independent of the frame rate.
#[derive(Debug)]
pub struct Pacer {
    interval: Duration,
    last_update: Instant,
    pub paused: bool,
}

impl Pacer {
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            last_update: now,
            paused: false,
        }
    }

    /// True at most once per `interval`, never while paused.
    pub fn due(&mut self, now: Instant) -> bool {
        if self.paused || now.duration_since(self.last_update) < self.interval {
            return false;
        }
        self.last_update = now;
        true
    }
}

pub fn run_window(args: WindowArgs) -> Result<(), AppError> {
    let dish = args.dish()?;
    let mut grid = dish.build()?;

    let event_loop = EventLoop::new();
    let mut input = WinitInputHelper::new();
    let (window, p_width, p_height, mut _hidpi_factor) =
        create_window("Petri Dish", &event_loop, args.grid)?;

    let surface_texture = SurfaceTexture::new(p_width, p_height, &window);
    let mut renderer = FrameRenderer::new(Pixels::new(args.grid, args.grid, surface_texture)?);
    let mut pacer = Pacer::new(args.interval, Instant::now());
    let mut painting = false;

    info!(
        "window dish: {}x{} grid, {} live cells, new generation every {:?}",
        dish.grid, dish.grid, dish.cells, args.interval
    );

    event_loop.run(move |event, _, control_flow| {
        // The one and only event that winit_input_helper doesn't have for us...
        if let Event::RedrawRequested(_) = event {
            if let Err(e) = renderer.render(&grid) {
                error!("render failed: {}", e);
                *control_flow = ControlFlow::Exit;
                return;
            }
        }

        // Input state is collected by winit_input_helper; `update` turns true once
        // per batch of events, which is when the dish and the frame are refreshed.
        if input.update(&event) {
            // Close events
            if input.key_pressed(VirtualKeyCode::Escape) || input.quit() {
                *control_flow = ControlFlow::Exit;
                return;
            }
            if input.key_pressed(VirtualKeyCode::P) {
                pacer.paused = !pacer.paused;
                info!("{}", if pacer.paused { "paused" } else { "unpaused" });
            }
            let step = input.key_pressed(VirtualKeyCode::Space);
            if step {
                // Space is frame-step, so ensure we're paused
                pacer.paused = true;
            }
            if input.key_pressed(VirtualKeyCode::R) {
                match GridEngine::new(dish.grid, dish.cells) {
                    Ok(fresh) => {
                        info!("reseeded with {} live cells", dish.cells);
                        grid = fresh;
                    }
                    Err(e) => error!("reseed failed: {}", e),
                }
            }
            if input.key_pressed(VirtualKeyCode::C) {
                let empty = DishConfig { cells: 0, ..dish };
                match empty.build() {
                    Ok(fresh) => {
                        info!("dish cleared");
                        grid = fresh;
                    }
                    Err(e) => error!("clear failed: {}", e),
                }
            }

            // Handle mouse. Strokes are drawn as lines between the previous
            // and current pointer positions so fast drags stay continuous.
            let (mouse_cell, mouse_prev_cell) = input
                .mouse()
                .map(|(mx, my)| {
                    let (dx, dy) = input.mouse_diff();
                    (
                        renderer.cell_at((mx, my)),
                        renderer.cell_at((mx - dx, my - dy)),
                    )
                })
                .unwrap_or_default();

            if input.mouse_pressed(0) {
                debug!("Mouse click at {:?}", mouse_cell);
                paint_line(&mut grid, mouse_cell, mouse_cell);
                painting = true;
            } else if painting {
                let release = input.mouse_released(0);
                let held = input.mouse_held(0);
                if release || held {
                    debug!("Draw at {:?} => {:?}", mouse_prev_cell, mouse_cell);
                    paint_line(&mut grid, mouse_prev_cell, mouse_cell);
                }
                if release || !held {
                    debug!("Draw end");
                    painting = false;
                }
            }
            // Adjust high DPI factor
            if let Some(factor) = input.scale_factor_changed() {
                _hidpi_factor = factor;
            }
            // Resize the window
            if let Some(size) = input.window_resized() {
                renderer.pixels.resize_surface(size.width, size.height);
            }
            // The dish holds still while the user is painting on it.
            if step || (!painting && pacer.due(Instant::now())) {
                grid.advance();
                debug!("generation {}", grid.generation());
            }
            window.request_redraw();
            *control_flow = ControlFlow::WaitUntil(Instant::now() + FRAME_TIME);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auxiliary::randomizer::seed_from_u64;

    fn empty(size: usize) -> GridEngine {
        GridEngine::with_seed(size, 0, seed_from_u64(0)).unwrap()
    }

    #[test]
    fn frame_matches_cells_row_major() {
        let mut grid = empty(3);
        grid.set_cell(2, 0, Cell::Alive).unwrap();
        grid.set_cell(0, 1, Cell::Alive).unwrap();
        let mut frame = vec![0x55; 4 * 9];
        draw_cells(&grid, &mut frame);
        for (i, pix) in frame.chunks_exact(4).enumerate() {
            let expected = if i == 2 || i == 3 { ALIVE_COLOR } else { DEAD_COLOR };
            assert_eq!(pix, &expected[..], "pixel {}", i);
        }
    }

    #[test]
    fn stroke_paints_every_cell_between_samples() {
        let mut grid = empty(8);
        paint_line(&mut grid, (1, 1), (5, 1));
        for x in 1..=5 {
            assert_eq!(grid.cell_state(x, 1), Ok(Cell::Alive));
        }
        assert_eq!(grid.live_count(), 5);
        assert_eq!(grid.generation(), 0);
    }

    #[test]
    fn stroke_stops_at_the_edge() {
        let mut grid = empty(4);
        paint_line(&mut grid, (2, 2), (6, 2));
        assert_eq!(grid.live_count(), 2);
        paint_line(&mut grid, (-1, 0), (3, 0));
        assert_eq!(grid.live_count(), 2);
    }

    #[test]
    fn pacer_fires_once_per_interval() {
        let start = Instant::now();
        let mut pacer = Pacer::new(Duration::from_millis(500), start);
        assert!(!pacer.due(start + Duration::from_millis(100)));
        assert!(pacer.due(start + Duration::from_millis(500)));
        assert!(!pacer.due(start + Duration::from_millis(600)));
        assert!(pacer.due(start + Duration::from_millis(1000)));
    }

    #[test]
    fn paused_pacer_never_fires() {
        let start = Instant::now();
        let mut pacer = Pacer::new(Duration::ZERO, start);
        pacer.paused = true;
        assert!(!pacer.due(start + Duration::from_secs(5)));
        pacer.paused = false;
        assert!(pacer.due(start + Duration::from_secs(5)));
    }
}
