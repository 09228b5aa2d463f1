//https://github.com/parasyte/pixels/tree/c2454b01abc11c007d4b9de8525195af942fef0d/examples/conway

use winit::dpi::{LogicalPosition, LogicalSize, PhysicalSize};
use winit::error::OsError;
use winit::event_loop::EventLoop;
use winit::window::{Window, WindowBuilder};

/// Edge length of one cell on screen, in logical pixels.
pub const CELL_SIZE: f64 = 10.0;
pub const TARGET_FPS: u64 = 30;

pub const ALIVE_COLOR: [u8; 4] = [0, 0xff, 0, 0xff];
pub const DEAD_COLOR: [u8; 4] = [0, 0, 0, 0xff];

/// Create a window sized so every grid cell is `CELL_SIZE` logical pixels
/// across, shrunk if that would not fit on the current monitor.
///
/// Returns `(window, surface_width, surface_height, hidpi_factor)`.
pub fn create_window(
    title: &str,
    event_loop: &EventLoop<()>,
    grid: u32,
) -> Result<(Window, u32, u32, f64), OsError> {
    // Create a hidden window so we can estimate a good default window size
    let window = WindowBuilder::new()
        .with_visible(false)
        .with_title(title)
        .build(event_loop)?;
    let hidpi_factor = window.scale_factor();

    let side = grid as f64;
    let (monitor_width, monitor_height) = match window.current_monitor() {
        Some(monitor) => {
            let size = monitor.size().to_logical::<f64>(hidpi_factor);
            (size.width, size.height)
        }
        None => (side * CELL_SIZE, side * CELL_SIZE),
    };
    let fit = (monitor_height * 2.0 / 3.0 / side).floor();
    let scale = CELL_SIZE.min(fit).max(1.0);

    let min_size: LogicalSize<f64> = PhysicalSize::new(side, side).to_logical(hidpi_factor);
    let default_size = LogicalSize::new(side * scale, side * scale);
    let center = LogicalPosition::new(
        ((monitor_width - side * scale) / 2.0).max(0.0),
        ((monitor_height - side * scale) / 2.0).max(0.0),
    );
    window.set_inner_size(default_size);
    window.set_min_inner_size(Some(min_size));
    window.set_outer_position(center);
    window.set_visible(true);

    let size = default_size.to_physical::<f64>(hidpi_factor);

    Ok((
        window,
        size.width.round() as u32,
        size.height.round() as u32,
        hidpi_factor,
    ))
}
