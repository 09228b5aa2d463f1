pub mod console_life;
pub mod window_life;
