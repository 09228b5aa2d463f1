// Life on a wrapping petri dish. The window front end follows the pixels crate's conway example
//https://github.com/parasyte/pixels/tree/c2454b01abc11c007d4b9de8525195af942fef0d/examples/conway

use clap::Parser;
use log::error;

use petri_dish::auxiliary::config::{Cli, Mode};
use petri_dish::projects::{console_life, window_life};
use petri_dish::traits_and_structs::AppError;

fn select_mode(mode: Mode) -> Result<(), AppError> {
    match mode {
        Mode::Window(args) => window_life::run_window(args),
        Mode::Console(args) => console_life::run_console(args),
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    if let Err(e) = select_mode(cli.mode) {
        error!("{}", e);
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
