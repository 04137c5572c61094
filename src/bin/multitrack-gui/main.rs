//! Interactive demo window: the capture feed is shown as a texture, a
//! pointer drag selects a rectangle to track, `q` quits. Shares all
//! tracking types and lifecycle logic with the headless binary.

use clap::Parser;
use env_logger::Env;
use log::debug;
use model::Model;
use multitrack_demo::settings::Cli;

mod model;

fn main() -> Result<(), eframe::Error> {
    let cli = Cli::parse();

    // Initialize the logger from the environment

    env_logger::Builder::from_env(Env::default().default_filter_or(&cli.log_level))
        .filter_module("winit", log::LevelFilter::Warn)
        .filter_module("eframe", log::LevelFilter::Warn)
        .init();

    debug!("Started; args: {:?}", cli);

    let options = eframe::NativeOptions {
        initial_window_size: Some(egui::vec2(
            cli.capture_width as f32 + 16.0,
            cli.capture_height as f32 + 16.0,
        )),
        ..Default::default()
    };
    eframe::run_native(
        "Multitrack Demo",
        options,
        Box::new(|_cc| Box::<Model>::default()),
    )
}
