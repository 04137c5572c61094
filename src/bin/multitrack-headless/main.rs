//! Scripted frame-loop demo: a synthetic capture feed, a pointer script
//! standing in for the user's drag, and log/JSON output instead of a
//! window. The tracking lifecycle is exactly the one the GUI uses.

use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use log::{debug, info};

use multitrack_demo::capture::{FrameSource, SyntheticCapture};
use multitrack_demo::settings::Cli;
use multitrack_demo::systems::render::{ConsoleSink, RenderSink};
use multitrack_demo::systems::Systems;

mod script;

use script::PointerScript;

const DEFAULT_FRAME_COUNT: usize = 240;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize the logger from the environment

    env_logger::Builder::from_env(Env::default().default_filter_or(&cli.log_level)).init();

    debug!("Started; args: {:?}", cli);

    let mut capture = SyntheticCapture::new(cli.capture_width, cli.capture_height)
        .with_frame_limit(cli.max_frames.unwrap_or(DEFAULT_FRAME_COUNT));

    let script = match &cli.script_path {
        Some(path) => PointerScript::from_file(path)?,
        None => PointerScript::demo(capture.blob_region()),
    };

    let mut systems = Systems::new(&cli)?;
    let mut sink = ConsoleSink::new(cli.dump_tracking);

    let mut frame_index = 0;
    while let Some(frame) = capture.next_frame() {
        let events = script.events_for(frame_index);
        let tracked = systems.process_frame(&frame, &events);
        sink.present(&frame, &tracked, systems.selection.live_candidate())?;
        frame_index += 1;
    }

    systems.registry.teardown();
    info!("Clean shutdown after {} frames", frame_index);

    Ok(())
}
