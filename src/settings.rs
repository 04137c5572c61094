use clap::{command, Parser};

// Some defaults; all of which can be overriden via CLI args
const CAPTURE_WIDTH: u32 = 1280;
const CAPTURE_HEIGHT: u32 = 720;
const LOSS_THRESHOLD: u32 = 100;
const ALGORITHM: &str = "template";

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Capture device index (the synthetic capture keeps the slot but
    /// ignores it)
    #[arg(long = "capture.device", default_value_t = 0)]
    pub capture_device: usize,

    /// Initial capture width in pixels
    #[arg(long = "capture.width", default_value_t = CAPTURE_WIDTH)]
    pub capture_width: u32,

    /// Initial capture height in pixels
    #[arg(long = "capture.height", default_value_t = CAPTURE_HEIGHT)]
    pub capture_height: u32,

    /// Tracking algorithm to bind to each new selection: "template" or
    /// "meanshift"
    #[arg(long="tracking.algorithm", default_value_t=String::from(ALGORITHM))]
    pub algorithm: String,

    /// Consecutive failed updates tolerated before a tracked object is
    /// dropped
    #[arg(long = "tracking.lossThreshold", default_value_t = LOSS_THRESHOLD)]
    pub loss_threshold: u32,

    #[arg(long = "loglevel", default_value_t=String::from("info"))]
    pub log_level: String,

    /// Optional JSON pointer-event script for the headless demo; a built-in
    /// demo drag is used when omitted
    #[arg(long = "script")]
    pub script_path: Option<String>,

    /// Stop the headless frame loop after this many frames
    #[arg(long = "maxFrames")]
    pub max_frames: Option<usize>,

    /// Print tracked regions as JSON lines instead of log output
    #[arg(long = "dumpTracking")]
    pub dump_tracking: bool,
}
