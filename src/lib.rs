pub mod capture;
pub mod frame;
pub mod region;
pub mod settings;
pub mod systems;
pub mod trackers;
pub mod tracking;

pub type PixelPoint = (i32, i32);
