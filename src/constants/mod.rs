pub mod scene;
pub mod snow;
pub mod text;
pub mod tree;

pub const WIDTH: u16 = 60;
pub const HEIGHT: u16 = 20;
pub const MAX_WIDTH: u16 = 500;
pub const MAX_HEIGHT: u16 = 200;

pub const TICK_RATE: f64 = 5.0; // Ticks per second
pub const START_DELAY_MS: u64 = 1000;
