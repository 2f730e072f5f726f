//! Bubble Fun - an interactive bubble animation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (bubble store, spawning, per-tick step)
//! - `color`: HSV to RGB conversion for canvas stroke styles
//! - `renderer`: Canvas 2D painter (wasm only)

pub mod color;
#[cfg(target_arch = "wasm32")]
pub mod renderer;
pub mod sim;

pub use sim::{Bubble, SimState};

/// Animation configuration constants
pub mod consts {
    /// Stroke width for bubble outlines (pixels)
    pub const CIRCLE_WIDTH: f64 = 4.0;
    /// Radius change per growth step (pixels)
    pub const GROWTH_SPEED: f32 = 2.0;
    /// Smallest radius a bubble may shrink to
    pub const MIN_RADIUS: f32 = 5.0;
    /// A bubble is removed once its age drops below this
    pub const MIN_AGE: f32 = -10.0;

    /// Radius of a freshly spawned bubble
    pub const SPAWN_RADIUS: f32 = 10.0;
    /// Starting age is rolled uniformly from [START_AGE_MIN, START_AGE_MAX)
    pub const START_AGE_MIN: f32 = 200.0;
    pub const START_AGE_MAX: f32 = 270.0;
    /// Crowding checks probe the candidate at this multiple of its radius
    pub const CROWD_PROBE_SCALE: f32 = 3.0;

    /// Intro caption lifetime (executed ticks)
    pub const INTRO_TICKS: u32 = 300;
    /// The caption fades over its final ticks
    pub const INTRO_FADE_TICKS: u32 = 100;
    /// Intro font size cap (pixels)
    pub const INTRO_FONT_MAX: f64 = 48.0;

    /// Minimum milliseconds between executed frames (~60 Hz)
    pub const FRAME_INTERVAL_MS: f64 = 16.0;
}
