//! Simulation state and the bubble entity

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::consts::*;

/// Radial growth direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Growth {
    /// Radius increases each step
    Outward,
    /// Radius decreases each step
    Inward,
}

impl Growth {
    /// The ±1 multiplier applied to the growth speed
    #[inline]
    pub fn signum(self) -> f32 {
        match self {
            Growth::Outward => 1.0,
            Growth::Inward => -1.0,
        }
    }

    /// Reversed direction
    #[inline]
    pub fn flipped(self) -> Self {
        match self {
            Growth::Outward => Growth::Inward,
            Growth::Inward => Growth::Outward,
        }
    }
}

/// A bubble entity
#[derive(Debug, Clone, PartialEq)]
pub struct Bubble {
    /// Center position (screen pixels)
    pub pos: Vec2,
    /// Current radius, never below `MIN_RADIUS` after a step
    pub radius: f32,
    /// Hue in [0, 1), fixed at creation
    pub hue: f32,
    /// Current growth direction
    pub growth: Growth,
    /// Remaining lifetime; removed once this drops below `MIN_AGE`
    pub age: f32,
}

impl Bubble {
    /// One growth step, clamped at the minimum radius
    pub fn apply_growth(&mut self) {
        self.radius = (self.radius + self.growth.signum() * GROWTH_SPEED).max(MIN_RADIUS);
    }

    /// Stroke alpha: fully opaque while alive, then a linear fade over the
    /// final `|MIN_AGE|` ticks
    pub fn fade_alpha(&self) -> f32 {
        if self.age < 0.0 {
            (MIN_AGE.abs() - self.age.abs()) / MIN_AGE.abs()
        } else {
            1.0
        }
    }
}

/// Complete simulation state, owned by the frame driver and passed by
/// reference into the spawner, the tick, and the renderer
#[derive(Debug, Clone)]
pub struct SimState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Live bubbles; insertion order is render order
    pub bubbles: Vec<Bubble>,
    /// Candidates buffered between input events and the next tick
    pub pending: Vec<Bubble>,
    /// Intro caption ticks remaining; never revives once it hits zero
    pub intro_ticks: u32,
    /// Viewport size in pixels, resynced by the frame driver every
    /// executed tick
    pub viewport: Vec2,
    /// Executed tick counter
    pub time_ticks: u64,
    /// Seeded RNG for hue and lifespan rolls
    pub rng: Pcg32,
}

impl SimState {
    /// Create a new simulation state with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            bubbles: Vec::new(),
            pending: Vec::new(),
            intro_ticks: INTRO_TICKS,
            viewport: Vec2::ZERO,
            time_ticks: 0,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Resync to the viewport size. Bubbles keep their positions; anything
    /// pushed off-screen simply stops rendering within the visible area.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.viewport = Vec2::new(width, height);
    }

    /// Screen center, the default spawn position
    pub fn center(&self) -> Vec2 {
        self.viewport / 2.0
    }

    /// Intro caption alpha for the current counter, or `None` once expired
    pub fn intro_alpha(&self) -> Option<f32> {
        if self.intro_ticks == 0 {
            None
        } else {
            Some(self.intro_ticks.min(INTRO_FADE_TICKS) as f32 / INTRO_FADE_TICKS as f32)
        }
    }

    /// Burn one intro tick
    pub fn advance_intro(&mut self) {
        self.intro_ticks = self.intro_ticks.saturating_sub(1);
    }
}
