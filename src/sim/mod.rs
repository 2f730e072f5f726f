//! Deterministic simulation module
//!
//! All animation logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Stable iteration order (insertion order is render order)
//! - No rendering or platform dependencies

pub mod geom;
pub mod spawn;
pub mod state;
pub mod tick;

pub use geom::circles_touching;
pub use spawn::{admit_pending, request_spawn};
pub use state::{Bubble, Growth, SimState};
pub use tick::tick;
