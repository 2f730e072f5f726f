//! Per-frame simulation step

use super::geom::circles_touching;
use super::spawn::admit_pending;
use super::state::{Growth, SimState};
use crate::consts::*;

/// Advance the simulation by one frame:
/// 1. pairwise collision pass (reversals, at most one per bubble)
/// 2. uniform growth and aging pass
/// 3. compaction of aged-out bubbles
/// 4. pending-spawn intake
///
/// Bubbles that collided receive a second growth step in pass 2. The
/// original animation behaves this way and the doubled step is part of its
/// look, so it is kept.
pub fn tick(state: &mut SimState) {
    collide(state);

    for bubble in &mut state.bubbles {
        bubble.apply_growth();
        bubble.age -= 1.0;

        // Bounce back outward once fully shrunk
        if bubble.radius <= MIN_RADIUS {
            bubble.growth = Growth::Outward;
        }
    }

    state.bubbles.retain(|b| b.age >= MIN_AGE);

    admit_pending(state);
    state.time_ticks += 1;
}

/// Pairwise collision pass. Every touching pair reverses both members'
/// growth direction and applies one immediate growth step, but a bubble
/// reverses at most once per tick no matter how many others it touches.
fn collide(state: &mut SimState) {
    let mut reversed = vec![false; state.bubbles.len()];

    for i in 0..state.bubbles.len() {
        for j in (i + 1)..state.bubbles.len() {
            let (a, b) = (&state.bubbles[i], &state.bubbles[j]);
            if !circles_touching(a.pos, a.radius, b.pos, b.radius) {
                continue;
            }

            if !reversed[i] {
                reversed[i] = true;
                let a = &mut state.bubbles[i];
                a.growth = a.growth.flipped();
                a.apply_growth();
            }
            if !reversed[j] {
                reversed[j] = true;
                let b = &mut state.bubbles[j];
                b.growth = b.growth.flipped();
                b.apply_growth();
            }
        }
    }
}
