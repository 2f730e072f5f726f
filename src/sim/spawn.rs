//! Spawn requests and the crowding admission rule

use glam::Vec2;
use rand::Rng;

use super::state::{Bubble, Growth, SimState};
use crate::consts::*;

/// Buffer a spawn request for the next tick.
///
/// The candidate rolls a random hue and lifespan; the position defaults to
/// the viewport center when omitted. It sits in the pending queue until the
/// next tick drains it through [`admit_pending`], so rapid pointer movement
/// never mutates the store mid-iteration.
pub fn request_spawn(state: &mut SimState, pos: Option<Vec2>) {
    let pos = pos.unwrap_or_else(|| state.center());
    let hue = state.rng.random::<f32>();
    let age = state.rng.random_range(START_AGE_MIN..START_AGE_MAX);

    state.pending.push(Bubble {
        pos,
        radius: SPAWN_RADIUS,
        hue,
        growth: Growth::Outward,
        age,
    });
}

/// Drain the pending queue, admitting each candidate that passes the
/// crowding check and dropping the rest.
pub fn admit_pending(state: &mut SimState) {
    let pending = std::mem::take(&mut state.pending);

    for candidate in pending {
        if admits(state, &candidate) {
            state.bubbles.push(candidate);
        } else {
            log::debug!(
                "spawn rejected at ({:.0}, {:.0}): too crowded",
                candidate.pos.x,
                candidate.pos.y
            );
        }
    }
}

/// The crowding check: probe the candidate at triple its radius. Any stored
/// bubble that overlaps the probe and is itself no larger than the probe
/// would drown the newcomer in a cluster of small bubbles, so the candidate
/// is rejected. Bubbles larger than the probe don't block admission.
fn admits(state: &SimState, candidate: &Bubble) -> bool {
    let probe = candidate.radius * CROWD_PROBE_SCALE;

    !state.bubbles.iter().any(|other| {
        candidate.pos.distance(other.pos) <= probe + other.radius && other.radius <= probe
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bubble_at(x: f32, y: f32, radius: f32) -> Bubble {
        Bubble {
            pos: Vec2::new(x, y),
            radius,
            hue: 0.0,
            growth: Growth::Outward,
            age: 250.0,
        }
    }

    #[test]
    fn test_spawn_into_empty_store() {
        let mut state = SimState::new(7);
        state.set_viewport(800.0, 600.0);

        request_spawn(&mut state, Some(Vec2::new(100.0, 100.0)));
        assert_eq!(state.pending.len(), 1);
        assert!(state.bubbles.is_empty());

        admit_pending(&mut state);
        assert!(state.pending.is_empty());
        assert_eq!(state.bubbles.len(), 1);

        let bubble = &state.bubbles[0];
        assert_eq!(bubble.pos, Vec2::new(100.0, 100.0));
        assert_eq!(bubble.radius, SPAWN_RADIUS);
        assert_eq!(bubble.growth, Growth::Outward);
        assert!((START_AGE_MIN..START_AGE_MAX).contains(&bubble.age));
        assert!((0.0..1.0).contains(&bubble.hue));
    }

    #[test]
    fn test_spawn_defaults_to_center() {
        let mut state = SimState::new(7);
        state.set_viewport(800.0, 600.0);

        request_spawn(&mut state, None);
        admit_pending(&mut state);
        assert_eq!(state.bubbles[0].pos, Vec2::new(400.0, 300.0));
    }

    #[test]
    fn test_small_neighbor_rejects_candidate() {
        // Probe radius 30: distance 5 <= 30 + 5 and 5 <= 30
        let mut state = SimState::new(7);
        state.set_viewport(800.0, 600.0);
        state.bubbles.push(bubble_at(100.0, 100.0, 5.0));

        request_spawn(&mut state, Some(Vec2::new(105.0, 100.0)));
        admit_pending(&mut state);

        assert_eq!(state.bubbles.len(), 1);
        assert!(state.pending.is_empty());
    }

    #[test]
    fn test_large_neighbor_admits_candidate() {
        // Overlaps the probe, but radius 50 > probe 30 so it doesn't block;
        // the admitted bubble keeps its original radius
        let mut state = SimState::new(7);
        state.set_viewport(800.0, 600.0);
        state.bubbles.push(bubble_at(100.0, 100.0, 50.0));

        request_spawn(&mut state, Some(Vec2::new(110.0, 100.0)));
        admit_pending(&mut state);

        assert_eq!(state.bubbles.len(), 2);
        assert_eq!(state.bubbles[1].radius, SPAWN_RADIUS);
    }

    #[test]
    fn test_earlier_admission_blocks_later_candidate() {
        // Two taps in the same spot within one tick: the first one in
        // becomes the blocker for the second
        let mut state = SimState::new(7);
        state.set_viewport(800.0, 600.0);

        request_spawn(&mut state, Some(Vec2::new(200.0, 200.0)));
        request_spawn(&mut state, Some(Vec2::new(205.0, 200.0)));
        admit_pending(&mut state);

        assert_eq!(state.bubbles.len(), 1);
    }
}
