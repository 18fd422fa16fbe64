//! Target scoring and relocation

use glam::IVec2;
use rand::Rng;

use super::collision::{Rect, aabb_intersect};
use super::state::{GameEvent, RngState, Target};
use crate::consts::*;

/// Score on the tick the player first touches the target
///
/// A held overlap scores once. The relocated target may land on the player
/// again; that counts as a new touch only after the overlap breaks.
pub fn update_target(
    target: &mut Target,
    player: &Rect,
    score: &mut u64,
    rng_state: &mut RngState,
    events: &mut Vec<GameEvent>,
) {
    let was_colliding = target.colliding;
    target.colliding = aabb_intersect(player, &target.rect());

    if target.colliding && !was_colliding {
        *score += 1;
        relocate_target(target, rng_state);
        events.push(GameEvent::Scored(*score));
        log::debug!("Scored {} - target moved to {}", score, target.pos);
    }
}

/// Move the target to a uniformly random fully on-screen position
pub fn relocate_target(target: &mut Target, rng_state: &mut RngState) {
    let mut rng = rng_state.next_rng();
    target.pos = IVec2::new(
        rng.random_range(0..=SCREEN_WIDTH - TARGET_WIDTH),
        rng.random_range(0..=SCREEN_HEIGHT - TARGET_HEIGHT),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn player_at(x: i32, y: i32) -> Rect {
        Rect::new(x, y, PLAYER_WIDTH, PLAYER_HEIGHT)
    }

    #[test]
    fn test_touch_scores_once() {
        let mut target = Target::default();
        let mut score = 0;
        let mut rng = RngState::new(3);
        let mut events = Vec::new();

        update_target(&mut target, &player_at(480, 320), &mut score, &mut rng, &mut events);
        assert_eq!(score, 1);
        assert!(target.colliding);
        assert_eq!(events, vec![GameEvent::Scored(1)]);
    }

    #[test]
    fn test_held_overlap_does_not_rescore() {
        let mut target = Target::default();
        let mut score = 0;
        let mut rng = RngState::new(3);
        let mut events = Vec::new();

        // Cover the whole screen so the relocated target still overlaps
        let everywhere = Rect::new(0, 0, SCREEN_WIDTH, SCREEN_HEIGHT);
        for _ in 0..10 {
            update_target(&mut target, &everywhere, &mut score, &mut rng, &mut events);
        }
        assert_eq!(score, 1);
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn test_rescore_after_leaving() {
        let mut target = Target::default();
        let mut score = 0;
        let mut rng = RngState::new(3);
        let mut events = Vec::new();

        let everywhere = Rect::new(0, 0, SCREEN_WIDTH, SCREEN_HEIGHT);
        let nowhere = Rect::new(-500, -500, PLAYER_WIDTH, PLAYER_HEIGHT);
        update_target(&mut target, &everywhere, &mut score, &mut rng, &mut events);
        update_target(&mut target, &nowhere, &mut score, &mut rng, &mut events);
        assert!(!target.colliding);
        update_target(&mut target, &everywhere, &mut score, &mut rng, &mut events);
        assert_eq!(score, 2);
    }

    #[test]
    fn test_no_touch_no_score() {
        let mut target = Target::default();
        let mut score = 0;
        let mut rng = RngState::new(3);
        let mut events = Vec::new();

        // Edge-touching the target's left side
        update_target(&mut target, &player_at(426, 330), &mut score, &mut rng, &mut events);
        assert_eq!(score, 0);
        assert_eq!(target.pos, IVec2::new(TARGET_START_X, TARGET_START_Y));
        assert!(events.is_empty());
    }

    #[test]
    fn test_relocation_is_seeded() {
        let mut a = Target::default();
        let mut b = Target::default();
        let mut rng_a = RngState::new(99);
        let mut rng_b = RngState::new(99);
        for _ in 0..5 {
            relocate_target(&mut a, &mut rng_a);
            relocate_target(&mut b, &mut rng_b);
            assert_eq!(a.pos, b.pos);
        }
    }

    proptest! {
        #[test]
        fn prop_relocation_stays_on_screen(seed in any::<u64>(), draws in 0u64..1000) {
            let mut target = Target::default();
            let mut rng = RngState { seed, draws };
            relocate_target(&mut target, &mut rng);
            prop_assert!((0..=SCREEN_WIDTH - TARGET_WIDTH).contains(&target.pos.x));
            prop_assert!((0..=SCREEN_HEIGHT - TARGET_HEIGHT).contains(&target.pos.y));
        }
    }
}
