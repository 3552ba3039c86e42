//! Projectile set: ballistic motion and off-screen pruning

use glam::Vec2;

use super::state::Shot;

/// Whether `pos` is still inside the play area grown by `margin` on every
/// side. Points exactly on the grown boundary count as inside.
#[inline]
pub fn in_play_bounds(pos: Vec2, screen: Vec2, margin: f32) -> bool {
    pos.x >= -margin && pos.x <= screen.x + margin && pos.y >= -margin && pos.y <= screen.y + margin
}

/// Integrate every shot and drop the ones that left the play area
pub fn advance_shots(shots: &mut Vec<Shot>, gravity: f32, screen: Vec2, margin: f32, dt: f32) {
    shots.retain_mut(|shot| {
        shot.integrate(gravity, dt);
        in_play_bounds(shot.pos, screen, margin)
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const SCREEN: Vec2 = Vec2::new(800.0, 600.0);

    #[test]
    fn test_boundary_is_inclusive() {
        let mut shots = vec![
            Shot::new(Vec2::new(832.0, 300.0), Vec2::ZERO),
            Shot::new(Vec2::new(833.0, 300.0), Vec2::ZERO),
            Shot::new(Vec2::new(-32.0, -32.0), Vec2::ZERO),
            Shot::new(Vec2::new(400.0, -33.0), Vec2::ZERO),
            Shot::new(Vec2::new(400.0, 632.0), Vec2::ZERO),
            Shot::new(Vec2::new(400.0, 633.0), Vec2::ZERO),
        ];
        advance_shots(&mut shots, 0.0, SCREEN, 32.0, 0.0);
        let kept: Vec<Vec2> = shots.iter().map(|s| s.pos).collect();
        assert_eq!(
            kept,
            vec![
                Vec2::new(832.0, 300.0),
                Vec2::new(-32.0, -32.0),
                Vec2::new(400.0, 632.0),
            ]
        );
    }

    #[test]
    fn test_shot_falls_out_of_play() {
        let mut shots = vec![Shot::new(Vec2::new(400.0, 0.0), Vec2::ZERO)];
        advance_shots(&mut shots, -980.0, SCREEN, 32.0, 0.1);
        assert_eq!(shots.len(), 1);
        advance_shots(&mut shots, -980.0, SCREEN, 32.0, 0.2);
        assert!(shots.is_empty());
    }

    #[test]
    fn test_empty_set_is_fine() {
        let mut shots = Vec::new();
        advance_shots(&mut shots, -980.0, SCREEN, 32.0, 1.0 / 60.0);
        assert!(shots.is_empty());
    }

    fn arb_shot() -> impl Strategy<Value = Shot> {
        (0.0f32..800.0, 0.0f32..600.0, -2000.0f32..2000.0, -2000.0f32..2000.0)
            .prop_map(|(x, y, vx, vy)| Shot::new(Vec2::new(x, y), Vec2::new(vx, vy)))
    }

    proptest! {
        #[test]
        fn prop_zero_dt_is_identity(shots in prop::collection::vec(arb_shot(), 0..32)) {
            let mut advanced = shots.clone();
            advance_shots(&mut advanced, -980.0, SCREEN, 32.0, 0.0);
            prop_assert_eq!(advanced, shots);
        }

        #[test]
        fn prop_gravity_lowers_vertical_velocity(
            shot in arb_shot(),
            dts in prop::collection::vec(0.001f32..0.05, 1..20),
        ) {
            let mut shot = shot;
            for dt in dts {
                let before = shot.vel.y;
                shot.integrate(-980.0, dt);
                prop_assert!(shot.vel.y < before);
            }
        }

        #[test]
        fn prop_survivors_are_in_bounds(
            shots in prop::collection::vec(arb_shot(), 0..32),
            dt in 0.0f32..0.1,
        ) {
            let mut advanced = shots;
            advance_shots(&mut advanced, -980.0, SCREEN, 32.0, dt);
            for shot in &advanced {
                prop_assert!(in_play_bounds(shot.pos, SCREEN, 32.0));
            }
        }
    }
}
