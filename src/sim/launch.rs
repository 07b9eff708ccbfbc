use macroquad::math::Vec2;

/// Keeps a drag point within `max_distance` of the slingshot origin,
/// preserving its direction.
pub fn clamp_drag(origin: Vec2, pointer: Vec2, max_distance: f32) -> Vec2 {
    let offset = pointer - origin;
    if offset.length() > max_distance {
        origin + offset.normalize_or_zero() * max_distance
    } else {
        pointer
    }
}

/// Band tension scaled by `gain`. Pulling back and down launches up and forward.
pub fn launch_impulse(origin: Vec2, release: Vec2, gain: f32) -> Vec2 {
    (origin - release) * gain
}

/// Velocity change of a central impulse on a body of `mass`.
pub fn launch_velocity(impulse: Vec2, mass: f32) -> Vec2 {
    impulse / mass
}

pub fn can_grab(pointer: Vec2, projectile: Vec2, radius: f32, factor: f32) -> bool {
    pointer.distance(projectile) <= radius * factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use macroquad::math::vec2;

    fn assert_close(actual: f32, expected: f32, tolerance: f32) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "actual={actual}, expected={expected}, tolerance={tolerance}"
        );
    }

    #[test]
    fn drag_inside_range_is_untouched() {
        let origin = vec2(150.0, 180.0);
        let pointer = vec2(100.0, 140.0);
        assert_eq!(clamp_drag(origin, pointer, 140.0), pointer);
    }

    #[test]
    fn long_drag_is_clamped_along_the_same_ray() {
        let origin = vec2(150.0, 180.0);
        let clamped = clamp_drag(origin, vec2(-150.0, -220.0), 140.0);
        assert_close(clamped.distance(origin), 140.0, 1e-3);

        // 300:400 offset keeps its 3:4 direction.
        assert_close(clamped.x, 150.0 - 84.0, 1e-3);
        assert_close(clamped.y, 180.0 - 112.0, 1e-3);
    }

    #[test]
    fn drag_at_origin_stays_at_origin() {
        let origin = vec2(150.0, 180.0);
        assert_eq!(clamp_drag(origin, origin, 140.0), origin);
        assert_eq!(clamp_drag(origin, origin, 0.0), origin);
        assert_eq!(launch_impulse(origin, origin, 7.0), Vec2::ZERO);
    }

    #[test]
    fn impulse_points_away_from_the_pull() {
        let impulse = launch_impulse(vec2(150.0, 180.0), vec2(50.0, 130.0), 7.0);
        assert_eq!(impulse, vec2(700.0, 350.0));

        let velocity = launch_velocity(impulse, 4.0);
        assert_close(velocity.x, 175.0, 1e-4);
        assert_close(velocity.y, 87.5, 1e-4);
    }

    #[test]
    fn grab_uses_scaled_radius() {
        let ball = vec2(150.0, 180.0);
        assert!(can_grab(vec2(150.0 + 22.0, 180.0), ball, 16.0, 1.4));
        assert!(!can_grab(vec2(150.0 + 23.0, 180.0), ball, 16.0, 1.4));
    }
}
