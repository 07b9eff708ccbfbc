use macroquad::math::{Vec2, vec2};

/// Screen space grows downward; the simulation uses y-up world units.
pub fn screen_to_world(screen: Vec2, screen_h: f32) -> Vec2 {
    vec2(screen.x, screen_h - screen.y)
}

pub fn world_to_screen(world: Vec2, screen_h: f32) -> Vec2 {
    vec2(world.x, screen_h - world.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flips_vertical_axis_only() {
        assert_eq!(screen_to_world(vec2(150.0, 420.0), 600.0), vec2(150.0, 180.0));
        assert_eq!(world_to_screen(vec2(150.0, 180.0), 600.0), vec2(150.0, 420.0));
    }

    #[test]
    fn transforms_are_inverse() {
        let screen = vec2(37.5, 12.25);
        let back = world_to_screen(screen_to_world(screen, 640.0), 640.0);
        assert_eq!(back, screen);
    }
}
