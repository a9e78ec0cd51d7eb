// Math utilities shared by the game logic and the physics bridge

use glam::Vec2;
use rapier2d::prelude::{vector, Real, Vector};

/// Convert a rapier vector into a glam vector
pub fn to_vec2(v: &Vector<Real>) -> Vec2 {
    Vec2::new(v.x, v.y)
}

/// Convert a glam vector into a rapier vector
pub fn to_vector(v: Vec2) -> Vector<Real> {
    vector![v.x, v.y]
}

/// Rescale `v` to `max` if it is longer, keeping its direction
pub fn clamp_length(v: Vec2, max: f32) -> Vec2 {
    let length = v.length();
    if length > max && length > 0.0 {
        v * (max / length)
    } else {
        v
    }
}

/// Horizontal start that centres a monospace line of `chars` cells
pub fn centered_x(area_width: f32, chars: usize, cell: f32) -> f32 {
    (area_width - chars as f32 * cell) / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_vector_conversion() {
        let v = Vec2::new(3.0, -4.0);
        assert_eq!(to_vec2(&to_vector(v)), v);
    }

    #[test]
    fn test_clamp_length_long_vector() {
        let clamped = clamp_length(Vec2::new(30.0, 40.0), 5.0);
        assert_relative_eq!(clamped.length(), 5.0, epsilon = 1e-5);
        assert_relative_eq!(clamped.x, 3.0, epsilon = 1e-5);
        assert_relative_eq!(clamped.y, 4.0, epsilon = 1e-5);
    }

    #[test]
    fn test_clamp_length_short_vector_untouched() {
        let v = Vec2::new(1.0, 1.0);
        assert_eq!(clamp_length(v, 5.0), v);
        assert_eq!(clamp_length(Vec2::ZERO, 5.0), Vec2::ZERO);
    }

    #[test]
    fn test_centered_x() {
        assert_eq!(centered_x(324.0, 6, 36.0), 54.0);
        // Lines wider than the area start off-screen
        assert!(centered_x(324.0, 20, 24.0) < 0.0);
    }
}
