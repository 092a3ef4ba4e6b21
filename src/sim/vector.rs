//! 2D vector helpers for pursuit movement

use glam::Vec2;

/// Delta pointing from `b` to `a`
#[inline]
pub fn subtract(a: Vec2, b: Vec2) -> Vec2 {
    a - b
}

/// Euclidean length of a delta
#[inline]
pub fn magnitude(delta: Vec2) -> f32 {
    delta.length()
}

/// Move `current` by `speed` toward `target` if it is farther than `leash`.
///
/// The leash boundary is exclusive: a point exactly `leash` away stays put.
/// A step never carries past `target`, and a zero-length delta never moves,
/// whatever the sign of `leash`.
pub fn step_toward(current: Vec2, target: Vec2, speed: f32, leash: f32) -> Vec2 {
    let delta = subtract(target, current);
    let distance = magnitude(delta);
    if distance > leash && distance > 0.0 {
        current + delta / distance * speed.min(distance)
    } else {
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subtract_and_magnitude() {
        let d = subtract(Vec2::new(4.0, 6.0), Vec2::new(1.0, 2.0));
        assert_eq!(d, Vec2::new(3.0, 4.0));
        assert_eq!(magnitude(d), 5.0);
        assert_eq!(magnitude(Vec2::ZERO), 0.0);
    }

    #[test]
    fn test_step_toward_diagonal() {
        let p = step_toward(Vec2::ZERO, Vec2::new(500.0, 500.0), 2.0, 20.0);
        let expected = 2.0 / 2.0_f32.sqrt();
        assert!((p.x - expected).abs() < 1e-5);
        assert!((p.y - expected).abs() < 1e-5);
        assert!((p.x - 1.414).abs() < 1e-3);
    }

    #[test]
    fn test_step_toward_at_leash_is_still() {
        let start = Vec2::new(10.0, 10.0);
        assert_eq!(step_toward(start, Vec2::new(30.0, 10.0), 2.0, 20.0), start);
        assert_eq!(step_toward(start, Vec2::new(10.0, -10.0), 2.0, 20.0), start);
    }

    #[test]
    fn test_step_toward_just_past_leash_moves() {
        let p = step_toward(Vec2::ZERO, Vec2::new(20.5, 0.0), 2.0, 20.0);
        assert_eq!(p, Vec2::new(2.0, 0.0));
    }

    #[test]
    fn test_step_toward_never_passes_target() {
        let p = step_toward(Vec2::ZERO, Vec2::new(21.0, 0.0), 50.0, 20.0);
        assert_eq!(p, Vec2::new(21.0, 0.0));

        let p = step_toward(Vec2::ZERO, Vec2::new(0.0, -30.0), 25.0, 20.0);
        assert_eq!(p, Vec2::new(0.0, -25.0));
    }

    #[test]
    fn test_step_toward_non_positive_leash_stays_finite() {
        let p = Vec2::new(4.0, 4.0);
        assert_eq!(step_toward(p, p, 2.0, 0.0), p);
        assert_eq!(step_toward(p, p, 2.0, -1.0), p);

        let q = step_toward(Vec2::ZERO, Vec2::new(1.0, 0.0), 2.0, -1.0);
        assert_eq!(q, Vec2::new(1.0, 0.0));
    }

    #[test]
    fn test_step_toward_same_point() {
        let p = Vec2::new(3.0, -7.0);
        let out = step_toward(p, p, 2.0, 20.0);
        assert_eq!(out, p);
        assert!(out.is_finite());
    }
}
