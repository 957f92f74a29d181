// Math utilities and helper functions

/// Clamp a value between min and max
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Opacity for a blinking sprite: fully visible while `sin(t)` is
/// non-negative, invisible otherwise
pub fn flicker_alpha(time_ms: u64) -> u8 {
    if (time_ms as f64).sin() >= 0.0 {
        255
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(5.0, 0.0, 10.0), 5.0);
        assert_eq!(clamp(-5.0, 0.0, 10.0), 0.0);
        assert_eq!(clamp(15.0, 0.0, 10.0), 10.0);
    }

    #[test]
    fn test_flicker_alpha_is_binary() {
        for t in 0..200 {
            let alpha = flicker_alpha(t);
            assert!(alpha == 0 || alpha == 255);
        }
    }

    #[test]
    fn test_flicker_alpha_follows_sine() {
        // sin(0) = 0, sin(1) > 0, sin(4) < 0
        assert_eq!(flicker_alpha(0), 255);
        assert_eq!(flicker_alpha(1), 255);
        assert_eq!(flicker_alpha(4), 0);
    }
}
