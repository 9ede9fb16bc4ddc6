//! Scalar angle helpers.

/// One full turn in degrees
pub const FULL_ROTATION_DEG: f64 = 360.0;

/// Wraps the input degrees, domain (-oo, oo), onto the half-open interval
/// (-180, 180].
///
/// The upper boundary is inclusive and the lower is not: 180 maps to
/// itself, -180 maps to +180. Bound matching at exactly ±180° depends on
/// this.
pub fn wrap_rotation(degrees: f64) -> f64 {
    let folded = degrees.rem_euclid(FULL_ROTATION_DEG);
    if folded > FULL_ROTATION_DEG / 2.0 {
        folded - FULL_ROTATION_DEG
    } else {
        folded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_identity_inside_range() {
        assert_eq!(wrap_rotation(0.0), 0.0);
        assert_eq!(wrap_rotation(90.0), 90.0);
        assert_eq!(wrap_rotation(-90.0), -90.0);
        assert_eq!(wrap_rotation(179.5), 179.5);
    }

    #[test]
    fn test_wrap_boundaries() {
        // (-180, 180]: the upper bound maps to itself, the lower wraps up
        assert_eq!(wrap_rotation(180.0), 180.0);
        assert_eq!(wrap_rotation(-180.0), 180.0);
        assert_eq!(wrap_rotation(540.0), 180.0);
        assert_eq!(wrap_rotation(-540.0), 180.0);
    }

    #[test]
    fn test_wrap_multiple_turns() {
        assert_eq!(wrap_rotation(360.0), 0.0);
        assert_eq!(wrap_rotation(-360.0), 0.0);
        assert_eq!(wrap_rotation(370.0), 10.0);
        assert_eq!(wrap_rotation(-370.0), -10.0);
        assert_eq!(wrap_rotation(190.0), -170.0);
        assert_eq!(wrap_rotation(-190.0), 170.0);
    }
}
