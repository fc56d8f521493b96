//! Triangle angles from side lengths

/// Angle in degrees between sides `k` and `l` of a triangle with semi-perimeter `s`.
///
/// This is the half-angle form of the law of cosines:
/// `sin(θ/2) = sqrt((s - k)(s - l) / (k l))`.
///
/// No check of the triangle inequality is done here. For sides that cannot form a
/// triangle the result is NaN, so the caller must check reachability first.
pub fn half_angle(s: f64, k: f64, l: f64) -> f64 {
    (2.0 * (((s - k) * (s - l)) / (k * l)).sqrt().asin()).to_degrees()
}

/// Semi-perimeter of the triangle with the given sides.
pub fn semi_perimeter(a: f64, b: f64, c: f64) -> f64 {
    0.5 * (a + b + c)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    #[test]
    fn test_equilateral() {
        let s = semi_perimeter(1.0, 1.0, 1.0);
        assert!((half_angle(s, 1.0, 1.0) - 60.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_right_angle() {
        // 3-4-5: the angle between the legs is opposite the hypotenuse.
        let s = semi_perimeter(3.0, 4.0, 5.0);
        assert!((half_angle(s, 3.0, 4.0) - 90.0).abs() < TOLERANCE);
        let opposite_4 = 4.0_f64.atan2(3.0).to_degrees();
        assert!((half_angle(s, 3.0, 5.0) - opposite_4).abs() < TOLERANCE);
    }

    #[test]
    fn test_angles_sum_to_straight_angle() {
        let (a, b, c) = (7.0, 10.0, 5.5);
        let s = semi_perimeter(a, b, c);
        let sum = half_angle(s, a, b) + half_angle(s, b, c) + half_angle(s, a, c);
        assert!((sum - 180.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_degenerate_triangle_is_nan() {
        // Third side longer than the other two together.
        let s = semi_perimeter(1.0, 1.0, 3.0);
        assert!(half_angle(s, 1.0, 3.0).is_nan());
    }
}
