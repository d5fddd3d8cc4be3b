use nalgebra::Vector2;

/// Coulomb constant in N·m²/C².
pub const COULOMB_CONSTANT: f64 = 8.9875517923e9;

/// Field of a point charge at displacement `delta` from the charge.
///
/// Non-finite when `delta` is the zero vector.
#[inline]
pub fn point_charge_field(charge: f64, delta: &Vector2<f64>) -> Vector2<f64> {
    let r_sq = delta.norm_squared();
    delta * (COULOMB_CONSTANT * charge / (r_sq * r_sq.sqrt()))
}

/// Potential of a point charge at distance `dist`.
///
/// Non-finite at `dist == 0`.
#[inline]
pub fn point_charge_potential(charge: f64, dist: f64) -> f64 {
    COULOMB_CONSTANT * charge / dist
}

/// Local-frame field of a uniformly charged segment of the given `length`,
/// lying along the local x-axis with its start at the origin.
///
/// `along` and `normal_dist` are the query point's local coordinates. The field
/// is the difference of two point-charge-like terms, one per endpoint.
/// `normal_dist == 0` (a query point on the segment's axis) divides by zero and
/// yields a non-finite y-component.
pub fn line_segment_field_local(
    charge_density: f64,
    along: f64,
    normal_dist: f64,
    length: f64,
) -> Vector2<f64> {
    let x_start = -along;
    let x_end = length - along;

    let r_inv_start = 1.0 / (x_start * x_start + normal_dist * normal_dist).sqrt();
    let r_inv_end = 1.0 / (x_end * x_end + normal_dist * normal_dist).sqrt();

    let x_f = r_inv_end - r_inv_start;
    let y_f = (x_end * r_inv_end - x_start * r_inv_start) / normal_dist;

    Vector2::new(x_f, y_f) * (COULOMB_CONSTANT * charge_density)
}

/// Magnitude of the field of a uniformly charged infinite sheet, `2·K·σ`,
/// independent of the distance from the sheet.
#[inline]
pub fn sheet_field_magnitude(charge_density: f64) -> f64 {
    2.0 * COULOMB_CONSTANT * charge_density
}

/// Antiderivative of the triangular-plate potential integrand
/// `asinh(a + b/y)`, evaluated at `y`.
///
/// Exact zeros of `a + b/y` (edge-line extensions) produce NaN; this is the
/// documented singularity of the closed form.
pub fn tri_ad(y: f64, a: f64, b: f64) -> f64 {
    let f = a + b / y;
    let g = (a * (f * f + 1.0).sqrt() - a) / f + 1.0;
    let l = (a * a + 1.0).sqrt();
    y * f.asinh() + b / l * ((g + l) / (g - l)).abs().ln()
}

/// Limiting value of the [`tri_ad`] correction as `y → 0`, used when the query
/// point straddles the plate's vertical extent.
pub fn tri_ad0(a: f64, b: f64) -> f64 {
    let l = (a * a + 1.0).sqrt();
    2.0 * b / l * ((l - 1.0) / a).abs().ln()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn relative_error(actual: f64, expected: f64) -> f64 {
        ((actual - expected) / expected).abs()
    }

    #[test]
    fn point_charge_field_follows_inverse_square_law() {
        let near = point_charge_field(1e-6, &Vector2::new(1.0, 0.0));
        let far = point_charge_field(1e-6, &Vector2::new(2.0, 0.0));
        assert!(relative_error(near.norm(), 4.0 * far.norm()) < 1e-12);
        assert!(relative_error(near.x, COULOMB_CONSTANT * 1e-6) < 1e-12);
        assert_eq!(near.y, 0.0);
    }

    #[test]
    fn point_charge_field_points_away_from_positive_charge() {
        let f = point_charge_field(1e-6, &Vector2::new(-3.0, 4.0));
        assert!(f.x < 0.0 && f.y > 0.0);
    }

    #[test]
    fn point_charge_field_at_zero_distance_is_non_finite() {
        let f = point_charge_field(1e-6, &Vector2::zeros());
        assert!(!f.x.is_finite() || f.x.is_nan());
    }

    #[test]
    fn point_charge_potential_is_signed_and_hyperbolic() {
        let v = point_charge_potential(2e-6, 4.0);
        assert!(relative_error(v, COULOMB_CONSTANT * 5e-7) < 1e-12);
        assert!(point_charge_potential(-2e-6, 4.0) < 0.0);
        assert!(point_charge_potential(1.0, 0.0).is_infinite());
    }

    #[test]
    fn line_segment_field_approaches_infinite_line_limit() {
        // At unit distance from the middle of a very long segment the
        // perpendicular component approaches 2·K·λ / d.
        let length = 1e7;
        let field = line_segment_field_local(1e-6, length / 2.0, 1.0, length);
        let expected = 2.0 * COULOMB_CONSTANT * 1e-6;
        assert!(relative_error(field.y, expected) < 1e-9);
        assert!(field.x.abs() < expected * 1e-9);
    }

    #[test]
    fn line_segment_field_on_axis_is_non_finite() {
        let field = line_segment_field_local(1e-6, -3.0, 0.0, 2.0);
        assert!(!field.y.is_finite());
    }

    #[test]
    fn line_segment_field_is_symmetric_across_midpoint() {
        let above = line_segment_field_local(1e-6, 1.0, 0.5, 2.0);
        let below = line_segment_field_local(1e-6, 1.0, -0.5, 2.0);
        assert!(relative_error(above.y, -below.y) < 1e-12);
        assert!(above.x.abs() < 1e-20 && below.x.abs() < 1e-20);
    }

    #[test]
    fn sheet_field_magnitude_is_twice_k_sigma() {
        assert_eq!(
            sheet_field_magnitude(3e-6),
            2.0 * COULOMB_CONSTANT * 3e-6
        );
        assert!(sheet_field_magnitude(-3e-6) < 0.0);
    }

    #[test]
    fn tri_ad_is_finite_for_generic_arguments() {
        assert!(tri_ad(1.2, 0.5, 0.7).is_finite());
        assert!(tri_ad(-0.8, -0.3, 1.1).is_finite());
    }

    #[test]
    fn tri_ad_is_nan_when_slope_term_vanishes() {
        // a + b/y == 0 puts the query point on an edge-line extension.
        assert!(tri_ad(2.0, 1.0, -2.0).is_nan());
    }

    #[test]
    fn tri_ad0_matches_split_limit() {
        // tri_ad(y, a, b) + tri_ad(-y, a, b) tends to -tri_ad0(a, b) as y
        // approaches zero, which is why the straddling branch of the plate
        // potential adds tri_ad0 back as a correction.
        for (a, b) in [(0.4, 0.9), (-1.3, 0.5), (2.0, 1.7)] {
            let y = 1e-7;
            let split = tri_ad(y, a, b) + tri_ad(-y, a, b);
            assert!((split + tri_ad0(a, b)).abs() < 1e-4);
        }
    }
}
