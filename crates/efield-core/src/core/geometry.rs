use nalgebra::{Point2, Vector2};

/// The unit vector at `angle` radians from the positive x-axis.
pub fn direction(angle: f64) -> Vector2<f64> {
    Vector2::new(angle.cos(), angle.sin())
}

/// Rotates `v` counter-clockwise by `angle` radians.
pub fn rotate(v: &Vector2<f64>, angle: f64) -> Vector2<f64> {
    let (sin, cos) = angle.sin_cos();
    Vector2::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}

/// Rotates `v` by the polar angle of `by`, computed through the unit vector of
/// `by` instead of `atan2` plus trigonometric calls.
///
/// Undefined (non-finite) when `by` is the zero vector; callers must guard.
pub fn rotate_by_vector(v: &Vector2<f64>, by: &Vector2<f64>) -> Vector2<f64> {
    let u = by.normalize();
    Vector2::new(v.x * u.x - v.y * u.y, v.x * u.y + v.y * u.x)
}

/// Signed length of the projection of `a` onto `onto`.
///
/// Undefined (non-finite) when `onto` is the zero vector.
pub fn scalar_project(a: &Vector2<f64>, onto: &Vector2<f64>) -> f64 {
    a.dot(onto) / onto.norm()
}

/// Vector projection of `a` onto `onto`.
pub fn project(a: &Vector2<f64>, onto: &Vector2<f64>) -> Vector2<f64> {
    onto * (a.dot(onto) / onto.norm_squared())
}

/// Three-valued sign: `1.0`, `-1.0`, or `0.0` for exact zero.
///
/// The field and potential formulas rely on the zero case (a query point exactly
/// on an infinite sheet sees no field), so `f64::signum` is not a substitute.
pub fn sign(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Euclidean distance from `p` to the segment `ab`, clamping the projection
/// parameter to `[0, 1]`.
pub fn distance_to_segment(p: &Point2<f64>, a: &Point2<f64>, b: &Point2<f64>) -> f64 {
    let edge = a - b;
    let len_sq = edge.norm_squared();
    if len_sq == 0.0 {
        return (p - a).norm();
    }
    let t = ((p - b).dot(&edge) / len_sq).clamp(0.0, 1.0);
    let closest = b + edge * t;
    (p - closest).norm()
}
