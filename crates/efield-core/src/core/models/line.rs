use crate::core::field::kernels;
use crate::core::geometry;
use nalgebra::{Point2, Vector2};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum LineChargeError {
    #[error("line length must be positive, got {0}")]
    NonPositiveLength(f64),
}

/// A uniformly charged finite segment.
///
/// The segment extends symmetrically along its local x-axis: half the length on
/// each side of `position`, oriented by `rotation`. By sign convention a
/// negative charge density denotes the start end of the segment and a positive
/// one the end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineCharge {
    /// Charge per unit length in C/m, signed.
    pub charge_density: f64,
    /// Mass in kilograms; used only by external motion integrators.
    pub mass: f64,
    /// World-frame location of the segment's midpoint.
    pub position: Point2<f64>,
    /// World-frame orientation of the segment in radians.
    pub rotation: f64,
    length: f64,
}

impl LineCharge {
    /// Creates a new segment.
    ///
    /// # Errors
    ///
    /// Returns [`LineChargeError::NonPositiveLength`] unless `length > 0`.
    pub fn new(
        charge_density: f64,
        mass: f64,
        position: Point2<f64>,
        rotation: f64,
        length: f64,
    ) -> Result<Self, LineChargeError> {
        if length <= 0.0 {
            return Err(LineChargeError::NonPositiveLength(length));
        }
        Ok(Self {
            charge_density,
            mass,
            position,
            rotation,
            length,
        })
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    /// Replaces the segment length, keeping the `length > 0` invariant.
    pub fn set_length(&mut self, length: f64) -> Result<(), LineChargeError> {
        if length <= 0.0 {
            return Err(LineChargeError::NonPositiveLength(length));
        }
        self.length = length;
        Ok(())
    }

    /// Unit vector along the segment, from start to end.
    pub fn direction(&self) -> Vector2<f64> {
        geometry::direction(self.rotation)
    }

    /// Unit normal of the segment (the local y-axis after rotation).
    pub fn normal(&self) -> Vector2<f64> {
        geometry::rotate(&Vector2::y(), self.rotation)
    }

    /// World-frame start endpoint (the negative end by sign convention).
    pub fn start_point(&self) -> Point2<f64> {
        self.position - self.direction() * (self.length / 2.0)
    }

    /// World-frame end endpoint (the positive end by sign convention).
    pub fn end_point(&self) -> Point2<f64> {
        self.position + self.direction() * (self.length / 2.0)
    }

    /// Electric field at `point`.
    ///
    /// The query point is projected onto the segment direction and normal to
    /// obtain local coordinates, the local-frame kernel is evaluated, and the
    /// result is rotated back into the world frame. Query points exactly on the
    /// segment's axis yield a non-finite result.
    pub fn field_at(&self, point: &Point2<f64>) -> Vector2<f64> {
        let start = self.start_point();
        let delta_line = self.end_point() - start;
        let delta_point = point - start;

        let along = geometry::scalar_project(&delta_point, &delta_line);
        let off_axis = geometry::scalar_project(&delta_point, &self.normal());

        let local =
            kernels::line_segment_field_local(self.charge_density, along, off_axis, self.length);
        geometry::rotate_by_vector(&local, &delta_line)
    }

    /// Electric potential at `point`.
    ///
    /// No closed form is wired up for this geometry; the result is always
    /// `0.0`. Known gap, kept deliberately rather than silently approximated.
    pub fn voltage_at(&self, _point: &Point2<f64>) -> f64 {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::field::kernels::COULOMB_CONSTANT;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn construction_rejects_non_positive_length() {
        let err = LineCharge::new(1e-6, 1.0, Point2::origin(), 0.0, 0.0).unwrap_err();
        assert_eq!(err, LineChargeError::NonPositiveLength(0.0));
        assert!(LineCharge::new(1e-6, 1.0, Point2::origin(), 0.0, -2.0).is_err());
    }

    #[test]
    fn endpoints_straddle_position_symmetrically() {
        let line = LineCharge::new(1e-6, 1.0, Point2::new(1.0, 2.0), FRAC_PI_2, 4.0).unwrap();
        let start = line.start_point();
        let end = line.end_point();
        assert!((start - Point2::new(1.0, 0.0)).norm() < 1e-12);
        assert!((end - Point2::new(1.0, 4.0)).norm() < 1e-12);
        assert!((line.normal() - Vector2::new(-1.0, 0.0)).norm() < 1e-12);
    }

    #[test]
    fn far_field_approximates_point_charge_of_total_charge() {
        // At r = 100·L along the normal, the segment is indistinguishable from
        // a point charge of q = λ·L to well under 1%.
        let length = 2.0;
        let density = 1e-6;
        let line = LineCharge::new(density, 1.0, Point2::origin(), 0.0, length).unwrap();
        let r = 100.0 * length;
        let field = line.field_at(&Point2::new(0.0, r));
        let expected = COULOMB_CONSTANT * density * length / (r * r);
        assert!(((field.norm() - expected) / expected).abs() < 0.01);
        assert!(field.y > 0.0);
        assert!(field.x.abs() < field.y * 1e-9);
    }

    #[test]
    fn field_flips_with_query_side() {
        let line = LineCharge::new(1e-6, 1.0, Point2::origin(), 0.0, 2.0).unwrap();
        let above = line.field_at(&Point2::new(0.3, 1.5));
        let below = line.field_at(&Point2::new(0.3, -1.5));
        assert!((above.y + below.y).abs() < above.y.abs() * 1e-9);
        assert!((above.x - below.x).abs() < above.y.abs() * 1e-9);
    }

    #[test]
    fn field_rotates_with_the_segment() {
        let flat = LineCharge::new(1e-6, 1.0, Point2::origin(), 0.0, 2.0).unwrap();
        let tilted = LineCharge::new(1e-6, 1.0, Point2::origin(), 0.9, 2.0).unwrap();
        let probe = Vector2::new(0.4, 1.3);
        let expected = geometry::rotate(&flat.field_at(&Point2::from(probe)), 0.9);
        let actual = tilted.field_at(&Point2::from(geometry::rotate(&probe, 0.9)));
        assert!((expected - actual).norm() < expected.norm() * 1e-9);
    }

    #[test]
    fn field_on_the_axis_is_non_finite() {
        let line = LineCharge::new(1e-6, 1.0, Point2::origin(), 0.0, 2.0).unwrap();
        let field = line.field_at(&Point2::new(5.0, 0.0));
        assert!(!field.y.is_finite());
    }

    #[test]
    fn voltage_is_the_documented_zero_gap() {
        let line = LineCharge::new(1e-6, 1.0, Point2::origin(), 0.0, 2.0).unwrap();
        assert_eq!(line.voltage_at(&Point2::new(3.0, 4.0)), 0.0);
    }
}
