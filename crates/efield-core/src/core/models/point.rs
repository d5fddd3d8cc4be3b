use crate::core::field::kernels;
use nalgebra::{Point2, Vector2};

/// A discrete point charge.
///
/// The simplest source geometry, and also the building block that
/// [`crate::core::models::triangle::TrianglePlate::decompose`] reduces extended
/// distributions to. Rotation is meaningless for a point and is not stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointCharge {
    /// Charge in coulombs, signed.
    pub charge: f64,
    /// Mass in kilograms; used only by external motion integrators.
    pub mass: f64,
    /// World-frame location of the charge.
    pub position: Point2<f64>,
}

impl PointCharge {
    pub fn new(charge: f64, mass: f64, position: Point2<f64>) -> Self {
        Self {
            charge,
            mass,
            position,
        }
    }

    /// Electric field at `point`. Non-finite when `point` coincides with the
    /// charge.
    pub fn field_at(&self, point: &Point2<f64>) -> Vector2<f64> {
        kernels::point_charge_field(self.charge, &(point - self.position))
    }

    /// Electric potential at `point`. Non-finite when `point` coincides with
    /// the charge.
    pub fn voltage_at(&self, point: &Point2<f64>) -> f64 {
        kernels::point_charge_potential(self.charge, (point - self.position).norm())
    }
}
