use crate::core::field::kernels;
use crate::core::geometry;
use nalgebra::{Point2, Vector2};

/// A uniformly charged infinite sheet.
///
/// The sheet passes through `position` along the direction given by `rotation`;
/// its normal is the rotated local y-axis. The physics model has no finite
/// extent, so there is no length parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneCharge {
    /// Charge per unit area in C/m², signed.
    pub charge_density: f64,
    /// Mass in kilograms; used only by external motion integrators.
    pub mass: f64,
    /// World-frame point the sheet passes through.
    pub position: Point2<f64>,
    /// World-frame orientation of the sheet in radians.
    pub rotation: f64,
}

impl PlaneCharge {
    pub fn new(charge_density: f64, mass: f64, position: Point2<f64>, rotation: f64) -> Self {
        Self {
            charge_density,
            mass,
            position,
            rotation,
        }
    }

    /// Unit normal of the sheet (the local y-axis after rotation).
    pub fn normal(&self) -> Vector2<f64> {
        geometry::rotate(&Vector2::y(), self.rotation)
    }

    /// Electric field at `point`: constant in magnitude on each side of the
    /// sheet (`2·K·σ`, independent of distance) and discontinuous across it.
    /// Exactly on the sheet the sign term is zero and so is the field.
    pub fn field_at(&self, point: &Point2<f64>) -> Vector2<f64> {
        let normal = self.normal();
        let side = geometry::sign(normal.dot(&(point - self.position)));
        normal * (side * kernels::sheet_field_magnitude(self.charge_density))
    }

    /// The potential of an infinite sheet diverges, so no closed form exists;
    /// the result is always `0.0`.
    pub fn voltage_at(&self, _point: &Point2<f64>) -> f64 {
        0.0
    }
}
