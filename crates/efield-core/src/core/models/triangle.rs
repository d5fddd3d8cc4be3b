use crate::core::field::kernels;
use crate::core::geometry;
use crate::core::models::point::PointCharge;
use nalgebra::{Point2, Vector2};
use std::f64::consts::PI;

/// Relative step for the finite-difference gradient in [`TrianglePlate::field_at`].
const FIELD_DIFF_STEP: f64 = 1e-6;

/// A uniformly charged planar triangular plate.
///
/// On construction the triangle is normalized: the center of mass becomes the
/// body's `position`, the vertices are re-expressed relative to it, and the
/// local frame is rotated so the longest side (the "hypotenuse") is horizontal
/// with the remaining vertex (the "tip") at non-negative local y. The residual
/// rotation is folded into the body's `rotation`, so the world-frame triangle
/// is unchanged. The tip and the hypotenuse half-width are cached; both are
/// re-derived whenever a vertex changes.
///
/// Zero-area (collinear) triangles are representable but produce non-finite
/// results from [`TrianglePlate::voltage_at`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrianglePlate {
    /// Charge per unit area in C/m², signed.
    pub charge_density: f64,
    /// Mass in kilograms; used only by external motion integrators.
    pub mass: f64,
    position: Point2<f64>,
    rotation: f64,
    vertices: [Vector2<f64>; 3],
    tip: Vector2<f64>,
    half_width: f64,
}

/// Result of normalizing a raw vertex triple: local-frame vertices with the
/// hypotenuse horizontal, plus the placement residue to fold into the body.
struct NormalizedTriangle {
    vertices: [Vector2<f64>; 3],
    tip: Vector2<f64>,
    half_width: f64,
    centroid: Vector2<f64>,
    rotation_offset: f64,
}

/// Normalizes a vertex triple into the canonical local frame.
///
/// Pure function of the raw vertices; runs at construction and again on every
/// vertex update, never patching derived state incrementally.
fn normalize(raw: &[Point2<f64>; 3]) -> NormalizedTriangle {
    let d01 = (raw[0] - raw[1]).norm();
    let d12 = (raw[1] - raw[2]).norm();
    let d20 = (raw[2] - raw[0]).norm();

    let (hypot, hypot2, tip_index) = if d01 >= d12 && d01 >= d20 {
        (0, 1, 2)
    } else if d12 >= d01 && d12 >= d20 {
        (1, 2, 0)
    } else {
        (2, 0, 1)
    };

    let hypot_vec = raw[hypot] - raw[hypot2];
    let half_width = hypot_vec.norm() / 2.0;

    let centroid = (raw[0].coords + raw[1].coords + raw[2].coords) / 3.0;
    let mut rotation_offset = hypot_vec.y.atan2(hypot_vec.x);
    let mut vertices =
        raw.map(|p| geometry::rotate(&(p.coords - centroid), -rotation_offset));

    // Keep the tip above the hypotenuse.
    if vertices[tip_index].y < 0.0 {
        for v in &mut vertices {
            *v = -*v;
        }
        rotation_offset -= PI;
    }

    NormalizedTriangle {
        vertices,
        tip: vertices[tip_index],
        half_width,
        centroid,
        rotation_offset,
    }
}

impl TrianglePlate {
    /// Creates a plate from three vertices given relative to `position` in the
    /// frame oriented by `rotation`. The vertices are normalized (see the type
    /// docs); the world-frame triangle they describe is preserved.
    pub fn new(
        charge_density: f64,
        mass: f64,
        position: Point2<f64>,
        rotation: f64,
        vertices: [Point2<f64>; 3],
    ) -> Self {
        let normalized = normalize(&vertices);
        Self {
            charge_density,
            mass,
            position: position + geometry::rotate(&normalized.centroid, rotation),
            rotation: rotation + normalized.rotation_offset,
            vertices: normalized.vertices,
            tip: normalized.tip,
            half_width: normalized.half_width,
        }
    }

    /// World-frame center of mass.
    pub fn position(&self) -> Point2<f64> {
        self.position
    }

    pub fn set_position(&mut self, position: Point2<f64>) {
        self.position = position;
    }

    /// World-frame orientation of the local x-axis in radians.
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn set_rotation(&mut self, rotation: f64) {
        self.rotation = rotation;
    }

    /// Normalized local-frame vertices, centered on the center of mass with
    /// the hypotenuse horizontal.
    pub fn vertices(&self) -> &[Vector2<f64>; 3] {
        &self.vertices
    }

    /// The vertex opposite the hypotenuse, in the local frame.
    pub fn tip(&self) -> Vector2<f64> {
        self.tip
    }

    /// Half the hypotenuse length.
    pub fn half_width(&self) -> f64 {
        self.half_width
    }

    /// Replaces one vertex (local frame) and re-derives all cached state by
    /// re-running normalization from scratch.
    pub fn set_vertex(&mut self, index: usize, vertex: Point2<f64>) {
        let mut raw = self.vertices.map(Point2::from);
        raw[index] = vertex;
        *self = TrianglePlate::new(self.charge_density, self.mass, self.position, self.rotation, raw);
    }

    fn to_local(&self, point: &Point2<f64>) -> Vector2<f64> {
        geometry::rotate(&(point - self.position), -self.rotation)
    }

    /// Electric potential at `point`, from the antiderivative-based closed form
    /// for a uniformly charged triangular plate.
    ///
    /// The query point is moved into the local frame and re-centered so the
    /// hypotenuse midpoint is the origin. When its y-coordinate straddles the
    /// plate's vertical extent the integral is split at zero and recombined
    /// with the [`kernels::tri_ad0`] correction. Query points exactly on an
    /// edge-line extension, and zero-area triangles, yield non-finite results.
    pub fn voltage_at(&self, point: &Point2<f64>) -> f64 {
        let local = self.to_local(point);
        let x = local.x;
        // Hypotenuse midpoint at the origin: the centroid sits tip.y/2 above it.
        let y = local.y + self.tip.y / 2.0;

        let height = 1.5 * self.tip.y;
        let a1 = (self.tip.x - self.half_width) / height;
        let a2 = (self.tip.x + self.half_width) / height;
        let b1 = y * a1 + self.half_width - x;
        let b2 = y * a2 - self.half_width - x;

        let combination = if geometry::sign(y - height) != geometry::sign(y) {
            let correction = kernels::tri_ad0(a1, b1) - kernels::tri_ad0(a2, b2);
            kernels::tri_ad(height - y, a1, b1) + kernels::tri_ad(-y, a1, b1)
                - kernels::tri_ad(height - y, a2, b2)
                - kernels::tri_ad(-y, a2, b2)
                + correction
        } else {
            geometry::sign(-y)
                * (kernels::tri_ad(height - y, a1, b1) - kernels::tri_ad(-y, a1, b1)
                    - kernels::tri_ad(height - y, a2, b2)
                    + kernels::tri_ad(-y, a2, b2))
        };

        kernels::COULOMB_CONSTANT * self.charge_density * combination
    }

    /// Electric field at `point`.
    ///
    /// No verified closed form exists for the plate field; this evaluates the
    /// negative gradient of [`TrianglePlate::voltage_at`] by central finite
    /// differences, with the step scaled to the plate size. Inherits the
    /// potential's singular loci.
    pub fn field_at(&self, point: &Point2<f64>) -> Vector2<f64> {
        let step = FIELD_DIFF_STEP * self.half_width.max(self.tip.y.abs());
        let ex = -(self.voltage_at(&Point2::new(point.x + step, point.y))
            - self.voltage_at(&Point2::new(point.x - step, point.y)))
            / (2.0 * step);
        let ey = -(self.voltage_at(&Point2::new(point.x, point.y + step))
            - self.voltage_at(&Point2::new(point.x, point.y - step)))
            / (2.0 * step);
        Vector2::new(ex, ey)
    }

    /// Whether the world-frame `point` lies inside the triangle. Boundary
    /// points count as inside.
    pub fn point_inside(&self, point: &Point2<f64>) -> bool {
        let p = self.to_local(point);
        let [v0, v1, v2] = &self.vertices;

        // Cross products within a scale-relative epsilon of zero are treated
        // as exact boundary hits, so that points on an edge stay inside after
        // the world-to-local rotation.
        let eps = 1e-9 * self.half_width * self.half_width;
        let snap = |c: f64| if c.abs() < eps { 0.0 } else { c };

        let s = snap((v0.x - v2.x) * (p.y - v2.y) - (v0.y - v2.y) * (p.x - v2.x));
        let t = snap((v1.x - v0.x) * (p.y - v0.y) - (v1.y - v0.y) * (p.x - v0.x));
        if (s < 0.0) != (t < 0.0) && s != 0.0 && t != 0.0 {
            return false;
        }
        let d = snap((v2.x - v1.x) * (p.y - v1.y) - (v2.y - v1.y) * (p.x - v1.x));
        d == 0.0 || (d < 0.0) == (s + t <= 0.0)
    }

    /// Distance from the world-frame `point` to the triangle: zero inside,
    /// otherwise the minimum distance to the three edges.
    pub fn distance_from(&self, point: &Point2<f64>) -> f64 {
        if self.point_inside(point) {
            return 0.0;
        }
        let p = Point2::from(self.to_local(point));
        let [v0, v1, v2] = self.vertices.map(Point2::from);
        geometry::distance_to_segment(&p, &v0, &v1)
            .min(geometry::distance_to_segment(&p, &v1, &v2))
            .min(geometry::distance_to_segment(&p, &v2, &v0))
    }

    /// Approximates the plate with a lattice of discrete point charges for
    /// consumers that only understand point sources.
    ///
    /// Uses the smallest triangular number of points that is at least `detail`
    /// and splits the charge density evenly across them, so the returned
    /// charges always sum to `charge_density`. This is a charge-count
    /// approximation, not an area-weighted one.
    pub fn decompose(&self, detail: usize) -> Vec<PointCharge> {
        let mut triangular = 3usize;
        let mut increment = 3usize;
        while triangular < detail {
            triangular += increment;
            increment += 1;
        }
        let side_len = increment - 2;

        let charge = self.charge_density / triangular as f64;
        let unit1 = (self.vertices[1] - self.vertices[0]) / side_len as f64;
        let unit2 = (self.vertices[2] - self.vertices[0]) / side_len as f64;

        let mut charges = Vec::with_capacity(triangular);
        for i in 0..=side_len {
            for j in 0..=(side_len - i) {
                let local = self.vertices[0] + unit1 * i as f64 + unit2 * j as f64;
                let world = self.position + geometry::rotate(&local, self.rotation);
                charges.push(PointCharge::new(charge, 0.0, world));
            }
        }
        charges
    }
}
