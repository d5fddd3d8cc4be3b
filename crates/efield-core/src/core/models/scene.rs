use crate::core::models::body::Body;
use crate::core::models::ids::BodyId;
use nalgebra::{Point2, Vector2};
use slotmap::SlotMap;

/// The collection of charged bodies making up one electrostatic configuration.
///
/// Queries superpose every body's contribution with no spatial indexing or
/// caching, so each evaluation is O(bodies). Bodies are owned by the scene and
/// addressed by the stable [`BodyId`] keys handed out on insertion.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    bodies: SlotMap<BodyId, Body>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a body and returns its key.
    pub fn add_body(&mut self, body: impl Into<Body>) -> BodyId {
        self.bodies.insert(body.into())
    }

    /// Removes a body, returning it if the key was live.
    pub fn remove_body(&mut self, id: BodyId) -> Option<Body> {
        self.bodies.remove(id)
    }

    pub fn body(&self, id: BodyId) -> Option<&Body> {
        self.bodies.get(id)
    }

    pub fn body_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        self.bodies.get_mut(id)
    }

    pub fn bodies_iter(&self) -> impl Iterator<Item = (BodyId, &Body)> {
        self.bodies.iter()
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Total electric field at `point`: the vector sum over all bodies.
    /// An empty scene yields the zero vector. Non-finite contributions from
    /// singular query points propagate into the sum.
    pub fn field_at(&self, point: &Point2<f64>) -> Vector2<f64> {
        self.bodies
            .values()
            .fold(Vector2::zeros(), |acc, body| acc + body.field_at(point))
    }

    /// Total electric potential at `point`: the scalar sum over all bodies.
    pub fn voltage_at(&self, point: &Point2<f64>) -> f64 {
        self.bodies.values().map(|body| body.voltage_at(point)).sum()
    }
}
