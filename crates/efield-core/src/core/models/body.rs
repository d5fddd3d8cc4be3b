use crate::core::models::line::LineCharge;
use crate::core::models::plane::PlaneCharge;
use crate::core::models::point::PointCharge;
use crate::core::models::triangle::TrianglePlate;
use nalgebra::{Point2, Vector2};
use std::collections::BTreeMap;
use thiserror::Error;

/// A value exposed through the property surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PropertyValue {
    Scalar(f64),
    Point(Point2<f64>),
}

#[derive(Debug, Error, PartialEq)]
pub enum PropertyError {
    #[error("unknown property '{name}' for body kind '{kind}'")]
    Unknown { name: String, kind: &'static str },
    #[error("property '{name}' expects a {expected} value")]
    TypeMismatch {
        name: String,
        expected: &'static str,
    },
    #[error("invalid value for property '{name}': {reason}")]
    Invalid { name: String, reason: String },
}

/// Any charge geometry the engine knows how to evaluate.
///
/// Each variant carries its own parameters and implements the shared
/// `{field_at, voltage_at}` contract; aggregation code operates only through
/// this enum and never matches on a concrete geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Body {
    Point(PointCharge),
    Line(LineCharge),
    Plane(PlaneCharge),
    Triangle(TrianglePlate),
}

impl Body {
    /// Stable lowercase name of the geometry kind, used in errors and files.
    pub fn kind(&self) -> &'static str {
        match self {
            Body::Point(_) => "point",
            Body::Line(_) => "line",
            Body::Plane(_) => "plane",
            Body::Triangle(_) => "triangle",
        }
    }

    pub fn position(&self) -> Point2<f64> {
        match self {
            Body::Point(p) => p.position,
            Body::Line(l) => l.position,
            Body::Plane(p) => p.position,
            Body::Triangle(t) => t.position(),
        }
    }

    /// World-frame orientation in radians. A point has no orientation and
    /// reports `0.0`.
    pub fn rotation(&self) -> f64 {
        match self {
            Body::Point(_) => 0.0,
            Body::Line(l) => l.rotation,
            Body::Plane(p) => p.rotation,
            Body::Triangle(t) => t.rotation(),
        }
    }

    pub fn mass(&self) -> f64 {
        match self {
            Body::Point(p) => p.mass,
            Body::Line(l) => l.mass,
            Body::Plane(p) => p.mass,
            Body::Triangle(t) => t.mass,
        }
    }

    /// Electric field of this body at `point`.
    pub fn field_at(&self, point: &Point2<f64>) -> Vector2<f64> {
        match self {
            Body::Point(p) => p.field_at(point),
            Body::Line(l) => l.field_at(point),
            Body::Plane(p) => p.field_at(point),
            Body::Triangle(t) => t.field_at(point),
        }
    }

    /// Electric potential of this body at `point`.
    pub fn voltage_at(&self, point: &Point2<f64>) -> f64 {
        match self {
            Body::Point(p) => p.voltage_at(point),
            Body::Line(l) => l.voltage_at(point),
            Body::Plane(p) => p.voltage_at(point),
            Body::Triangle(t) => t.voltage_at(point),
        }
    }

    /// Snapshot of the editable properties of this body.
    ///
    /// Triangle vertices are reported in the normalized local frame, which is
    /// also the frame [`Body::update_property`] accepts them in.
    pub fn properties(&self) -> BTreeMap<String, PropertyValue> {
        let mut props = BTreeMap::new();
        let scalars: Vec<(&str, f64)> = match self {
            Body::Point(p) => vec![("charge", p.charge), ("mass", p.mass)],
            Body::Line(l) => vec![
                ("charge-density", l.charge_density),
                ("mass", l.mass),
                ("rotation", l.rotation),
                ("length", l.length()),
            ],
            Body::Plane(p) => vec![
                ("charge-density", p.charge_density),
                ("mass", p.mass),
                ("rotation", p.rotation),
            ],
            Body::Triangle(t) => vec![
                ("charge-density", t.charge_density),
                ("mass", t.mass),
                ("rotation", t.rotation()),
            ],
        };
        for (name, value) in scalars {
            props.insert(name.to_string(), PropertyValue::Scalar(value));
        }
        props.insert("position".to_string(), PropertyValue::Point(self.position()));
        if let Body::Triangle(t) = self {
            for (i, v) in t.vertices().iter().enumerate() {
                props.insert(
                    format!("p{}", i + 1),
                    PropertyValue::Point(Point2::from(*v)),
                );
            }
        }
        props
    }

    /// Updates one property by name.
    ///
    /// Replacing a triangle vertex re-derives the whole normalized frame
    /// rather than patching cached state. Geometry invariants (positive line
    /// length) are enforced here the same as at construction.
    pub fn update_property(&mut self, name: &str, value: PropertyValue) -> Result<(), PropertyError> {
        let scalar = |value: PropertyValue| match value {
            PropertyValue::Scalar(s) => Ok(s),
            PropertyValue::Point(_) => Err(PropertyError::TypeMismatch {
                name: name.to_string(),
                expected: "scalar",
            }),
        };
        let point = |value: PropertyValue| match value {
            PropertyValue::Point(p) => Ok(p),
            PropertyValue::Scalar(_) => Err(PropertyError::TypeMismatch {
                name: name.to_string(),
                expected: "point",
            }),
        };
        let unknown = |kind| PropertyError::Unknown {
            name: name.to_string(),
            kind,
        };

        match self {
            Body::Point(p) => match name {
                "charge" => p.charge = scalar(value)?,
                "mass" => p.mass = scalar(value)?,
                "position" => p.position = point(value)?,
                _ => return Err(unknown("point")),
            },
            Body::Line(l) => match name {
                "charge-density" => l.charge_density = scalar(value)?,
                "mass" => l.mass = scalar(value)?,
                "rotation" => l.rotation = scalar(value)?,
                "position" => l.position = point(value)?,
                "length" => {
                    l.set_length(scalar(value)?)
                        .map_err(|e| PropertyError::Invalid {
                            name: name.to_string(),
                            reason: e.to_string(),
                        })?;
                }
                _ => return Err(unknown("line")),
            },
            Body::Plane(p) => match name {
                "charge-density" => p.charge_density = scalar(value)?,
                "mass" => p.mass = scalar(value)?,
                "rotation" => p.rotation = scalar(value)?,
                "position" => p.position = point(value)?,
                _ => return Err(unknown("plane")),
            },
            Body::Triangle(t) => match name {
                "charge-density" => t.charge_density = scalar(value)?,
                "mass" => t.mass = scalar(value)?,
                "rotation" => t.set_rotation(scalar(value)?),
                "position" => t.set_position(point(value)?),
                "p1" => t.set_vertex(0, point(value)?),
                "p2" => t.set_vertex(1, point(value)?),
                "p3" => t.set_vertex(2, point(value)?),
                _ => return Err(unknown("triangle")),
            },
        }
        Ok(())
    }
}

impl From<PointCharge> for Body {
    fn from(value: PointCharge) -> Self {
        Body::Point(value)
    }
}

impl From<LineCharge> for Body {
    fn from(value: LineCharge) -> Self {
        Body::Line(value)
    }
}

impl From<PlaneCharge> for Body {
    fn from(value: PlaneCharge) -> Self {
        Body::Plane(value)
    }
}

impl From<TrianglePlate> for Body {
    fn from(value: TrianglePlate) -> Self {
        Body::Triangle(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_body() -> Body {
        Body::Line(LineCharge::new(1e-6, 1.0, Point2::new(1.0, 2.0), 0.3, 4.0).unwrap())
    }

    #[test]
    fn dispatch_matches_the_concrete_geometry() {
        let point = PointCharge::new(1e-6, 1.0, Point2::origin());
        let body = Body::from(point);
        let q = Point2::new(2.0, 3.0);
        assert_eq!(body.field_at(&q), point.field_at(&q));
        assert_eq!(body.voltage_at(&q), point.voltage_at(&q));
        assert_eq!(body.kind(), "point");
    }

    #[test]
    fn properties_expose_the_editable_surface() {
        let body = line_body();
        let props = body.properties();
        assert_eq!(props.get("length"), Some(&PropertyValue::Scalar(4.0)));
        assert_eq!(
            props.get("position"),
            Some(&PropertyValue::Point(Point2::new(1.0, 2.0)))
        );
        assert!(!props.contains_key("charge"));
    }

    #[test]
    fn update_property_rejects_unknown_names_and_wrong_types() {
        let mut body = line_body();
        let err = body
            .update_property("charge", PropertyValue::Scalar(1.0))
            .unwrap_err();
        assert!(matches!(err, PropertyError::Unknown { .. }));

        let err = body
            .update_property("length", PropertyValue::Point(Point2::origin()))
            .unwrap_err();
        assert_eq!(
            err,
            PropertyError::TypeMismatch {
                name: "length".to_string(),
                expected: "scalar"
            }
        );
    }

    #[test]
    fn update_property_enforces_geometry_invariants() {
        let mut body = line_body();
        let err = body
            .update_property("length", PropertyValue::Scalar(-1.0))
            .unwrap_err();
        assert!(matches!(err, PropertyError::Invalid { .. }));
        // The rejected update leaves the body untouched.
        assert_eq!(
            body.properties().get("length"),
            Some(&PropertyValue::Scalar(4.0))
        );
    }

    #[test]
    fn updating_a_triangle_vertex_renormalizes() {
        let tri = TrianglePlate::new(
            1e-6,
            1.0,
            Point2::origin(),
            0.0,
            [
                Point2::new(0.0, 0.0),
                Point2::new(2.0, 0.0),
                Point2::new(0.0, 2.0),
            ],
        );
        let mut body = Body::Triangle(tri);
        body.update_property("p1", PropertyValue::Point(Point2::new(-2.0, -2.0)))
            .unwrap();
        let Body::Triangle(updated) = body else {
            unreachable!()
        };
        assert_ne!(updated.tip(), tri.tip());
        // The normalized frame invariant survives the update.
        let mut ys: Vec<f64> = updated.vertices().iter().map(|v| v.y).collect();
        ys.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert!((ys[0] - ys[1]).abs() < 1e-9);
    }
}
