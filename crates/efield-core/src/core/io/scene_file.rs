use crate::core::models::body::Body;
use crate::core::models::line::{LineCharge, LineChargeError};
use crate::core::models::plane::PlaneCharge;
use crate::core::models::point::PointCharge;
use crate::core::models::scene::Scene;
use crate::core::models::triangle::TrianglePlate;
use nalgebra::Point2;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum SceneFileError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("TOML serialization error: {source}")]
    Serialize { source: toml::ser::Error },
    #[error("Invalid body in '{path}': {source}")]
    Body {
        path: String,
        source: LineChargeError,
    },
}

/// One charged body as written in a scene file. Positions and vertices are
/// `[x, y]` pairs; rotation defaults to zero where it is meaningful.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BodySpec {
    Point {
        charge: f64,
        #[serde(default)]
        mass: f64,
        position: [f64; 2],
    },
    Line {
        charge_density: f64,
        #[serde(default)]
        mass: f64,
        position: [f64; 2],
        #[serde(default)]
        rotation: f64,
        length: f64,
    },
    Plane {
        charge_density: f64,
        #[serde(default)]
        mass: f64,
        position: [f64; 2],
        #[serde(default)]
        rotation: f64,
    },
    Triangle {
        charge_density: f64,
        #[serde(default)]
        mass: f64,
        position: [f64; 2],
        #[serde(default)]
        rotation: f64,
        p1: [f64; 2],
        p2: [f64; 2],
        p3: [f64; 2],
    },
}

/// On-disk scene description: an array of `[[body]]` tables.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SceneFile {
    #[serde(rename = "body", default)]
    pub bodies: Vec<BodySpec>,
}

fn to_point(pair: [f64; 2]) -> Point2<f64> {
    Point2::new(pair[0], pair[1])
}

impl SceneFile {
    /// Reads and parses a scene file, then instantiates every body.
    ///
    /// # Errors
    ///
    /// Returns [`SceneFileError`] on unreadable files, malformed TOML, or
    /// bodies violating a geometry invariant (a non-positive line length).
    pub fn load(path: &Path) -> Result<Scene, SceneFileError> {
        let content = std::fs::read_to_string(path).map_err(|e| SceneFileError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        let file: SceneFile = toml::from_str(&content).map_err(|e| SceneFileError::Toml {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        let scene = file
            .into_scene()
            .map_err(|source| SceneFileError::Body {
                path: path.to_string_lossy().to_string(),
                source,
            })?;
        debug!(path = %path.display(), bodies = scene.len(), "Loaded scene file");
        Ok(scene)
    }

    /// Instantiates the described bodies into a [`Scene`].
    pub fn into_scene(self) -> Result<Scene, LineChargeError> {
        let mut scene = Scene::new();
        for spec in self.bodies {
            let body: Body = match spec {
                BodySpec::Point {
                    charge,
                    mass,
                    position,
                } => PointCharge::new(charge, mass, to_point(position)).into(),
                BodySpec::Line {
                    charge_density,
                    mass,
                    position,
                    rotation,
                    length,
                } => LineCharge::new(charge_density, mass, to_point(position), rotation, length)?
                    .into(),
                BodySpec::Plane {
                    charge_density,
                    mass,
                    position,
                    rotation,
                } => PlaneCharge::new(charge_density, mass, to_point(position), rotation).into(),
                BodySpec::Triangle {
                    charge_density,
                    mass,
                    position,
                    rotation,
                    p1,
                    p2,
                    p3,
                } => TrianglePlate::new(
                    charge_density,
                    mass,
                    to_point(position),
                    rotation,
                    [to_point(p1), to_point(p2), to_point(p3)],
                )
                .into(),
            };
            scene.add_body(body);
        }
        Ok(scene)
    }

    /// Captures a scene back into its file description. Triangles are written
    /// with their normalized local vertices, so re-loading reproduces the same
    /// world-frame geometry.
    pub fn from_scene(scene: &Scene) -> Self {
        let bodies = scene
            .bodies_iter()
            .map(|(_, body)| match body {
                Body::Point(p) => BodySpec::Point {
                    charge: p.charge,
                    mass: p.mass,
                    position: [p.position.x, p.position.y],
                },
                Body::Line(l) => BodySpec::Line {
                    charge_density: l.charge_density,
                    mass: l.mass,
                    position: [l.position.x, l.position.y],
                    rotation: l.rotation,
                    length: l.length(),
                },
                Body::Plane(p) => BodySpec::Plane {
                    charge_density: p.charge_density,
                    mass: p.mass,
                    position: [p.position.x, p.position.y],
                    rotation: p.rotation,
                },
                Body::Triangle(t) => {
                    let [v1, v2, v3] = *t.vertices();
                    BodySpec::Triangle {
                        charge_density: t.charge_density,
                        mass: t.mass,
                        position: [t.position().x, t.position().y],
                        rotation: t.rotation(),
                        p1: [v1.x, v1.y],
                        p2: [v2.x, v2.y],
                        p3: [v3.x, v3.y],
                    }
                }
            })
            .collect();
        Self { bodies }
    }

    /// Serializes a scene and writes it to `path`.
    pub fn save(scene: &Scene, path: &Path) -> Result<(), SceneFileError> {
        let content = toml::to_string_pretty(&Self::from_scene(scene))
            .map_err(|source| SceneFileError::Serialize { source })?;
        std::fs::write(path, content).map_err(|e| SceneFileError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        debug!(path = %path.display(), bodies = scene.len(), "Saved scene file");
        Ok(())
    }
}
