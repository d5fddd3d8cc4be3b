use crate::core::models::scene::Scene;
use nalgebra::{Point2, Vector2};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum GridError {
    #[error("grid resolution must be at least 2 per axis, got {nx}x{ny}")]
    ResolutionTooSmall { nx: usize, ny: usize },
    #[error("grid bounds are empty: min {min:?} must be strictly below max {max:?}")]
    EmptyBounds {
        min: (f64, f64),
        max: (f64, f64),
    },
    #[error("CSV write error for '{path}': {source}")]
    Csv { path: String, source: csv::Error },
}

/// Axis-aligned rectangle to sample over, inclusive of both corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridBounds {
    pub min: Point2<f64>,
    pub max: Point2<f64>,
}

/// One grid sample: position, field vector, field magnitude, potential.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSample {
    pub position: Point2<f64>,
    pub field: Vector2<f64>,
    pub voltage: f64,
}

/// Field and potential of a scene sampled over a uniform rectangular grid,
/// row-major from the minimum corner. Samples landing on a source singularity
/// hold non-finite values, which the CSV export writes through as-is.
#[derive(Debug, Clone)]
pub struct FieldGrid {
    bounds: GridBounds,
    nx: usize,
    ny: usize,
    samples: Vec<FieldSample>,
}

impl FieldGrid {
    /// Evaluates `scene` at `nx` by `ny` evenly spaced points covering
    /// `bounds`, both edges included. Cost is O(nx · ny · bodies); nothing is
    /// cached between samples.
    ///
    /// # Errors
    ///
    /// Returns [`GridError`] when either resolution is below 2 or the bounds
    /// rectangle is empty.
    pub fn sample(
        scene: &Scene,
        bounds: GridBounds,
        nx: usize,
        ny: usize,
    ) -> Result<Self, GridError> {
        if nx < 2 || ny < 2 {
            return Err(GridError::ResolutionTooSmall { nx, ny });
        }
        if bounds.min.x >= bounds.max.x || bounds.min.y >= bounds.max.y {
            return Err(GridError::EmptyBounds {
                min: (bounds.min.x, bounds.min.y),
                max: (bounds.max.x, bounds.max.y),
            });
        }

        let dx = (bounds.max.x - bounds.min.x) / (nx - 1) as f64;
        let dy = (bounds.max.y - bounds.min.y) / (ny - 1) as f64;
        debug!(nx, ny, bodies = scene.len(), "Sampling field grid");

        let mut samples = Vec::with_capacity(nx * ny);
        for j in 0..ny {
            let y = bounds.min.y + dy * j as f64;
            for i in 0..nx {
                let position = Point2::new(bounds.min.x + dx * i as f64, y);
                samples.push(FieldSample {
                    position,
                    field: scene.field_at(&position),
                    voltage: scene.voltage_at(&position),
                });
            }
        }

        Ok(Self {
            bounds,
            nx,
            ny,
            samples,
        })
    }

    pub fn bounds(&self) -> GridBounds {
        self.bounds
    }

    pub fn resolution(&self) -> (usize, usize) {
        (self.nx, self.ny)
    }

    pub fn samples(&self) -> &[FieldSample] {
        &self.samples
    }

    /// Writes the samples to `path` as CSV with an `x,y,ex,ey,e,v` header,
    /// one row per sample in row-major order.
    pub fn write_csv(&self, path: &Path) -> Result<(), GridError> {
        let as_csv_err = |e: csv::Error| GridError::Csv {
            path: path.to_string_lossy().to_string(),
            source: e,
        };
        let mut writer = csv::Writer::from_path(path).map_err(as_csv_err)?;
        writer
            .write_record(["x", "y", "ex", "ey", "e", "v"])
            .map_err(as_csv_err)?;
        for sample in &self.samples {
            writer
                .write_record([
                    sample.position.x.to_string(),
                    sample.position.y.to_string(),
                    sample.field.x.to_string(),
                    sample.field.y.to_string(),
                    sample.field.norm().to_string(),
                    sample.voltage.to_string(),
                ])
                .map_err(as_csv_err)?;
        }
        writer.flush().map_err(|e| GridError::Csv {
            path: path.to_string_lossy().to_string(),
            source: csv::Error::from(e),
        })?;
        info!(path = %path.display(), rows = self.samples.len(), "Wrote field grid CSV");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::point::PointCharge;
    use tempfile::NamedTempFile;

    fn one_charge_scene() -> Scene {
        let mut scene = Scene::new();
        scene.add_body(PointCharge::new(1e-6, 1.0, Point2::origin()));
        scene
    }

    fn unit_bounds() -> GridBounds {
        GridBounds {
            min: Point2::new(1.0, 1.0),
            max: Point2::new(2.0, 3.0),
        }
    }

    #[test]
    fn sample_covers_both_corners() {
        let grid = FieldGrid::sample(&one_charge_scene(), unit_bounds(), 3, 5).unwrap();
        assert_eq!(grid.samples().len(), 15);
        assert_eq!(grid.resolution(), (3, 5));
        let first = grid.samples().first().unwrap();
        let last = grid.samples().last().unwrap();
        assert_eq!(first.position, Point2::new(1.0, 1.0));
        assert_eq!(last.position, Point2::new(2.0, 3.0));
    }

    #[test]
    fn sample_values_match_direct_queries() {
        let scene = one_charge_scene();
        let grid = FieldGrid::sample(&scene, unit_bounds(), 4, 4).unwrap();
        for sample in grid.samples() {
            assert_eq!(sample.field, scene.field_at(&sample.position));
            assert_eq!(sample.voltage, scene.voltage_at(&sample.position));
        }
    }

    #[test]
    fn sample_rejects_degenerate_inputs() {
        let scene = one_charge_scene();
        assert!(matches!(
            FieldGrid::sample(&scene, unit_bounds(), 1, 5),
            Err(GridError::ResolutionTooSmall { .. })
        ));
        let inverted = GridBounds {
            min: Point2::new(2.0, 1.0),
            max: Point2::new(1.0, 3.0),
        };
        assert!(matches!(
            FieldGrid::sample(&scene, inverted, 3, 3),
            Err(GridError::EmptyBounds { .. })
        ));
    }

    #[test]
    fn csv_export_has_header_and_one_row_per_sample() {
        let grid = FieldGrid::sample(&one_charge_scene(), unit_bounds(), 3, 3).unwrap();
        let file = NamedTempFile::new().unwrap();
        grid.write_csv(file.path()).unwrap();

        let content = std::fs::read_to_string(file.path()).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "x,y,ex,ey,e,v");
        assert_eq!(lines[1].split(',').count(), 6);
    }

    #[test]
    fn singular_samples_pass_through_as_non_finite() {
        // Grid corner sits exactly on the charge.
        let scene = one_charge_scene();
        let bounds = GridBounds {
            min: Point2::new(0.0, 0.0),
            max: Point2::new(1.0, 1.0),
        };
        let grid = FieldGrid::sample(&scene, bounds, 2, 2).unwrap();
        assert!(!grid.samples()[0].voltage.is_finite());

        let file = NamedTempFile::new().unwrap();
        grid.write_csv(file.path()).unwrap();
        let content = std::fs::read_to_string(file.path()).unwrap();
        assert!(content.contains("inf") || content.contains("NaN"));
    }
}
