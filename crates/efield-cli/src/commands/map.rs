use crate::cli::MapArgs;
use crate::error::Result;
use crate::utils::parser;
use efield::core::io::grid::{FieldGrid, GridBounds};
use efield::core::io::scene_file::SceneFile;
use tracing::info;

pub fn run(args: MapArgs) -> Result<()> {
    let scene = SceneFile::load(&args.scene)?;
    let bounds = GridBounds {
        min: parser::parse_point(&args.min)?,
        max: parser::parse_point(&args.max)?,
    };
    let (nx, ny) = parser::parse_resolution(&args.resolution)?;

    let grid = FieldGrid::sample(&scene, bounds, nx, ny)?;
    grid.write_csv(&args.output)?;
    info!(
        "Wrote {} samples to '{}'",
        grid.samples().len(),
        args.output.display()
    );
    Ok(())
}
