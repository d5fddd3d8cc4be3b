use crate::cli::ProbeArgs;
use crate::error::Result;
use crate::utils::parser;
use efield::core::io::scene_file::SceneFile;
use tracing::info;

pub fn run(args: ProbeArgs) -> Result<()> {
    let scene = SceneFile::load(&args.scene)?;
    info!(bodies = scene.len(), "Scene loaded; probing {} point(s)", args.at.len());

    println!("{:>12} {:>12} {:>14} {:>14} {:>14} {:>14}", "x", "y", "Ex", "Ey", "|E|", "V");
    for raw in &args.at {
        let point = parser::parse_point(raw)?;
        let field = scene.field_at(&point);
        let voltage = scene.voltage_at(&point);
        println!(
            "{:>12.6} {:>12.6} {:>14.6e} {:>14.6e} {:>14.6e} {:>14.6e}",
            point.x,
            point.y,
            field.x,
            field.y,
            field.norm(),
            voltage
        );
    }
    Ok(())
}
