use log::{info, warn};
use meshpack::math::Vec3;
use meshpack::pack::MeshBuffer;
use meshpack::shapes::{Blade, Cube, ImportedMesh, Star};
use meshpack::util::ScopedTimer;
use std::path::PathBuf;

mod io;

const USAGE: &str = "usage: demo [--radius R] [--center X,Y,Z] [model.obj]";

struct Options {
    radius: f32,
    center: Vec3,
    model: Option<PathBuf>,
}

fn parse_center(raw: &str) -> Result<Vec3, String> {
    let parts: Vec<&str> = raw.split(',').collect();
    if parts.len() != 3 {
        return Err(format!("expected X,Y,Z, got '{raw}'"));
    }
    let x = parts[0].trim().parse().map_err(|e| format!("{e}"))?;
    let y = parts[1].trim().parse().map_err(|e| format!("{e}"))?;
    let z = parts[2].trim().parse().map_err(|e| format!("{e}"))?;
    Ok(Vec3::new(x, y, z))
}

fn parse_args() -> Result<Options, Box<dyn std::error::Error>> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        println!("{USAGE}");
        std::process::exit(0);
    }
    let radius = args.opt_value_from_str("--radius")?.unwrap_or(1.0);
    let center = args
        .opt_value_from_fn("--center", parse_center)?
        .unwrap_or(Vec3::new(0.0, 0.0, 0.0));
    let model = args.opt_free_from_str()?;
    Ok(Options { radius, center, model })
}

fn report(name: &str, mesh: &MeshBuffer) {
    info!(
        "{}: {} vertices, {} triangles, {}+{}+{} bytes",
        name,
        mesh.vertex_count(),
        mesh.triangle_count(),
        mesh.index_bytes().len(),
        mesh.normal_bytes().len(),
        mesh.position_bytes().len(),
    );
}

pub fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let options = parse_args()?;

    let mut scene: Vec<(&str, MeshBuffer)> = Vec::new();
    {
        let _span = ScopedTimer::new("generate fixed shapes");
        scene.push(("cube", Cube::new(options.center, options.radius).generate()?));
        scene.push(("star", Star::new(options.center, options.radius).generate()?));
        scene.push(("blade", Blade::new(options.center, options.radius).generate()?));
    }

    if let Some(path) = &options.model {
        let records = io::load_obj(path)?;
        let imported = ImportedMesh::new(
            options.center,
            options.radius,
            records.vertices,
            records.normals,
            records.faces,
        );
        let _span = ScopedTimer::new("generate imported mesh");
        match imported.generate() {
            Ok(mesh) => scene.push(("imported", mesh)),
            // keep whatever was generated so far on a failed pass
            Err(err) => warn!("skipping {}: {}", path.display(), err),
        }
    }

    for (name, mesh) in &scene {
        report(name, mesh);
    }
    Ok(())
}
