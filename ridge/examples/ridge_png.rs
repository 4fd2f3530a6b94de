// Generates one ridge, triangulates it and saves the low-poly render as PNG.
//
//   cargo run -p ridge --example ridge_png [config.json]
//
// Without a config file the defaults are used (2436×1125, 15 segments, random seed).

use ridge::{SceneConfig, generate, render_scene, triangulate};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => SceneConfig::from_json_file(&path)?,
        None => SceneConfig::default(),
    };
    let mut source = config.source();

    let (width, height) = (config.width as f64, config.height as f64);
    let ridge = generate(config.segments, width, height, &mut source)?;
    let triangles = triangulate(&ridge, width, height)?;

    info!(
        points = ridge.len(),
        triangles = triangles.len(),
        area = ridge.interior_area(height),
        "generated ridge"
    );
    for (i, p) in ridge.points().iter().enumerate() {
        info!("  {i:>2}: {p}");
    }

    let canvas = render_scene(
        config.width,
        config.height,
        &ridge,
        &triangles,
        &config.style(),
        &mut source,
    )?;
    canvas.save_png(&config.output)?;
    Ok(())
}
