//! Prints what the viewer would draw for saved backend responses.
//!
//! Usage: `cargo run --example summarize -- [roughness.json] [physics.json]`
//!
//! Set `RUST_LOG=debug` to see the mapping log.

use fieldscope::*;

fn main() -> Result<()> {
    init_logging();

    let mut args = std::env::args().skip(1);
    let roughness = args
        .next()
        .map(|path| std::fs::read_to_string(path).map_err(FieldscopeError::from))
        .transpose()?
        .map(|body| RoughnessReport::from_json_str(&body))
        .transpose()?;
    let physics = args
        .next()
        .map(|path| std::fs::read_to_string(path).map_err(FieldscopeError::from))
        .transpose()?
        .map(|body| PhysicsReport::from_json_str(&body))
        .transpose()?;

    let options = Options::default();
    if let Some(metrics) = roughness.as_ref().and_then(|r| r.metrics) {
        for (label, value) in metrics.formatted(options.display_unit) {
            println!("{label}: {value}");
        }
    }

    let registry = ColorMapRegistry::new();
    let views = AnalysisViews::build(roughness.as_ref(), physics.as_ref(), &options)?;
    for view in &views.views {
        let camera = &view.scene.camera;
        let [low, mid, high] = view.legend.tick_labels();
        println!("== {}", view.title);
        println!(
            "   {} vertices, {} faces",
            view.scene.num_vertices(),
            view.scene.faces.len()
        );
        println!(
            "   camera at {} looking at {} (fit distance {:.3e})",
            camera.position, camera.look_at, camera.distance
        );
        if let Some(ray) = &view.scene.orientation {
            println!("   height axis {} (length {:.3e})", ray.direction, ray.length);
        }
        println!("   legend {}: {low} | {mid} | {high}", view.legend.heading());
        for (offset, color) in view.legend.stops(&registry) {
            println!("     {offset:.2} -> {color:.2}");
        }
    }

    Ok(())
}
