use std::error::Error;

use clap::Args;
use fsim_geom::tables::{tracker_material, tracker_material_no_active, tracker_material_test};
use fsim_geom::{BarrelLayer, ForwardLayer};

#[derive(Args, Debug)]
pub struct LayersArgs {
    /// Built-in table to summarize: `full`, `test`, or `no-active`.
    #[arg(long, default_value = "full")]
    pub table: String,
}

pub fn run(args: &LayersArgs) -> Result<(), Box<dyn Error>> {
    let detector = match args.table.as_str() {
        "full" => tracker_material(),
        "test" => tracker_material_test(),
        "no-active" => tracker_material_no_active(),
        other => {
            return Err(format!(
                "unknown table {other:?}; expected full, test, or no-active"
            )
            .into())
        }
    };
    let barrel_records = detector.get_vpset("BarrelLayers")?;
    let forward_records = detector.get_vpset("ForwardLayers")?;

    println!(
        "{} table: {} barrel record(s), {} forward record(s)",
        args.table,
        barrel_records.len(),
        forward_records.len()
    );
    println!("{:<8} {:>10} {:>6} {}", "family", "position", "bins", "active");

    let mut max_radius = None;
    for record in barrel_records {
        match BarrelLayer::from_pset(record) {
            Ok(layer) => {
                println!(
                    "{:<8} {:>10.4} {:>6} {}",
                    "barrel",
                    layer.radius,
                    layer.profile.bins(),
                    layer.active_layer.as_deref().unwrap_or("-")
                );
                max_radius = Some(layer.radius);
            }
            Err(err) => println!("{:<8} {}", "barrel", err),
        }
    }

    let mut max_z = None;
    for record in forward_records {
        match ForwardLayer::from_pset(record) {
            Ok(layer) => {
                let position = layer
                    .z
                    .map(|z| format!("{z:.4}"))
                    .unwrap_or_else(|| "-".to_string());
                println!(
                    "{:<8} {:>10} {:>6} {}",
                    "forward",
                    position,
                    layer.profile.bins(),
                    layer.active_layer.as_deref().unwrap_or("-")
                );
                if let Some(z) = layer.z {
                    max_z = Some(z);
                }
            }
            Err(err) => println!("{:<8} {}", "forward", err),
        }
    }

    if let Some(radius) = max_radius {
        println!("outermost barrel radius: {radius:.4} cm");
    }
    if let Some(z) = max_z {
        println!("outermost forward |z|: {z:.4} cm");
    }
    Ok(())
}
