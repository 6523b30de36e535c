//! Example: Quote a model file from the command line
//!
//! Analyzes the given file, reconciles the default print configuration
//! against the standard catalog, and prints the resulting price breakdown:
//!
//! ```text
//! cargo run --example quote_model -- path/to/model.stl
//! ```

use printquote::{Analysis, Catalog, PrintConfiguration, StatsSource, pricing, reconcile};
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("Usage: {} <model_file>", args[0]);
        eprintln!();
        eprintln!("Example: {} bracket.stl", args[0]);
        std::process::exit(1);
    }

    let filename = &args[1];
    println!("Analyzing model: {}", filename);
    println!();

    let Analysis { stats, source } = Analysis::from_file(filename)?;

    match source {
        StatsSource::ParsedStl => println!("Parsed binary STL."),
        StatsSource::SizeHeuristic => {
            println!("No parser for this format; estimated from file size.")
        }
        StatsSource::ParseFallback => {
            println!("STL could not be parsed; using fallback estimate.")
        }
    }

    println!("  Volume:       {:.2} cm³", stats.volume_mm3 / 1000.0);
    println!("  Surface area: {:.2} cm²", stats.surface_area_mm2 / 100.0);
    println!(
        "  Bounding box: {:.1} x {:.1} x {:.1} mm",
        stats.bounding_box_mm[0], stats.bounding_box_mm[1], stats.bounding_box_mm[2]
    );
    println!("  Triangles:    {}", stats.triangle_count);
    println!();

    let catalog = Catalog::standard();
    let config = reconcile(&PrintConfiguration::default(), &catalog);
    let profile = catalog
        .active_printer()
        .ok_or("catalog defines no printers")?;

    if !profile.accommodates(&stats) {
        println!("⚠️  Model exceeds the printer's build volume.");
        println!();
    }

    let breakdown = pricing::compute_breakdown(Some(&stats), &config, profile, &catalog)?;

    let total_minutes = (breakdown.print_time_hours * 60.0).round() as u64;
    println!("Quote ({} / {}% infill):", config.material, config.infill_percent);
    println!("  Material:     {:>8.2}", breakdown.material_cost);
    println!("  Machine time: {:>8.2}", breakdown.machine_cost);
    println!("  Labor:        {:>8.2}", breakdown.labor_cost);
    println!("  Total:        {:>8.2}", breakdown.total);
    println!(
        "  Print time:   {}h {}m",
        total_minutes / 60,
        total_minutes % 60
    );

    Ok(())
}
