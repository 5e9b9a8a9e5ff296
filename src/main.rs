//! wardrobe-cutlist - CLI tool to calculate wardrobe cut-lists.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use wardrobe_core::{
    calculate_doors, calculate_wardrobe_parts, export_csv, export_dxf, find_preset,
    load_door_input, load_wardrobe_config, validate_door_input, validate_wardrobe,
    validate_wardrobe_strict, wardrobe_presets, DoorInput, Material, Panel, ValidationResult,
    WardrobeConfig,
};

/// Calculate panel cut-lists, edge banding and costs for wardrobes.
#[derive(Parser, Debug)]
#[command(name = "wardrobe-cutlist")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input configuration file (JSON)
    #[arg(short, long, conflicts_with = "preset")]
    input: Option<PathBuf>,

    /// Start from a named preset (small, medium, large, walkin)
    #[arg(short, long)]
    preset: Option<String>,

    /// Switch the sheet material (mdf, plywood), resetting thickness and price
    #[arg(short, long, value_parser = parse_material)]
    material: Option<Material>,

    /// Input describes a column/door wardrobe
    #[arg(long, requires = "input")]
    columns: bool,

    /// Apply strict buildability checks
    #[arg(long)]
    strict: bool,

    /// Validate only, don't calculate
    #[arg(long)]
    validate: bool,

    /// Write the cut-list as CSV
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Write part outlines as DXF
    #[arg(long)]
    dxf: Option<PathBuf>,

    /// Output the calculation result as JSON
    #[arg(long)]
    debug: bool,

    /// List the built-in presets and exit
    #[arg(long)]
    list_presets: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if args.list_presets {
        for preset in wardrobe_presets() {
            println!("{:<8} {} - {}", preset.id, preset.name, preset.description);
        }
        return Ok(());
    }

    if args.columns {
        run_columns(&args)
    } else {
        run_wardrobe(&args)
    }
}

fn run_wardrobe(args: &Args) -> Result<()> {
    let config = match (&args.input, &args.preset) {
        (Some(path), _) => {
            info!("Processing: {}", path.display());
            load_wardrobe_config(path)
                .with_context(|| format!("Failed to load {}", path.display()))?
        }
        (None, Some(id)) => {
            let preset = find_preset(id)?;
            info!("Using preset: {}", preset.name);
            preset.config
        }
        (None, None) => {
            info!("No input given, using the default wardrobe");
            WardrobeConfig::default()
        }
    };

    let config = match args.material {
        Some(material) => {
            info!("Using material: {}", material);
            config.with_material(material)
        }
        None => config,
    };

    let validation = if args.strict {
        validate_wardrobe_strict(&config)
    } else {
        validate_wardrobe(&config)
    };
    report(&validation)?;

    if args.validate {
        info!("Validation passed");
        return Ok(());
    }

    let result = calculate_wardrobe_parts(&config);

    if args.debug {
        let json = serde_json::to_string_pretty(&result)?;
        println!("{}", json);
        return Ok(());
    }

    for part in &result.parts {
        info!(
            "{:<24} {:>8.1} x {:>8.1} x {:>4.1} mm  x{}",
            part.name, part.width_mm, part.height_mm, part.thickness_mm, part.quantity
        );
    }
    info!(
        "Total area: {:.4} m², banding: {:.3} m, cost: {:.2}",
        result.total_area, result.band_calculation.total_band_meters, result.total_cost
    );

    write_exports(args, &result.parts)
}

fn run_columns(args: &Args) -> Result<()> {
    let Some(path) = &args.input else {
        anyhow::bail!("--columns requires --input");
    };

    info!("Processing: {}", path.display());
    let input =
        load_door_input(path).with_context(|| format!("Failed to load {}", path.display()))?;

    let input = match args.material {
        Some(material) => {
            info!("Using material: {}", material);
            with_door_material(input, material)
        }
        None => input,
    };

    if args.validate {
        report(&validate_door_input(&input))?;
        info!("Validation passed");
        return Ok(());
    }

    // calculate_doors validates and logs warnings itself
    let calculation = calculate_doors(&input).map_err(|err| {
        for e in err.validation_errors() {
            error!("{}", e);
        }
        anyhow::Error::from(err)
    })?;

    if args.debug {
        let json = serde_json::to_string_pretty(&calculation)?;
        println!("{}", json);
        return Ok(());
    }

    let summary = &calculation.summary;
    info!(
        "{} column(s): {} full, {} split, {} open",
        summary.columns, summary.door_types.full, summary.door_types.split, summary.door_types.none
    );
    info!(
        "{} door leaf/leaves, area: {:.4} m², banding: {:.3} m, cost: {:.2}",
        summary.total_doors, summary.total_area, summary.total_band_length, summary.total_cost
    );

    write_exports(args, &calculation.parts)
}

fn parse_material(name: &str) -> std::result::Result<Material, String> {
    Material::from_name(name)
        .ok_or_else(|| format!("unknown material '{}' (expected mdf or plywood)", name))
}

fn with_door_material(mut input: DoorInput, material: Material) -> DoorInput {
    input.material = material;
    input.price_per_m2 = material.default_price_per_m2();
    input
}

fn report(validation: &ValidationResult) -> Result<()> {
    for warning in &validation.warnings {
        warn!("{}", warning);
    }

    for err in &validation.errors {
        error!("{}", err);
    }

    if !validation.passed {
        anyhow::bail!("Validation failed");
    }

    Ok(())
}

fn write_exports(args: &Args, parts: &[Panel]) -> Result<()> {
    if let Some(path) = &args.csv {
        write_file(path, &export_csv(parts))?;
    }
    if let Some(path) = &args.dxf {
        write_file(path, &export_dxf(parts))?;
    }
    Ok(())
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    info!("Generated: {}", path.display());
    Ok(())
}
