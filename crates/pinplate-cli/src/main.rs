//! `pinplate` — generate a printable pin plate and export it as STL.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use file_export::{default_filename, write_stl, StlFormat};
use part_builder::{build, Assembly, BuildOptions};
use part_types::{ParameterSet, BUILD_PLATE_XY_MM};

#[derive(Parser, Debug)]
#[command(name = "pinplate")]
#[command(about = "Generate a circular plate with a labelled registration pin, as printable STL")]
#[command(version)]
struct Cli {
    /// Plate diameter in mm
    #[arg(short = 'p', long, default_value_t = 11.0)]
    plate_diameter: f64,

    /// Cylinder (pin) diameter in mm
    #[arg(short = 'c', long, default_value_t = 4.0)]
    cylinder_diameter: f64,

    /// Cylinder height above the plate, in mm
    #[arg(long, default_value_t = 10.0)]
    cylinder_height: f64,

    /// Plate thickness in mm
    #[arg(long, default_value_t = 1.0)]
    plate_thickness: f64,

    /// Concentric through-hole diameter in mm; 0 for a solid pin
    #[arg(long, default_value_t = 1.0)]
    hole_diameter: f64,

    /// Circle tessellation: segments per full turn
    #[arg(long, default_value_t = 64)]
    segments: u32,

    /// Output path; defaults to a name derived from the diameters
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write ASCII STL instead of binary
    #[arg(long)]
    ascii: bool,

    /// Build and report without writing any file
    #[arg(long)]
    no_export: bool,
}

impl Cli {
    fn params(&self) -> ParameterSet {
        ParameterSet {
            plate_diameter: self.plate_diameter,
            cylinder_diameter: self.cylinder_diameter,
            cylinder_height: self.cylinder_height,
            plate_thickness: self.plate_thickness,
            hole_diameter: self.hole_diameter,
        }
    }
}

fn print_report(params: &ParameterSet, assembly: &Assembly) {
    let dims = &assembly.dims;
    println!("Design parameters:");
    println!("  Plate diameter:    {} mm", params.plate_diameter);
    println!("  Plate thickness:   {} mm", params.plate_thickness);
    println!("  Cylinder diameter: {} mm", params.cylinder_diameter);
    println!("  Cylinder height:   {} mm", params.cylinder_height);
    if dims.hole_radius > 0.0 {
        println!("  Hole diameter:     {} mm", dims.hole_radius * 2.0);
    } else {
        println!("  Hole diameter:     none (solid pin)");
    }
    println!("  Total height:      {} mm", dims.total_height);
    println!("FDM printability:");
    println!(
        "  - label \"{}\" embossed {} mm proud of the pin's top face",
        dims.label_text, dims.text_height
    );
    if assembly.label_trimmed {
        println!("  - the through-hole passes through the label (ink trimmed at the rim)");
    }
    println!(
        "  - {:.2} mm chamfer at the plate-to-pin junction, no supports needed",
        dims.chamfer_leg
    );
    println!(
        "  - fits the {BUILD_PLATE_XY_MM:.0}x{BUILD_PLATE_XY_MM:.0} mm build plate"
    );
    println!(
        "Mesh: {} triangles, {} vertices, volume {:.2} mm^3",
        assembly.mesh.triangle_count(),
        assembly.mesh.vertex_count(),
        assembly.mesh.volume()
    );
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let params = cli.params();
    let assembly = build(&params, &BuildOptions { segments: cli.segments })?;
    for warning in &assembly.warnings {
        eprintln!("warning: {warning}");
    }
    print_report(&params, &assembly);

    if cli.no_export {
        println!("Export skipped (--no-export)");
        return Ok(());
    }
    let path = cli
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(default_filename(&params)));
    let format = if cli.ascii { StlFormat::Ascii } else { StlFormat::Binary };
    write_stl(&assembly.mesh, &path, format)
        .with_context(|| format!("exporting {}", path.display()))?;
    println!("Exported to {}", path.display());
    Ok(())
}
