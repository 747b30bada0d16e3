//! Convert a topographic map image into a stylized ridgeline plot:
//! horizontal scan lines of the map become stacked elevation curves.

use std::error::Error;
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use ridgemap_pipeline::RenderConfig;

mod color;

/// Convert an image of a topographic map into a ridgeline plot.
#[derive(Parser)]
#[command(version)]
struct Args {
    /// Input topographic map image.
    image: PathBuf,

    /// Instead of only drawing the raised portions, draw each plot line
    /// continuously for the whole width.
    #[arg(short, long)]
    continuous: bool,

    /// Number of plot lines.
    #[arg(short, long, default_value_t = 100)]
    lines: u32,

    /// Max elevation difference; higher = larger difference between low
    /// and high spots on the map.
    #[arg(short, long, default_value_t = 50.0)]
    scale: f32,

    /// The width of the plot lines.
    #[arg(short = 'w', long, default_value_t = 3.0)]
    line_width: f32,

    /// The smoothing factor; higher = smoother terrain, lower = rougher
    /// terrain.
    #[arg(short, long, default_value_t = 5.0)]
    roughness: f32,

    /// The color of the lines (name or #rrggbb).
    #[arg(long, default_value = "white")]
    line_color: String,

    /// The color of the background (name or #rrggbb).
    #[arg(long, default_value = "black")]
    background_color: String,

    /// Skip opening the result in the default image viewer.
    #[arg(long)]
    no_open: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let config = RenderConfig {
        line_count: args.lines,
        scale: args.scale,
        line_width: args.line_width,
        roughness: args.roughness,
        continuous: args.continuous,
        line_color: color::resolve(&args.line_color).map_err(|e| format!("--line-color: {e}"))?,
        background_color: color::resolve(&args.background_color)
            .map_err(|e| format!("--background-color: {e}"))?,
    };

    let start = Instant::now();

    let image_bytes = std::fs::read(&args.image)
        .map_err(|e| format!("failed to read {}: {e}", args.image.display()))?;

    let result = ridgemap_pipeline::process_with_progress(&image_bytes, &config, |pct| {
        print!("\r[{pct}%] Plotting...    ");
        let _ = std::io::stdout().flush();
    })?;

    let canvas = ridgemap_render::render(&result.lines, result.dimensions, &config)?;
    println!("\rPlotting finished ({:.3}s)", start.elapsed().as_secs_f64());

    let output = ridgemap_render::output_file_name(&args.image, &config);
    canvas
        .save(&output)
        .map_err(|e| format!("failed to write {output}: {e}"))?;
    println!("Saved to {output}");

    if !args.no_open {
        open_in_viewer(&output);
    }

    Ok(())
}

/// Best-effort launch of the platform's default image viewer.
///
/// Failures are ignored; the plot is already on disk.
fn open_in_viewer(path: &str) {
    let (program, extra): (&str, &[&str]) = if cfg!(target_os = "windows") {
        ("cmd", &["/C", "start", ""])
    } else if cfg!(target_os = "macos") {
        ("open", &[])
    } else {
        ("xdg-open", &[])
    };
    let _ = std::process::Command::new(program)
        .args(extra)
        .arg(path)
        .spawn();
}
