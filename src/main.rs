//! Curve to SVG CLI
//!
//! Usage:
//!   curve-to-svg [OPTIONS] [SCENE]
//!
//! Options:
//!   -o, --output <FILE>        Output file (overrides the scene settings)
//!   -p, --precision <DIGITS>   Fractional digits in coordinates (0-21)
//!   -m, --minify               Write the SVG on a single line
//!   --tight-bounds             Do not extend the viewBox to the origin
//!   --stdout                   Print the SVG instead of writing a file
//!   -h, --help                 Print help

use std::io::{self, Read};
use std::path::PathBuf;

use clap::Parser;

use curve_to_svg::scene::SelectionSummary;
use curve_to_svg::{export, render, Scene};

#[derive(Parser)]
#[command(name = "curve-to-svg")]
#[command(about = "Export 2D Bezier curve objects to SVG")]
struct Cli {
    /// Scene file in TOML format (reads from stdin if not provided)
    scene: Option<PathBuf>,

    /// Output file (overrides the scene settings)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Fractional digits kept in coordinates (0-21)
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(0..=21))]
    precision: Option<u32>,

    /// Write the SVG on a single line
    #[arg(short, long)]
    minify: bool,

    /// Fit the viewBox to the curves instead of extending it to the origin
    #[arg(long)]
    tight_bounds: bool,

    /// Print the SVG to stdout instead of writing the output file
    #[arg(long)]
    stdout: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    // Read scene
    let scene = match &cli.scene {
        Some(path) => match Scene::from_file(path) {
            Ok(scene) => scene,
            Err(e) => {
                eprintln!("Error loading scene '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            if let Err(e) = io::stdin().read_to_string(&mut buffer) {
                eprintln!("Error reading from stdin: {}", e);
                std::process::exit(1);
            }
            match Scene::from_str(&buffer) {
                Ok(scene) => scene,
                Err(e) => {
                    eprintln!("Error loading scene from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    // Command line flags override the scene settings
    let mut settings = scene.settings.clone();
    if let Some(output) = cli.output {
        settings = settings.with_output(output);
    }
    if let Some(precision) = cli.precision {
        settings = settings.with_precision(precision);
    }
    if cli.minify {
        settings = settings.with_minify(true);
    }
    if cli.tight_bounds {
        settings = settings.with_include_origin(false);
    }

    let summary = SelectionSummary::of(&scene.objects);
    if !summary.is_exportable() {
        log::warn!(
            "selection should contain only 2D curves ({} eligible, {} other)",
            summary.eligible,
            summary.ineligible
        );
    }

    if cli.stdout {
        match render(&scene.objects, &settings) {
            Ok(svg) => print!("{}", svg),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    match export(&scene.objects, &settings) {
        Ok(path) => eprintln!("Exported {}", path.display()),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
