use clap::Parser;
use joukowsky_rs::render::{Layout, StyleConfig, SvgRenderer};
use joukowsky_rs::{CircleParameters, ConformalMapper, DEFAULT_SAMPLES};
use ncollide2d::na::Complex;
use std::error::Error;
use std::fs::File;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Map an offset circle to a Joukowsky airfoil and draw both planes as SVG
#[derive(Parser, Debug)]
#[command(name = "joukowsky", version)]
struct Args {
    /// Circle radius in the z-plane
    #[arg(long, default_value_t = 1.0)]
    radius: f64,

    /// Real part of the offset; the circle is centered at -offset
    #[arg(long, default_value_t = 0.2, allow_negative_numbers = true)]
    offset_re: f64,

    /// Imaginary part of the offset
    #[arg(long, default_value_t = -0.5, allow_negative_numbers = true)]
    offset_im: f64,

    /// Number of samples around the circle
    #[arg(long, default_value_t = DEFAULT_SAMPLES)]
    samples: usize,

    #[arg(long, value_enum, default_value_t = Layout::SideBySide)]
    layout: Layout,

    /// Output SVG path, defaults to a file under output/ named after the layout
    #[arg(long)]
    output: Option<PathBuf>,

    /// JSON style configuration
    #[arg(long)]
    style: Option<PathBuf>,

    /// Also write the computed geometry as JSON
    #[arg(long)]
    dump: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let params = CircleParameters::new(args.radius, Complex::new(args.offset_re, args.offset_im));
    let mapper = ConformalMapper::new(params).with_samples(args.samples);

    let result = match mapper.run() {
        Ok(r) => r,
        Err(e) => {
            error!(
                radius = args.radius,
                offset_re = args.offset_re,
                offset_im = args.offset_im,
                samples = args.samples,
                "{}",
                e
            );
            return Err(e.into());
        }
    };
    info!(beta = result.beta, k = result.k, chord = result.chord(), "computed airfoil");

    if let Some(path) = &args.dump {
        serde_json::to_writer_pretty(File::create(path)?, &result)?;
        info!(path = %path.display(), "wrote geometry");
    }

    let style = match &args.style {
        Some(path) => StyleConfig::from_file(path)?,
        None => StyleConfig::default(),
    };

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(args.layout.default_output()));
    SvgRenderer::new(style).save(&result, args.layout, &output)?;

    Ok(())
}
