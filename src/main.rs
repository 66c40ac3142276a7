use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use so2_viewer::{css_string, Palette, Viewer, ViewerConfig};

#[derive(Parser, Debug)]
#[command(name = "so2-viewer")]
#[command(about = "Color ramp, legend and raster series tools for SO2 forecasts")]
struct Args {
    /// JSON configuration file
    #[arg(short, long, env = "SO2_VIEWER_CONFIG")]
    config: Option<PathBuf>,

    /// Override the palette of the configuration
    #[arg(long)]
    palette: Option<String>,

    /// Override the opacity of the ramp colors
    #[arg(long)]
    alpha: Option<f64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the color stops, one per line
    Stops,
    /// Print the raster style expression as JSON
    Style,
    /// Write the colorbar as a PNG image
    Legend {
        #[arg(short, long, default_value = "colorbar.png")]
        output: PathBuf,
    },
    /// List the known palettes
    Palettes,
    /// Print the basemap tile URL
    Basemap,
    /// Step through the series and print the information panel
    Browse {
        /// Keys to replay (ArrowLeft, ArrowRight, Space)
        #[arg(value_delimiter = ',')]
        keys: Vec<String>,
    },
}

fn load_config(args: &Args) -> Result<ViewerConfig> {
    let mut config = match &args.config {
        Some(path) => ViewerConfig::from_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => ViewerConfig::default(),
    };
    if let Some(palette) = &args.palette {
        config.ramp.palette = palette.clone();
    }
    if let Some(alpha) = args.alpha {
        config.ramp.alpha = alpha;
    }
    config.validate().context("invalid configuration")?;
    Ok(config)
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env()
                         .unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = load_config(&args)?;

    match &args.command {
        Command::Stops => {
            for stop in config.ramp.stops()?.iter() {
                println!("{}\t{}", stop.value, css_string(&stop.color));
            }
        }
        Command::Style => {
            let viewer = Viewer::from_config(&config)?;
            println!("{}", serde_json::to_string_pretty(
                &viewer.style().expression())?);
        }
        Command::Legend { output } => {
            let viewer = Viewer::from_config(&config)?;
            viewer.legend().save_png(output)?;
            for seg in viewer.legend().segments().iter().rev() {
                println!("{:>8.2}\t{}", seg.label_y, seg.label);
            }
        }
        Command::Palettes => {
            for name in Palette::names() {
                let p = Palette::by_name(name)?;
                println!("{}\t{:?}\t{} control points", name, p.typ(), p.len());
            }
        }
        Command::Basemap => {
            println!("{}", config.basemap.tile_url()?);
        }
        Command::Browse { keys } => {
            let mut viewer = Viewer::from_config(&config)?;
            print_info(&mut viewer)?;
            for key in keys {
                match viewer.handle_key(key)? {
                    Some(_) => print_info(&mut viewer)?,
                    None => info!(key = %key, "Ignoring unbound key"),
                }
            }
        }
    }
    Ok(())
}

fn print_info(viewer: &mut Viewer) -> Result<()> {
    let info = viewer.info()
        .with_context(|| format!("reading {}", viewer.current_layer().base))?;
    println!("[{}] {}: {}", info.index, info.name, info.description);
    Ok(())
}
