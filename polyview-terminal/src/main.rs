//! polyview - rotate and zoom simple polyhedra in the terminal
//!
//! Controls:
//!   - Mouse drag / WASD / Arrow Keys: Rotate
//!   - Mouse wheel / +/-: Zoom
//!   - 1-4: Cube, Pyramid, Box, Prism
//!   - F: Fill faces, E: Mark edges, C: Cycle face color, R: Reset view
//!   - Q/ESC: Quit

use std::io::stdout;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use polyview_core::ShapeKind;
use polyview_terminal::config::parse_dimensions;
use polyview_terminal::{render_once, TerminalApp, Viewer, ViewerConfig};

#[derive(Parser, Debug)]
#[command(name = "polyview", version)]
#[command(about = "Rotate and zoom simple polyhedra in the terminal", long_about = None)]
struct Cli {
    /// TOML config file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Shape to show first: pyramid, cube, box or prism
    #[arg(short, long, value_parser = |s: &str| s.parse::<ShapeKind>())]
    shape: Option<ShapeKind>,

    /// Fill faces
    #[arg(long)]
    fill: bool,

    /// Draw edges in the mark color
    #[arg(long)]
    mark_edges: bool,

    /// Face fill color, e.g. red, dark_cyan
    #[arg(long, value_name = "COLOR")]
    face_color: Option<String>,

    /// Print a single frame of the given size to stdout and exit
    #[arg(long, value_name = "WxH", value_parser = parse_dimensions)]
    once: Option<(u16, u16)>,
}

impl Cli {
    fn apply_overrides(&self, config: &mut ViewerConfig) {
        if let Some(shape) = self.shape {
            config.shape = shape.name().to_string();
        }
        if self.fill {
            config.fill_faces = true;
        }
        if self.mark_edges {
            config.mark_edges = true;
        }
        if let Some(color) = &self.face_color {
            config.face_color = color.clone();
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => ViewerConfig::load(path)?,
        None => ViewerConfig::default(),
    };
    cli.apply_overrides(&mut config);
    let settings = config.resolve().context("invalid viewer configuration")?;
    info!("starting with {settings:?}");

    if let Some((width, height)) = cli.once {
        let viewer = Viewer::new(&settings)?;
        render_once(&viewer, width, height, &mut stdout())?;
        return Ok(());
    }

    let mut app = TerminalApp::new(&settings).context("failed to set up terminal")?;
    app.run()
}
