//! Smooth Corners CLI
//!
//! Usage:
//!   smooth-corners [OPTIONS] --width <W> --height <H>
//!
//! Options:
//!   --smooth-corners <N>     Superellipse exponent
//!   --bg-color <COLOR>       Fill colour
//!   --border-color <COLOR>   Border colour
//!   --border-width <W>       Border width
//!   --style <DECLS>          Inline declarations, e.g. "--smooth-corners: 5"
//!   -s, --stylesheet <FILE>  Stylesheet file with properties and defaults (TOML)
//!   -o, --output <FILE>      Write SVG to a file instead of stdout
//!   -h, --help               Print help

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use log::info;

use smooth_corners::{
    render_svg_with_config, Geometry, RenderConfig, StylePropertyMap, Stylesheet, SvgConfig,
};

#[derive(Parser)]
#[command(name = "smooth-corners")]
#[command(about = "Render a superellipse background with border as SVG")]
struct Cli {
    /// Element width
    #[arg(long)]
    width: f64,

    /// Element height
    #[arg(long)]
    height: f64,

    /// Superellipse exponent (4 draws a squircle)
    #[arg(long, allow_hyphen_values = true)]
    smooth_corners: Option<String>,

    /// Fill colour
    #[arg(long)]
    bg_color: Option<String>,

    /// Border colour
    #[arg(long)]
    border_color: Option<String>,

    /// Border width
    #[arg(long, allow_hyphen_values = true)]
    border_width: Option<String>,

    /// Inline custom property declarations
    #[arg(long, allow_hyphen_values = true)]
    style: Option<String>,

    /// Stylesheet file with declared values and defaults (TOML format)
    #[arg(short, long)]
    stylesheet: Option<PathBuf>,

    /// Number of outline samples
    #[arg(long)]
    steps: Option<usize>,

    /// Omit the XML declaration and indentation
    #[arg(long)]
    compact: bool,

    /// Output file (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl Cli {
    /// Inline declarations overlaid with the explicit property flags
    fn properties(&self) -> StylePropertyMap {
        let mut props = self
            .style
            .as_deref()
            .map(StylePropertyMap::parse_declarations)
            .unwrap_or_default();

        let flags = [
            ("--smooth-corners", &self.smooth_corners),
            ("--bg-color", &self.bg_color),
            ("--border-color", &self.border_color),
            ("--border-width", &self.border_width),
        ];
        for (name, value) in flags {
            if let Some(value) = value {
                props.set(name, value.as_str());
            }
        }
        props
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    // Load stylesheet
    let stylesheet = match &cli.stylesheet {
        Some(path) => match Stylesheet::from_file(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Error loading stylesheet '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => Stylesheet::default(),
    };

    let svg_config = if cli.compact {
        SvgConfig::new().with_standalone(false).with_pretty_print(false)
    } else {
        SvgConfig::default()
    };
    let mut config = RenderConfig::new()
        .with_svg(svg_config)
        .with_stylesheet(stylesheet);
    if let Some(steps) = cli.steps {
        config = config.with_steps(steps);
    }

    let geometry = Geometry::new(cli.width, cli.height);
    let svg = render_svg_with_config(geometry, &cli.properties(), &config);

    match &cli.output {
        Some(path) => {
            if let Err(e) = fs::write(path, &svg) {
                eprintln!("Error writing file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
            info!("wrote {}", path.display());
        }
        None => println!("{}", svg),
    }
}
