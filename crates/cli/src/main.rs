use anyhow::{bail, ensure, Context};
use config::{Config, File};
use hexspin::{
    render::svg::grid_to_svg, timed, Cell, Cursor, GridRenderer, HexMap,
    HexPoint, PuzzleConfig, RenderConfig,
};
use log::{info, LevelFilter};
use simple_logger::SimpleLogger;
use std::{
    fs::OpenOptions,
    io::Write,
    path::{Path, PathBuf},
    process,
};
use structopt::StructOpt;

/// CLI for rendering snapshot frames of the hexspin rotation puzzle. The
/// interactive loop lives in the windowed shell; this tool generates a grid,
/// replays a sequence of cursor moves, optionally advances a rotation to a
/// chosen progress, and writes the resulting frame as an SVG.
#[derive(Debug, StructOpt)]
#[structopt(name = "hexspin")]
struct Opt {
    /// Path to a config file that defines the grid to be generated. Supported
    /// formats: JSON, TOML
    #[structopt(short, long)]
    config: Option<PathBuf>,

    /// Cursor moves to replay before rendering, one character per move:
    /// u/d/l/r
    #[structopt(short, long, default_value = "")]
    moves: String,

    /// Start a rotation of the cursor's three cells before rendering
    #[structopt(long)]
    rotate: bool,

    /// Rotation progress to render at, in [0, 1]. 1.0 commits the swap
    /// before rendering. Only relevant with --rotate
    #[structopt(long, default_value = "0.5")]
    progress: f64,

    /// Hex circumradius in pixels
    #[structopt(long, default_value = "16")]
    hex_size: f64,

    /// Path the SVG frame will be written to
    #[structopt(short, long, default_value = "hexspin.svg")]
    output: PathBuf,

    /// The logging level to use. See
    /// https://docs.rs/log/0.4.11/log/enum.LevelFilter.html for options
    #[structopt(long, default_value = "info")]
    log_level: LevelFilter,
}

fn load_config(config_path: &Path) -> anyhow::Result<PuzzleConfig> {
    let mut settings = Config::new();
    let config_path = config_path.to_str().ok_or_else(|| {
        anyhow::anyhow!("invalid character in path {:?}", config_path)
    })?;
    settings
        .merge(File::with_name(config_path))
        .context("error reading config file")?;
    settings.try_into().context("error reading config")
}

/// Run the CLI with some options
fn run(opt: Opt) -> anyhow::Result<()> {
    SimpleLogger::new().with_level(opt.log_level).init()?;

    let puzzle_config = match &opt.config {
        Some(config_path) => load_config(config_path)?,
        None => PuzzleConfig::default(),
    };
    let mut map = HexMap::generate(puzzle_config)?;

    // Same seed coordinate the windowed shell uses
    let mut cursor = Cursor::new(HexPoint::new(2, 2, -4)?);
    for action in opt.moves.chars() {
        match action {
            'u' => cursor.move_up(),
            'd' => cursor.move_down(),
            'l' => cursor.move_left(),
            'r' => cursor.move_right(),
            other => {
                bail!("unknown move {:?}; expected one of u/d/l/r", other)
            }
        }
    }
    info!("Cursor at {}", cursor.anchor());

    if opt.rotate {
        ensure!(
            (0.0..=1.0).contains(&opt.progress),
            "--progress must be in [0, 1], but was {}",
            opt.progress
        );
        map.start_rotation(cursor.hexes())?;
        // Cell progress advances at ROTATION_SPEED times wall time
        map.step_rotation(opt.progress / Cell::ROTATION_SPEED);
    }

    let renderer = GridRenderer::new(RenderConfig {
        hex_size: opt.hex_size,
    })?;
    let document = grid_to_svg(&map, &cursor, &renderer);

    timed!(
        format!("Writing frame to {:?}", &opt.output),
        log::Level::Info,
        {
            let mut file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&opt.output)
                .with_context(|| {
                    format!("error opening output file {:?}", &opt.output)
                })?;
            file.write_all(document.to_string().as_bytes()).with_context(
                || format!("error writing to file {:?}", &opt.output),
            )?;
        }
    );

    Ok(())
}

fn main() {
    let exit_code = match run(Opt::from_args()) {
        Ok(_) => 0,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            1
        }
    };
    process::exit(exit_code);
}
