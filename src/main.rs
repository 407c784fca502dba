use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use overscan::store::PositionStore;
use overscan::sysfs::{DeviceOutputMode, SysfsWriter, read_node};
use overscan::{OverscanConfig, OverscanController, OverscanError, Rectangle, resolve_bound};

#[derive(Parser, Debug)]
#[command(name = "overscan", about = "HDMI overscan window control")]
struct Cli {
    #[arg(long, env = "OVERSCAN_AXIS_PATH")]
    axis_path: Option<String>,

    #[arg(long, env = "OVERSCAN_MODE_PATH")]
    mode_path: Option<PathBuf>,

    #[arg(long, env = "OVERSCAN_OSD_MOUSE_PATH")]
    osd_mouse_path: Option<PathBuf>,

    #[arg(long, env = "OVERSCAN_SETTINGS_PATH")]
    settings_path: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print mode, bound, zoom percent, and the driver's current window.
    Show,
    /// Grow the visible window by one percent.
    ZoomIn,
    /// Shrink the visible window by one percent.
    ZoomOut,
    /// Set the zoom percentage (80..=100; other values are ignored).
    Percent { percent: i32 },
    /// Place the window at an absolute pixel position.
    Position { x: i32, y: i32, width: i32, height: i32 },
    /// Print the canvas bound for a mode name.
    Bound { mode: String },
}

fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, code = e.error_code(), "overscan command failed");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter =
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn resolve_config(cli: &Cli) -> Result<OverscanConfig, OverscanError> {
    let mut config = OverscanConfig::from_env()?;
    if let Some(path) = &cli.axis_path {
        config.axis_path.clone_from(path);
    }
    if let Some(path) = &cli.mode_path {
        config.mode_path.clone_from(path);
    }
    if cli.osd_mouse_path.is_some() {
        config.osd_mouse_path.clone_from(&cli.osd_mouse_path);
    }
    if let Some(path) = &cli.settings_path {
        config.settings_path.clone_from(path);
    }
    Ok(config)
}

fn run(cli: Cli) -> Result<(), OverscanError> {
    if let Command::Bound { mode } = &cli.command {
        let bound = resolve_bound(mode);
        println!("{} {}", bound.max_right, bound.max_bottom);
        return Ok(());
    }

    let config = resolve_config(&cli)?;
    let mut provider = DeviceOutputMode::new(&config.mode_path, PositionStore::new(&config.settings_path));
    if let Some(path) = &config.osd_mouse_path {
        provider = provider.with_osd_mouse(path);
    }
    let mut controller = OverscanController::with_settings(provider, SysfsWriter, &config.axis_path, config.tuning)?;

    match cli.command {
        Command::Show => {
            show(&controller, Path::new(&config.axis_path));
            Ok(())
        }
        Command::ZoomIn => controller.zoom_in(),
        Command::ZoomOut => controller.zoom_out(),
        Command::Percent { percent } => controller.zoom_by_percent(percent),
        Command::Position { x, y, width, height } => controller.zoom_by_position(x, y, width, height),
        Command::Bound { .. } => Ok(()),
    }
}

fn show(controller: &OverscanController<DeviceOutputMode, SysfsWriter>, axis_path: &Path) {
    let bound = controller.bound();
    println!("mode     {}", controller.mode());
    println!("bound    {} {}", bound.max_right, bound.max_bottom);
    println!("percent  {}", controller.current_percent());
    println!("saved    {}", controller.rectangle());
    match read_node(axis_path).and_then(|raw| Rectangle::from_axis(&raw)) {
        Ok(rect) => println!("driver   {rect}"),
        Err(e) => tracing::warn!(error = %e, "driver window axis unreadable"),
    }
}
