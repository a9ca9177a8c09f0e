mod config;
mod error;
mod frame;
mod kinematics;
mod logging;
mod render;
mod report;
mod simulation;
mod world;

use clap::Parser;
use log::info;
use macroquad::miniquad::conf::Platform;
use macroquad::Window;
use macroquad::prelude::Conf;
use std::path::PathBuf;

// --- Command Line Arguments ---
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// File the range/time report is written to and read back from.
    #[arg(long, default_value = config::REPORT_FILE)]
    report_file: PathBuf,

    /// Run the simulation without a window at a fixed step until every projectile lands.
    #[arg(long)]
    headless: bool,

    /// Debug filter to specify log topics (e.g., "report,world")
    /// Available topics: report, world
    #[arg(long)]
    debug_filter: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn window_conf() -> Conf {
    Conf {
        window_title: config::WINDOW_TITLE.to_owned(),
        window_width: config::WINDOW_WIDTH,
        window_height: config::WINDOW_HEIGHT,
        window_resizable: false,
        // Vsync as the frame rate target
        platform: Platform {
            swap_interval: Some(1),
            ..Default::default()
        },
        ..Default::default()
    }
}

fn main() {
    let args = Args::parse();

    let log_level = logging::parse_level(&args.log_level);
    if let Err(e) = logging::init_logger(log_level, args.debug_filter) {
        eprintln!("Warning: Failed to initialize logger: {}", e);
    }

    info!("Initializing Physics-1...");

    // Report phase completes before the simulation starts
    report::run(&args.report_file, &config::LAUNCH_ANGLES);

    let mut simulation = simulation::Simulation::new();

    if args.headless {
        let dt = 1.0 / config::FRAME_RATE as f32;
        simulation.run_headless(dt, u64::MAX);
        return;
    }

    Window::from_config(window_conf(), async move {
        info!("Initializing macroquad rendering system");
        let renderer = render::Renderer::new();
        simulation.run(&renderer).await;
    });
}
