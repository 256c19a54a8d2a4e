mod admin;
mod colors;
mod config;
mod offline;
mod ui;

use std::path::PathBuf;

use ai_snake_common::games::SessionRng;
use ai_snake_common::leaderboard::LeaderboardStore;
use ai_snake_common::{log, logger};
use clap::Parser;
use eframe::egui;

use config::{get_config_manager, Config, DEFAULT_CONFIG_FILE};
use offline::ScoreBoard;
use ui::SnakeApp;

#[derive(Parser)]
#[command(name = "ai_snake", about = "Auto-playing snake with a local leaderboard")]
struct Args {
    /// YAML settings file, created with defaults when missing
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Leaderboard database, overrides the config file for this run
    #[arg(long)]
    database: Option<PathBuf>,

    /// Fixed seed for food placement
    #[arg(long)]
    seed: Option<u64>,

    /// Log every tick
    #[arg(long)]
    verbose: bool,

    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = args.use_log_prefix.then(|| "Client".to_string());
    logger::init_logger(prefix, args.verbose);

    let config_manager = get_config_manager(&args.config);
    let config = match config_manager.load_or_init() {
        Ok(config) => config,
        Err(e) => {
            log!("Using default settings: {}", e);
            Config::default()
        }
    };

    let database_path = args
        .database
        .unwrap_or_else(|| config.leaderboard.database_path.clone());
    let store = LeaderboardStore::new(&database_path);
    match store.init() {
        Ok(()) => log!("Leaderboard at {}", database_path.display()),
        Err(e) => log!("{}", e),
    }
    let score_board = ScoreBoard::new(
        store,
        config.leaderboard.top_count,
        config.leaderboard.chart_count,
    );

    let rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 720.0])
            .with_min_inner_size([640.0, 560.0])
            .with_title("AI Snake Game"),
        ..Default::default()
    };

    eframe::run_native(
        "AI Snake Game",
        options,
        Box::new(move |_cc| {
            Ok(Box::new(SnakeApp::new(
                config,
                config_manager,
                score_board,
                rng,
            )))
        }),
    )?;

    Ok(())
}
