mod cli;
mod clock;
mod config;
mod input;
mod ui;

use clap::Parser;
use common::config::Validate;
use common::engine::RoundController;
use common::log;
use common::logger;
use common::rng::SessionRng;
use eframe::egui;

use cli::Args;
use clock::FixedRateClock;
use ui::{BoardView, ScoreBoard, SnakeApp};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = match args.load_config() {
        Ok(config) => config,
        Err(e) => {
            logger::init_logger(args.fallback_log_prefix(), args.verbose);
            log!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    logger::init_logger(config.log_prefix.clone(), config.verbose_logging);

    if let Err(e) = config.validate() {
        log!("Invalid configuration: {}", e);
        return Err(format!("Invalid configuration: {}", e).into());
    }

    let settings = &config.game;
    let rng = SessionRng::from_seed_or_random(settings.seed);
    log!(
        "Starting {}x{} board at {} ticks/s, reversal {:?}, requests {:?}",
        settings.grid_width,
        settings.grid_height,
        settings.ticks_per_second,
        settings.reversal_rule,
        settings.request_policy
    );

    let controller = RoundController::new(settings, rng);
    let clock = FixedRateClock::new(settings.tick_interval());
    let board = BoardView::new(config.window.cell_size_px);
    let score_board = ScoreBoard::new(config.score_history_size as usize);

    let board_size = egui::vec2(
        (settings.grid_width * config.window.cell_size_px) as f32,
        (settings.grid_height * config.window.cell_size_px) as f32,
    );
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([board_size.x + SnakeApp::side_panel_width() + 20.0, board_size.y + 20.0])
            .with_title("Snake"),
        ..Default::default()
    };

    eframe::run_native(
        "wrap_snake",
        options,
        Box::new(move |_cc| Ok(Box::new(SnakeApp::new(controller, clock, board, score_board)))),
    )?;

    Ok(())
}
