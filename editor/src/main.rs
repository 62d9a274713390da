// main.rs - Gamestate editor launched by the terminal Game of Life
//
// Loads the gamestate file, lets the user flip cells, and writes the grid back
// when "Import gamestate" is pressed. The exit code tells the simulator whether
// the import happened.

use std::process::ExitCode;

use anyhow::{Context, anyhow};
use clap::Parser;
use eframe::egui;
use log::{info, warn};
use simple_logger::SimpleLogger;

mod config;
mod session;
mod ui;

use config::{Args, EditorConfig};
use session::{EditorSession, SessionOutcome};
use ui::{EditorApp, TITLE};

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();
    SimpleLogger::new().with_level(args.log_level).init()?;
    info!("Starting gol_editor v{} ...", env!("CARGO_PKG_VERSION"));

    let config = EditorConfig::from_args(args)?;
    let board = gol_board::load_with(&config.input, config.order)
        .with_context(|| format!("cannot start GUI input Mode from {:?}", config.input))?;

    let session = EditorSession::new(board, config.output.clone());
    let outcome = session.outcome_handle();

    let board = session.board();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITLE)
            .with_inner_size(ui::window_size(board.rows(), board.cols(), config.cell_size))
            .with_resizable(false),
        ..Default::default()
    };

    let (palette, cell_size) = (config.palette, config.cell_size);
    eframe::run_native(
        TITLE,
        options,
        Box::new(move |_cc| Box::new(EditorApp::new(session, palette, cell_size))),
    )
    .map_err(|e| anyhow!("GUI input Mode failed: {e}"))?;

    match outcome.get() {
        SessionOutcome::Saved => {
            info!("Gamestate written to {:?}", config.output);
            println!("\n--GUI input Mode terminated successfully--\n");
            Ok(ExitCode::SUCCESS)
        }
        SessionOutcome::Pending => {
            warn!("Window closed without importing the gamestate");
            println!("\n* GUI input Mode terminated unsuccessfully! Gamestate wasn't imported! *\n");
            Ok(ExitCode::FAILURE)
        }
    }
}
