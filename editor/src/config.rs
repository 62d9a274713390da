// config.rs - Command line options and the colors used to draw cells

use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::{Parser, ValueEnum};
use egui::Color32;
use gol_board::MetadataOrder;

/// File the terminal simulator hands over to the editor.
pub const DEFAULT_GAMESTATE: &str = "_gamestate_.txt";

/// Edit a Game of Life gamestate by clicking cells, then import it back
#[derive(Parser, Debug)]
#[command(name = "gol-editor", version)]
pub struct Args {
    /// Gamestate file to load (grid lines plus two padded size lines)
    #[arg(default_value = DEFAULT_GAMESTATE)]
    pub path: PathBuf,

    /// Where to write the edited grid [default: the loaded file]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Which trailing size line holds the column count
    #[arg(long, value_enum, default_value_t = SizeOrder::ColsRows)]
    pub metadata_order: SizeOrder,

    /// Side of one cell in pixels
    #[arg(long, default_value_t = 16.0)]
    pub cell_size: f32,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: log::LevelFilter,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeOrder {
    /// Second-to-last line is columns, last line is rows
    ColsRows,
    /// Second-to-last line is rows, last line is columns
    RowsCols,
}

impl From<SizeOrder> for MetadataOrder {
    fn from(order: SizeOrder) -> Self {
        match order {
            SizeOrder::ColsRows => MetadataOrder::ColsThenRows,
            SizeOrder::RowsCols => MetadataOrder::RowsThenCols,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub dead: Color32,
    pub live: Color32,
    pub dead_hovered: Color32,
    pub live_hovered: Color32,
    pub grid_lines: Color32,
    pub control: Color32,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            dead: Color32::BLACK,
            live: Color32::WHITE,
            dead_hovered: Color32::from_rgb(0, 128, 0),
            live_hovered: Color32::from_rgb(255, 0, 0),
            grid_lines: Color32::from_gray(60),
            control: Color32::from_rgb(0, 255, 255),
        }
    }
}

impl Palette {
    pub fn cell_color(&self, alive: bool, hovered: bool) -> Color32 {
        match (alive, hovered) {
            (true, true) => self.live_hovered,
            (true, false) => self.live,
            (false, true) => self.dead_hovered,
            (false, false) => self.dead,
        }
    }
}

#[derive(Debug, Clone)]
pub struct EditorConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub order: MetadataOrder,
    pub cell_size: f32,
    pub palette: Palette,
}

const MIN_CELL_SIZE: f32 = 4.0;
const MAX_CELL_SIZE: f32 = 64.0;

impl EditorConfig {
    pub fn from_args(args: Args) -> Result<Self> {
        if !(MIN_CELL_SIZE..=MAX_CELL_SIZE).contains(&args.cell_size) {
            bail!(
                "--cell-size must be between {MIN_CELL_SIZE} and {MAX_CELL_SIZE}, got {}",
                args.cell_size
            );
        }
        let output = args.output.unwrap_or_else(|| args.path.clone());
        Ok(Self {
            input: args.path,
            output,
            order: args.metadata_order.into(),
            cell_size: args.cell_size,
            palette: Palette::default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Result<EditorConfig> {
        let args = Args::try_parse_from(std::iter::once("gol-editor").chain(argv.iter().copied()))?;
        EditorConfig::from_args(args)
    }

    #[test]
    fn defaults_edit_the_gamestate_file_in_place() {
        let config = parse(&[]).unwrap();
        assert_eq!(config.input, PathBuf::from(DEFAULT_GAMESTATE));
        assert_eq!(config.output, config.input);
        assert_eq!(config.order, MetadataOrder::ColsThenRows);
        assert_eq!(config.cell_size, 16.0);
    }

    #[test]
    fn explicit_options() {
        let config = parse(&[
            "board.txt",
            "-o",
            "edited.txt",
            "--metadata-order",
            "rows-cols",
            "--cell-size",
            "10",
        ])
        .unwrap();
        assert_eq!(config.input, PathBuf::from("board.txt"));
        assert_eq!(config.output, PathBuf::from("edited.txt"));
        assert_eq!(config.order, MetadataOrder::RowsThenCols);
        assert_eq!(config.cell_size, 10.0);
    }

    #[test]
    fn log_level_is_parsed() {
        let args = Args::try_parse_from(["gol-editor", "--log-level", "debug"]).unwrap();
        assert_eq!(args.log_level, log::LevelFilter::Debug);
        assert!(Args::try_parse_from(["gol-editor", "--log-level", "loud"]).is_err());
    }

    #[test]
    fn rejects_silly_cell_sizes() {
        assert!(parse(&["--cell-size", "0"]).is_err());
        assert!(parse(&["--cell-size", "1000"]).is_err());
        assert!(parse(&["--cell-size", "NaN"]).is_err());
    }

    #[test]
    fn hovered_cells_use_the_active_colors() {
        let palette = Palette::default();
        assert_eq!(palette.cell_color(false, false), Color32::BLACK);
        assert_eq!(palette.cell_color(true, false), Color32::WHITE);
        assert_eq!(palette.cell_color(false, true), palette.dead_hovered);
        assert_eq!(palette.cell_color(true, true), palette.live_hovered);
    }
}
