// ui.rs - Clickable cell grid with the clear and import controls

use eframe::egui;
use egui::{Color32, Pos2, Rect, RichText, Vec2};
use log::{debug, warn};

use crate::config::Palette;
use crate::session::{EditorSession, SessionOutcome};

pub const TITLE: &str = "GUI input Mode (Gamestate)";

const CELL_SPACING: f32 = 1.0;
const PANEL_MARGIN: f32 = 8.0;   // egui's default central panel margin
const FOOTER_HEIGHT: f32 = 96.0; // separator + population + error + control
const CONTROL_HEIGHT: f32 = 28.0;
const CLEAR_WIDTH: f32 = 64.0;
const MIN_WIDTH: f32 = 260.0;

pub struct EditorApp {
    session: EditorSession,
    palette: Palette,
    cell_size: f32,
}

impl EditorApp {
    pub fn new(session: EditorSession, palette: Palette, cell_size: f32) -> Self {
        Self { session, palette, cell_size }
    }

    fn draw_grid(&mut self, ui: &mut egui::Ui) {
        let rows = self.session.board().rows();
        let cols = self.session.board().cols();

        let (response, painter) = ui.allocate_painter(grid_size(rows, cols, self.cell_size), egui::Sense::click());
        let origin = response.rect.min;

        // Gaps between cells show through as grid lines
        painter.rect_filled(response.rect, 0.0, self.palette.grid_lines);

        if response.clicked() {
            let clicked = response
                .interact_pointer_pos()
                .and_then(|pos| cell_at(origin, pos, rows, cols, self.cell_size));
            if let Some((row, col)) = clicked {
                if let Err(e) = self.session.toggle(row, col) {
                    warn!("Ignoring click: {e}");
                }
            }
        }

        let hovered = response
            .hover_pos()
            .and_then(|pos| cell_at(origin, pos, rows, cols, self.cell_size));

        for (row, cells) in self.session.board().iter_rows().enumerate() {
            for (col, &alive) in cells.iter().enumerate() {
                let color = self.palette.cell_color(alive, hovered == Some((row, col)));
                painter.rect_filled(cell_rect(origin, row, col, self.cell_size), 0.0, color);
            }
        }
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            self.draw_grid(ui);

            ui.separator();

            let board = self.session.board();
            ui.horizontal(|ui| {
                ui.label(format!("Live cells: {} / {}", board.population(), board.rows() * board.cols()));
                ui.separator();
                ui.label(format!("Saving to {}", self.session.output().display()));
            });

            if let Some(err) = self.session.last_error() {
                ui.colored_label(Color32::RED, format!("Import failed, try again: {err}"));
            }

            ui.horizontal(|ui| {
                if ui.add_sized([CLEAR_WIDTH, CONTROL_HEIGHT], egui::Button::new("Clear")).clicked() {
                    self.session.clear();
                }

                let control = egui::Button::new(RichText::new("Import gamestate").color(Color32::BLACK))
                    .fill(self.palette.control);
                if ui.add_sized([ui.available_width(), CONTROL_HEIGHT], control).clicked() {
                    if let Err(e) = self.session.save() {
                        debug!("Keeping the window open after failed import: {e}");
                    }
                }
            });
            if self.session.outcome() == SessionOutcome::Saved {
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
        });
    }
}

/// Pixel size of the drawn grid.
pub fn grid_size(rows: usize, cols: usize, cell_size: f32) -> Vec2 {
    let pitch = cell_size + CELL_SPACING;
    Vec2::new(pitch * cols as f32 - CELL_SPACING, pitch * rows as f32 - CELL_SPACING)
}

/// Inner window size that fits the grid and the footer without scrolling.
pub fn window_size(rows: usize, cols: usize, cell_size: f32) -> [f32; 2] {
    let grid = grid_size(rows, cols, cell_size);
    [
        (grid.x + 2.0 * PANEL_MARGIN).max(MIN_WIDTH),
        grid.y + 2.0 * PANEL_MARGIN + FOOTER_HEIGHT,
    ]
}

fn cell_rect(origin: Pos2, row: usize, col: usize, cell_size: f32) -> Rect {
    let pitch = cell_size + CELL_SPACING;
    Rect::from_min_size(
        origin + Vec2::new(col as f32 * pitch, row as f32 * pitch),
        Vec2::splat(cell_size),
    )
}

/// Cell under `pos`, or `None` outside the grid or on a gap between cells.
pub fn cell_at(origin: Pos2, pos: Pos2, rows: usize, cols: usize, cell_size: f32) -> Option<(usize, usize)> {
    let offset = pos - origin;
    if offset.x < 0.0 || offset.y < 0.0 {
        return None;
    }
    let pitch = cell_size + CELL_SPACING;
    let (row, col) = ((offset.y / pitch) as usize, (offset.x / pitch) as usize);
    if row >= rows || col >= cols {
        return None;
    }
    cell_rect(origin, row, col, cell_size)
        .contains(pos)
        .then_some((row, col))
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    fn origin() -> Pos2 {
        pos2(10.0, 20.0)
    }

    #[test]
    fn pointer_maps_to_cell() {
        assert_eq!(cell_at(origin(), pos2(10.0, 20.0), 3, 2, 16.0), Some((0, 0)));
        assert_eq!(cell_at(origin(), pos2(30.0, 25.0), 3, 2, 16.0), Some((0, 1)));
        assert_eq!(cell_at(origin(), pos2(15.0, 60.0), 3, 2, 16.0), Some((2, 0)));
    }

    #[test]
    fn pointer_outside_grid_hits_nothing() {
        assert_eq!(cell_at(origin(), pos2(9.0, 25.0), 3, 2, 16.0), None);
        assert_eq!(cell_at(origin(), pos2(15.0, 19.0), 3, 2, 16.0), None);
        assert_eq!(cell_at(origin(), pos2(50.0, 25.0), 3, 2, 16.0), None);
        assert_eq!(cell_at(origin(), pos2(15.0, 80.0), 3, 2, 16.0), None);
    }

    #[test]
    fn gap_between_cells_hits_nothing() {
        // Column 0 spans x 10..26, the gap is 26..27
        assert_eq!(cell_at(origin(), pos2(26.5, 25.0), 3, 2, 16.0), None);
    }

    #[test]
    fn window_fits_grid() {
        let grid = grid_size(28, 53, 16.0);
        assert_eq!(grid, Vec2::new(17.0 * 53.0 - 1.0, 17.0 * 28.0 - 1.0));

        let [w, h] = window_size(28, 53, 16.0);
        assert!(w >= grid.x + 2.0 * PANEL_MARGIN);
        assert!(h > grid.y + FOOTER_HEIGHT);

        let [w, _] = window_size(1, 1, 16.0);
        assert_eq!(w, MIN_WIDTH);
    }
}
