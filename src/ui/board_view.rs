//! Board rendering for the factor grid GUI

use crate::board::{Board, Owner, Pos, COLS, ROWS, WIN_LENGTH};
use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, StrokeKind, Vec2};

use super::theme::*;

/// Board view renders the 6x6 grid. It takes no input.
pub struct BoardView {
    /// Cached cell size, shrunk when the panel is small
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: CELL_SIZE,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        last_move: Option<Pos>,
        winning_line: Option<[Pos; WIN_LENGTH]>,
    ) {
        let available = ui.available_size();
        let fit = (available.x.min(available.y) - 2.0 * BOARD_MARGIN) / ROWS.max(COLS) as f32;
        self.cell_size = fit.min(CELL_SIZE).max(24.0);

        let size = Vec2::new(
            COLS as f32 * self.cell_size + 2.0 * BOARD_MARGIN,
            ROWS as f32 * self.cell_size + 2.0 * BOARD_MARGIN,
        );
        let (response, painter) = ui.allocate_painter(size, Sense::hover());
        self.board_rect = response.rect;

        self.draw_cells(&painter, board);

        if let Some(pos) = last_move {
            self.draw_last_move_marker(&painter, pos);
        }

        if let Some(line) = winning_line {
            self.draw_winning_line(&painter, &line);
        }
    }

    /// Draw every cell, colored by owner
    fn draw_cells(&self, painter: &Painter, board: &Board) {
        let font = egui::FontId::proportional(CELL_FONT_SIZE);
        for (pos, cell) in board.iter() {
            let rect = self.cell_rect(pos);
            painter.rect_filled(rect, CornerRadius::ZERO, owner_color(cell.owner));
            painter.rect_stroke(
                rect,
                CornerRadius::ZERO,
                Stroke::new(CELL_OUTLINE_WIDTH, CELL_OUTLINE),
                StrokeKind::Inside,
            );
            painter.text(
                rect.min + Vec2::splat(15.0),
                egui::Align2::LEFT_TOP,
                cell.number.to_string(),
                font.clone(),
                CELL_TEXT,
            );
        }
    }

    /// Draw last move marker
    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        let rect = self.cell_rect(pos);
        let corner = Pos2::new(rect.max.x - 12.0, rect.max.y - 12.0);
        painter.circle_filled(corner, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    /// Draw winning line highlight
    fn draw_winning_line(&self, painter: &Painter, line: &[Pos; WIN_LENGTH]) {
        let stroke = Stroke::new(WIN_STROKE_WIDTH, WIN_HIGHLIGHT);

        for pair in line.windows(2) {
            painter.line_segment([self.cell_rect(pair[0]).center(), self.cell_rect(pair[1]).center()], stroke);
        }
        for pos in line {
            painter.rect_stroke(self.cell_rect(*pos), CornerRadius::same(2), stroke, StrokeKind::Inside);
        }
    }

    /// Screen rectangle of a cell
    pub fn cell_rect(&self, pos: Pos) -> Rect {
        let min = self.board_rect.min
            + Vec2::new(
                BOARD_MARGIN + pos.col as f32 * self.cell_size,
                BOARD_MARGIN + pos.row as f32 * self.cell_size,
            );
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }
}

/// Fill color for a cell owner
pub fn owner_color(owner: Owner) -> Color32 {
    match owner {
        Owner::Unclaimed => CELL_UNCLAIMED,
        Owner::Human => CELL_HUMAN,
        Owner::Opponent => CELL_OPPONENT,
    }
}
