//! Factor selector rendering
//!
//! A row of the nine factors with a marker above the `prev` factor and one
//! below the `curr` factor. Selection itself happens through the keyboard.

use crate::board::{MAX_FACTOR, MIN_FACTOR};
use egui::{CornerRadius, Painter, Pos2, Rect, Sense, Shape, Stroke, Vec2};

use super::theme::*;

#[derive(Default)]
pub struct FactorBar;

impl FactorBar {
    pub fn show(&self, ui: &mut egui::Ui, prev: u8, curr: u8) {
        let count = (MAX_FACTOR - MIN_FACTOR + 1) as f32;
        let width = count * BTN_SIZE + (count - 1.0) * BTN_SPACING;
        let marker_band = 2.0 * MARKER_RADIUS + 5.0;
        let (response, painter) = ui.allocate_painter(
            Vec2::new(width, BTN_SIZE + 2.0 * marker_band),
            Sense::hover(),
        );
        let origin = response.rect.min + Vec2::new(0.0, marker_band);

        let font = egui::FontId::proportional(20.0);
        for factor in MIN_FACTOR..=MAX_FACTOR {
            let rect = button_rect(origin, factor);
            painter.rect_filled(rect, CornerRadius::same(4), FACTOR_BUTTON);
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                factor.to_string(),
                font.clone(),
                FACTOR_TEXT,
            );
        }

        let prev_rect = button_rect(origin, prev);
        draw_triangle(
            &painter,
            Pos2::new(prev_rect.center().x, prev_rect.min.y - MARKER_RADIUS - 5.0),
            true,
            PREV_MARKER,
        );

        let curr_rect = button_rect(origin, curr);
        draw_triangle(
            &painter,
            Pos2::new(curr_rect.center().x, curr_rect.max.y + MARKER_RADIUS + 5.0),
            false,
            CURR_MARKER,
        );
    }
}

fn button_rect(origin: Pos2, factor: u8) -> Rect {
    let x = (factor - MIN_FACTOR) as f32 * (BTN_SIZE + BTN_SPACING);
    Rect::from_min_size(origin + Vec2::new(x, 0.0), Vec2::splat(BTN_SIZE))
}

/// Equilateral triangle around `center`; `pointing_down` flips it
fn draw_triangle(painter: &Painter, center: Pos2, pointing_down: bool, color: egui::Color32) {
    let r = MARKER_RADIUS;
    let half = r * 0.866;
    let points = if pointing_down {
        vec![
            Pos2::new(center.x - half, center.y - r * 0.5),
            Pos2::new(center.x + half, center.y - r * 0.5),
            Pos2::new(center.x, center.y + r),
        ]
    } else {
        vec![
            Pos2::new(center.x, center.y - r),
            Pos2::new(center.x + half, center.y + r * 0.5),
            Pos2::new(center.x - half, center.y + r * 0.5),
        ]
    };
    painter.add(Shape::convex_polygon(points, color, Stroke::NONE));
}
