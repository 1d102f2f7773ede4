//! Main application for the factor grid GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, Sense, SidePanel, TopBottomPanel, Vec2};

use super::board_view::{owner_color, BoardView};
use super::factor_bar::FactorBar;
use super::theme::*;
use crate::{FactorSlot, GameResult, GameSession, Intent, MoveError, Owner, Phase, Player, Step, WinType};

/// Main factor grid application
pub struct FactorGridApp {
    session: GameSession,
    board_view: BoardView,
    factor_bar: FactorBar,
    show_debug: bool,
}

impl Default for FactorGridApp {
    fn default() -> Self {
        Self {
            session: GameSession::new(),
            board_view: BoardView::default(),
            factor_bar: FactorBar,
            show_debug: false,
        }
    }
}

impl FactorGridApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    /// Forward one intent to the session
    fn dispatch(&mut self, intent: Intent) {
        match self.session.apply(intent) {
            Ok(_) => {}
            // The session keeps the notice for display
            Err(err @ MoveError::InvalidMove { .. }) => log::debug!("{}", err),
            Err(err) => log::trace!("ignored {:?}: {}", intent, err),
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (N)").clicked() {
                        self.dispatch(Intent::Start);
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Opponent Panel (O)");
                });
            });
        });
    }

    /// Render the side panel with game info
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_products_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_opponent_card(ui);
                }

                if let Some(result) = self.session.game_result().copied() {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui, &result);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("FACTOR GRID").size(22.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("four in a row or column wins").size(11.0).color(TEXT_MUTED));
        });
    }

    /// Render turn indicator card
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        let turn = self.session.turn();
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("TURN").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let (label, owner) = match self.session.phase() {
                Phase::NotStarted => ("Press play", Owner::Unclaimed),
                Phase::HumanTurn => ("Your turn", Owner::Human),
                Phase::OpponentTurn => ("Opponent", Owner::Opponent),
                Phase::Finished(winner) => ("Game Over", winner.into()),
            };
            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::splat(20.0), Sense::hover());
                ui.painter().rect_filled(rect, CornerRadius::same(3), owner_color(owner));
                ui.add_space(8.0);
                ui.label(RichText::new(label).size(18.0).strong().color(TEXT_PRIMARY));
            });

            ui.add_space(6.0);
            ui.label(
                RichText::new(format!("{} x {}", turn.prev_factor, turn.curr_factor))
                    .size(14.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    /// Render previous and current products
    fn render_products_card(&self, ui: &mut egui::Ui) {
        let fmt = |p: Option<u32>| p.map_or_else(|| "-".to_string(), |n| n.to_string());
        let (prev, curr) = self.session.products();
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("PRODUCTS").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);
            ui.label(RichText::new(format!("Previous: {}", fmt(prev))).size(12.0).color(TEXT_SECONDARY));
            ui.label(RichText::new(format!("Current: {}", fmt(curr))).size(12.0).color(TEXT_PRIMARY));
            ui.add_space(6.0);
            ui.label(
                RichText::new(format!("Move #{}", self.session.history().len()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    /// Render the opponent's latest search
    fn render_opponent_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("OPPONENT").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            match self.session.last_opponent_result() {
                Some(result) => {
                    ui.label(
                        RichText::new(format!("Anchor {} | {} probes", result.anchor, result.probes))
                            .size(11.0)
                            .color(TEXT_SECONDARY),
                    );
                    let text = match result.best_move {
                        Some(mv) => format!("-> {} x {} = {}", result.anchor, mv.factor, mv.product),
                        None => "no legal move".to_string(),
                    };
                    ui.label(RichText::new(text).size(12.0).strong().color(TEXT_PRIMARY));
                }
                None => {
                    ui.label(RichText::new("Waiting for first reply").size(10.0).color(TEXT_MUTED));
                }
            }
        });
    }

    fn render_game_over_card(&mut self, ui: &mut egui::Ui, result: &GameResult) {
        let winner = match result.winner {
            Player::Human => "YOU",
            Player::Opponent => "OPPONENT",
        };
        let win_type = match result.win_type {
            WinType::FourInLine => "four in a line",
            WinType::OpponentStuck => "opponent out of moves",
        };

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new(format!("{} WIN", winner)).size(18.0).strong().color(TEXT_PRIMARY));
                    ui.label(RichText::new(format!("by {}", win_type)).size(11.0).color(TEXT_SECONDARY));
                    ui.add_space(12.0);
                    if ui.button(RichText::new("New Game").size(14.0).strong()).clicked() {
                        self.dispatch(Intent::Start);
                    }
                });
            });
    }

    /// Play button shown before the first game
    fn render_start_screen(&mut self, ui: &mut egui::Ui) {
        let size = Vec2::splat(2.0 * PLAY_BUTTON_RADIUS);
        ui.vertical_centered(|ui| {
            ui.add_space((ui.available_height() - size.y).max(0.0) / 2.0);
            let (response, painter) = ui.allocate_painter(size, Sense::click());
            let center = response.rect.center();
            painter.circle_filled(center, PLAY_BUTTON_RADIUS, PLAY_BUTTON);
            painter.add(egui::Shape::convex_polygon(
                vec![
                    center + Vec2::new(-14.0, -20.0),
                    center + Vec2::new(-14.0, 20.0),
                    center + Vec2::new(21.0, 0.0),
                ],
                PLAY_ICON,
                egui::Stroke::NONE,
            ));
            if response.clicked() {
                self.dispatch(Intent::Start);
            }
        });
    }

    /// Render status line, board, factor bar and notice
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(Frame::new().fill(APP_BG).inner_margin(16.0))
            .show(ctx, |ui| {
                if self.session.phase() == Phase::NotStarted {
                    self.render_start_screen(ui);
                    return;
                }

                ui.label(RichText::new(self.session.status_text()).size(24.0).color(TEXT_PRIMARY));
                ui.add_space(8.0);

                let winning_line = self.session.game_result().and_then(|r| r.winning_line);
                let last_move = self.session.last_move().map(|m| m.pos);
                self.board_view.show(ui, self.session.board(), last_move, winning_line);

                ui.add_space(8.0);
                let turn = self.session.turn();
                self.factor_bar.show(ui, turn.prev_factor, turn.curr_factor);

                ui.add_space(8.0);
                ui.label(RichText::new(self.session.notice()).size(18.0).color(NOTICE));
            });
    }

    /// Translate key presses into intents
    fn handle_input(&mut self, ctx: &Context) {
        let mut intents = Vec::new();
        ctx.input(|i| {
            let bindings = [
                (egui::Key::ArrowLeft, Intent::AdjustFactor(FactorSlot::Curr, Step::Dec)),
                (egui::Key::ArrowRight, Intent::AdjustFactor(FactorSlot::Curr, Step::Inc)),
                (egui::Key::A, Intent::AdjustFactor(FactorSlot::Prev, Step::Dec)),
                (egui::Key::D, Intent::AdjustFactor(FactorSlot::Prev, Step::Inc)),
                (egui::Key::Enter, Intent::Commit),
                (egui::Key::N, Intent::Start),
            ];
            for (key, intent) in bindings {
                if i.key_pressed(key) {
                    intents.push(intent);
                }
            }

            // O - Toggle opponent panel
            if i.key_pressed(egui::Key::O) {
                self.show_debug = !self.show_debug;
            }
        });

        for intent in intents {
            self.dispatch(intent);
        }
    }
}

impl eframe::App for FactorGridApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);
    }
}
