//! Theme constants for the factor grid GUI

use egui::Color32;

// Window
pub const WIN_WIDTH: f32 = 980.0;
pub const WIN_HEIGHT: f32 = 800.0;
pub const WIN_MIN_WIDTH: f32 = 820.0;
pub const WIN_MIN_HEIGHT: f32 = 680.0;

// Background
pub const APP_BG: Color32 = Color32::from_rgb(40, 60, 100);

// Cell colors by owner
pub const CELL_UNCLAIMED: Color32 = Color32::from_rgb(30, 30, 100);
pub const CELL_HUMAN: Color32 = Color32::from_rgb(0, 255, 0);
pub const CELL_OPPONENT: Color32 = Color32::from_rgb(200, 50, 50);
pub const CELL_OUTLINE: Color32 = Color32::BLACK;
pub const CELL_TEXT: Color32 = Color32::WHITE;

// Factor bar
pub const FACTOR_BUTTON: Color32 = Color32::from_rgb(180, 180, 0);
pub const FACTOR_TEXT: Color32 = Color32::BLACK;
pub const PREV_MARKER: Color32 = Color32::from_rgb(255, 165, 0);
pub const CURR_MARKER: Color32 = Color32::from_rgb(0, 255, 255);

// Start screen
pub const PLAY_BUTTON: Color32 = Color32::from_rgb(255, 140, 0);
pub const PLAY_ICON: Color32 = Color32::WHITE;

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(255, 255, 255);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(255, 215, 0);
pub const NOTICE: Color32 = Color32::from_rgb(255, 70, 70);

// Panel colors
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Sizes
pub const CELL_SIZE: f32 = 80.0;
pub const BOARD_MARGIN: f32 = 20.0;
pub const CELL_OUTLINE_WIDTH: f32 = 1.0;
pub const CELL_FONT_SIZE: f32 = 16.0;
pub const BTN_SIZE: f32 = 50.0;
pub const BTN_SPACING: f32 = 10.0;
pub const MARKER_RADIUS: f32 = 15.0;
pub const PLAY_BUTTON_RADIUS: f32 = 60.0;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 5.0;
pub const WIN_STROKE_WIDTH: f32 = 4.0;
