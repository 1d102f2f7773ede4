//! GUI module for the factor grid
//!
//! This module provides a native Rust GUI using egui/eframe. It only reads the
//! [`GameSession`](crate::GameSession) and forwards key presses as intents.

mod app;
mod board_view;
mod factor_bar;
pub mod theme;

pub use app::FactorGridApp;
