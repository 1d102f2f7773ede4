//! Factor grid GUI
//!
//! A graphical interface for playing the factor grid against the built-in opponent.

use factor_grid::ui::{theme, FactorGridApp};

fn main() -> Result<(), eframe::Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([theme::WIN_WIDTH, theme::WIN_HEIGHT])
            .with_min_inner_size([theme::WIN_MIN_WIDTH, theme::WIN_MIN_HEIGHT])
            .with_title("Factor Grid Game"),
        ..Default::default()
    };

    eframe::run_native(
        "Factor Grid",
        options,
        Box::new(|cc| Ok(Box::new(FactorGridApp::new(cc)))),
    )
}
