#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use csdb_toplist::{config::state::GuiState, gui};
use eframe::egui::ViewportBuilder;

fn main() {
    let win = GuiState::default();
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size([win.window_w as f32, win.window_h as f32]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
