// src/gui/components/toolbar.rs
//
// Status line + refresh + search. The search box mirrors the original
// page's "Search demos:" control and filters live.

use eframe::egui::{self, widgets::Spinner};
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        let refresh = ui.add_enabled(!app.running, egui::Button::new("Refresh"));
        if refresh.clicked() {
            app.start_load();
        }

        if app.running {
            ui.add(Spinner::new());
        }

        ui.label(app.status_text());
        if app.load_failed {
            ui.label("Please try again later");
        }
    });

    ui.horizontal(|ui| {
        ui.label("Search demos:");
        if ui.text_edit_singleline(&mut app.search_text).changed() {
            app.rebuild_view();
        }
        if !app.search_text.is_empty() {
            ui.label(format!("{} of {} shown", app.view_ix.len(), app.rows.len()));
        }
    });
}
