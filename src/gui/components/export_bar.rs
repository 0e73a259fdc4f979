// src/gui/components/export_bar.rs

use eframe::egui;
use crate::{
    config::options::ExportFormat,
    file,
    gui::app::App,
};

#[derive(Clone, Copy, PartialEq, Eq)]
enum UiFormat { Csv, Tsv }

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    {
        let export = &mut app.state.options.export;

        // --- Format + Include headers ---
        let prev_fmt = match export.format {
            ExportFormat::Csv => UiFormat::Csv,
            ExportFormat::Tsv => UiFormat::Tsv,
        };
        let mut fmt = prev_fmt;

        ui.horizontal(|ui| {
            ui.label("Format:");
            ui.selectable_value(&mut fmt, UiFormat::Csv, "CSV");
            ui.selectable_value(&mut fmt, UiFormat::Tsv, "TSV");

            if fmt != prev_fmt {
                export.format = match fmt {
                    UiFormat::Csv => ExportFormat::Csv,
                    UiFormat::Tsv => ExportFormat::Tsv,
                };
                logf!("UI: Export format → {:?}", export.format);
                if !app.out_path_dirty {
                    app.out_path_text = export.out_path().to_string_lossy().into_owned();
                }
            }

            ui.checkbox(&mut export.include_headers, "Include headers");
        });
    }

    // --- Output field + actions ---
    ui.horizontal(|ui| {
        ui.label("Output:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.out_path_text)
                .font(egui::TextStyle::Monospace))
            .changed()
        {
            app.out_path_dirty = true;
            logd!("UI: out_path_text changed (dirty=true) → {}", app.out_path_text);
        }

        // Copy
        if ui.button("Copy").clicked() {
            if app.view_ix.is_empty() {
                app.status("Nothing to copy");
                logd!("Copy: Clicked, but there's nothing to copy");
            } else {
                // Clipboard path: small clone of just the visible rows.
                let rows: Vec<_> = app.view_ix.iter()
                    .filter_map(|&ix| app.rows.get(ix).cloned())
                    .collect();
                logf!("Copy: rows={}", rows.len());
                let txt = file::export_string(&app.state.options.export, &rows);
                ui.ctx().copy_text(txt);
                app.status("Copied to clipboard");
            }
        }

        // Export
        if ui.button("Export").clicked() {
            if app.view_ix.is_empty() {
                app.status("Nothing to export");
                logd!("Export: Clicked, but there's nothing to export");
            } else {
                if app.out_path_dirty {
                    let text = app.out_path_text.clone();
                    app.state.options.export.set_path(&text);
                    app.out_path_dirty = false;
                }
                let rows: Vec<_> = app.view_ix.iter()
                    .filter_map(|&ix| app.rows.get(ix).cloned())
                    .collect();
                match file::write_export(&app.state.options.export, &rows) {
                    Ok(p) => {
                        logf!("Export: OK → {}", p.display());
                        app.status(format!("Exported to {}", p.display()));
                        app.out_path_text =
                            app.state.options.export.out_path().to_string_lossy().into_owned();
                    }
                    Err(e) => {
                        loge!("Export: failed: {e}");
                        app.status(format!("Export failed: {e}"));
                    }
                }
            }
        }
    });
}
