// src/gui/components/data_table.rs
//
// Draws the chart table. Purely a view over App.rows/App.view_ix;
// header clicks change the sort held on App.

use eframe::egui::{self, Align, Layout, RichText, Sense, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::gui::app::{App, SortColumn};

// (label, sort mode, initial width)
const COLUMNS: [(&str, Option<SortColumn>, f32); 9] = [
    ("Place", Some(SortColumn::Place), 50.0),
    ("Screenshot", None, 90.0),
    ("Name", Some(SortColumn::Name), 200.0),
    ("Release date", Some(SortColumn::ReleaseDate), 100.0),
    ("Event", Some(SortColumn::Event), 160.0),
    ("Achievement", Some(SortColumn::Achievement), 160.0),
    ("Rating", Some(SortColumn::Rating), 60.0),
    ("Votes", Some(SortColumn::Votes), 50.0),
    ("Link", Some(SortColumn::Id), 120.0),
];

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let avail_h = ui.available_height();
    let mut clicked: Option<SortColumn> = None;

    egui::ScrollArea::horizontal()
        .id_salt("chart_table_hscroll")
        .min_scrolled_height(avail_h)
        .max_height(avail_h)
        .show(ui, |ui| {
            let mut table = TableBuilder::new(ui)
                .striped(true)
                .min_scrolled_height(0.0);
            for (_, _, w) in COLUMNS {
                table = table.column(Column::initial(w).resizable(true).clip(true).at_least(20.0));
            }

            table
                .header(24.0, |mut header| {
                    for (label, sort, _) in COLUMNS {
                        header.col(|ui| {
                            ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                            let text = header_label(app, label, sort);
                            match sort {
                                Some(col) => {
                                    let resp = ui.add(
                                        egui::Label::new(RichText::new(text).strong())
                                            .selectable(false)
                                            .sense(Sense::click()),
                                    );
                                    if resp.clicked() {
                                        clicked = Some(col);
                                    }
                                }
                                None => {
                                    ui.add(egui::Label::new(RichText::new(text).strong())
                                        .selectable(false));
                                }
                            }
                        });
                    }
                })
                .body(|body| {
                    body.rows(20.0, app.view_ix.len(), |mut row| {
                        let Some(&ix) = app.view_ix.get(row.index()) else { return };
                        let Some(data) = app.rows.get(ix) else { return };

                        row.col(|ui| { ui.label(data.place.to_string()); });
                        row.col(|ui| {
                            if let Some(url) = &data.screenshot {
                                ui.hyperlink_to("screenshot", url);
                            }
                        });
                        row.col(|ui| {
                            ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                            ui.hyperlink_to(&data.name, &data.csdb_url);
                        });
                        row.col(|ui| { ui.label(&data.release_date); });
                        row.col(|ui| { ui.label(data.event.as_deref().unwrap_or("")); });
                        row.col(|ui| { ui.label(data.achievement.as_deref().unwrap_or("")); });
                        row.col(|ui| {
                            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                                ui.label(format!("{:.1}/10", data.rating));
                            });
                        });
                        row.col(|ui| { ui.label(data.votes.to_string()); });
                        row.col(|ui| { ui.hyperlink_to("View on CSDb", &data.csdb_url); });
                    });
                });
        });

    if let Some(col) = clicked {
        app.set_sort(col);
    }
}

fn header_label(app: &App, label: &str, sort: Option<SortColumn>) -> String {
    match sort {
        Some(col) if app.sort_by == col => {
            if app.sort_asc { format!("{label} ▲") } else { format!("{label} ▼") }
        }
        _ => s!(label),
    }
}
