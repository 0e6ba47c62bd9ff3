// src/gui/components/stats_table.rs
//
// Table of the currently visible records, below the chart. Reads the same
// index subset the reconciler was fed, so chart and table never disagree.

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::gui::app::App;

const HEADERS: [&str; 6] = ["Team", "Season", "GF", "GA", "Points", "Position"];

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let Some(store) = app.store.as_ref() else { return };

    ui.heading(format!("Visible records ({})", app.visible.len()));

    TableBuilder::new(ui)
        .striped(true)
        .id_salt("visible_records")
        .column(Column::initial(180.0).at_least(80.0).clip(true))
        .columns(Column::initial(60.0).at_least(40.0), HEADERS.len() - 1)
        .header(24.0, |mut header| {
            for (i, h) in HEADERS.iter().enumerate() {
                header.col(|ui| {
                    ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                    let label = RichText::new(*h).strong();
                    if i == 0 {
                        ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
                            ui.label(label);
                        });
                    } else {
                        ui.centered_and_justified(|ui| { ui.label(label); });
                    }
                });
            }
        })
        .body(|body| {
            body.rows(20.0, app.visible.len(), |mut row| {
                let Some(&ix) = app.visible.get(row.index()) else { return };
                let r = &store.records()[ix];
                let cells = [
                    r.team.clone(),
                    r.season.to_string(),
                    r.gf.to_string(),
                    r.ga.to_string(),
                    r.points.to_string(),
                    r.position.to_string(),
                ];
                for (i, cell) in cells.iter().enumerate() {
                    row.col(|ui| {
                        ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                        if i == 0 {
                            ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
                                ui.label(cell.as_str());
                            });
                        } else {
                            ui.centered_and_justified(|ui| { ui.label(cell.as_str()); });
                        }
                    });
                }
            });
        });
}
