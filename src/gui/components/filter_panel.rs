// src/gui/components/filter_panel.rs
//
// Renders the left filter panel and applies changes directly to `app`.
// Any changed widget triggers one synchronous rebuild of the visible
// subset; the chart then animates toward the new state.

use eframe::egui;

use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Filters");

    let Some(store) = app.store.as_ref() else {
        ui.separator();
        ui.label("No data loaded.");
        return;
    };

    let seasons = store.seasons();
    let teams = store.teams();
    let mut changed = false;

    ui.separator();

    // Season dropdown: "All Seasons" + each distinct season, ascending.
    let season_label = match app.state.gui.season {
        None => s!("All Seasons"),
        Some(y) => y.to_string(),
    };
    egui::ComboBox::from_label("Season")
        .selected_text(season_label)
        .show_ui(ui, |ui| {
            changed |= ui
                .selectable_value(&mut app.state.gui.season, None, "All Seasons")
                .changed();
            for y in &seasons {
                changed |= ui
                    .selectable_value(&mut app.state.gui.season, Some(*y), y.to_string())
                    .changed();
            }
        });

    // Team dropdown: "All" + each distinct team, alphabetical.
    let team_label = app.state.gui.team.clone().unwrap_or_else(|| s!("All"));
    egui::ComboBox::from_label("Team")
        .selected_text(team_label)
        .show_ui(ui, |ui| {
            changed |= ui
                .selectable_value(&mut app.state.gui.team, None, "All")
                .changed();
            for t in &teams {
                changed |= ui
                    .selectable_value(&mut app.state.gui.team, Some(t.clone()), t)
                    .changed();
            }
        });

    ui.separator();

    // Range inputs. Free text; empty or malformed means unbounded.
    let bound_row = |ui: &mut egui::Ui,
                     label: &str,
                     min: &mut String,
                     max: &mut String,
                     changed: &mut bool| {
        ui.label(label);
        ui.horizontal(|ui| {
            *changed |= ui
                .add(egui::TextEdit::singleline(min).hint_text("min").desired_width(60.0))
                .changed();
            *changed |= ui
                .add(egui::TextEdit::singleline(max).hint_text("max").desired_width(60.0))
                .changed();
        });
    };

    let gui = &mut app.state.gui;
    bound_row(ui, "Goals scored", &mut gui.min_goals, &mut gui.max_goals, &mut changed);
    bound_row(ui, "Position", &mut gui.min_position, &mut gui.max_position, &mut changed);
    bound_row(ui, "Points", &mut gui.min_points, &mut gui.max_points, &mut changed);

    ui.separator();

    if ui.button("Reset filters").clicked() {
        app.state.gui.reset_filters();
        changed = true;
    }

    if changed {
        app.rebuild_view();
        logf!(
            "UI: Filter changed — season={:?}, team={:?}",
            app.state.gui.season,
            app.state.gui.team
        );
    }
}
