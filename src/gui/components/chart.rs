// src/gui/components/chart.rs
//
// Draws the bubble chart: fixed-size canvas, axes fit to the full dataset,
// then the reconciler's current element set. Purely a view; the only state
// it touches is the hover memo (so a hover is logged once, not per frame).

use eframe::egui::{self, Align2, Color32, FontId, Pos2, Sense, Stroke, Vec2};
use eframe::egui::epaint::TextShape;

use crate::config::consts::*;
use crate::gui::app::App;
use crate::records::Record;

const AXIS_TEXT: Color32 = Color32::from_rgb(0x2c, 0x3e, 0x50);
const AXIS_LINE: Color32 = Color32::from_rgb(0x88, 0x88, 0x88);

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let (response, painter) =
        ui.allocate_painter(Vec2::new(CHART_W, CHART_H), Sense::hover());
    let origin = response.rect.min;
    let at = |x: f32, y: f32| Pos2::new(origin.x + x, origin.y + y);

    painter.rect_filled(response.rect, 0.0, Color32::WHITE);

    let (Some(store), Some(scales)) = (app.store.as_ref(), app.scales.as_ref()) else {
        // Load failed: no partial chart, the status line carries the error.
        return;
    };

    /* ---------------- Axes ---------------- */

    let x0 = MARGIN_LEFT;
    let x1 = CHART_W - MARGIN_RIGHT;
    let y0 = CHART_H - MARGIN_BOTTOM; // baseline
    let y1 = MARGIN_TOP;

    let stroke = Stroke::new(1.0, AXIS_LINE);
    painter.line_segment([at(x0, y0), at(x1, y0)], stroke);
    painter.line_segment([at(x0, y0), at(x0, y1)], stroke);

    let small = FontId::proportional(11.0);
    for v in ticks(scales.x.domain_max(), 10) {
        let x = scales.x.map(v);
        painter.line_segment([at(x, y0), at(x, y0 + 4.0)], stroke);
        painter.text(
            at(x, y0 + 6.0),
            Align2::CENTER_TOP,
            format!("{}", v as u32),
            small.clone(),
            AXIS_TEXT,
        );
    }
    for v in ticks(scales.y.domain_max(), 8) {
        let y = scales.y.map(v);
        painter.line_segment([at(x0 - 4.0, y), at(x0, y)], stroke);
        painter.text(
            at(x0 - 6.0, y),
            Align2::RIGHT_CENTER,
            format!("{}", v as u32),
            small.clone(),
            AXIS_TEXT,
        );
    }

    let title = FontId::proportional(14.0);
    painter.text(
        at((x0 + x1) / 2.0, y0 + 35.0),
        Align2::CENTER_TOP,
        X_AXIS_TITLE,
        title.clone(),
        AXIS_TEXT,
    );
    // Vertical axis title, rotated a quarter turn.
    let galley = painter.layout_no_wrap(s!(Y_AXIS_TITLE), title, AXIS_TEXT);
    let pos = at(x0 - 45.0, (y0 + y1) / 2.0 + galley.size().x / 2.0);
    painter.add(TextShape::new(pos, galley, AXIS_TEXT).with_angle(-std::f32::consts::FRAC_PI_2));

    /* ---------------- Bubbles ---------------- */

    for (_, b) in app.reconciler.iter() {
        if b.r <= 0.0 {
            continue;
        }
        let fill =
            Color32::from_rgba_unmultiplied(b.fill.r, b.fill.g, b.fill.b, BUBBLE_OPACITY);
        painter.circle_filled(at(b.cx, b.cy), b.r, fill);
    }

    /* ---------------- Hover tooltip ---------------- */

    let hovered = response.hover_pos().and_then(|pos| {
        let local = pos - origin.to_vec2();
        // Smallest hit wins so little bubbles stay reachable under big ones.
        app.reconciler
            .iter()
            .filter(|(_, b)| {
                !b.is_exiting()
                    && (local - Pos2::new(b.cx, b.cy)).length() <= b.r
            })
            .min_by(|(_, a), (_, b)| a.r.total_cmp(&b.r))
            .map(|(key, _)| (key.clone(), pos))
    });

    let hovered_key = hovered.as_ref().map(|(key, _)| key.clone());
    if hovered_key != app.state.gui.hovered {
        if let Some(key) = &hovered_key {
            logd!("Hovered: {}", key.team);
        }
        app.state.gui.hovered = hovered_key;
    }

    if let Some((key, pos)) = hovered {
        let record = store
            .records()
            .iter()
            .find(|r| r.team == key.team && r.season == key.season);
        if let Some(r) = record {
            egui::Area::new(egui::Id::new("bubble_tooltip"))
                .fixed_pos(pos + Vec2::new(15.0, -28.0))
                .order(egui::Order::Tooltip)
                .show(ui.ctx(), |ui| {
                    egui::Frame::popup(ui.style()).show(ui, |ui| tooltip_body(ui, r));
                });
        }
    }
}

fn tooltip_body(ui: &mut egui::Ui, r: &Record) {
    ui.strong(r.team.as_str());
    ui.label(format!("Season: {}", r.season));
    ui.label(format!("Goals: {}", r.gf));
    ui.label(format!("Conceded: {}", r.ga));
    ui.label(format!("Points: {}", r.points));
    ui.label(format!("Position: {}", r.position));
}

/// Round-number ticks over [0, max]: step is 1/2/5 times a power of ten,
/// at most `target` intervals.
fn ticks(max: f32, target: usize) -> Vec<f32> {
    if max <= 0.0 {
        return vec![0.0];
    }
    let raw = max / target as f32;
    let mag = 10f32.powf(raw.log10().floor());
    let step = [1.0, 2.0, 5.0, 10.0]
        .iter()
        .map(|m| m * mag)
        .find(|&s| raw <= s)
        .unwrap_or(10.0 * mag);

    let mut out = Vec::new();
    let mut v = 0.0;
    while v <= max + step * 0.001 {
        out.push(v);
        v += step;
    }
    out
}
