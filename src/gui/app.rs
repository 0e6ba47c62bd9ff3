// src/gui/app.rs
use std::{error::Error, path::Path};

use eframe::egui;

use crate::{
    config::{consts::DATA_FILE, state::AppState},
    filter::FilterState,
    reconcile::{BubbleTarget, Reconciler},
    records::RecordStore,
    scales::Scales,
    store,
};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "League Bubbles",
        options,
        Box::new(|_cc| Ok(Box::new(App::new()))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    /// Loaded dataset + session scales. None if the load failed; the
    /// chart stays unrendered in that case, no partial draw.
    pub store: Option<RecordStore>,
    pub scales: Option<Scales>,

    /// Rendered element set, keyed by (team, season).
    pub reconciler: Reconciler,

    /// Indices into the store for the current visible subset.
    pub visible: Vec<usize>,

    pub status: String,
}

impl App {
    pub fn new() -> Self {
        let mut app = Self {
            state: AppState::default(),
            store: None,
            scales: None,
            reconciler: Reconciler::new(),
            visible: Vec::new(),
            status: s!("Loading data"),
        };

        match store::load_records(Path::new(DATA_FILE)) {
            Ok(store) => {
                logf!(
                    "Init: records={}, seasons={}, teams={}",
                    store.len(),
                    store.seasons().len(),
                    store.teams().len()
                );
                // Fit once against the full store; never refit per filter.
                app.scales = Some(Scales::fit(&store));
                app.store = Some(store);
                app.rebuild_view();
            }
            Err(e) => {
                loge!("Load failed: {}", e);
                app.status = format!("Failed to load data: {}", e);
            }
        }

        app
    }

    /// Filter change → recompute visible subset → diff into the
    /// reconciler. The whole pipeline is synchronous; only the
    /// transitions play out over the following frames.
    pub fn rebuild_view(&mut self) {
        let (Some(store), Some(scales)) = (self.store.as_ref(), self.scales.as_ref()) else {
            return;
        };

        let filter: FilterState = self.state.gui.to_filter();
        self.visible = filter.apply(store);

        let targets: Vec<BubbleTarget> = self
            .visible
            .iter()
            .map(|&i| {
                let r = &store.records()[i];
                BubbleTarget {
                    key: r.key(),
                    cx: scales.cx(r),
                    cy: scales.cy(r),
                    r: scales.radius(r),
                    fill: scales.fill(r),
                }
            })
            .collect();

        self.reconciler.apply(&targets);

        self.status = format!("{} of {} records visible", self.visible.len(), store.len());
        logf!("Filter: {} -> {} visible", store.len(), self.visible.len());
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Advance in-flight transitions by the frame delta; keep
        // repainting until everything has settled.
        if !self.reconciler.settled() {
            let dt = ctx.input(|i| i.stable_dt).min(0.1);
            self.reconciler.tick(dt);
            ctx.request_repaint();
        }

        egui::SidePanel::left("filters")
            .resizable(false)
            .min_width(200.0)
            .show(ctx, |ui| {
                crate::gui::components::filter_panel::draw(ui, self);
            });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.label(&self.status);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::both()
                .id_salt("chart_scroll")
                .show(ui, |ui| {
                    crate::gui::components::chart::draw(ui, self);

                    ui.separator();

                    crate::gui::components::stats_table::draw(ui, self);
                });
        });
    }
}
