use std::collections::HashMap;

use eframe::egui;

use crate::config::{FormConfig, Labels};
use crate::param_editor::ParamEditor;
use crate::param_model::{Model, ParamId};
use crate::states::busy::BusyFlag;

/// Host screen: owns the committed model and the busy flag, and delegates
/// editing to a [`ParamEditor`].
pub struct ParamEditorApp {
    editor: ParamEditor,
    labels: Labels,
    names: HashMap<ParamId, String>,
    model: Model,
    has_saved: bool,
    busy: BusyFlag,
}

pub fn create_app(config: FormConfig) -> ParamEditorApp {
    let names = config
        .params
        .iter()
        .map(|p| (p.id, p.name.clone()))
        .collect();
    ParamEditorApp {
        editor: ParamEditor::new(config.params, config.model.clone()),
        labels: config.labels,
        names,
        model: config.model,
        has_saved: false,
        busy: BusyFlag::default(),
    }
}

impl ParamEditorApp {
    /// Commit the editor's current draft. Returns false when a save is
    /// already in progress and the request was dropped.
    pub fn save(&mut self) -> bool {
        let Some(_guard) = self.busy.acquire() else {
            tracing::warn!("save requested while busy, ignoring");
            return false;
        };

        let model = self.editor.model();
        match serde_json::to_string(&model) {
            Ok(json) => tracing::info!(model = %json, "model saved"),
            Err(err) => tracing::warn!(error = %err, "model saved (not serializable)"),
        }

        self.editor.reseed(model.clone());
        self.model = model;
        self.has_saved = true;
        true
    }

    fn display_name(&self, param_id: ParamId) -> &str {
        self.names.get(&param_id).map(String::as_str).unwrap_or("")
    }

    fn saved_panel(&self, ui: &mut egui::Ui) {
        ui.heading(
            egui::RichText::new(&self.labels.saved_heading)
                .size(16.0)
                .strong(),
        );
        ui.add_space(8.0);

        if self.editor.is_dirty() {
            ui.label(
                egui::RichText::new(&self.labels.unsaved_changes)
                    .color(egui::Color32::from_rgb(240, 190, 90)),
            );
            ui.add_space(4.0);
        }

        if !self.has_saved {
            ui.label(egui::RichText::new(&self.labels.nothing_saved).weak());
            return;
        }
        for pv in &self.model.values {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(format!("{}:", self.display_name(pv.param_id))).strong());
                ui.label(&pv.value);
            });
        }
    }
}

impl eframe::App for ParamEditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::right("saved_panel")
            .resizable(true)
            .default_width(320.0)
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.saved_panel(ui);
            });

        let busy = self.busy.get();
        let response = egui::CentralPanel::default()
            .show(ctx, |ui| {
                egui::Frame::none()
                    .fill(egui::Color32::from_rgb(32, 32, 36))
                    .rounding(12.0)
                    .inner_margin(egui::Margin::symmetric(24.0, 20.0))
                    .show(ui, |ui| self.editor.show(ui, &self.labels, busy))
                    .inner
            })
            .inner;

        if !response.changed.is_empty() {
            tracing::debug!(changed = ?response.changed, "draft updated");
        }
        if response.save_requested {
            self.save();
        }
    }
}
