//! The parameter form: one control per definition, backed by a draft.
//!
//! The host owns a [`ParamEditor`] value directly. Each frame it calls
//! [`ParamEditor::show`] and reads the returned [`EditorResponse`]; when a
//! save is requested it pulls the current snapshot with
//! [`ParamEditor::model`].

pub mod controls;
pub mod save_button;

use eframe::egui;

use crate::config::Labels;
use crate::param_model::{Model, ParamDefinition, ParamId};
use crate::states::draft::DraftState;

/// What happened in the form during one frame.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EditorResponse {
    /// Parameters whose draft value changed this frame, in form order.
    pub changed: Vec<ParamId>,
    /// The save button was clicked while not busy.
    pub save_requested: bool,
}

pub struct ParamEditor {
    params: Vec<ParamDefinition>,
    base: Model,
    draft: DraftState,
    /// Snapshot the draft started from; any edit replaces `draft`.
    seeded: DraftState,
}

impl ParamEditor {
    pub fn new(params: Vec<ParamDefinition>, model: Model) -> Self {
        let draft = DraftState::seed(&model);
        Self {
            params,
            base: model,
            seeded: draft.clone(),
            draft,
        }
    }

    /// True once any edit has been made since the last seed.
    pub fn is_dirty(&self) -> bool {
        !self.draft.ptr_eq(&self.seeded)
    }

    /// Record a raw edit for one parameter.
    #[cfg(test)]
    pub fn set_value(&mut self, param_id: ParamId, value: impl Into<String>) {
        self.draft = self.draft.update(param_id, value);
    }

    /// Current draft as a complete model (the base model's associated
    /// entities carried through).
    pub fn model(&self) -> Model {
        self.draft.materialize(&self.base)
    }

    /// Replace the base model and start a fresh draft from it. Called by the
    /// host after a save so later edits build on the committed model.
    pub fn reseed(&mut self, model: Model) {
        self.draft = DraftState::seed(&model);
        self.seeded = self.draft.clone();
        self.base = model;
    }

    pub fn show(&mut self, ui: &mut egui::Ui, labels: &Labels, busy: bool) -> EditorResponse {
        let mut response = EditorResponse::default();
        let Self { params, draft, .. } = self;

        ui.vertical_centered(|ui| {
            ui.heading(
                egui::RichText::new(&labels.title)
                    .size(20.0)
                    .strong()
                    .color(egui::Color32::from_white_alpha(240)),
            );
        });
        ui.add_space(16.0);

        let label_color = egui::Color32::from_gray(170);
        egui::Grid::new("param_editor_grid")
            .num_columns(2)
            .spacing([40.0, 16.0])
            .show(ui, |ui| {
                for def in params.iter() {
                    ui.label(egui::RichText::new(&def.name).color(label_color));

                    let mut value = draft.get(def.id).unwrap_or_default().to_string();
                    if controls::param_control(ui, def, &mut value, &labels.select_placeholder) {
                        tracing::trace!(param_id = def.id, value = %value, "param edited");
                        *draft = draft.update(def.id, value);
                        response.changed.push(def.id);
                    }
                    ui.end_row();
                }
            });

        ui.add_space(24.0);
        ui.vertical_centered(|ui| {
            response.save_requested = save_button::save_button(ui, &labels.save, busy);
        });

        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::param_model::{AssociatedEntity, ParamValue};

    fn dress_editor() -> ParamEditor {
        ParamEditor::new(
            vec![
                ParamDefinition::text(1, "Purpose"),
                ParamDefinition::text(2, "Length"),
                ParamDefinition::number(3, "Sleeve"),
            ],
            Model {
                values: vec![ParamValue::new(1, "Everyday"), ParamValue::new(2, "Maxi")],
                associated: vec![AssociatedEntity {
                    id: 3,
                    name: "Navy".into(),
                }],
            },
        )
    }

    fn run_frame(
        ctx: &egui::Context,
        editor: &mut ParamEditor,
        busy: bool,
        events: Vec<egui::Event>,
    ) -> EditorResponse {
        let labels = Labels::default();
        let input = egui::RawInput {
            screen_rect: Some(egui::Rect::from_min_size(
                egui::Pos2::ZERO,
                egui::vec2(800.0, 600.0),
            )),
            events,
            ..Default::default()
        };
        let mut out = EditorResponse::default();
        ctx.run(input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                out = editor.show(ui, &labels, busy);
            });
        });
        out
    }

    #[test]
    fn editing_length_yields_updated_model() {
        let mut editor = dress_editor();
        editor.set_value(2, "Mini");
        let model = editor.model();
        assert_eq!(
            model.values,
            vec![ParamValue::new(1, "Everyday"), ParamValue::new(2, "Mini")]
        );
        assert_eq!(model.associated[0].name, "Navy");
    }

    #[test]
    fn select_without_value_starts_blank_then_takes_choice() {
        let mut editor = ParamEditor::new(
            vec![ParamDefinition::select(4, "Cut", ["A", "B"])],
            Model::default(),
        );
        let blank = editor.model();
        assert_eq!(blank.value_of(4), None);
        assert_eq!(
            controls::selected_text(blank.value_of(4).unwrap_or_default(), "Pick"),
            "Pick"
        );

        editor.set_value(4, "B");
        assert_eq!(editor.model().values, vec![ParamValue::new(4, "B")]);
    }

    #[test]
    fn idle_frame_changes_nothing() {
        let ctx = egui::Context::default();
        let mut editor = dress_editor();
        let response = run_frame(&ctx, &mut editor, false, Vec::new());
        assert_eq!(response, EditorResponse::default());
        assert!(!editor.is_dirty());
    }

    #[test]
    fn typing_into_a_field_updates_the_draft() {
        let ctx = egui::Context::default();
        let mut editor = dress_editor();
        run_frame(&ctx, &mut editor, false, Vec::new());

        ctx.memory_mut(|m| m.request_focus(controls::input_id(3)));
        let response = run_frame(
            &ctx,
            &mut editor,
            false,
            vec![egui::Event::Text("12abc".to_string())],
        );

        assert_eq!(response.changed, vec![3]);
        assert!(!response.save_requested);
        assert!(editor.is_dirty());
        assert_eq!(
            editor.model().values,
            vec![
                ParamValue::new(1, "Everyday"),
                ParamValue::new(2, "Maxi"),
                ParamValue::new(3, "12abc"),
            ]
        );
    }

    #[test]
    fn busy_frame_renders_all_kinds_without_save() {
        let ctx = egui::Context::default();
        let mut editor = ParamEditor::new(
            vec![
                ParamDefinition::text(1, "Purpose"),
                ParamDefinition::number(2, "Width"),
                ParamDefinition::select(3, "Cut", ["A", "B"]),
            ],
            Model::default(),
        );
        let response = run_frame(&ctx, &mut editor, true, Vec::new());
        assert!(!response.save_requested);
        assert!(response.changed.is_empty());
    }

    #[test]
    fn reseed_replaces_base_and_draft() {
        let mut editor = dress_editor();
        editor.set_value(1, "Office");
        assert!(editor.is_dirty());
        let committed = Model {
            values: vec![ParamValue::new(2, "Midi")],
            associated: Vec::new(),
        };
        editor.reseed(committed.clone());
        assert_eq!(editor.model(), committed);
        assert!(!editor.is_dirty());
    }
}
