use eframe::egui;

use crate::param_model::{ParamDefinition, ParamId, ParamKind};

const INPUT_WIDTH: f32 = 260.0;

/// Stable id of the text input for `param_id`, independent of layout.
pub fn input_id(param_id: ParamId) -> egui::Id {
    egui::Id::new(("param_input", param_id))
}

/// Draw the control for one parameter. `value` is the current draft value
/// (empty when unset) and is overwritten with whatever the user typed or
/// picked. Returns true when the value changed this frame.
pub fn param_control(
    ui: &mut egui::Ui,
    def: &ParamDefinition,
    value: &mut String,
    placeholder: &str,
) -> bool {
    match &def.kind {
        ParamKind::Text => ui
            .add(
                egui::TextEdit::singleline(value)
                    .id(input_id(def.id))
                    .desired_width(INPUT_WIDTH),
            )
            .changed(),
        // Kept as raw text: no parsing, no clamping.
        ParamKind::Number => ui
            .add(
                egui::TextEdit::singleline(value)
                    .id(input_id(def.id))
                    .desired_width(INPUT_WIDTH)
                    .hint_text("0"),
            )
            .changed(),
        ParamKind::Select { options } => select_control(ui, def, options, value, placeholder),
    }
}

fn select_control(
    ui: &mut egui::Ui,
    def: &ParamDefinition,
    options: &[String],
    value: &mut String,
    placeholder: &str,
) -> bool {
    let mut changed = false;
    egui::ComboBox::from_id_source(("param_select", def.id))
        .selected_text(selected_text(value, placeholder))
        .width(INPUT_WIDTH)
        .show_ui(ui, |ui| {
            for (option, text) in select_entries(options, placeholder) {
                if ui.selectable_value(&mut *value, option, text).changed() {
                    changed = true;
                }
            }
        });
    changed
}

/// Entries offered by a select control: the blank placeholder first, then
/// one per option, as `(stored value, shown text)` pairs.
pub fn select_entries(options: &[String], placeholder: &str) -> Vec<(String, String)> {
    std::iter::once((String::new(), placeholder.to_string()))
        .chain(options.iter().map(|o| (o.clone(), o.clone())))
        .collect()
}

pub fn selected_text(value: &str, placeholder: &str) -> String {
    if value.is_empty() {
        placeholder.to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_entries_start_with_blank_placeholder() {
        let entries = select_entries(&["A".to_string(), "B".to_string()], "Pick");
        assert_eq!(
            entries,
            vec![
                (String::new(), "Pick".to_string()),
                ("A".to_string(), "A".to_string()),
                ("B".to_string(), "B".to_string()),
            ]
        );
    }

    #[test]
    fn blank_selection_shows_placeholder() {
        assert_eq!(selected_text("", "Pick"), "Pick");
        assert_eq!(selected_text("B", "Pick"), "B");
    }
}
