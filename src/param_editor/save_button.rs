use eframe::egui;

const BUTTON_SIZE: egui::Vec2 = egui::Vec2::new(160.0, 36.0);

/// Footer save button. While `busy` it is disabled and a spinner replaces
/// the label, so clicks are swallowed. Returns true on a click that should
/// start a save.
pub fn save_button(ui: &mut egui::Ui, label: &str, busy: bool) -> bool {
    let text = if busy { "" } else { label };
    let btn = egui::Button::new(
        egui::RichText::new(text)
            .size(15.0)
            .strong()
            .color(egui::Color32::WHITE),
    )
    .min_size(BUTTON_SIZE)
    .fill(egui::Color32::from_rgb(100, 150, 255))
    .rounding(8.0)
    .stroke(egui::Stroke::NONE);

    let response = ui.add_enabled(!busy, btn);
    if busy {
        ui.put(response.rect, egui::Spinner::new().color(egui::Color32::WHITE));
    }
    response.clicked() && !busy
}
