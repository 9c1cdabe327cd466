//! URL bar and external size controls.

use egui::{Key, Response, TextEdit, Ui};

use crate::frame::FloatingFrame;
use crate::layout::{section_label, vertical_separator};
use crate::{sizing, theme};

/// Check whether a single-line field was just submitted with Enter.
fn submitted(ui: &Ui, response: &Response) -> bool {
    response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter))
}

/// URL field with a Go button. Enter in the field also loads.
pub fn url_bar(ui: &mut Ui, frame: &mut FloatingFrame) {
    ui.horizontal(|ui| {
        let field = ui.add(
            TextEdit::singleline(frame.url_input_mut())
                .hint_text("Enter a URL")
                .desired_width(sizing::URL_FIELD_WIDTH),
        );
        let go = ui.button("Go").clicked();
        // Errors are kept on the frame and shown by `size_controls`.
        if go || submitted(ui, &field) {
            frame.submit_url();
        }
    });
}

/// Width/height fields with a Set Size button, plus any validation error.
pub fn size_controls(ui: &mut Ui, frame: &mut FloatingFrame) {
    ui.horizontal(|ui| {
        section_label(ui, "W");
        let width = ui.add(
            TextEdit::singleline(&mut frame.size_fields_mut().width)
                .desired_width(sizing::SIZE_FIELD_WIDTH),
        );
        section_label(ui, "H");
        let height = ui.add(
            TextEdit::singleline(&mut frame.size_fields_mut().height)
                .desired_width(sizing::SIZE_FIELD_WIDTH),
        );
        vertical_separator(ui);
        let set = ui.button("Set Size").clicked();
        if set || submitted(ui, &width) || submitted(ui, &height) {
            frame.submit_size();
        }
    });

    if let Some(error) = frame.error() {
        ui.colored_label(theme::ERROR, error);
    }
}
