use ratatui::prelude::*;

use super::super::{ApplicationApp, FieldKind, PrimaryApplicantForm};
use super::fields::{draw_text_field, draw_title, draw_toggle_field};

pub fn draw_primary_form(frame: &mut Frame, area: Rect, app: &ApplicationApp) {
    if area.height < 14 || area.width < 30 {
        return;
    }

    let form = &app.forms.primary;
    let mut y = area.y + 1;
    draw_title(frame, area, y, "Your Details (Applicant 1)", app);
    y += 2;

    for (idx, label) in PrimaryApplicantForm::LABELS.iter().enumerate() {
        match form.field(idx) {
            Some(buffer) => draw_text_field(frame, area, y, label, buffer, idx, app),
            None => {
                let value = form
                    .employment
                    .map(|status| status.label())
                    .unwrap_or("Select employment status");
                draw_toggle_field(frame, area, y, label, value, FieldKind::Choice, idx, app);
            }
        }
        y += 2;
    }
}
