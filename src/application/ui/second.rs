use ratatui::prelude::*;

use super::super::{ApplicationApp, FieldKind, SecondApplicantMode};
use super::fields::{draw_text, draw_text_field, draw_title, draw_toggle_field};

pub fn draw_second_applicant(frame: &mut Frame, area: Rect, app: &ApplicationApp) {
    if area.height < 10 || area.width < 30 {
        return;
    }

    let form = &app.forms.second;
    let mut y = area.y + 1;
    draw_title(frame, area, y, "Second Applicant Details", app);
    y += 2;

    draw_toggle_field(frame, area, y, "Applicant 2", form.mode.label(), FieldKind::Choice, 0, app);
    y += 2;

    draw_text_field(frame, area, y, "Full Name", &form.full_name, 1, app);
    y += 2;
    draw_text_field(frame, area, y, "Email", &form.email, 2, app);
    y += 2;

    if form.mode == SecondApplicantMode::SendInvite {
        draw_text(
            frame,
            area,
            y,
            "You'll be notified once Applicant 2 completes their part.",
            app.theme.muted_style(),
        );
    }
}
