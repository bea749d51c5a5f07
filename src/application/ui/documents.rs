use ratatui::prelude::*;

use super::super::ApplicationApp;
use super::fields::{draw_text, draw_text_field, draw_title};

pub fn draw_documents(frame: &mut Frame, area: Rect, app: &ApplicationApp) {
    if area.height < 8 || area.width < 30 {
        return;
    }

    let rules = &app.config.documents;
    let mut y = area.y + 1;
    draw_title(frame, area, y, "Document Upload", app);
    y += 2;

    let hint = format!(
        "ID documents for both applicants. Accepted: {}. Max size: {} MB.",
        rules.accepted_extensions.join(", "),
        rules.max_size_mb
    );
    draw_text(frame, area, y, &hint, app.theme.muted_style());
    y += 2;

    let form = &app.forms.documents;
    draw_text_field(frame, area, y, "Applicant 1 ID", &form.primary_id, 0, app);
    y += 2;
    draw_text_field(frame, area, y, "Applicant 2 ID", &form.second_id, 1, app);
}
