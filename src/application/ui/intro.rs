use ratatui::prelude::*;

use super::super::ApplicationApp;
use super::fields::{draw_text, draw_title};

pub fn draw_introduction(frame: &mut Frame, area: Rect, app: &ApplicationApp) {
    if area.height < 8 {
        return;
    }

    let mut y = area.y + 1;
    draw_title(frame, area, y, "Open a Joint Account Together", app);
    y += 2;

    let lines = [
        "A joint account lets two people manage funds together: shared",
        "expenses, savings goals, or household finances.",
        "",
        "Before you start, please ensure:",
        "  * Both applicants are 18 years or older",
        "  * Valid identification documents are at hand",
        "  * You have details for the second applicant, or their email",
        "",
        "The process typically takes about 10-15 minutes.",
    ];

    for line in lines {
        if y >= area.y + area.height.saturating_sub(2) {
            break;
        }
        draw_text(frame, area, y, line, app.theme.style());
        y += 1;
    }

    draw_text(
        frame,
        area,
        area.y + area.height - 2,
        "Press Enter to begin",
        app.theme.muted_style(),
    );
}
