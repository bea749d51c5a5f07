use ratatui::prelude::*;

use super::super::steps::ApplicationStep;
use super::super::{ApplicationApp, FieldKind, SecondApplicantMode};
use super::fields::{draw_text, draw_title, draw_toggle_field};

fn checkbox(checked: bool) -> &'static str {
    if checked { "[x]" } else { "[ ]" }
}

pub fn draw_review(frame: &mut Frame, area: Rect, app: &ApplicationApp) {
    if area.height < 12 || area.width < 30 {
        return;
    }

    let forms = &app.forms;
    let mut y = area.y + 1;
    draw_title(frame, area, y, "Review & Submit Application", app);
    y += 2;

    let primary = &forms.primary;
    let employment = primary.employment.map(|s| s.label()).unwrap_or("(not set)");
    let summary = [
        format!(
            "Applicant 1: {} <{}>",
            primary.full_name.display_or("(not set)"),
            primary.email.display_or("(not set)")
        ),
        format!(
            "  Phone: {}  DOB: {}  {}",
            primary.phone.display_or("-"),
            primary.date_of_birth.display_or("-"),
            employment
        ),
        match forms.second.mode {
            SecondApplicantMode::ProvideDetails => format!(
                "Applicant 2: {} <{}>",
                forms.second.full_name.display_or("(not set)"),
                forms.second.email.display_or("(not set)")
            ),
            SecondApplicantMode::SendInvite => format!(
                "Applicant 2: invitation to {}",
                forms.second.email.display_or("(not set)")
            ),
        },
    ];
    for line in &summary {
        draw_text(frame, area, y, line, app.theme.style());
        y += 1;
    }
    y += 1;

    let review = &forms.review;
    draw_toggle_field(
        frame,
        area,
        y,
        "I confirm that all information provided is accurate and complete",
        checkbox(review.accuracy_confirmed),
        FieldKind::Checkbox,
        0,
        app,
    );
    y += 1;
    draw_toggle_field(
        frame,
        area,
        y,
        "I agree to the Terms and Conditions and Privacy Policy",
        checkbox(review.terms_accepted),
        FieldKind::Checkbox,
        1,
        app,
    );

    let ready = forms.validate_step(ApplicationStep::ReviewAndSubmit).is_valid;
    let button_style = if ready {
        app.theme.primary_style().add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else {
        app.theme.muted_style().add_modifier(Modifier::REVERSED)
    };
    draw_text(
        frame,
        area,
        area.y + area.height - 2,
        " [n] Submit Application ",
        button_style,
    );
}
