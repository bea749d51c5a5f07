mod details;
mod documents;
mod fields;
mod indicator;
mod intro;
mod review;
mod second;

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Gauge, Paragraph, Wrap},
};

use super::steps::ApplicationStep;
use super::{ApplicationApp, ConfirmAction, MessageKind};
use crate::ui::{center_rect, Layout};
use crate::vim::VimMode;

/// Main draw function for the application wizard
pub fn draw(frame: &mut Frame, app: &ApplicationApp) {
    let layout = Layout::new(frame.area());
    frame.render_widget(Clear, layout.full);

    draw_header(frame, layout.header, app);
    indicator::draw_step_indicator(frame, layout.indicator, app);
    draw_progress(frame, layout.progress, app);
    draw_content(frame, layout.content, app);
    draw_message(frame, layout.message, app);
    draw_status_bar(frame, layout.status, app);

    if let Some(action) = app.confirm_action {
        draw_confirm_dialog(frame, action, app);
    }

    if app.show_help {
        draw_help(frame, app);
    }
}

fn draw_header(frame: &mut Frame, area: Rect, app: &ApplicationApp) {
    let title = format!(" {} (v{}) ", app.config.general.title, env!("CARGO_PKG_VERSION"));
    frame.render_widget(
        Paragraph::new(title).style(app.theme.primary_style().add_modifier(Modifier::BOLD)),
        area,
    );

    frame.render_widget(
        Paragraph::new(format!("{} ", app.config.general.subtitle))
            .style(app.theme.secondary_style())
            .alignment(Alignment::Right),
        area,
    );
}

fn draw_progress(frame: &mut Frame, area: Rect, app: &ApplicationApp) {
    let percent = app.wizard().progress_percent();
    let gauge = Gauge::default()
        .gauge_style(app.theme.secondary_style())
        .percent(u16::from(percent))
        .label(format!("{percent}%"));
    frame.render_widget(gauge, area);
}

fn draw_content(frame: &mut Frame, area: Rect, app: &ApplicationApp) {
    let step = app.current_step();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(app.theme.border_style())
        .title(format!(" {} ", step.short_name()));

    let inner = block.inner(area);
    frame.render_widget(Clear, area);
    frame.render_widget(block, area);

    match step {
        ApplicationStep::Introduction => intro::draw_introduction(frame, inner, app),
        ApplicationStep::PrimaryApplicant => details::draw_primary_form(frame, inner, app),
        ApplicationStep::SecondApplicant => second::draw_second_applicant(frame, inner, app),
        ApplicationStep::Documents => documents::draw_documents(frame, inner, app),
        ApplicationStep::ReviewAndSubmit => review::draw_review(frame, inner, app),
    }
}

fn draw_message(frame: &mut Frame, area: Rect, app: &ApplicationApp) {
    let msg = match &app.message {
        Some(m) => m,
        None => return,
    };

    let (title, border_style, text_style) = match msg.kind {
        MessageKind::Error => (" Error ", app.theme.error_style(), app.theme.error_style()),
        MessageKind::Success => (" Done ", app.theme.success_style(), app.theme.success_style()),
        MessageKind::Info => (" Info ", app.theme.secondary_style(), app.theme.style()),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title)
        .title_style(border_style.add_modifier(Modifier::BOLD));

    let paragraph = Paragraph::new(Line::from(Span::styled(msg.text.as_str(), text_style)))
        .block(block)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}

fn draw_status_bar(frame: &mut Frame, area: Rect, app: &ApplicationApp) {
    frame.render_widget(Clear, area);

    let mode_name = app.vim_mode.display_name();
    let mode_span = Span::styled(format!(" {mode_name} "), app.theme.mode_style(mode_name));

    let after_mode = if app.vim_mode == VimMode::Command {
        Span::styled(format!(":{}", app.command_buffer.content()), app.theme.style())
    } else {
        Span::styled(app.status_bar.left_hint.clone(), app.theme.muted_style())
    };

    frame.render_widget(
        Paragraph::new(Line::from(vec![mode_span, Span::raw(" "), after_mode])),
        Rect::new(area.x, area.y, area.width * 2 / 3, 1),
    );

    let wizard = app.wizard();
    let position = format!("{}/{}", wizard.current_index() + 1, wizard.step_count());
    let right_text = if app.status_bar.right_hint.is_empty() {
        position
    } else {
        format!("{position}  {}", app.status_bar.right_hint)
    };

    frame.render_widget(
        Paragraph::new(right_text)
            .style(app.theme.muted_style())
            .alignment(Alignment::Right),
        Rect::new(area.x + area.width / 3, area.y, area.width * 2 / 3, 1),
    );
}

fn draw_confirm_dialog(frame: &mut Frame, action: ConfirmAction, app: &ApplicationApp) {
    let (title, message) = match action {
        ConfirmAction::Cancel => ("Cancel Application", "Discard this application?"),
    };

    let width = 44.min(frame.area().width.saturating_sub(4));
    let area = center_rect(frame.area(), width, 7);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(app.theme.primary_style())
        .title(format!(" {title} "));

    let inner = block.inner(area);
    frame.render_widget(Clear, area);
    frame.render_widget(block, area);

    frame.render_widget(
        Paragraph::new(message)
            .style(app.theme.style().add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center),
        Rect::new(inner.x, inner.y + 1, inner.width, 1),
    );

    let hints = Line::from(vec![
        Span::styled("[", app.theme.style()),
        Span::styled("Y", app.theme.primary_style().add_modifier(Modifier::BOLD)),
        Span::styled("]es / [", app.theme.style()),
        Span::styled("N", app.theme.primary_style().add_modifier(Modifier::BOLD)),
        Span::styled("]o", app.theme.style()),
    ]);

    frame.render_widget(
        Paragraph::new(hints).alignment(Alignment::Center),
        Rect::new(inner.x, inner.y + 3, inner.width, 1),
    );
}

fn help_lines(allow_jump: bool) -> [&'static str; 18] {
    let jump_line = if allow_jump {
        "  1-9            Jump to step"
    } else {
        "  1-9            Jump to step (disabled)"
    };

    [
        "",
        "Steps:",
        "",
        "  n / l          Next step (checks this step)",
        "  Enter          Next step on the introduction",
        "  p / Backspace  Previous step",
        jump_line,
        "",
        "Fields:",
        "",
        "  j/k  Tab       Move between fields",
        "  i / Enter      Edit text field",
        "  Space / Enter  Toggle checkbox / choice",
        "  Esc            Back to normal mode",
        "",
        "Commands: :next :back :goto N :submit :q",
        "",
        "Press q or Esc to close",
    ]
}

fn draw_help(frame: &mut Frame, app: &ApplicationApp) {
    let width = 60.min(frame.area().width.saturating_sub(4));
    let height = 22.min(frame.area().height.saturating_sub(4));
    let area = center_rect(frame.area(), width, height);

    let help_text = help_lines(app.config.flow.allow_step_jump);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(app.theme.border_style())
        .title(" Help ");

    let inner = block.inner(area);
    frame.render_widget(Clear, area);
    frame.render_widget(block, area);

    for (i, line) in help_text.iter().enumerate() {
        if i as u16 >= inner.height {
            break;
        }
        frame.render_widget(
            Paragraph::new(*line).style(app.theme.style()),
            Rect::new(inner.x, inner.y + i as u16, inner.width, 1),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_only_offers_enter_to_advance_on_the_introduction() {
        let lines = help_lines(false);
        let enter_lines: Vec<&str> = lines.iter().copied().filter(|l| l.contains("Enter")).collect();
        assert!(enter_lines.contains(&"  Enter          Next step on the introduction"));
        assert!(!lines.iter().any(|l| l.contains("n / Enter")));
        assert!(lines.iter().any(|l| l.ends_with("Jump to step (disabled)")));
        assert!(help_lines(true).iter().any(|l| l.ends_with("Jump to step")));
    }
}
