use ratatui::{prelude::*, widgets::Paragraph};

use super::super::{ApplicationApp, FieldKind};
use crate::vim::{InputBuffer, VimMode};

const LABEL_WIDTH: u16 = 16;

pub(super) fn is_focused(app: &ApplicationApp, field_idx: usize) -> bool {
    app.field_focus == field_idx && app.focused_kind().is_some()
}

fn draw_label(frame: &mut Frame, area: Rect, y: u16, label: &str, focused: bool, app: &ApplicationApp) {
    let style = if focused {
        app.theme.primary_style().add_modifier(Modifier::BOLD)
    } else {
        app.theme.style()
    };
    frame.render_widget(
        Paragraph::new(label.to_string()).style(style),
        Rect::new(area.x + 2, y, LABEL_WIDTH, 1),
    );
}

/// Text field with a vim-style cursor; `|` in insert mode, a block otherwise
pub(super) fn draw_text_field(
    frame: &mut Frame,
    area: Rect,
    y: u16,
    label: &str,
    buffer: &InputBuffer,
    field_idx: usize,
    app: &ApplicationApp,
) {
    let focused = is_focused(app, field_idx);
    draw_label(frame, area, y, label, focused, app);

    let field_x = area.x + 2 + LABEL_WIDTH;
    let field_width = area.width.saturating_sub(LABEL_WIDTH + 4);
    let field_area = Rect::new(field_x, y, field_width, 1);
    let content = buffer.content();

    if focused && app.vim_mode == VimMode::Insert {
        let before: String = content.chars().take(buffer.cursor()).collect();
        let after: String = content.chars().skip(buffer.cursor()).collect();
        let line = Line::from(vec![
            Span::styled(before, app.theme.style()),
            Span::styled("|", app.theme.primary_style().add_modifier(Modifier::BOLD)),
            Span::styled(after, app.theme.style()),
        ]);
        frame.render_widget(Paragraph::new(line), field_area);
    } else if focused {
        let cursor = buffer.cursor();
        let chars: Vec<char> = content.chars().collect();
        let mut spans: Vec<Span> = chars
            .iter()
            .enumerate()
            .map(|(i, ch)| {
                let style = if i == cursor {
                    app.theme.style().add_modifier(Modifier::REVERSED)
                } else {
                    app.theme.style()
                };
                Span::styled(ch.to_string(), style)
            })
            .collect();
        if cursor >= chars.len() {
            spans.push(Span::styled(" ", app.theme.style().add_modifier(Modifier::REVERSED)));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), field_area);
    } else {
        frame.render_widget(
            Paragraph::new(buffer.display_or("(empty)").to_string()).style(if content.is_empty() {
                app.theme.muted_style()
            } else {
                app.theme.style()
            }),
            field_area,
        );
    }
}

/// Choice or checkbox line; `kind` decides the marker
pub(super) fn draw_toggle_field(
    frame: &mut Frame,
    area: Rect,
    y: u16,
    label: &str,
    value: &str,
    kind: FieldKind,
    field_idx: usize,
    app: &ApplicationApp,
) {
    let focused = is_focused(app, field_idx);
    let text = match kind {
        FieldKind::Checkbox => format!("{value} {label}"),
        _ => format!("{label:<width$}< {value} >", width = LABEL_WIDTH as usize),
    };
    let style = if focused {
        app.theme.primary_style().add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else {
        app.theme.style()
    };
    frame.render_widget(
        Paragraph::new(text).style(style),
        Rect::new(area.x + 2, y, area.width.saturating_sub(4), 1),
    );
}

pub(super) fn draw_title(frame: &mut Frame, area: Rect, y: u16, title: &str, app: &ApplicationApp) {
    frame.render_widget(
        Paragraph::new(title.to_string())
            .style(app.theme.primary_style().add_modifier(Modifier::BOLD)),
        Rect::new(area.x + 2, y, area.width.saturating_sub(4), 1),
    );
}

pub(super) fn draw_text(frame: &mut Frame, area: Rect, y: u16, text: &str, style: Style) {
    frame.render_widget(
        Paragraph::new(text.to_string()).style(style),
        Rect::new(area.x + 2, y, area.width.saturating_sub(4), 1),
    );
}
