use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use super::super::ApplicationApp;
use crate::wizard::StepStatus;

/// Horizontal step indicator: `[x] Introduction -> [2] Your Details -> 3 ...`
pub fn draw_step_indicator(frame: &mut Frame, area: Rect, app: &ApplicationApp) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(app.theme.border_style());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let steps = app.wizard().steps();
    let mut spans = Vec::with_capacity(steps.len() * 2);
    for (idx, step) in steps.iter().enumerate() {
        let style = app.theme.step_style(step.status);
        let label = format!("{} {}", step.status.marker(idx + 1), step.name);
        let label_style = if step.status == StepStatus::Current {
            style.add_modifier(Modifier::UNDERLINED)
        } else {
            style
        };
        spans.push(Span::styled(label, label_style));

        if idx + 1 < steps.len() {
            spans.push(Span::styled(" -> ", app.theme.muted_style()));
        }
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        inner,
    );
}
