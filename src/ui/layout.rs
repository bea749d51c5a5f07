use ratatui::layout::{Constraint, Direction, Layout as RatatuiLayout, Rect};

/// Screen areas of the application wizard, top to bottom
pub struct Layout {
    pub full: Rect,
    pub header: Rect,
    pub indicator: Rect,
    pub progress: Rect,
    pub content: Rect,
    pub message: Rect,
    pub status: Rect,
}

impl Layout {
    pub fn new(area: Rect) -> Self {
        // Message panel space is always reserved so the form never jumps
        let chunks = RatatuiLayout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Header
                Constraint::Length(3), // Step indicator
                Constraint::Length(1), // Progress bar
                Constraint::Min(10),   // Step content
                Constraint::Length(3), // Message panel
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self {
            full: area,
            header: chunks[0],
            indicator: chunks[1],
            progress: chunks[2],
            content: chunks[3],
            message: chunks[4],
            status: chunks[5],
        }
    }
}

pub fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let x = if area.width > width {
        area.x + (area.width - width) / 2
    } else {
        area.x
    };

    let y = if area.height > height {
        area.y + (area.height - height) / 2
    } else {
        area.y
    };

    Rect::new(x, y, width.min(area.width), height.min(area.height))
}
