//! Popup for adding an item.

use crate::config::AddQuantityPolicy;
use crate::ui::form::state::{FormField, FormFields};
use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, HEADER_TEXT, MUTED, POPUP_BORDER};
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

const DIALOG_WIDTH: u16 = 44;
const DIALOG_HEIGHT: u16 = 8;
const LABEL_WIDTH: usize = 10;

pub fn render_add_dialog(
    frame: &mut Frame,
    area: Rect,
    fields: &FormFields,
    policy: AddQuantityPolicy,
) {
    let area = centered_rect_by_size(area, DIALOG_WIDTH, DIALOG_HEIGHT);
    frame.render_widget(Clear, area);

    let hint = if !fields.can_submit() {
        "Enter a name and a quantity"
    } else if policy == AddQuantityPolicy::UseDefault {
        "Enter: Add  Esc: Cancel  (bad quantity → 1)"
    } else {
        "Enter: Add  Esc: Cancel"
    };

    let lines = vec![
        Line::from(""),
        field_line("Name", &fields.name, fields.focused == FormField::Name),
        field_line("Quantity", &fields.quantity, fields.focused == FormField::Quantity),
        Line::from(""),
        Line::from(Span::styled(format!(" {}", hint), Style::default().fg(MUTED))),
    ];

    let block = Block::default()
        .title(Span::styled(" Add item ", Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    let inner = block.inner(area);
    frame.render_widget(Paragraph::new(lines).block(block), area);

    let (row, text) = match fields.focused {
        FormField::Name => (1, &fields.name),
        FormField::Quantity => (2, &fields.quantity),
    };
    let column = 1 + LABEL_WIDTH + text.chars().count();
    if inner.height > row && (column as u16) < inner.width {
        frame.set_cursor_position(Position::new(inner.x + column as u16, inner.y + row));
    }
}

fn field_line(label: &str, value: &str, focused: bool) -> Line<'static> {
    let value_style = if focused {
        Style::default()
            .fg(HEADER_TEXT)
            .bg(ACTIVE_HIGHLIGHT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(HEADER_TEXT)
    };
    Line::from(vec![
        Span::styled(
            format!(" {:<width$}", format!("{}:", label), width = LABEL_WIDTH),
            Style::default().fg(MUTED),
        ),
        Span::styled(value.to_string(), value_style),
    ])
}
