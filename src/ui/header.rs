use crate::list::ListSnapshot;
use crate::ui::theme::{ACCENT, EDITING, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header<'a> {
    title: &'a str,
}

impl<'a> Header<'a> {
    pub fn new(title: &'a str) -> Self {
        Self { title }
    }

    pub fn widget(&self, snapshot: &ListSnapshot) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let count = match snapshot.len() {
            1 => "1 item".to_string(),
            n => format!("{} items", n),
        };
        let mut spans = vec![
            Span::styled("  ", text_style),
            Span::styled(
                self.title.to_string(),
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(count, text_style),
        ];
        if let Some(item) = snapshot.items().iter().find(|item| item.is_editing()) {
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled(
                format!("editing #{}", item.id),
                Style::default().fg(EDITING),
            ));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
