use crate::list::{Item, ItemId};
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::form::{render_add_dialog, FormField, FormFields, FormState};
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::theme::{ACTIVE_HIGHLIGHT, EDITING, GLOBAL_BORDER, HEADER_TEXT, MUTED};
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

const QUANTITY_SEPARATOR: &str = "  x ";

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new(app.title()).widget(app.snapshot()), header);
    draw_body(frame, body, app);
    frame.render_widget(Footer::new(app.mode()).widget(footer), footer);

    if let FormState::Adding { fields } = app.form() {
        render_add_dialog(frame, body, fields, app.add_policy());
    }
}

fn draw_body(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::LEFT | Borders::RIGHT)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    let inner = block.inner(area);

    let items = app.snapshot().items();
    if items.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "  Your list is empty. Press 'a' to add an item.",
            Style::default().fg(MUTED),
        )))
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let visible = inner.height as usize;
    let offset = app.selected().saturating_sub(visible.saturating_sub(1));
    let name_width = items
        .iter()
        .map(|item| item.name.chars().count())
        .max()
        .unwrap_or(0);
    let draft = match app.form() {
        FormState::Editing { id, fields } => Some((*id, fields)),
        _ => None,
    };

    let lines: Vec<Line> = items
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible)
        .map(|(idx, item)| {
            let fields = draft.and_then(|(id, fields)| (id == item.id).then_some(fields));
            item_line(idx, item, fields, name_width, idx == app.selected())
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);

    if let Some((row, column)) = edit_cursor(items, draft, offset) {
        if row < inner.height && column < inner.width {
            frame.set_cursor_position(Position::new(inner.x + column, inner.y + row));
        }
    }
}

fn item_line(
    idx: usize,
    item: &Item,
    draft: Option<&FormFields>,
    name_width: usize,
    selected: bool,
) -> Line<'static> {
    let text_style = Style::default().fg(HEADER_TEXT);
    let mut spans = vec![Span::styled(row_prefix(idx), Style::default().fg(MUTED))];

    let line = match (item.is_editing(), draft) {
        (true, Some(fields)) => {
            let edit_style = Style::default().fg(EDITING).add_modifier(Modifier::UNDERLINED);
            spans.push(Span::styled(fields.name.clone(), edit_style));
            spans.push(Span::styled(QUANTITY_SEPARATOR, text_style));
            spans.push(Span::styled(fields.quantity.clone(), edit_style));
            spans.push(Span::styled("  [editing]", Style::default().fg(EDITING)));
            Line::from(spans)
        }
        _ => {
            spans.push(Span::styled(
                format!("{:<width$}", item.name, width = name_width),
                text_style,
            ));
            spans.push(Span::styled(
                format!("{}{}", QUANTITY_SEPARATOR, item.quantity),
                text_style,
            ));
            Line::from(spans)
        }
    };

    if selected {
        line.style(Style::default().bg(ACTIVE_HIGHLIGHT))
    } else {
        line
    }
}

/// Row and column of the cursor inside the inline editor, relative to the body.
fn edit_cursor(
    items: &[Item],
    draft: Option<(ItemId, &FormFields)>,
    offset: usize,
) -> Option<(u16, u16)> {
    let (id, fields) = draft?;
    let idx = items.iter().position(|item| item.id == id)?;
    let row = idx.checked_sub(offset)?;
    let name_end = row_prefix(idx).chars().count() + fields.name.chars().count();
    let column = match fields.focused {
        FormField::Name => name_end,
        FormField::Quantity => {
            name_end + QUANTITY_SEPARATOR.chars().count() + fields.quantity.chars().count()
        }
    };
    Some((u16::try_from(row).ok()?, u16::try_from(column).ok()?))
}

/// One-based row number, right-aligned to three columns.
fn row_prefix(idx: usize) -> String {
    format!("{:>3}. ", idx + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_tracks_focused_field() {
        let items = vec![Item::new(ItemId(1), "Milk", 2), Item::new(ItemId(2), "Eggs", 6)];
        let mut fields = FormFields::new("Egg", "6");
        assert_eq!(edit_cursor(&items, Some((ItemId(2), &fields)), 0), Some((1, 8)));

        fields.focused = FormField::Quantity;
        assert_eq!(edit_cursor(&items, Some((ItemId(2), &fields)), 0), Some((1, 13)));
    }

    #[test]
    fn cursor_hidden_when_row_scrolled_off() {
        let items = vec![Item::new(ItemId(1), "Milk", 2), Item::new(ItemId(2), "Eggs", 6)];
        let fields = FormFields::new("Milk", "2");
        assert_eq!(edit_cursor(&items, Some((ItemId(1), &fields)), 1), None);
        assert_eq!(edit_cursor(&items, None, 0), None);
    }

    #[test]
    fn cursor_accounts_for_wide_row_numbers() {
        let items: Vec<Item> = (1..=1000).map(|id| Item::new(ItemId(id), "Tea", 1)).collect();
        let fields = FormFields::new("Tea", "1");
        // "1000. " is one column wider than "999. "
        assert_eq!(edit_cursor(&items, Some((ItemId(999), &fields)), 998), Some((0, 8)));
        assert_eq!(edit_cursor(&items, Some((ItemId(1000), &fields)), 998), Some((1, 9)));
    }

    #[test]
    fn cursor_hidden_when_column_overflows() {
        let items = vec![Item::new(ItemId(1), "Milk", 2)];
        let fields = FormFields::new("x".repeat(70_000), "2");
        assert_eq!(edit_cursor(&items, Some((ItemId(1), &fields)), 0), None);
    }
}
