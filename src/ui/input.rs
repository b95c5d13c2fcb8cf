use crate::ui::app::{App, Mode};
use crate::ui::form::FormIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    match app.mode() {
        Mode::Browse => handle_browse_key(app, key),
        Mode::Adding => handle_adding_key(app, key),
        Mode::Editing => handle_editing_key(app, key),
    }
}

fn handle_browse_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Up | KeyCode::Char('k') => app.move_selection(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(1),
        KeyCode::Char('a') => app.open_add_form(),
        KeyCode::Char('e') | KeyCode::Enter => app.begin_edit_selected(),
        KeyCode::Char('d') | KeyCode::Delete => app.delete_selected(),
        _ => {}
    }
}

fn handle_adding_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.cancel_add_form(),
        KeyCode::Enter => {
            if let Err(err) = app.submit_add_form() {
                tracing::debug!(error = %err, "Add dialog kept open");
            }
        }
        _ => handle_field_key(app, key),
    }
}

fn handle_editing_key(app: &mut App, key: KeyEvent) {
    if is_ctrl_char(key, 'e') {
        app.begin_edit_selected();
        return;
    }
    match key.code {
        KeyCode::Enter => app.commit_edit(),
        KeyCode::Up => app.move_selection(-1),
        KeyCode::Down => app.move_selection(1),
        _ => handle_field_key(app, key),
    }
}

fn handle_field_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Tab | KeyCode::BackTab => app.dispatch_form(FormIntent::NextField),
        KeyCode::Backspace => app.dispatch_form(FormIntent::Backspace),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.dispatch_form(FormIntent::Input(ch))
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
