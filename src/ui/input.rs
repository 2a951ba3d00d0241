use crate::ui::app::{App, Focus};
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    // The overlay is modal: only close keys get through.
    if app.overlay_open() {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('x')) {
            app.dismiss();
        }
        return;
    }

    match app.focus() {
        Focus::SearchBar => handle_search_key(app, key),
        Focus::Grid => handle_grid_key(app, key),
    }
}

fn handle_search_key(app: &mut App, key: KeyEvent) {
    if is_ctrl_char(key, 'u') {
        app.search_bar_mut().clear();
        return;
    }

    match key.code {
        KeyCode::Enter => app.submit_search(),
        KeyCode::Tab | KeyCode::Down => app.set_focus(Focus::Grid),
        KeyCode::Backspace => app.search_bar_mut().backspace(),
        KeyCode::Delete => app.search_bar_mut().delete(),
        KeyCode::Left => app.search_bar_mut().move_left(),
        KeyCode::Right => app.search_bar_mut().move_right(),
        KeyCode::Home => app.search_bar_mut().home(),
        KeyCode::End => app.search_bar_mut().end(),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.search_bar_mut().insert_char(ch)
        }
        _ => {}
    }
}

fn handle_grid_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Char('/') => app.set_focus(Focus::SearchBar),
        KeyCode::Left | KeyCode::Char('h') => app.move_cursor(-1, 0),
        KeyCode::Right | KeyCode::Char('l') => app.move_cursor(1, 0),
        KeyCode::Up | KeyCode::Char('k') => app.move_cursor(0, -1),
        KeyCode::Down | KeyCode::Char('j') => app.move_cursor(0, 1),
        KeyCode::Home => app.move_cursor(isize::MIN / 2, 0),
        KeyCode::End => app.move_cursor(isize::MAX / 2, 0),
        KeyCode::Enter | KeyCode::Char(' ') => app.select_focused(),
        KeyCode::Char('[') | KeyCode::PageUp => app.previous_page(),
        KeyCode::Char(']') | KeyCode::PageDown => app.next_page(),
        _ => {}
    }
}

pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => app.on_click(mouse.column, mouse.row),
        MouseEventKind::ScrollUp => app.scroll_grid(-1),
        MouseEventKind::ScrollDown => app.scroll_grid(1),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
