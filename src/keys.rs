use crate::app::{App, MenuItem};
use crossterm::event::KeyCode::Char;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::Mutex;

pub async fn handle_key_bindings(key_event: KeyEvent, app: &Arc<Mutex<App>>) {
    let mut guard = app.lock().await;

    match (guard.state.menu, key_event.code, key_event.modifiers) {
        // Quit
        (_, Char('q'), _) | (_, Char('c'), KeyModifiers::CONTROL) => {
            crate::cleanup_terminal();
            std::process::exit(0);
        }

        (_, Char('?'), _) => guard.update_menu(MenuItem::Help),
        (MenuItem::Help, KeyCode::Esc, _) => guard.exit_help(),

        // Category tabs
        (MenuItem::Matches, Char('l') | KeyCode::Right | KeyCode::Tab, _) => guard.next_tab(),
        (MenuItem::Matches, Char('h') | KeyCode::Left | KeyCode::BackTab, _) => guard.prev_tab(),
        (MenuItem::Matches, Char(c @ '1'..='9'), _) => {
            let index = c as usize - '1' as usize;
            guard.select_tab_index(index);
        }

        // Match list
        (MenuItem::Matches, Char('j') | KeyCode::Down, _) => guard.scroll_down(),
        (MenuItem::Matches, Char('k') | KeyCode::Up, _) => guard.scroll_up(),

        // Global
        (_, Char('f'), _) => guard.toggle_full_screen(),
        (_, Char('"'), _) => guard.toggle_show_logs(),

        _ => {}
    }
}
