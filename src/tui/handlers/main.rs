//! Main UI input handler.

use anyhow::Result;
use crossterm::event::{self, KeyCode};

use crate::tui::AppState;

/// Handle input for main UI
pub fn handle_main_input(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Char('q') => {
            state.should_quit = true;
            return Ok(true);
        }
        KeyCode::Char('t') => {
            let mode = state.toggle_theme();
            state.set_status(format!("Switched to {mode} theme"));
        }
        KeyCode::Char(c @ '1'..='4') => {
            let index = c as usize - '1' as usize;
            if let Some(section) = state.registry.sections().get(index) {
                let id = section.id;
                // Unknown anchors are ignored silently.
                state.viewport.request_scroll_to(&state.page, id).ok();
            }
        }
        KeyCode::Down | KeyCode::Char('j') => {
            let max = state.page.max_scroll(state.view_height);
            state.viewport.scroll_by(2, max);
        }
        KeyCode::Up | KeyCode::Char('k') => {
            let max = state.page.max_scroll(state.view_height);
            state.viewport.scroll_by(-2, max);
        }
        KeyCode::PageDown => {
            let max = state.page.max_scroll(state.view_height);
            state.viewport.scroll_by(10, max);
        }
        KeyCode::PageUp => {
            let max = state.page.max_scroll(state.view_height);
            state.viewport.scroll_by(-10, max);
        }
        KeyCode::Home => {
            state.viewport.jump_top();
        }
        KeyCode::End => {
            let max = state.page.max_scroll(state.view_height);
            state.viewport.scroll_by(i32::from(max), max);
        }
        KeyCode::Left | KeyCode::Char('h') => {
            let len = state.catalog.len().max(1);
            state.selected_service = (state.selected_service + len - 1) % len;
        }
        KeyCode::Right | KeyCode::Char('l') => {
            let len = state.catalog.len().max(1);
            state.selected_service = (state.selected_service + 1) % len;
        }
        KeyCode::Enter => {
            // Context sensitive: in the contact section Enter opens the
            // form, elsewhere it opens the selected collection.
            if state.current_section() == "contact" {
                state.open_contact_form();
            } else {
                state.open_service_modal(state.selected_service);
            }
        }
        KeyCode::Char('c') => {
            state.open_contact_form();
        }
        _ => {}
    }
    Ok(false)
}
