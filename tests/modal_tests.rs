//! Integration tests for the service detail modal.
//!
//! Tests the modal lifecycle driven by keyboard input:
//! - Enter opens the selected collection
//! - Arrow keys replace the open record rather than stacking
//! - Escape closes, and a second Escape is harmless
//! - While a modal is open, main-view keys do not reach the page

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use eliteauto::config::Config;
use eliteauto::inquiry::SimulatedSender;
use eliteauto::tui::handlers::{handle_main_input, handle_popup_input};
use eliteauto::tui::{ActiveComponent, AppState, PopupType, ThemeMode};

fn test_state() -> AppState {
    AppState::new(
        Config::default(),
        ThemeMode::Dark,
        Arc::new(SimulatedSender::default()),
    )
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::empty())
}

fn open_index(state: &AppState) -> usize {
    match &state.active_component {
        Some(ActiveComponent::ServiceModal(modal)) => modal.index(),
        _ => panic!("expected a service modal"),
    }
}

#[test]
fn test_enter_opens_selected_collection() {
    let mut state = test_state();
    handle_main_input(&mut state, key(KeyCode::Right)).unwrap();
    handle_main_input(&mut state, key(KeyCode::Enter)).unwrap();

    assert_eq!(state.active_popup, Some(PopupType::ServiceDetail));
    assert_eq!(open_index(&state), 1);
}

#[test]
fn test_arrows_replace_open_record() {
    let mut state = test_state();
    state.open_service_modal(0);

    handle_popup_input(&mut state, key(KeyCode::Right)).unwrap();
    assert_eq!(open_index(&state), 1);
    handle_popup_input(&mut state, key(KeyCode::Right)).unwrap();
    assert_eq!(open_index(&state), 2);
    // Wraps back to the first record.
    handle_popup_input(&mut state, key(KeyCode::Right)).unwrap();
    assert_eq!(open_index(&state), 0);

    // Still exactly one popup.
    assert_eq!(state.active_popup, Some(PopupType::ServiceDetail));
}

#[test]
fn test_escape_closes_and_second_escape_is_harmless() {
    let mut state = test_state();
    state.open_service_modal(0);

    handle_popup_input(&mut state, key(KeyCode::Esc)).unwrap();
    assert!(state.active_popup.is_none());

    // With nothing open the key routes to the main handler instead.
    handle_main_input(&mut state, key(KeyCode::Esc)).unwrap();
    assert!(state.active_popup.is_none());
    assert!(state.active_component.is_none());
}

#[test]
fn test_modal_blocks_page_scrolling() {
    let mut state = test_state();
    state.open_service_modal(0);
    let before = state.viewport;

    // 'j' scrolls the page in the main view; inside the modal it is inert.
    handle_popup_input(&mut state, key(KeyCode::Char('j'))).unwrap();
    assert_eq!(state.viewport, before);
    assert_eq!(state.active_popup, Some(PopupType::ServiceDetail));
}

#[test]
fn test_gallery_selection_follows_modal_cycling() {
    let mut state = test_state();
    state.open_service_modal(0);

    handle_popup_input(&mut state, key(KeyCode::Left)).unwrap();
    assert_eq!(open_index(&state), 2);
    // Closing keeps the page highlight on the last viewed record.
    handle_popup_input(&mut state, key(KeyCode::Esc)).unwrap();
    assert_eq!(state.selected_service, 2);
}
