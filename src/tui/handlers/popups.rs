//! Popup input handlers extracted from main TUI module.

use anyhow::Result;
use crossterm::event;

use crate::tui::{
    ActiveComponent, AppState, Component, ContactFormEvent, PopupType, ServiceModalEvent,
};

/// Handle input while a popup is active
pub fn handle_popup_input(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    let Some(popup) = state.active_popup else {
        return Ok(false);
    };
    match popup {
        PopupType::ServiceDetail => handle_service_modal_input(state, key),
        PopupType::ContactForm => handle_contact_form_input(state, key),
    }
}

/// Handle input for the service detail modal
fn handle_service_modal_input(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    let Some(ActiveComponent::ServiceModal(modal)) = &mut state.active_component else {
        // Popup flag without a component is stale state; recover by closing.
        state.close_component();
        return Ok(false);
    };

    match modal.handle_input(key) {
        Some(ServiceModalEvent::Close) => {
            state.close_component();
        }
        Some(ServiceModalEvent::ShowRecord(index)) => {
            // Replace the open record, never stack a second modal.
            state.open_service_modal(index);
        }
        None => {}
    }
    Ok(false)
}

/// Handle input for the contact form
fn handle_contact_form_input(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    let sender = state.sender.clone();
    let Some(ActiveComponent::ContactForm(form)) = &mut state.active_component else {
        state.close_component();
        return Ok(false);
    };

    match form.handle_input(key) {
        Some(ContactFormEvent::Cancel) => {
            // Dropping the form drops any in-flight delivery receiver; the
            // worker's result is discarded rather than applied to dead state.
            state.close_component();
        }
        Some(ContactFormEvent::SubmitRequested) => {
            // Validation errors render inline on the form itself.
            let _ = form.submit(sender);
        }
        None => {}
    }
    Ok(false)
}
