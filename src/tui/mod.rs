//! Terminal UI: application state, event loop, and rendering.

pub mod component;
pub mod contact_form;
pub mod handlers;
pub mod navigation;
pub mod page;
pub mod service_modal;
pub mod status_bar;
pub mod theme;

use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout as RatatuiLayout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};

use crate::config::Config;
use crate::constants::{BRAND_ACCENT, BRAND_PRIMARY};
use crate::content::{SectionRegistry, ServiceCatalog};
use crate::inquiry::InquirySender;

pub use component::Component;
pub use contact_form::{ContactForm, ContactFormEvent};
pub use navigation::{NavigationError, Viewport};
pub use page::Page;
pub use service_modal::{ServiceModal, ServiceModalEvent};
pub use status_bar::StatusBar;
pub use theme::{Theme, ThemeMode};

/// Popup types that can be active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupType {
    /// Service detail modal
    ServiceDetail,
    /// Contact form dialog
    ContactForm,
}

/// Active component - holds the currently active popup component
///
/// Only one component can be active at a time; opening another replaces it.
pub enum ActiveComponent {
    /// Service detail modal component
    ServiceModal(ServiceModal),
    /// Contact form component
    ContactForm(ContactForm),
}

/// Application state - single source of truth for the UI
pub struct AppState {
    /// Section anchors in page order
    pub registry: SectionRegistry,
    /// The vehicle collections on offer
    pub catalog: ServiceCatalog,
    /// Persisted configuration
    pub config: Config,
    /// Active theme mode
    pub theme_mode: ThemeMode,
    /// Resolved theme colors
    pub theme: Theme,
    /// Scroll state over the page
    pub viewport: Viewport,
    /// The rendered page body, rebuilt each frame
    pub page: Page,
    /// Gallery index highlighted in the services section
    pub selected_service: usize,
    /// Page lines visible in the terminal, refreshed each loop iteration
    pub view_height: u16,
    /// Currently active popup type (if any)
    pub active_popup: Option<PopupType>,
    /// Currently active component (if any)
    pub active_component: Option<ActiveComponent>,
    /// Current status message
    pub status_message: String,
    /// Delivery backend for contact inquiries
    pub sender: Arc<dyn InquirySender>,
    /// Flag to quit the application
    pub should_quit: bool,
}

impl AppState {
    /// Creates the application state for the given configuration and theme.
    #[must_use]
    pub fn new(config: Config, theme_mode: ThemeMode, sender: Arc<dyn InquirySender>) -> Self {
        let registry = SectionRegistry::load();
        let catalog = ServiceCatalog::load();
        let theme = Theme::from_mode(theme_mode);
        let page = Page::build(&theme, &registry, &catalog, 0);

        Self {
            registry,
            catalog,
            config,
            theme_mode,
            theme,
            viewport: Viewport::new(),
            page,
            selected_service: 0,
            view_height: 20,
            active_popup: None,
            active_component: None,
            status_message: String::new(),
            sender,
            should_quit: false,
        }
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
    }

    /// Flips between light and dark for this session.
    ///
    /// The saved preference only picks the startup mode; the toggle is never
    /// written back.
    pub fn toggle_theme(&mut self) -> ThemeMode {
        self.theme_mode = self.theme_mode.toggle();
        self.theme = Theme::from_mode(self.theme_mode);
        self.theme_mode
    }

    /// Id of the section the viewport currently sits in.
    #[must_use]
    pub fn current_section(&self) -> &'static str {
        self.page.section_at(self.viewport.offset()).unwrap_or("home")
    }

    /// Display name of the current section, for the status bar.
    #[must_use]
    pub fn current_section_name(&self) -> &'static str {
        self.registry
            .get(self.current_section())
            .map_or("HOME", |section| section.display_name)
    }

    /// Open the service detail modal for a catalog record.
    ///
    /// Replaces any open popup; out-of-range indices are ignored.
    pub fn open_service_modal(&mut self, index: usize) {
        let Some(record) = self.catalog.get(index) else {
            return;
        };
        let modal = ServiceModal::new(record.clone(), index, self.catalog.len());
        self.selected_service = index;
        self.active_component = Some(ActiveComponent::ServiceModal(modal));
        self.active_popup = Some(PopupType::ServiceDetail);
    }

    /// Open the contact form, replacing any open popup.
    pub fn open_contact_form(&mut self) {
        self.active_component = Some(ActiveComponent::ContactForm(ContactForm::new()));
        self.active_popup = Some(PopupType::ContactForm);
    }

    /// Close the active popup. Safe to call with nothing open.
    pub fn close_component(&mut self) {
        self.active_popup = None;
        self.active_component = None;
    }
}

/// Initialize terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Rows taken by the nav bar and status bar around the page body.
const PAGE_CHROME_HEIGHT: u16 = 7;

/// Main event loop
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    loop {
        // Scroll clamping works against the real page viewport, so resizes
        // are picked up before the next key is handled.
        let size = terminal.size()?;
        state.view_height = size.height.saturating_sub(PAGE_CHROME_HEIGHT).max(1);

        // Advance the smooth scroll animation one step per frame.
        state.viewport.tick();

        // Rebuild the page for the current theme and gallery selection.
        state.page = Page::build(
            &state.theme,
            &state.registry,
            &state.catalog,
            state.selected_service,
        );

        // Render current state
        terminal.draw(|f| render(f, state))?;

        // Poll for events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if handle_key_event(state, key)? {
                    break; // User quit
                }
            }
        }

        // Poll the in-flight delivery, if the contact form has one.
        if let Some(ActiveComponent::ContactForm(form)) = &mut state.active_component {
            form.poll_submission();
        }

        // Check if should quit
        if state.should_quit {
            break;
        }
    }

    Ok(())
}

/// Render the UI from current state
fn render(f: &mut Frame, state: &AppState) {
    // Fill entire screen with theme background color first
    // This ensures consistent background regardless of terminal settings
    let full_bg = Block::default().style(Style::default().bg(state.theme.background));
    f.render_widget(full_bg, f.area());

    let chunks = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Nav bar
            Constraint::Min(10),   // Page body
            Constraint::Length(4), // Status bar
        ])
        .split(f.area());

    render_nav_bar(f, chunks[0], state);
    render_page(f, chunks[1], state);
    StatusBar::render(f, chunks[2], state, &state.theme);

    // Render popup if active
    if let Some(popup_type) = &state.active_popup {
        render_popup(f, popup_type, state);
    }
}

/// Render the fixed nav bar: brand mark plus one item per section, with the
/// section under the viewport highlighted.
fn render_nav_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let current = state.current_section();

    let mut spans = vec![
        Span::styled(
            BRAND_PRIMARY,
            Style::default()
                .fg(state.theme.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            BRAND_ACCENT,
            Style::default()
                .fg(state.theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("    "),
    ];

    for (index, section) in state.registry.sections().iter().enumerate() {
        if index > 0 {
            spans.push(Span::raw("   "));
        }
        let style = if section.id == current {
            Style::default()
                .fg(state.theme.accent)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(state.theme.text_secondary)
        };
        spans.push(Span::styled(
            format!("[{}] {}", index + 1, section.display_name),
            style,
        ));
    }

    let nav = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .style(Style::default().bg(state.theme.background)),
    );
    f.render_widget(nav, area);
}

/// Render the scrollable page body
fn render_page(f: &mut Frame, area: Rect, state: &AppState) {
    let body = Paragraph::new(state.page.lines().to_vec())
        .style(Style::default().bg(state.theme.background))
        .scroll((state.viewport.offset(), 0));
    f.render_widget(body, area);
}

/// Render active popup
fn render_popup(f: &mut Frame, popup_type: &PopupType, state: &AppState) {
    match popup_type {
        PopupType::ServiceDetail => {
            if let Some(ActiveComponent::ServiceModal(ref modal)) = state.active_component {
                modal.render(f, f.area(), &state.theme);
            }
        }
        PopupType::ContactForm => {
            if let Some(ActiveComponent::ContactForm(ref form)) = state.active_component {
                form.render(f, f.area(), &state.theme);
            }
        }
    }
}

/// Handle keyboard input events
fn handle_key_event(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    // Route to popup handler if popup is active
    if state.active_popup.is_some() {
        return handlers::handle_popup_input(state, key);
    }

    // Main UI key handling
    handlers::handle_main_input(state, key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inquiry::SimulatedSender;

    fn test_state() -> AppState {
        AppState::new(
            Config::default(),
            ThemeMode::Light,
            Arc::new(SimulatedSender::default()),
        )
    }

    #[test]
    fn test_open_service_modal_replaces_not_stacks() {
        let mut state = test_state();
        state.open_service_modal(0);
        state.open_service_modal(2);

        assert_eq!(state.active_popup, Some(PopupType::ServiceDetail));
        match &state.active_component {
            Some(ActiveComponent::ServiceModal(modal)) => assert_eq!(modal.index(), 2),
            _ => panic!("expected a service modal"),
        }
    }

    #[test]
    fn test_open_contact_form_replaces_service_modal() {
        let mut state = test_state();
        state.open_service_modal(1);
        state.open_contact_form();

        assert_eq!(state.active_popup, Some(PopupType::ContactForm));
        assert!(matches!(
            state.active_component,
            Some(ActiveComponent::ContactForm(_))
        ));
    }

    #[test]
    fn test_close_component_is_idempotent() {
        let mut state = test_state();
        state.open_service_modal(0);
        state.close_component();
        state.close_component();

        assert!(state.active_popup.is_none());
        assert!(state.active_component.is_none());
    }

    #[test]
    fn test_open_service_modal_out_of_range_is_ignored() {
        let mut state = test_state();
        state.open_service_modal(99);
        assert!(state.active_popup.is_none());
    }

    #[test]
    fn test_toggle_theme_flips_mode() {
        let mut state = test_state();
        assert_eq!(state.toggle_theme(), ThemeMode::Dark);
        assert_eq!(state.theme, Theme::dark());
        assert_eq!(state.toggle_theme(), ThemeMode::Light);
        assert_eq!(state.theme, Theme::light());
    }

    #[test]
    fn test_current_section_follows_viewport() {
        let mut state = test_state();
        assert_eq!(state.current_section(), "home");

        let contact = state.page.offset_of("contact").unwrap();
        state.viewport.scroll_by(i32::from(contact), contact);
        while !state.viewport.settled() {
            state.viewport.tick();
        }
        assert_eq!(state.current_section(), "contact");
    }
}
