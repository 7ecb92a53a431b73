//! Contact form dialog.
//!
//! Single form dialog with Name, Email, and Message fields, per-field inline
//! validation, and a simulated delivery with a visible "Sending..." state.
//! Field edits clear only that field's error; submission is gated on a clean
//! validation pass and on no delivery being in flight.

use std::sync::Arc;
use std::sync::OnceLock;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout as RatatuiLayout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use regex::Regex;

use crate::content::copy::DELIVERY_THANKS;
use crate::inquiry::{ContactInquiry, InquirySender, SubmissionState};
use crate::tui::component::Component;
use crate::tui::theme::Theme;

/// The three editable fields of the inquiry draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Message,
}

impl FormField {
    const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Message => "Message",
        }
    }

    const fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "Your full name",
            Self::Email => "your.email@example.com",
            Self::Message => "Tell us about your dream car or any questions you have...",
        }
    }
}

/// Form row selection (the three fields plus the send button).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormRow {
    Name,
    Email,
    Message,
    Send,
}

impl FormRow {
    /// Get next row (wraps around)
    const fn next(self) -> Self {
        match self {
            Self::Name => Self::Email,
            Self::Email => Self::Message,
            Self::Message => Self::Send,
            Self::Send => Self::Name,
        }
    }

    /// Get previous row (wraps around)
    const fn previous(self) -> Self {
        match self {
            Self::Name => Self::Send,
            Self::Email => Self::Name,
            Self::Message => Self::Email,
            Self::Send => Self::Message,
        }
    }

    const fn field(self) -> Option<FormField> {
        match self {
            Self::Name => Some(FormField::Name),
            Self::Email => Some(FormField::Email),
            Self::Message => Some(FormField::Message),
            Self::Send => None,
        }
    }
}

/// Per-field validation errors. A field with no error is absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    name: Option<String>,
    email: Option<String>,
    message: Option<String>,
}

impl ValidationErrors {
    /// Returns the error for a field, if any.
    #[must_use]
    pub fn get(&self, field: FormField) -> Option<&str> {
        match field {
            FormField::Name => self.name.as_deref(),
            FormField::Email => self.email.as_deref(),
            FormField::Message => self.message.as_deref(),
        }
    }

    /// True when every field is valid.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }

    /// Number of fields carrying an error.
    #[must_use]
    pub fn len(&self) -> usize {
        [&self.name, &self.email, &self.message]
            .into_iter()
            .filter(|e| e.is_some())
            .count()
    }

    fn clear(&mut self, field: FormField) {
        match field {
            FormField::Name => self.name = None,
            FormField::Email => self.email = None,
            FormField::Message => self.message = None,
        }
    }
}

/// Coarse email shape: something, an @, something, a dot, something.
///
/// Intentionally permissive; do not tighten without a product decision.
fn email_shape() -> &'static Regex {
    static SHAPE: OnceLock<Regex> = OnceLock::new();
    SHAPE.get_or_init(|| Regex::new(r"\S+@\S+\.\S+").expect("static email pattern"))
}

/// Validates a draft. Pure; fields with no error are absent from the result.
#[must_use]
pub fn validate(draft: &ContactInquiry) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    if draft.name.trim().is_empty() {
        errors.name = Some("Name is required".to_string());
    }

    if draft.email.trim().is_empty() {
        errors.email = Some("Email is required".to_string());
    } else if !email_shape().is_match(&draft.email) {
        errors.email = Some("Email is invalid".to_string());
    }

    if draft.message.trim().is_empty() {
        errors.message = Some("Message is required".to_string());
    }

    errors
}

/// Events emitted by the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactFormEvent {
    /// User asked to submit the draft
    SubmitRequested,
    /// User dismissed the form
    Cancel,
}

/// A transient message shown under the form.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Notice {
    Success(String),
    Failure(String),
}

/// Contact form component state.
pub struct ContactForm {
    draft: ContactInquiry,
    errors: ValidationErrors,
    selected_row: FormRow,
    /// Whether the selected field is in text-entry mode
    editing: bool,
    submission: SubmissionState,
    notice: Option<Notice>,
}

impl ContactForm {
    /// Creates an empty form.
    #[must_use]
    pub fn new() -> Self {
        Self {
            draft: ContactInquiry::default(),
            errors: ValidationErrors::default(),
            selected_row: FormRow::Name,
            editing: false,
            submission: SubmissionState::new(),
            notice: None,
        }
    }

    /// The in-progress draft.
    #[must_use]
    pub fn draft(&self) -> &ContactInquiry {
        &self.draft
    }

    /// Current validation errors.
    #[must_use]
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// True while a delivery is in flight.
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submission.is_sending()
    }

    /// Overwrites a field and clears that field's error only.
    pub fn update_field(&mut self, field: FormField, value: String) {
        match field {
            FormField::Name => self.draft.name = value,
            FormField::Email => self.draft.email = value,
            FormField::Message => self.draft.message = value,
        }
        self.errors.clear(field);
    }

    fn field_value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.draft.name,
            FormField::Email => &self.draft.email,
            FormField::Message => &self.draft.message,
        }
    }

    /// Validates and, on a clean pass, starts the background delivery.
    ///
    /// A submit while a delivery is already in flight is ignored.
    ///
    /// # Errors
    ///
    /// Returns the validation errors when the draft is invalid; no delivery
    /// is attempted and the draft is left untouched.
    pub fn submit(&mut self, sender: Arc<dyn InquirySender>) -> Result<(), ValidationErrors> {
        if self.is_submitting() {
            return Ok(());
        }

        let errors = validate(&self.draft);
        if !errors.is_empty() {
            self.errors = errors.clone();
            return Err(errors);
        }

        self.notice = None;
        // Guarded by is_submitting above, so start cannot refuse.
        self.submission.start(sender, self.draft.clone()).ok();
        Ok(())
    }

    /// Polls the in-flight delivery, if any, and applies the outcome:
    /// success resets the draft, failure keeps it for a retry.
    pub fn poll_submission(&mut self) {
        let Some(result) = self.submission.poll() else {
            return;
        };
        match result {
            Ok(()) => {
                self.draft = ContactInquiry::default();
                self.errors = ValidationErrors::default();
                self.notice = Some(Notice::Success(DELIVERY_THANKS.to_string()));
            }
            Err(e) => {
                self.notice = Some(Notice::Failure(format!(
                    "Could not send your message ({e}). Please try again."
                )));
            }
        }
    }

    fn handle_edit_key(&mut self, field: FormField, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                let mut value = self.field_value(field).to_string();
                value.push(c);
                self.update_field(field, value);
            }
            KeyCode::Backspace => {
                let mut value = self.field_value(field).to_string();
                value.pop();
                self.update_field(field, value);
            }
            KeyCode::Enter | KeyCode::Esc | KeyCode::Tab => {
                self.editing = false;
                if key.code == KeyCode::Tab {
                    self.selected_row = self.selected_row.next();
                }
            }
            _ => {}
        }
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for ContactForm {
    type Event = ContactFormEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        // Ctrl+S submits from anywhere, including mid-edit.
        if key.code == KeyCode::Char('s') && key.modifiers.contains(KeyModifiers::CONTROL) {
            if !self.is_submitting() {
                return Some(ContactFormEvent::SubmitRequested);
            }
            return None;
        }

        if self.editing {
            if let Some(field) = self.selected_row.field() {
                self.handle_edit_key(field, key);
                return None;
            }
            self.editing = false;
        }

        match key.code {
            KeyCode::Up | KeyCode::BackTab => {
                self.selected_row = self.selected_row.previous();
            }
            KeyCode::Down | KeyCode::Tab => {
                self.selected_row = self.selected_row.next();
            }
            KeyCode::Enter => {
                if self.selected_row.field().is_some() {
                    self.editing = true;
                } else if !self.is_submitting() {
                    return Some(ContactFormEvent::SubmitRequested);
                }
            }
            KeyCode::Esc => {
                return Some(ContactFormEvent::Cancel);
            }
            _ => {}
        }
        None
    }

    fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let dialog_area = centered_rect(70, 80, area);

        frame.render_widget(Clear, dialog_area);
        let backdrop = Block::default().style(Style::default().bg(theme.surface));
        frame.render_widget(backdrop, dialog_area);

        let chunks = RatatuiLayout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(4), // Name
                Constraint::Length(4), // Email
                Constraint::Length(4), // Message
                Constraint::Length(3), // Send button
                Constraint::Min(2),    // Notice + help
            ])
            .split(dialog_area);

        let title = Paragraph::new("Get In Touch")
            .style(
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            )
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .style(Style::default().bg(theme.background)),
            );
        frame.render_widget(title, chunks[0]);

        for (chunk, field) in [
            (chunks[1], FormField::Name),
            (chunks[2], FormField::Email),
            (chunks[3], FormField::Message),
        ] {
            self.render_field(frame, chunk, theme, field);
        }

        self.render_send_row(frame, chunks[4], theme);
        self.render_footer(frame, chunks[5], theme);
    }
}

impl ContactForm {
    fn render_field(&self, frame: &mut Frame, area: Rect, theme: &Theme, field: FormField) {
        let row = match field {
            FormField::Name => FormRow::Name,
            FormField::Email => FormRow::Email,
            FormField::Message => FormRow::Message,
        };
        let selected = self.selected_row == row;

        let label = if selected {
            format!(" {} * ▶ ", field.label())
        } else {
            format!(" {} * ", field.label())
        };

        let value = self.field_value(field);
        let value_line = if selected && self.editing {
            Line::from(Span::styled(
                format!("{value}█"),
                Style::default().fg(theme.accent),
            ))
        } else if value.is_empty() {
            Line::from(Span::styled(
                field.placeholder(),
                Style::default().fg(theme.text_muted),
            ))
        } else {
            Line::from(Span::styled(
                value.to_string(),
                Style::default().fg(theme.text),
            ))
        };

        let mut lines = vec![value_line];
        if let Some(error) = self.errors.get(field) {
            lines.push(Line::from(Span::styled(
                error.to_string(),
                Style::default().fg(theme.error),
            )));
        }

        let border_style = if self.errors.get(field).is_some() {
            Style::default().fg(theme.error).bg(theme.background)
        } else if selected {
            Style::default().fg(theme.accent).bg(theme.background)
        } else {
            Style::default().fg(theme.text_secondary).bg(theme.background)
        };

        let widget = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(label)
                .style(border_style),
        );
        frame.render_widget(widget, area);
    }

    fn render_send_row(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let selected = self.selected_row == FormRow::Send;
        let (text, style) = if self.is_submitting() {
            (
                "Sending...",
                Style::default().fg(theme.text_muted),
            )
        } else if selected {
            (
                "▶ Send Message",
                Style::default()
                    .fg(theme.success)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            ("Send Message", Style::default().fg(theme.text))
        };

        let widget = Paragraph::new(text).style(style).block(
            Block::default()
                .borders(Borders::ALL)
                .style(Style::default().bg(theme.background)),
        );
        frame.render_widget(widget, area);
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let mut lines = Vec::new();
        if let Some(notice) = &self.notice {
            let (text, color) = match notice {
                Notice::Success(text) => (text, theme.success),
                Notice::Failure(text) => (text, theme.error),
            };
            lines.push(Line::from(Span::styled(
                text.clone(),
                Style::default().fg(color),
            )));
        }
        lines.push(Line::from(vec![
            Span::styled(
                "Tab/↑/↓",
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Navigate  "),
            Span::styled(
                "Enter",
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Edit/Send  "),
            Span::styled(
                "Esc",
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Close"),
        ]));

        let widget = Paragraph::new(lines)
            .style(Style::default().fg(theme.text).bg(theme.background))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .style(Style::default().bg(theme.background)),
            );
        frame.render_widget(widget, area);
    }
}

/// Helper to create a centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    RatatuiLayout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inquiry::SimulatedSender;
    use std::time::Duration;

    fn draft(name: &str, email: &str, message: &str) -> ContactInquiry {
        ContactInquiry {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_validate_empty_draft_yields_three_required_errors() {
        let errors = validate(&draft("", "", ""));
        assert_eq!(errors.len(), 3);
        assert_eq!(errors.get(FormField::Name), Some("Name is required"));
        assert_eq!(errors.get(FormField::Email), Some("Email is required"));
        assert_eq!(errors.get(FormField::Message), Some("Message is required"));
    }

    #[test]
    fn test_validate_bad_email_shape_is_the_only_error() {
        let errors = validate(&draft("Jo", "not-an-email", "hi"));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(FormField::Email), Some("Email is invalid"));
    }

    #[test]
    fn test_validate_clean_draft_has_no_errors() {
        let errors = validate(&draft("Jo", "jo@x.com", "hi"));
        assert!(errors.is_empty());
    }

    #[test]
    fn test_validate_trims_whitespace_only_fields() {
        let errors = validate(&draft("   ", " \t ", "  "));
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_update_field_clears_only_its_own_error() {
        let mut form = ContactForm::new();
        form.update_field(FormField::Message, "hi".to_string());
        // Name and email both invalid.
        let _ = form.submit(Arc::new(SimulatedSender::default()));
        assert!(form.errors().get(FormField::Name).is_some());
        assert!(form.errors().get(FormField::Email).is_some());

        form.update_field(FormField::Name, "Jo".to_string());
        assert!(form.errors().get(FormField::Name).is_none());
        assert!(form.errors().get(FormField::Email).is_some());
    }

    #[test]
    fn test_submit_invalid_draft_does_not_enter_submitting() {
        let mut form = ContactForm::new();
        form.update_field(FormField::Name, "Jo".to_string());

        let result = form.submit(Arc::new(SimulatedSender::default()));
        assert!(result.is_err());
        assert!(!form.is_submitting());
        // Draft untouched.
        assert_eq!(form.draft().name, "Jo");
    }

    #[test]
    fn test_submit_valid_draft_enters_submitting_and_resets_on_delivery() {
        let mut form = ContactForm::new();
        form.update_field(FormField::Name, "Ana".to_string());
        form.update_field(FormField::Email, "ana@example.com".to_string());
        form.update_field(FormField::Message, "Interested in the GT".to_string());

        let sender = Arc::new(SimulatedSender::with_delay(Duration::from_millis(20)));
        form.submit(sender).unwrap();
        assert!(form.is_submitting());
        // Draft unchanged while the delivery is in flight.
        assert_eq!(form.draft().name, "Ana");

        for _ in 0..200 {
            form.poll_submission();
            if !form.is_submitting() {
                break;
            }
            std::thread::sleep(Duration::from_millis(5));
        }
        assert!(!form.is_submitting());
        assert_eq!(form.draft(), &ContactInquiry::default());
    }

    #[test]
    fn test_resubmit_while_sending_is_ignored() {
        let mut form = ContactForm::new();
        form.update_field(FormField::Name, "Ana".to_string());
        form.update_field(FormField::Email, "ana@example.com".to_string());
        form.update_field(FormField::Message, "hi".to_string());

        let sender = Arc::new(SimulatedSender::with_delay(Duration::from_millis(200)));
        form.submit(sender.clone()).unwrap();
        assert!(form.is_submitting());
        assert!(form.submit(sender).is_ok());
        assert!(form.is_submitting());
    }

    #[test]
    fn test_typing_routes_through_update_field() {
        let mut form = ContactForm::new();
        // Trip a name error first.
        let _ = form.submit(Arc::new(SimulatedSender::default()));
        assert!(form.errors().get(FormField::Name).is_some());

        // Enter edit mode on the name row and type one character.
        form.handle_input(KeyEvent::new(KeyCode::Enter, KeyModifiers::empty()));
        form.handle_input(KeyEvent::new(KeyCode::Char('J'), KeyModifiers::SHIFT));
        assert_eq!(form.draft().name, "J");
        assert!(form.errors().get(FormField::Name).is_none());
        // Other errors persist.
        assert!(form.errors().get(FormField::Email).is_some());
    }

    #[test]
    fn test_escape_emits_cancel() {
        let mut form = ContactForm::new();
        let event = form.handle_input(KeyEvent::new(KeyCode::Esc, KeyModifiers::empty()));
        assert_eq!(event, Some(ContactFormEvent::Cancel));
    }
}
