//! Service detail modal.
//!
//! Shows one catalog record over a dimmed backdrop: full description, the
//! spec grid, the feature list, and the viewing call to action. At most one
//! record is open at a time; selecting another record replaces the current
//! one rather than stacking.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout as RatatuiLayout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::content::ServiceRecord;
use crate::tui::component::Component;
use crate::tui::theme::Theme;

/// Events emitted by the service modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceModalEvent {
    /// User wants the previous/next record shown instead (replace, not stack)
    ShowRecord(usize),
    /// User dismissed the modal
    Close,
}

/// Modal component state for one open service record.
#[derive(Debug, Clone)]
pub struct ServiceModal {
    record: ServiceRecord,
    /// Gallery index of the open record
    index: usize,
    /// Catalog size, for cycling
    catalog_len: usize,
}

impl ServiceModal {
    /// Creates a modal showing the given record.
    #[must_use]
    pub fn new(record: ServiceRecord, index: usize, catalog_len: usize) -> Self {
        Self {
            record,
            index,
            catalog_len,
        }
    }

    /// The record currently shown.
    #[must_use]
    pub fn record(&self) -> &ServiceRecord {
        &self.record
    }

    /// Gallery index of the open record.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }
}

impl Component for ServiceModal {
    type Event = ServiceModalEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter => Some(ServiceModalEvent::Close),
            KeyCode::Left | KeyCode::Char('h') => {
                let prev = (self.index + self.catalog_len - 1) % self.catalog_len.max(1);
                Some(ServiceModalEvent::ShowRecord(prev))
            }
            KeyCode::Right | KeyCode::Char('l') => {
                let next = (self.index + 1) % self.catalog_len.max(1);
                Some(ServiceModalEvent::ShowRecord(next))
            }
            _ => None,
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let dialog_area = centered_rect(76, 80, area);

        // Backdrop: the overlay suspends interaction with the page behind it.
        frame.render_widget(Clear, dialog_area);
        let backdrop = Block::default().style(Style::default().bg(theme.surface));
        frame.render_widget(backdrop, dialog_area);

        let chunks = RatatuiLayout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title + price
                Constraint::Min(6),    // Full description
                Constraint::Length(6), // Spec grid
                Constraint::Length(6), // Key features
                Constraint::Length(3), // Call to action / help
            ])
            .split(dialog_area);

        let title = Paragraph::new(Line::from(vec![
            Span::styled(
                format!("{} {} ", self.record.icon_glyph, self.record.title),
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("⟨{}⟩", self.record.badge),
                Style::default().fg(theme.primary),
            ),
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", self.record.price))
                .style(Style::default().bg(theme.background).fg(theme.text)),
        );
        frame.render_widget(title, chunks[0]);

        let description = Paragraph::new(self.record.full_description)
            .style(Style::default().fg(theme.text_secondary))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Technical Specifications ")
                    .style(Style::default().bg(theme.background)),
            )
            .wrap(Wrap { trim: true });
        frame.render_widget(description, chunks[1]);

        self.render_spec_grid(frame, chunks[2], theme);

        let features: Vec<Line> = self
            .record
            .features
            .iter()
            .map(|feature| {
                Line::from(vec![
                    Span::styled("• ", Style::default().fg(theme.accent)),
                    Span::styled((*feature).to_string(), Style::default().fg(theme.text)),
                ])
            })
            .collect();
        let features = Paragraph::new(features).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Key Features ")
                .style(Style::default().bg(theme.background).fg(theme.text)),
        );
        frame.render_widget(features, chunks[3]);

        let help = Paragraph::new(Line::from(vec![
            Span::styled(
                "Schedule Private Viewing",
                Style::default()
                    .fg(theme.success)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  ←/→ other collections  ", Style::default().fg(theme.text_muted)),
            Span::styled(
                "Esc",
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" close", Style::default().fg(theme.text_muted)),
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .style(Style::default().bg(theme.background)),
        );
        frame.render_widget(help, chunks[4]);
    }
}

impl ServiceModal {
    fn render_spec_grid(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::ALL)
            .style(Style::default().bg(theme.background));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = RatatuiLayout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Length(2)])
            .split(inner);

        for (row_index, row_area) in rows.iter().enumerate() {
            let cells = RatatuiLayout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(*row_area);
            for (col_index, cell_area) in cells.iter().enumerate() {
                let Some(spec) = self.record.specs.get(row_index * 2 + col_index) else {
                    continue;
                };
                let cell = Paragraph::new(vec![
                    Line::from(Span::styled(
                        format!("{} {}", spec.icon, spec.label),
                        Style::default().fg(theme.text_muted),
                    )),
                    Line::from(Span::styled(
                        spec.value,
                        Style::default()
                            .fg(theme.text)
                            .add_modifier(Modifier::BOLD),
                    )),
                ]);
                frame.render_widget(cell, *cell_area);
            }
        }
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
