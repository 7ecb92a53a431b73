//! Status bar widget for displaying status messages and help

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{AppState, PopupType, Theme};

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar with contextual help
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let mut lines: Vec<Line> = Vec::new();

        if state.status_message.is_empty() {
            lines.push(Self::section_line(state, theme));
        } else {
            lines.push(Line::from(Span::styled(
                state.status_message.clone(),
                Style::default().fg(theme.accent),
            )));
        }

        lines.push(Self::help_line(state, theme));

        let status = Paragraph::new(lines)
            .style(Style::default().bg(theme.background).fg(theme.text))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Status ")
                    .style(Style::default().bg(theme.background)),
            );
        f.render_widget(status, area);
    }

    /// Current position line: which section the viewport sits in.
    fn section_line(state: &AppState, theme: &Theme) -> Line<'static> {
        Line::from(vec![
            Span::styled("Viewing: ", Style::default().fg(theme.primary)),
            Span::styled(
                state.current_section_name().to_string(),
                Style::default()
                    .fg(theme.text)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  ({} theme)", state.theme_mode),
                Style::default().fg(theme.text_muted),
            ),
        ])
    }

    /// Contextual key hints for the active surface.
    fn help_line(state: &AppState, theme: &Theme) -> Line<'static> {
        let hints: &[(&str, &str)] = match state.active_popup {
            Some(PopupType::ServiceDetail) => &[
                ("←/→", "Other collections"),
                ("Esc", "Close"),
            ],
            Some(PopupType::ContactForm) => &[
                ("Tab/↑/↓", "Navigate"),
                ("Enter", "Edit/Send"),
                ("Ctrl+S", "Send"),
                ("Esc", "Close"),
            ],
            None => &[
                ("1-4", "Sections"),
                ("j/k", "Scroll"),
                ("Enter", "Open"),
                ("c", "Contact"),
                ("t", "Theme"),
                ("q", "Quit"),
            ],
        };

        let mut spans: Vec<Span<'static>> = Vec::new();
        spans.push(Span::styled("Help: ", Style::default().fg(theme.primary)));
        for (i, (key, action)) in hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" | "));
            }
            spans.push(Span::styled(
                (*key).to_string(),
                Style::default().fg(theme.accent),
            ));
            spans.push(Span::raw(": "));
            spans.push(Span::raw((*action).to_string()));
        }
        Line::from(spans)
    }
}
