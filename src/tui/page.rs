//! Page body rendering.
//!
//! Builds the whole scrollable page (hero, about, services, contact, footer)
//! into styled lines once per frame and records where each section starts.
//! Copy is pre-wrapped at a fixed width so section offsets stay stable
//! regardless of terminal size; the viewport scrolls over these lines.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::content::{copy, SectionRegistry, ServiceCatalog, ServiceRecord};
use crate::tui::theme::Theme;

/// Wrap width for body copy, chosen to fit comfortably in an 80-column
/// terminal with the page indent.
const WRAP_WIDTH: usize = 72;

/// The rendered page: styled lines plus the line offset of each section.
pub struct Page {
    lines: Vec<Line<'static>>,
    offsets: Vec<(&'static str, u16)>,
}

impl Page {
    /// Renders the full page for the given theme and gallery selection.
    #[must_use]
    pub fn build(
        theme: &Theme,
        registry: &SectionRegistry,
        catalog: &ServiceCatalog,
        selected_service: usize,
    ) -> Self {
        let mut builder = PageBuilder::new(theme);

        for section in registry.sections() {
            builder.mark(section.id);
            match section.id {
                "home" => builder.hero(),
                "about" => builder.about(),
                "services" => builder.services(catalog, selected_service),
                "contact" => builder.contact(),
                _ => {}
            }
        }
        builder.footer();

        Self {
            lines: builder.lines,
            offsets: builder.offsets,
        }
    }

    /// The page body as renderable lines.
    #[must_use]
    pub fn lines(&self) -> &[Line<'static>] {
        &self.lines
    }

    /// Total page height in lines.
    #[must_use]
    pub fn len(&self) -> u16 {
        self.lines.len() as u16
    }

    /// Returns true if the page has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Line offset where a section starts, if the anchor is on the page.
    #[must_use]
    pub fn offset_of(&self, section_id: &str) -> Option<u16> {
        self.offsets
            .iter()
            .find(|(id, _)| *id == section_id)
            .map(|(_, line)| *line)
    }

    /// The section covering a scroll offset (the last section starting at or
    /// above it). Used to highlight the active nav item.
    #[must_use]
    pub fn section_at(&self, offset: u16) -> Option<&'static str> {
        self.offsets
            .iter()
            .rev()
            .find(|(_, line)| *line <= offset)
            .or(self.offsets.first())
            .map(|(id, _)| *id)
    }

    /// Largest useful scroll target for a viewport of the given height.
    #[must_use]
    pub fn max_scroll(&self, view_height: u16) -> u16 {
        self.len().saturating_sub(view_height.max(1))
    }
}

/// Accumulates styled lines while tracking section offsets.
struct PageBuilder<'a> {
    theme: &'a Theme,
    lines: Vec<Line<'static>>,
    offsets: Vec<(&'static str, u16)>,
}

impl<'a> PageBuilder<'a> {
    fn new(theme: &'a Theme) -> Self {
        Self {
            theme,
            lines: Vec::new(),
            offsets: Vec::new(),
        }
    }

    /// Records that a section starts at the current line.
    fn mark(&mut self, id: &'static str) {
        self.offsets.push((id, self.lines.len() as u16));
    }

    fn blank(&mut self) {
        self.lines.push(Line::default());
    }

    fn push(&mut self, line: Line<'static>) {
        self.lines.push(line);
    }

    fn body(&mut self, text: &str, style: Style) {
        for wrapped in wrap_text(text, WRAP_WIDTH) {
            self.push(Line::from(Span::styled(format!("  {wrapped}"), style)));
        }
    }

    fn hero(&mut self) {
        let hero = copy::hero();
        let accent = Style::default().fg(self.theme.accent);
        let headline = Style::default()
            .fg(self.theme.text)
            .add_modifier(Modifier::BOLD);

        self.blank();
        self.push(Line::from(Span::styled(hero.tagline, accent)).centered());
        self.blank();
        self.push(Line::from(Span::styled(hero.headline_top, headline)).centered());
        self.push(
            Line::from(Span::styled(
                hero.headline_accent,
                accent.add_modifier(Modifier::BOLD),
            ))
            .centered(),
        );
        self.blank();
        for wrapped in wrap_text(hero.subtitle, WRAP_WIDTH) {
            self.push(
                Line::from(Span::styled(
                    wrapped,
                    Style::default().fg(self.theme.text_secondary),
                ))
                .centered(),
            );
        }
        self.blank();
        self.push(
            Line::from(vec![
                Span::styled(
                    format!("▸ {} ", hero.cta),
                    Style::default()
                        .fg(self.theme.primary)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled("[3]", Style::default().fg(self.theme.text_muted)),
            ])
            .centered(),
        );
        self.blank();
        self.blank();
    }

    fn about(&mut self) {
        let kicker = Style::default().fg(self.theme.primary);
        let secondary = Style::default().fg(self.theme.text_secondary);

        self.push(Line::from(Span::styled(
            format!("  {}", copy::ABOUT_SUBTITLE),
            kicker,
        )));
        let (head, accent_word, tail) = copy::ABOUT_HEADING;
        self.push(Line::from(vec![
            Span::styled(
                format!("  {head}"),
                Style::default()
                    .fg(self.theme.text)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                accent_word,
                Style::default()
                    .fg(self.theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                tail,
                Style::default()
                    .fg(self.theme.text)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        self.blank();
        for paragraph in copy::about_paragraphs() {
            self.body(paragraph, secondary);
            self.blank();
        }

        // Stat tiles on a single row.
        let mut spans = vec![Span::raw("  ")];
        for stat in copy::about_stats() {
            let value_style = if stat.highlight {
                Style::default()
                    .fg(self.theme.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
                    .fg(self.theme.text)
                    .add_modifier(Modifier::BOLD)
            };
            spans.push(Span::styled(stat.value.to_string(), value_style));
            spans.push(Span::styled(
                format!(" {}   ", stat.label),
                Style::default().fg(self.theme.text_muted),
            ));
        }
        self.push(Line::from(spans));
        self.blank();
        self.blank();
    }

    fn services(&mut self, catalog: &ServiceCatalog, selected: usize) {
        self.push(Line::from(Span::styled(
            format!("  {}", copy::SERVICES_KICKER),
            Style::default().fg(self.theme.primary),
        )));
        let (accent_word, tail) = copy::SERVICES_HEADING;
        self.push(Line::from(vec![
            Span::styled(
                format!("  {accent_word}"),
                Style::default()
                    .fg(self.theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                tail,
                Style::default()
                    .fg(self.theme.text)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        self.blank();
        self.body(
            copy::SERVICES_SUBTITLE,
            Style::default().fg(self.theme.text_secondary),
        );
        self.blank();

        for (index, record) in catalog.records().iter().enumerate() {
            self.service_card(record, index == selected);
        }

        self.push(Line::from(Span::styled(
            "  ←/→ select a collection, Enter for details",
            Style::default().fg(self.theme.text_muted),
        )));
        self.blank();
        self.blank();
    }

    fn service_card(&mut self, record: &ServiceRecord, selected: bool) {
        let marker = if selected { "▸" } else { " " };
        let title_style = if selected {
            Style::default()
                .fg(self.theme.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(self.theme.text)
                .add_modifier(Modifier::BOLD)
        };

        self.push(Line::from(vec![
            Span::styled(
                format!("  {marker} {} ", record.icon_glyph),
                Style::default().fg(self.theme.accent),
            ),
            Span::styled(record.title.to_string(), title_style),
            Span::styled(
                format!("  ⟨{}⟩", record.badge),
                Style::default().fg(self.theme.primary),
            ),
        ]));
        for wrapped in wrap_text(record.short_description, WRAP_WIDTH - 6) {
            self.push(Line::from(Span::styled(
                format!("      {wrapped}"),
                Style::default().fg(self.theme.text_secondary),
            )));
        }
        self.push(Line::from(Span::styled(
            format!("      {}", record.price),
            Style::default().fg(self.theme.text_muted),
        )));
        self.blank();
    }

    fn contact(&mut self) {
        self.push(Line::from(Span::styled(
            format!("  {}", copy::CONTACT_HEADING),
            Style::default()
                .fg(self.theme.text)
                .add_modifier(Modifier::BOLD),
        )));
        self.blank();
        self.body(
            copy::CONTACT_SUBTITLE,
            Style::default().fg(self.theme.text_secondary),
        );
        self.blank();

        self.push(Line::from(Span::styled(
            "  Contact Information",
            Style::default().fg(self.theme.primary),
        )));
        for channel in copy::contact_channels() {
            self.push(Line::from(vec![
                Span::styled(
                    format!("    {:<8} ", channel.label),
                    Style::default().fg(self.theme.text_muted),
                ),
                Span::styled(
                    channel.value.to_string(),
                    Style::default().fg(self.theme.text),
                ),
            ]));
        }
        self.blank();

        self.push(Line::from(Span::styled(
            "  Why Choose EliteMotors?",
            Style::default().fg(self.theme.primary),
        )));
        for item in copy::why_choose() {
            self.push(Line::from(vec![
                Span::styled("    ✓ ", Style::default().fg(self.theme.success)),
                Span::styled(
                    item.to_string(),
                    Style::default().fg(self.theme.text_secondary),
                ),
            ]));
        }
        self.blank();
        self.push(Line::from(Span::styled(
            "  Press Enter here (or c anywhere) to send us a message",
            Style::default().fg(self.theme.text_muted),
        )));
        self.blank();
        self.blank();
    }

    fn footer(&mut self) {
        self.push(Line::from(Span::styled(
            "─".repeat(WRAP_WIDTH),
            Style::default().fg(self.theme.text_muted),
        )));
        self.push(
            Line::from(Span::styled(
                copy::FOOTER_LINE,
                Style::default().fg(self.theme.text_muted),
            ))
            .centered(),
        );
        self.blank();
    }
}

/// Greedy word wrap at a maximum width in characters.
fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.chars().count() + 1 + word.chars().count() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
