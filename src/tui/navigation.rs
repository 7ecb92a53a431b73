//! In-page navigation: anchor resolution and smooth scrolling.
//!
//! The [`Viewport`] owns the scroll position over the pre-rendered page
//! lines. Anchor requests resolve through the page's section offsets and set
//! a target; each loop tick moves the actual offset a proportional step
//! toward it, which gives the converging scroll the page's navigation
//! promises without blocking the event loop.

use thiserror::Error;

use crate::tui::page::Page;

/// Navigation failures.
///
/// An unknown section indicates a stale or malformed anchor, a configuration
/// defect rather than user input; callers ignore it silently.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NavigationError {
    #[error("unknown section id: {0}")]
    UnknownSection(String),
}

/// Scroll state over the rendered page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    offset: u16,
    target: u16,
}

impl Viewport {
    /// Creates a viewport at the top of the page.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current scroll offset in page lines.
    #[must_use]
    pub const fn offset(&self) -> u16 {
        self.offset
    }

    /// The offset the viewport is converging toward.
    #[must_use]
    pub const fn target(&self) -> u16 {
        self.target
    }

    /// Requests a smooth scroll to a section anchor.
    ///
    /// Re-requesting the current target is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError::UnknownSection`] if the id is not on the
    /// page; no scroll state changes in that case.
    pub fn request_scroll_to(&mut self, page: &Page, section_id: &str) -> Result<(), NavigationError> {
        let Some(line) = page.offset_of(section_id) else {
            return Err(NavigationError::UnknownSection(section_id.to_string()));
        };
        if self.target == line {
            return Ok(());
        }
        self.target = line;
        Ok(())
    }

    /// Scrolls the target by a signed number of lines, clamped to the page.
    pub fn scroll_by(&mut self, delta: i32, max: u16) {
        let target = i32::from(self.target) + delta;
        self.target = target.clamp(0, i32::from(max)) as u16;
    }

    /// Jumps the target to the top of the page.
    pub fn jump_top(&mut self) {
        self.target = 0;
    }

    /// Advances the scroll animation one tick.
    ///
    /// Moves a quarter of the remaining distance, at least one line, so the
    /// viewport converges smoothly rather than instantaneously.
    pub fn tick(&mut self) {
        if self.offset == self.target {
            return;
        }
        if self.offset < self.target {
            let step = ((self.target - self.offset) / 4).max(1);
            self.offset += step;
        } else {
            let step = ((self.offset - self.target) / 4).max(1);
            self.offset -= step;
        }
    }

    /// True once the animation has settled on its target.
    #[must_use]
    pub const fn settled(&self) -> bool {
        self.offset == self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{SectionRegistry, ServiceCatalog};
    use crate::tui::theme::Theme;

    fn test_page() -> Page {
        Page::build(
            &Theme::light(),
            &SectionRegistry::load(),
            &ServiceCatalog::load(),
            0,
        )
    }

    #[test]
    fn test_scroll_to_known_section_sets_target() {
        let page = test_page();
        let mut viewport = Viewport::new();

        viewport.request_scroll_to(&page, "services").unwrap();
        assert_eq!(viewport.target(), page.offset_of("services").unwrap());
        // Offset has not moved yet; the animation does that.
        assert_eq!(viewport.offset(), 0);
    }

    #[test]
    fn test_scroll_to_unknown_section_is_noop_failure() {
        let page = test_page();
        let mut viewport = Viewport::new();

        let result = viewport.request_scroll_to(&page, "nonexistent");
        assert_eq!(
            result,
            Err(NavigationError::UnknownSection("nonexistent".to_string()))
        );
        assert_eq!(viewport.target(), 0);
        assert_eq!(viewport.offset(), 0);
    }

    #[test]
    fn test_rerequest_same_target_is_noop() {
        let page = test_page();
        let mut viewport = Viewport::new();

        viewport.request_scroll_to(&page, "about").unwrap();
        let before = viewport;
        viewport.request_scroll_to(&page, "about").unwrap();
        assert_eq!(viewport, before);
    }

    #[test]
    fn test_tick_converges_to_target() {
        let page = test_page();
        let mut viewport = Viewport::new();
        viewport.request_scroll_to(&page, "contact").unwrap();

        let mut ticks = 0;
        while !viewport.settled() {
            let before = viewport.offset();
            viewport.tick();
            assert!(viewport.offset() > before, "offset must move toward target");
            ticks += 1;
            assert!(ticks < 1000, "animation must terminate");
        }
        assert_eq!(viewport.offset(), viewport.target());
        // Multiple ticks were needed, so the scroll was not instantaneous.
        assert!(ticks > 1);
    }

    #[test]
    fn test_tick_converges_upward() {
        let mut viewport = Viewport::new();
        viewport.scroll_by(40, 100);
        while !viewport.settled() {
            viewport.tick();
        }
        viewport.jump_top();
        while !viewport.settled() {
            let before = viewport.offset();
            viewport.tick();
            assert!(viewport.offset() < before);
        }
        assert_eq!(viewport.offset(), 0);
    }

    #[test]
    fn test_scroll_by_clamps() {
        let mut viewport = Viewport::new();
        viewport.scroll_by(-5, 100);
        assert_eq!(viewport.target(), 0);
        viewport.scroll_by(500, 100);
        assert_eq!(viewport.target(), 100);
    }
}
