//! Scroll-driven tracking of the active section.
//!
//! The navigation bar highlights whichever section the reader is currently looking at. On every
//! scroll offset we add a fixed look-ahead to get a *probe*, then scan the sections in page order
//! and pick the first one whose half-open extent `[top, top + height)` contains it. When nothing
//! matches (probe above the first section, or past the last) the previous answer stands.
//!
//! The tracker never reads the layout or moves the viewport directly. Both are injected through
//! [`LayoutQuery`] and [`ScrollHost`], so the rule can be exercised without a terminal.

use crate::error::Result;
use crate::section::{SectionId, SectionMetrics};

/// Look-ahead added to the scroll offset before probing, in layout units.
///
/// Switches the highlight slightly before a section's top edge reaches the top of the viewport.
pub const DEFAULT_LOOK_AHEAD: u32 = 100;

/// Resolves a section to its current on-page extent.
pub trait LayoutQuery {
    /// Current metrics for `id`, or `None` when the section is not laid out.
    fn metrics(&self, id: SectionId) -> Option<SectionMetrics>;
}

/// Moves the visible region of the page.
pub trait ScrollHost {
    /// Bring the top edge of `id` (currently at `metrics`) into view.
    fn scroll_into_view(&mut self, id: SectionId, metrics: SectionMetrics);
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
/// An observable change of the active section.
pub struct Transition {
    /// Section that was active before the scroll event.
    pub from: SectionId,
    /// Section that is active now.
    pub to: SectionId,
}

#[must_use]
/// Pick the first section whose extent contains `probe`, or keep `previous`.
///
/// Sections are consumed lazily, so metrics stop being resolved at the first match. Entries
/// without metrics never match.
pub fn compute_active<I>(probe: u32, sections: I, previous: SectionId) -> SectionId
where
    I: IntoIterator<Item = (SectionId, Option<SectionMetrics>)>,
{
    sections
        .into_iter()
        .find(|(_, metrics)| metrics.is_some_and(|m| m.contains(probe)))
        .map_or(previous, |(id, _)| id)
}

#[derive(Clone, Debug)]
/// Owns the single "which section is active" cell.
pub struct ActiveSection {
    sections: [SectionId; 5],
    look_ahead: u32,
    active: SectionId,
}

impl Default for ActiveSection {
    fn default() -> Self {
        Self::new(DEFAULT_LOOK_AHEAD)
    }
}

impl ActiveSection {
    #[must_use]
    /// Track the fixed page sections, starting on the first one.
    pub const fn new(look_ahead: u32) -> Self {
        let sections = SectionId::ALL;
        Self {
            sections,
            look_ahead,
            active: sections[0],
        }
    }

    #[must_use]
    /// Currently highlighted section.
    pub const fn active(&self) -> SectionId {
        self.active
    }

    #[must_use]
    /// Look-ahead in layout units.
    pub const fn look_ahead(&self) -> u32 {
        self.look_ahead
    }

    #[must_use]
    /// Sections in scan order.
    pub const fn sections(&self) -> &[SectionId] {
        &self.sections
    }

    /// Re-evaluate the active section for a new scroll offset.
    ///
    /// Only the latest offset matters, so skipped intermediate positions are harmless. Returns the
    /// transition when the stored value changed; repeating an offset yields `None`.
    pub fn on_scroll(&mut self, scroll_offset: u32, layout: &impl LayoutQuery) -> Option<Transition> {
        let probe = scroll_offset.saturating_add(self.look_ahead);
        tracing::trace!(scroll_offset, probe, "scroll");

        let candidates = self.sections.iter().map(|&id| {
            let metrics = layout.metrics(id);
            if metrics.is_none() {
                tracing::trace!(section = %id, "section not laid out, skipping");
            }
            (id, metrics)
        });
        let next = compute_active(probe, candidates, self.active);

        if next == self.active {
            return None;
        }
        let transition = Transition {
            from: self.active,
            to: next,
        };
        self.active = next;
        tracing::debug!(from = %transition.from, to = %transition.to, probe, "active section changed");
        Some(transition)
    }

    /// Ask the host to bring `id` into view.
    ///
    /// The active value is left alone: the scroll offsets the host produces settle it through
    /// [`ActiveSection::on_scroll`]. A section that is not laid out is silently ignored.
    pub fn go_to(&self, id: SectionId, layout: &impl LayoutQuery, host: &mut impl ScrollHost) {
        match layout.metrics(id) {
            Some(metrics) => {
                tracing::debug!(section = %id, offset_top = metrics.offset_top, "go to");
                host.scroll_into_view(id, metrics);
            }
            None => tracing::debug!(section = %id, "go to ignored, section not laid out"),
        }
    }

    /// [`ActiveSection::go_to`] by name, returning the resolved section.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::UnknownSection`] if `name` is not one of the page's sections.
    pub fn go_to_named(
        &self,
        name: &str,
        layout: &impl LayoutQuery,
        host: &mut impl ScrollHost,
    ) -> Result<SectionId> {
        let id = name
            .parse::<SectionId>()
            .inspect_err(|e| tracing::error!(error = %e, "invalid navigation target"))?;
        self.go_to(id, layout, host);
        Ok(id)
    }
}

#[cfg(test)]
#[path = "tests/tracker.rs"]
mod tests;
