//! The visible window onto the page and its scroll position.
//!
//! Offsets are kept in rows. Every method that can move the window reports whether it did, so the
//! caller knows when to feed a fresh offset to the tracker. Navigation jumps set a target which
//! [`Viewport::tick`] approaches a little at a time, easing out as it gets close.
//!
//! The window may scroll past the end of the document until the anchor row (the top of the last
//! section) reaches the top, so a short final section can still be brought fully into view.

use crate::section::{SectionId, SectionMetrics};
use crate::tracker::ScrollHost;
use std::ops::Range;

#[derive(Clone, Debug)]
/// Scroll state for the page body.
pub struct Viewport {
    offset: usize,
    height: usize,
    content_rows: usize,
    anchor: usize,
    row_height: u32,
    smooth: bool,
    target: Option<usize>,
}

impl Viewport {
    #[must_use]
    /// Window `height` rows tall over a document `content_rows` long.
    pub fn new(height: usize, content_rows: usize, row_height: u32, smooth: bool) -> Self {
        Self {
            offset: 0,
            height,
            content_rows,
            anchor: 0,
            row_height: row_height.max(1),
            smooth,
            target: None,
        }
    }

    #[must_use]
    /// Allow scrolling until `row` is at the top of the window.
    pub const fn with_anchor(mut self, row: usize) -> Self {
        self.anchor = row;
        self
    }

    #[must_use]
    /// First visible row.
    pub const fn offset(&self) -> usize {
        self.offset
    }

    #[must_use]
    /// Largest offset that still fills the window, or reaches the anchor.
    pub fn max_offset(&self) -> usize {
        self.content_rows
            .saturating_sub(self.height)
            .max(self.anchor.min(self.content_rows))
    }

    #[must_use]
    /// Current offset in layout units, as the tracker expects it.
    pub fn offset_units(&self) -> u32 {
        u32::try_from(self.offset)
            .unwrap_or(u32::MAX)
            .saturating_mul(self.row_height)
    }

    #[must_use]
    /// Rows currently on screen.
    pub fn visible(&self) -> Range<usize> {
        let end = (self.offset + self.height).min(self.content_rows);
        self.offset.min(end)..end
    }

    #[must_use]
    /// Whether a smooth scroll is still under way.
    pub const fn is_animating(&self) -> bool {
        self.target.is_some()
    }

    /// Adopt new dimensions after a resize or relayout, keeping the offset in range.
    pub fn resize(&mut self, height: usize, content_rows: usize, anchor: usize) -> bool {
        self.height = height;
        self.content_rows = content_rows;
        self.anchor = anchor;
        let max = self.max_offset();
        self.target = self.target.map(|t| t.min(max));
        self.set_offset(self.offset.min(max))
    }

    /// Move by `delta` rows, cancelling any smooth scroll in progress.
    pub fn scroll_by(&mut self, delta: isize) -> bool {
        self.target = None;
        let next = self.offset.saturating_add_signed(delta).min(self.max_offset());
        self.set_offset(next)
    }

    /// Jump to `row`, clamped to the scrollable range.
    pub fn scroll_to(&mut self, row: usize) -> bool {
        self.target = None;
        self.set_offset(row.min(self.max_offset()))
    }

    /// Down by one window, keeping a two-row overlap.
    pub fn page_down(&mut self) -> bool {
        self.scroll_by(Self::page_step(self.height))
    }

    /// Up by one window, keeping a two-row overlap.
    pub fn page_up(&mut self) -> bool {
        self.scroll_by(-Self::page_step(self.height))
    }

    /// Top of the document.
    pub fn home(&mut self) -> bool {
        self.scroll_to(0)
    }

    /// Bottom of the document.
    pub fn end(&mut self) -> bool {
        self.scroll_to(self.max_offset())
    }

    /// Advance a pending smooth scroll by one step.
    pub fn tick(&mut self) -> bool {
        let Some(target) = self.target else {
            return false;
        };
        let distance = target.abs_diff(self.offset);
        let step = (distance / 4).max(1).min(distance);
        let next = if target > self.offset {
            self.offset + step
        } else {
            self.offset - step
        };
        if next == target {
            self.target = None;
        }
        self.set_offset(next)
    }

    fn page_step(height: usize) -> isize {
        isize::try_from(height.saturating_sub(2).max(1)).unwrap_or(isize::MAX)
    }

    fn set_offset(&mut self, offset: usize) -> bool {
        let changed = offset != self.offset;
        self.offset = offset;
        changed
    }
}

impl ScrollHost for Viewport {
    fn scroll_into_view(&mut self, id: SectionId, metrics: SectionMetrics) {
        let row = usize::try_from(metrics.offset_top / self.row_height).unwrap_or(usize::MAX);
        let target = row.min(self.max_offset());
        tracing::trace!(section = %id, row, target, smooth = self.smooth, "scroll into view");

        if self.smooth && target != self.offset {
            self.target = Some(target);
        } else {
            self.target = None;
            self.offset = target;
        }
    }
}

#[cfg(test)]
#[path = "tests/viewport.rs"]
mod tests;
