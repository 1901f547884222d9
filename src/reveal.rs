//! One-shot entrance animations.
//!
//! A block starts animating the first time any of its rows is on screen and is never replayed,
//! even if it scrolls away and back. Cards are staggered by their position within the section.

use crate::page::Block;
use crate::section::SectionId;
use std::collections::HashMap;
use std::ops::Range;
use std::time::{Duration, Instant};

/// How long a block takes to fade in.
pub const DURATION: Duration = Duration::from_millis(800);
/// Extra delay per card within a section.
pub const STAGGER: Duration = Duration::from_millis(200);

#[derive(Clone, Copy, PartialEq, Debug)]
/// How far along a block's entrance is.
pub enum Phase {
    /// Not shown yet.
    Hidden,
    /// Fading in.
    Entering,
    /// Fully visible.
    Shown,
}

#[derive(Debug, Default)]
/// Start times of every block that has entered the viewport.
pub struct Reveal {
    disabled: bool,
    started: HashMap<(SectionId, usize), Instant>,
}

impl Reveal {
    #[must_use]
    /// Track entrances; with `enabled` false every block is shown immediately.
    pub fn new(enabled: bool) -> Self {
        Self {
            disabled: !enabled,
            started: HashMap::new(),
        }
    }

    /// Start the animation of every block intersecting `visible` that has not played yet.
    pub fn observe(&mut self, blocks: &[Block], visible: &Range<usize>, now: Instant) {
        if self.disabled {
            return;
        }
        for block in blocks {
            let on_screen = block.rows.start < visible.end && visible.start < block.rows.end;
            if !on_screen {
                continue;
            }
            self.started
                .entry((block.section, block.index))
                .or_insert_with(|| {
                    tracing::trace!(section = %block.section, index = block.index, "reveal");
                    now + Self::delay(block.index)
                });
        }
    }

    #[must_use]
    /// Fraction of the entrance completed, from 0.0 to 1.0.
    pub fn progress(&self, section: SectionId, index: usize, now: Instant) -> f32 {
        if self.disabled {
            return 1.0;
        }
        let Some(&start) = self.started.get(&(section, index)) else {
            return 0.0;
        };
        let elapsed = now.saturating_duration_since(start);
        (elapsed.as_secs_f32() / DURATION.as_secs_f32()).min(1.0)
    }

    #[must_use]
    /// Coarse phase used for styling.
    pub fn phase(&self, section: SectionId, index: usize, now: Instant) -> Phase {
        match self.progress(section, index, now) {
            p if p >= 1.0 => Phase::Shown,
            p if p >= 0.25 => Phase::Entering,
            _ => Phase::Hidden,
        }
    }

    #[must_use]
    /// Whether `section`'s block `index` has been triggered.
    pub fn has_started(&self, section: SectionId, index: usize) -> bool {
        self.disabled || self.started.contains_key(&(section, index))
    }

    fn delay(index: usize) -> Duration {
        // The intro block (index 0) and the first card share no delay.
        let steps = u32::try_from(index.saturating_sub(1)).unwrap_or(u32::MAX);
        STAGGER.saturating_mul(steps)
    }
}

#[cfg(test)]
#[path = "tests/reveal.rs"]
mod tests;
