//! Section identifiers and the metrics observed for them at query time.
//!
//! The page is divided into a fixed, closed set of vertically stacked sections. Their order is
//! the scan order used when deciding which one is active. Positions are never stored alongside
//! the identifier: they belong to whatever layout is current when the question is asked.

use crate::error::Error;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
/// One of the named regions of the page.
pub enum SectionId {
    /// Banner with name, tagline and the two call-to-action buttons.
    Hero,
    /// Short biography paragraph.
    About,
    /// Project cards.
    Projects,
    /// Skill groups rendered as badges.
    Skills,
    /// Contact links.
    Contact,
}

impl SectionId {
    /// Every section, in page order.
    pub const ALL: [Self; 5] = [
        Self::Hero,
        Self::About,
        Self::Projects,
        Self::Skills,
        Self::Contact,
    ];

    #[must_use]
    /// Stable lowercase identifier, as used in config files and commands.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::About => "about",
            Self::Projects => "projects",
            Self::Skills => "skills",
            Self::Contact => "contact",
        }
    }

    #[must_use]
    /// Text shown for this section in the navigation bar.
    pub const fn nav_label(self) -> &'static str {
        match self {
            Self::Hero => "Home",
            Self::About => "About",
            Self::Projects => "Projects",
            Self::Skills => "Skills",
            Self::Contact => "Contact",
        }
    }

    #[must_use]
    /// Position of this section in [`SectionId::ALL`].
    pub fn position(self) -> usize {
        Self::ALL
            .iter()
            .position(|&id| id == self)
            .unwrap_or_default()
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownSection(s.to_string()))
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
/// Vertical extent of a rendered section, in layout units.
pub struct SectionMetrics {
    /// Distance from the document top to the section's top edge.
    pub offset_top: u32,
    /// Section height; always positive for a laid-out section.
    pub height: u32,
}

impl SectionMetrics {
    #[must_use]
    /// Whether `probe` falls inside `[offset_top, offset_top + height)`.
    pub fn contains(&self, probe: u32) -> bool {
        // Widen so a section ending at u32::MAX cannot wrap.
        let end = u64::from(self.offset_top) + u64::from(self.height);
        self.offset_top <= probe && u64::from(probe) < end
    }
}

#[cfg(test)]
#[path = "tests/section.rs"]
mod tests;
