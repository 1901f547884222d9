//! Configuration to acknowledge user preferences as well as set defaults.
//!
//! Specifically, we look for a folio.toml (or the file passed with `--config`), and if present we
//! load settings from there. This provides the tracking look-ahead, scrolling behaviour, animation
//! toggles and the sections to leave out of the page.

use crate::error::{Error, Result};
use crate::section::SectionId;
use crate::tracker::DEFAULT_LOOK_AHEAD;
use facet::Facet;
use std::fs;
use std::io;
use std::path::Path;

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "folio.toml";

#[derive(Facet, Clone, Debug)]
/// User preferences loaded from folio.toml or falling back to defaults.
pub struct Config {
    #[facet(default = DEFAULT_LOOK_AHEAD)]
    /// Units added to the scroll offset before probing for the active section.
    pub look_ahead: u32,
    #[facet(default = 20)]
    /// Layout units per terminal row.
    pub row_height: u32,
    #[facet(default = 3)]
    /// Rows moved per mouse wheel notch.
    pub scroll_step: u16,
    #[facet(default = true)]
    /// Animate navigation jumps instead of snapping.
    pub smooth_scroll: bool,
    #[facet(default = 16)]
    /// Event-loop tick in milliseconds.
    pub tick_ms: u64,
    #[facet(default = true)]
    /// Play entrance animations when blocks first come into view.
    pub animations: bool,
    #[facet(default = Vec::new())]
    /// Sections left out of the page, by identifier.
    pub hidden_sections: Vec<String>,
}

impl Config {
    /// Load configuration from `path`, or from folio.toml if no path is given.
    ///
    /// A missing default file yields the defaults; a missing explicit file is an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, does not parse, or names an unknown section.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, explicit) = match path {
            Some(path) => (path, true),
            None => (Path::new(DEFAULT_CONFIG_FILE), false),
        };

        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound && !explicit => String::new(),
            Err(e) => return Err(e.into()),
        };

        let config = Self::parse(&contents).map_err(|message| Error::Config {
            path: path.to_path_buf(),
            message,
        })?;
        Ok(config)
    }

    fn parse(contents: &str) -> std::result::Result<Self, String> {
        let config = facet_toml::from_str::<Self>(contents).map_err(|e| e.to_string())?;
        if config.row_height == 0 {
            return Err("row_height must be positive".to_string());
        }
        config.hidden().map_err(|e| e.to_string())?;
        Ok(config)
    }

    /// Sections named in `hidden_sections`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownSection`] for a name outside the page's sections.
    pub fn hidden(&self) -> Result<Vec<SectionId>> {
        self.hidden_sections
            .iter()
            .map(|name| name.parse::<SectionId>())
            .collect()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            look_ahead: DEFAULT_LOOK_AHEAD,
            row_height: 20,
            scroll_step: 3,
            smooth_scroll: true,
            tick_ms: 16,
            animations: true,
            hidden_sections: Vec::new(),
        }
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
