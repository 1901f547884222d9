//! folio: a single-page portfolio for the terminal.
//!
//! The page is a fixed navigation bar over a scrolled column of sections. As the reader scrolls,
//! [`tracker::ActiveSection`] decides which section is current and the navigation bar follows.
#![allow(clippy::multiple_crate_versions)]

pub mod app_state;
pub mod config;
pub mod content;
pub mod error;
pub mod logging;
pub mod page;
pub mod reveal;
pub mod section;
pub mod terminal;
pub mod tracker;
pub mod ui;
pub mod viewport;

pub use error::{Error, Result};
