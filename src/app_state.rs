//! The single owner of everything the page needs between frames.
//!
//! A TUI needs one source of truth that can be interrogated and mutated as the user scrolls and
//! navigates. `AppState` holds the rendered layout, the viewport over it and the active-section
//! tracker, and makes sure every movement of the viewport is followed by a fresh tracker update so
//! the navigation highlight never lags behind the page.

use crate::config::Config;
use crate::content::Content;
use crate::error::{Error, Result};
use crate::page::PageLayout;
use crate::reveal::Reveal;
use crate::section::SectionId;
use crate::tracker::{ActiveSection, Transition};
use crate::viewport::Viewport;
use ratatui::layout::Rect;
use std::time::Instant;

/// Rows taken by the navigation bar above the page.
pub const NAV_ROWS: u16 = 3;
/// Rows taken by the help / command bar below the page.
pub const HELP_ROWS: u16 = 3;

#[derive(PartialEq, Eq, Debug)]
/// Determines how input is interpreted.
pub enum View {
    /// Scrolling and navigating the page.
    Page,
    /// Captures vim-style command input after ':' keystroke.
    Command,
}

/// Page layout, scroll position and navigation state for one session.
pub struct AppState {
    /// Text being rendered.
    pub content: Content,
    /// Effective settings after CLI overrides.
    pub config: Config,
    /// Sections left out of the page.
    pub hidden: Vec<SectionId>,
    /// Rendered document for the current terminal width.
    pub layout: PageLayout,
    /// Window onto the document.
    pub viewport: Viewport,
    /// Which section the navigation bar highlights.
    pub tracker: ActiveSection,
    /// Entrance animation progress.
    pub reveal: Reveal,
    /// Active input mode.
    pub current_view: View,
    /// Accumulates command input after ':' is pressed.
    pub command_buffer: String,
    /// Status feedback displayed in the help bar.
    pub message: Option<String>,
    /// Screen areas of the navigation entries, refreshed on every draw.
    pub nav_regions: Vec<(SectionId, Rect)>,
    /// Set once the user asks to leave.
    pub should_quit: bool,
    /// Section a smooth scroll is heading for, retargeted when the layout changes.
    pending: Option<SectionId>,
    width: u16,
    height: u16,
}

impl AppState {
    /// Lay the page out for a `width` x `height` terminal and start at the top.
    ///
    /// # Errors
    ///
    /// Returns an error if the config names a section that does not exist.
    pub fn new(content: Content, config: Config, width: u16, height: u16) -> Result<Self> {
        let hidden = config.hidden()?;
        let body_rows = Self::body_rows(height);
        let layout = PageLayout::build(&content, &hidden, width, body_rows, config.row_height);
        let viewport = Viewport::new(
            usize::from(body_rows),
            layout.len(),
            config.row_height,
            config.smooth_scroll,
        )
        .with_anchor(layout.last_section_start());
        let tracker = ActiveSection::new(config.look_ahead);
        let reveal = Reveal::new(config.animations);

        let mut state = Self {
            content,
            config,
            hidden,
            layout,
            viewport,
            tracker,
            reveal,
            current_view: View::Page,
            command_buffer: String::new(),
            message: None,
            nav_regions: Vec::new(),
            should_quit: false,
            pending: None,
            width,
            height,
        };
        state.sync();
        Ok(state)
    }

    const fn body_rows(height: u16) -> u16 {
        height.saturating_sub(NAV_ROWS + HELP_ROWS)
    }

    #[must_use]
    /// Section highlighted in the navigation bar.
    pub const fn active(&self) -> SectionId {
        self.tracker.active()
    }

    #[must_use]
    /// Whether `id` is part of the rendered page.
    pub fn is_visible_section(&self, id: SectionId) -> bool {
        !self.hidden.contains(&id)
    }

    /// Feed the current offset to the tracker and start any entrance animations now in view.
    fn sync(&mut self) {
        if let Some(Transition { to, .. }) = self
            .tracker
            .on_scroll(self.viewport.offset_units(), &self.layout)
        {
            // The navigation message is stale once its target is highlighted.
            if self.pending == Some(to) {
                self.message = None;
            }
        }
        self.reveal
            .observe(self.layout.blocks(), &self.viewport.visible(), Instant::now());
    }

    fn after_scroll(&mut self, moved: bool) {
        if moved {
            self.sync();
        }
    }

    /// Re-render the page for a new terminal size.
    pub fn resize(&mut self, width: u16, height: u16) {
        if (width, height) == (self.width, self.height) {
            return;
        }
        self.width = width;
        self.height = height;
        let body_rows = Self::body_rows(height);
        self.layout = PageLayout::build(
            &self.content,
            &self.hidden,
            width,
            body_rows,
            self.config.row_height,
        );
        self.viewport.resize(
            usize::from(body_rows),
            self.layout.len(),
            self.layout.last_section_start(),
        );
        tracing::debug!(width, height, rows = self.layout.len(), "relayout");
        // A pending target row belongs to the old layout.
        if let Some(id) = self.pending.filter(|_| self.viewport.is_animating()) {
            self.tracker.go_to(id, &self.layout, &mut self.viewport);
        }
        // Section extents moved even if the offset did not.
        self.sync();
    }

    /// Scroll by `delta` rows (negative is up).
    pub fn scroll_lines(&mut self, delta: isize) {
        self.pending = None;
        let moved = self.viewport.scroll_by(delta);
        self.after_scroll(moved);
    }

    /// One mouse-wheel notch.
    pub fn wheel(&mut self, down: bool) {
        let step = isize::try_from(self.config.scroll_step).unwrap_or(1);
        self.scroll_lines(if down { step } else { -step });
    }

    /// One window down.
    pub fn page_down(&mut self) {
        self.pending = None;
        let moved = self.viewport.page_down();
        self.after_scroll(moved);
    }

    /// One window up.
    pub fn page_up(&mut self) {
        self.pending = None;
        let moved = self.viewport.page_up();
        self.after_scroll(moved);
    }

    /// Top of the page.
    pub fn scroll_home(&mut self) {
        self.pending = None;
        let moved = self.viewport.home();
        self.after_scroll(moved);
    }

    /// Bottom of the page.
    pub fn scroll_end(&mut self) {
        self.pending = None;
        let moved = self.viewport.end();
        self.after_scroll(moved);
    }

    /// Bring `id` into view; the highlight follows once the scroll lands.
    pub fn go_to(&mut self, id: SectionId) {
        self.tracker.go_to(id, &self.layout, &mut self.viewport);
        self.track_pending(id);
        // Without smoothing the jump has already happened.
        self.sync();
    }

    fn track_pending(&mut self, id: SectionId) {
        // Requests for hidden sections leave any scroll in flight alone.
        if self.is_visible_section(id) {
            self.pending = self.viewport.is_animating().then_some(id);
        }
    }

    /// [`AppState::go_to`] by section name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownSection`] for a name outside the page's sections.
    pub fn go_to_named(&mut self, name: &str) -> Result<SectionId> {
        let id = self
            .tracker
            .go_to_named(name, &self.layout, &mut self.viewport)?;
        self.track_pending(id);
        self.sync();
        Ok(id)
    }

    /// Go to the `n`-th section (0-based) in page order.
    pub fn go_to_index(&mut self, n: usize) {
        if let Some(&id) = SectionId::ALL.get(n) {
            self.go_to(id);
        }
    }

    #[must_use]
    /// Next visible section after the active one.
    pub fn find_next_section(&self) -> Option<SectionId> {
        let current = self.active().position();
        SectionId::ALL
            .into_iter()
            .skip(current + 1)
            .find(|&id| self.is_visible_section(id))
    }

    #[must_use]
    /// Visible section before the active one.
    pub fn find_prev_section(&self) -> Option<SectionId> {
        let current = self.active().position();
        SectionId::ALL[..current]
            .iter()
            .rev()
            .copied()
            .find(|&id| self.is_visible_section(id))
    }

    /// Go to the section after the active one.
    pub fn next_section(&mut self) {
        if let Some(id) = self.find_next_section() {
            self.go_to(id);
        }
    }

    /// Go to the section before the active one.
    pub fn prev_section(&mut self) {
        if let Some(id) = self.find_prev_section() {
            self.go_to(id);
        }
    }

    /// Handle a left click at a screen position; clicks on nav entries navigate.
    pub fn click(&mut self, column: u16, row: u16) {
        let hit = self
            .nav_regions
            .iter()
            .find(|(_, area)| {
                area.x <= column
                    && column < area.x + area.width
                    && area.y <= row
                    && row < area.y + area.height
            })
            .map(|(id, _)| *id);
        if let Some(id) = hit {
            self.go_to(id);
        }
    }

    /// Advance animations by one frame.
    pub fn tick(&mut self) {
        let moved = self.viewport.tick();
        self.after_scroll(moved);
        if !self.viewport.is_animating() {
            self.pending = None;
        }
    }

    /// Switch to the command bar.
    pub fn enter_command(&mut self) {
        self.current_view = View::Command;
        self.command_buffer.clear();
        self.message = None;
    }

    /// Leave the command bar without running anything.
    pub fn cancel_command(&mut self) {
        self.current_view = View::Page;
        self.command_buffer.clear();
    }

    /// Run whatever is in the command buffer and return to the page.
    ///
    /// Failures are reported in the help bar rather than returned.
    pub fn submit_command(&mut self) {
        let cmd = std::mem::take(&mut self.command_buffer);
        self.current_view = View::Page;
        if let Err(e) = self.run_command(cmd.trim()) {
            self.message = Some(e.to_string());
        }
    }

    /// Execute one command-bar command.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown command or navigation target.
    pub fn run_command(&mut self, cmd: &str) -> Result<()> {
        let mut parts = cmd.split_whitespace();
        match (parts.next(), parts.next(), parts.next()) {
            (Some("q" | "quit"), None, None) => self.should_quit = true,
            (Some("goto" | "g"), Some(name), None) => {
                let id = self.go_to_named(name)?;
                self.message = if self.active() == id {
                    None
                } else if self.is_visible_section(id) {
                    Some(format!("Going to {}", id.nav_label()))
                } else {
                    Some(format!("{} is hidden", id.nav_label()))
                };
            }
            (Some("top"), None, None) => self.scroll_home(),
            (Some("bottom"), None, None) => self.scroll_end(),
            _ => return Err(Error::UnknownCommand(cmd.to_string())),
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/app_state.rs"]
mod tests;
