//! The UI renders the application state into something visible and clickable.
//!
//! Three bands: the fixed navigation bar (with the active section highlighted), the scrolled page
//! body, and a help line that doubles as the command bar. Navigation entry positions are written
//! back into the state on every frame so mouse clicks can be resolved against what was drawn.

use crate::app_state::{AppState, View, HELP_ROWS, NAV_ROWS};
use crate::reveal::Phase;
use crate::section::SectionId;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::time::Instant;

/// Columns between navigation entries.
const NAV_GAP: u16 = 3;

const HELP: &str =
    "↑/↓: Scroll | PgUp/PgDn: Page | Tab/⇧Tab: Next/Prev | 1-5: Jump | w: Work | c: Contact | :goto <section> | q: Quit";

/// Renders the navigation bar, page body and help line.
pub fn draw(f: &mut Frame, app: &mut AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(NAV_ROWS),
            Constraint::Min(0),
            Constraint::Length(HELP_ROWS),
        ])
        .split(f.area());

    draw_nav(f, app, chunks[0]);
    draw_page(f, app, chunks[1]);
    draw_help(f, app, chunks[2]);
}

fn nav_style(app: &AppState, id: SectionId) -> Style {
    if !app.is_visible_section(id) {
        Style::default().fg(Color::DarkGray)
    } else if id == app.active() {
        Style::default()
            .fg(Color::Blue)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    } else {
        Style::default().fg(Color::Gray)
    }
}

fn draw_nav(f: &mut Frame, app: &mut AppState, area: Rect) {
    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let brand = format!(" {}", app.content.brand);
    let brand_width = u16::try_from(Span::raw(brand.as_str()).width()).unwrap_or(u16::MAX);
    f.render_widget(
        Paragraph::new(Span::styled(
            brand,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        inner,
    );

    app.nav_regions.clear();

    let widths: Vec<u16> = SectionId::ALL
        .iter()
        .map(|id| u16::try_from(id.nav_label().len()).unwrap_or(u16::MAX))
        .collect();
    let gaps = NAV_GAP * u16::try_from(widths.len().saturating_sub(1)).unwrap_or(0);
    let entries_width = widths.iter().sum::<u16>() + gaps + 1;

    // Collapse the entries entirely when they would collide with the brand.
    if inner.height == 0 || inner.width < brand_width + 2 + entries_width {
        return;
    }

    let mut x = inner.x + inner.width - entries_width;
    for (id, width) in SectionId::ALL.into_iter().zip(widths) {
        let area = Rect::new(x, inner.y, width, 1);
        f.render_widget(
            Paragraph::new(Span::styled(id.nav_label(), nav_style(app, id))),
            area,
        );
        if app.is_visible_section(id) {
            app.nav_regions.push((id, area));
        }
        x += width + NAV_GAP;
    }
}

fn draw_page(f: &mut Frame, app: &AppState, area: Rect) {
    let now = Instant::now();
    let lines = app.layout.lines();

    let visible: Vec<Line> = app
        .viewport
        .visible()
        .map(|row| {
            let line = lines[row].clone();
            let phase = app
                .layout
                .block_at(row)
                .map_or(Phase::Shown, |b| app.reveal.phase(b.section, b.index, now));
            match phase {
                Phase::Hidden => Line::default(),
                Phase::Entering => line.patch_style(Style::default().add_modifier(Modifier::DIM)),
                Phase::Shown => line,
            }
        })
        .collect();

    f.render_widget(Paragraph::new(visible), area);
}

fn draw_help(f: &mut Frame, app: &AppState, area: Rect) {
    let widget = if app.current_view == View::Command {
        Paragraph::new(format!(":{}", app.command_buffer))
            .block(Block::default().borders(Borders::ALL).title("Command"))
    } else {
        let text = app.message.clone().unwrap_or_else(|| HELP.to_string());
        let title = format!("{} ", app.active().nav_label());
        Paragraph::new(text).block(Block::default().borders(Borders::ALL).title(title))
    };
    f.render_widget(widget, area);
}

#[cfg(test)]
#[path = "tests/ui.rs"]
mod tests;
