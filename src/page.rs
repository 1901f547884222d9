//! Lays the portfolio out as one tall column of terminal lines.
//!
//! The page is rendered eagerly at the current terminal width: every section becomes a run of
//! [`Line`]s, and we remember which rows each section (and each animated block inside it) covers.
//! Those row ranges are what the tracker sees as section metrics, scaled to layout units.
//! Hidden sections are simply not laid out, so they report no metrics at all.

use crate::content::{Contact, Content, Project, SkillGroup};
use crate::section::{SectionId, SectionMetrics};
use crate::tracker::LayoutQuery;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use std::ops::Range;

/// Widest the text column gets, however wide the terminal.
const MAX_CONTENT_WIDTH: usize = 72;
/// Blank rows above and below each non-hero section.
const SECTION_PADDING: usize = 2;

const ACCENT: Color = Color::Blue;
const MUTED: Color = Color::Gray;
const BORDER: Color = Color::DarkGray;

#[derive(Clone, Debug, PartialEq, Eq)]
/// A run of rows that animates into view as a unit.
pub struct Block {
    /// Section the block belongs to.
    pub section: SectionId,
    /// 0 for the section's intro, then 1.. for each card in order.
    pub index: usize,
    /// Rows covered, relative to the document top.
    pub rows: Range<usize>,
}

/// The rendered document and the positions of everything in it.
pub struct PageLayout {
    lines: Vec<Line<'static>>,
    sections: Vec<(SectionId, Range<usize>)>,
    blocks: Vec<Block>,
    row_height: u32,
}

impl PageLayout {
    #[must_use]
    /// Render `content` for a terminal `width` columns wide.
    ///
    /// `viewport_rows` is the height of the scrolled area; the hero is at least that tall.
    pub fn build(
        content: &Content,
        hidden: &[SectionId],
        width: u16,
        viewport_rows: u16,
        row_height: u32,
    ) -> Self {
        let mut page = Builder::new(usize::from(width));

        for id in SectionId::ALL {
            if hidden.contains(&id) {
                continue;
            }
            page.begin_section(id);
            match id {
                SectionId::Hero => hero(&mut page, content, usize::from(viewport_rows)),
                SectionId::About => {
                    page.blank(SECTION_PADDING);
                    page.block(0, |p| {
                        p.heading(&content.about.heading);
                        p.blank(1);
                        p.centered_text(&content.about.body, Style::default().fg(MUTED));
                    });
                    page.blank(SECTION_PADDING);
                }
                SectionId::Projects => {
                    page.blank(SECTION_PADDING);
                    page.block(0, |p| {
                        p.heading(&content.projects.heading);
                        p.blank(1);
                        p.centered_text(&content.projects.subtitle, Style::default().fg(MUTED));
                    });
                    for (i, project) in content.projects.items.iter().enumerate() {
                        page.blank(1);
                        page.block(i + 1, |p| project_card(p, project));
                    }
                    page.blank(SECTION_PADDING);
                }
                SectionId::Skills => {
                    page.blank(SECTION_PADDING);
                    page.block(0, |p| {
                        p.heading(&content.skills.heading);
                        p.blank(1);
                        p.centered_text(&content.skills.subtitle, Style::default().fg(MUTED));
                    });
                    for (i, group) in content.skills.groups.iter().enumerate() {
                        page.blank(1);
                        page.block(i + 1, |p| skill_card(p, group));
                    }
                    page.blank(SECTION_PADDING);
                }
                SectionId::Contact => {
                    page.blank(SECTION_PADDING);
                    page.block(0, |p| contact(p, &content.contact));
                    page.blank(SECTION_PADDING);
                }
            }
            page.end_section();
        }

        page.footer(&content.footer);
        page.finish(row_height)
    }

    #[must_use]
    /// Every row of the document, top to bottom.
    pub fn lines(&self) -> &[Line<'static>] {
        &self.lines
    }

    #[must_use]
    /// Total document height in rows.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    /// Whether nothing at all was rendered.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    #[must_use]
    /// Animated blocks in document order.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    #[must_use]
    /// Block covering `row`, if any.
    pub fn block_at(&self, row: usize) -> Option<&Block> {
        self.blocks.iter().find(|b| b.rows.contains(&row))
    }

    #[must_use]
    /// Rows covered by `id`, or `None` if the section is hidden.
    pub fn section_rows(&self, id: SectionId) -> Option<Range<usize>> {
        self.sections
            .iter()
            .find(|(section, _)| *section == id)
            .map(|(_, rows)| rows.clone())
    }

    #[must_use]
    /// First row of the last laid-out section, or 0 when there is none.
    pub fn last_section_start(&self) -> usize {
        self.sections.last().map_or(0, |(_, rows)| rows.start)
    }

    #[must_use]
    /// Layout units per row.
    pub const fn row_height(&self) -> u32 {
        self.row_height
    }

    #[must_use]
    /// Convert a row count to layout units.
    pub fn units(&self, rows: usize) -> u32 {
        u32::try_from(rows)
            .unwrap_or(u32::MAX)
            .saturating_mul(self.row_height)
    }
}

impl LayoutQuery for PageLayout {
    fn metrics(&self, id: SectionId) -> Option<SectionMetrics> {
        let rows = self.section_rows(id)?;
        Some(SectionMetrics {
            offset_top: self.units(rows.start),
            height: self.units(rows.len()),
        })
    }
}

/// Accumulates lines and records section and block extents as they are written.
struct Builder {
    width: usize,
    inner: usize,
    lines: Vec<Line<'static>>,
    sections: Vec<(SectionId, Range<usize>)>,
    blocks: Vec<Block>,
    current: Option<(SectionId, usize)>,
}

impl Builder {
    fn new(width: usize) -> Self {
        Self {
            width,
            inner: width.saturating_sub(4).clamp(1, MAX_CONTENT_WIDTH),
            lines: Vec::new(),
            sections: Vec::new(),
            blocks: Vec::new(),
            current: None,
        }
    }

    fn row(&self) -> usize {
        self.lines.len()
    }

    fn push(&mut self, line: Line<'static>) {
        self.lines.push(line);
    }

    fn blank(&mut self, rows: usize) {
        for _ in 0..rows {
            self.push(Line::default());
        }
    }

    fn begin_section(&mut self, id: SectionId) {
        self.current = Some((id, self.row()));
    }

    fn end_section(&mut self) {
        if let Some((id, start)) = self.current.take() {
            // Sections always occupy at least one row.
            if self.row() == start {
                self.blank(1);
            }
            self.sections.push((id, start..self.row()));
        }
    }

    fn block(&mut self, index: usize, body: impl FnOnce(&mut Self)) {
        let start = self.row();
        body(self);
        if let Some((section, _)) = self.current {
            self.blocks.push(Block {
                section,
                index,
                rows: start..self.row(),
            });
        }
    }

    fn heading(&mut self, text: &str) {
        let style = Style::default().add_modifier(Modifier::BOLD);
        self.centered_text(text, style);
    }

    fn centered_text(&mut self, text: &str, style: Style) {
        for line in wrap(text, self.inner) {
            self.push(Line::styled(line, style).centered());
        }
    }

    fn centered_spans(&mut self, rows: Vec<Vec<Span<'static>>>) {
        for spans in rows {
            self.push(Line::from(spans).centered());
        }
    }

    /// Box with `header` on the first row and `body` below, as wide as the text column.
    fn card(&mut self, header: Vec<Span<'static>>, body: Vec<Vec<Span<'static>>>) {
        let border = Style::default().fg(BORDER);
        let card_width = self.inner.max(4);
        let inner_width = card_width - 4;
        let rule = "─".repeat(card_width - 2);

        self.push(Line::styled(format!("┌{rule}┐"), border).centered());
        for spans in std::iter::once(header).chain(body) {
            let used: usize = spans.iter().map(Span::width).sum();
            let mut row = vec![Span::styled("│ ", border)];
            row.extend(spans);
            row.push(Span::raw(" ".repeat(inner_width.saturating_sub(used))));
            row.push(Span::styled(" │", border));
            self.push(Line::from(row).centered());
        }
        self.push(Line::styled(format!("└{rule}┘"), border).centered());
    }

    fn footer(&mut self, text: &str) {
        let muted = Style::default().fg(MUTED);
        self.push(Line::styled("─".repeat(self.width), Style::default().fg(BORDER)));
        self.blank(1);
        self.centered_text(text, muted);
        self.blank(1);
    }

    fn finish(self, row_height: u32) -> PageLayout {
        PageLayout {
            lines: self.lines,
            sections: self.sections,
            blocks: self.blocks,
            row_height,
        }
    }
}

fn hero(page: &mut Builder, content: &Content, min_rows: usize) {
    let hero = &content.hero;
    let mut body = Builder::new(page.width);
    body.centered_text(&hero.title, Style::default().add_modifier(Modifier::BOLD));
    body.centered_text(
        &hero.highlight,
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
    );
    body.blank(1);
    body.centered_text(&hero.tagline, Style::default().fg(MUTED));
    body.blank(1);
    let buttons = [
        Span::styled(
            " View My Work (w) ",
            Style::default().fg(Color::White).bg(ACCENT),
        ),
        Span::styled(
            "[ Get In Touch (c) ]",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
    ];
    body.centered_spans(flow(buttons, "   ", body.inner));

    let spare = min_rows.saturating_sub(body.row());
    let above = spare / 2;
    page.block(0, |p| {
        p.blank(above);
        p.lines.extend(body.lines);
        p.blank(spare - above);
    });
}

fn project_card(page: &mut Builder, project: &Project) {
    let header = vec![
        Span::styled(project.icon.clone(), Style::default().fg(ACCENT)),
        Span::raw(" "),
        Span::styled(
            project.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ];
    let inner = page.inner.saturating_sub(4).max(1);
    let muted = Style::default().fg(MUTED);

    let mut body: Vec<Vec<Span<'static>>> = wrap(&project.description, inner)
        .into_iter()
        .map(|line| vec![Span::styled(line, muted)])
        .collect();
    body.push(Vec::new());
    body.extend(flow(
        project.tech.iter().map(|t| badge(t, Style::default().bg(BORDER))),
        " ",
        inner,
    ));
    body.push(Vec::new());
    body.push(vec![
        Span::styled("View Project ↗ ", Style::default().fg(ACCENT)),
        Span::styled(project.link.clone(), muted),
    ]);

    page.card(header, body);
}

fn skill_card(page: &mut Builder, group: &SkillGroup) {
    let header = vec![Span::styled(
        group.category.clone(),
        Style::default().add_modifier(Modifier::BOLD),
    )];
    let inner = page.inner.saturating_sub(4).max(1);
    let mut body = vec![Vec::new()];
    body.extend(flow(
        group
            .items
            .iter()
            .map(|s| badge(s, Style::default().fg(ACCENT))),
        " ",
        inner,
    ));
    page.card(header, body);
}

fn contact(page: &mut Builder, contact: &Contact) {
    page.heading(&contact.heading);
    page.blank(1);
    page.centered_text(&contact.blurb, Style::default().fg(MUTED));
    page.blank(1);

    let buttons = contact.links.iter().enumerate().map(|(i, link)| {
        let style = if i == 0 {
            Style::default().fg(Color::White).bg(ACCENT)
        } else {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        };
        Span::styled(format!("[ {} ]", link.label), style)
    });
    page.centered_spans(flow(buttons, "  ", page.inner));

    let urls: Vec<&str> = contact.links.iter().map(|l| l.url.as_str()).collect();
    if !urls.is_empty() {
        page.blank(1);
        page.centered_text(&urls.join("  ·  "), Style::default().fg(BORDER));
    }
}

fn badge(text: &str, style: Style) -> Span<'static> {
    Span::styled(format!(" {text} "), style)
}

/// Pack spans into rows no wider than `width`, separated by `gap`.
fn flow(
    items: impl IntoIterator<Item = Span<'static>>,
    gap: &'static str,
    width: usize,
) -> Vec<Vec<Span<'static>>> {
    let gap_width = Span::raw(gap).width();
    let mut rows: Vec<Vec<Span<'static>>> = Vec::new();
    let mut row: Vec<Span<'static>> = Vec::new();
    let mut used = 0;

    for item in items {
        let w = item.width();
        if !row.is_empty() && used + gap_width + w > width {
            rows.push(std::mem::take(&mut row));
            used = 0;
        }
        if !row.is_empty() {
            row.push(Span::raw(gap));
            used += gap_width;
        }
        used += w;
        row.push(item);
    }
    if !row.is_empty() {
        rows.push(row);
    }
    rows
}

#[must_use]
/// Greedy word wrap to `width` display columns; words longer than a line are split.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut used = 0;

    for word in text.split_whitespace() {
        let mut word = word;
        let mut w = Span::raw(word).width();

        if used > 0 && used + 1 + w > width {
            lines.push(std::mem::take(&mut line));
            used = 0;
        }
        // Only reached on a fresh line.
        while w > width {
            let cut = split_at_width(word, width);
            lines.push(word[..cut].to_string());
            word = &word[cut..];
            w = Span::raw(word).width();
        }
        if word.is_empty() {
            continue;
        }
        if used > 0 {
            line.push(' ');
            used += 1;
        }
        line.push_str(word);
        used += w;
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Largest char boundary in `word` whose prefix fits in `width` columns (at least one char).
fn split_at_width(word: &str, width: usize) -> usize {
    let mut used = 0;
    let mut cut = 0;
    for (i, ch) in word.char_indices() {
        let w = Span::raw(&word[i..i + ch.len_utf8()]).width();
        if used + w > width && cut > 0 {
            break;
        }
        used += w;
        cut = i + ch.len_utf8();
    }
    cut
}

#[cfg(test)]
#[path = "tests/page.rs"]
mod tests;
