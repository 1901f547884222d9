use super::{wrap, PageLayout};
use crate::content::Content;
use crate::section::SectionId;
use crate::tracker::LayoutQuery;

fn layout(hidden: &[SectionId], width: u16) -> PageLayout {
    PageLayout::build(&Content::default(), hidden, width, 30, 20)
}

fn text_of(layout: &PageLayout, rows: std::ops::Range<usize>) -> String {
    layout.lines()[rows]
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_sections_are_stacked_in_page_order() {
    let page = layout(&[], 80);

    let mut expected_start = 0;
    for id in SectionId::ALL {
        let rows = page.section_rows(id).unwrap();
        assert_eq!(rows.start, expected_start, "{id} should follow the previous section");
        assert!(!rows.is_empty());
        expected_start = rows.end;
    }
    // footer comes after the last section
    assert!(page.len() > expected_start);
}

#[test]
fn test_hero_fills_the_viewport() {
    let page = layout(&[], 80);
    let hero = page.section_rows(SectionId::Hero).unwrap();
    assert!(hero.len() >= 30);
    assert!(text_of(&page, hero).contains("Computer Science"));
}

#[test]
fn test_metrics_are_scaled_rows() {
    let page = layout(&[], 80);
    let rows = page.section_rows(SectionId::About).unwrap();
    let metrics = page.metrics(SectionId::About).unwrap();

    assert_eq!(metrics.offset_top, u32::try_from(rows.start).unwrap() * 20);
    assert_eq!(metrics.height, u32::try_from(rows.len()).unwrap() * 20);
}

#[test]
fn test_hidden_section_has_no_metrics() {
    let page = layout(&[SectionId::Skills], 80);

    assert!(page.metrics(SectionId::Skills).is_none());
    assert!(page.blocks().iter().all(|b| b.section != SectionId::Skills));

    let projects = page.section_rows(SectionId::Projects).unwrap();
    let contact = page.section_rows(SectionId::Contact).unwrap();
    assert_eq!(projects.end, contact.start);
}

#[test]
fn test_one_block_per_card() {
    let page = layout(&[], 80);
    let content = Content::default();

    let project_blocks: Vec<_> = page
        .blocks()
        .iter()
        .filter(|b| b.section == SectionId::Projects)
        .map(|b| b.index)
        .collect();
    assert_eq!(project_blocks.len(), content.projects.items.len() + 1);
    assert_eq!(project_blocks[0], 0);

    let card = page
        .blocks()
        .iter()
        .find(|b| b.section == SectionId::Projects && b.index == 2)
        .unwrap();
    assert!(text_of(&page, card.rows.clone()).contains("Todo List App"));
    assert_eq!(page.block_at(card.rows.start), Some(card));
}

#[test]
fn test_narrow_terminal_still_lays_out() {
    let page = layout(&[], 12);
    for id in SectionId::ALL {
        assert!(page.metrics(id).is_some_and(|m| m.height > 0));
    }
}

#[test]
fn test_wrap_respects_width() {
    let lines = wrap("the quick brown fox jumps over the lazy dog", 10);
    assert_eq!(
        lines,
        vec!["the quick", "brown fox", "jumps over", "the lazy", "dog"]
    );
    assert!(lines.iter().all(|l| l.chars().count() <= 10));
}

#[test]
fn test_wrap_splits_long_words() {
    assert_eq!(wrap("abcdefghij xy", 4), vec!["abcd", "efgh", "ij", "xy"]);
    assert!(wrap("   ", 10).is_empty());
}
