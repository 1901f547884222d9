use super::{AppState, View};
use crate::config::Config;
use crate::content::Content;
use crate::error::Error;
use crate::section::SectionId;
use crate::tracker::LayoutQuery;

fn app_with(config: Config) -> AppState {
    AppState::new(Content::default(), config, 80, 30).unwrap()
}

fn app() -> AppState {
    app_with(Config::default())
}

fn settle(app: &mut AppState) {
    let mut ticks = 0;
    while app.viewport.is_animating() {
        app.tick();
        ticks += 1;
        assert!(ticks < 500, "smooth scroll should settle");
    }
}

#[test]
fn test_starts_at_the_top_on_home() {
    let app = app();
    assert_eq!(app.active(), SectionId::Hero);
    assert_eq!(app.viewport.offset(), 0);
    assert_eq!(app.current_view, View::Page);
}

#[test]
fn test_go_to_projects_converges() {
    let mut app = app();

    app.go_to(SectionId::Projects);
    assert_eq!(app.active(), SectionId::Hero, "highlight waits for the scroll");

    settle(&mut app);
    assert_eq!(app.active(), SectionId::Projects);

    let top = app.layout.section_rows(SectionId::Projects).unwrap().start;
    assert_eq!(app.viewport.offset(), top);
}

#[test]
fn test_go_to_every_section_converges() {
    let mut app = app();
    for id in SectionId::ALL.into_iter().rev() {
        app.go_to(id);
        settle(&mut app);
        assert_eq!(app.active(), id);
    }
}

#[test]
fn test_go_to_without_smoothing_is_immediate() {
    let mut app = app_with(Config {
        smooth_scroll: false,
        ..Config::default()
    });

    app.go_to(SectionId::Skills);
    assert_eq!(app.active(), SectionId::Skills);
}

#[test]
fn test_scrolling_updates_highlight() {
    let mut app = app();
    let about = app.layout.metrics(SectionId::About).unwrap();
    let row_height = app.layout.row_height();
    let look_ahead_rows = usize::try_from(app.config.look_ahead / row_height).unwrap();
    let about_row = usize::try_from(about.offset_top / row_height).unwrap();

    // one row short of the probe reaching about
    app.scroll_lines(isize::try_from(about_row - look_ahead_rows - 1).unwrap());
    assert_eq!(app.active(), SectionId::Hero);

    app.scroll_lines(1);
    assert_eq!(app.active(), SectionId::About);

    app.scroll_lines(-1);
    assert_eq!(app.active(), SectionId::Hero);
}

#[test]
fn test_next_and_prev_skip_hidden_sections() {
    let mut app = app_with(Config {
        smooth_scroll: false,
        hidden_sections: vec!["about".to_string()],
        ..Config::default()
    });

    assert_eq!(app.find_next_section(), Some(SectionId::Projects));
    app.next_section();
    assert_eq!(app.active(), SectionId::Projects);
    assert_eq!(app.find_prev_section(), Some(SectionId::Hero));

    // a hidden target is ignored
    let before = app.viewport.offset();
    app.go_to(SectionId::About);
    assert_eq!(app.viewport.offset(), before);
    assert_eq!(app.active(), SectionId::Projects);
}

#[test]
fn test_goto_command() {
    let mut app = app_with(Config {
        smooth_scroll: false,
        ..Config::default()
    });

    app.enter_command();
    app.command_buffer.push_str("goto contact");
    app.submit_command();

    assert_eq!(app.current_view, View::Page);
    assert_eq!(app.active(), SectionId::Contact);
    assert!(app.command_buffer.is_empty());
}

#[test]
fn test_bad_commands_report_errors() {
    let mut app = app();

    assert!(matches!(
        app.run_command("goto blog"),
        Err(Error::UnknownSection(_))
    ));
    assert!(matches!(
        app.run_command("dance"),
        Err(Error::UnknownCommand(_))
    ));

    app.enter_command();
    app.command_buffer.push_str("goto blog");
    app.submit_command();
    assert!(app.message.as_deref().is_some_and(|m| m.contains("blog")));
    assert_eq!(app.active(), SectionId::Hero);
}

#[test]
fn test_quit_command() {
    let mut app = app();
    app.run_command("q").unwrap();
    assert!(app.should_quit);
}

#[test]
fn test_resize_keeps_state_consistent() {
    let mut app = app_with(Config {
        smooth_scroll: false,
        ..Config::default()
    });
    app.go_to(SectionId::Skills);
    app.resize(40, 20);

    assert!(app.viewport.offset() <= app.viewport.max_offset());
    let rows = app.layout.section_rows(app.active()).unwrap();
    assert!(!rows.is_empty());
}

#[test]
fn test_click_on_nav_entry_navigates() {
    let mut app = app_with(Config {
        smooth_scroll: false,
        ..Config::default()
    });
    app.nav_regions = vec![(SectionId::Skills, ratatui::layout::Rect::new(50, 1, 6, 1))];

    app.click(10, 1);
    assert_eq!(app.active(), SectionId::Hero);

    app.click(52, 1);
    assert_eq!(app.active(), SectionId::Skills);
}

#[test]
fn test_go_to_survives_resize_mid_scroll() {
    let mut app = app();

    app.go_to(SectionId::Contact);
    app.tick();
    assert!(app.viewport.is_animating());

    app.resize(30, 30);
    settle(&mut app);

    let top = app.layout.section_rows(SectionId::Contact).unwrap().start;
    assert_eq!(app.viewport.offset(), top);
    assert_eq!(app.active(), SectionId::Contact);
}

#[test]
fn test_manual_scroll_drops_resize_retarget() {
    let mut app = app();

    app.go_to(SectionId::Contact);
    app.tick();
    app.scroll_lines(1);
    let offset = app.viewport.offset();

    app.resize(30, 30);
    assert!(!app.viewport.is_animating());
    assert!(app.viewport.offset() <= offset);
}

#[test]
fn test_goto_hidden_section_says_so() {
    let mut app = app_with(Config {
        hidden_sections: vec!["skills".to_string()],
        ..Config::default()
    });

    app.run_command("goto skills").unwrap();
    assert_eq!(app.message.as_deref(), Some("Skills is hidden"));
    assert_eq!(app.viewport.offset(), 0);
    assert_eq!(app.active(), SectionId::Hero);
}

#[test]
fn test_commands_reject_trailing_words() {
    let mut app = app();

    for cmd in ["goto projects now please", "q now", "top please", "bottom 2"] {
        assert!(
            matches!(app.run_command(cmd), Err(Error::UnknownCommand(_))),
            "{cmd} should be rejected"
        );
    }
    assert_eq!(app.active(), SectionId::Hero);
    assert!(!app.viewport.is_animating());
    assert!(!app.should_quit);
}

#[test]
fn test_goto_message_clears_on_arrival() {
    let mut app = app();

    app.run_command("goto projects").unwrap();
    assert_eq!(app.message.as_deref(), Some("Going to Projects"));

    settle(&mut app);
    assert_eq!(app.active(), SectionId::Projects);
    assert_eq!(app.message, None);
}

#[test]
fn test_goto_without_smoothing_leaves_no_message() {
    let mut app = app_with(Config {
        smooth_scroll: false,
        ..Config::default()
    });

    app.run_command("g skills").unwrap();
    assert_eq!(app.active(), SectionId::Skills);
    assert_eq!(app.message, None);
}
