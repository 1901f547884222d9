use super::Config;
use crate::error::Error;
use crate::section::SectionId;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_empty_file_gives_defaults() {
    let file = NamedTempFile::new().unwrap();
    let config = Config::load(Some(file.path())).unwrap();

    assert_eq!(config.look_ahead, 100);
    assert_eq!(config.row_height, 20);
    assert_eq!(config.scroll_step, 3);
    assert!(config.smooth_scroll);
    assert!(config.animations);
    assert!(config.hidden_sections.is_empty());
}

#[test]
fn test_values_override_defaults() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        "look_ahead = 40\nsmooth_scroll = false\nhidden_sections = [\"skills\"]"
    )
    .unwrap();

    let config = Config::load(Some(file.path())).unwrap();
    assert_eq!(config.look_ahead, 40);
    assert!(!config.smooth_scroll);
    assert_eq!(config.row_height, 20);
    assert_eq!(config.hidden().unwrap(), vec![SectionId::Skills]);
}

#[test]
fn test_unknown_hidden_section_is_rejected() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "hidden_sections = [\"blog\"]").unwrap();

    let err = Config::load(Some(file.path())).unwrap_err();
    assert!(matches!(err, Error::Config { ref message, .. } if message.contains("blog")));
}

#[test]
fn test_zero_row_height_is_rejected() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "row_height = 0").unwrap();

    assert!(matches!(
        Config::load(Some(file.path())),
        Err(Error::Config { .. })
    ));
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.toml");

    assert!(matches!(Config::load(Some(&missing)), Err(Error::Io(_))));
}
