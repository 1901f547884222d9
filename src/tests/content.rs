use super::Content;
use crate::error::Error;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_default_content_matches_page() {
    let content = Content::default();
    assert_eq!(content.brand, "Portfolio");
    assert_eq!(content.projects.items.len(), 3);
    assert_eq!(content.skills.groups.len(), 4);
    assert_eq!(content.contact.links.len(), 3);
}

#[test]
fn test_load_replaces_content() {
    let mut custom = Content::default();
    custom.brand = "Ada".to_string();
    custom.projects.items.truncate(1);

    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", serde_json::to_string(&custom).unwrap()).unwrap();

    let loaded = Content::load(file.path()).unwrap();
    assert_eq!(loaded, custom);
}

#[test]
fn test_project_icon_and_link_are_optional() {
    let mut value = serde_json::to_value(Content::default()).unwrap();
    let project = &mut value["projects"]["items"][0];
    project.as_object_mut().unwrap().remove("icon");
    project.as_object_mut().unwrap().remove("link");

    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{value}").unwrap();

    let loaded = Content::load(file.path()).unwrap();
    assert_eq!(loaded.projects.items[0].icon, "◆");
    assert_eq!(loaded.projects.items[0].link, "#");
}

#[test]
fn test_invalid_json_is_a_content_error() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{{\"brand\": 3}}").unwrap();

    assert!(matches!(
        Content::load(file.path()),
        Err(Error::Content { .. })
    ));
}
