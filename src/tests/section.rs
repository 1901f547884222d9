use super::{SectionId, SectionMetrics};
use crate::error::Error;

#[test]
fn test_parse_is_case_insensitive() {
    assert_eq!("projects".parse::<SectionId>().unwrap(), SectionId::Projects);
    assert_eq!(" Contact ".parse::<SectionId>().unwrap(), SectionId::Contact);
    assert!(matches!(
        "home".parse::<SectionId>(),
        Err(Error::UnknownSection(ref name)) if name == "home"
    ));
}

#[test]
fn test_names_round_trip_through_display() {
    for id in SectionId::ALL {
        assert_eq!(id.to_string().parse::<SectionId>().unwrap(), id);
    }
}

#[test]
fn test_hero_is_labelled_home() {
    assert_eq!(SectionId::Hero.nav_label(), "Home");
    assert_eq!(SectionId::Skills.nav_label(), "Skills");
    assert_eq!(SectionId::Skills.position(), 3);
}

#[test]
fn test_contains_is_half_open() {
    let metrics = SectionMetrics {
        offset_top: 800,
        height: 600,
    };
    assert!(!metrics.contains(799));
    assert!(metrics.contains(800));
    assert!(metrics.contains(1399));
    assert!(!metrics.contains(1400));
}

#[test]
fn test_contains_near_the_numeric_limit() {
    let metrics = SectionMetrics {
        offset_top: u32::MAX - 10,
        height: 100,
    };
    assert!(metrics.contains(u32::MAX));
}
