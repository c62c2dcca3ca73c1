// File: tests/layout_tests.rs
use chrono::NaiveTime;
use luach::layout::{AVAILABLE_WIDTH, layout};
use luach::model::{ScheduleEntry, SessionKind, Weekday};

fn entry(day: Weekday, start: (u32, u32), end: (u32, u32), kind: SessionKind) -> ScheduleEntry {
    ScheduleEntry {
        source_label: "Algebra".to_string(),
        kind,
        day,
        start: NaiveTime::from_hms_opt(start.0, start.1, 0).unwrap(),
        end: NaiveTime::from_hms_opt(end.0, end.1, 0).unwrap(),
        group_numbers: vec!["101".to_string()],
        active: true,
    }
}

#[test]
fn test_entries_sharing_a_day_split_the_width_evenly() {
    // Non-overlapping time ranges still split: collision is by day only.
    let a = entry(Weekday::Monday, (10, 0), (12, 0), SessionKind::Lecture);
    let b = entry(Weekday::Monday, (14, 0), (16, 0), SessionKind::Exercise);

    let blocks = layout(&[&a, &b]);
    assert_eq!(blocks.len(), 2);

    let half = AVAILABLE_WIDTH / 2.0;
    assert_eq!(blocks[0].width, half);
    assert_eq!(blocks[1].width, half);
    assert_eq!(blocks[0].x_offset, 1.0);
    assert_eq!(blocks[1].x_offset, 1.0 + half);
    assert_ne!(blocks[0].x_offset, blocks[1].x_offset);
}

#[test]
fn test_entries_on_different_days_get_full_width() {
    let a = entry(Weekday::Sunday, (10, 0), (12, 0), SessionKind::Lecture);
    let b = entry(Weekday::Thursday, (10, 0), (12, 0), SessionKind::Lab);

    let blocks = layout(&[&a, &b]);
    assert_eq!(blocks.len(), 2);
    assert!(blocks.iter().all(|b| b.width == AVAILABLE_WIDTH));
    assert_eq!(blocks[0].day_index, 0);
    assert_eq!(blocks[0].x_offset, 0.0);
    assert_eq!(blocks[1].day_index, 4);
    assert_eq!(blocks[1].x_offset, 4.0);
}

#[test]
fn test_vertical_span_is_fractional_hours() {
    let a = entry(Weekday::Tuesday, (9, 30), (11, 15), SessionKind::Lecture);

    let blocks = layout(&[&a]);
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].y_start, 9.5);
    assert_eq!(blocks[0].y_end, 11.25);
}

#[test]
fn test_slot_order_follows_input_order() {
    let mut a = entry(Weekday::Monday, (10, 0), (12, 0), SessionKind::Lecture);
    a.group_numbers = vec!["1".to_string()];
    let mut b = entry(Weekday::Monday, (10, 0), (12, 0), SessionKind::Exercise);
    b.group_numbers = vec!["2".to_string()];
    let mut c = entry(Weekday::Monday, (10, 0), (12, 0), SessionKind::Lab);
    c.group_numbers = vec!["3".to_string()];

    let blocks = layout(&[&a, &b, &c]);
    let third = AVAILABLE_WIDTH / 3.0;

    assert_eq!(blocks[0].x_offset, 1.0);
    assert_eq!(blocks[1].x_offset, 1.0 + third);
    assert_eq!(blocks[2].x_offset, 1.0 + 2.0 * third);
    assert!(blocks[0].label.contains("Group: 1"));
    assert!(blocks[2].label.contains("Group: 3"));
}

#[test]
fn test_label_shows_kind_groups_and_source() {
    let mut a = entry(Weekday::Wednesday, (8, 0), (9, 0), SessionKind::Exercise);
    a.group_numbers = vec!["204".to_string(), "205".to_string()];

    let blocks = layout(&[&a]);
    let lines: Vec<&str> = blocks[0].label.lines().collect();
    assert_eq!(lines, vec!["תרגיל", "Group: 204, 205", "Algebra"]);
}

#[test]
fn test_color_class_keyed_by_kind() {
    let a = entry(Weekday::Monday, (10, 0), (12, 0), SessionKind::Lab);
    let blocks = layout(&[&a]);
    assert_eq!(blocks[0].kind, SessionKind::Lab);
}

#[test]
fn test_layout_is_pure() {
    let a = entry(Weekday::Monday, (10, 0), (12, 0), SessionKind::Lecture);
    let b = entry(Weekday::Monday, (11, 0), (13, 0), SessionKind::Exercise);
    let c = entry(Weekday::Friday, (8, 0), (10, 0), SessionKind::Lab);

    let first = layout(&[&a, &b, &c]);
    let second = layout(&[&a, &b, &c]);
    assert_eq!(first, second, "identical input must yield identical output");
}

#[test]
fn test_empty_active_set_yields_no_blocks() {
    assert!(layout(&[]).is_empty());
}
