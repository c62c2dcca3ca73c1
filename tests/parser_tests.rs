// Behavior tests for the registration-page text parser.
use chrono::NaiveTime;
use luach::model::parser::parse_text;
use luach::model::{SessionKind, Weekday};

fn t(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

#[test]
fn test_complete_section_yields_one_entry() {
    let text = "אלגברה לינארית 1\nזמני לימוד:\nיום ב 10:00 - 12:00\n101 שעור\n";
    let entries = parse_text(text, "Algebra");

    assert_eq!(entries.len(), 1);
    let e = &entries[0];
    assert_eq!(e.day, Weekday::Monday);
    assert_eq!(e.start, t(10, 0));
    assert_eq!(e.end, t(12, 0));
    assert_eq!(e.kind, SessionKind::Lecture);
    assert_eq!(e.group_numbers, vec!["101".to_string()]);
    assert_eq!(e.source_label, "Algebra");
    assert!(!e.active, "entries start unselected");
}

#[test]
fn test_boilerplate_before_first_header_is_discarded() {
    // Day/time and group lines before the first header belong to page
    // chrome, not to a session record.
    let text = "יום ב 10:00 - 12:00\n101 שעור\n";
    assert!(parse_text(text, "x").is_empty());
}

#[test]
fn test_section_missing_type_group_yields_nothing() {
    let text = "זמני לימוד:\nיום ג 09:00 - 11:00\nחדר 304\n";
    assert!(parse_text(text, "x").is_empty());
}

#[test]
fn test_section_missing_day_hours_yields_nothing() {
    let text = "זמני לימוד:\n101 תרגיל\n";
    assert!(parse_text(text, "x").is_empty());
}

#[test]
fn test_group_numbers_deduplicated_order_preserving() {
    let text = "זמני לימוד:\nיום א 08:00 - 10:00\n102 שעור\n101 שעור\n102 שעור\n";
    let entries = parse_text(text, "x");

    assert_eq!(entries.len(), 1);
    assert_eq!(
        entries[0].group_numbers,
        vec!["102".to_string(), "101".to_string()],
        "first-seen order, no duplicates"
    );
}

#[test]
fn test_later_kind_line_overwrites_kind() {
    let text = "זמני לימוד:\nיום ד 14:00 - 16:00\n101 שעור\n201 תרגיל\n";
    let entries = parse_text(text, "x");

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].kind, SessionKind::Exercise);
    assert_eq!(entries[0].group_numbers, vec!["101", "201"]);
}

#[test]
fn test_first_day_time_match_wins() {
    // Exactly one day/time per session; a second matching line is noise.
    let text = "זמני לימוד:\nיום ב 10:00 - 12:00\nיום ה 13:00 - 15:00\n101 מעבדה\n";
    let entries = parse_text(text, "x");

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].day, Weekday::Monday);
    assert_eq!(entries[0].start, t(10, 0));
}

#[test]
fn test_multiple_sections_yield_multiple_entries() {
    let text = "כותרת עמוד\n\
                זמני לימוד:\nיום ב 10:00 - 12:00\n101 שעור\n\
                זמני לימוד:\nיום ה 16:00 - 17:00\n204 תרגיל\n";
    let entries = parse_text(text, "Calculus");

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].kind, SessionKind::Lecture);
    assert_eq!(entries[1].kind, SessionKind::Exercise);
    assert_eq!(entries[1].day, Weekday::Thursday);
}

#[test]
fn test_unknown_day_letter_drops_section() {
    // Saturday ('ש') is not part of the six-day week.
    let text = "זמני לימוד:\nיום ש 10:00 - 12:00\n101 שעור\n";
    assert!(parse_text(text, "x").is_empty());
}

#[test]
fn test_out_of_range_times_drop_section() {
    // "25:99" matches the HH:MM shape but is not a clock time.
    let text = "זמני לימוד:\nיום ב 25:99 - 26:30\n101 שעור\n";
    assert!(parse_text(text, "x").is_empty());
}

#[test]
fn test_backwards_time_range_drops_section() {
    let text = "זמני לימוד:\nיום ב 12:00 - 10:00\n101 שעור\n";
    assert!(parse_text(text, "x").is_empty());
}

#[test]
fn test_noisy_lines_are_skipped_not_fatal() {
    let text = "זמני לימוד:\n@@garbage@@\nיום ו 08:30 - 09:45\nד\"ר לוי\n305 מעבדה\n???\n";
    let entries = parse_text(text, "Physics");

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].day, Weekday::Friday);
    assert_eq!(entries[0].start, t(8, 30));
    assert_eq!(entries[0].end, t(9, 45));
    assert_eq!(entries[0].kind, SessionKind::Lab);
}

#[test]
fn test_noise_day_token_does_not_mask_real_day_time() {
    // A stray "יום" earlier in the line must not hide the real match.
    let text = "זמני לימוד:\nיום x יום ב 10:00 - 12:00\n101 שעור\n";
    let entries = parse_text(text, "Algebra");

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].day, Weekday::Monday);
    assert_eq!(entries[0].start, t(10, 0));
    assert_eq!(entries[0].end, t(12, 0));
}

#[test]
fn test_mangled_group_token_keeps_trailing_digits() {
    let text = "זמני לימוד:\nיום ג 09:00 - 11:00\nA101 שעור\n";
    let entries = parse_text(text, "Algebra");

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].group_numbers, vec!["101".to_string()]);
}

#[test]
fn test_parse_is_deterministic() {
    let text = "זמני לימוד:\nיום ג 10:00 - 12:00\n101 שעור\n102 שעור\n";
    assert_eq!(parse_text(text, "x"), parse_text(text, "x"));
}
