// File: src/model/parser.rs
//
// Turns the raw OCR text of one registration page into schedule entries.
// The page is a list of session records, each introduced by the header
// "זמני לימוד:" ("study times:"). Within a record, one line carries the day
// and time range and one or more lines carry a group number plus the session
// kind keyword. OCR noise is expected: lines that match neither pattern are
// logged and skipped, and records missing a field are dropped whole.
use crate::model::{ScheduleEntry, SessionKind, Weekday};
use chrono::NaiveTime;

/// Header phrase that starts every session record on the page.
pub const SECTION_DELIMITER: &str = "זמני לימוד:";

/// Day-token prefix. The weekday letter follows it.
const DAY_PREFIX: &str = "יום ";

/// Parses one image's OCR text into entries tagged with `source_label`.
///
/// Deterministic: identical input always yields identical output. Everything
/// before the first section header is page boilerplate and is discarded.
pub fn parse_text(text: &str, source_label: &str) -> Vec<ScheduleEntry> {
    let mut sections = text.split(SECTION_DELIMITER);
    sections.next(); // boilerplate before the first header

    sections
        .filter_map(|section| parse_section(section, source_label))
        .collect()
}

fn parse_section(section: &str, source_label: &str) -> Option<ScheduleEntry> {
    let mut day_hours: Option<(Weekday, NaiveTime, NaiveTime)> = None;
    let mut kind: Option<SessionKind> = None;
    let mut group_numbers: Vec<String> = Vec::new();

    for line in section.lines() {
        if line.trim().is_empty() {
            continue;
        }

        let mut matched = false;

        if let Some(dh) = match_day_hours(line) {
            // Exactly one day/time per session; later matches are noise.
            if day_hours.is_none() {
                day_hours = Some(dh);
            }
            matched = true;
        }

        if let Some((group, k)) = match_type_group(line) {
            if !group_numbers.contains(&group) {
                group_numbers.push(group);
            }
            kind = Some(k);
            matched = true;
        }

        if !matched {
            log::warn!("unmatched line in section: {}", line.trim());
        }
    }

    // An incomplete OCR read is not an error, just unusable data.
    let (day, start, end) = day_hours?;
    let kind = kind?;

    Some(ScheduleEntry {
        source_label: source_label.to_string(),
        kind,
        day,
        start,
        end,
        group_numbers,
        active: false,
    })
}

/// Matches "יום <letter> HH:MM - HH:MM" anywhere in the line.
///
/// The day letter must be one of the six known weekdays, the times must be
/// real clock times, and the range must run forward; anything else is
/// treated as noise rather than reaching the data model. OCR noise can
/// contain stray "יום" tokens, so every occurrence is tried and the first
/// that yields a valid day and time range wins.
fn match_day_hours(line: &str) -> Option<(Weekday, NaiveTime, NaiveTime)> {
    line.match_indices(DAY_PREFIX)
        .find_map(|(at, _)| day_hours_at(&line[at + DAY_PREFIX.len()..]))
}

fn day_hours_at(rest: &str) -> Option<(Weekday, NaiveTime, NaiveTime)> {
    let mut chars = rest.chars();
    let day = Weekday::from_hebrew(chars.next()?)?;
    // The day token is a single letter; whatever follows must be whitespace
    // leading into the time range.
    let (start, rest) = scan_time(chars.as_str())?;
    let rest = rest.trim_start().strip_prefix('-')?;
    let (end, _) = scan_time(rest)?;

    if start >= end {
        return None;
    }
    Some((day, start, end))
}

/// Scans a leading "HH:MM" token (after optional whitespace) and returns the
/// parsed time plus the remainder of the line.
fn scan_time(s: &str) -> Option<(NaiveTime, &str)> {
    let s = s.trim_start();
    let b = s.as_bytes();
    if b.len() < 5
        || !b[0].is_ascii_digit()
        || !b[1].is_ascii_digit()
        || b[2] != b':'
        || !b[3].is_ascii_digit()
        || !b[4].is_ascii_digit()
    {
        return None;
    }

    let hour: u32 = s[0..2].parse().ok()?;
    let minute: u32 = s[3..5].parse().ok()?;
    let time = NaiveTime::from_hms_opt(hour, minute, 0)?;
    Some((time, &s[5..]))
}

/// Matches "<group number> <kind keyword>" as adjacent tokens, e.g.
/// "101 שעור". Returns the group number and the session kind.
fn match_type_group(line: &str) -> Option<(String, SessionKind)> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    for pair in tokens.windows(2) {
        if let Some(group) = trailing_digit_run(pair[0])
            && let Some(kind) = SessionKind::from_hebrew(pair[1])
        {
            return Some((group.to_string(), kind));
        }
    }
    None
}

/// The run of ASCII digits at the end of a token, or `None` if the token
/// does not end in a digit. OCR sometimes glues stray characters onto the
/// front of a group number; the digits right before the kind keyword are
/// still the group.
fn trailing_digit_run(token: &str) -> Option<&str> {
    let start = token
        .char_indices()
        .rev()
        .take_while(|(_, c)| c.is_ascii_digit())
        .last()
        .map(|(i, _)| i)?;
    Some(&token[start..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_hours_requires_known_weekday() {
        assert!(match_day_hours("יום ב 10:00 - 12:00").is_some());
        assert!(match_day_hours("יום ש 10:00 - 12:00").is_none());
    }

    #[test]
    fn day_hours_tolerates_missing_dash_spacing() {
        let (day, start, end) = match_day_hours("יום ג 08:30-09:45").unwrap();
        assert_eq!(day, Weekday::Tuesday);
        assert_eq!(start, NaiveTime::from_hms_opt(8, 30, 0).unwrap());
        assert_eq!(end, NaiveTime::from_hms_opt(9, 45, 0).unwrap());
    }

    #[test]
    fn out_of_range_clock_values_are_noise() {
        assert!(match_day_hours("יום ב 25:99 - 26:00").is_none());
    }

    #[test]
    fn backwards_range_is_noise() {
        assert!(match_day_hours("יום ב 12:00 - 10:00").is_none());
    }

    #[test]
    fn noise_day_token_does_not_mask_later_match() {
        let (day, start, end) = match_day_hours("יום x יום ב 10:00 - 12:00").unwrap();
        assert_eq!(day, Weekday::Monday);
        assert_eq!(start, NaiveTime::from_hms_opt(10, 0, 0).unwrap());
        assert_eq!(end, NaiveTime::from_hms_opt(12, 0, 0).unwrap());
    }

    #[test]
    fn type_group_matches_adjacent_tokens() {
        let (group, kind) = match_type_group("123 תרגיל ד\"ר כהן").unwrap();
        assert_eq!(group, "123");
        assert_eq!(kind, SessionKind::Exercise);
    }

    #[test]
    fn type_group_ignores_non_numeric_prefix() {
        assert!(match_type_group("בניין שעור").is_none());
    }

    #[test]
    fn type_group_takes_trailing_digits_of_mangled_token() {
        let (group, kind) = match_type_group("A101 שעור").unwrap();
        assert_eq!(group, "101");
        assert_eq!(kind, SessionKind::Lecture);
    }

    #[test]
    fn type_group_rejects_token_not_ending_in_digits() {
        // Digits must sit right before the keyword, as in "101 שעור".
        assert!(match_type_group("101a שעור").is_none());
    }
}
