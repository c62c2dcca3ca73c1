// File: ./src/model/entry.rs
use chrono::NaiveTime;
use std::fmt;
use strum::EnumIter;

/// The kind of a course session, identified by its Hebrew keyword in the
/// registration page text.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, EnumIter)]
pub enum SessionKind {
    Lecture,
    Exercise,
    Lab,
}

impl SessionKind {
    /// Matches a (possibly OCR-mangled) token against the three known
    /// keywords. Trailing punctuation after the keyword is tolerated.
    pub fn from_hebrew(token: &str) -> Option<Self> {
        if token.starts_with("שעור") {
            Some(Self::Lecture)
        } else if token.starts_with("תרגיל") {
            Some(Self::Exercise)
        } else if token.starts_with("מעבדה") {
            Some(Self::Lab)
        } else {
            None
        }
    }

    pub fn hebrew(&self) -> &'static str {
        match self {
            Self::Lecture => "שעור",
            Self::Exercise => "תרגיל",
            Self::Lab => "מעבדה",
        }
    }

    /// Plural English heading, used above the toggle buttons.
    pub fn heading(&self) -> &'static str {
        match self {
            Self::Lecture => "Lectures",
            Self::Exercise => "Exercises",
            Self::Lab => "Labs",
        }
    }
}

impl fmt::Display for SessionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lecture => write!(f, "Lecture"),
            Self::Exercise => write!(f, "Exercise"),
            Self::Lab => write!(f, "Lab"),
        }
    }
}

/// Six-day academic week. Saturday has no classes and is not representable.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, EnumIter)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Weekday {
    /// Maps the Hebrew day letter that follows a "יום" token.
    pub fn from_hebrew(letter: char) -> Option<Self> {
        match letter {
            'א' => Some(Self::Sunday),
            'ב' => Some(Self::Monday),
            'ג' => Some(Self::Tuesday),
            'ד' => Some(Self::Wednesday),
            'ה' => Some(Self::Thursday),
            'ו' => Some(Self::Friday),
            _ => None,
        }
    }

    /// Column index on the weekly grid, 0 = Sunday .. 5 = Friday.
    pub fn index(&self) -> usize {
        match self {
            Self::Sunday => 0,
            Self::Monday => 1,
            Self::Tuesday => 2,
            Self::Wednesday => 3,
            Self::Thursday => 4,
            Self::Friday => 5,
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sunday => write!(f, "Sunday"),
            Self::Monday => write!(f, "Monday"),
            Self::Tuesday => write!(f, "Tuesday"),
            Self::Wednesday => write!(f, "Wednesday"),
            Self::Thursday => write!(f, "Thursday"),
            Self::Friday => write!(f, "Friday"),
        }
    }
}

/// One parsed course session from one source image.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleEntry {
    /// Title of the image this entry was extracted from.
    pub source_label: String,
    pub kind: SessionKind,
    pub day: Weekday,
    pub start: NaiveTime,
    pub end: NaiveTime,
    /// Group identifiers seen for this session, deduplicated,
    /// first-seen order preserved. Non-empty for every emitted entry.
    pub group_numbers: Vec<String>,
    /// Whether the entry is currently selected for display.
    pub active: bool,
}

impl ScheduleEntry {
    /// Button/legend label: kind plus its group numbers.
    pub fn short_label(&self) -> String {
        format!("{} (Group {})", self.kind.hebrew(), self.group_numbers.join(", "))
    }
}

impl fmt::Display for ScheduleEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}-{} ({}) [{}]",
            self.day,
            self.kind,
            self.start.format("%H:%M"),
            self.end.format("%H:%M"),
            self.group_numbers.join(", "),
            self.source_label
        )
    }
}
