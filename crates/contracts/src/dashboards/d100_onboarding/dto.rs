use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use super::validation::ValidationError;

pub const DEFAULT_USER_NAME: &str = "Alex Chen";
pub const DEFAULT_COMPLETION: u8 = 55;
pub const DEFAULT_HIGHLIGHTED_DAY: u32 = 10;
pub const DEFAULT_CALENDAR_HEADER: &str = "WEDNESDAY 16";

// ---------------------------------------------------------------------------
// Icons
// ---------------------------------------------------------------------------

/// Vector icon shapes known to the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IconKind {
    Home,
    Calendar,
    Document,
    Team,
    CheckCircle,
    Pencil,
    MeetTeam,
    FirstWeek,
}

// ---------------------------------------------------------------------------
// Percentage
// ---------------------------------------------------------------------------

/// Completion percentage, always within `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Percentage(u8);

impl Percentage {
    pub const MAX: u8 = 100;

    pub fn new(value: i64) -> Result<Self, ValidationError> {
        if (0..=i64::from(Self::MAX)).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(ValidationError::PercentageOutOfRange(value))
        }
    }

    /// Saturates out-of-range values at the nearest bound.
    pub fn clamped(value: i64) -> Self {
        Self(value.clamp(0, i64::from(Self::MAX)) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl Default for Percentage {
    fn default() -> Self {
        Self(DEFAULT_COMPLETION)
    }
}

impl TryFrom<i64> for Percentage {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Percentage> for i64 {
    fn from(p: Percentage) -> Self {
        i64::from(p.0)
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// People
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSummary {
    pub name: String,
    pub completion: Percentage,
}

impl Default for UserSummary {
    fn default() -> Self {
        Self {
            name: DEFAULT_USER_NAME.to_string(),
            completion: Percentage::default(),
        }
    }
}

/// Assigned onboarding mentor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuddyRecord {
    pub name: String,
    pub role: String,
}

impl BuddyRecord {
    pub fn new(name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
        }
    }
}

impl Default for BuddyRecord {
    fn default() -> Self {
        Self::new("Maria Rodriguez", "Software Engineer")
    }
}

// ---------------------------------------------------------------------------
// Collections
// ---------------------------------------------------------------------------

/// One sidebar menu item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavEntry {
    pub label: String,
    pub icon: IconKind,
    #[serde(default)]
    pub active: bool,
}

impl NavEntry {
    pub fn new(label: impl Into<String>, icon: IconKind) -> Self {
        Self {
            label: label.into(),
            icon,
            active: false,
        }
    }

    pub fn active(mut self) -> Self {
        self.active = true;
        self
    }

    pub fn active_count(entries: &[NavEntry]) -> usize {
        entries.iter().filter(|e| e.active).count()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventEntry {
    pub time: String,
    pub description: String,
}

impl EventEntry {
    pub fn new(time: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            time: time.into(),
            description: description.into(),
        }
    }
}

/// Shortcut tile for a common onboarding task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickAccessEntry {
    pub name: String,
    pub icon: IconKind,
}

impl QuickAccessEntry {
    pub fn new(name: impl Into<String>, icon: IconKind) -> Self {
        Self {
            name: name.into(),
            icon,
        }
    }
}

/// Collections rendered by the dashboard. `Default` yields the built-in mock dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardData {
    pub nav: Vec<NavEntry>,
    pub events: Vec<EventEntry>,
    pub quick_access: Vec<QuickAccessEntry>,
    /// Month grid values, `None` for blank cells
    pub calendar_days: Vec<Option<u32>>,
    pub highlighted_day: Option<u32>,
    pub calendar_header: String,
}

impl Default for DashboardData {
    fn default() -> Self {
        let mut calendar_days = vec![None, None, None];
        calendar_days.extend((1..=31).map(Some));
        calendar_days.push(None);

        Self {
            nav: vec![
                NavEntry::new("Dashboard", IconKind::Home).active(),
                NavEntry::new("My Schedule", IconKind::Calendar),
                NavEntry::new("Resources", IconKind::Document),
                NavEntry::new("Team", IconKind::Team),
            ],
            events: vec![
                EventEntry::new("9:00 AM", "New Hire Orientation (Virtual)"),
                EventEntry::new("11:00 AM", "New Hire Orientation (Virtual)"),
                EventEntry::new("11:00 AM", "Meet Your Manager - Sarah Lee"),
            ],
            quick_access: vec![
                QuickAccessEntry::new("Complete Paperwork", IconKind::Pencil),
                QuickAccessEntry::new("Meet Your Team", IconKind::MeetTeam),
                QuickAccessEntry::new("First Week Schedule", IconKind::FirstWeek),
            ],
            calendar_days,
            highlighted_day: Some(DEFAULT_HIGHLIGHTED_DAY),
            calendar_header: DEFAULT_CALENDAR_HEADER.to_string(),
        }
    }
}

/// Caller-supplied overrides accepted by the dashboard.
///
/// Every field is optional; absent fields fall back to the defaults above.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardInput {
    pub user_name: Option<String>,
    /// Fractional values are rounded to the nearest integer
    #[serde(deserialize_with = "deserialize_rounded")]
    pub completion_percentage: Option<i64>,
    pub buddy: Option<BuddyRecord>,
    /// When set, the calendar is computed for this date instead of the mock grid
    pub today: Option<NaiveDate>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum WholeOrFraction {
    Whole(i64),
    Fraction(f64),
}

fn deserialize_rounded<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(
        Option::<WholeOrFraction>::deserialize(deserializer)?.map(|value| match value {
            WholeOrFraction::Whole(v) => v,
            // `as` saturates and maps NaN to 0
            WholeOrFraction::Fraction(v) => v.round() as i64,
        }),
    )
}
