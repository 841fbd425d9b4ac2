//! Input sanitization at the dashboard edge.
//!
//! Display components never validate; everything they receive has passed
//! through [`DashboardInput::resolve`] first.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::calendar::CalendarGrid;
use super::dto::{
    BuddyRecord, DashboardData, DashboardInput, EventEntry, NavEntry, Percentage,
    QuickAccessEntry, UserSummary, DEFAULT_USER_NAME,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("completion percentage {0} is outside 0..=100")]
    PercentageOutOfRange(i64),

    #[error("calendar day {0} is outside 1..=31")]
    DayOutOfRange(u32),

    #[error("calendar needs {expected} cells, got {actual}")]
    CalendarLength { expected: usize, actual: usize },

    #[error("field `{0}` is empty")]
    EmptyField(&'static str),

    #[error("{0} nav entries are marked active, expected at most one")]
    MultipleActiveNav(usize),
}

pub fn validate_day(day: u32) -> Result<u32, ValidationError> {
    if (1..=31).contains(&day) {
        Ok(day)
    } else {
        Err(ValidationError::DayOutOfRange(day))
    }
}

/// Everything the dashboard renders, already sanitized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedDashboard {
    pub user: UserSummary,
    pub buddy: BuddyRecord,
    pub nav: Vec<NavEntry>,
    pub events: Vec<EventEntry>,
    pub quick_access: Vec<QuickAccessEntry>,
    pub calendar: CalendarGrid,
}

/// Resolved dashboard plus the corrections applied on the way.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub dashboard: ResolvedDashboard,
    pub warnings: Vec<ValidationError>,
}

impl DashboardInput {
    /// Applies overrides on top of `data`, correcting invalid values instead of failing.
    pub fn resolve(self, data: DashboardData) -> Resolution {
        let mut warnings = Vec::new();

        let name = match self.user_name {
            Some(name) if name.trim().is_empty() => {
                warnings.push(ValidationError::EmptyField("user_name"));
                DEFAULT_USER_NAME.to_string()
            }
            Some(name) => name,
            None => DEFAULT_USER_NAME.to_string(),
        };

        let completion = match self.completion_percentage {
            Some(raw) => Percentage::new(raw).unwrap_or_else(|err| {
                warnings.push(err);
                Percentage::clamped(raw)
            }),
            None => Percentage::default(),
        };

        let buddy = match self.buddy {
            Some(buddy) => sanitize_buddy(buddy, &mut warnings),
            None => BuddyRecord::default(),
        };

        let active = NavEntry::active_count(&data.nav);
        if active > 1 {
            warnings.push(ValidationError::MultipleActiveNav(active));
        }

        let calendar = match self.today {
            Some(today) => CalendarGrid::for_date(today),
            None => mock_calendar(&data, &mut warnings),
        };

        Resolution {
            dashboard: ResolvedDashboard {
                user: UserSummary { name, completion },
                buddy,
                nav: data.nav,
                events: data.events,
                quick_access: data.quick_access,
                calendar,
            },
            warnings,
        }
    }
}

fn sanitize_buddy(buddy: BuddyRecord, warnings: &mut Vec<ValidationError>) -> BuddyRecord {
    let fallback = BuddyRecord::default();
    let name = if buddy.name.trim().is_empty() {
        warnings.push(ValidationError::EmptyField("buddy.name"));
        fallback.name
    } else {
        buddy.name
    };
    let role = if buddy.role.trim().is_empty() {
        warnings.push(ValidationError::EmptyField("buddy.role"));
        fallback.role
    } else {
        buddy.role
    };
    BuddyRecord { name, role }
}

fn mock_calendar(data: &DashboardData, warnings: &mut Vec<ValidationError>) -> CalendarGrid {
    let highlighted = data
        .highlighted_day
        .and_then(|day| validate_day(day).map_err(|err| warnings.push(err)).ok());

    // out-of-range values render as blanks
    let days: Vec<Option<u32>> = data
        .calendar_days
        .iter()
        .map(|day| day.and_then(|d| validate_day(d).map_err(|err| warnings.push(err)).ok()))
        .collect();

    match CalendarGrid::from_days(&data.calendar_header, &days, highlighted) {
        Ok(grid) => grid,
        Err(err) => {
            warnings.push(err);
            let fallback = DashboardData::default();
            CalendarGrid::from_days(
                fallback.calendar_header,
                &fallback.calendar_days,
                fallback.highlighted_day,
            )
            .unwrap_or_else(|_| CalendarGrid {
                header: String::new(),
                cells: Vec::new(),
            })
        }
    }
}
