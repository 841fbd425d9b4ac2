use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use super::validation::ValidationError;

/// Cells in the fixed mock grid (5 weeks x 7 days).
pub const CALENDAR_CELLS: usize = 35;

/// Positions styled as weekend in the fixed mock grid.
pub const WEEKEND_INDICES: [usize; 4] = [4, 11, 18, 25];

const DAYS_PER_WEEK: usize = 7;
const MIN_WEEKS: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarCell {
    pub index: usize,
    pub day: Option<u32>,
    pub weekend: bool,
    pub highlighted: bool,
}

impl CalendarCell {
    /// Text shown in the cell, empty for blanks.
    pub fn label(&self) -> String {
        self.day.map(|d| d.to_string()).unwrap_or_default()
    }
}

/// Month grid ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarGrid {
    pub header: String,
    pub cells: Vec<CalendarCell>,
}

impl CalendarGrid {
    /// Builds the fixed 35-cell grid from raw values.
    ///
    /// Weekend styling follows [`WEEKEND_INDICES`] regardless of the values.
    /// The highlighted day is emphasized only when exactly one cell holds it.
    pub fn from_days(
        header: impl Into<String>,
        days: &[Option<u32>],
        highlighted: Option<u32>,
    ) -> Result<Self, ValidationError> {
        if days.len() != CALENDAR_CELLS {
            return Err(ValidationError::CalendarLength {
                expected: CALENDAR_CELLS,
                actual: days.len(),
            });
        }

        let matches = highlighted
            .map(|h| days.iter().filter(|d| **d == Some(h)).count())
            .unwrap_or(0);
        let emphasize = if matches == 1 { highlighted } else { None };

        let cells = days
            .iter()
            .enumerate()
            .map(|(index, day)| CalendarCell {
                index,
                day: *day,
                weekend: WEEKEND_INDICES.contains(&index),
                highlighted: emphasize.is_some() && *day == emphasize,
            })
            .collect();

        Ok(Self {
            header: header.into(),
            cells,
        })
    }

    /// Builds a real month grid for `date`, Sunday first, with `date` highlighted.
    pub fn for_date(date: NaiveDate) -> Self {
        let first = date.with_day(1).unwrap_or(date);
        let offset = first.weekday().num_days_from_sunday() as usize;
        let month_len = days_in_month(first);

        let weeks = (offset + month_len)
            .div_ceil(DAYS_PER_WEEK)
            .max(MIN_WEEKS);

        let cells = (0..weeks * DAYS_PER_WEEK)
            .map(|index| {
                let day = index
                    .checked_sub(offset)
                    .filter(|d| *d < month_len)
                    .map(|d| d as u32 + 1);
                let column = index % DAYS_PER_WEEK;
                CalendarCell {
                    index,
                    day,
                    weekend: column == 0 || column == DAYS_PER_WEEK - 1,
                    highlighted: day == Some(date.day()),
                }
            })
            .collect();

        Self {
            header: header_for(date),
            cells,
        }
    }

    pub fn highlighted_count(&self) -> usize {
        self.cells.iter().filter(|c| c.highlighted).count()
    }

    pub fn weekend_indices(&self) -> Vec<usize> {
        self.cells
            .iter()
            .filter(|c| c.weekend)
            .map(|c| c.index)
            .collect()
    }
}

/// "WEDNESDAY 16" style banner text.
pub fn header_for(date: NaiveDate) -> String {
    format!("{} {}", date.format("%A").to_string().to_uppercase(), date.day())
}

fn days_in_month(first: NaiveDate) -> usize {
    first
        .checked_add_months(Months::new(1))
        .map(|next| next.signed_duration_since(first).num_days() as usize)
        .unwrap_or(31)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d100_onboarding::dto::DashboardData;

    fn mock_grid() -> CalendarGrid {
        let data = DashboardData::default();
        CalendarGrid::from_days(
            data.calendar_header,
            &data.calendar_days,
            data.highlighted_day,
        )
        .unwrap()
    }

    #[test]
    fn test_mock_grid_highlights_only_ten() {
        let grid = mock_grid();
        assert_eq!(grid.cells.len(), CALENDAR_CELLS);
        assert_eq!(grid.highlighted_count(), 1);
        let cell = grid.cells.iter().find(|c| c.highlighted).unwrap();
        assert_eq!(cell.day, Some(10));
        assert_eq!(cell.index, 12);
    }

    #[test]
    fn test_mock_grid_weekend_indices_are_fixed() {
        let grid = mock_grid();
        assert_eq!(grid.weekend_indices(), vec![4, 11, 18, 25]);
        assert_eq!(grid.header, "WEDNESDAY 16");
    }

    #[test]
    fn test_weekend_indices_ignore_values() {
        let days = vec![None; CALENDAR_CELLS];
        let grid = CalendarGrid::from_days("", &days, None).unwrap();
        assert_eq!(grid.weekend_indices(), vec![4, 11, 18, 25]);
        assert_eq!(grid.highlighted_count(), 0);
    }

    #[test]
    fn test_missing_highlight_emphasizes_nothing() {
        let data = DashboardData::default();
        let grid = CalendarGrid::from_days("", &data.calendar_days, Some(40)).unwrap();
        assert_eq!(grid.highlighted_count(), 0);
        let grid = CalendarGrid::from_days("", &data.calendar_days, None).unwrap();
        assert_eq!(grid.highlighted_count(), 0);
    }

    #[test]
    fn test_duplicate_highlight_emphasizes_nothing() {
        let mut days = vec![Some(7); CALENDAR_CELLS];
        days[0] = Some(1);
        let grid = CalendarGrid::from_days("", &days, Some(7)).unwrap();
        assert_eq!(grid.highlighted_count(), 0);
        let grid = CalendarGrid::from_days("", &days, Some(1)).unwrap();
        assert_eq!(grid.highlighted_count(), 1);
    }

    #[test]
    fn test_wrong_length_is_rejected() {
        let days = vec![Some(1); 30];
        assert_eq!(
            CalendarGrid::from_days("", &days, None),
            Err(ValidationError::CalendarLength {
                expected: 35,
                actual: 30
            })
        );
    }

    #[test]
    fn test_blank_label() {
        let grid = mock_grid();
        assert_eq!(grid.cells[0].label(), "");
        assert_eq!(grid.cells[3].label(), "1");
    }

    #[test]
    fn test_for_date_october_2024() {
        // 1 Oct 2024 is a Tuesday
        let date = NaiveDate::from_ymd_opt(2024, 10, 16).unwrap();
        let grid = CalendarGrid::for_date(date);
        assert_eq!(grid.header, "WEDNESDAY 16");
        assert_eq!(grid.cells.len(), 35);
        assert_eq!(grid.cells[1].day, None);
        assert_eq!(grid.cells[2].day, Some(1));
        assert_eq!(grid.cells[32].day, Some(31));
        assert_eq!(grid.cells[33].day, None);
        assert_eq!(grid.highlighted_count(), 1);
        let today = grid.cells.iter().find(|c| c.highlighted).unwrap();
        assert_eq!(today.day, Some(16));
        // 16 Oct 2024 is a Wednesday, column 3
        assert_eq!(today.index % 7, 3);
    }

    #[test]
    fn test_for_date_weekends_are_sunday_and_saturday() {
        let grid = CalendarGrid::for_date(NaiveDate::from_ymd_opt(2024, 10, 1).unwrap());
        for cell in &grid.cells {
            let column = cell.index % 7;
            assert_eq!(cell.weekend, column == 0 || column == 6);
        }
    }

    #[test]
    fn test_for_date_six_week_month() {
        // 1 Mar 2025 is a Saturday, 31 days need six rows
        let grid = CalendarGrid::for_date(NaiveDate::from_ymd_opt(2025, 3, 31).unwrap());
        assert_eq!(grid.cells.len(), 42);
        assert_eq!(grid.cells[6].day, Some(1));
        assert_eq!(grid.cells[36].day, Some(31));
        assert!(grid.cells[36].highlighted);
        assert_eq!(grid.header, "MONDAY 31");
    }

    #[test]
    fn test_for_date_leap_february() {
        let leap = CalendarGrid::for_date(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        let max_leap = leap.cells.iter().filter_map(|c| c.day).max();
        assert_eq!(max_leap, Some(29));

        // 1 Feb 2026 is a Sunday, 28 days still pad to five rows
        let plain = CalendarGrid::for_date(NaiveDate::from_ymd_opt(2026, 2, 1).unwrap());
        assert_eq!(plain.cells.len(), 35);
        assert_eq!(plain.cells[0].day, Some(1));
        assert_eq!(plain.cells.iter().filter_map(|c| c.day).max(), Some(28));
    }
}
