//! Date and time arithmetic for the weekly appointment grid.
//!
//! Timestamps follow the wall clock of the salon: no timezone is attached and
//! no conversion is ever done.

use crate::domain::a002_appointment::aggregate::AvailableTimeSlot;
use crate::shared::salon_settings::SalonSettings;
use chrono::{Duration, NaiveDateTime, NaiveTime};

pub type Timestamp = NaiveDateTime;

pub const SLOT_MINUTES: i64 = 30;
pub const DAYS_PER_WEEK: usize = 7;
pub const HOURS_PER_DAY: u32 = 24;

/// Wire and `value=` attribute format of a timestamp
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// `count` timestamps starting at `start`, each `increment` apart
pub fn time_increments(count: usize, start: Timestamp, increment: Duration) -> Vec<Timestamp> {
    (0..count as i32).map(|i| start + increment * i).collect()
}

/// Number of half-hour slots between the two hours.
///
/// Closing is capped at midnight, so slots never spill into the next day.
pub fn slot_count(opens_at: u32, closes_at: u32) -> usize {
    let closes_at = closes_at.min(HOURS_PER_DAY);
    closes_at.saturating_sub(opens_at) as usize * 2
}

/// Half-hour slot starts between `opens_at` and `closes_at` on the day of `today`
pub fn daily_time_slots(opens_at: u32, closes_at: u32, today: Timestamp) -> Vec<Timestamp> {
    let Some(start) = today.date().and_hms_opt(opens_at, 0, 0) else {
        return Vec::new();
    };
    time_increments(slot_count(opens_at, closes_at), start, Duration::minutes(SLOT_MINUTES))
}

/// Seven consecutive midnights, the first one on the day of `start`
pub fn weekly_date_values(start: Timestamp) -> Vec<Timestamp> {
    let midnight = start.date().and_time(NaiveTime::MIN);
    time_increments(DAYS_PER_WEEK, midnight, Duration::days(1))
}

/// Calendar day of `date` combined with the time of day of `time_slot`
pub fn merge_date_and_time(date: Timestamp, time_slot: Timestamp) -> Timestamp {
    date.date().and_time(time_slot.time())
}

/// "09:30"
pub fn format_time_of_day(timestamp: Timestamp) -> String {
    timestamp.format("%H:%M").to_string()
}

/// "Sat 01"
pub fn format_short_date(timestamp: Timestamp) -> String {
    timestamp.format("%a %d").to_string()
}

pub fn format_timestamp(timestamp: Timestamp) -> String {
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}

/// Inverse of [`format_timestamp`]; fractional seconds are accepted
pub fn parse_timestamp(value: &str) -> Option<Timestamp> {
    NaiveDateTime::parse_from_str(value.trim(), "%Y-%m-%dT%H:%M:%S%.f").ok()
}

pub fn is_available(available: &[AvailableTimeSlot], starts_at: Timestamp) -> bool {
    available.iter().any(|slot| slot.starts_at == starts_at)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotCell {
    pub starts_at: Timestamp,
    pub available: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotRow {
    pub time_of_day: Timestamp,
    pub cells: Vec<SlotCell>,
}

impl SlotRow {
    pub fn label(&self) -> String {
        format_time_of_day(self.time_of_day)
    }
}

/// Time-of-day rows by date columns for one week
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSlotGrid {
    pub dates: Vec<Timestamp>,
    pub rows: Vec<SlotRow>,
}

impl TimeSlotGrid {
    pub fn build(settings: &SalonSettings, today: Timestamp, available: &[AvailableTimeSlot]) -> Self {
        let dates = weekly_date_values(today);
        let rows = daily_time_slots(settings.opens_at, settings.closes_at, today)
            .into_iter()
            .map(|time_of_day| SlotRow {
                time_of_day,
                cells: dates
                    .iter()
                    .map(|date| {
                        let starts_at = merge_date_and_time(*date, time_of_day);
                        SlotCell {
                            starts_at,
                            available: is_available(available, starts_at),
                        }
                    })
                    .collect(),
            })
            .collect();

        Self { dates, rows }
    }

    pub fn header_labels(&self) -> Vec<String> {
        self.dates.iter().copied().map(format_short_date).collect()
    }

    /// Cells in row-major order, matching the `<td>` order of the rendered table
    pub fn cells(&self) -> impl Iterator<Item = &SlotCell> {
        self.rows.iter().flat_map(|row| row.cells.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> Timestamp {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    fn slot(starts_at: Timestamp) -> AvailableTimeSlot {
        AvailableTimeSlot { starts_at }
    }

    #[test]
    fn test_time_increments() {
        let start = at(2018, 12, 1, 9, 0);
        let values = time_increments(3, start, Duration::minutes(30));
        assert_eq!(values, vec![start, at(2018, 12, 1, 9, 30), at(2018, 12, 1, 10, 0)]);
        assert!(time_increments(0, start, Duration::minutes(30)).is_empty());
    }

    #[test]
    fn test_daily_time_slots_every_half_hour() {
        let slots = daily_time_slots(9, 11, at(2018, 12, 1, 15, 42));
        let labels: Vec<String> = slots.into_iter().map(format_time_of_day).collect();
        assert_eq!(labels, vec!["09:00", "09:30", "10:00", "10:30"]);
    }

    #[test]
    fn test_daily_time_slots_closed() {
        assert!(daily_time_slots(11, 9, at(2018, 12, 1, 0, 0)).is_empty());
        assert!(daily_time_slots(25, 26, at(2018, 12, 1, 0, 0)).is_empty());
    }

    #[test]
    fn test_daily_time_slots_stop_at_midnight() {
        let slots = daily_time_slots(22, 25, at(2018, 12, 1, 0, 0));
        let labels: Vec<String> = slots.iter().copied().map(format_time_of_day).collect();
        assert_eq!(labels, vec!["22:00", "22:30", "23:00", "23:30"]);
        assert!(slots.iter().all(|s| s.date() == at(2018, 12, 1, 0, 0).date()));
    }

    #[test]
    fn test_daily_time_slots_huge_closing_hour() {
        let slots = daily_time_slots(0, u32::MAX, at(2018, 12, 1, 0, 0));
        assert_eq!(slots.len(), 48);
        assert_eq!(format_time_of_day(slots[47]), "23:30");
    }

    #[test]
    fn test_slot_count() {
        assert_eq!(slot_count(9, 19), 20);
        assert_eq!(slot_count(9, 11), 4);
        assert_eq!(slot_count(12, 12), 0);
        assert_eq!(slot_count(14, 10), 0);
        assert_eq!(slot_count(0, u32::MAX), 48);
    }

    #[test]
    fn test_weekly_date_values() {
        let dates = weekly_date_values(at(2018, 12, 1, 13, 15));
        assert_eq!(dates.len(), 7);
        assert_eq!(dates[0], at(2018, 12, 1, 0, 0));
        assert_eq!(dates[6], at(2018, 12, 7, 0, 0));

        let labels: Vec<String> = dates.into_iter().map(format_short_date).collect();
        assert_eq!(
            labels,
            vec!["Sat 01", "Sun 02", "Mon 03", "Tue 04", "Wed 05", "Thu 06", "Fri 07"]
        );
    }

    #[test]
    fn test_weekly_date_values_crosses_month() {
        let dates = weekly_date_values(at(2018, 12, 29, 0, 0));
        assert_eq!(format_short_date(dates[3]), "Tue 01");
        assert_eq!(dates[3], at(2019, 1, 1, 0, 0));
    }

    #[test]
    fn test_merge_date_and_time() {
        let merged = merge_date_and_time(at(2018, 12, 3, 0, 0), at(2018, 12, 1, 10, 30));
        assert_eq!(merged, at(2018, 12, 3, 10, 30));
    }

    #[test]
    fn test_timestamp_value_round_trip() {
        let ts = at(2018, 12, 1, 9, 30);
        assert_eq!(format_timestamp(ts), "2018-12-01T09:30:00");
        assert_eq!(parse_timestamp("2018-12-01T09:30:00"), Some(ts));
        assert_eq!(parse_timestamp("2018-12-01T09:30:00.000"), Some(ts));
        assert_eq!(parse_timestamp("not a date"), None);
    }

    #[test]
    fn test_grid_shape() {
        let settings = SalonSettings::default();
        let grid = TimeSlotGrid::build(&settings, at(2018, 12, 1, 8, 0), &[]);
        assert_eq!(grid.dates.len(), 7);
        assert_eq!(grid.rows.len(), 20);
        assert!(grid.rows.iter().all(|row| row.cells.len() == 7));
        assert_eq!(grid.rows[0].label(), "09:00");
        assert_eq!(grid.rows[19].label(), "18:30");
        assert_eq!(grid.header_labels()[0], "Sat 01");
    }

    #[test]
    fn test_header_labels_are_one_short_date_per_column() {
        let grid = TimeSlotGrid::build(&SalonSettings::default(), at(2018, 12, 1, 8, 0), &[]);
        assert_eq!(
            grid.header_labels(),
            vec!["Sat 01", "Sun 02", "Mon 03", "Tue 04", "Wed 05", "Thu 06", "Fri 07"]
        );
    }

    #[test]
    fn test_grid_late_closing_has_no_rows_after_midnight() {
        let settings = SalonSettings::default().with_hours(22, 25);
        let grid = TimeSlotGrid::build(&settings, at(2018, 12, 1, 8, 0), &[]);
        let labels: Vec<String> = grid.rows.iter().map(|row| row.label()).collect();
        assert_eq!(labels, vec!["22:00", "22:30", "23:00", "23:30"]);
        assert!(grid.cells().all(|c| c.starts_at.time() >= at(2018, 12, 1, 22, 0).time()));
    }

    #[test]
    fn test_no_available_slots_means_no_selectable_cells() {
        let settings = SalonSettings::default();
        let grid = TimeSlotGrid::build(&settings, at(2018, 12, 1, 8, 0), &[]);
        assert_eq!(grid.cells().filter(|c| c.available).count(), 0);
    }

    #[test]
    fn test_cell_available_iff_slot_matches_exactly() {
        let settings = SalonSettings::default();
        let today = at(2018, 12, 1, 12, 0);
        let available = vec![
            slot(at(2018, 12, 1, 9, 0)),
            slot(at(2018, 12, 1, 9, 30)),
            slot(at(2018, 12, 4, 14, 0)),
            // off the half-hour grid, never matches
            slot(at(2018, 12, 2, 9, 15)),
            // outside the displayed week
            slot(at(2018, 12, 8, 9, 0)),
        ];
        let grid = TimeSlotGrid::build(&settings, today, &available);

        let cells: Vec<&SlotCell> = grid.cells().collect();
        assert!(cells[0].available);
        assert!(cells[7].available);
        assert_eq!(cells[0].starts_at, at(2018, 12, 1, 9, 0));
        assert_eq!(cells[7].starts_at, at(2018, 12, 1, 9, 30));

        // 14:00 is row 10, Tue 04 is column 3
        assert!(grid.rows[10].cells[3].available);

        let selectable: Vec<Timestamp> = grid
            .cells()
            .filter(|c| c.available)
            .map(|c| c.starts_at)
            .collect();
        assert_eq!(
            selectable,
            vec![at(2018, 12, 1, 9, 0), at(2018, 12, 1, 9, 30), at(2018, 12, 4, 14, 0)]
        );

        for cell in grid.cells() {
            assert_eq!(cell.available, is_available(&available, cell.starts_at));
        }
    }
}
