use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::AttendanceError;
use crate::model::attendance::DailyAttendance;

/// Days covered by a week window, Monday through Friday.
pub const WORK_DAYS: u64 = 5;

/// ISO-8601 week: weeks start on Monday and week 1 is the first week
/// holding at least four days of the year.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
pub struct WeekKey {
    #[schema(example = 2024)]
    pub year: i32,
    #[schema(example = 32)]
    pub week: u32,
}

impl WeekKey {
    pub fn of(date: NaiveDate) -> Self {
        let iso = date.iso_week();
        Self {
            year: iso.year(),
            week: iso.week(),
        }
    }
}

/// Closed interval `[start, start + 4]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekWindow {
    start: NaiveDate,
    end: NaiveDate,
}

impl WeekWindow {
    /// `start` is expected to be a Monday but is not checked.
    pub fn starting(start: NaiveDate) -> Result<Self, AttendanceError> {
        let end = start
            .checked_add_days(Days::new(WORK_DAYS - 1))
            .ok_or(AttendanceError::DateOutOfRange)?;
        Ok(Self { start, end })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        self.start.iter_days().take(WORK_DAYS as usize)
    }
}

pub fn monday_of(date: NaiveDate) -> NaiveDate {
    let offset = date.weekday().num_days_from_monday();
    date.checked_sub_days(Days::new(offset.into()))
        .unwrap_or(date)
}

pub fn is_monday(date: NaiveDate) -> bool {
    date.weekday() == Weekday::Mon
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct WeekBucket {
    pub week: WeekKey,
    /// Monday of the bucket's week
    #[schema(example = "2024-08-05", format = "date", value_type = String)]
    pub week_start: NaiveDate,
    pub days: Vec<DailyAttendance>,
}

/// Buckets come out in ascending week order, days in ascending date order.
/// Records sharing a date keep their input order.
pub fn group_by_week(records: &[DailyAttendance]) -> Vec<WeekBucket> {
    let mut sorted: Vec<&DailyAttendance> = records.iter().collect();
    sorted.sort_by_key(|record| record.date);

    let mut buckets: Vec<WeekBucket> = Vec::new();
    for record in sorted {
        let key = WeekKey::of(record.date);
        match buckets.last_mut() {
            Some(bucket) if bucket.week == key => bucket.days.push(record.clone()),
            _ => buckets.push(WeekBucket {
                week: key,
                week_start: monday_of(record.date),
                days: vec![record.clone()],
            }),
        }
    }
    buckets
}
