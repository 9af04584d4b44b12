use crate::domain::entities::holiday::{
    format_date, Dataset, HolidayFlag, ResolvedDay, ARMED_FORCES_DAY,
};
use crate::domain::errors::{DomainError, DomainResult};
use chrono::NaiveDate;

/// Effective holiday classification for one date.
///
/// Scans the dataset in order and takes the first record for the date. Armed Forces
/// Day is forced to not-holiday. Dates without a record get a synthesized entry.
pub fn resolve(dataset: &Dataset, date: NaiveDate) -> ResolvedDay {
    let key = format_date(date);

    match dataset.records.iter().find(|record| record.date == key) {
        Some(record) => {
            let mut day = ResolvedDay::from_record(record);
            if day.name == ARMED_FORCES_DAY {
                day.is_holiday = HolidayFlag::NotHoliday;
            }
            day
        }
        None => ResolvedDay::synthesized(date),
    }
}

/// Resolve every date in `start..=end`, ascending, one entry per date.
pub fn resolve_range(
    dataset: &Dataset,
    start: NaiveDate,
    end: NaiveDate,
) -> DomainResult<Vec<ResolvedDay>> {
    if start > end {
        return Err(DomainError::InvalidRange { start, end });
    }

    Ok(start
        .iter_days()
        .take_while(|date| *date <= end)
        .map(|date| resolve(dataset, date))
        .collect())
}
