use crate::domain::entities::holiday::ResolvedDay;
use crate::domain::errors::{DomainError, DomainResult};
use chrono::{Datelike, NaiveDate};
use std::collections::BTreeMap;

/// Group resolved days by `YYYY-MM`, each group ascending by date.
pub fn aggregate_by_month(days: &[ResolvedDay]) -> DomainResult<BTreeMap<String, Vec<ResolvedDay>>> {
    group_by(days, |date| format!("{:04}-{:02}", date.year(), date.month()))
}

/// Group resolved days by year, each group ascending by date.
pub fn aggregate_by_year(days: &[ResolvedDay]) -> DomainResult<BTreeMap<i32, Vec<ResolvedDay>>> {
    group_by(days, |date| date.year())
}

fn group_by<K, F>(days: &[ResolvedDay], key_of: F) -> DomainResult<BTreeMap<K, Vec<ResolvedDay>>>
where
    K: Ord,
    F: Fn(NaiveDate) -> K,
{
    let mut groups: BTreeMap<K, Vec<ResolvedDay>> = BTreeMap::new();

    for day in days {
        let date = day.calendar_date().ok_or_else(|| {
            tracing::error!(
                "Resolved day carries an unparseable date {:?}; aborting aggregation",
                day.date
            );
            DomainError::InvariantViolation(format!(
                "resolved day has unparseable date {:?}",
                day.date
            ))
        })?;

        groups.entry(key_of(date)).or_default().push(day.clone());
    }

    // YYYYMMDD sorts lexically in date order; sort_by is stable for duplicates
    for group in groups.values_mut() {
        group.sort_by(|a, b| a.date.cmp(&b.date));
    }

    Ok(groups)
}
