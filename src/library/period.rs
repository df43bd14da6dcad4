use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, Utc};

use crate::types::{GroupMap, LikedSongItem, PeriodQuery, PeriodType, SortOrder};

/// Label of the period `added_at` falls into.
///
/// - monthly: `2025(03)`
/// - quarterly: `2025(1-3)`
/// - semi: `2025(1-6)` or `2025(7-12)`
/// - yearly: `2025`
pub fn period_key(added_at: &DateTime<Utc>, period: PeriodType) -> String {
    let year = added_at.year();
    let month = added_at.month();

    match period {
        PeriodType::Monthly => format!("{}({:02})", year, month),
        PeriodType::Quarterly => {
            let quarter = (month - 1) / 3 + 1;
            let start_m = (quarter - 1) * 3 + 1;
            let end_m = quarter * 3;
            format!("{}({}-{})", year, start_m, end_m)
        }
        PeriodType::Semi => {
            let (start_m, end_m) = if month <= 6 { (1, 6) } else { (7, 12) };
            format!("{}({}-{})", year, start_m, end_m)
        }
        PeriodType::Yearly => format!("{}", year),
    }
}

/// Buckets liked songs by the period they were added in.
///
/// Items whose year lies outside `[start_year, end_year]` are dropped. Each
/// group is ordered by `added_at` in the requested direction; items added
/// at the same instant keep their fetch order. Only non-empty groups appear
/// in the result.
pub fn group_by_period(items: &[LikedSongItem], query: &PeriodQuery) -> GroupMap {
    let mut groups: BTreeMap<String, Vec<(&DateTime<Utc>, &str)>> = BTreeMap::new();

    for item in items {
        let year = item.added_at.year();
        if query.start_year.is_some_and(|start| year < start) {
            continue;
        }
        if query.end_year.is_some_and(|end| year > end) {
            continue;
        }

        groups
            .entry(period_key(&item.added_at, query.period))
            .or_default()
            .push((&item.added_at, item.track.id.as_str()));
    }

    groups
        .into_iter()
        .map(|(key, mut entries)| {
            // sort_by is stable, ties keep fetch order in both directions
            match query.order {
                SortOrder::Asc => entries.sort_by(|a, b| a.0.cmp(b.0)),
                SortOrder::Desc => entries.sort_by(|a, b| b.0.cmp(a.0)),
            }

            let ids = entries.into_iter().map(|(_, id)| id.to_string()).collect();
            (key, ids)
        })
        .collect()
}
