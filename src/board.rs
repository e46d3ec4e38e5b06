use std::collections::BTreeMap;

use crate::models::{Client, MonthGroup, YearGroup};

/// Bucket clients by (year, month), years ascending, months ascending within
/// a year. Each bucket totals the clients' `total` fields (absent counts as
/// zero). Pure and recomputed on every call; nothing is cached.
pub fn group_by_period(clients: &[Client]) -> Vec<YearGroup> {
    let mut buckets: BTreeMap<(i32, u32), Vec<Client>> = BTreeMap::new();
    for client in clients {
        buckets
            .entry((client.year, client.month))
            .or_default()
            .push(client.clone());
    }

    let mut years: Vec<YearGroup> = Vec::new();
    for ((year, month), group) in buckets {
        let total = group.iter().map(|c| c.total.unwrap_or(0.0)).sum();
        let month_group = MonthGroup {
            month,
            year,
            clients: group,
            total,
        };
        match years.last_mut() {
            Some(y) if y.year == year => y.months.push(month_group),
            _ => years.push(YearGroup {
                year,
                months: vec![month_group],
            }),
        }
    }
    years
}
