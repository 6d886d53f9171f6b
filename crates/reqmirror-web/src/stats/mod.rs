//! In-process frequency tallies for described requests.
//!
//! Four independent counter tables (device, os, browser, country) backed by
//! `DashMap` with relaxed atomics. No global lock is taken; concurrent
//! increments may interleave and counts are best-effort. Each entry records
//! a first-seen sequence number so equal counts rank in observation order.

use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;
use serde::Serialize;

use reqmirror_core::describe::RequestDescription;

/// Entries reported per category.
pub const TOP_N: usize = 5;

struct CounterCell {
    count: AtomicU64,
    seq: u64,
}

/// One value -> occurrence-count table.
#[derive(Default)]
pub struct CounterTable {
    map: DashMap<String, CounterCell>,
    next_seq: AtomicU64,
}

impl CounterTable {
    /// Increment the counter for `value` by 1.
    pub fn inc(&self, value: &str) {
        if let Some(cell) = self.map.get(value) {
            cell.count.fetch_add(1, Ordering::Relaxed);
            return;
        }
        let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
        let cell = self
            .map
            .entry(value.to_string())
            .or_insert_with(|| CounterCell {
                count: AtomicU64::new(0),
                seq,
            });
        cell.count.fetch_add(1, Ordering::Relaxed);
    }

    /// The `n` highest-count values, descending; ties rank first-seen first.
    pub fn top(&self, n: usize) -> Vec<(String, u64)> {
        let mut rows: Vec<(String, u64, u64)> = self
            .map
            .iter()
            .map(|r| (r.key().clone(), r.value().count.load(Ordering::Relaxed), r.value().seq))
            .collect();
        rows.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));
        rows.truncate(n);
        rows.into_iter().map(|(v, c, _)| (v, c)).collect()
    }
}

/// Process-wide stats aggregator: one table per category.
#[derive(Default)]
pub struct Stats {
    device: CounterTable,
    os: CounterTable,
    browser: CounterTable,
    country: CounterTable,
}

/// Top-5 snapshot per category, in fixed category order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopStats {
    pub device: Vec<(String, u64)>,
    pub os: Vec<(String, u64)>,
    pub browser: Vec<(String, u64)>,
    pub country: Vec<(String, u64)>,
}

impl TopStats {
    /// Category name + rows, in display order.
    pub fn categories(&self) -> [(&'static str, &[(String, u64)]); 4] {
        [
            ("device", self.device.as_slice()),
            ("os", self.os.as_slice()),
            ("browser", self.browser.as_slice()),
            ("country", self.country.as_slice()),
        ]
    }
}

impl Stats {
    /// Tally the populated categories of one description.
    pub fn update(&self, d: &RequestDescription) {
        if let Some(family) = &d.device.family {
            self.device.inc(family);
        }
        if let Some(family) = &d.os.family {
            self.os.inc(family);
        }
        if let Some(family) = &d.browser.family {
            self.browser.inc(family);
        }
        if let Some(country) = &d.location.country {
            self.country.inc(country);
        }
    }

    /// Snapshot the top values for each category.
    pub fn top(&self) -> TopStats {
        TopStats {
            device: self.device.top(TOP_N),
            os: self.os.top(TOP_N),
            browser: self.browser.top(TOP_N),
            country: self.country.top(TOP_N),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqmirror_core::describe::{parse_user_agent, Location, RequestDescription};

    #[test]
    fn top_is_bounded_and_sorted_descending() {
        let table = CounterTable::default();
        for (value, hits) in [("a", 1), ("b", 4), ("c", 2), ("d", 6), ("e", 3), ("f", 5)] {
            for _ in 0..hits {
                table.inc(value);
            }
        }
        let top = table.top(TOP_N);
        assert_eq!(top.len(), TOP_N);
        assert_eq!(top[0], ("d".to_string(), 6));
        for pair in top.windows(2) {
            assert!(pair[0].1 >= pair[1].1);
        }
        assert!(!top.iter().any(|(v, _)| v == "a"), "lowest count must fall out");
    }

    #[test]
    fn equal_counts_rank_first_seen_first() {
        let table = CounterTable::default();
        table.inc("first");
        table.inc("second");
        table.inc("second");
        table.inc("first");
        let top = table.top(TOP_N);
        assert_eq!(top[0].0, "first");
        assert_eq!(top[1].0, "second");
    }

    #[test]
    fn update_touches_only_populated_categories() {
        let stats = Stats::default();
        let d = RequestDescription {
            ip: "203.0.113.5".to_string(),
            location: Location::new(None, Some("DE".into())),
            ..Default::default()
        };
        stats.update(&d);
        let top = stats.top();
        assert_eq!(top.country, vec![("DE".to_string(), 1)]);
        assert!(top.device.is_empty());
        assert!(top.os.is_empty());
        assert!(top.browser.is_empty());
    }

    #[test]
    fn one_visit_increments_each_populated_category_once() {
        let stats = Stats::default();
        let d = RequestDescription::new(
            "203.0.113.5".to_string(),
            Location::new(Some("Berlin".into()), Some("DE".into())),
            parse_user_agent(
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
            ),
        );
        stats.update(&d);
        stats.update(&d);
        let top = stats.top();
        assert_eq!(top.browser, vec![("Chrome".to_string(), 2)]);
        assert_eq!(top.country, vec![("DE".to_string(), 2)]);
        assert_eq!(top.device.len(), 1);
        assert_eq!(top.os.len(), 1);
    }
}
