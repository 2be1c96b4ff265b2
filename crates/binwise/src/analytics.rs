//! Derived analytics over the entry collection.
//!
//! Everything here is a pure function over a slice of entries and a reference
//! date. Nothing is cached: every call recomputes from scratch, which is fine
//! because the input is bounded to a single user's history (tens to low
//! hundreds of entries).

use std::collections::BTreeMap;

use chrono::{Days, NaiveDate};
use serde::Serialize;

use crate::entry::{Category, WasteEntry};

/// Per-date partial weight sums, split by category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayBreakdown {
    /// The calendar date these sums cover.
    pub date: NaiveDate,
    /// Weight of recyclable entries on this date, in kg.
    pub recyclable: f64,
    /// Weight of compostable entries on this date, in kg.
    pub compostable: f64,
    /// Weight of landfill entries on this date, in kg.
    pub landfill: f64,
}

impl DayBreakdown {
    /// An empty breakdown for the given date.
    #[must_use]
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            recyclable: 0.0,
            compostable: 0.0,
            landfill: 0.0,
        }
    }

    /// Add an entry's weight to the matching category bucket.
    fn add(&mut self, category: Category, weight: f64) {
        match category {
            Category::Recyclable => self.recyclable += weight,
            Category::Compostable => self.compostable += weight,
            Category::Landfill => self.landfill += weight,
        }
    }

    /// Total weight across all three categories.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.recyclable + self.compostable + self.landfill
    }
}

/// Summary statistics computed from the entry collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analytics {
    /// Sum of weight over all entries, in kg.
    pub total_weight: f64,
    /// Count of all entries.
    pub total_entries: usize,
    /// Weight per category. Categories with no entries are absent, not
    /// zero-filled.
    pub category_totals: BTreeMap<Category, f64>,
    /// Weight sum for entries dated within the last 7 days (inclusive).
    pub last_7_days: f64,
    /// Weight sum for entries dated within the last 30 days (inclusive).
    pub last_30_days: f64,
    /// Sparse per-date breakdown for the last-7-days window, chronological.
    /// Only dates that have at least one entry appear; use [`daily_series`]
    /// when a fixed zero-filled 7-day axis is needed.
    pub daily_data: Vec<DayBreakdown>,
}

/// Whether `date` falls within the closed window `[now - days, now]`.
fn in_window(date: NaiveDate, now: NaiveDate, days: u64) -> bool {
    let lower = now - Days::new(days);
    date >= lower && date <= now
}

/// Compute summary statistics from the given entries.
///
/// `now` anchors the rolling 7- and 30-day windows; comparisons are by
/// calendar date only. Entries dated after `now` still count toward the
/// all-time totals but are excluded from the windowed sums.
#[must_use]
pub fn compute_analytics(entries: &[WasteEntry], now: NaiveDate) -> Analytics {
    let mut total_weight = 0.0;
    let mut category_totals: BTreeMap<Category, f64> = BTreeMap::new();
    let mut last_7_days = 0.0;
    let mut last_30_days = 0.0;
    let mut daily: BTreeMap<NaiveDate, DayBreakdown> = BTreeMap::new();

    for entry in entries {
        total_weight += entry.weight;
        *category_totals.entry(entry.category).or_insert(0.0) += entry.weight;

        if in_window(entry.date, now, 30) {
            last_30_days += entry.weight;
        }
        if in_window(entry.date, now, 7) {
            last_7_days += entry.weight;
            daily
                .entry(entry.date)
                .or_insert_with(|| DayBreakdown::empty(entry.date))
                .add(entry.category, entry.weight);
        }
    }

    Analytics {
        total_weight,
        total_entries: entries.len(),
        category_totals,
        last_7_days,
        last_30_days,
        daily_data: daily.into_values().collect(),
    }
}

/// Dense daily breakdown for the last 7 calendar days.
///
/// Returns exactly 7 elements covering `now - 6 ..= now` in chronological
/// order, with dates that have no entries zero-filled. This is the variant
/// chart consumers want for a fixed 7-day axis; [`compute_analytics`]'s
/// `daily_data` is the sparse equivalent.
#[must_use]
pub fn daily_series(entries: &[WasteEntry], now: NaiveDate) -> Vec<DayBreakdown> {
    let mut series: Vec<DayBreakdown> = (0..7)
        .rev()
        .map(|offset| DayBreakdown::empty(now - Days::new(offset)))
        .collect();

    for entry in entries {
        if let Some(day) = series.iter_mut().find(|d| d.date == entry.date) {
            day.add(entry.category, entry.weight);
        }
    }

    series
}

/// Percent change of the current 7-day weight versus the previous 7 days.
///
/// The previous window is `[now - 14, now - 7)` by calendar date. Returns
/// `None` when the previous week has no logged weight, since there is no
/// baseline to compare against. Negative values mean less waste this week.
#[must_use]
pub fn week_over_week(entries: &[WasteEntry], now: NaiveDate) -> Option<f64> {
    let current: f64 = entries
        .iter()
        .filter(|e| in_window(e.date, now, 7))
        .map(|e| e.weight)
        .sum();

    let prev_lower = now - Days::new(14);
    let prev_upper = now - Days::new(7);
    let previous: f64 = entries
        .iter()
        .filter(|e| e.date >= prev_lower && e.date < prev_upper)
        .map(|e| e.weight)
        .sum();

    if previous > 0.0 {
        Some((current - previous) / previous * 100.0)
    } else {
        None
    }
}

/// Total points earned across all entries.
#[must_use]
pub fn points_earned(entries: &[WasteEntry]) -> u64 {
    entries.iter().map(|e| u64::from(e.points)).sum()
}
