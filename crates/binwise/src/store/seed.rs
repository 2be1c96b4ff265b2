//! Synthetic history generation for first-run stores.
//!
//! A fresh store is seeded with a plausible 30-day logging history so the
//! analytics views have something to show before the user has logged
//! anything themselves.

use chrono::{Days, NaiveDate};
use rand::Rng;

use crate::entry::{Category, WasteEntry};

/// Number of calendar days of history to generate.
pub const DEFAULT_SEED_DAYS: u32 = 30;

/// Maximum entries generated per day (minimum is always 1).
const MAX_ENTRIES_PER_DAY: u32 = 3;

/// Item labels each category draws from when generating history.
#[must_use]
pub fn vocabulary(category: Category) -> &'static [&'static str; 5] {
    match category {
        Category::Recyclable => &[
            "Plastic bottle",
            "Aluminum can",
            "Paper",
            "Cardboard",
            "Glass jar",
        ],
        Category::Compostable => &[
            "Food scraps",
            "Coffee grounds",
            "Banana peel",
            "Vegetables",
            "Eggshells",
        ],
        Category::Landfill => &[
            "Chip bag",
            "Styrofoam",
            "Broken glass",
            "Disposable utensils",
            "Cigarette butts",
        ],
    }
}

/// Generate a synthetic logging history ending at `today`.
///
/// Produces 1 to 3 entries for each of the last `days` calendar days, oldest
/// day first so that insertion order is chronological and a newest-first
/// listing reads naturally. Each entry gets a uniformly random category, an
/// item from that category's vocabulary, and a weight uniform in
/// [0.1, 2.1] kg rounded to 2 decimals.
pub fn generate_history<R: Rng + ?Sized>(
    rng: &mut R,
    today: NaiveDate,
    days: u32,
) -> Vec<WasteEntry> {
    let mut entries = Vec::new();

    for offset in (0..days).rev() {
        let date = today - Days::new(u64::from(offset));
        let per_day = rng.gen_range(1..=MAX_ENTRIES_PER_DAY);

        for _ in 0..per_day {
            let category = Category::ALL[rng.gen_range(0..Category::ALL.len())];
            let items = vocabulary(category);
            let item = items[rng.gen_range(0..items.len())];
            let weight = round2(rng.gen_range(0.1..2.1));

            entries.push(WasteEntry::new(item, category, weight, date));
        }
    }

    entries
}

/// Round to 2 decimal places.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
