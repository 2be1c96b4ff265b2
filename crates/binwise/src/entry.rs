//! Core waste entry types for binwise.
//!
//! This module defines the fundamental data structures for representing
//! logged waste items and their classification.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::Error;

/// The classification of a logged waste item.
///
/// The three categories are closed: adding a fourth means touching the
/// points table, the seed vocabulary, and every exhaustive match, which is
/// exactly what the compiler will point out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Plastic, glass, paper, metal.
    Recyclable,
    /// Food scraps and other organic waste.
    Compostable,
    /// Non-recyclable waste.
    Landfill,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Self; 3] = [Self::Recyclable, Self::Compostable, Self::Landfill];

    /// Points awarded for logging an entry in this category.
    ///
    /// The table is fixed: an entry's points are assigned once at creation
    /// and never recomputed, even if this table were to change.
    #[must_use]
    pub fn points(self) -> u32 {
        match self {
            Self::Recyclable => 10,
            Self::Compostable => 8,
            Self::Landfill => 2,
        }
    }

    /// A short description of what belongs in this category.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Recyclable => "Plastic, glass, paper, metal",
            Self::Compostable => "Food scraps, organic waste",
            Self::Landfill => "Non-recyclable waste",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Recyclable => write!(f, "recyclable"),
            Self::Compostable => write!(f, "compostable"),
            Self::Landfill => write!(f, "landfill"),
        }
    }
}

impl std::str::FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "recyclable" => Ok(Self::Recyclable),
            "compostable" => Ok(Self::Compostable),
            "landfill" => Ok(Self::Landfill),
            other => Err(Error::unknown_category(other)),
        }
    }
}

/// A single logged waste item.
///
/// Entries are immutable once created: they are never edited or deleted,
/// only appended to the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WasteEntry {
    /// Unique identifier (random UUID assigned at creation).
    pub id: String,

    /// The calendar date the waste was logged for (no time component).
    pub date: NaiveDate,

    /// The waste classification.
    pub category: Category,

    /// Free-text label for the item ("Plastic bottle", "Coffee grounds", ...).
    pub item: String,

    /// Weight in kilograms.
    pub weight: f64,

    /// Points earned, derived from the category at creation time.
    pub points: u32,
}

impl WasteEntry {
    /// Create a new entry with a fresh id and points derived from the category.
    #[must_use]
    pub fn new(item: impl Into<String>, category: Category, weight: f64, date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            date,
            category,
            item: item.into(),
            weight,
            points: category.points(),
        }
    }
}
