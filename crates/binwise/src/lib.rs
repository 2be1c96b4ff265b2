//! `binwise` - Track household waste, locally
//!
//! This library provides the core functionality for logging waste entries
//! into categories, computing aggregated analytics over the logged history,
//! and joining community challenges.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod analytics;
pub mod challenge;
pub mod cli;
pub mod config;
pub mod entry;
pub mod error;
pub mod logging;
pub mod store;

pub use analytics::{compute_analytics, daily_series, Analytics, DayBreakdown};
pub use challenge::{Challenge, ChallengeRegistry, JoinOutcome, JoinPolicy};
pub use config::Config;
pub use entry::{Category, WasteEntry};
pub use error::{Error, Result};
pub use logging::init_logging;
pub use store::EntryStore;
