//! Period tokens and the calendar arithmetic behind them.
//!
//! A [`PeriodToken`] names a month, quarter, or year in the textual form the
//! tracker's views exchange (`"April 2025"`, `"Q2 2025"`, `"2025"`). The
//! engine half resolves tokens to inclusive [`DateRange`]s and walks them
//! backward and forward across year boundaries.

pub mod engine;
pub mod token;

pub use engine::DateRange;
pub use token::{Granularity, PeriodToken};
