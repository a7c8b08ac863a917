//! Route filtering and flight-duration statistics.
//!
//! Tickets are narrowed to one route, then summarized into per-carrier
//! minimum durations plus the average and median duration in minutes.

pub mod aggregate;
pub mod types;
pub mod utility;
