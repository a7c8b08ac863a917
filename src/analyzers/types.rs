//! Data types used by the aggregation pipeline.

use chrono::TimeDelta;
use std::collections::BTreeMap;
use std::fmt;

/// An (origin, destination) pair. Matching is exact and case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub origin: String,
    pub destination: String,
}

impl Route {
    pub fn new(origin: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}", self.origin, self.destination)
    }
}

/// Duration statistics for the tickets matching a single route.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteSummary {
    pub route: Route,
    pub ticket_count: usize,
    /// Shortest flight per carrier, ordered by carrier name.
    pub min_by_carrier: BTreeMap<String, TimeDelta>,
    pub average_minutes: f64,
    pub median_minutes: f64,
}

impl RouteSummary {
    pub fn average_truncated(&self) -> i64 {
        self.average_minutes.trunc() as i64
    }

    pub fn median_truncated(&self) -> i64 {
        self.median_minutes.trunc() as i64
    }

    /// Average minus median, each truncated to whole minutes first.
    pub fn difference(&self) -> i64 {
        self.average_truncated() - self.median_truncated()
    }
}
