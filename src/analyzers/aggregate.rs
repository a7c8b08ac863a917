use crate::analyzers::types::{Route, RouteSummary};
use crate::analyzers::utility::{mean, median};
use crate::ticket::Ticket;
use chrono::TimeDelta;
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use tracing::debug;

/// Tickets flying exactly `route`, in their original order.
pub fn filter_route<'a>(tickets: &'a [Ticket], route: &Route) -> Vec<&'a Ticket> {
    tickets
        .iter()
        .filter(|t| t.origin == route.origin && t.destination == route.destination)
        .collect()
}

/// Smallest flight duration per carrier. Negative durations sort below zero.
pub fn min_by_carrier(tickets: &[&Ticket]) -> BTreeMap<String, TimeDelta> {
    let mut minimums: BTreeMap<String, TimeDelta> = BTreeMap::new();

    for ticket in tickets {
        let duration = ticket.flight_duration();
        match minimums.entry(ticket.carrier.clone()) {
            Entry::Vacant(slot) => {
                slot.insert(duration);
            }
            Entry::Occupied(mut slot) => {
                if duration < *slot.get() {
                    slot.insert(duration);
                }
            }
        }
    }

    minimums
}

/// Flight durations in whole minutes, truncated toward zero, sorted ascending.
pub fn duration_minutes(tickets: &[&Ticket]) -> Vec<i64> {
    let mut minutes: Vec<i64> = tickets
        .iter()
        .map(|t| t.flight_duration().num_minutes())
        .collect();
    minutes.sort_unstable();
    minutes
}

/// Summarizes the tickets on `route`.
///
/// Returns `None` when no ticket matches; no statistic is computed then.
pub fn summarize_route(tickets: &[Ticket], route: &Route) -> Option<RouteSummary> {
    let matched = filter_route(tickets, route);
    debug!(route = %route, matched = matched.len(), "Route filtered");

    if matched.is_empty() {
        return None;
    }

    let minutes = duration_minutes(&matched);

    Some(RouteSummary {
        route: route.clone(),
        ticket_count: matched.len(),
        min_by_carrier: min_by_carrier(&matched),
        average_minutes: mean(&minutes),
        median_minutes: median(&minutes),
    })
}
