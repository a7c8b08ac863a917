use chrono::TimeDelta;
use tickets_analyzer::analyzers::aggregate::summarize_route;
use tickets_analyzer::analyzers::types::Route;
use tickets_analyzer::loader::parse_document;
use tickets_analyzer::output::render_report;
use tickets_analyzer::parser::{RecordError, parse_tickets};

#[test]
fn test_full_pipeline() {
    let text = include_str!("fixtures/tickets.json");
    let root = parse_document(text).expect("Failed to parse fixture");
    let parsed = parse_tickets(&root).expect("Fixture has a tickets array");

    assert_eq!(parsed.tickets.len(), 6);
    assert_eq!(parsed.skipped.len(), 1);
    assert_eq!(parsed.skipped[0].index, 5);
    assert!(matches!(
        parsed.skipped[0].error,
        RecordError::Timestamp { field: "departure", .. }
    ));

    // TK 350 and 585, S7 390 and 365, SU 360
    let summary = summarize_route(&parsed.tickets, &Route::new("VVO", "TLV"))
        .expect("Route has tickets");
    assert_eq!(summary.ticket_count, 5);
    assert_eq!(summary.min_by_carrier["TK"], TimeDelta::minutes(350));
    assert_eq!(summary.min_by_carrier["S7"], TimeDelta::minutes(365));
    assert_eq!(summary.min_by_carrier["SU"], TimeDelta::minutes(360));
    assert_eq!(summary.average_minutes, 410.0);
    assert_eq!(summary.median_minutes, 365.0);
    assert_eq!(summary.difference(), 45);

    let report = render_report(&summary);
    assert!(report.starts_with("Минимальное время полета по перевозчикам:\nS7: 6ч 5м\nSU: 6ч 0м\nTK: 5ч 50м\n\n"));
    assert!(report.contains("Среднее время полета: 410 минут"));
}

#[test]
fn test_routes_filter_independently() {
    let root = parse_document(include_str!("fixtures/tickets.json")).unwrap();
    let parsed = parse_tickets(&root).unwrap();

    let lrn = summarize_route(&parsed.tickets, &Route::new("LRN", "TLV")).unwrap();
    assert_eq!(lrn.ticket_count, 1);
    assert_eq!(lrn.median_minutes, 100.0);

    assert!(summarize_route(&parsed.tickets, &Route::new("TLV", "VVO")).is_none());
}
