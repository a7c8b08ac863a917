//! Text formatting for route summaries.

use chrono::TimeDelta;

use crate::analyzers::types::{Route, RouteSummary};

/// Formats a duration as `<H>ч <M>м` using total hours.
///
/// Negative durations get a leading `-` and magnitude hours and minutes.
pub fn format_duration(duration: TimeDelta) -> String {
    let total = duration.num_minutes();
    let sign = if total < 0 { "-" } else { "" };
    let magnitude = total.unsigned_abs();
    format!("{}{}ч {}м", sign, magnitude / 60, magnitude % 60)
}

pub fn not_found_message(route: &Route) -> String {
    format!("Билеты по маршруту {} не найдены.", route)
}

/// Renders the human-readable report, carriers in alphabetical order.
pub fn render_report(summary: &RouteSummary) -> String {
    let carriers: String = summary
        .min_by_carrier
        .iter()
        .map(|(carrier, duration)| format!("{}: {}\n", carrier, format_duration(*duration)))
        .collect();

    format!(
        "Минимальное время полета по перевозчикам:\n\
         {carriers}\n\
         Среднее время полета: {} минут\n\
         Медианное время полета: {} минут\n\
         Разница (среднее - медиана): {} минут\n",
        summary.average_truncated(),
        summary.median_truncated(),
        summary.difference(),
    )
}
