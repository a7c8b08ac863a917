//! The typed flight ticket produced by the parser.

use chrono::{NaiveDateTime, TimeDelta};
use serde_json::{Value, json};

/// A single flight ticket. Arrival is not required to follow departure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub carrier: String,
    pub origin: String,
    pub destination: String,
    pub departure: NaiveDateTime,
    pub arrival: NaiveDateTime,
    pub price: u32,
}

impl Ticket {
    /// Arrival minus departure. Negative when the input data is inconsistent.
    pub fn flight_duration(&self) -> TimeDelta {
        self.arrival - self.departure
    }

    /// Renders the ticket back into the raw record layout of the input file.
    pub fn to_record(&self) -> Value {
        json!({
            "carrier": self.carrier,
            "origin": self.origin,
            "destination": self.destination,
            "price": self.price,
            "departure_date": self.departure.format("%d.%m.%y").to_string(),
            "departure_time": self.departure.format("%-H:%M").to_string(),
            "arrival_date": self.arrival.format("%d.%m.%y").to_string(),
            "arrival_time": self.arrival.format("%-H:%M").to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2018, 5, day)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    fn ticket(departure: NaiveDateTime, arrival: NaiveDateTime) -> Ticket {
        Ticket {
            carrier: "TK".to_string(),
            origin: "VVO".to_string(),
            destination: "TLV".to_string(),
            departure,
            arrival,
            price: 12400,
        }
    }

    #[test]
    fn test_flight_duration_spans_midnight() {
        let t = ticket(at(12, 16, 20), at(13, 1, 5));
        assert_eq!(t.flight_duration(), TimeDelta::minutes(8 * 60 + 45));
    }

    #[test]
    fn test_flight_duration_can_be_negative() {
        let t = ticket(at(12, 16, 20), at(12, 15, 0));
        assert_eq!(t.flight_duration(), TimeDelta::minutes(-80));
    }

    #[test]
    fn test_to_record_uses_input_layout() {
        let t = ticket(at(2, 6, 5), at(2, 18, 40));
        let record = t.to_record();

        assert_eq!(record["departure_date"], "02.05.18");
        assert_eq!(record["departure_time"], "6:05");
        assert_eq!(record["arrival_time"], "18:40");
        assert_eq!(record["price"], 12400);
    }
}
