//! Converts the raw JSON document into typed [`Ticket`]s.
//!
//! A broken document shape is fatal ([`StructureError`]). A broken individual
//! record is skipped and reported ([`RecordError`]); its siblings still parse.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{debug, warn};

use crate::ticket::Ticket;

/// The document itself cannot be processed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StructureError {
    #[error("top-level JSON value is not an object")]
    NotAnObject,
    #[error("missing \"tickets\" key")]
    MissingTickets,
    #[error("\"tickets\" is not an array")]
    TicketsNotArray,
}

/// A single ticket record cannot be converted.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    #[error("record is not an object")]
    NotAnObject,
    #[error("missing field \"{0}\"")]
    MissingField(&'static str),
    #[error("field \"{field}\" is not {expected}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
    },
    #[error("field \"{0}\" is empty")]
    EmptyField(&'static str),
    #[error("price {0} is negative")]
    NegativePrice(i64),
    #[error("price {0} exceeds {max}", max = u32::MAX)]
    PriceOutOfRange(u64),
    #[error("cannot parse {field} \"{value}\": {source}")]
    Timestamp {
        field: &'static str,
        value: String,
        source: TimestampError,
    },
}

/// Why a `dd.mm.yy H:mm` string was rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimestampError {
    #[error("expected dd.mm.yy H:mm")]
    Layout,
    #[error("non-numeric component")]
    NotNumeric,
    #[error("no such calendar date")]
    InvalidDate,
    #[error("no such time of day")]
    InvalidTime,
}

/// A record that was dropped, with its 1-based position in the array.
#[derive(Debug, PartialEq, Eq)]
pub struct SkippedRecord {
    pub index: usize,
    pub error: RecordError,
}

#[derive(Debug, Default)]
pub struct ParsedTickets {
    pub tickets: Vec<Ticket>,
    pub skipped: Vec<SkippedRecord>,
}

/// Extracts every ticket under the root `"tickets"` array, in file order.
///
/// # Errors
///
/// Returns a [`StructureError`] if the root is not an object or has no
/// `"tickets"` array. Per-record failures never surface here.
pub fn parse_tickets(root: &Value) -> Result<ParsedTickets, StructureError> {
    let root = root.as_object().ok_or(StructureError::NotAnObject)?;
    let records = root
        .get("tickets")
        .ok_or(StructureError::MissingTickets)?
        .as_array()
        .ok_or(StructureError::TicketsNotArray)?;

    let mut parsed = ParsedTickets::default();

    for (i, record) in records.iter().enumerate() {
        let index = i + 1;
        match parse_record(record) {
            Ok(ticket) => parsed.tickets.push(ticket),
            Err(error) => {
                warn!(index, reason = %error, "Skipping malformed ticket");
                parsed.skipped.push(SkippedRecord { index, error });
            }
        }
    }

    debug!(
        parsed = parsed.tickets.len(),
        skipped = parsed.skipped.len(),
        "Ticket records processed"
    );

    Ok(parsed)
}

/// Builds one [`Ticket`] from a raw record.
pub fn parse_record(record: &Value) -> Result<Ticket, RecordError> {
    let fields = record.as_object().ok_or(RecordError::NotAnObject)?;

    Ok(Ticket {
        carrier: string_field(fields, "carrier")?,
        origin: string_field(fields, "origin")?,
        destination: string_field(fields, "destination")?,
        price: price_field(fields)?,
        departure: timestamp_field(fields, "departure", "departure_date", "departure_time")?,
        arrival: timestamp_field(fields, "arrival", "arrival_date", "arrival_time")?,
    })
}

fn raw_str<'a>(fields: &'a Map<String, Value>, name: &'static str) -> Result<&'a str, RecordError> {
    fields
        .get(name)
        .ok_or(RecordError::MissingField(name))?
        .as_str()
        .ok_or(RecordError::WrongType {
            field: name,
            expected: "a string",
        })
}

fn string_field(fields: &Map<String, Value>, name: &'static str) -> Result<String, RecordError> {
    let value = raw_str(fields, name)?;
    if value.is_empty() {
        return Err(RecordError::EmptyField(name));
    }
    Ok(value.to_string())
}

fn price_field(fields: &Map<String, Value>) -> Result<u32, RecordError> {
    let value = fields
        .get("price")
        .ok_or(RecordError::MissingField("price"))?;
    if let Some(price) = value.as_u64() {
        return u32::try_from(price).map_err(|_| RecordError::PriceOutOfRange(price));
    }
    match value.as_i64() {
        Some(negative) => Err(RecordError::NegativePrice(negative)),
        None => Err(RecordError::WrongType {
            field: "price",
            expected: "an integer",
        }),
    }
}

fn timestamp_field(
    fields: &Map<String, Value>,
    label: &'static str,
    date_key: &'static str,
    time_key: &'static str,
) -> Result<NaiveDateTime, RecordError> {
    let value = format!("{} {}", raw_str(fields, date_key)?, raw_str(fields, time_key)?);
    parse_timestamp(&value).map_err(|source| RecordError::Timestamp {
        field: label,
        value,
        source,
    })
}

/// Parses `dd.mm.yy H:mm` (hour may also be two digits).
///
/// Two-digit years map to 2000..=2099.
pub fn parse_timestamp(text: &str) -> Result<NaiveDateTime, TimestampError> {
    let (date, time) = text.split_once(' ').ok_or(TimestampError::Layout)?;

    let mut date_parts = date.split('.');
    let (Some(day), Some(month), Some(year), None) = (
        date_parts.next(),
        date_parts.next(),
        date_parts.next(),
        date_parts.next(),
    ) else {
        return Err(TimestampError::Layout);
    };
    let (hour, minute) = time.split_once(':').ok_or(TimestampError::Layout)?;

    let day = number(day, 2..=2)?;
    let month = number(month, 2..=2)?;
    let year = number(year, 2..=2)?;
    let hour = number(hour, 1..=2)?;
    let minute = number(minute, 2..=2)?;

    let date = NaiveDate::from_ymd_opt(2000 + year as i32, month, day)
        .ok_or(TimestampError::InvalidDate)?;
    let time = NaiveTime::from_hms_opt(hour, minute, 0).ok_or(TimestampError::InvalidTime)?;

    Ok(date.and_time(time))
}

fn number(part: &str, width: std::ops::RangeInclusive<usize>) -> Result<u32, TimestampError> {
    if !width.contains(&part.len()) {
        return Err(TimestampError::Layout);
    }
    if !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TimestampError::NotNumeric);
    }
    part.parse().map_err(|_| TimestampError::NotNumeric)
}
