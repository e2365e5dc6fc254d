//! Tolerant decoding for the booking API's JSON.
//! Numeric columns may come back as JSON strings ("30.00"), dates as either
//! `YYYY-MM-DD` or full timestamps.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawNumber {
    Num(f64),
    Text(String),
}

fn parse_number<E: DeError>(raw: RawNumber) -> Result<Option<f64>, E> {
    match raw {
        RawNumber::Num(n) => Ok(Some(n)),
        RawNumber::Text(s) if s.trim().is_empty() => Ok(None),
        RawNumber::Text(s) => s
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|e| E::custom(format!("invalid number {:?}: {}", s, e))),
    }
}

/// Nullable, non-negative price. Absent, `null` and `""` all mean "free".
pub mod price {
    use super::*;

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<Option<f64>, D::Error> {
        let raw: Option<RawNumber> = Option::deserialize(de)?;
        let value = match raw {
            Some(raw) => parse_number::<D::Error>(raw)?,
            None => None,
        };
        match value {
            Some(p) if p < 0.0 || !p.is_finite() => {
                Err(D::Error::custom(format!("price must be non-negative, got {}", p)))
            }
            other => Ok(other),
        }
    }

    pub fn serialize<S: Serializer>(value: &Option<f64>, ser: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(p) => ser.serialize_f64(*p),
            None => ser.serialize_none(),
        }
    }
}

/// Money amount; missing or `null` decodes as 0.
pub mod amount {
    use super::*;

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<f64, D::Error> {
        let raw: Option<RawNumber> = Option::deserialize(de)?;
        match raw {
            Some(raw) => Ok(parse_number::<D::Error>(raw)?.unwrap_or(0.0)),
            None => Ok(0.0),
        }
    }

    pub fn serialize<S: Serializer>(value: &f64, ser: S) -> Result<S::Ok, S::Error> {
        ser.serialize_f64(*value)
    }
}

/// Seat or ticket counts: non-negative integers, possibly sent as strings.
pub mod count {
    use super::*;

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<u32, D::Error> {
        let raw: Option<RawNumber> = Option::deserialize(de)?;
        let value = match raw {
            Some(raw) => parse_number::<D::Error>(raw)?.unwrap_or(0.0),
            None => 0.0,
        };
        if value < 0.0 || value.fract() != 0.0 || value > f64::from(u32::MAX) {
            return Err(D::Error::custom(format!("expected a non-negative integer, got {}", value)));
        }
        Ok(value as u32)
    }

    pub fn serialize<S: Serializer>(value: &u32, ser: S) -> Result<S::Ok, S::Error> {
        ser.serialize_u32(*value)
    }
}

/// Split whatever the API sends into a calendar date and, when present, the time of day.
/// Timestamps with an offset keep the wall-clock date and time of that offset.
pub fn parse_date_time(s: &str) -> Option<(NaiveDate, Option<NaiveTime>)> {
    let s = s.trim();
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some((d, None));
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some((dt.date_naive(), Some(dt.time())));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some((dt.date(), Some(dt.time())));
        }
    }
    s.get(..10)
        .and_then(|head| NaiveDate::parse_from_str(head, "%Y-%m-%d").ok())
        .map(|d| (d, None))
}

/// Parse the calendar date out of whatever the API sends.
pub fn parse_calendar_date(s: &str) -> Option<NaiveDate> {
    parse_date_time(s).map(|(date, _)| date)
}

pub mod calendar_date {
    use super::*;

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<NaiveDate, D::Error> {
        let s = String::deserialize(de)?;
        parse_calendar_date(&s).ok_or_else(|| D::Error::custom(format!("invalid date {:?}", s)))
    }

    pub fn serialize<S: Serializer>(value: &NaiveDate, ser: S) -> Result<S::Ok, S::Error> {
        ser.serialize_str(&value.format("%Y-%m-%d").to_string())
    }
}
