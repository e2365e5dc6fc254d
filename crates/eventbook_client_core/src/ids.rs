//! Strongly-typed IDs. The booking API uses integer keys; routes carry them as strings.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::ClientError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EventId(pub i64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BookingId(pub i64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(pub i64);

/// Some backends send numeric keys as strings; accept both.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Int(i64),
    Text(String),
}

macro_rules! id_type {
    ($name:ident, $label:literal) => {
        impl $name {
            pub fn get(self) -> i64 {
                self.0
            }

            pub fn parse(s: impl AsRef<str>) -> Result<Self, ClientError> {
                Self::from_str(s.as_ref())
            }
        }

        impl FromStr for $name {
            type Err = ClientError;
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim()
                    .parse::<i64>()
                    .map($name)
                    .map_err(|e| ClientError::Validation(format!("invalid {} {:?}: {}", $label, s, e)))
            }
        }

        impl From<i64> for $name {
            fn from(v: i64) -> Self {
                $name(v)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, ser: S) -> Result<S::Ok, S::Error> {
                ser.serialize_i64(self.0)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(de: D) -> Result<Self, D::Error> {
                match RawId::deserialize(de)? {
                    RawId::Int(v) => Ok($name(v)),
                    RawId::Text(s) => Self::from_str(&s).map_err(serde::de::Error::custom),
                }
            }
        }
    };
}

id_type!(EventId, "event id");
id_type!(BookingId, "booking id");
id_type!(UserId, "user id");
