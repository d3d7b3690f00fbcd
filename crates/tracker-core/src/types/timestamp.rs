use chrono::{DateTime, FixedOffset};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};

/// A client-supplied RFC 3339 instant.
///
/// The submitted text is kept verbatim, offset included, and is what goes back
/// out on the wire. Ordering uses [`Timestamp::sort_key`], the UTC instant as
/// whole seconds plus nanoseconds, which stays valid for any year chrono parses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timestamp {
    text: String,
    at: DateTime<FixedOffset>,
}

impl Timestamp {
    pub fn parse(text: &str) -> Result<Self, chrono::ParseError> {
        let at = DateTime::parse_from_rfc3339(text)?;
        Ok(Self {
            text: text.to_string(),
            at,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// `(unix seconds, subsecond nanos)` of the UTC instant.
    pub fn sort_key(&self) -> (i64, u32) {
        (self.at.timestamp(), self.at.timestamp_subsec_nanos())
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.text)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).map_err(|err| de::Error::custom(format!("invalid timestamp `{text}`: {err}")))
    }
}
