use thiserror::Error;
use tracker_core::types::Timestamp;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("invalid timestamp: {value}")]
    InvalidTimestamp { value: String },
}

/// Rows only ever hold text that parsed on the way in, so a failure here means
/// the file was edited outside the service.
pub fn decode_timestamp(value: &str) -> Result<Timestamp, DbError> {
    Timestamp::parse(value).map_err(|_| DbError::InvalidTimestamp {
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_keeps_text() {
        let ts = decode_timestamp("2024-01-01T09:00:00.5-03:00").unwrap();
        assert_eq!(ts.as_str(), "2024-01-01T09:00:00.5-03:00");
    }

    #[test]
    fn decode_reports_bad_value() {
        let err = decode_timestamp("+10000-01-01T00:00:00Z").unwrap_err();
        assert_eq!(err.to_string(), "invalid timestamp: +10000-01-01T00:00:00Z");
    }
}
