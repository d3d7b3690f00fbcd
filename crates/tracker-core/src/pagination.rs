pub const DEFAULT_LIMIT: i64 = 100;
pub const DEFAULT_OFFSET: i64 = 0;
/// Limit value meaning "no limit"; SQLite reads a negative LIMIT the same way.
pub const UNLIMITED: i64 = -1;

/// A resolved page window for the events listing.
///
/// Raw query values that are missing or not integers fall back to the
/// defaults. Any negative limit becomes [`UNLIMITED`] and negative offsets are
/// clamped to zero, so storage never sees engine-specific values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    limit: i64,
    offset: i64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: DEFAULT_OFFSET,
        }
    }
}

impl PageRequest {
    pub fn new(limit: i64, offset: i64) -> Self {
        Self {
            limit: if limit < 0 { UNLIMITED } else { limit },
            offset: offset.max(0),
        }
    }

    pub fn from_raw(limit: Option<&str>, offset: Option<&str>) -> Self {
        Self::new(
            parse_or(limit, DEFAULT_LIMIT),
            parse_or(offset, DEFAULT_OFFSET),
        )
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }

    pub fn offset(&self) -> i64 {
        self.offset
    }
}

fn parse_or(raw: Option<&str>, default: i64) -> i64 {
    raw.and_then(|value| value.parse::<i64>().ok())
        .unwrap_or(default)
}
