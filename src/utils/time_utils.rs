use chrono::{DateTime, Utc};

pub type AppInstant = web_time::Instant;

pub struct TimeUtils;

impl TimeUtils {
    pub const S_IN_MIN: i64 = 60;
    pub const S_IN_H: i64 = Self::S_IN_MIN * 60;
    pub const S_IN_D: i64 = Self::S_IN_H * 24;
    pub const STANDARD_TIME_FORMAT: &str = "%Y-%m-%d";
}

// Time Helper functions

/// `YYYY-MM-DD` (UTC) for a unix timestamp, or `None` when chrono cannot represent it.
pub fn epoch_sec_to_date_string(epoch_sec: i64) -> Option<String> {
    DateTime::from_timestamp(epoch_sec, 0)
        .map(|dt| dt.format(TimeUtils::STANDARD_TIME_FORMAT).to_string())
}

pub fn is_representable(epoch_sec: i64) -> bool {
    DateTime::from_timestamp(epoch_sec, 0).is_some()
}

pub fn now_timestamp_sec() -> i64 {
    Utc::now().timestamp()
}
