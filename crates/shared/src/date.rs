use time::OffsetDateTime;

/// Current unix timestamp in seconds.
pub fn now() -> i64 {
    OffsetDateTime::now_utc().unix_timestamp()
}
