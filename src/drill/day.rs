use chrono::{
    DateTime,
    FixedOffset,
    Utc,
};

/// Drill days roll over at midnight UTC+9, always. Using a fixed offset
/// instead of a named timezone keeps the day boundary independent of the
/// host's locale settings and of DST rules.
pub const JST_OFFSET_SECS: i32 = 9 * 3600;

fn jst() -> FixedOffset {
    // 9 hours is always a valid offset.
    FixedOffset::east_opt(JST_OFFSET_SECS).expect("fixed +09:00 offset")
}

/// Civil date string (`YYYY-MM-DD`) of an instant, shifted to UTC+9.
pub fn jst_day_of(instant: DateTime<Utc>) -> String {
    instant.with_timezone(&jst()).format("%Y-%m-%d").to_string()
}

/// Today's civil date at UTC+9, the day key for daily set selection.
pub fn today_jst() -> String {
    jst_day_of(Utc::now())
}
