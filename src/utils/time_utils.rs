use chrono::{DateTime, Local};

/// Monotonic instant that also works in the browser.
pub type AppInstant = web_time::Instant;

pub struct TimeUtils;

impl TimeUtils {
    pub const CLOCK_FORMAT: &str = "%H:%M:%S";
    pub const DATE_TIME_FORMAT: &str = "%d.%m.%Y, %H:%M:%S";
}

// Time Helper functions

pub fn now_local() -> DateTime<Local> {
    Local::now()
}

pub fn now_timestamp_ms() -> i64 {
    Local::now().timestamp_millis()
}

/// Wall-clock time of day, used for the live trades list.
pub fn format_clock(at: &DateTime<Local>) -> String {
    at.format(TimeUtils::CLOCK_FORMAT).to_string()
}

/// Full date and time, used on the receipt.
pub fn format_date_time(at: &DateTime<Local>) -> String {
    at.format(TimeUtils::DATE_TIME_FORMAT).to_string()
}

/// Transaction reference: "TX" plus the last 8 digits of the epoch millisecond timestamp.
pub fn transaction_id(epoch_ms: i64) -> String {
    let digits = epoch_ms.unsigned_abs().to_string();
    let tail = &digits[digits.len().saturating_sub(8)..];
    format!("TX{}", tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transaction_id_keeps_last_eight_digits() {
        assert_eq!(transaction_id(1_718_000_123_456), "TX00123456");
        assert_eq!(transaction_id(42), "TX42");
    }
}
