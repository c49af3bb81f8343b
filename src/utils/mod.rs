mod number;
mod time_utils;

pub use number::{format_grouped, parse_leading_f64};
pub use time_utils::{
    AppInstant, TimeUtils, format_clock, format_date_time, now_local, now_timestamp_ms,
    transaction_id,
};
