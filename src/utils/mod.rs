mod format_utils;
mod perf;
mod time_utils;

pub use format_utils::{format_pct_change, format_quantity, group_thousands};
pub use time_utils::{
    AppInstant, TimeUtils, epoch_sec_to_date_string, is_representable, now_timestamp_sec,
};
