mod command;
mod query;
mod sanitize;

pub use command::*;
pub use query::*;
pub use sanitize::sanitize;

pub(crate) fn now_millis() -> i64 {
    (time::OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as i64
}
