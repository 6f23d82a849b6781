//! Wall clock access that works on both native and WASM targets.
//!
//! `std::time::SystemTime::now` is unavailable on
//! `wasm32-unknown-unknown`; `web-time` provides the same API backed
//! by the browser clock.

use time::OffsetDateTime;
use web_time::{SystemTime, UNIX_EPOCH};

/// Current UTC time as an [`OffsetDateTime`], suitable for archive
/// timestamp labels.
///
/// Falls back to the Unix epoch if the platform clock is unavailable
/// or pre-epoch; archive naming degrades but nothing fails.
#[must_use]
pub fn now_utc() -> OffsetDateTime {
    let seconds = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    i64::try_from(seconds)
        .ok()
        .and_then(|s| OffsetDateTime::from_unix_timestamp(s).ok())
        .unwrap_or(OffsetDateTime::UNIX_EPOCH)
}
