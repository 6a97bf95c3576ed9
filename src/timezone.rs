use time::{OffsetDateTime, UtcOffset};
use time_tz::{Offset, TimeZone, Tz};

/// Look up a timezone by its canonical name, e.g. "Pacific/Auckland".
pub fn get_timezone(canonical_timezone: &str) -> Option<&'static Tz> {
    time_tz::timezones::get_by_name(canonical_timezone)
}

/// The UTC offset of `timezone` at the instant `timestamp`.
pub fn get_offset_at(timezone: &Tz, timestamp: OffsetDateTime) -> UtcOffset {
    timezone.get_offset_utc(&timestamp).to_utc()
}
