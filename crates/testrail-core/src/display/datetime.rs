//! DateTime display utilities.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

/// A wrapper around `Timestamp` that formats it in UTC via `Display`.
///
/// Wire timestamps carry no zone, so they are always shown in UTC rather
/// than the local zone: `YYYY-MM-DD HH:MM:SS UTC`.
pub struct UtcDateTime<'a>(pub &'a Timestamp);

impl<'a> fmt::Display for UtcDateTime<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(TimeZone::UTC)
                .strftime("%Y-%m-%d %H:%M:%S UTC")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch() {
        let ts = Timestamp::UNIX_EPOCH;
        assert_eq!(UtcDateTime(&ts).to_string(), "1970-01-01 00:00:00 UTC");
    }

    #[test]
    fn test_known_instant() {
        let ts = Timestamp::from_second(1_640_995_200).unwrap();
        assert_eq!(UtcDateTime(&ts).to_string(), "2022-01-01 00:00:00 UTC");
    }
}
