//! Wall-clock source for the optional `HH:MM:SS` column.

use chrono::{Local, NaiveTime};

/// Replaceable clock. Tests pin it to a fixed instant.
pub type Clock = fn() -> NaiveTime;

/// Default clock: local wall time.
#[must_use]
pub fn system_clock() -> NaiveTime {
    Local::now().time()
}

/// Status lines only need second resolution; dates and zones would just add noise.
#[must_use]
pub fn format(time: NaiveTime) -> String {
    time.format("%H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_hours_minutes_seconds() {
        let t = NaiveTime::from_hms_milli_opt(9, 5, 7, 999).unwrap();
        assert_eq!(format(t), "09:05:07");
    }
}
