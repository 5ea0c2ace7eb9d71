//! Time source used for creation and update stamps.
//!
//! # Invariants
//! - `now` is the absolute instant; creation stamps and the journal day use it.
//! - `now_local` is the user's wall-clock reading; reminder schedules and the
//!   quote-of-day key are compared against it.

use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, Offset, Utc};

/// Supplies the current instant to the store and services.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;

    /// Current wall-clock time in the user's time zone.
    fn now_local(&self) -> NaiveDateTime;

    /// UTC calendar day of [`Clock::now`].
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }

    /// Calendar day of [`Clock::now_local`].
    fn local_today(&self) -> NaiveDate {
        self.now_local().date()
    }
}

/// Wall-clock time in the host time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn now_local(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock frozen at one instant and one UTC offset; used by tests and replay
/// tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    instant: DateTime<Utc>,
    offset: FixedOffset,
}

impl FixedClock {
    /// Frozen at `instant` for a user living at UTC.
    pub fn utc(instant: DateTime<Utc>) -> Self {
        Self::with_offset(instant, Utc.fix())
    }

    /// Frozen at `instant` for a user whose local time is `offset` from UTC.
    pub fn with_offset(instant: DateTime<Utc>, offset: FixedOffset) -> Self {
        Self { instant, offset }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.instant
    }

    fn now_local(&self) -> NaiveDateTime {
        self.instant.with_timezone(&self.offset).naive_local()
    }
}

#[cfg(test)]
mod tests {
    use super::{Clock, FixedClock};
    use chrono::{FixedOffset, NaiveDate, TimeZone, Utc};

    #[test]
    fn offset_shifts_local_reading_but_not_instant() {
        let instant = Utc.with_ymd_and_hms(2025, 3, 1, 23, 30, 0).unwrap();
        let ist = FixedOffset::east_opt(5 * 3600 + 1800).unwrap();
        let clock = FixedClock::with_offset(instant, ist);

        assert_eq!(clock.now(), instant);
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2025, 3, 1).unwrap());
        assert_eq!(clock.local_today(), NaiveDate::from_ymd_opt(2025, 3, 2).unwrap());
        assert_eq!(clock.now_local().to_string(), "2025-03-02 05:00:00");
    }

    #[test]
    fn utc_clock_reads_the_same_locally() {
        let instant = Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap();
        let clock = FixedClock::utc(instant);
        assert_eq!(clock.now_local(), instant.naive_utc());
    }
}
