use time::{Date, OffsetDateTime, UtcOffset};

use crate::domain::TimeLog;

/// Daily cap on registered hours per worker.
pub const DAILY_HOUR_LIMIT: f64 = 8.0;

/// The hour increments offered on the registration screen.
pub const HOUR_OPTIONS: [f64; 9] = [0.5, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];

/// Sum of logged hours for `worker_id` whose timestamp falls on `date` when
/// viewed at `offset`. A log exactly at local midnight belongs to the date
/// it falls on, not the previous day.
pub fn hours_on_date(worker_id: &str, date: Date, offset: UtcOffset, logs: &[TimeLog]) -> f64 {
    logs.iter()
        .filter(|log| log.worker_id == worker_id)
        .filter(|log| log.timestamp.to_offset(offset).date() == date)
        .map(|log| log.hours)
        .sum()
}

/// Hours a worker may still register today: `max(0, limit - logged)`.
pub fn remaining_hours(logged_today: f64) -> f64 {
    (DAILY_HOUR_LIMIT - logged_today).max(0.0)
}

/// Whether an increment may be offered given today's total. Increments that
/// would push the total strictly above the limit are shown but disabled.
pub fn is_selectable(increment: f64, logged_today: f64) -> bool {
    logged_today + increment <= DAILY_HOUR_LIMIT
}

/// Offset for kiosk time math, falling back to UTC when the platform cannot
/// report a local one.
pub fn local_offset() -> UtcOffset {
    UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC)
}

pub fn today(offset: UtcOffset) -> Date {
    OffsetDateTime::now_utc().to_offset(offset).date()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Project, Worker};
    use time::macros::{date, datetime, offset};

    fn log_at(worker: &Worker, hours: f64, timestamp: OffsetDateTime) -> TimeLog {
        TimeLog::register(worker, &Project::new("P"), hours, timestamp)
    }

    #[test]
    fn sums_only_matching_worker_and_date() {
        let a = Worker::new("A");
        let b = Worker::new("B");
        let logs = vec![
            log_at(&a, 2.0, datetime!(2026-08-07 09:00 +2)),
            log_at(&a, 3.0, datetime!(2026-08-07 14:00 +2)),
            log_at(&a, 4.0, datetime!(2026-08-06 09:00 +2)),
            log_at(&b, 5.0, datetime!(2026-08-07 09:00 +2)),
        ];

        assert_eq!(
            hours_on_date(&a.id, date!(2026 - 08 - 07), offset!(+2), &logs),
            5.0
        );
    }

    #[test]
    fn day_boundary_belongs_to_the_date_it_falls_on() {
        let a = Worker::new("A");
        let logs = vec![
            log_at(&a, 1.0, datetime!(2026-08-06 23:59:59 +2)),
            log_at(&a, 2.0, datetime!(2026-08-07 00:00:00 +2)),
            log_at(&a, 3.0, datetime!(2026-08-07 00:00:01 +2)),
        ];

        assert_eq!(
            hours_on_date(&a.id, date!(2026 - 08 - 07), offset!(+2), &logs),
            5.0
        );
        assert_eq!(
            hours_on_date(&a.id, date!(2026 - 08 - 06), offset!(+2), &logs),
            1.0
        );
    }

    #[test]
    fn local_date_is_derived_at_the_given_offset() {
        let a = Worker::new("A");
        // 23:30 UTC on the 6th is already the 7th at +02:00.
        let logs = vec![log_at(&a, 2.0, datetime!(2026-08-06 23:30 UTC))];

        assert_eq!(
            hours_on_date(&a.id, date!(2026 - 08 - 07), offset!(+2), &logs),
            2.0
        );
        assert_eq!(
            hours_on_date(&a.id, date!(2026 - 08 - 06), offset!(+2), &logs),
            0.0
        );
    }

    #[test]
    fn remaining_hours_clamps_at_zero() {
        assert_eq!(remaining_hours(0.0), 8.0);
        assert_eq!(remaining_hours(5.5), 2.5);
        assert_eq!(remaining_hours(8.0), 0.0);
        assert_eq!(remaining_hours(9.0), 0.0);
    }

    #[test]
    fn no_selectable_increment_exceeds_the_limit() {
        for logged in [0.0, 0.5, 3.0, 7.5, 8.0] {
            for increment in HOUR_OPTIONS {
                if is_selectable(increment, logged) {
                    assert!(logged + increment <= DAILY_HOUR_LIMIT);
                }
            }
        }
        // The half-hour step stays offered right up to the cap.
        assert!(is_selectable(0.5, 7.5));
        assert!(!is_selectable(1.0, 7.5));
    }
}
