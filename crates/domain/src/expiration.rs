use crate::record::TrainingRecord;
use chrono::{NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// Whole days from `today` until `expiry`.
///
/// Both values are calendar dates, so the difference is always an exact
/// number of days: negative when the certification has already expired
/// and zero when it expires today. Normalizing to dates before
/// differencing is what keeps the result independent of the time of day
/// at which it is computed.
pub fn days_to_expiration(expiry: NaiveDate, today: NaiveDate) -> i64 {
    expiry.signed_duration_since(today).num_days()
}

/// The calendar date of `timestamp_millis` in the given timezone.
///
/// "Today" must always be derived through this function so that the
/// interactive evaluator and the scheduled digest agree on day distances
/// regardless of when during the day they run.
pub fn local_date(timestamp_millis: i64, tz: &Tz) -> NaiveDate {
    Utc.timestamp_millis(timestamp_millis)
        .with_timezone(tz)
        .naive_local()
        .date()
}

/// Display classification for a record's day distance. Only used for
/// presentation, never for deciding whether a record qualifies for
/// notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExpirationStatus {
    Expired,
    ExpiringSoon,
    ExpiringMedium,
    Valid,
}

impl ExpirationStatus {
    pub fn from_days(days: i64) -> Self {
        if days < 0 {
            Self::Expired
        } else if days <= 30 {
            Self::ExpiringSoon
        } else if days <= 60 {
            Self::ExpiringMedium
        } else {
            Self::Valid
        }
    }
}

/// Digest grouping for notified records. The three buckets partition the
/// full range of day distances, so every notified record lands in exactly
/// one digest section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigestBucket {
    Expired,
    Urgent,
    Upcoming,
}

impl DigestBucket {
    pub fn from_days(days: i64) -> Self {
        if days < 0 {
            Self::Expired
        } else if days <= 7 {
            Self::Urgent
        } else {
            Self::Upcoming
        }
    }
}

/// Records whose day distance to expiration exactly matches one of the
/// configured intervals, paired with that distance.
///
/// Membership is exact equality, not a threshold: with intervals
/// `{30, 7, 0, -1}` a record fires at exactly those four distances and at
/// no other. Both the interactive evaluator and the daily digest derive
/// their qualifying set through this function.
pub fn qualifying_records<'a>(
    records: &'a [TrainingRecord],
    intervals: &[i64],
    today: NaiveDate,
) -> Vec<(&'a TrainingRecord, i64)> {
    records
        .iter()
        .map(|record| (record, days_to_expiration(record.expiry_date, today)))
        .filter(|(_, days)| intervals.contains(days))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::entity::ID;
    use chrono::Duration;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("Valid date")
    }

    fn record_factory(expiry_date: NaiveDate) -> TrainingRecord {
        TrainingRecord {
            id: ID::new(),
            person_name: "Kari Nordmann".into(),
            company: "Acme AS".into(),
            training_type: "First Aid".into(),
            date_completed: expiry_date - Duration::days(365),
            expiry_date,
            training_org: "SafetyCo".into(),
            last_modified: 0,
            modified_by: "admin@certreg.test".into(),
        }
    }

    #[test]
    fn day_distance_is_exact_at_day_boundaries() {
        let today = date(2024, 3, 10);
        for n in &[-40i64, -5, -1, 0, 1, 7, 30, 31, 60, 61, 365] {
            let expiry = today + Duration::days(*n);
            assert_eq!(days_to_expiration(expiry, today), *n);
        }
    }

    #[test]
    fn expired_record_has_negative_distance() {
        let today = date(2024, 3, 10);
        let expiry = today - Duration::days(5);
        let days = days_to_expiration(expiry, today);
        assert_eq!(days, -5);
        assert_eq!(DigestBucket::from_days(days), DigestBucket::Expired);
        // Displayed overdue magnitude
        assert_eq!(days.abs(), 5);
    }

    #[test]
    fn day_distance_crosses_month_and_year_boundaries() {
        assert_eq!(days_to_expiration(date(2024, 3, 1), date(2024, 2, 28)), 2);
        assert_eq!(days_to_expiration(date(2023, 3, 1), date(2023, 2, 28)), 1);
        assert_eq!(days_to_expiration(date(2025, 1, 1), date(2024, 12, 31)), 1);
    }

    #[test]
    fn local_date_depends_on_timezone() {
        // 2021-02-20 23:00:00 UTC
        let ts = 1613862000000;
        assert_eq!(local_date(ts, &chrono_tz::UTC), date(2021, 2, 20));
        // UTC+1 has already rolled over to the next day
        assert_eq!(local_date(ts, &chrono_tz::Europe::Oslo), date(2021, 2, 21));
    }

    #[test]
    fn status_bands() {
        assert_eq!(ExpirationStatus::from_days(-1), ExpirationStatus::Expired);
        assert_eq!(ExpirationStatus::from_days(0), ExpirationStatus::ExpiringSoon);
        assert_eq!(ExpirationStatus::from_days(30), ExpirationStatus::ExpiringSoon);
        assert_eq!(
            ExpirationStatus::from_days(31),
            ExpirationStatus::ExpiringMedium
        );
        assert_eq!(
            ExpirationStatus::from_days(60),
            ExpirationStatus::ExpiringMedium
        );
        assert_eq!(ExpirationStatus::from_days(61), ExpirationStatus::Valid);
    }

    #[test]
    fn digest_buckets_partition_all_day_distances() {
        for days in -400..400 {
            let bucket = DigestBucket::from_days(days);
            let expected = if days < 0 {
                DigestBucket::Expired
            } else if days <= 7 {
                DigestBucket::Urgent
            } else {
                DigestBucket::Upcoming
            };
            assert_eq!(bucket, expected);
        }
        assert_eq!(DigestBucket::from_days(0), DigestBucket::Urgent);
        assert_eq!(DigestBucket::from_days(7), DigestBucket::Urgent);
        assert_eq!(DigestBucket::from_days(8), DigestBucket::Upcoming);
    }

    #[test]
    fn qualification_is_exact_membership() {
        let today = date(2024, 3, 10);
        let at_30 = record_factory(today + Duration::days(30));
        let at_31 = record_factory(today + Duration::days(31));
        let records = vec![at_30.clone(), at_31];

        let qualifying = qualifying_records(&records, &[30], today);
        assert_eq!(qualifying.len(), 1);
        assert_eq!(qualifying[0].0.id, at_30.id);
        assert_eq!(qualifying[0].1, 30);
    }

    #[test]
    fn qualification_fires_for_negative_and_zero_intervals() {
        let today = date(2024, 3, 10);
        let records = vec![
            record_factory(today),
            record_factory(today - Duration::days(1)),
            record_factory(today + Duration::days(7)),
            record_factory(today + Duration::days(100)),
        ];

        let mut days: Vec<i64> = qualifying_records(&records, &[30, 7, 0, -1], today)
            .into_iter()
            .map(|(_, days)| days)
            .collect();
        days.sort_unstable();
        assert_eq!(days, vec![-1, 0, 7]);
    }

    #[test]
    fn no_intervals_means_nothing_qualifies() {
        let today = date(2024, 3, 10);
        let records = vec![record_factory(today)];
        assert!(qualifying_records(&records, &[], today).is_empty());
    }
}
