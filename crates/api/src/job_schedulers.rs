use crate::digest::send_digest::SendDigestUseCase;
use crate::notification::check_notifications::CheckExpirationsUseCase;
use crate::shared::usecase::execute;
use certreg_infra::CertregContext;
use chrono::{TimeZone, Utc};
use chrono_tz::Tz;
use std::time::Duration;
use tracing::{error, info};

/// Runs the expiration digest once a day at the configured hour in the
/// configured timezone. The delay is recomputed after every run so that
/// drift and DST transitions never accumulate.
pub fn start_digest_job(ctx: CertregContext) {
    actix_web::rt::spawn(async move {
        loop {
            let now = ctx.sys.get_timestamp_millis();
            let delay = millis_until_next_run(now, ctx.config.digest_hour, &ctx.config.timezone);
            actix_web::rt::time::sleep(Duration::from_millis(delay as u64)).await;

            run_digest_cycle(&ctx).await;
        }
    });
}

/// One scheduled cycle: first refresh the dedup log so every record the
/// digest is about to mention carries its notification event, then
/// dispatch the digest itself.
async fn run_digest_cycle(ctx: &CertregContext) {
    info!("Triggering scheduled expiration digest");

    if let Err(e) = execute(CheckExpirationsUseCase {}, ctx).await {
        error!("Scheduled expiration check failed. Error: {:?}", e);
    }
    if let Err(e) = execute(SendDigestUseCase {}, ctx).await {
        error!("Scheduled digest run failed. Error: {:?}", e);
    }
}

/// Millis from `now_millis` until the next strictly-future occurrence of
/// `hour:00` local time in `tz`. A run triggered exactly on the hour
/// therefore schedules the following day.
pub fn millis_until_next_run(now_millis: i64, hour: u32, tz: &Tz) -> i64 {
    const DAY_MILLIS: i64 = 24 * 60 * 60 * 1000;

    let now = Utc.timestamp_millis(now_millis).with_timezone(tz);
    let today = now.naive_local().date();
    let tomorrow = match today.succ_opt() {
        Some(date) => date,
        None => return DAY_MILLIS,
    };

    let target = [today, tomorrow]
        .iter()
        .filter_map(|date| {
            date.and_hms_opt(hour, 0, 0)
                .and_then(|naive| tz.from_local_datetime(&naive).earliest())
        })
        .map(|run_at| run_at.timestamp_millis())
        .find(|millis| *millis > now_millis);

    match target {
        Some(millis) => millis - now_millis,
        // The configured hour fell into a DST gap, just try again in a day
        None => DAY_MILLIS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use certreg_domain::{NotificationSettings, TrainingRecord, ID};
    use certreg_infra::{ISys, InMemoryEmailService};
    use chrono::NaiveDate;
    use std::sync::Arc;

    struct StaticTimeSys(i64);
    impl ISys for StaticTimeSys {
        fn get_timestamp_millis(&self) -> i64 {
            self.0
        }
    }

    // 2021-02-20T12:00:00Z
    const NOW: i64 = 1613822400000;

    #[actix_web::test]
    async fn a_digest_cycle_records_dedup_markers_before_dispatching() {
        let mut ctx = CertregContext::create_inmemory();
        let email = Arc::new(InMemoryEmailService::default());
        ctx.sys = Arc::new(StaticTimeSys(NOW));
        ctx.config.timezone = chrono_tz::UTC;
        ctx.email = email.clone();

        ctx.repos
            .settings
            .set(&NotificationSettings {
                emails: vec!["hse@acme.test".into()],
                intervals: vec![7],
                updated_at: NOW,
                updated_by: "admin@certreg.test".into(),
            })
            .await
            .unwrap();

        // Expires in exactly 7 days, no client has loaded the record list
        let record = TrainingRecord {
            id: ID::new(),
            person_name: "Kari Nordmann".into(),
            company: "Acme AS".into(),
            training_type: "First Aid".into(),
            date_completed: NaiveDate::from_ymd_opt(2020, 2, 20).unwrap(),
            expiry_date: NaiveDate::from_ymd_opt(2021, 2, 27).unwrap(),
            training_org: "SafetyCo".into(),
            last_modified: NOW,
            modified_by: "admin@certreg.test".into(),
        };
        ctx.repos.records.insert(&record).await.unwrap();

        run_digest_cycle(&ctx).await;

        // The cycle both emailed the digest and left the dedup marker
        assert_eq!(email.sent().len(), 1);
        let events = ctx.repos.notification_events.find_all().await;
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].record_id, record.id);
        assert_eq!(events[0].days_to_expiration, 7);
    }

    #[test]
    fn schedules_the_next_occurrence_of_the_hour() {
        // 2021-02-20T23:00:00Z, digest at 09:00 UTC
        let delay = millis_until_next_run(1613862000000, 9, &chrono_tz::UTC);
        assert_eq!(delay, 10 * 60 * 60 * 1000);
    }

    #[test]
    fn a_run_on_the_hour_waits_a_full_day() {
        // Exactly 2021-02-20T09:00:00Z
        let delay = millis_until_next_run(1613811600000, 9, &chrono_tz::UTC);
        assert_eq!(delay, 24 * 60 * 60 * 1000);
    }

    #[test]
    fn the_hour_is_interpreted_in_the_given_timezone() {
        // 2021-02-20T12:00:00Z; 09:00 in New York is 14:00 UTC that day
        let delay = millis_until_next_run(1613822400000, 9, &chrono_tz::America::New_York);
        assert_eq!(delay, 2 * 60 * 60 * 1000);
    }
}
