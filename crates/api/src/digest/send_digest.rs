use crate::error::CertregError;
use crate::shared::auth::protect_admin_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use certreg_api_structs::send_digest::*;
use certreg_domain::{qualifying_records, DigestBucket, NotificationLogEntry, TrainingRecord, ID};
use certreg_infra::{CertregContext, Email};
use tracing::warn;

pub async fn send_digest_controller(
    http_req: HttpRequest,
    ctx: web::Data<CertregContext>,
) -> Result<HttpResponse, CertregError> {
    protect_admin_route(&http_req, &ctx)?;

    let usecase = SendDigestUseCase {};

    execute(usecase, &ctx)
        .await
        .map(|res| HttpResponse::Ok().json(APIResponse::new(res.entry)))
        .map_err(CertregError::from)
}

/// Recomputes the qualifying set from scratch, groups it into digest
/// sections and sends a single email covering all of it. One successful
/// dispatch appends one audit log entry. When there is nothing to report
/// or nobody to report to, no email goes out and no entry is written.
#[derive(Debug)]
pub struct SendDigestUseCase {}

#[derive(Debug)]
pub enum UseCaseError {
    Dispatch,
}

impl From<UseCaseError> for CertregError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::Dispatch => Self::InternalError,
        }
    }
}

#[derive(Debug)]
pub struct UseCaseRes {
    pub entry: Option<NotificationLogEntry>,
}

#[async_trait::async_trait(?Send)]
impl UseCase for SendDigestUseCase {
    type Response = UseCaseRes;

    type Error = UseCaseError;

    const NAME: &'static str = "SendExpirationDigest";

    async fn execute(&mut self, ctx: &CertregContext) -> Result<Self::Response, Self::Error> {
        let settings = match ctx.repos.settings.get().await {
            Some(settings) if !settings.emails.is_empty() => settings,
            _ => return Ok(UseCaseRes { entry: None }),
        };

        let records = ctx.repos.records.find_all().await;
        let today = ctx.sys.today(&ctx.config.timezone);
        let qualifying = qualifying_records(&records, &settings.intervals, today);
        if qualifying.is_empty() {
            return Ok(UseCaseRes { entry: None });
        }

        let mut expired = Vec::new();
        let mut urgent = Vec::new();
        let mut upcoming = Vec::new();
        for (record, days) in qualifying {
            match DigestBucket::from_days(days) {
                DigestBucket::Expired => expired.push((record, days)),
                DigestBucket::Urgent => urgent.push((record, days)),
                DigestBucket::Upcoming => upcoming.push((record, days)),
            }
        }

        let record_count = expired.len() + urgent.len() + upcoming.len();
        let email = Email {
            recipients: settings.emails.clone(),
            subject: format!(
                "Training Register Alert: {} Certifications Require Attention",
                record_count
            ),
            html: digest_html(&expired, &urgent, &upcoming),
        };

        if let Err(e) = ctx.email.send(&email).await {
            warn!("Unable to dispatch expiration digest. Error: {:?}", e);
            return Err(UseCaseError::Dispatch);
        }

        let entry = NotificationLogEntry {
            id: ID::new(),
            timestamp: ctx.sys.get_timestamp_millis(),
            recipient_count: settings.emails.len(),
            record_count,
            expired: expired.len(),
            urgent: urgent.len(),
            upcoming: upcoming.len(),
        };
        if let Err(e) = ctx.repos.notification_logs.append(&entry).await {
            // The digest already went out, the audit trail just has a hole
            warn!("Unable to append notification log entry. Error: {:?}", e);
        }

        Ok(UseCaseRes { entry: Some(entry) })
    }
}

fn digest_html(
    expired: &[(&TrainingRecord, i64)],
    urgent: &[(&TrainingRecord, i64)],
    upcoming: &[(&TrainingRecord, i64)],
) -> String {
    let mut html = String::from("<h2>Training Certification Digest</h2>");

    if !expired.is_empty() {
        html.push_str("<h3 style=\"color:#c0392b;\">Expired</h3><ul>");
        for (record, days) in expired {
            html.push_str(&format!(
                "<li><strong>{}</strong> ({}) - {}: expired {} day(s) ago on {}</li>",
                record.person_name,
                record.company,
                record.training_type,
                days.abs(),
                record.expiry_date
            ));
        }
        html.push_str("</ul>");
    }

    if !urgent.is_empty() {
        html.push_str("<h3 style=\"color:#e67e22;\">Expiring within a week</h3><ul>");
        for (record, days) in urgent {
            html.push_str(&format!(
                "<li><strong>{}</strong> ({}) - {}: expires in {} day(s) on {}</li>",
                record.person_name,
                record.company,
                record.training_type,
                days,
                record.expiry_date
            ));
        }
        html.push_str("</ul>");
    }

    if !upcoming.is_empty() {
        html.push_str("<h3>Upcoming expirations</h3><ul>");
        for (record, days) in upcoming {
            html.push_str(&format!(
                "<li><strong>{}</strong> ({}) - {}: expires in {} day(s) on {}</li>",
                record.person_name,
                record.company,
                record.training_type,
                days,
                record.expiry_date
            ));
        }
        html.push_str("</ul>");
    }

    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::usecase::execute;
    use certreg_domain::{NotificationSettings, ID};
    use certreg_infra::{IEmailService, ISys, InMemoryEmailService};
    use chrono::NaiveDate;
    use std::sync::Arc;

    struct StaticTimeSys(i64);
    impl ISys for StaticTimeSys {
        fn get_timestamp_millis(&self) -> i64 {
            self.0
        }
    }

    struct BrokenEmailService;
    #[async_trait::async_trait]
    impl IEmailService for BrokenEmailService {
        async fn send(&self, _email: &Email) -> anyhow::Result<()> {
            Err(anyhow::anyhow!("Relay unreachable"))
        }
    }

    // 2021-02-20T12:00:00Z
    const NOW: i64 = 1613822400000;

    fn ctx_at_noon() -> (CertregContext, Arc<InMemoryEmailService>) {
        let mut ctx = CertregContext::create_inmemory();
        let email = Arc::new(InMemoryEmailService::default());
        ctx.sys = Arc::new(StaticTimeSys(NOW));
        ctx.config.timezone = chrono_tz::UTC;
        ctx.email = email.clone();
        (ctx, email)
    }

    fn record_expiring(expiry_date: NaiveDate) -> TrainingRecord {
        TrainingRecord {
            id: ID::new(),
            person_name: "Kari Nordmann".into(),
            company: "Acme AS".into(),
            training_type: "First Aid".into(),
            date_completed: NaiveDate::from_ymd_opt(2020, 2, 20).unwrap(),
            expiry_date,
            training_org: "SafetyCo".into(),
            last_modified: NOW,
            modified_by: "admin@certreg.test".into(),
        }
    }

    async fn set_settings(ctx: &CertregContext, emails: Vec<String>, intervals: Vec<i64>) {
        ctx.repos
            .settings
            .set(&NotificationSettings {
                emails,
                intervals,
                updated_at: NOW,
                updated_by: "admin@certreg.test".into(),
            })
            .await
            .unwrap();
    }

    #[actix_web::test]
    async fn nothing_qualifying_sends_no_email_and_logs_nothing() {
        let (ctx, email) = ctx_at_noon();
        set_settings(&ctx, vec!["hse@acme.test".into()], vec![30, 7, 0]).await;

        // 100 days out, not on any interval
        let record = record_expiring(NaiveDate::from_ymd_opt(2021, 5, 31).unwrap());
        ctx.repos.records.insert(&record).await.unwrap();

        let res = execute(SendDigestUseCase {}, &ctx).await.unwrap();
        assert!(res.entry.is_none());
        assert!(email.sent().is_empty());
        assert!(ctx.repos.notification_logs.find_all().await.is_empty());
    }

    #[actix_web::test]
    async fn no_recipients_means_no_dispatch() {
        let (ctx, email) = ctx_at_noon();
        set_settings(&ctx, Vec::new(), vec![7]).await;

        let record = record_expiring(NaiveDate::from_ymd_opt(2021, 2, 27).unwrap());
        ctx.repos.records.insert(&record).await.unwrap();

        let res = execute(SendDigestUseCase {}, &ctx).await.unwrap();
        assert!(res.entry.is_none());
        assert!(email.sent().is_empty());
    }

    #[actix_web::test]
    async fn dispatches_one_email_and_appends_one_log_entry() {
        let (ctx, email) = ctx_at_noon();
        set_settings(
            &ctx,
            vec!["hse@acme.test".into(), "ops@acme.test".into()],
            vec![30, 7, 0, -1],
        )
        .await;

        // One per bucket: expired yesterday, urgent in 7 days, upcoming in 30
        for expiry in [
            NaiveDate::from_ymd_opt(2021, 2, 19).unwrap(),
            NaiveDate::from_ymd_opt(2021, 2, 27).unwrap(),
            NaiveDate::from_ymd_opt(2021, 3, 22).unwrap(),
        ] {
            let record = record_expiring(expiry);
            ctx.repos.records.insert(&record).await.unwrap();
        }

        let res = execute(SendDigestUseCase {}, &ctx).await.unwrap();
        let entry = res.entry.unwrap();
        assert_eq!(entry.recipient_count, 2);
        assert_eq!(entry.record_count, 3);
        assert_eq!(entry.expired, 1);
        assert_eq!(entry.urgent, 1);
        assert_eq!(entry.upcoming, 1);

        let sent = email.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(
            sent[0].subject,
            "Training Register Alert: 3 Certifications Require Attention"
        );
        assert!(sent[0].html.contains("expired 1 day(s) ago"));

        let logs = ctx.repos.notification_logs.find_all().await;
        assert_eq!(logs, vec![entry]);
    }

    #[actix_web::test]
    async fn failed_dispatch_is_an_error_and_logs_nothing() {
        let (mut ctx, _) = ctx_at_noon();
        ctx.email = Arc::new(BrokenEmailService);
        set_settings(&ctx, vec!["hse@acme.test".into()], vec![7]).await;

        let record = record_expiring(NaiveDate::from_ymd_opt(2021, 2, 27).unwrap());
        ctx.repos.records.insert(&record).await.unwrap();

        let res = execute(SendDigestUseCase {}, &ctx).await;
        assert!(matches!(res, Err(UseCaseError::Dispatch)));
        assert!(ctx.repos.notification_logs.find_all().await.is_empty());
    }

    #[test]
    fn html_omits_empty_sections() {
        let record = record_expiring(NaiveDate::from_ymd_opt(2021, 2, 27).unwrap());
        let urgent = vec![(&record, 7)];

        let html = digest_html(&[], &urgent, &[]);
        assert!(html.contains("Expiring within a week"));
        assert!(!html.contains("Expired</h3>"));
        assert!(!html.contains("Upcoming expirations"));
    }
}
