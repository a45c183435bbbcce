use crate::error::CertregError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use certreg_api_structs::check_notifications::*;
use certreg_domain::{qualifying_records, NotificationEvent};
use certreg_infra::CertregContext;
use tracing::warn;

pub async fn check_notifications_controller(
    ctx: web::Data<CertregContext>,
) -> Result<HttpResponse, CertregError> {
    let usecase = CheckExpirationsUseCase {};

    execute(usecase, &ctx)
        .await
        .map(|res| HttpResponse::Ok().json(APIResponse::new(res.created)))
        .map_err(CertregError::from)
}

/// Walks every training record and materializes one notification event
/// per (record, days to expiration) pair that matches a configured
/// interval and has not been seen before. Reruns on the same day are
/// no-ops because the pair acts as a dedup key.
#[derive(Debug)]
pub struct CheckExpirationsUseCase {}

#[derive(Debug)]
pub enum UseCaseError {}

impl From<UseCaseError> for CertregError {
    fn from(e: UseCaseError) -> Self {
        match e {}
    }
}

#[derive(Debug)]
pub struct UseCaseRes {
    pub created: Vec<NotificationEvent>,
}

#[async_trait::async_trait(?Send)]
impl UseCase for CheckExpirationsUseCase {
    type Response = UseCaseRes;

    type Error = UseCaseError;

    const NAME: &'static str = "CheckExpirations";

    async fn execute(&mut self, ctx: &CertregContext) -> Result<Self::Response, Self::Error> {
        let settings = match ctx.repos.settings.get().await {
            Some(settings) => settings,
            // Nothing configured yet, there is nobody to notify anyway
            None => return Ok(UseCaseRes { created: Vec::new() }),
        };

        let records = ctx.repos.records.find_all().await;
        let today = ctx.sys.today(&ctx.config.timezone);
        let now = ctx.sys.get_timestamp_millis();

        let mut created = Vec::new();
        for (record, days) in qualifying_records(&records, &settings.intervals, today) {
            let seen = ctx
                .repos
                .notification_events
                .find_by_record_and_days(&record.id, days)
                .await;
            if seen.is_some() {
                continue;
            }

            let event = NotificationEvent::new(record, days, now);
            if let Err(e) = ctx.repos.notification_events.insert(&event).await {
                warn!(
                    "Unable to store notification event for record: {}. Error: {:?}",
                    record.id, e
                );
                continue;
            }
            created.push(event);
        }

        Ok(UseCaseRes { created })
    }
}
