use crate::error::CertregError;
use crate::shared::auth::protect_admin_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use certreg_api_structs::set_notification_settings::*;
use certreg_domain::NotificationSettings;
use certreg_infra::CertregContext;

pub async fn set_notification_settings_controller(
    http_req: HttpRequest,
    body_params: web::Json<RequestBody>,
    ctx: web::Data<CertregContext>,
) -> Result<HttpResponse, CertregError> {
    protect_admin_route(&http_req, &ctx)?;

    let body = body_params.0;
    let usecase = SetNotificationSettingsUseCase {
        emails: body.emails,
        intervals: body.intervals,
        updated_by: body.updated_by,
    };

    execute(usecase, &ctx)
        .await
        .map(|res| HttpResponse::Ok().json(APIResponse::new(res.settings)))
        .map_err(CertregError::from)
}

/// Replaces the singleton settings document wholesale
#[derive(Debug)]
pub struct SetNotificationSettingsUseCase {
    pub emails: Vec<String>,
    pub intervals: Vec<i64>,
    pub updated_by: String,
}

#[derive(Debug)]
pub enum UseCaseError {
    Storage,
}

impl From<UseCaseError> for CertregError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::Storage => Self::InternalError,
        }
    }
}

#[derive(Debug)]
pub struct UseCaseRes {
    pub settings: NotificationSettings,
}

#[async_trait::async_trait(?Send)]
impl UseCase for SetNotificationSettingsUseCase {
    type Response = UseCaseRes;

    type Error = UseCaseError;

    const NAME: &'static str = "SetNotificationSettings";

    async fn execute(&mut self, ctx: &CertregContext) -> Result<Self::Response, Self::Error> {
        let settings = NotificationSettings {
            emails: self.emails.clone(),
            intervals: self.intervals.clone(),
            updated_at: ctx.sys.get_timestamp_millis(),
            updated_by: self.updated_by.clone(),
        };

        ctx.repos
            .settings
            .set(&settings)
            .await
            .map(|_| UseCaseRes { settings })
            .map_err(|_| UseCaseError::Storage)
    }
}
