use crate::error::CertregError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use certreg_api_structs::get_notification_settings::*;
use certreg_domain::NotificationSettings;
use certreg_infra::CertregContext;

pub async fn get_notification_settings_controller(
    ctx: web::Data<CertregContext>,
) -> Result<HttpResponse, CertregError> {
    let usecase = GetNotificationSettingsUseCase {};

    execute(usecase, &ctx)
        .await
        .map(|res| HttpResponse::Ok().json(APIResponse::new(res.settings)))
        .map_err(CertregError::from)
}

#[derive(Debug)]
pub struct GetNotificationSettingsUseCase {}

#[derive(Debug)]
pub enum UseCaseError {
    NotFound,
}

impl From<UseCaseError> for CertregError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound => {
                Self::NotFound("Notification settings have not been configured yet.".into())
            }
        }
    }
}

#[derive(Debug)]
pub struct UseCaseRes {
    pub settings: NotificationSettings,
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetNotificationSettingsUseCase {
    type Response = UseCaseRes;

    type Error = UseCaseError;

    const NAME: &'static str = "GetNotificationSettings";

    async fn execute(&mut self, ctx: &CertregContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .settings
            .get()
            .await
            .map(|settings| UseCaseRes { settings })
            .ok_or(UseCaseError::NotFound)
    }
}
