use super::subscribers::CheckExpirationsOnRecordsLoaded;
use crate::error::CertregError;
use crate::shared::usecase::{execute, Subscriber, UseCase};
use actix_web::{web, HttpResponse};
use certreg_api_structs::get_records::*;
use certreg_domain::TrainingRecord;
use certreg_infra::CertregContext;

pub async fn get_records_controller(
    ctx: web::Data<CertregContext>,
) -> Result<HttpResponse, CertregError> {
    let usecase = GetTrainingRecordsUseCase {};

    execute(usecase, &ctx)
        .await
        .map(|res| {
            let today = ctx.sys.today(&ctx.config.timezone);
            HttpResponse::Ok().json(APIResponse::new(res.records, today))
        })
        .map_err(CertregError::from)
}

#[derive(Debug)]
pub struct GetTrainingRecordsUseCase {}

#[derive(Debug)]
pub enum UseCaseError {}

impl From<UseCaseError> for CertregError {
    fn from(e: UseCaseError) -> Self {
        match e {}
    }
}

#[derive(Debug)]
pub struct UseCaseRes {
    pub records: Vec<TrainingRecord>,
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetTrainingRecordsUseCase {
    type Response = UseCaseRes;

    type Error = UseCaseError;

    const NAME: &'static str = "GetTrainingRecords";

    /// Every interactive record-list load also runs the expiration check
    /// as a subscriber side effect, mirroring the original dashboard flow.
    async fn execute(&mut self, ctx: &CertregContext) -> Result<Self::Response, Self::Error> {
        Ok(UseCaseRes {
            records: ctx.repos.records.find_all().await,
        })
    }

    fn subscribers() -> Vec<Box<dyn Subscriber<Self>>> {
        vec![Box::new(CheckExpirationsOnRecordsLoaded)]
    }
}
