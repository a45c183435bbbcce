use crate::error::CertregError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use certreg_api_structs::delete_record::*;
use certreg_domain::{TrainingRecord, ID};
use certreg_infra::CertregContext;

pub async fn delete_record_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<CertregContext>,
) -> Result<HttpResponse, CertregError> {
    let usecase = DeleteRecordUseCase {
        record_id: path_params.record_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|res| {
            let today = ctx.sys.today(&ctx.config.timezone);
            HttpResponse::Ok().json(APIResponse::new(res.record, today))
        })
        .map_err(CertregError::from)
}

#[derive(Debug)]
pub struct DeleteRecordUseCase {
    pub record_id: ID,
}

#[derive(Debug)]
pub enum UseCaseError {
    NotFound(ID),
}

impl From<UseCaseError> for CertregError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(record_id) => Self::NotFound(format!(
                "The training record with id: {}, was not found.",
                record_id
            )),
        }
    }
}

#[derive(Debug)]
pub struct UseCaseRes {
    pub record: TrainingRecord,
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteRecordUseCase {
    type Response = UseCaseRes;

    type Error = UseCaseError;

    const NAME: &'static str = "DeleteTrainingRecord";

    async fn execute(&mut self, ctx: &CertregContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .records
            .delete(&self.record_id)
            .await
            .map(|record| UseCaseRes { record })
            .ok_or_else(|| UseCaseError::NotFound(self.record_id.clone()))
    }
}
