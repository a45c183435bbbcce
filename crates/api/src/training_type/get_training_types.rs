use crate::error::CertregError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use certreg_api_structs::get_training_types::*;
use certreg_infra::CertregContext;

pub async fn get_training_types_controller(
    ctx: web::Data<CertregContext>,
) -> Result<HttpResponse, CertregError> {
    let usecase = GetTrainingTypesUseCase {};

    execute(usecase, &ctx)
        .await
        .map(|res| HttpResponse::Ok().json(APIResponse::new(res.training_types)))
        .map_err(CertregError::from)
}

#[derive(Debug)]
pub struct GetTrainingTypesUseCase {}

#[derive(Debug)]
pub enum UseCaseError {}

impl From<UseCaseError> for CertregError {
    fn from(e: UseCaseError) -> Self {
        match e {}
    }
}

#[derive(Debug)]
pub struct UseCaseRes {
    pub training_types: Vec<String>,
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetTrainingTypesUseCase {
    type Response = UseCaseRes;

    type Error = UseCaseError;

    const NAME: &'static str = "GetTrainingTypes";

    async fn execute(&mut self, ctx: &CertregContext) -> Result<Self::Response, Self::Error> {
        Ok(UseCaseRes {
            training_types: ctx.repos.training_types.find_all().await,
        })
    }
}
