use crate::error::CertregError;
use crate::shared::auth::protect_admin_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use certreg_api_structs::delete_training_type::*;
use certreg_infra::CertregContext;

pub async fn delete_training_type_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    ctx: web::Data<CertregContext>,
) -> Result<HttpResponse, CertregError> {
    protect_admin_route(&http_req, &ctx)?;

    let usecase = DeleteTrainingTypeUseCase {
        name: path_params.name.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|res| HttpResponse::Ok().json(APIResponse::new(res.training_types)))
        .map_err(CertregError::from)
}

/// Removes a name from the catalog. Existing records keep whatever
/// training type string they were saved with.
#[derive(Debug)]
pub struct DeleteTrainingTypeUseCase {
    pub name: String,
}

#[derive(Debug)]
pub enum UseCaseError {
    NotFound(String),
}

impl From<UseCaseError> for CertregError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(name) => Self::NotFound(format!(
                "The training type: {}, was not found in the catalog.",
                name
            )),
        }
    }
}

#[derive(Debug)]
pub struct UseCaseRes {
    pub training_types: Vec<String>,
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteTrainingTypeUseCase {
    type Response = UseCaseRes;

    type Error = UseCaseError;

    const NAME: &'static str = "DeleteTrainingType";

    async fn execute(&mut self, ctx: &CertregContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .training_types
            .delete(&self.name)
            .await
            .ok_or_else(|| UseCaseError::NotFound(self.name.clone()))?;

        Ok(UseCaseRes {
            training_types: ctx.repos.training_types.find_all().await,
        })
    }
}
