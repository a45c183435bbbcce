use crate::error::CertregError;
use crate::shared::auth::protect_admin_route;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use certreg_api_structs::add_training_type::*;
use certreg_infra::CertregContext;

pub async fn add_training_type_controller(
    http_req: HttpRequest,
    body_params: web::Json<RequestBody>,
    ctx: web::Data<CertregContext>,
) -> Result<HttpResponse, CertregError> {
    protect_admin_route(&http_req, &ctx)?;

    let usecase = AddTrainingTypeUseCase {
        name: body_params.0.name,
    };

    execute(usecase, &ctx)
        .await
        .map(|res| HttpResponse::Created().json(APIResponse::new(res.training_types)))
        .map_err(CertregError::from)
}

#[derive(Debug)]
pub struct AddTrainingTypeUseCase {
    pub name: String,
}

#[derive(Debug)]
pub enum UseCaseError {
    EmptyName,
    Duplicate(String),
    Storage,
}

impl From<UseCaseError> for CertregError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::EmptyName => {
                Self::BadClientData("Training type name cannot be empty".into())
            }
            UseCaseError::Duplicate(name) => Self::Conflict(format!(
                "The training type: {}, already exists in the catalog.",
                name
            )),
            UseCaseError::Storage => Self::InternalError,
        }
    }
}

#[derive(Debug)]
pub struct UseCaseRes {
    pub training_types: Vec<String>,
}

#[async_trait::async_trait(?Send)]
impl UseCase for AddTrainingTypeUseCase {
    type Response = UseCaseRes;

    type Error = UseCaseError;

    const NAME: &'static str = "AddTrainingType";

    async fn execute(&mut self, ctx: &CertregContext) -> Result<Self::Response, Self::Error> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(UseCaseError::EmptyName);
        }

        let existing = ctx.repos.training_types.find_all().await;
        if existing.iter().any(|t| t == name) {
            return Err(UseCaseError::Duplicate(name.to_string()));
        }

        ctx.repos
            .training_types
            .insert(name)
            .await
            .map_err(|_| UseCaseError::Storage)?;

        Ok(UseCaseRes {
            training_types: ctx.repos.training_types.find_all().await,
        })
    }
}
