use crate::error::CertregError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use certreg_api_structs::create_record::*;
use certreg_domain::{TrainingRecord, ID};
use certreg_infra::CertregContext;
use chrono::NaiveDate;

pub async fn create_record_controller(
    body_params: web::Json<RequestBody>,
    ctx: web::Data<CertregContext>,
) -> Result<HttpResponse, CertregError> {
    let body = body_params.0;
    let usecase = CreateRecordUseCase {
        person_name: body.person_name,
        company: body.company,
        training_type: body.training_type,
        date_completed: body.date_completed,
        expiry_date: body.expiry_date,
        training_org: body.training_org,
        modified_by: body.modified_by,
    };

    execute(usecase, &ctx)
        .await
        .map(|res| {
            let today = ctx.sys.today(&ctx.config.timezone);
            HttpResponse::Created().json(APIResponse::new(res.record, today))
        })
        .map_err(CertregError::from)
}

#[derive(Debug)]
pub struct CreateRecordUseCase {
    pub person_name: String,
    pub company: String,
    pub training_type: String,
    pub date_completed: NaiveDate,
    pub expiry_date: NaiveDate,
    pub training_org: String,
    pub modified_by: String,
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
    pub record: TrainingRecord,
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateRecordUseCase {
    type Response = UseCaseRes;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateTrainingRecord";

    async fn execute(&mut self, ctx: &CertregContext) -> Result<Self::Response, Self::Error> {
        let record = TrainingRecord {
            id: ID::new(),
            person_name: self.person_name.clone(),
            company: self.company.clone(),
            training_type: self.training_type.clone(),
            date_completed: self.date_completed,
            expiry_date: self.expiry_date,
            training_org: self.training_org.clone(),
            last_modified: ctx.sys.get_timestamp_millis(),
            modified_by: self.modified_by.clone(),
        };

        ctx.repos
            .records
            .insert(&record)
            .await
            .map(|_| UseCaseRes { record })
            .map_err(|_| UseCaseError::Storage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::usecase::execute;

    #[actix_web::test]
    async fn creates_and_stores_a_record() {
        let ctx = CertregContext::create_inmemory();

        let usecase = CreateRecordUseCase {
            person_name: "Kari Nordmann".into(),
            company: "Acme AS".into(),
            training_type: "First Aid".into(),
            date_completed: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            expiry_date: NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
            training_org: "SafetyCo".into(),
            modified_by: "admin@certreg.test".into(),
        };

        let res = execute(usecase, &ctx).await.unwrap();
        let stored = ctx.repos.records.find(&res.record.id).await;
        assert_eq!(stored, Some(res.record));
    }
}
