use crate::error::CertregError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use certreg_api_structs::update_record::*;
use certreg_domain::{TrainingRecord, ID};
use certreg_infra::CertregContext;
use chrono::NaiveDate;

pub async fn update_record_controller(
    path_params: web::Path<PathParams>,
    body_params: web::Json<RequestBody>,
    ctx: web::Data<CertregContext>,
) -> Result<HttpResponse, CertregError> {
    let body = body_params.0;
    let usecase = UpdateRecordUseCase {
        record_id: path_params.record_id.clone(),
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
            HttpResponse::Ok().json(APIResponse::new(res.record, today))
        })
        .map_err(CertregError::from)
}

/// Replaces every editable field of a record wholesale and restamps
/// the audit fields. There is no partial update.
#[derive(Debug)]
pub struct UpdateRecordUseCase {
    pub record_id: ID,
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
    NotFound(ID),
    Storage,
}

impl From<UseCaseError> for CertregError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(record_id) => Self::NotFound(format!(
                "The training record with id: {}, was not found.",
                record_id
            )),
            UseCaseError::Storage => Self::InternalError,
        }
    }
}

#[derive(Debug)]
pub struct UseCaseRes {
    pub record: TrainingRecord,
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateRecordUseCase {
    type Response = UseCaseRes;

    type Error = UseCaseError;

    const NAME: &'static str = "UpdateTrainingRecord";

    async fn execute(&mut self, ctx: &CertregContext) -> Result<Self::Response, Self::Error> {
        let mut record = match ctx.repos.records.find(&self.record_id).await {
            Some(record) => record,
            None => return Err(UseCaseError::NotFound(self.record_id.clone())),
        };

        record.person_name = self.person_name.clone();
        record.company = self.company.clone();
        record.training_type = self.training_type.clone();
        record.date_completed = self.date_completed;
        record.expiry_date = self.expiry_date;
        record.training_org = self.training_org.clone();
        record.last_modified = ctx.sys.get_timestamp_millis();
        record.modified_by = self.modified_by.clone();

        ctx.repos
            .records
            .save(&record)
            .await
            .map(|_| UseCaseRes { record })
            .map_err(|_| UseCaseError::Storage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::usecase::execute;

    fn record_fixture() -> TrainingRecord {
        TrainingRecord {
            id: ID::new(),
            person_name: "Kari Nordmann".into(),
            company: "Acme AS".into(),
            training_type: "First Aid".into(),
            date_completed: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            expiry_date: NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
            training_org: "SafetyCo".into(),
            last_modified: 0,
            modified_by: "admin@certreg.test".into(),
        }
    }

    #[actix_web::test]
    async fn replaces_fields_and_restamps_audit_trail() {
        let ctx = CertregContext::create_inmemory();
        let record = record_fixture();
        ctx.repos.records.insert(&record).await.unwrap();

        let usecase = UpdateRecordUseCase {
            record_id: record.id.clone(),
            person_name: record.person_name.clone(),
            company: record.company.clone(),
            training_type: record.training_type.clone(),
            date_completed: record.date_completed,
            expiry_date: NaiveDate::from_ymd_opt(2026, 1, 10).unwrap(),
            training_org: record.training_org.clone(),
            modified_by: "other@certreg.test".into(),
        };

        let res = execute(usecase, &ctx).await.unwrap();
        assert_eq!(
            res.record.expiry_date,
            NaiveDate::from_ymd_opt(2026, 1, 10).unwrap()
        );
        assert_eq!(res.record.modified_by, "other@certreg.test");
        assert!(res.record.last_modified > record.last_modified);

        let stored = ctx.repos.records.find(&record.id).await.unwrap();
        assert_eq!(stored, res.record);
    }

    #[actix_web::test]
    async fn unknown_record_is_not_found() {
        let ctx = CertregContext::create_inmemory();

        let usecase = UpdateRecordUseCase {
            record_id: ID::new(),
            person_name: "Kari Nordmann".into(),
            company: "Acme AS".into(),
            training_type: "First Aid".into(),
            date_completed: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            expiry_date: NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
            training_org: "SafetyCo".into(),
            modified_by: "admin@certreg.test".into(),
        };

        let res = execute(usecase, &ctx).await;
        assert!(matches!(res, Err(UseCaseError::NotFound(_))));
    }
}
