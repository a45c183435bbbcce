use super::get_records::{GetTrainingRecordsUseCase, UseCaseRes};
use crate::notification::check_notifications::CheckExpirationsUseCase;
use crate::shared::usecase::{execute, Subscriber};
use certreg_infra::CertregContext;

pub struct CheckExpirationsOnRecordsLoaded;

#[async_trait::async_trait(?Send)]
impl Subscriber<GetTrainingRecordsUseCase> for CheckExpirationsOnRecordsLoaded {
    async fn notify(&self, _e: &UseCaseRes, ctx: &CertregContext) {
        let usecase = CheckExpirationsUseCase {};

        // Sideeffect, ignore result
        let _ = execute(usecase, ctx).await;
    }
}
