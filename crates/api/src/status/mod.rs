use crate::error::CertregError;
use actix_web::{web, HttpResponse};
use certreg_api_structs::get_status::APIResponse;
use certreg_domain::{days_to_expiration, ExpirationStatus};
use certreg_infra::CertregContext;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/status", web::get().to(status));
}

/// Simple dashboard counters over the whole register
async fn status(ctx: web::Data<CertregContext>) -> Result<HttpResponse, CertregError> {
    let records = ctx.repos.records.find_all().await;
    let today = ctx.sys.today(&ctx.config.timezone);

    let mut expiring_soon = 0;
    let mut expired = 0;
    for record in &records {
        match ExpirationStatus::from_days(days_to_expiration(record.expiry_date, today)) {
            ExpirationStatus::Expired => expired += 1,
            ExpirationStatus::ExpiringSoon => expiring_soon += 1,
            _ => (),
        }
    }

    Ok(HttpResponse::Ok().json(APIResponse {
        total_records: records.len(),
        expiring_soon,
        expired,
    }))
}
