use crate::error::CertregError;
use actix_web::HttpRequest;
use certreg_infra::CertregContext;

pub const API_KEY_HEADER: &str = "certreg-api-key";

/// Admin routes require the `certreg-api-key` header to match the
/// configured api key.
pub fn protect_admin_route(
    http_req: &HttpRequest,
    ctx: &CertregContext,
) -> Result<(), CertregError> {
    let api_key = match http_req.headers().get(API_KEY_HEADER) {
        Some(api_key) => match api_key.to_str() {
            Ok(api_key) => api_key,
            Err(_) => {
                return Err(CertregError::Unauthorized(
                    "Malformed api key header provided".into(),
                ))
            }
        },
        None => {
            return Err(CertregError::Unauthorized(format!(
                "Missing the `{}` header required for admin routes",
                API_KEY_HEADER
            )))
        }
    };

    if api_key != ctx.config.api_key {
        return Err(CertregError::Unauthorized("Invalid api key provided".into()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[actix_web::test]
    async fn rejects_missing_and_wrong_api_keys() {
        let mut ctx = CertregContext::create_inmemory();
        ctx.config.api_key = "secret".into();

        let req = TestRequest::default().to_http_request();
        assert!(protect_admin_route(&req, &ctx).is_err());

        let req = TestRequest::default()
            .insert_header((API_KEY_HEADER, "wrong"))
            .to_http_request();
        assert!(protect_admin_route(&req, &ctx).is_err());

        let req = TestRequest::default()
            .insert_header((API_KEY_HEADER, "secret"))
            .to_http_request();
        assert!(protect_admin_route(&req, &ctx).is_ok());
    }
}
