use crate::{
    error::ImageGenError,
    models::GenerationRequest,
    rapidapi::ImageClient,
    server::AppState,
};
use actix_web::{web, HttpResponse};
use uuid::Uuid;

/// `POST /api/generate-image`
///
/// Configuration is checked before the body, so a misconfigured deployment
/// answers 500 whatever the caller sent.
pub async fn generate_image(
    state: web::Data<AppState>,
    body: web::Bytes,
) -> Result<HttpResponse, ImageGenError> {
    let request_id = Uuid::new_v4();

    let endpoint = state.config.upstream.resolve().map_err(|e| {
        log::warn!("[req:{}] {}", request_id, e);
        e
    })?;

    let request = GenerationRequest::from_body(&body).map_err(|e| {
        log::debug!("[req:{}] Rejected request: {}", request_id, e);
        e
    })?;

    let client = ImageClient::new(state.http.clone(), endpoint, state.config.dimensions);
    match client.generate(&request).await {
        Ok(result) => {
            log::debug!("[req:{}] Generated image: {}", request_id, result.message);
            Ok(HttpResponse::Ok().json(result))
        }
        Err(e) => {
            log_failure(&request_id, &e);
            Err(e)
        }
    }
}

fn log_failure(request_id: &Uuid, error: &ImageGenError) {
    match error {
        ImageGenError::UpstreamError { status, details } => log::error!(
            "[req:{}] Downstream API returned non-OK status: {} {}",
            request_id,
            status,
            details.as_deref().unwrap_or("<unreadable body>")
        ),
        e if e.is_operational() => {
            log::error!("[req:{}] Error in image generation: {}", request_id, e)
        }
        _ => {}
    }
}
