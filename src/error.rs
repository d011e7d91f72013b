use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImageGenError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Upstream error: status {status}")]
    UpstreamError {
        status: u16,
        details: Option<String>,
    },

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ImageGenError {
    /// Whether this failure belongs in the operational log.
    pub fn is_operational(&self) -> bool {
        matches!(
            self,
            ImageGenError::UpstreamError { .. } | ImageGenError::InternalError(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, ImageGenError>;

#[cfg(feature = "server")]
mod response {
    use super::ImageGenError;
    use actix_web::{http::StatusCode, HttpResponse, ResponseError};
    use serde_json::json;

    impl ResponseError for ImageGenError {
        fn status_code(&self) -> StatusCode {
            match self {
                ImageGenError::ConfigError(_) => StatusCode::INTERNAL_SERVER_ERROR,
                ImageGenError::ValidationError(_) => StatusCode::BAD_REQUEST,
                ImageGenError::UpstreamError { .. } => StatusCode::BAD_GATEWAY,
                ImageGenError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            }
        }

        fn error_response(&self) -> HttpResponse {
            let body = match self {
                ImageGenError::ConfigError(msg) | ImageGenError::ValidationError(msg) => {
                    json!({ "error": msg })
                }
                ImageGenError::UpstreamError { details, .. } => json!({
                    "error": "Downstream API error",
                    "details": details,
                }),
                ImageGenError::InternalError(msg) => json!({
                    "error": "Internal server error",
                    "details": msg,
                }),
            };

            HttpResponse::build(self.status_code()).json(body)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operational_errors() {
        assert!(ImageGenError::InternalError("boom".into()).is_operational());
        assert!(ImageGenError::UpstreamError {
            status: 503,
            details: None
        }
        .is_operational());
        assert!(!ImageGenError::ValidationError("bad".into()).is_operational());
        assert!(!ImageGenError::ConfigError("missing".into()).is_operational());
    }

    #[test]
    fn test_display() {
        let err = ImageGenError::UpstreamError {
            status: 429,
            details: Some("slow down".into()),
        };
        assert_eq!(err.to_string(), "Upstream error: status 429");
    }

    #[cfg(feature = "server")]
    #[test]
    fn test_status_codes() {
        use actix_web::{http::StatusCode, ResponseError};

        assert_eq!(
            ImageGenError::ConfigError("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ImageGenError::ValidationError("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ImageGenError::UpstreamError {
                status: 500,
                details: None
            }
            .status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            ImageGenError::InternalError("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[cfg(feature = "server")]
    async fn response_body(err: ImageGenError) -> serde_json::Value {
        use actix_web::{body, ResponseError};

        let bytes = body::to_bytes(err.error_response().into_body())
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[cfg(feature = "server")]
    #[actix_web::test]
    async fn test_upstream_error_body_without_details() {
        let body = response_body(ImageGenError::UpstreamError {
            status: 502,
            details: None,
        })
        .await;

        assert_eq!(
            body,
            serde_json::json!({ "error": "Downstream API error", "details": null })
        );
    }

    #[cfg(feature = "server")]
    #[actix_web::test]
    async fn test_config_error_body_has_no_details() {
        let body = response_body(ImageGenError::ConfigError("missing".into())).await;

        assert_eq!(body, serde_json::json!({ "error": "missing" }));
    }
}
