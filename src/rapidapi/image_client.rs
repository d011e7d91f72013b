use crate::{
    config::{ImageDimensions, UpstreamEndpoint},
    error::{ImageGenError, Result},
    logger,
    models::{GenerationRequest, GenerationResult, UpstreamImageRequest, UpstreamImageResponse},
};
use reqwest::{
    header::{HeaderMap, HeaderValue, CONTENT_TYPE},
    Client,
};

const API_KEY_HEADER: &str = "x-rapidapi-key";
const API_HOST_HEADER: &str = "x-rapidapi-host";

/// Client for the RapidAPI text-to-image endpoint.
///
/// One call to [`ImageClient::generate`] is exactly one outbound request:
/// no retries and no timeout beyond what the underlying `reqwest::Client` has.
#[derive(Clone)]
pub struct ImageClient {
    client: Client,
    endpoint: UpstreamEndpoint,
    dimensions: ImageDimensions,
}

impl ImageClient {
    pub fn new(client: Client, endpoint: UpstreamEndpoint, dimensions: ImageDimensions) -> Self {
        Self {
            client,
            endpoint,
            dimensions,
        }
    }

    fn build_headers(&self) -> Result<HeaderMap> {
        let header_value = |value: &str| {
            HeaderValue::from_str(value)
                .map_err(|e| ImageGenError::InternalError(format!("Invalid header value: {}", e)))
        };

        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, header_value(&self.endpoint.api_key)?);
        headers.insert(API_HOST_HEADER, header_value(&self.endpoint.host)?);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(headers)
    }

    pub async fn generate(&self, request: &GenerationRequest) -> Result<GenerationResult> {
        let payload = UpstreamImageRequest {
            text: request.prompt(),
            width: self.dimensions.width,
            height: self.dimensions.height,
        };

        let timer = logger::timer("text-to-image upstream call");
        let response = self
            .client
            .post(&self.endpoint.url)
            .headers(self.build_headers()?)
            .json(&payload)
            .send()
            .await
            .map_err(|e| ImageGenError::InternalError(e.to_string()))?;
        drop(timer);

        let status = response.status();
        if !status.is_success() {
            let details = response.text().await.ok();
            return Err(ImageGenError::UpstreamError {
                status: status.as_u16(),
                details,
            });
        }

        let body: UpstreamImageResponse = response.json().await.map_err(|e| {
            ImageGenError::InternalError(format!("Invalid upstream response: {}", e))
        })?;

        Ok(body.into_result())
    }
}
