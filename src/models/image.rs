use crate::error::{ImageGenError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/600x400?text=Generated+Image";

pub const INVALID_PROMPT_MESSAGE: &str = "Missing or invalid 'prompt' in request body";

/// A prompt that is known to contain something other than whitespace.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    prompt: String,
}

impl GenerationRequest {
    pub fn new(prompt: impl Into<String>) -> Result<Self> {
        let prompt = prompt.into();
        if prompt.trim().is_empty() {
            return Err(ImageGenError::ValidationError(INVALID_PROMPT_MESSAGE.into()));
        }
        Ok(Self { prompt })
    }

    /// Parses a raw JSON request body.
    ///
    /// Anything other than an object with a string `prompt` is rejected,
    /// including bodies that are not JSON at all.
    pub fn from_body(body: &[u8]) -> Result<Self> {
        let invalid = || ImageGenError::ValidationError(INVALID_PROMPT_MESSAGE.into());

        let value: Value = serde_json::from_slice(body).map_err(|_| invalid())?;
        let prompt = value
            .get("prompt")
            .and_then(Value::as_str)
            .ok_or_else(invalid)?;

        Self::new(prompt)
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenerationResult {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct UpstreamImageRequest<'a> {
    pub text: &'a str,
    pub width: u32,
    pub height: u32,
}

/// Success payload from the upstream, kept as raw JSON.
///
/// Only `generated_image` is read, and only when it is a non-empty string.
/// Any other shape, `null` included, falls back to the placeholder.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct UpstreamImageResponse {
    payload: Value,
}

impl UpstreamImageResponse {
    pub fn into_result(self) -> GenerationResult {
        let message = self
            .payload
            .get("generated_image")
            .and_then(Value::as_str)
            .filter(|url| !url.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| PLACEHOLDER_IMAGE_URL.to_string());

        GenerationResult { message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_prompt_validation() {
        assert!(GenerationRequest::new("a red fox").is_ok());
        assert!(GenerationRequest::new("").is_err());
        assert!(GenerationRequest::new(" \t\n").is_err());
    }

    #[test]
    fn test_prompt_is_kept_untrimmed() {
        let request = GenerationRequest::from_body(br#"{"prompt": "  a red fox "}"#).unwrap();
        assert_eq!(request.prompt(), "  a red fox ");
    }

    #[test]
    fn test_from_body_rejects_bad_shapes() {
        let bodies: [&[u8]; 7] = [
            b"",
            b"not json",
            b"[]",
            b"{}",
            br#"{"prompt": null}"#,
            br#"{"prompt": 42}"#,
            br#"{"prompt": "   "}"#,
        ];

        for body in bodies {
            match GenerationRequest::from_body(body) {
                Err(ImageGenError::ValidationError(msg)) => {
                    assert_eq!(msg, INVALID_PROMPT_MESSAGE)
                }
                other => panic!("expected validation error, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_upstream_request_shape() {
        let body = UpstreamImageRequest {
            text: "a lighthouse",
            width: 512,
            height: 256,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({ "text": "a lighthouse", "width": 512, "height": 256 })
        );
    }

    #[test]
    fn test_placeholder_fallback() {
        let with_image: UpstreamImageResponse = serde_json::from_value(json!({
            "generated_image": "https://cdn.example.com/1.png",
            "status": true
        }))
        .unwrap();
        assert_eq!(with_image.into_result().message, "https://cdn.example.com/1.png");

        for payload in [
            json!({}),
            json!({ "generated_image": null }),
            json!({ "generated_image": "" }),
            json!({ "generated_image": 42 }),
            json!(null),
            json!("ok"),
            json!([]),
        ] {
            let response: UpstreamImageResponse = serde_json::from_value(payload).unwrap();
            assert_eq!(response.into_result().message, PLACEHOLDER_IMAGE_URL);
        }
    }
}
