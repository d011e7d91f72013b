use crate::config::ImageDimensions;
use serde::{Deserialize, Serialize};

/// What a front end needs to render one generated image.
///
/// `width` and `height` are display hints only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedImage {
    pub image_url: String,
    pub prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
}

/// Entry in a list of previously generated images.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ImageSummary {
    pub image_url: String,
    pub prompt: String,
}

impl GeneratedImage {
    pub fn new(image_url: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            image_url: image_url.into(),
            prompt: prompt.into(),
            width: None,
            height: None,
        }
    }

    pub fn with_dimensions(mut self, dimensions: ImageDimensions) -> Self {
        self.width = Some(dimensions.width.to_string());
        self.height = Some(dimensions.height.to_string());
        self
    }
}

impl From<GeneratedImage> for ImageSummary {
    fn from(image: GeneratedImage) -> Self {
        ImageSummary {
            image_url: image.image_url,
            prompt: image.prompt,
        }
    }
}
