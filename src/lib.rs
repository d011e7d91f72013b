//! Text-to-image proxy.
//!
//! Accepts `{ "prompt": "..." }`, forwards it to a RapidAPI text-to-image
//! endpoint and answers `{ "message": "<image url>" }`.

pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod rapidapi;
#[cfg(feature = "server")]
pub mod server;

pub use config::{Config, ImageDimensions, UpstreamConfig, UpstreamEndpoint};
pub use error::{ImageGenError, Result};
pub use models::*;
pub use rapidapi::ImageClient;
