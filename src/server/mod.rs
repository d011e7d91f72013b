pub mod handlers;

use crate::config::Config;
use actix_web::{web, App, HttpServer};

pub const GENERATE_IMAGE_PATH: &str = "/api/generate-image";

/// Read-only state shared by every worker.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub http: reqwest::Client,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource(GENERATE_IMAGE_PATH).route(web::post().to(handlers::generate_image)),
    );
}

pub async fn run(config: Config) -> std::io::Result<()> {
    let port = config.port();
    let state = web::Data::new(AppState::new(config));

    HttpServer::new(move || App::new().app_data(state.clone()).configure(configure))
        .bind(("0.0.0.0", port))?
        .run()
        .await
}
