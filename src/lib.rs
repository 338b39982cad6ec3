use actix_cors::Cors;
use actix_web::middleware::{Compress, Logger};
use actix_web::{http::header, web, App, HttpServer};
use actix_web_prometheus::PrometheusMetricsBuilder;
use anyhow::anyhow;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

pub mod bundle;
pub mod config;
pub mod formation;
pub mod generators;
pub mod state;

pub use crate::config::ServerConfig;
pub use crate::state::AppState;

/// Body of every 4xx response: `{"error": "<message>"}`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: &str) -> Self {
        Self {
            error: message.to_string(),
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::formation::handlers::form_company,
        crate::formation::handlers::form_company_schema,
        crate::formation::handlers::company_form
    ),
    components(
        schemas(
            formation::model::RawFormationRequest,
            formation::model::CompanyType,
            ErrorResponse,
        )
    ),
    tags(
        (name = "Formation", description = "Company formation document endpoints.")
    )
)]
pub struct ApiDoc;

fn build_cors(config: &ServerConfig) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        .expose_headers(vec![header::CONTENT_DISPOSITION])
        .max_age(3600);

    if config.allowed_origins.is_empty() {
        cors = cors.allow_any_origin();
    } else {
        for origin in &config.allowed_origins {
            cors = cors.allowed_origin(origin);
        }
    }
    cors
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok(); // Load .env file
    let config = ServerConfig::from_env()?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    let app_state = web::Data::new(AppState::new());

    let prometheus = PrometheusMetricsBuilder::new("formation_docs_server")
        .endpoint("/metrics")
        .build()
        .map_err(|e| anyhow!("Failed to create Prometheus metrics middleware: {}", e))?;

    log::info!("Starting server at http://{}:{}", config.host, config.port);

    let server_config = config.clone();
    HttpServer::new(move || {
        App::new()
            .wrap(Compress::default())
            .wrap(Logger::default())
            .wrap(prometheus.clone())
            .wrap(build_cors(&server_config))
            .app_data(app_state.clone())
            .configure(formation::config)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-doc/openapi.json", ApiDoc::openapi()),
            )
    })
    .keep_alive(actix_web::http::KeepAlive::Os)
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    Ok(())
}
