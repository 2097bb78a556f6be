use actix_cors::Cors;
use actix_web::middleware::Compress;
use actix_web::{http::header, web, App, HttpServer};
use actix_web_prometheus::PrometheusMetricsBuilder;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

pub mod company;
pub mod config;
pub mod documents;
pub mod state;

pub use crate::config::AppConfig;
pub use crate::state::AppState;

use crate::documents::validation::{ValidationError, ValidationErrors};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub kind: String,
    pub timestamp: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<ValidationError>,
}

impl ErrorResponse {
    pub fn new(kind: &str, message: &str) -> Self {
        Self {
            error: message.to_string(),
            kind: kind.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            fields: Vec::new(),
        }
    }

    pub fn bad_request(message: &str) -> Self {
        Self::new("BadRequest", message)
    }

    pub fn internal_error(message: &str) -> Self {
        Self::new("InternalServerError", message)
    }

    /// 400 body listing every rejected field.
    pub fn from_validation(errors: &ValidationErrors) -> Self {
        Self {
            fields: errors.errors().to_vec(),
            ..Self::bad_request(&errors.summary())
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::company::handlers::company_form,
        crate::company::handlers::form_company,
        crate::company::handlers::form_company_schema,
        crate::company::handlers::generate_bylaws
    ),
    components(
        schemas(
            documents::CompanyFormationRequest,
            documents::BylawsRequest,
            documents::EntityType,
            company::models::FormationExample,
            ValidationError,
            ErrorResponse,
        )
    ),
    tags(
        (name = "Company Formation", description = "Certificate of Incorporation / Formation endpoints."),
        (name = "Bylaws", description = "Corporate bylaws endpoint.")
    ),
    servers(
        (url = "http://127.0.0.1:8080", description = "Local server")
    )
)]
pub struct ApiDoc;

fn cors(config: &AppConfig) -> Cors {
    let cors = if config.cors_allowed_origins.is_empty() {
        Cors::default().allow_any_origin()
    } else {
        config
            .cors_allowed_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
    };

    cors.allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        .expose_headers(vec![header::CONTENT_DISPOSITION])
        .max_age(3600)
}

pub async fn run() -> std::io::Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    let prometheus = PrometheusMetricsBuilder::new("company_formation_server")
        .endpoint("/metrics")
        .build()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;

    let bind = (config.host.clone(), config.port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let app_state = web::Data::new(AppState::new(config));

    HttpServer::new(move || {
        let app_state = app_state.clone();
        let prometheus = prometheus.clone();
        let cors = cors(&app_state.config);

        App::new()
            .wrap(Compress::default())
            .wrap(prometheus)
            .wrap(cors)
            .app_data(app_state)
            .configure(company::config)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-doc/openapi.json", ApiDoc::openapi()),
            )
    })
    .keep_alive(actix_web::http::KeepAlive::Os)
    .bind(bind)?
    .run()
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_kinds() {
        let bad = ErrorResponse::bad_request("Unsupported company type");
        assert_eq!(bad.kind, "BadRequest");
        assert_eq!(bad.error, "Unsupported company type");
        assert!(bad.fields.is_empty());

        let internal = ErrorResponse::internal_error("An unexpected error occurred");
        assert_eq!(internal.kind, "InternalServerError");
    }

    #[test]
    fn test_from_validation_lists_fields() {
        let mut errors = ValidationErrors::new();
        errors.add(ValidationError::invalid_state("state_of_formation", "XX"));
        errors.add(ValidationError::missing_field("incorporator_name", "Incorporator name"));

        let body = ErrorResponse::from_validation(&errors);
        assert_eq!(body.kind, "BadRequest");
        assert_eq!(body.fields.len(), 2);
        assert!(body.error.starts_with("Validation failed with 2 error(s)"));

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["fields"][0]["field"], "state_of_formation");
    }

    #[test]
    fn test_fields_omitted_when_empty() {
        let json = serde_json::to_value(ErrorResponse::bad_request("x")).unwrap();
        assert!(json.get("fields").is_none());
    }

    #[test]
    fn test_openapi_lists_routes() {
        let doc = ApiDoc::openapi();
        for path in ["/", "/form-company", "/form-company-schema", "/generate-bylaws"] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
    }
}
