use std::sync::Arc;

use crate::application::http::device::router::device_routes;
use crate::application::http::health::health_routes;
use crate::application::http::public::router::public_routes;
use crate::application::http::server::app_state::AppState;
use crate::application::http::server::openapi::ApiDoc;
use crate::args::Args;

use super::config::get_config;
use assetdesk_core::{application::create_service, domain::common::InventoryConfig};
use axum::Router;
use axum::http::header::{ACCEPT, CONTENT_LENGTH, CONTENT_TYPE};
use axum::http::{HeaderValue, Method};
use axum::routing::get;
use axum_prometheus::PrometheusMetricLayer;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{debug, info_span, warn};
use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;
use utoipa_redoc::{Redoc, Servable};
use utoipa_scalar::{Scalar, Servable as ScalarServable};
use utoipa_swagger_ui::SwaggerUi;

pub async fn state(args: Arc<Args>) -> Result<AppState, anyhow::Error> {
    let config = InventoryConfig::from(args.as_ref().clone());
    let service = create_service(config).await?;

    Ok(AppState::new(args, service))
}

/// Origins that fail to parse as header values are skipped with a warning.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed_origins = origins
        .iter()
        .filter_map(|origin| {
            HeaderValue::from_str(origin)
                .inspect_err(|e| warn!("Ignoring invalid allowed origin {}: {}", origin, e))
                .ok()
        })
        .collect::<Vec<HeaderValue>>();
    debug!("Allowed origins: {:?}", allowed_origins);

    CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_origin(allowed_origins)
        .allow_headers([CONTENT_TYPE, CONTENT_LENGTH, ACCEPT])
        .allow_credentials(true)
}

/// The generated document with every path prefixed by the configured root path.
fn openapi(root_path: &str) -> utoipa::openapi::OpenApi {
    let mut openapi = ApiDoc::openapi();
    let prefixed = std::mem::take(&mut openapi.paths.paths)
        .into_iter()
        .map(|(path, item)| (format!("{root_path}{path}"), item))
        .collect();
    openapi.paths.paths = prefixed;
    openapi
}

fn docs_routes(root_path: &str) -> Router<AppState> {
    let openapi = openapi(root_path);
    let spec_url = format!("{root_path}/api-docs/openapi.json");

    Router::new()
        .merge(SwaggerUi::new(format!("{root_path}/swagger-ui")).url(spec_url.clone(), openapi.clone()))
        .merge(Scalar::with_url(format!("{root_path}/scalar"), openapi.clone()))
        .merge(Redoc::with_url(format!("{root_path}/redoc"), openapi))
        .merge(RapiDoc::new(spec_url).path(format!("{root_path}/rapidoc")))
}

/// Every route of the application except `/metrics`, whose recorder is process-wide.
pub fn app_router(state: AppState) -> Router {
    let root_path = state.args.server.root_path.clone();

    let trace_layer = TraceLayer::new_for_http().make_span_with(|request: &axum::extract::Request| {
        let uri: String = request.uri().to_string();
        info_span!("http_request", method = ?request.method(), uri)
    });

    Router::new()
        .merge(docs_routes(&root_path))
        .route(&format!("{root_path}/config"), get(get_config))
        .merge(device_routes(state.clone()))
        .merge(public_routes(state.clone()))
        .merge(health_routes(&root_path))
        .layer(trace_layer)
        .layer(cors_layer(&state.args.server.allowed_origins))
        .with_state(state)
}

///  Returns the [`Router`] of this application.
pub fn router(state: AppState) -> Result<Router, anyhow::Error> {
    let metrics_path = format!("{}/metrics", state.args.server.root_path);
    let (prometheus_layer, metric_handle) = PrometheusMetricLayer::pair();

    let router = app_router(state)
        .route(&metrics_path, get(|| async move { metric_handle.render() }))
        .layer(prometheus_layer);
    Ok(router)
}
