//! HTTP server core implementation
//!
//! Owns the listener settings and the shared [`AppState`], and builds the
//! actix application with its middleware stack.

use crate::config::{Config, CorsConfig, ServerConfig, Validate};
use crate::core::loader::{RestStudentSource, StudentSource};
use crate::server::handlers::health_check;
use crate::server::routes;
use crate::server::state::AppState;
use crate::utils::error::{DashboardError, Result};
use actix_cors::Cors;
use actix_web::{
    App, HttpServer as ActixHttpServer,
    http::{Method, header::HeaderName},
    middleware::{DefaultHeaders, Logger},
    web,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Dashboard HTTP server
pub struct HttpServer {
    config: ServerConfig,
    state: AppState,
}

impl HttpServer {
    /// Create a server reading students from the configured REST table
    pub fn new(config: &Config) -> Result<Self> {
        let source = RestStudentSource::new(config.source())?;
        info!(source = %source.describe(), "Student source configured");

        Ok(Self::with_source(config, Arc::new(source)))
    }

    /// Create a server over an arbitrary student source
    pub fn with_source(config: &Config, source: Arc<dyn StudentSource>) -> Self {
        Self {
            config: config.server().clone(),
            state: AppState::new(config.clone(), source),
        }
    }

    /// Build the actix application around shared state
    pub fn create_app(
        state: web::Data<AppState>,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let cors = cors_middleware(&state.config.server().cors);

        App::new()
            .app_data(state)
            .app_data(routes::query_config())
            .wrap(cors)
            .wrap(Logger::default())
            .wrap(DefaultHeaders::new().add(("Server", crate::NAME)))
            .route("/health", web::get().to(health_check))
            .configure(routes::views::configure_routes)
            .configure(routes::oneshot::configure_routes)
            .configure(routes::notifications::configure_routes)
    }

    /// Bind and serve until shutdown
    pub async fn start(self) -> Result<()> {
        let address = self.config.address();
        let workers = self.config.worker_count();
        info!(%address, workers, "Starting dashboard server");

        let sweeper = self.state.views.spawn_sweeper();
        let state = web::Data::new(self.state);
        let server = ActixHttpServer::new(move || Self::create_app(state.clone()))
            .workers(workers)
            .bind(&address)
            .map_err(|e| Self::format_bind_error(e, &address, self.config.port))?
            .run();

        let outcome = server.await;
        sweeper.abort();
        outcome.map_err(|e| DashboardError::server(format!("Server error: {}", e)))?;

        info!("Dashboard server stopped");
        Ok(())
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }
}

/// CORS middleware for the admin frontend
///
/// Disabled CORS yields actix-cors' default, which rejects cross-origin
/// requests. Unparseable methods and headers are skipped.
fn cors_middleware(config: &CorsConfig) -> Cors {
    if !config.enabled {
        return Cors::default();
    }

    let cors = if config.allows_all_origins() {
        if let Err(e) = config.validate() {
            warn!(error = %e, "CORS configuration warning");
        }
        Cors::default().allow_any_origin()
    } else {
        config
            .allowed_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
    };

    let methods: Vec<Method> = parse_all(&config.allowed_methods);
    let headers: Vec<HeaderName> = parse_all(&config.allowed_headers);
    debug!(
        origins = config.allowed_origins.len(),
        methods = methods.len(),
        headers = headers.len(),
        "CORS configured"
    );

    let cors = if methods.is_empty() {
        cors
    } else {
        cors.allowed_methods(methods)
    };
    let cors = if headers.is_empty() {
        cors
    } else {
        cors.allowed_headers(headers)
    };
    let cors = cors.max_age(config.max_age as usize);

    if config.allow_credentials {
        cors.supports_credentials()
    } else {
        cors
    }
}

fn parse_all<T: std::str::FromStr>(values: &[String]) -> Vec<T> {
    values.iter().filter_map(|v| v.parse().ok()).collect()
}
