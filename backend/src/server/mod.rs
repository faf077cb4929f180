//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

use crate::Trace;
#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::inbound::http::health::{HealthState, live, ping, ready};
use crate::inbound::http::json_config;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::users;
use crate::outbound::persistence::DieselUserRepository;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

/// Shared state handed to every worker's `App`.
#[derive(Clone)]
pub struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
}

impl AppDependencies {
    /// Bundle the health flags and the handler ports.
    pub fn new(health_state: web::Data<HealthState>, http_state: web::Data<HttpState>) -> Self {
        Self {
            health_state,
            http_state,
        }
    }
}

/// Assemble the application the server runs: trace middleware, lenient
/// JSON binding, health routes, user routes, and Swagger UI in debug builds.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use actix_web::web;
/// use users_api::inbound::http::health::HealthState;
/// use users_api::inbound::http::state::HttpState;
/// use users_api::server::{AppDependencies, build_app};
/// use users_api::test_support::InMemoryUserRepository;
///
/// let deps = AppDependencies::new(
///     web::Data::new(HealthState::new()),
///     web::Data::new(HttpState::from_repository(Arc::new(
///         InMemoryUserRepository::default(),
///     ))),
/// );
/// let _app = build_app(deps);
/// ```
pub fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
    } = deps;

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .app_data(json_config())
        .wrap(Trace)
        .service(ping)
        .service(ready)
        .service(live)
        .configure(users::configure);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server over the configured pool.
///
/// Readiness flips to true once the listener is bound.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let ServerConfig { bind_addr, db_pool } = config;
    let repository = Arc::new(DieselUserRepository::new(db_pool));
    let http_state = web::Data::new(HttpState::from_repository(repository));
    let deps = AppDependencies::new(health_state.clone(), http_state);

    let server = HttpServer::new(move || build_app(deps.clone()))
        .bind(bind_addr)?
        .run();

    health_state.mark_ready();
    Ok(server)
}
