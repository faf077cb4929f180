//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every handler from the inbound layer together with
//! the wire schemas they exchange. Swagger UI serves it in debug builds.

use crate::inbound::http::schemas::{ErrorResponse, MessageResponse};
use crate::inbound::http::users::{CreateUserRequest, UserResponse};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Users API",
        description = "Create, list, and fetch user records backed by PostgreSQL."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::health::ping,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::create_user,
    ),
    components(schemas(UserResponse, CreateUserRequest, MessageResponse, ErrorResponse)),
    tags(
        (name = "users", description = "User records"),
        (name = "health", description = "Heartbeat and probes")
    )
)]
pub struct ApiDoc;
