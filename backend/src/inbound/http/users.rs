//! Users API handlers.
//!
//! ```text
//! GET  /users
//! GET  /user/{id}
//! POST /user {"name":"Ada","email":"ada@example.com","img_url":null}
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Error, NewUser, User, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorResponse, MessageResponse};
use crate::inbound::http::state::HttpState;

/// Returned when `/user/` is requested without an identifier.
pub const MISSING_ID_MESSAGE: &str = "Essa rota espera receber um id como parâmetro";
/// Returned when the identifier does not parse as an integer.
pub const NON_NUMERIC_ID_MESSAGE: &str = "Essa rota espera receber um id numérico";
/// Returned when no row matches the identifier.
pub const USER_NOT_FOUND_MESSAGE: &str = "Nenhum usuário foi localizado com o id fornecido";

/// User as it appears on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    /// Store-assigned identifier.
    #[schema(example = 1)]
    pub user_id: i64,
    /// Display name.
    #[schema(example = "Ada Lovelace")]
    pub name: String,
    /// Contact email.
    #[schema(example = "ada@example.com")]
    pub email: String,
    /// Optional avatar URL; `null` when absent.
    #[schema(example = "https://example.com/ada.png")]
    pub img_url: Option<String>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            user_id: user.id().get(),
            name: user.name().to_owned(),
            email: user.email().to_owned(),
            img_url: user.img_url().map(str::to_owned),
        }
    }
}

/// Request body for `POST /user`.
///
/// `name` and `email` must be present strings. `user_id` may be sent as an
/// integer so a full user body binds, but it is ignored; the store assigns
/// identifiers.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub user_id: Option<i64>,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub img_url: Option<String>,
}

impl From<CreateUserRequest> for NewUser {
    fn from(value: CreateUserRequest) -> Self {
        Self::new(value.name, value.email, value.img_url)
    }
}

/// Parse the raw `{id}` path segment.
fn parse_user_id(raw: &str) -> Result<UserId, Error> {
    if raw.is_empty() {
        return Err(Error::invalid_request(MISSING_ID_MESSAGE));
    }
    raw.parse::<UserId>()
        .map_err(|_| Error::invalid_request(NON_NUMERIC_ID_MESSAGE))
}

/// List every user.
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "All users; empty array when none", body = [UserResponse]),
        (status = 500, description = "Store failure", body = ErrorResponse)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<UserResponse>>> {
    let users = state.users.list_users().await?;
    Ok(web::Json(
        users.into_iter().map(UserResponse::from).collect(),
    ))
}

/// Fetch one user by identifier.
#[utoipa::path(
    get,
    path = "/user/{id}",
    params(("id" = i64, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User", body = UserResponse),
        (status = 400, description = "Missing or non-numeric id", body = MessageResponse),
        (status = 404, description = "No user with this id", body = MessageResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/user/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<UserResponse>> {
    let id = parse_user_id(path.as_str())?;
    let user = state
        .users
        .find_user(id)
        .await?
        .ok_or_else(|| Error::not_found(USER_NOT_FOUND_MESSAGE))?;
    Ok(web::Json(UserResponse::from(user)))
}

/// `GET /user/` with an empty identifier segment.
#[get("/user/")]
pub async fn get_user_without_id() -> ApiResult<HttpResponse> {
    Err(Error::invalid_request(MISSING_ID_MESSAGE))
}

/// Create a user; the response carries the assigned identifier.
#[utoipa::path(
    post,
    path = "/user",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Malformed body", body = MessageResponse),
        (status = 500, description = "Store failure, including constraint violations", body = ErrorResponse)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/user")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<CreateUserRequest>,
) -> ApiResult<HttpResponse> {
    let created = state
        .users_command
        .create_user(NewUser::from(payload.into_inner()))
        .await?;
    Ok(HttpResponse::Created().json(UserResponse::from(created)))
}

/// Register every user route on an app or scope.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use users_api::inbound::http::users::configure;
///
/// let app = App::new().configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list_users)
        .service(get_user_without_id)
        .service(get_user)
        .service(create_user);
}
