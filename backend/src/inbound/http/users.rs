//! Users API handlers.
//!
//! ```text
//! POST   /users        {"name":"Ann","email":"ann@example.com","age":30}
//! GET    /users
//! GET    /users/{id}
//! PUT    /users/{id}   {"name":"Ann","email":"ann@example.com","age":31}
//! DELETE /users/{id}
//! ```
//!
//! Paths are relative to the configured base path, `/users` by default. The
//! collection answers with or without a trailing slash.

use actix_web::{HttpRequest, HttpResponse, Scope, delete, get, post, put, routes, web};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{Error, User, UserDraft};
use crate::inbound::http::ApiResult;
use crate::inbound::http::not_found::endpoint_not_found;
use crate::inbound::http::schemas::{ErrorSchema, UserSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::parse_user_id;

/// Confirmation returned by `DELETE /users/{id}`.
pub const USER_DELETED: &str = "User has been deleted";

/// Message returned when a users route does not accept the request method.
pub const METHOD_NOT_ALLOWED: &str = "Method not allowed";

/// Request body for creating or replacing a user.
///
/// Example JSON:
/// `{"name":"Ann","email":"ann@example.com","age":30}`
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
pub struct UserRequest {
    #[schema(example = "Ann")]
    pub name: String,
    #[schema(example = "ann@example.com")]
    pub email: String,
    #[schema(example = 30)]
    pub age: i64,
}

impl From<UserRequest> for UserDraft {
    fn from(value: UserRequest) -> Self {
        Self::new(value.name, value.email, value.age)
    }
}

/// Body of a successful delete.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
pub struct DeletedResponse {
    #[schema(example = "User has been deleted")]
    pub message: String,
}

/// Create a user.
#[utoipa::path(
    post,
    path = "/users",
    request_body = UserRequest,
    responses(
        (status = 201, description = "User created", body = UserSchema),
        (status = 400, description = "Invalid email or request body", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[routes]
#[post("")]
#[post("/")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<UserRequest>,
) -> ApiResult<HttpResponse> {
    let user = state.users.create_user(payload.into_inner().into()).await?;
    Ok(HttpResponse::Created().json(user))
}

/// List every stored user. Order is unspecified.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use users_api::inbound::http::users::list_users;
///
/// let app = App::new().service(web::scope("/users").service(list_users));
/// ```
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "Users", body = [UserSchema]),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[routes]
#[get("")]
#[get("/")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<User>>> {
    Ok(web::Json(state.users_query.list_users().await?))
}

/// Fetch one user.
#[utoipa::path(
    get,
    path = "/users/{id}",
    params(("id" = String, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User", body = UserSchema),
        (status = 404, description = "User not found", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<User>> {
    let id = parse_user_id(&path)?;
    Ok(web::Json(state.users_query.get_user(&id).await?))
}

/// Replace every field of an existing user.
///
/// An unknown id is reported before any problem with the body, so the body
/// extractor's outcome is only inspected once the user is known to exist.
#[utoipa::path(
    put,
    path = "/users/{id}",
    params(("id" = String, Path, description = "User identifier")),
    request_body = UserRequest,
    responses(
        (status = 200, description = "User updated", body = UserSchema),
        (status = 400, description = "Invalid email or request body", body = ErrorSchema),
        (status = 404, description = "User not found", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[put("/{id}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: Result<web::Json<UserRequest>, actix_web::Error>,
) -> ApiResult<web::Json<User>> {
    let id = parse_user_id(&path)?;
    state.users_query.get_user(&id).await?;
    let payload = payload.map_err(Error::from)?;
    let user = state
        .users
        .update_user(&id, payload.into_inner().into())
        .await?;
    Ok(web::Json(user))
}

/// Remove a user.
#[utoipa::path(
    delete,
    path = "/users/{id}",
    params(("id" = String, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User deleted", body = DeletedResponse),
        (status = 404, description = "User not found", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/{id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<DeletedResponse>> {
    let id = parse_user_id(&path)?;
    state.users.delete_user(&id).await?;
    Ok(web::Json(DeletedResponse {
        message: USER_DELETED.to_owned(),
    }))
}

/// Register every user handler on a scope.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use users_api::inbound::http::users;
///
/// let app = App::new().service(web::scope("/api/users").configure(users::configure));
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(create_user)
        .service(list_users)
        .service(get_user)
        .service(update_user)
        .service(delete_user);
}

/// Build the users scope mounted at `base_path`.
///
/// Requests that match a users path but none of its methods answer 405.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use users_api::inbound::http::users;
///
/// let app = App::new().service(users::scope("/users"));
/// ```
pub fn scope(base_path: &str) -> Scope {
    web::scope(base_path)
        .configure(configure)
        .default_service(web::to(unsupported_method))
}

/// Default service of the users scope.
///
/// The collection path and single-segment item paths exist for some method,
/// so a miss there is a 405. Deeper paths fall back to the 404 body.
pub async fn unsupported_method(req: HttpRequest) -> ApiResult<HttpResponse> {
    if !is_users_path(req.match_info().unprocessed()) {
        return endpoint_not_found(req).await;
    }
    debug!(method = %req.method(), path = %req.path(), "method not allowed");
    Err(Error::method_not_allowed(METHOD_NOT_ALLOWED))
}

/// `rest` is the path left after the scope prefix: empty, `/`, or `/{id}`.
fn is_users_path(rest: &str) -> bool {
    match rest.strip_prefix('/') {
        Some(segment) => !segment.contains('/'),
        None => rest.is_empty(),
    }
}
