//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the users and health handlers together with the
//! schema wrappers from [`crate::inbound::http::schemas`]. Paths are
//! documented under the default `/users` base path.
//!
//! The document is served by Swagger UI in debug builds and printed by the
//! `openapi-dump` binary.

use crate::inbound::http::schemas::{ErrorSchema, UserSchema};
use crate::inbound::http::users::{DeletedResponse, UserRequest};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Users API",
        description = "Create, read, update and delete users held in process memory."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(UserSchema, ErrorSchema, UserRequest, DeletedResponse)),
    tags(
        (name = "users", description = "User lifecycle operations"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
