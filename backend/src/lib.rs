//! Users API library modules.
//!
//! A small hexagonal service: [`domain`] holds the user record, validation and
//! ports; [`outbound`] provides the in-memory store; [`inbound`] maps HTTP onto
//! the domain; [`server`] assembles the Actix application.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
