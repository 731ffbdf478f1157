//! Fallback for requests that match no route.

use actix_web::{HttpRequest, HttpResponse};
use tracing::debug;

use crate::domain::Error;
use crate::inbound::http::ApiResult;

/// Message returned for unknown routes.
pub const ENDPOINT_NOT_FOUND: &str = "Endpoint not found";

/// Default service answering 404 with the shared error body.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use users_api::inbound::http::not_found::endpoint_not_found;
///
/// let _app = App::new().default_service(web::to(endpoint_not_found));
/// ```
pub async fn endpoint_not_found(req: HttpRequest) -> ApiResult<HttpResponse> {
    debug!(method = %req.method(), path = %req.path(), "no route matched");
    Err(Error::not_found(ENDPOINT_NOT_FOUND))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{App, test, web};
    use rstest::rstest;
    use serde_json::{Value, json};

    #[rstest]
    #[case("/nowhere")]
    #[case("/users/extra/segments")]
    #[actix_web::test]
    async fn unknown_routes_answer_json_404(#[case] uri: &str) {
        let app =
            test::init_service(App::new().default_service(web::to(endpoint_not_found))).await;
        let res = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body, json!({"error": ENDPOINT_NOT_FOUND}));
    }
}
