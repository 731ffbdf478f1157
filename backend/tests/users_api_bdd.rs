//! Behavioural tests for the users API served by a real `HttpServer`.
//!
//! Each scenario boots the application on an ephemeral port with the users
//! routes mounted under `/api/users` and drives it with `awc`.

#[path = "users_api/harness.rs"]
mod harness;

use actix_web::http::Method;
use harness::{BASE_PATH, JsonRequest, WorldFixture, perform_json_request};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use serde_json::{Value, json};

#[fixture]
fn world() -> WorldFixture {
    harness::world()
}

fn ann() -> Value {
    json!({"name": "Ann", "email": "ann@example.com", "age": 30})
}

fn request(world: &WorldFixture, method: Method, path: String, payload: Option<Value>) {
    perform_json_request(
        &world.world(),
        JsonRequest {
            method,
            path,
            payload,
        },
    );
}

fn known_user_path(world: &WorldFixture) -> String {
    let id = world
        .world()
        .borrow()
        .known_id
        .clone()
        .expect("a user has been created");
    format!("{BASE_PATH}/{id}")
}

fn last_body(world: &WorldFixture) -> Value {
    world
        .world()
        .borrow()
        .last_body
        .clone()
        .expect("response body")
}

#[given("a running users service")]
fn a_running_users_service(world: &WorldFixture) {
    let _ = world;
}

#[given("Ann has been created")]
fn ann_has_been_created(world: &WorldFixture) {
    request(world, Method::POST, BASE_PATH.to_owned(), Some(ann()));
    let id = last_body(world)
        .get("id")
        .and_then(Value::as_str)
        .map(str::to_owned)
        .expect("created id");
    world.world().borrow_mut().known_id = Some(id);
}

#[when("the client creates Ann with a valid email")]
fn the_client_creates_ann(world: &WorldFixture) {
    request(world, Method::POST, BASE_PATH.to_owned(), Some(ann()));
}

#[when("the client creates Bob with an invalid email")]
fn the_client_creates_bob_with_an_invalid_email(world: &WorldFixture) {
    request(
        world,
        Method::POST,
        BASE_PATH.to_owned(),
        Some(json!({"name": "Bob", "email": "bob.example.com", "age": 40})),
    );
}

#[when("the client lists users")]
fn the_client_lists_users(world: &WorldFixture) {
    request(world, Method::GET, BASE_PATH.to_owned(), None);
}

#[when("the client lists users with a trailing slash")]
fn the_client_lists_users_with_a_trailing_slash(world: &WorldFixture) {
    request(world, Method::GET, format!("{BASE_PATH}/"), None);
}

#[when("the client deletes the whole collection")]
fn the_client_deletes_the_whole_collection(world: &WorldFixture) {
    request(world, Method::DELETE, BASE_PATH.to_owned(), None);
}

#[when("the client updates the user nonexistent-id")]
fn the_client_updates_an_unknown_user(world: &WorldFixture) {
    request(
        world,
        Method::PUT,
        format!("{BASE_PATH}/nonexistent-id"),
        Some(ann()),
    );
}

#[when("the client replaces Ann with Annie")]
fn the_client_replaces_ann_with_annie(world: &WorldFixture) {
    let path = known_user_path(world);
    request(
        world,
        Method::PUT,
        path,
        Some(json!({"name": "Annie", "email": "annie@example.com", "age": 31})),
    );
}

#[when("the client deletes Ann")]
fn the_client_deletes_ann(world: &WorldFixture) {
    let path = known_user_path(world);
    request(world, Method::DELETE, path, None);
}

#[when("the client fetches Ann")]
fn the_client_fetches_ann(world: &WorldFixture) {
    let path = known_user_path(world);
    request(world, Method::GET, path, None);
}

#[when("the client requests an unknown route")]
fn the_client_requests_an_unknown_route(world: &WorldFixture) {
    request(world, Method::GET, "/does/not/exist".to_owned(), None);
}

#[when("the client probes readiness")]
fn the_client_probes_readiness(world: &WorldFixture) {
    request(world, Method::GET, "/health/ready".to_owned(), None);
}

#[then("the response status is {status}")]
fn the_response_status_is(world: &WorldFixture, status: u16) {
    assert_eq!(world.world().borrow().last_status, Some(status));
}

#[then("the response is Ann with an assigned id")]
fn the_response_is_ann_with_an_assigned_id(world: &WorldFixture) {
    let body = last_body(world);
    let id = body.get("id").and_then(Value::as_str).expect("id");
    assert!(uuid::Uuid::parse_str(id).is_ok(), "id {id} is not a UUID");
    assert_eq!(body.get("name"), Some(&json!("Ann")));
    assert_eq!(body.get("email"), Some(&json!("ann@example.com")));
    assert_eq!(body.get("age"), Some(&json!(30)));
}

#[then("the response is Annie with Ann's id")]
fn the_response_is_annie_with_anns_id(world: &WorldFixture) {
    let id = world.world().borrow().known_id.clone().expect("known id");
    assert_eq!(
        last_body(world),
        json!({"id": id, "name": "Annie", "email": "annie@example.com", "age": 31})
    );
}

#[then("the response carries a trace id")]
fn the_response_carries_a_trace_id(world: &WorldFixture) {
    let trace_id = world
        .world()
        .borrow()
        .last_trace_id
        .clone()
        .expect("trace-id header");
    assert!(uuid::Uuid::parse_str(&trace_id).is_ok());
}

#[then("the error message is {message}")]
fn the_error_message_is(world: &WorldFixture, message: String) {
    assert_eq!(
        last_body(world).get("error").and_then(Value::as_str),
        Some(message.as_str())
    );
}

#[then("the user list is empty")]
fn the_user_list_is_empty(world: &WorldFixture) {
    assert_eq!(last_body(world), json!([]));
}

#[then("the user list holds one user")]
fn the_user_list_holds_one_user(world: &WorldFixture) {
    assert_eq!(last_body(world).as_array().map(Vec::len), Some(1));
}

#[then("the response confirms the deletion")]
fn the_response_confirms_the_deletion(world: &WorldFixture) {
    assert_eq!(last_body(world), json!({"message": "User has been deleted"}));
}

#[then("the response is not cacheable")]
fn the_response_is_not_cacheable(world: &WorldFixture) {
    assert_eq!(
        world.world().borrow().last_cache_control.as_deref(),
        Some("no-store")
    );
}

#[scenario(
    path = "tests/features/users_api.feature",
    name = "Creating a valid user assigns an identifier"
)]
fn creating_a_valid_user_assigns_an_identifier(world: WorldFixture) {
    drop(world);
}

#[scenario(
    path = "tests/features/users_api.feature",
    name = "An invalid email is rejected and never stored"
)]
fn an_invalid_email_is_rejected_and_never_stored(world: WorldFixture) {
    drop(world);
}

#[scenario(
    path = "tests/features/users_api.feature",
    name = "Updating an unknown user reports not found"
)]
fn updating_an_unknown_user_reports_not_found(world: WorldFixture) {
    drop(world);
}

#[scenario(
    path = "tests/features/users_api.feature",
    name = "Updating replaces every field and keeps the id"
)]
fn updating_replaces_every_field_and_keeps_the_id(world: WorldFixture) {
    drop(world);
}

#[scenario(
    path = "tests/features/users_api.feature",
    name = "A deleted user is gone"
)]
fn a_deleted_user_is_gone(world: WorldFixture) {
    drop(world);
}

#[scenario(
    path = "tests/features/users_api.feature",
    name = "Unknown routes answer with a JSON error"
)]
fn unknown_routes_answer_with_a_json_error(world: WorldFixture) {
    drop(world);
}

#[scenario(
    path = "tests/features/users_api.feature",
    name = "The readiness probe reports ready once bound"
)]
fn the_readiness_probe_reports_ready_once_bound(world: WorldFixture) {
    drop(world);
}

#[scenario(
    path = "tests/features/users_api.feature",
    name = "The collection answers with a trailing slash"
)]
fn the_collection_answers_with_a_trailing_slash(world: WorldFixture) {
    drop(world);
}

#[scenario(
    path = "tests/features/users_api.feature",
    name = "A method the collection does not support is rejected"
)]
fn a_method_the_collection_does_not_support_is_rejected(world: WorldFixture) {
    drop(world);
}
