//! Server harness and shared world for the users API scenarios.
//!
//! The harness owns a single-threaded Tokio runtime plus a `LocalSet` because
//! Actix uses `spawn_local` internally. `WorldFixture` stops the server even if
//! a scenario panics.

use std::cell::RefCell;
use std::net::TcpListener;
use std::rc::Rc;

use actix_web::dev::ServerHandle;
use actix_web::http::{Method, header};
use actix_web::web;
use awc::Client;
use serde_json::Value;
use tokio::runtime::Runtime;
use tokio::task::LocalSet;

use users_api::domain::TRACE_ID_HEADER;
use users_api::inbound::http::health::HealthState;
use users_api::server::{ServerConfig, create_server};

/// Base path the scenarios mount the users routes under.
pub(crate) const BASE_PATH: &str = "/api/users";

pub(crate) struct UsersWorld {
    pub(crate) runtime: Runtime,
    pub(crate) local: LocalSet,
    pub(crate) base_url: String,
    pub(crate) server: ServerHandle,
    pub(crate) last_status: Option<u16>,
    pub(crate) last_body: Option<Value>,
    pub(crate) last_cache_control: Option<String>,
    pub(crate) last_trace_id: Option<String>,
    pub(crate) known_id: Option<String>,
}

pub(crate) type SharedWorld = Rc<RefCell<UsersWorld>>;

pub(crate) struct WorldFixture {
    world: SharedWorld,
}

impl WorldFixture {
    pub(crate) fn world(&self) -> SharedWorld {
        self.world.clone()
    }
}

impl Drop for WorldFixture {
    fn drop(&mut self) {
        shutdown(self.world.clone());
    }
}

fn shutdown(world: SharedWorld) {
    // `LocalSet` must be driven on the thread that owns it.
    let ctx = world.borrow();
    let server = ctx.server.clone();
    ctx.local.block_on(&ctx.runtime, async move {
        server.stop(true).await;
    });
}

fn with_world_async<R, F>(world: &SharedWorld, operation: impl FnOnce(String) -> F) -> R
where
    F: std::future::Future<Output = R>,
{
    let ctx = world.borrow();
    let base_url = ctx.base_url.clone();
    ctx.local.block_on(&ctx.runtime, operation(base_url))
}

fn spawn_users_server() -> Result<(String, ServerHandle), String> {
    let listener = TcpListener::bind("127.0.0.1:0").map_err(|err| err.to_string())?;
    let addr = listener.local_addr().map_err(|err| err.to_string())?;
    let config = ServerConfig::new(addr)
        .with_listener(listener)
        .with_base_path(BASE_PATH)
        .embedded(1);

    let server = create_server(web::Data::new(HealthState::new()), config)
        .map_err(|err| err.to_string())?;
    let handle = server.handle();
    actix_web::rt::spawn(server);

    Ok((format!("http://{addr}"), handle))
}

fn create_runtime_and_local() -> (Runtime, LocalSet) {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("tokio runtime");
    let local = LocalSet::new();

    (runtime, local)
}

pub(crate) fn world() -> WorldFixture {
    let (runtime, local) = create_runtime_and_local();
    let (base_url, server) = local
        .block_on(&runtime, async { spawn_users_server() })
        .expect("server should start");

    let world = Rc::new(RefCell::new(UsersWorld {
        runtime,
        local,
        base_url,
        server,
        last_status: None,
        last_body: None,
        last_cache_control: None,
        last_trace_id: None,
        known_id: None,
    }));

    WorldFixture { world }
}

/// A request issued by a scenario step.
pub(crate) struct JsonRequest {
    pub(crate) method: Method,
    pub(crate) path: String,
    pub(crate) payload: Option<Value>,
}

/// Send a request and record status, headers and JSON body on the world.
pub(crate) fn perform_json_request(world: &SharedWorld, outgoing: JsonRequest) {
    let (status, cache_control, trace_id, body) = with_world_async(world, |base_url| async move {
        let url = format!("{base_url}{}", outgoing.path);
        let request = Client::default().request(outgoing.method, url);
        let mut response = match outgoing.payload {
            Some(payload) => request.send_json(&payload).await.expect("json request"),
            None => request.send().await.expect("request"),
        };
        let status = response.status().as_u16();
        let cache_control = response
            .headers()
            .get(header::CACHE_CONTROL)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        let trace_id = response
            .headers()
            .get(TRACE_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        let bytes = response.body().await.expect("body");
        let body = if bytes.is_empty() {
            None
        } else {
            Some(serde_json::from_slice::<Value>(&bytes).expect("json body"))
        };
        (status, cache_control, trace_id, body)
    });

    let mut ctx = world.borrow_mut();
    ctx.last_status = Some(status);
    ctx.last_cache_control = cache_control;
    ctx.last_trace_id = trace_id;
    ctx.last_body = body;
}
