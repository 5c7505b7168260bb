pub mod error;
pub mod routes;

use actix_cors::Cors;
use actix_web::{
    dev::{HttpServiceFactory, Server},
    error::InternalError,
    web::{self, JsonConfig, Redirect},
    App, HttpResponse, HttpServer,
};
use packwise_packs::PackStore;
use routes::{calculate, index, pack_sizes};
use std::{
    net::{SocketAddr, TcpListener},
    sync::Arc,
};
use tracing::{info, warn};
use tracing_actix_web::TracingLogger;

/// API version prefix for all routes
pub const API_VERSION: &str = "v1";

/// Shared state handed to every request handler. Cheap to clone; the store
/// itself carries the interior synchronization.
#[derive(Clone)]
pub struct ApiState {
    pub packs: Arc<PackStore>,
}

impl ApiState {
    pub fn new(packs: Arc<PackStore>) -> Self {
        Self { packs }
    }
}

pub fn routes() -> impl HttpServiceFactory {
    web::scope(API_VERSION)
        .route("/", web::get().to(index::info_route))
        .route("/calculate", web::post().to(calculate::calculate_packs))
        .route("/info", web::get().to(index::info_route))
        .route("/pack-sizes", web::post().to(pack_sizes::set_pack_sizes))
}

pub fn run_server(app_state: ApiState, listener: TcpListener) -> Server {
    let port = listener.local_addr().expect("listener to work").port();
    info!(?port, "Starting API server");
    let state = web::Data::new(app_state);
    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .app_data(
                JsonConfig::default()
                    .limit(1024 * 1024) // Set JSON payload limit to 1MB
                    .error_handler(|err, req| {
                        warn!("JSON decode error for req {} - {}", &req.path(), &err);
                        let error_message = format!("JSON decode/parse error: {err}");
                        InternalError::from_response(
                            err,
                            HttpResponse::BadRequest().body(error_message),
                        )
                        .into()
                    }),
            )
            // not a permanent redirect, so we can redirect to the highest API version
            .route("/", web::get().to(|| async { Redirect::to("/v1/info") }))
            .route("/health", web::get().to(index::health_route))
            .service(routes())
            .wrap(Cors::permissive())
            .wrap(TracingLogger::default())
    })
    .shutdown_timeout(5)
    .listen(listener)
    .unwrap()
    .run()
}

// Adapted from /actix-web-4.9.0/src/server.rs create_listener
// This is required as we need to access the TcpListener directly to figure out what port we've been assigned
// if randomisation (requested port 0) is used.
pub fn create_listener(addr: SocketAddr) -> eyre::Result<TcpListener> {
    use socket2::{Domain, Protocol, Socket, Type};
    let backlog = 1024;
    let domain = Domain::for_address(addr);
    let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP))?;
    // need this so application restarts can pick back up the same port without suffering from time-wait
    socket.set_reuse_address(true)?;
    socket.bind(&addr.into())?;
    // clamp backlog to max u32 that fits in i32 range
    let backlog = core::cmp::min(backlog, i32::MAX as u32) as i32;
    socket.listen(backlog)?;
    let listener = TcpListener::from(socket);
    Ok(listener)
}
