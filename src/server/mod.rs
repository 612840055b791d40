mod handlers;
mod state;

use std::sync::{Arc, Mutex};

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::directory::NgoDirectory;
use crate::users::UserStore;
use state::AppState;

pub fn build_router(directory: NgoDirectory, users: UserStore) -> Router {
    let state = Arc::new(AppState {
        directory,
        users: Mutex::new(users),
    });

    Router::new()
        .route("/", get(handlers::index))
        .route("/ongs", get(handlers::list_ongs))
        .route("/ongs/nearest", get(handlers::nearest_ongs))
        .route("/ongs/{id}", get(handlers::ong_by_id))
        .route("/register", post(handlers::register))
        .route("/login", post(handlers::login))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn start(host: &str, port: u16, directory: NgoDirectory, users: UserStore) {
    let app = build_router(directory, users);
    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| {
            eprintln!("Error: Cannot bind to {}: {}", addr, e);
            std::process::exit(1);
        });

    eprintln!("  ONG Radar server listening on http://{}", addr);
    eprintln!("  Press Ctrl+C to stop.");

    axum::serve(listener, app)
        .await
        .unwrap_or_else(|e| {
            eprintln!("Server error: {}", e);
            std::process::exit(1);
        });
}
