pub mod rounds;

pub struct ApiState {
    pub config: crate::config::Config,
}

pub fn router(config: crate::config::Config) -> axum::Router {
    axum::Router::new()
        .route("/health", axum::routing::get(health))
        .route("/collect", axum::routing::post(rounds::collect))
        .route("/stats", axum::routing::get(rounds::stats))
        .with_state(std::sync::Arc::new(ApiState { config }))
}

async fn health() -> axum::response::Json<common::HealthResponse> {
    axum::Json(common::HealthResponse {
        status: "ok".to_owned(),
    })
}
