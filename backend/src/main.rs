use tracing_subscriber::prelude::__tracing_subscriber_SubscriberExt;

const MIGRATIONS: diesel_async_migrations::EmbeddedMigrations =
    diesel_async_migrations::embed_migrations!("../migrations/");

async fn run_migrations(connection: &mut diesel_async::AsyncPgConnection) {
    MIGRATIONS.run_pending_migrations(connection).await.unwrap();
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let registry = tracing_subscriber::Registry::default()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::filter::filter_fn(|meta| {
            meta.target().contains("backend")
        }));
    tracing::subscriber::set_global_default(registry).unwrap();

    tracing::info!("Starting...");

    let config = match backend::config::Config::from_env() {
        Ok(config) => config,
        Err(e) => panic!("Loading configuration: {}", e),
    };

    tracing::info!("Applying Migrations");
    run_migrations(&mut backend::db_connection(&config.database_url).await).await;
    tracing::info!("Completed Migrations");

    let listen_addr = config.listen_addr.clone();
    let router = axum::Router::new().nest("/api/", backend::api::router(config));

    let listener = tokio::net::TcpListener::bind(&listen_addr).await.unwrap();
    tracing::info!("Listening on {}", listen_addr);
    axum::serve(listener, router).await.unwrap();
}
