pub mod models;
pub mod schema;

pub mod config;

mod apikey;
pub use apikey::ApiKey;

pub mod api;

pub async fn db_connection(database_url: &str) -> diesel_async::AsyncPgConnection {
    use diesel_async::AsyncConnection;

    diesel_async::AsyncPgConnection::establish(database_url)
        .await
        .unwrap_or_else(|e| panic!("Error connecting to {} - {:?}", database_url, e))
}
