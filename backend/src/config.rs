/// Process-wide configuration, read from the environment once at startup and
/// passed by value to the transport and persistence layers.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub api_key: String,
    pub listen_addr: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let database_url =
            std::env::var("DATABASE_URL").map_err(|_| "'DATABASE_URL' must be set".to_owned())?;
        let api_key = std::env::var("API_KEY").unwrap_or_else(|_| "changeme".to_owned());
        let listen_addr =
            std::env::var("LISTEN_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_owned());

        Ok(Self {
            database_url,
            api_key,
            listen_addr,
        })
    }
}
