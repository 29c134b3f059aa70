use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

pub const DEFAULT_ADDRESS: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5000;

fn default_address() -> String {
    DEFAULT_ADDRESS.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

/// Configuration options for the movie proxy.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct ServerConfig {
    /// Interface the HTTP server binds to.
    #[serde(default = "default_address")]
    pub address: String,
    /// Port the HTTP server listens on, overridable with `PORT`.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: default_address(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// Load from `config/default.yaml` (optional) and then the environment.
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(Environment::default().try_parsing(true));
        Self::from_config(settings.build()?)
    }

    pub fn from_config(settings: Config) -> Result<Self, ConfigError> {
        settings.try_deserialize()
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.address.clone(), self.port)
    }
}
