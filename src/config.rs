use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    #[serde(default)]
    pub websocket: WebSocketConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WebSocketConfig {
    /// Interval between keep-alive pings on /ws/drilldown.
    #[serde(default = "default_ping_interval_secs")]
    pub ping_interval_secs: u64,
    /// A view push that takes longer than this closes the connection.
    #[serde(default = "default_send_timeout_secs")]
    pub send_timeout_secs: u64,
}

impl Default for WebSocketConfig {
    fn default() -> Self {
        Self {
            ping_interval_secs: default_ping_interval_secs(),
            send_timeout_secs: default_send_timeout_secs(),
        }
    }
}

fn default_ping_interval_secs() -> u64 {
    30
}

fn default_send_timeout_secs() -> u64 {
    10
}

impl AppConfig {
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("CONFIG_FILE").unwrap_or_else(|_| "config.toml".into());
        let s = std::fs::read_to_string(&path)?;
        Self::load_from_str(&s)
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.server.port > 0,
            "server.port must be between 1 and 65535, got {}",
            self.server.port
        );
        anyhow::ensure!(
            !self.server.host.is_empty(),
            "server.host must be non-empty"
        );
        anyhow::ensure!(
            self.websocket.ping_interval_secs > 0,
            "websocket.ping_interval_secs must be > 0, got {}",
            self.websocket.ping_interval_secs
        );
        anyhow::ensure!(
            self.websocket.send_timeout_secs > 0,
            "websocket.send_timeout_secs must be > 0, got {}",
            self.websocket.send_timeout_secs
        );
        Ok(())
    }
}
