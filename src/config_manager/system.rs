use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};

/// System configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    #[serde(default = "default_conf_version")]
    pub conf_version: String,

    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_conf_version() -> String {
    "v1.0.0".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

impl SystemConfig {
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let ip: IpAddr = match self.host.as_str() {
            "localhost" => IpAddr::from([127, 0, 0, 1]),
            host => host
                .parse()
                .map_err(|e| anyhow::anyhow!("Invalid host '{}': {}", host, e))?,
        };
        Ok(SocketAddr::new(ip, self.port))
    }
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            conf_version: default_conf_version(),
            host: default_host(),
            port: default_port(),
        }
    }
}
