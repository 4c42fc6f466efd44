use std::env;
use std::net::SocketAddr;

pub struct AppConfig {
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(8080);
        AppConfig { host, port }
    }

    pub fn addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        Ok(SocketAddr::new(self.host.parse()?, self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_addr_parses_host_and_port() {
        let config = AppConfig {
            host: "0.0.0.0".to_string(),
            port: 9090,
        };
        let addr = config.addr().unwrap();
        assert_eq!(addr.port(), 9090);
    }

    #[test]
    fn test_addr_rejects_bad_host() {
        let config = AppConfig {
            host: "not-an-ip".to_string(),
            port: 8080,
        };
        assert!(config.addr().is_err());
    }
}
