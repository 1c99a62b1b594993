use std::path::PathBuf;

/// Runtime configuration, read from the environment with sane defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server bind address
    pub bind_address: String,
    /// HTTP server port
    pub port: u16,
    /// Directory extracted frames are written to
    pub frames_dir: PathBuf,
    /// Log level
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            port: 8000,
            frames_dir: std::env::temp_dir(),
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Config::default();
        Self {
            bind_address: std::env::var("BIOMECH_BIND").unwrap_or(defaults.bind_address),
            port: std::env::var("BIOMECH_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            frames_dir: std::env::var("BIOMECH_FRAMES_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.frames_dir),
            log_level: std::env::var("RUST_LOG").unwrap_or(defaults.log_level),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_bind_all_interfaces_on_8000() {
        let config = Config::default();
        assert_eq!(config.bind_address, "0.0.0.0");
        assert_eq!(config.port, 8000);
        assert_eq!(config.log_level, "info");
    }
}
