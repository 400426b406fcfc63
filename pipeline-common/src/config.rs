//! Server configuration resolution
//!
//! Listen address is resolved per field in priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable (`HOST`, `PORT`)
//! 3. TOML config file
//! 4. Compiled default (fallback)

use crate::{Error, Result};
use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, info};

/// Default listen port
pub const DEFAULT_PORT: u16 = 3000;

/// Default listen host (all interfaces, for container deployments)
pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

/// Environment variable overriding the listen port
pub const PORT_ENV: &str = "PORT";

/// Environment variable overriding the listen host
pub const HOST_ENV: &str = "HOST";

/// Resolved server configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl ServerConfig {
    /// Address to bind the HTTP listener to
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST,
            port: DEFAULT_PORT,
        }
    }
}

/// Contents of the optional TOML config file
///
/// ```toml
/// host = "127.0.0.1"
/// port = 8080
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    pub host: Option<IpAddr>,
    pub port: Option<u16>,
}

impl TomlConfig {
    /// Parse TOML config text
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load and parse a TOML config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }
}

/// Values supplied on the command line
#[derive(Debug, Default, Clone)]
pub struct ConfigOverrides {
    pub host: Option<IpAddr>,
    pub port: Option<u16>,
    /// Explicit config file; must exist when given
    pub config_file: Option<PathBuf>,
}

/// Resolves [`ServerConfig`] from CLI, environment, TOML file and defaults
#[derive(Debug, Clone)]
pub struct ServerConfigResolver {
    overrides: ConfigOverrides,
    /// Config file read when no explicit one is given; skipped if absent
    default_path: Option<PathBuf>,
}

impl ServerConfigResolver {
    pub fn new(overrides: ConfigOverrides) -> Self {
        Self {
            overrides,
            default_path: default_config_path(),
        }
    }

    /// Replace the platform default config file location
    pub fn with_default_path(mut self, path: Option<PathBuf>) -> Self {
        self.default_path = path;
        self
    }

    /// Resolve the server configuration
    pub fn resolve(&self) -> Result<ServerConfig> {
        let file = self.load_file_config()?;

        let host = match self.overrides.host {
            Some(host) => {
                debug!("host {} from command line", host);
                host
            }
            None => match env_override::<IpAddr>(HOST_ENV)? {
                Some(host) => {
                    debug!("host {} from {}", host, HOST_ENV);
                    host
                }
                None => file.host.unwrap_or(DEFAULT_HOST),
            },
        };

        let port = match self.overrides.port {
            Some(port) => {
                debug!("port {} from command line", port);
                port
            }
            None => match env_override::<u16>(PORT_ENV)? {
                Some(port) => {
                    debug!("port {} from {}", port, PORT_ENV);
                    port
                }
                None => file.port.unwrap_or(DEFAULT_PORT),
            },
        };

        Ok(ServerConfig { host, port })
    }

    fn load_file_config(&self) -> Result<TomlConfig> {
        if let Some(path) = &self.overrides.config_file {
            if !path.exists() {
                return Err(Error::Config(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            info!("Loading config file {}", path.display());
            return TomlConfig::load(path);
        }

        match &self.default_path {
            Some(path) if path.exists() => {
                info!("Loading config file {}", path.display());
                TomlConfig::load(path)
            }
            _ => Ok(TomlConfig::default()),
        }
    }
}

impl Default for ServerConfigResolver {
    fn default() -> Self {
        Self::new(ConfigOverrides::default())
    }
}

/// Platform config file location (`~/.config/pipeline-demo/config.toml` on Linux)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("pipeline-demo").join("config.toml"))
}

/// Read and parse an environment variable; unset or blank means no override
fn env_override<T: FromStr>(name: &str) -> Result<Option<T>> {
    let raw = match std::env::var(name) {
        Ok(raw) => raw,
        Err(std::env::VarError::NotPresent) => return Ok(None),
        Err(std::env::VarError::NotUnicode(_)) => {
            return Err(Error::Config(format!("{} is not valid unicode", name)))
        }
    };

    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }

    raw.parse::<T>()
        .map(Some)
        .map_err(|_| Error::Config(format!("Invalid value for {}: {:?}", name, raw)))
}
