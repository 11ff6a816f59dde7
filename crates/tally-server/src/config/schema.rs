use std::net::SocketAddr;

use serde::Deserialize;
use tally_core::error::{Result, TallyError};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TallyConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub storage: StorageSection,

    #[serde(default)]
    pub metrics: MetricsSection,
}

impl Default for TallyConfig {
    fn default() -> Self {
        Self {
            version: 1,
            server: ServerSection::default(),
            storage: StorageSection::default(),
            metrics: MetricsSection::default(),
        }
    }
}

impl TallyConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(TallyError::Config(format!(
                "unsupported config version: {}",
                self.version
            )));
        }
        self.server.validate()?;
        self.storage.validate()?;
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,

    /// Directory served for unmatched paths. `None` disables static serving.
    #[serde(default)]
    pub static_dir: Option<String>,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            static_dir: None,
        }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr()?;
        if matches!(self.static_dir.as_deref(), Some("")) {
            return Err(TallyError::Config("server.static_dir must not be empty".into()));
        }
        Ok(())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|_| {
            TallyError::Config(format!(
                "server.listen must be a valid SocketAddr, got {:?}",
                self.listen
            ))
        })
    }

    /// Replace the port of `listen`, keeping the host (`TALLY_PORT`).
    pub fn apply_port_override(&mut self, port: Option<&str>) -> Result<()> {
        let Some(port) = port else { return Ok(()) };
        let port: u16 = port
            .trim()
            .parse()
            .map_err(|_| TallyError::Config(format!("invalid port override: {port:?}")))?;
        let mut addr = self.listen_addr()?;
        addr.set_port(port);
        self.listen = addr.to_string();
        Ok(())
    }
}

fn default_listen() -> String {
    "0.0.0.0:3000".into()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageKind {
    #[default]
    Memory,
    File,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StorageSection {
    #[serde(default)]
    pub kind: StorageKind,

    /// JSON table file, required for `kind: file`.
    #[serde(default)]
    pub path: Option<String>,
}

impl StorageSection {
    pub fn validate(&self) -> Result<()> {
        if self.kind == StorageKind::File && self.path.as_deref().map_or(true, str::is_empty) {
            return Err(TallyError::Config(
                "storage.path is required when storage.kind is file".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MetricsSection {
    /// Optional prefix: `<namespace>_http_requests_total`.
    #[serde(default)]
    pub namespace: String,
}
