//! Remote share configuration.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which transport implementation serves the share.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShareProviderKind {
    /// Samba's `smbclient` tool.
    #[default]
    Smbclient,
    /// A local directory standing in for the share.
    Local,
}

impl fmt::Display for ShareProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Smbclient => write!(f, "smbclient"),
            Self::Local => write!(f, "local"),
        }
    }
}

/// Connection settings for the remote share.
///
/// Immutable after startup. Field aliases accept the legacy
/// `{share, path, domain, user, password}` layout.
#[derive(Clone, Serialize, Deserialize)]
pub struct ShareConfig {
    /// Transport implementation.
    #[serde(default)]
    pub provider: ShareProviderKind,
    /// Host and share name, e.g. `//fileserver.corp/Ocean`.
    #[serde(default = "default_root_address", alias = "share")]
    pub root_address: String,
    /// Path under the share root that all folders are relative to.
    #[serde(default, alias = "path")]
    pub base_path: String,
    /// Authentication domain.
    #[serde(default = "default_domain")]
    pub domain: String,
    /// Account name.
    #[serde(default = "default_username", alias = "user")]
    pub username: String,
    /// Account password.
    #[serde(default, alias = "password")]
    pub secret: String,
    /// SMB port on the remote host.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Name this client announces to the server.
    #[serde(default = "default_client_name")]
    pub client_name: String,
    /// Per-operation deadline handed to the transport.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
    /// Executable used by the `smbclient` provider.
    #[serde(default = "default_smbclient_binary")]
    pub smbclient_binary: String,
    /// Root directory used by the `local` provider.
    #[serde(default = "default_local_root")]
    pub local_root: String,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            provider: ShareProviderKind::default(),
            root_address: default_root_address(),
            base_path: String::new(),
            domain: default_domain(),
            username: default_username(),
            secret: String::new(),
            port: default_port(),
            client_name: default_client_name(),
            timeout_seconds: default_timeout(),
            smbclient_binary: default_smbclient_binary(),
            local_root: default_local_root(),
        }
    }
}

impl fmt::Debug for ShareConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShareConfig")
            .field("provider", &self.provider)
            .field("root_address", &self.root_address)
            .field("base_path", &self.base_path)
            .field("domain", &self.domain)
            .field("username", &self.username)
            .field("secret", &"<redacted>")
            .field("port", &self.port)
            .field("client_name", &self.client_name)
            .field("timeout_seconds", &self.timeout_seconds)
            .finish_non_exhaustive()
    }
}

fn default_root_address() -> String {
    "//localhost/share".to_string()
}

fn default_domain() -> String {
    "WORKGROUP".to_string()
}

fn default_username() -> String {
    "guest".to_string()
}

fn default_port() -> u16 {
    445
}

fn default_client_name() -> String {
    "sharegate".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_smbclient_binary() -> String {
    "smbclient".to_string()
}

fn default_local_root() -> String {
    "./data/shares".to_string()
}
