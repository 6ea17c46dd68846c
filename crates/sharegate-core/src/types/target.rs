//! Resolved connection target for one share.

use std::fmt;

use crate::config::ShareConfig;
use crate::path::{bare_host_name, parse_share_address};
use crate::result::AppResult;

/// Everything a transport needs to authenticate against the share.
#[derive(Clone)]
pub struct ShareTarget {
    /// Host name or address to connect to.
    pub host: String,
    /// Host portion before the first `.`, announced as the remote machine name.
    pub machine_name: String,
    /// Share name on the host.
    pub share_name: String,
    /// TCP port.
    pub port: u16,
    /// Authentication domain.
    pub domain: String,
    /// Account name.
    pub username: String,
    /// Account password.
    pub secret: String,
    /// Name this client announces.
    pub client_name: String,
}

impl ShareTarget {
    /// Derive the target from configuration, validating the share address.
    pub fn from_config(config: &ShareConfig) -> AppResult<Self> {
        let (host, share_name) = parse_share_address(&config.root_address)?;
        Ok(Self {
            machine_name: bare_host_name(&host).to_string(),
            host,
            share_name,
            port: config.port,
            domain: config.domain.clone(),
            username: config.username.clone(),
            secret: config.secret.clone(),
            client_name: config.client_name.clone(),
        })
    }

    /// `//host/share` form for log output.
    pub fn unc(&self) -> String {
        format!("//{}/{}", self.host, self.share_name)
    }
}

impl fmt::Debug for ShareTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShareTarget")
            .field("host", &self.host)
            .field("machine_name", &self.machine_name)
            .field("share_name", &self.share_name)
            .field("port", &self.port)
            .field("domain", &self.domain)
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}
