//! Connector selection from configuration.

use std::sync::Arc;

use sharegate_core::config::{ShareConfig, ShareProviderKind};
use sharegate_core::result::AppResult;
use sharegate_core::traits::ShareConnector;

use crate::providers::{LocalShareConnector, SmbClientConnector};

/// Build the connector selected by `config.provider`.
pub async fn connector_for(config: &ShareConfig) -> AppResult<Arc<dyn ShareConnector>> {
    let connector: Arc<dyn ShareConnector> = match config.provider {
        ShareProviderKind::Smbclient => Arc::new(SmbClientConnector::new(
            &config.smbclient_binary,
            config.timeout_seconds,
        )),
        ShareProviderKind::Local => Arc::new(LocalShareConnector::new(&config.local_root).await?),
    };

    tracing::info!(
        provider = connector.provider_type(),
        share = %config.root_address,
        "Share connector initialized"
    );
    Ok(connector)
}
