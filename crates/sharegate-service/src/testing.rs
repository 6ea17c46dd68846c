//! Fault-injecting share connector for service tests.

use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use bytes::Bytes;

use sharegate_core::config::{ShareConfig, ShareProviderKind};
use sharegate_core::error::AppError;
use sharegate_core::result::AppResult;
use sharegate_core::traits::{ShareConnection, ShareConnector};
use sharegate_core::types::{RemoteEntry, ShareTarget};
use sharegate_storage::providers::LocalShareConnector;

/// Which steps fail.
#[derive(Debug, Clone, Default)]
pub struct Faults {
    pub connect: bool,
    pub list: bool,
    pub create_dir: bool,
    /// Stores fail for paths ending with any of these.
    pub store: Vec<&'static str>,
    pub retrieve: bool,
    pub delete: bool,
}

#[derive(Debug, Default)]
pub struct FaultState {
    pub opens: AtomicUsize,
    pub closes: AtomicUsize,
}

#[derive(Debug)]
pub struct FaultyConnector {
    inner: LocalShareConnector,
    faults: Faults,
    state: Arc<FaultState>,
}

struct FaultyConnection {
    inner: Box<dyn ShareConnection>,
    faults: Faults,
    state: Arc<FaultState>,
}

#[async_trait]
impl ShareConnector for FaultyConnector {
    fn provider_type(&self) -> &str {
        "faulty"
    }

    async fn connect(&self, target: &ShareTarget) -> AppResult<Box<dyn ShareConnection>> {
        if self.faults.connect {
            return Err(AppError::connection("injected connect failure"));
        }
        let inner = self.inner.connect(target).await?;
        self.state.opens.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(FaultyConnection {
            inner,
            faults: self.faults.clone(),
            state: Arc::clone(&self.state),
        }))
    }
}

#[async_trait]
impl ShareConnection for FaultyConnection {
    async fn list(&self, path: &str) -> AppResult<Vec<RemoteEntry>> {
        if self.faults.list {
            return Err(AppError::listing("injected list failure"));
        }
        self.inner.list(path).await
    }

    async fn create_dir(&self, path: &str) -> AppResult<()> {
        if self.faults.create_dir {
            return Err(AppError::transfer("injected create failure"));
        }
        self.inner.create_dir(path).await
    }

    async fn store(&self, path: &str, data: Bytes) -> AppResult<()> {
        if self.faults.store.iter().any(|suffix| path.ends_with(suffix)) {
            return Err(AppError::transfer("injected store failure"));
        }
        self.inner.store(path, data).await
    }

    async fn retrieve(&self, path: &str) -> AppResult<Bytes> {
        if self.faults.retrieve {
            return Err(AppError::transfer("injected retrieve failure"));
        }
        self.inner.retrieve(path).await
    }

    async fn delete(&self, path: &str) -> AppResult<()> {
        if self.faults.delete {
            return Err(AppError::transfer("injected delete failure"));
        }
        self.inner.delete(path).await
    }

    fn close(&mut self) {
        self.state.closes.fetch_add(1, Ordering::SeqCst);
        self.inner.close();
    }
}

/// Temporary local share with base path `Inbox/Features`.
pub struct Fixture {
    pub dir: tempfile::TempDir,
    pub state: Arc<FaultState>,
    connector: Arc<FaultyConnector>,
    config: Arc<ShareConfig>,
}

impl Fixture {
    pub async fn new(faults: Faults) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let config = ShareConfig {
            provider: ShareProviderKind::Local,
            root_address: "//nas.test.local/Ocean".to_string(),
            base_path: "/Inbox/Features/".to_string(),
            local_root: dir.path().to_str().unwrap().to_string(),
            ..ShareConfig::default()
        };
        std::fs::create_dir_all(dir.path().join("Ocean/Inbox/Features")).unwrap();

        let state = Arc::new(FaultState::default());
        let connector = Arc::new(FaultyConnector {
            inner: LocalShareConnector::new(&config.local_root).await.unwrap(),
            faults,
            state: Arc::clone(&state),
        });

        Self {
            dir,
            state,
            connector,
            config: Arc::new(config),
        }
    }

    pub fn connector(&self) -> Arc<dyn ShareConnector> {
        self.connector.clone()
    }

    pub fn config(&self) -> Arc<ShareConfig> {
        Arc::clone(&self.config)
    }

    /// Absolute local path of a base-relative path.
    pub fn base(&self, relative: &str) -> PathBuf {
        self.dir.path().join("Ocean/Inbox/Features").join(relative)
    }

    pub fn mkdir(&self, relative: &str) {
        std::fs::create_dir_all(self.base(relative)).unwrap();
    }

    pub fn write(&self, relative: &str, content: &[u8]) {
        std::fs::write(self.base(relative), content).unwrap();
    }

    pub fn opens(&self) -> usize {
        self.state.opens.load(Ordering::SeqCst)
    }

    pub fn closes(&self) -> usize {
        self.state.closes.load(Ordering::SeqCst)
    }
}
