//! SMB/CIFS share provider driven by Samba's `smbclient` tool.
//!
//! Every share operation runs one `smbclient -c "<command>"` invocation
//! against `//<machine>/<share>` at the configured host and port. The
//! password travels in the `PASSWD` environment variable, never in argv.
//! File content is staged through temporary files that are removed on drop.

use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::sync::LazyLock;
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use chrono::{DateTime, NaiveDateTime, Utc};
use regex::Regex;
use tokio::process::Command;
use tracing::{debug, warn};
use uuid::Uuid;

use sharegate_core::error::{AppError, ErrorKind};
use sharegate_core::result::AppResult;
use sharegate_core::traits::{ShareConnection, ShareConnector};
use sharegate_core::types::{RemoteEntry, ShareTarget};

/// Slack added on top of the tool's own timeout before the process is killed.
const DEADLINE_SLACK: Duration = Duration::from_secs(5);

static LISTING_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^  (?P<name>.+?)\s+(?P<attrs>[A-Z]*)\s+(?P<size>\d+)\s+(?P<date>[A-Z][a-z]{2} [A-Z][a-z]{2} +\d{1,2} \d{2}:\d{2}:\d{2} \d{4})$",
    )
    .expect("listing pattern is valid")
});

static NT_STATUS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"NT_STATUS_[A-Z_]+").expect("status pattern is valid"));

/// Connector spawning `smbclient` for each operation.
#[derive(Debug, Clone)]
pub struct SmbClientConnector {
    binary: String,
    timeout_seconds: u64,
}

impl SmbClientConnector {
    /// Create a connector using the given executable and per-operation timeout.
    pub fn new(binary: &str, timeout_seconds: u64) -> Self {
        Self {
            binary: binary.to_string(),
            timeout_seconds,
        }
    }
}

#[async_trait]
impl ShareConnector for SmbClientConnector {
    fn provider_type(&self) -> &str {
        "smbclient"
    }

    async fn connect(&self, target: &ShareTarget) -> AppResult<Box<dyn ShareConnection>> {
        let connection = SmbClientConnection {
            target: target.clone(),
            binary: self.binary.clone(),
            timeout_seconds: self.timeout_seconds,
            closed: false,
        };

        // Probe once so unreachable hosts and bad credentials fail at open.
        connection
            .run("pwd", ErrorKind::Connection)
            .await
            .map_err(|e| match e.kind {
                ErrorKind::Authentication | ErrorKind::Connection => e,
                _ => AppError::connection(format!(
                    "Failed to connect to share {}: {}",
                    target.unc(),
                    e.message
                )),
            })?;

        Ok(Box::new(connection))
    }
}

/// One authenticated session context against a share.
pub struct SmbClientConnection {
    target: ShareTarget,
    binary: String,
    timeout_seconds: u64,
    closed: bool,
}

impl SmbClientConnection {
    /// Run one `smbclient` command, returning its stdout.
    ///
    /// `fallback` is the error kind used when the failure carries no status
    /// code that identifies a more specific cause.
    async fn run(&self, command: &str, fallback: ErrorKind) -> AppResult<String> {
        if self.closed {
            return Err(AppError::connection("Share session already closed"));
        }

        let mut cmd = Command::new(&self.binary);
        cmd.arg(format!(
            "//{}/{}",
            self.target.machine_name, self.target.share_name
        ))
        .arg("-I")
        .arg(&self.target.host)
        .arg("-p")
        .arg(self.target.port.to_string())
        .arg("-W")
        .arg(&self.target.domain)
        .arg("-U")
        .arg(&self.target.username)
        .arg("-n")
        .arg(&self.target.client_name)
        .arg("-t")
        .arg(self.timeout_seconds.to_string())
        .arg("-c")
        .arg(command)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

        if self.target.secret.is_empty() {
            cmd.arg("-N");
        } else {
            cmd.env("PASSWD", &self.target.secret);
        }

        let deadline = Duration::from_secs(self.timeout_seconds) + DEADLINE_SLACK;
        let output = tokio::time::timeout(deadline, cmd.output())
            .await
            .map_err(|_| {
                AppError::connection(format!(
                    "smbclient timed out after {}s on {}",
                    deadline.as_secs(),
                    self.target.unc()
                ))
            })?
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Connection,
                    format!("Failed to launch {}: {e}", self.binary),
                    e,
                )
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if output.status.success() && !reports_status(&stdout) && !reports_status(&stderr) {
            return Ok(stdout);
        }

        let combined = format!("{stderr}\n{stdout}");
        let kind = classify_failure(&combined).unwrap_or(fallback);
        let message = first_line(&combined)
            .unwrap_or_else(|| format!("smbclient exited with {}", output.status));

        debug!(command, %kind, error = %message, "smbclient command failed");
        Err(AppError::new(kind, message))
    }
}

#[async_trait]
impl ShareConnection for SmbClientConnection {
    async fn list(&self, path: &str) -> AppResult<Vec<RemoteEntry>> {
        let remote = to_share_path(path)?;
        let command = if remote.is_empty() {
            "ls".to_string()
        } else {
            format!("ls \"{remote}\\*\"")
        };
        let stdout = self.run(&command, ErrorKind::Listing).await?;
        Ok(parse_listing(&stdout))
    }

    async fn create_dir(&self, path: &str) -> AppResult<()> {
        let remote = to_share_path(path)?;
        self.run(&format!("mkdir \"{remote}\""), ErrorKind::Transfer)
            .await?;
        Ok(())
    }

    async fn store(&self, path: &str, data: Bytes) -> AppResult<()> {
        let remote = to_share_path(path)?;
        let staging = StagingFile::new();
        tokio::fs::write(staging.path(), &data).await?;

        let local = staging.command_path()?;
        self.run(&format!("put \"{local}\" \"{remote}\""), ErrorKind::Transfer)
            .await?;
        Ok(())
    }

    async fn retrieve(&self, path: &str) -> AppResult<Bytes> {
        let remote = to_share_path(path)?;
        let staging = StagingFile::new();

        let local = staging.command_path()?;
        self.run(&format!("get \"{remote}\" \"{local}\""), ErrorKind::Transfer)
            .await?;

        let data = tokio::fs::read(staging.path()).await?;
        Ok(Bytes::from(data))
    }

    async fn delete(&self, path: &str) -> AppResult<()> {
        let remote = to_share_path(path)?;
        self.run(&format!("del \"{remote}\""), ErrorKind::Transfer)
            .await?;
        Ok(())
    }

    fn close(&mut self) {
        self.closed = true;
    }
}

/// Temporary local file removed on drop.
struct StagingFile {
    path: PathBuf,
}

impl StagingFile {
    fn new() -> Self {
        let path = std::env::temp_dir().join(format!("sharegate-{}.part", Uuid::new_v4()));
        Self { path }
    }

    fn path(&self) -> &Path {
        &self.path
    }

    /// The path as it must appear inside an smbclient command.
    fn command_path(&self) -> AppResult<String> {
        let text = self.path.to_string_lossy().into_owned();
        ensure_command_safe(&text)?;
        Ok(text)
    }
}

impl Drop for StagingFile {
    fn drop(&mut self) {
        if let Err(err) = std::fs::remove_file(&self.path) {
            if err.kind() != std::io::ErrorKind::NotFound {
                warn!(path = %self.path.display(), error = %err, "failed to remove staging file");
            }
        }
    }
}

fn ensure_command_safe(text: &str) -> AppResult<()> {
    if text.contains(['"', ';', '\n', '\r']) {
        return Err(AppError::validation(format!(
            "Unsupported character in path: {text}"
        )));
    }
    Ok(())
}

/// Convert a share-relative path into smbclient's backslash form.
fn to_share_path(path: &str) -> AppResult<String> {
    ensure_command_safe(path)?;
    Ok(path.replace('/', "\\").trim_matches('\\').to_string())
}

fn reports_status(output: &str) -> bool {
    output
        .lines()
        .any(|line| line.starts_with("NT_STATUS_"))
}

/// Map the first `NT_STATUS_*` code in the output to an error kind.
fn classify_failure(output: &str) -> Option<ErrorKind> {
    let code = NT_STATUS.find(output)?.as_str();
    let kind = match code {
        "NT_STATUS_LOGON_FAILURE"
        | "NT_STATUS_WRONG_PASSWORD"
        | "NT_STATUS_ACCOUNT_DISABLED"
        | "NT_STATUS_ACCOUNT_LOCKED_OUT"
        | "NT_STATUS_PASSWORD_EXPIRED"
        | "NT_STATUS_NO_SUCH_USER" => ErrorKind::Authentication,
        "NT_STATUS_OBJECT_NAME_NOT_FOUND"
        | "NT_STATUS_OBJECT_PATH_NOT_FOUND"
        | "NT_STATUS_NO_SUCH_FILE"
        | "NT_STATUS_NOT_FOUND" => ErrorKind::NotFound,
        "NT_STATUS_CONNECTION_REFUSED"
        | "NT_STATUS_HOST_UNREACHABLE"
        | "NT_STATUS_NETWORK_UNREACHABLE"
        | "NT_STATUS_IO_TIMEOUT"
        | "NT_STATUS_BAD_NETWORK_NAME"
        | "NT_STATUS_CONNECTION_RESET"
        | "NT_STATUS_CONNECTION_DISCONNECTED" => ErrorKind::Connection,
        _ => return None,
    };
    Some(kind)
}

fn first_line(output: &str) -> Option<String> {
    output
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(str::to_string)
}

/// Parse the entry lines of an `ls` listing.
fn parse_listing(stdout: &str) -> Vec<RemoteEntry> {
    stdout
        .lines()
        .filter_map(|line| {
            let caps = LISTING_LINE.captures(line.trim_end())?;
            let date = caps["date"].split_whitespace().collect::<Vec<_>>().join(" ");
            let modified_at = NaiveDateTime::parse_from_str(&date, "%a %b %d %H:%M:%S %Y")
                .map(|naive| naive.and_utc())
                .unwrap_or_else(|_| DateTime::<Utc>::default());

            Some(RemoteEntry {
                name: caps["name"].to_string(),
                is_directory: caps["attrs"].contains('D'),
                size_bytes: caps["size"].parse().unwrap_or(0),
                modified_at,
            })
        })
        .collect()
}
