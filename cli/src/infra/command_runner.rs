//! Infrastructure implementation of the `CommandRunner` port.
//!
//! `TokioCommandRunner` is the production implementation that uses tokio
//! for async process execution with guaranteed timeout and kill on all
//! platforms.

use std::io::Write as _;
use std::process::{Output, Stdio};
use std::time::Duration;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, AsyncReadExt, BufReader};

use crate::application::ports::{CapturedRun, CommandRunner};

/// Default timeout for short gcloud invocations (token, project describe).
pub const DEFAULT_CMD_TIMEOUT: Duration = Duration::from_secs(60);

/// Timeout for the streamed deploy invocation. Agent Engine deployments
/// routinely take several minutes.
pub const DEPLOY_TIMEOUT: Duration = Duration::from_secs(1800);

/// Production `CommandRunner` — uses tokio for async process execution
/// with guaranteed timeout and kill on all platforms.
///
/// On Windows, `tokio::time::timeout` around `.output().await` does NOT kill
/// the child process when the timeout fires — the future is dropped but the
/// OS process keeps running. This implementation uses `tokio::select!` with
/// explicit `child.kill()` to guarantee the process is terminated.
pub struct TokioCommandRunner {
    timeout: Duration,
    streaming_timeout: Duration,
}

impl TokioCommandRunner {
    #[must_use]
    pub fn new(timeout: Duration, streaming_timeout: Duration) -> Self {
        Self {
            timeout,
            streaming_timeout,
        }
    }
}

impl Default for TokioCommandRunner {
    fn default() -> Self {
        Self::new(DEFAULT_CMD_TIMEOUT, DEPLOY_TIMEOUT)
    }
}

impl CommandRunner for TokioCommandRunner {
    async fn run(&self, program: &str, args: &[&str]) -> Result<Output> {
        let mut child = tokio::process::Command::new(program)
            .args(args)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .with_context(|| format!("failed to spawn {program}"))?;

        let mut stdout_handle = child.stdout.take();
        let mut stderr_handle = child.stderr.take();

        tokio::select! {
            result = async {
                let (status, stdout, stderr) = tokio::join!(
                    child.wait(),
                    async {
                        let mut buf = Vec::new();
                        if let Some(ref mut h) = stdout_handle {
                            let _ = h.read_to_end(&mut buf).await;
                        }
                        buf
                    },
                    async {
                        let mut buf = Vec::new();
                        if let Some(ref mut h) = stderr_handle {
                            let _ = h.read_to_end(&mut buf).await;
                        }
                        buf
                    },
                );
                Ok(Output {
                    status: status.with_context(|| format!("waiting for {program}"))?,
                    stdout,
                    stderr,
                })
            } => result,
            () = tokio::time::sleep(self.timeout) => {
                let _ = child.kill().await;
                anyhow::bail!("{program} timed out after {}s", self.timeout.as_secs())
            }
        }
    }

    async fn run_streaming(&self, program: &str, args: &[&str]) -> Result<CapturedRun> {
        let mut child = tokio::process::Command::new(program)
            .args(args)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .with_context(|| format!("failed to spawn {program}"))?;

        // Combined output is mirrored into a temp file while streaming.
        // `tempfile()` unlinks the file at creation, so the OS reclaims it
        // when the process exits for any reason, signals included.
        let mut capture = tempfile::tempfile().context("creating capture file")?;

        let stdout = child.stdout.take();
        let stderr = child.stderr.take();
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel::<String>();

        let tx_out = tx.clone();
        let stdout_task = tokio::spawn(async move {
            if let Some(h) = stdout {
                let mut lines = BufReader::new(h).lines();
                while let Ok(Some(line)) = lines.next_line().await {
                    if tx_out.send(line).is_err() {
                        break;
                    }
                }
            }
        });
        let stderr_task = tokio::spawn(async move {
            if let Some(h) = stderr {
                let mut lines = BufReader::new(h).lines();
                while let Ok(Some(line)) = lines.next_line().await {
                    if tx.send(line).is_err() {
                        break;
                    }
                }
            }
        });

        tokio::select! {
            result = async {
                let (status, transcript) = tokio::join!(
                    async {
                        let status = child.wait().await;
                        // Both sender halves drop when the reader tasks end,
                        // which closes the channel and finishes the drain.
                        let _ = stdout_task.await;
                        let _ = stderr_task.await;
                        status
                    },
                    async {
                        let mut transcript = String::new();
                        while let Some(line) = rx.recv().await {
                            println!("{line}");
                            let _ = writeln!(capture, "{line}");
                            transcript.push_str(&line);
                            transcript.push('\n');
                        }
                        transcript
                    },
                );
                let status = status.with_context(|| format!("waiting for {program}"))?;
                Ok(CapturedRun {
                    exit_code: status.code().unwrap_or(-1),
                    transcript,
                })
            } => result,
            () = tokio::time::sleep(self.streaming_timeout) => {
                let _ = child.kill().await;
                anyhow::bail!("{program} timed out after {}s", self.streaming_timeout.as_secs())
            }
        }
    }
}
