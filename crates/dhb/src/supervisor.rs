//! Keeps the polling loop and the liveness endpoint alive together.
//!
//! Neither task is expected to finish. If one does (Ok, Err or panic) the
//! other is aborted and the process exits with an error so the platform can
//! restart it.

use std::future::Future;

use anyhow::anyhow;
use tokio::task::{JoinError, JoinHandle};

type TaskResult = Result<anyhow::Result<()>, JoinError>;

pub async fn supervise(
    mut polling: JoinHandle<anyhow::Result<()>>,
    mut health: JoinHandle<anyhow::Result<()>>,
    shutdown: impl Future<Output = ()>,
) -> anyhow::Result<()> {
    let ended = tokio::select! {
        r = &mut polling => Some(("polling", r)),
        r = &mut health => Some(("health", r)),
        _ = shutdown => None,
    };

    polling.abort();
    health.abort();

    let Some((task, result)) = ended else {
        tracing::info!("shutdown requested");
        return Ok(());
    };

    let reason = describe(result);
    tracing::error!(task, reason = %reason, "task terminated, exiting");
    Err(anyhow!("{task} task terminated: {reason}"))
}

fn describe(result: TaskResult) -> String {
    match result {
        Ok(Ok(())) => "returned unexpectedly".to_string(),
        Ok(Err(e)) => format!("failed: {e:#}"),
        Err(e) if e.is_panic() => "panicked".to_string(),
        Err(e) => format!("aborted: {e}"),
    }
}
