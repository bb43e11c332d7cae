//! The scripted list/create/delete smoke test.

use serde::Serialize;
use std::time::Duration;
use thiserror::Error;

use crate::catalog::{LaserDisc, NewLaserDisc, RotationType, VideoFormat};
use crate::http::MessageBody;
use crate::selftest::client::CatalogClient;

/// Why the sequence stopped.
#[derive(Debug, Error)]
pub enum SelfTestError {
    /// Connection failure, non-2xx status or undecodable body.
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered, but not with what the sequence expects.
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Everything observed during one run.
#[derive(Debug, Clone, Serialize)]
pub struct SelfTestReport {
    pub initial: Vec<LaserDisc>,
    pub created: LaserDisc,
    pub after_create: Vec<LaserDisc>,
    pub deleted: MessageBody,
    pub after_delete: Vec<LaserDisc>,
}

/// The record the sequence creates and then deletes.
pub fn sample_disc() -> NewLaserDisc {
    NewLaserDisc {
        film_name: "Jurassic Park".to_string(),
        rotation_type: RotationType::Cav,
        region: "US".to_string(),
        length_minutes: 127,
        video_format: VideoFormat::Ntsc,
    }
}

fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| format!("<unserializable: {}>", e))
}

fn contains_id(discs: &[LaserDisc], id: u64) -> bool {
    discs.iter().any(|d| d.id == id)
}

/// Wait `delay`, then list, create, list, delete, list against `client`.
///
/// Calls are strictly sequential. The first failure ends the run.
pub async fn run_self_test(
    client: &CatalogClient,
    delay: Duration,
) -> Result<SelfTestReport, SelfTestError> {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }

    let initial = client.list().await?;
    tracing::info!(count = initial.len(), discs = %to_json(&initial), "Lista inicial");

    let created = client.create(&sample_disc()).await?;
    tracing::info!(disc = %to_json(&created), "Creado");
    if contains_id(&initial, created.id) {
        return Err(SelfTestError::Unexpected(format!(
            "created id {} was already in use",
            created.id
        )));
    }

    let after_create = client.list().await?;
    tracing::info!(count = after_create.len(), discs = %to_json(&after_create), "Lista tras crear");
    if !contains_id(&after_create, created.id) {
        return Err(SelfTestError::Unexpected(format!(
            "created id {} missing from listing",
            created.id
        )));
    }
    if after_create.len() != initial.len() + 1 {
        return Err(SelfTestError::Unexpected(format!(
            "expected {} records after create, found {}",
            initial.len() + 1,
            after_create.len()
        )));
    }

    let deleted = client.delete(created.id).await?;
    tracing::info!(id = created.id, message = %deleted.message, "Eliminado");

    let after_delete = client.list().await?;
    tracing::info!(count = after_delete.len(), discs = %to_json(&after_delete), "Lista final");
    if contains_id(&after_delete, created.id) {
        return Err(SelfTestError::Unexpected(format!(
            "deleted id {} still listed",
            created.id
        )));
    }
    if after_delete != initial {
        return Err(SelfTestError::Unexpected(format!(
            "listing after delete differs from the initial one ({} records, expected {})",
            after_delete.len(),
            initial.len()
        )));
    }

    Ok(SelfTestReport {
        initial,
        created,
        after_create,
        deleted,
        after_delete,
    })
}

/// Run the sequence and log the outcome. Never fails; the caller has nobody
/// to report to.
pub async fn run_and_log(client: CatalogClient, delay: Duration) {
    tracing::info!(base_url = %client.base_url(), delay_ms = delay.as_millis() as u64, "Self-test scheduled");
    match run_self_test(&client, delay).await {
        Ok(report) => tracing::info!(
            created_id = report.created.id,
            final_count = report.after_delete.len(),
            "Self-test completed"
        ),
        Err(e @ SelfTestError::Transport(_)) => tracing::error!(error = %e, "Self-test failed (transport)"),
        Err(e) => tracing::error!(error = %e, "Self-test failed"),
    }
}
