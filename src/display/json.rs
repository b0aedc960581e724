use serde::Serialize;

use crate::error::AppError;
use crate::widget::Snapshot;

#[derive(Serialize)]
struct SnapshotOutput<'a> {
    #[serde(flatten)]
    snapshot: &'a Snapshot,
    title: &'a str,
    header: &'a str,
}

/// One render as a single JSON object
pub(crate) fn snapshot_json(snapshot: &Snapshot, title: &str, header: &str) -> Result<String, AppError> {
    let output = SnapshotOutput {
        snapshot,
        title,
        header,
    };
    Ok(serde_json::to_string(&output)?)
}
