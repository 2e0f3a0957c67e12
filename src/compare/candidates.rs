use crate::error::Rejection;
use crate::host::artifact_path::ArtifactPath;
use crate::host::job::JobHost;
use crate::host::run::RunRef;
use std::path::Path;

/// Runs worth offering for comparison against `target`: every sibling
/// that recorded an artifact at `path`, plus `target` itself, in the
/// host's history order.
pub fn relevant_runs(
    host: &dyn JobHost,
    target: &RunRef,
    path: &ArtifactPath,
) -> Result<Vec<RunRef>, Rejection> {
    let mut relevant = Vec::new();

    for run in host.run_history() {
        if has_artifact(host, &run, path)? || run == *target {
            relevant.push(run);
        }
    }

    Ok(relevant)
}

fn has_artifact(host: &dyn JobHost, run: &RunRef, path: &ArtifactPath) -> Result<bool, Rejection> {
    // each run is relativized against its own root, never a shared one
    let root = host.artifact_root(run);

    for recorded in host.list_artifacts(run)? {
        let relative = recorded.strip_prefix(&root).map_err(|_| {
            Rejection::InvariantViolation(format!(
                "artifact {} of run {} escapes its root {}",
                recorded.display(),
                run,
                root.display(),
            ))
        })?;

        if relative == Path::new(path.as_ref()) {
            return Ok(true);
        }
    }

    Ok(false)
}

/// The host's noteworthy runs with empty categories and the anchor run
/// filtered out; pair order stays the host's.
pub fn representative_runs(host: &dyn JobHost, anchor: &RunRef) -> Vec<(String, RunRef)> {
    host.representative_runs()
        .into_iter()
        .filter_map(|(label, run)| run.map(|run| (label, run)))
        .filter(|(_, run)| run != anchor)
        .collect()
}
