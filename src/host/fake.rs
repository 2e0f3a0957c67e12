use crate::host::artifact_path::ArtifactPath;
use crate::host::job::JobHost;
use crate::host::run::RunRef;
use std::cell::RefCell;
use std::collections::HashMap;
use std::io::{self, Cursor, Read};
use std::path::PathBuf;

/// In-memory [`JobHost`] for unit tests.
///
/// Runs are registered newest first, matching the history order a real
/// host reports. Every stream handed out is counted, which is what the
/// read-once tests assert on.
#[derive(Debug, Default)]
pub(crate) struct FakeJob {
    history: Vec<u32>,
    artifacts: HashMap<u32, Vec<FakeArtifact>>,
    stray_artifacts: HashMap<u32, Vec<PathBuf>>,
    representatives: Vec<(String, Option<u32>)>,
    opens: RefCell<usize>,
}

#[derive(Debug)]
struct FakeArtifact {
    path: String,
    // None makes reads fail with a non-NotFound error
    content: Option<String>,
}

impl FakeJob {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Registers a run at the front of the history (newest first).
    pub(crate) fn add_run(&mut self, number: u32) -> RunRef {
        self.history.insert(0, number);
        RunRef::new(number)
    }

    pub(crate) fn add_artifact(&mut self, number: u32, path: &str, content: &str) {
        self.artifacts
            .entry(number)
            .or_default()
            .push(FakeArtifact {
                path: path.to_string(),
                content: Some(content.to_string()),
            });
    }

    pub(crate) fn add_unreadable_artifact(&mut self, number: u32, path: &str) {
        self.artifacts
            .entry(number)
            .or_default()
            .push(FakeArtifact {
                path: path.to_string(),
                content: None,
            });
    }

    /// Records an artifact path outside the run's own root, which no
    /// well-behaved host ever reports.
    pub(crate) fn add_stray_artifact(&mut self, number: u32, absolute: &str) {
        self.stray_artifacts
            .entry(number)
            .or_default()
            .push(PathBuf::from(absolute));
    }

    pub(crate) fn add_representative(&mut self, label: &str, number: Option<u32>) {
        self.representatives.push((label.to_string(), number));
    }

    pub(crate) fn opens(&self) -> usize {
        *self.opens.borrow()
    }
}

impl JobHost for FakeJob {
    fn run_by_number(&self, number: u32) -> Option<RunRef> {
        self.history.contains(&number).then(|| RunRef::new(number))
    }

    fn run_history(&self) -> Vec<RunRef> {
        self.history.iter().copied().map(RunRef::new).collect()
    }

    fn artifact_root(&self, run: &RunRef) -> PathBuf {
        PathBuf::from(format!("/var/lib/ci/runs/{}/archive", run.number()))
    }

    fn list_artifacts(&self, run: &RunRef) -> anyhow::Result<Vec<PathBuf>> {
        let root = self.artifact_root(run);
        let mut paths: Vec<PathBuf> = self
            .artifacts
            .get(&run.number())
            .map(|artifacts| {
                artifacts
                    .iter()
                    .map(|artifact| root.join(&artifact.path))
                    .collect()
            })
            .unwrap_or_default();

        if let Some(stray) = self.stray_artifacts.get(&run.number()) {
            paths.extend(stray.iter().cloned());
        }

        Ok(paths)
    }

    fn open_artifact(&self, run: &RunRef, path: &ArtifactPath) -> io::Result<Box<dyn Read>> {
        *self.opens.borrow_mut() += 1;

        let artifact = self
            .artifacts
            .get(&run.number())
            .and_then(|artifacts| {
                artifacts
                    .iter()
                    .find(|artifact| artifact.path == path.as_ref())
            })
            .ok_or_else(|| {
                io::Error::new(io::ErrorKind::NotFound, format!("no artifact {path}"))
            })?;

        match &artifact.content {
            Some(content) => Ok(Box::new(Cursor::new(content.clone().into_bytes()))),
            None => Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "artifact unreadable",
            )),
        }
    }

    fn root_url(&self) -> String {
        "http://ci.example.com/".to_string()
    }

    fn job_url(&self) -> String {
        "job/nightly/".to_string()
    }

    fn representative_runs(&self) -> Vec<(String, Option<RunRef>)> {
        self.representatives
            .iter()
            .map(|(label, number)| (label.clone(), number.map(RunRef::new)))
            .collect()
    }
}
