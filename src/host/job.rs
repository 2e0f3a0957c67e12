use crate::host::artifact_path::ArtifactPath;
use crate::host::run::RunRef;
use std::io::{self, Read};
use std::path::PathBuf;

/// The narrow slice of the host build system a comparison depends on.
///
/// One value models the job, the parent collection all compared runs
/// belong to. Run storage, run classification and URL layout stay on the
/// host side of this trait; the crate never reaches for global state.
pub trait JobHost {
    /// Resolves an ordinal run number within this job.
    fn run_by_number(&self, number: u32) -> Option<RunRef>;

    /// Full run history, in the host's own order.
    fn run_history(&self) -> Vec<RunRef>;

    /// Canonical artifact root directory of one run.
    fn artifact_root(&self, run: &RunRef) -> PathBuf;

    /// Absolute paths of every artifact the run has recorded, each of
    /// which must live under that run's [`artifact_root`](Self::artifact_root).
    fn list_artifacts(&self, run: &RunRef) -> anyhow::Result<Vec<PathBuf>>;

    /// Opens one artifact for reading. `ErrorKind::NotFound` means the run
    /// never produced a file at that path.
    fn open_artifact(&self, run: &RunRef, path: &ArtifactPath) -> io::Result<Box<dyn Read>>;

    /// Base URL of the host, with a trailing slash.
    fn root_url(&self) -> String;

    /// URL of this job relative to the host root, with a trailing slash.
    fn job_url(&self) -> String;

    /// The host's own notion of noteworthy runs ("last stable" and the
    /// like): each label paired with the run currently holding it, if any.
    fn representative_runs(&self) -> Vec<(String, Option<RunRef>)>;
}
