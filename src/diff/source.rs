use crate::host::artifact_path::ArtifactPath;
use crate::host::job::JobHost;
use crate::host::run::RunRef;
use std::io::{self, Read};
use tracing::warn;

const NULL_PATH: &str = "/dev/null";

/// One side of a comparison: the artifact content of a (run, path) pair.
///
/// Content is read through the host exactly once, on first use, and kept
/// for the rest of the request. A file that cannot be opened or read is
/// not an error here; the side just counts as absent.
pub struct DiffSource<'h> {
    host: &'h dyn JobHost,
    run: RunRef,
    path: ArtifactPath,
    display: String,
    lines: Option<Vec<String>>,
    missing: bool,
}

impl<'h> DiffSource<'h> {
    /// `display` is the label shown in diff headers; `None` or an empty
    /// string falls back to the artifact's location under the run's root.
    pub fn new(
        host: &'h dyn JobHost,
        run: RunRef,
        path: ArtifactPath,
        display: Option<String>,
    ) -> Self {
        let display = match display {
            Some(label) if !label.is_empty() => label,
            _ => host
                .artifact_root(&run)
                .join(path.as_ref())
                .display()
                .to_string(),
        };

        Self {
            host,
            run,
            path,
            display,
            lines: None,
            missing: false,
        }
    }

    /// Lines of the artifact, empty when the side is absent.
    pub fn lines(&mut self) -> &[String] {
        if self.lines.is_none() {
            self.lines = Some(self.read());
        }

        self.lines.as_deref().unwrap_or_default()
    }

    /// Header label: `/dev/null` for an absent side, the display path
    /// otherwise. Forces the read so the answer stays in sync with
    /// [`lines`](Self::lines).
    pub fn label(&mut self) -> &str {
        self.lines();

        if self.missing { NULL_PATH } else { &self.display }
    }

    fn read(&mut self) -> Vec<String> {
        let mut stream = match self.host.open_artifact(&self.run, &self.path) {
            Ok(stream) => stream,
            Err(err) => {
                if err.kind() != io::ErrorKind::NotFound {
                    warn!("failed to open artifact {} of {}: {err}", self.path, self.run);
                }
                self.missing = true;
                return Vec::new();
            }
        };

        let mut bytes = Vec::new();
        if let Err(err) = stream.read_to_end(&mut bytes) {
            warn!("failed to read artifact {} of {}: {err}", self.path, self.run);
            self.missing = true;
            return Vec::new();
        }

        String::from_utf8_lossy(&bytes)
            .lines()
            .map(str::to_string)
            .collect()
    }
}
