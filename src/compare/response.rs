use crate::diff::classify::{DiffLine, LineRole, classify};
use crate::error::Rejection;
use crate::host::artifact_path::ArtifactPath;
use crate::host::run::RunRef;
use derive_new::new;
use std::io::{self, Write};

/// What one request produces: a rendered diff, a redirect, or the run
/// listing shown when no comparison was addressed.
#[derive(Debug, PartialEq, Eq)]
pub enum Response {
    Diff(DiffPayload),
    Redirect(String),
    Listing(RunListing),
}

/// Payload of the "pick a run" page: the anchor run plus the host's
/// noteworthy runs, already filtered.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct RunListing {
    anchor: RunRef,
    representatives: Vec<(String, RunRef)>,
}

impl RunListing {
    pub fn anchor(&self) -> RunRef {
        self.anchor
    }

    pub fn representatives(&self) -> &[(String, RunRef)] {
        &self.representatives
    }
}

/// A computed diff in one of the two rendering modes.
#[derive(Debug, PartialEq, Eq)]
pub enum DiffPayload {
    Plain(PlainDiff),
    Html(HtmlDiff),
}

impl DiffPayload {
    pub fn content_type(&self) -> &'static str {
        match self {
            DiffPayload::Plain(_) => "text/plain",
            DiffPayload::Html(_) => "text/html",
        }
    }
}

/// Plain-text rendering: the diff lines joined by newlines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlainDiff {
    body: String,
}

impl PlainDiff {
    pub(crate) fn new(lines: Vec<String>) -> Self {
        Self {
            body: lines.join("\n"),
        }
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Streams the body to the host's writer. A `NotFound` failure means
    /// the artifact vanished after the diff was computed; it maps to
    /// [`Rejection::FileNotFound`] so the host answers 404 with an html
    /// body instead of half a plain-text diff.
    pub fn write_to(&self, writer: &mut dyn Write) -> Result<(), Rejection> {
        writer
            .write_all(self.body.as_bytes())
            .map_err(|err| match err.kind() {
                io::ErrorKind::NotFound => Rejection::FileNotFound(err.to_string()),
                _ => Rejection::Internal(err.into()),
            })
    }
}

/// Html rendering payload: role-tagged lines plus everything the page
/// around the diff needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlDiff {
    lines: Vec<DiffLine>,
    lhs: RunRef,
    rhs: RunRef,
    candidates: Vec<RunRef>,
    path: ArtifactPath,
}

impl HtmlDiff {
    /// Tags every diff line with its role. The first two lines of a
    /// non-empty diff are always the `---`/`+++` pair and take their
    /// header roles by position; the rest go through the classifier.
    pub(crate) fn assemble(
        lines: Vec<String>,
        lhs: RunRef,
        rhs: RunRef,
        candidates: Vec<RunRef>,
        path: ArtifactPath,
    ) -> Result<Self, Rejection> {
        let lines = lines
            .into_iter()
            .enumerate()
            .map(|(index, text)| {
                let role = match index {
                    0 => LineRole::HeaderOld,
                    1 => LineRole::HeaderNew,
                    _ => classify(&text)?,
                };
                Ok(DiffLine::new(text, role))
            })
            .collect::<Result<Vec<_>, Rejection>>()?;

        Ok(Self {
            lines,
            lhs,
            rhs,
            candidates,
            path,
        })
    }

    pub fn lines(&self) -> &[DiffLine] {
        &self.lines
    }

    pub fn lhs(&self) -> RunRef {
        self.lhs
    }

    pub fn rhs(&self) -> RunRef {
        self.rhs
    }

    pub fn candidates(&self) -> &[RunRef] {
        &self.candidates
    }

    pub fn path(&self) -> &ArtifactPath {
        &self.path
    }
}
