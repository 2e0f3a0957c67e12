//! Comparison orchestration
//!
//! The entry point a host mounts under a run's page:
//!
//! - `candidates`: relevant-run and representative-run selection
//! - `request`: url parsing and validation
//! - `response`: the payload types a comparison produces

pub mod candidates;
pub mod request;
pub mod response;

use crate::compare::request::DiffRequest;
use crate::compare::response::{DiffPayload, HtmlDiff, PlainDiff, Response, RunListing};
use crate::diff::source::DiffSource;
use crate::diff::unified::unified_diff;
use crate::error::Rejection;
use crate::host::artifact_path::ArtifactPath;
use crate::host::job::JobHost;
use crate::host::run::RunRef;
use derive_new::new;
use std::collections::HashMap;

/// Path segment the host mounts this surface under.
pub const URL_NAME: &str = "artifact-diff";

pub(crate) const URL_PATTERN: &str = r"^/(\d+)/(.*)$";
pub(crate) const OUTPUT_PARAM: &str = "output";
pub(crate) const LHS_PARAM: &str = "lhs";
pub(crate) const RHS_PARAM: &str = "rhs";

const OUTPUT_MODES: phf::Map<&'static str, OutputMode> = phf::phf_map! {
    "plain" => OutputMode::Plain,
    "html" => OutputMode::Html,
};

/// Rendering mode of a diff response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Plain,
    Html,
}

impl OutputMode {
    /// Exact-match lookup of the `output` parameter; anything else,
    /// including no parameter at all, renders html.
    pub fn from_query(query: &Query) -> Self {
        query
            .get(OUTPUT_PARAM)
            .and_then(|value| OUTPUT_MODES.get(value))
            .copied()
            .unwrap_or(OutputMode::Html)
    }
}

/// Query parameters of one request, already url-decoded by the host.
#[derive(Debug, Clone, Default)]
pub struct Query(HashMap<String, String>);

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self(
            pairs
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }
}

/// Artifact comparison surface anchored at one run.
///
/// The anchor is the left-hand side of every comparison served here; the
/// right-hand run and the artifact path come from the request tail.
#[derive(new)]
pub struct ArtifactDiff<'h> {
    host: &'h dyn JobHost,
    anchor: RunRef,
}

impl<'h> ArtifactDiff<'h> {
    /// Serves one request under the comparison surface.
    ///
    /// An empty tail answers with the run listing; anything else is
    /// parsed as a comparison url and diffed.
    pub fn respond(&self, rest_of_path: &str, query: &Query) -> Result<Response, Rejection> {
        if rest_of_path.is_empty() {
            return Ok(Response::Listing(self.run_listing()));
        }

        let request = DiffRequest::parse(self.host, self.anchor, rest_of_path, query)?;
        self.compare(&request, query)
    }

    /// Runs a validated comparison to its terminal response.
    pub fn compare(&self, request: &DiffRequest, query: &Query) -> Result<Response, Rejection> {
        let mut lhs = self.source(request.lhs_run(), request.path());
        let mut rhs = self.source(request.rhs_run(), request.path());
        let lines = unified_diff(&mut lhs, &mut rhs);

        match request.mode() {
            OutputMode::Plain => Ok(Response::Diff(DiffPayload::Plain(PlainDiff::new(lines)))),
            OutputMode::Html => self.html_response(request, query, lines),
        }
    }

    fn run_listing(&self) -> RunListing {
        RunListing::new(
            self.anchor,
            candidates::representative_runs(self.host, &self.anchor),
        )
    }

    fn source(&self, run: RunRef, path: &ArtifactPath) -> DiffSource<'h> {
        let display = format!("{}/{}", run.number(), path);
        DiffSource::new(self.host, run, path.clone(), Some(display))
    }

    fn html_response(
        &self,
        request: &DiffRequest,
        query: &Query,
        lines: Vec<String>,
    ) -> Result<Response, Rejection> {
        // stale lhs/rhs overrides bounce to the canonical url before
        // anything is rendered
        if let Some(location) = self.redirect_target(request, query) {
            return Ok(Response::Redirect(location));
        }

        let candidates = candidates::relevant_runs(self.host, &request.rhs_run(), request.path())?;
        let html = HtmlDiff::assemble(
            lines,
            request.lhs_run(),
            request.rhs_run(),
            candidates,
            request.path().clone(),
        )?;

        Ok(Response::Diff(DiffPayload::Html(html)))
    }

    fn redirect_target(&self, request: &DiffRequest, query: &Query) -> Option<String> {
        let lhs = effective_number(query, LHS_PARAM, request.lhs_run());
        let rhs = effective_number(query, RHS_PARAM, request.rhs_run());

        let requested = diff_segment(request.lhs_run().number(), request.rhs_run().number());
        let effective = diff_segment(lhs, rhs);

        if requested == effective {
            return None;
        }

        Some(format!(
            "{}{}{}{}?output=html",
            self.host.root_url(),
            self.host.job_url(),
            effective,
            request.path(),
        ))
    }
}

/// Override parameters fall back to the path-derived run when absent or
/// non-numeric, never to an error.
fn effective_number(query: &Query, param: &str, fallback: RunRef) -> u32 {
    query
        .get(param)
        .and_then(|value| value.parse().ok())
        .unwrap_or_else(|| fallback.number())
}

fn diff_segment(lhs_number: u32, rhs_number: u32) -> String {
    format!("{lhs_number}/{URL_NAME}/{rhs_number}/")
}
