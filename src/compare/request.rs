use crate::compare::{OutputMode, Query, URL_PATTERN};
use crate::error::Rejection;
use crate::host::artifact_path::ArtifactPath;
use crate::host::job::JobHost;
use crate::host::run::RunRef;
use anyhow::Context;

/// A validated comparison: both runs resolved, path checked, output mode
/// fixed.
///
/// Only constructible through [`DiffRequest::parse`], so an invalid
/// combination never exists as a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffRequest {
    lhs_run: RunRef,
    rhs_run: RunRef,
    path: ArtifactPath,
    mode: OutputMode,
}

impl DiffRequest {
    /// Parses a `/<rhs run number>/<artifact path>` tail against the
    /// anchor run the comparison hangs off.
    pub fn parse(
        host: &dyn JobHost,
        anchor: RunRef,
        rest_of_path: &str,
        query: &Query,
    ) -> Result<Self, Rejection> {
        let pattern = regex::Regex::new(URL_PATTERN)
            .with_context(|| format!("invalid comparison url regex: {URL_PATTERN}"))?;

        let captures = pattern
            .captures(rest_of_path)
            .ok_or(Rejection::MalformedRequest)?;

        let path = ArtifactPath::try_parse(&captures[2])?;
        let number: u32 = captures[1]
            .parse()
            .map_err(|_| Rejection::MalformedRequest)?;
        let rhs_run = host.run_by_number(number).ok_or(Rejection::RunNotFound)?;

        Ok(Self {
            lhs_run: anchor,
            rhs_run,
            path,
            mode: OutputMode::from_query(query),
        })
    }

    pub fn lhs_run(&self) -> RunRef {
        self.lhs_run
    }

    pub fn rhs_run(&self) -> RunRef {
        self.rhs_run
    }

    pub fn path(&self) -> &ArtifactPath {
        &self.path
    }

    pub fn mode(&self) -> OutputMode {
        self.mode
    }
}
