use crate::common::job::{DirJob, nightly_job};
use crate::common::{html_diff, plain_body};
use artifact_diff::compare::{ArtifactDiff, Query};
use artifact_diff::host::run::RunRef;
use fake::Fake;
use fake::faker::lorem::en::Words;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn show_empty_diff_for_identical_artifacts(
    nightly_job: DirJob,
) -> Result<(), Box<dyn std::error::Error>> {
    let content = Words(5..10).fake::<Vec<String>>().join("\n");
    nightly_job.add_artifact(3, "env.txt", &content);
    nightly_job.add_artifact(4, "env.txt", &content);

    let diff = ArtifactDiff::new(&nightly_job, RunRef::new(3));

    let plain = diff.respond("/4/env.txt", &Query::from_pairs([("output", "plain")]))?;
    assert_eq!(plain_body(plain), "");

    let html = diff.respond("/4/env.txt", &Query::new())?;
    assert!(html_diff(html).lines().is_empty());

    Ok(())
}
