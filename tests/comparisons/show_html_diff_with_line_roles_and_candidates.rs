use crate::common::html_diff;
use crate::common::job::{DirJob, nightly_job};
use artifact_diff::compare::{ArtifactDiff, Query};
use artifact_diff::diff::classify::LineRole;
use artifact_diff::host::run::RunRef;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn show_html_diff_with_line_roles_and_candidates(
    nightly_job: DirJob,
) -> Result<(), Box<dyn std::error::Error>> {
    nightly_job.add_artifact(3, "reports/summary.txt", "passed: 212\nfailed: 2\nskipped: 9\n");
    nightly_job.add_artifact(5, "reports/summary.txt", "passed: 214\nfailed: 0\nskipped: 9\n");

    let diff = ArtifactDiff::new(&nightly_job, RunRef::new(3));

    let response = diff.respond("/5/reports/summary.txt", &Query::new())?;

    let html = html_diff(response);
    assert_eq!(html.lhs(), RunRef::new(3));
    assert_eq!(html.rhs(), RunRef::new(5));
    assert_eq!(html.path().as_ref(), "reports/summary.txt");
    assert_eq!(html.candidates(), [RunRef::new(5), RunRef::new(3)]);

    let texts: Vec<&str> = html.lines().iter().map(|line| line.text()).collect();
    assert_eq!(
        texts,
        vec![
            "--- 3/reports/summary.txt",
            "+++ 5/reports/summary.txt",
            "@@ -1,3 +1,3 @@",
            "-passed: 212",
            "-failed: 2",
            "+passed: 214",
            "+failed: 0",
            " skipped: 9",
        ]
    );

    let roles: Vec<LineRole> = html.lines().iter().map(|line| line.role()).collect();
    assert_eq!(
        roles,
        vec![
            LineRole::HeaderOld,
            LineRole::HeaderNew,
            LineRole::Hunk,
            LineRole::Removed,
            LineRole::Removed,
            LineRole::Added,
            LineRole::Added,
            LineRole::Context,
        ]
    );

    Ok(())
}
