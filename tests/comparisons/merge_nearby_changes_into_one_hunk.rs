use crate::common::job::{DirJob, nightly_job};
use crate::common::plain_body;
use artifact_diff::compare::{ArtifactDiff, Query};
use artifact_diff::host::run::RunRef;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn merge_nearby_changes_into_one_hunk(
    nightly_job: DirJob,
) -> Result<(), Box<dyn std::error::Error>> {
    // exactly eight unchanged lines between the two changes, the widest
    // gap two four-line context windows still bridge
    nightly_job.add_artifact(
        3,
        "logs/steps.txt",
        "step checkout
dep fetch 1
dep fetch 2
dep fetch 3
dep fetch 4
dep fetch 5
dep fetch 6
dep fetch 7
dep fetch 8
step compile
unit tests
package
",
    );
    nightly_job.add_artifact(
        5,
        "logs/steps.txt",
        "step checkout v2
dep fetch 1
dep fetch 2
dep fetch 3
dep fetch 4
dep fetch 5
dep fetch 6
dep fetch 7
dep fetch 8
step compile v2
unit tests
package
",
    );

    let diff = ArtifactDiff::new(&nightly_job, RunRef::new(3));
    let query = Query::from_pairs([("output", "plain")]);

    let response = diff.respond("/5/logs/steps.txt", &query)?;

    assert_eq!(
        plain_body(response),
        "--- 3/logs/steps.txt
+++ 5/logs/steps.txt
@@ -1,12 +1,12 @@
-step checkout
+step checkout v2
 dep fetch 1
 dep fetch 2
 dep fetch 3
 dep fetch 4
 dep fetch 5
 dep fetch 6
 dep fetch 7
 dep fetch 8
-step compile
+step compile v2
 unit tests
 package"
    );

    Ok(())
}
