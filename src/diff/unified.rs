use crate::diff::hunk::{deltas, hunks};
use crate::diff::source::DiffSource;

/// Unchanged lines of surrounding context per hunk.
pub(crate) const CONTEXT: usize = 4;

/// Renders the unified diff between two sources.
///
/// Empty when both sides carry the same lines (identical content, or
/// both absent); only a real difference produces the `---`/`+++` header
/// pair and its hunks. An absent side diffs as an empty sequence and is
/// labeled `/dev/null`.
pub fn unified_diff(lhs: &mut DiffSource<'_>, rhs: &mut DiffSource<'_>) -> Vec<String> {
    let deltas = deltas(lhs.lines(), rhs.lines());
    if deltas.is_empty() {
        return Vec::new();
    }

    let mut output = vec![
        format!("--- {}", lhs.label()),
        format!("+++ {}", rhs.label()),
    ];
    for hunk in hunks(lhs.lines(), &deltas, CONTEXT) {
        output.push(hunk.header());
        output.extend(hunk.lines().iter().cloned());
    }

    output
}
