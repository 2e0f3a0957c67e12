use crate::diff::myers::{Edit, MyersDiff};
use derive_new::new;

/// One contiguous changed region: `removed` lines starting at `a_pos`
/// replaced by `inserted` lines starting at `b_pos` (0-based, either side
/// may be empty).
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Delta {
    pub(crate) a_pos: usize,
    pub(crate) b_pos: usize,
    pub(crate) removed: Vec<String>,
    pub(crate) inserted: Vec<String>,
}

impl Delta {
    pub(crate) fn a_end(&self) -> usize {
        self.a_pos + self.removed.len()
    }
}

/// One `@@` block of a unified diff: position header plus the prefixed
/// body lines it covers.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Hunk {
    a_start: usize,
    a_span: usize,
    b_start: usize,
    b_span: usize,
    lines: Vec<String>,
}

impl Hunk {
    pub fn header(&self) -> String {
        format!(
            "@@ -{},{} +{},{} @@",
            self.a_start, self.a_span, self.b_start, self.b_span
        )
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

/// Extracts the changed regions between two line sequences, in order of
/// appearance. Removals and insertions that touch are folded into one
/// delta regardless of how the edit script interleaved them.
pub fn deltas(a: &[String], b: &[String]) -> Vec<Delta> {
    let script = MyersDiff::new(a, b).diff();

    let mut deltas = Vec::new();
    let mut current: Option<Delta> = None;
    let (mut a_pos, mut b_pos) = (0usize, 0usize);

    for edit in script {
        match edit {
            Edit::Equal { .. } => {
                if let Some(delta) = current.take() {
                    deltas.push(delta);
                }
                a_pos += 1;
                b_pos += 1;
            }
            Edit::Delete { value } => {
                current
                    .get_or_insert_with(|| Delta::new(a_pos, b_pos, Vec::new(), Vec::new()))
                    .removed
                    .push(value);
                a_pos += 1;
            }
            Edit::Insert { value } => {
                current
                    .get_or_insert_with(|| Delta::new(a_pos, b_pos, Vec::new(), Vec::new()))
                    .inserted
                    .push(value);
                b_pos += 1;
            }
        }
    }
    if let Some(delta) = current.take() {
        deltas.push(delta);
    }

    deltas
}

/// Groups deltas into hunks with `context` unchanged lines around each
/// change. Two deltas share a hunk while the unchanged gap between them
/// is at most `2 * context` lines.
pub fn hunks(a: &[String], deltas: &[Delta], context: usize) -> Vec<Hunk> {
    let mut hunks = Vec::new();
    let mut group: Vec<&Delta> = Vec::new();

    for delta in deltas {
        if let Some(prev) = group.last() {
            if delta.a_pos > prev.a_end() + 2 * context {
                hunks.push(build_hunk(a, &group, context));
                group.clear();
            }
        }
        group.push(delta);
    }
    if !group.is_empty() {
        hunks.push(build_hunk(a, &group, context));
    }

    hunks
}

fn build_hunk(a: &[String], group: &[&Delta], context: usize) -> Hunk {
    let first = group[0];

    // 1-based header starts, clamped so an edit at the very top (or into
    // an absent file) still reports line 1
    let a_start = (first.a_pos + 1).saturating_sub(context).max(1);
    let b_start = (first.b_pos + 1).saturating_sub(context).max(1);

    let mut lines = Vec::new();
    let (mut a_span, mut b_span) = (0usize, 0usize);

    let leading = first.a_pos.saturating_sub(context);
    push_context(
        &mut lines,
        &a[leading..first.a_pos],
        &mut a_span,
        &mut b_span,
    );
    push_delta(&mut lines, first, &mut a_span, &mut b_span);

    let mut current = first;
    for &delta in &group[1..] {
        push_context(
            &mut lines,
            &a[current.a_end()..delta.a_pos],
            &mut a_span,
            &mut b_span,
        );
        push_delta(&mut lines, delta, &mut a_span, &mut b_span);
        current = delta;
    }

    let trailing = (current.a_end() + context).min(a.len());
    push_context(
        &mut lines,
        &a[current.a_end()..trailing],
        &mut a_span,
        &mut b_span,
    );

    Hunk::new(a_start, a_span, b_start, b_span, lines)
}

fn push_context(
    lines: &mut Vec<String>,
    unchanged: &[String],
    a_span: &mut usize,
    b_span: &mut usize,
) {
    for line in unchanged {
        lines.push(format!(" {line}"));
    }
    *a_span += unchanged.len();
    *b_span += unchanged.len();
}

fn push_delta(lines: &mut Vec<String>, delta: &Delta, a_span: &mut usize, b_span: &mut usize) {
    for line in &delta.removed {
        lines.push(format!("-{line}"));
    }
    for line in &delta.inserted {
        lines.push(format!("+{line}"));
    }
    *a_span += delta.removed.len();
    *b_span += delta.inserted.len();
}
