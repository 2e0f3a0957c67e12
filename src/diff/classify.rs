use crate::error::Rejection;
use derive_new::new;

/// Role of one rendered diff line, decided by its leading marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineRole {
    HeaderOld,
    HeaderNew,
    Hunk,
    Added,
    Removed,
    Context,
}

impl From<&LineRole> for &str {
    fn from(role: &LineRole) -> Self {
        match role {
            LineRole::HeaderOld => "old",
            LineRole::HeaderNew => "new",
            LineRole::Hunk => "pos",
            LineRole::Added => "new",
            LineRole::Removed => "old",
            LineRole::Context => "con",
        }
    }
}

/// One output line paired with its role, ready for presentation.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct DiffLine {
    text: String,
    role: LineRole,
}

impl DiffLine {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn role(&self) -> LineRole {
        self.role
    }
}

/// Classifies one unified-diff body line by its leading marker.
///
/// The `@@` check must run before the single-character markers. Header
/// lines never pass through here; the controller assigns their roles by
/// position. An unknown marker means the producer emitted something that
/// is not a diff line, which is a defect, not user error.
pub fn classify(line: &str) -> Result<LineRole, Rejection> {
    if line.is_empty() {
        return Ok(LineRole::Context);
    }

    if line.starts_with("@@") {
        Ok(LineRole::Hunk)
    } else if line.starts_with('+') {
        Ok(LineRole::Added)
    } else if line.starts_with('-') {
        Ok(LineRole::Removed)
    } else if line.starts_with(' ') {
        Ok(LineRole::Context)
    } else {
        Err(Rejection::InvariantViolation(format!(
            "{line} does not look like a diff line"
        )))
    }
}
