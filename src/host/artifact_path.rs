use crate::error::Rejection;

const TRAVERSAL_SEGMENT: &str = "../";

/// Slash-separated path of an artifact, relative to a run's artifact root.
///
/// Only constructible through [`ArtifactPath::try_parse`], which refuses
/// `../` traversal segments; anything else, including the empty path, is
/// accepted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArtifactPath(String);

impl ArtifactPath {
    pub fn try_parse(path: &str) -> Result<Self, Rejection> {
        if path.contains(TRAVERSAL_SEGMENT) {
            return Err(Rejection::IllegalPath);
        }

        Ok(Self(path.to_string()))
    }
}

impl AsRef<str> for ArtifactPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ArtifactPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
