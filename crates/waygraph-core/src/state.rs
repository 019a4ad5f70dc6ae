//! Per-vertex [`VertexState`].

use std::fmt;
use std::str::FromStr;

/// The role a vertex currently plays for the surrounding application.
///
/// A vertex holds exactly one state; assigning a new one overwrites the old
/// one. Nothing limits how many vertices may be `Start` or `End` at a time.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum VertexState {
    /// An ordinary, traversable vertex.
    #[default]
    Normal,
    Start,
    End,
    /// Never used as an intermediate hop by any search.
    Blocked,
    /// Painted onto a vertex that lies on a found path.
    Path,
}

impl VertexState {
    /// All five states, in declaration order.
    pub const ALL: [VertexState; 5] = [
        Self::Normal,
        Self::Start,
        Self::End,
        Self::Blocked,
        Self::Path,
    ];

    #[inline]
    pub fn is_blocked(self) -> bool {
        self == Self::Blocked
    }

    /// Whether this state marks a caller-selected vertex that painting a path
    /// must not overwrite.
    #[inline]
    pub fn is_pinned(self) -> bool {
        matches!(self, Self::Start | Self::End | Self::Blocked)
    }

    /// Lowercase name of the state.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Start => "start",
            Self::End => "end",
            Self::Blocked => "blocked",
            Self::Path => "path",
        }
    }
}

impl fmt::Display for VertexState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown state name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown vertex state \u{201c}{0}\u{201d}")]
pub struct ParseStateError(pub String);

impl FromStr for VertexState {
    type Err = ParseStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|st| st.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseStateError(s.to_string()))
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn state_serializes_lowercase() {
        let json = serde_json::to_string(&VertexState::Blocked).unwrap();
        assert_eq!(json, "\"blocked\"");
        let back: VertexState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, VertexState::Blocked);
    }
}
