//! Search configuration.

/// How a `Blocked` vertex is treated when it is itself one of the two
/// selected endpoints of a query.
///
/// In every mode a blocked vertex is never used as an intermediate hop.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum BlockedEndpoints {
    /// A blocked start or end is still a valid endpoint.
    #[default]
    Allow,
    /// A blocked start or end connects to nothing but itself.
    Deny,
}

/// Options shared by every search run through a
/// [`PathFinder`](crate::PathFinder).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchOptions {
    pub blocked_endpoints: BlockedEndpoints,
}

impl SearchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the [`BlockedEndpoints`] policy.
    pub fn with_blocked_endpoints(mut self, policy: BlockedEndpoints) -> Self {
        self.blocked_endpoints = policy;
        self
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let opts: SearchOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(opts, SearchOptions::default());
        let opts: SearchOptions =
            serde_json::from_str(r#"{"blocked_endpoints":"deny"}"#).unwrap();
        assert_eq!(opts.blocked_endpoints, BlockedEndpoints::Deny);
    }
}
