use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A short token identifying a shortened URL.
///
/// The wrapper carries no validation of its own: generated ids come from a
/// trusted generator, and ids arriving from the outside are simply looked
/// up, where an unknown token is a miss rather than an error.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShortId(String);

impl ShortId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the short id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Generates the full shortened URL based on the provided base URL.
    pub fn to_url(&self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self.0)
    }
}

impl Display for ShortId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_url_joins_with_single_slash() {
        let id = ShortId::new("ab12CD34");
        assert_eq!(id.to_url("http://pin.hole"), "http://pin.hole/ab12CD34");
        assert_eq!(id.to_url("http://pin.hole/"), "http://pin.hole/ab12CD34");
    }

    #[test]
    fn display_matches_inner() {
        let id = ShortId::new("ab12CD34");
        assert_eq!(id.to_string(), "ab12CD34");
        assert_eq!(id.as_str(), "ab12CD34");
    }

    #[test]
    fn serde_is_transparent() {
        let id = ShortId::new("ab12CD34");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"ab12CD34\"");
        let back: ShortId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
