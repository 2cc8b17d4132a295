//! Free-text Search

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

/// Case-insensitive substring query. An empty query matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchText(String);

impl SearchText {
    /// Creates a query from the text as typed.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Returns true if there is nothing to search for.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The query as typed
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if any field contains the query, ignoring case.
    ///
    /// Fields are checked in order and the first match wins.
    pub fn matches_any<'f>(&self, fields: impl IntoIterator<Item = &'f str>) -> bool {
        if self.is_empty() {
            return true;
        }

        let needle = self.0.to_lowercase();

        fields
            .into_iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

impl Display for SearchText {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

impl From<&str> for SearchText {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for SearchText {
    fn from(text: String) -> Self {
        Self(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_matches_everything() {
        assert!(SearchText::default().matches_any([]));
        assert!(SearchText::new("").matches_any(["anything"]));
    }

    #[test]
    fn match_ignores_case() {
        let query = SearchText::new("HaPPy");

        assert!(query.matches_any(["Happy Hour Pints"]));
        assert!(!query.matches_any(["Sad Hour"]));
    }

    #[test]
    fn any_field_may_match() {
        let query = SearchText::new("bogo");

        assert!(query.matches_any(["Two Lattes", "cafe", "bogo"]));
    }

    #[test]
    fn whitespace_is_part_of_the_query() {
        let query = SearchText::new(" ");

        assert!(!query.matches_any(["nospace"]));
        assert!(query.matches_any(["has space"]));
    }
}
