use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Query types
// ---------------------------------------------------------------------------

/// Sentinel category meaning "no category filter".
pub const CATEGORY_ALL: &str = "all";

/// A search-text + category pair, as captured from the dashboard's search
/// box and category dropdown. Recreated on every input change; never
/// mutated in place.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeskQuery {
    /// Free-text search. Matched case-insensitively as a substring.
    pub search_text: String,
    /// Exact category discriminant; `"all"` disables the category check.
    pub category: String,
}

impl DeskQuery {
    pub fn new(search_text: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            search_text: search_text.into(),
            category: category.into(),
        }
    }

    /// A query that matches every record.
    pub fn unfiltered() -> Self {
        Self::new("", CATEGORY_ALL)
    }

    /// True when neither the text search nor the category narrows anything.
    pub fn is_unfiltered(&self) -> bool {
        self.search_text.is_empty() && self.category == CATEGORY_ALL
    }
}

impl Default for DeskQuery {
    fn default() -> Self {
        Self::unfiltered()
    }
}
