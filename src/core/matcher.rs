use crate::domain::model::{Category, Dataset, Place};

/// A normalized search keyword: trimmed and lower-cased, never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query(String);

impl Query {
    /// Returns `None` when nothing is left after trimming. A byte-order mark counts as
    /// whitespace.
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = raw
            .trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
            .to_lowercase();
        if normalized.is_empty() {
            None
        } else {
            Some(Self(normalized))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn matches(&self, place: &Place) -> bool {
        place.name.to_lowercase().contains(&self.0)
            || place.description.to_lowercase().contains(&self.0)
    }
}

/// Every place whose name or description contains `query`, countries' cities first,
/// then beaches, then temples, each in authored order.
pub fn find_matches<'a>(dataset: &'a Dataset, query: &Query) -> Vec<&'a Place> {
    Category::ALL
        .iter()
        .flat_map(|category| dataset.places(*category))
        .filter(|place| query.matches(place))
        .collect()
}
