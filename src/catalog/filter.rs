use super::Listed;
use crate::domain::InfluencerId;

/// The search box and the market/category dropdowns of a list view.
/// `None` and `"all"` both disable a dropdown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListFilter {
    pub search: String,
    pub market: Option<String>,
    pub category: Option<String>,
}

impl ListFilter {
    pub fn new(search: Option<String>, market: Option<String>, category: Option<String>) -> Self {
        let dropdown = |value: Option<String>| value.filter(|v| !v.is_empty() && v != "all");
        Self {
            search: search.unwrap_or_default().to_lowercase(),
            market: dropdown(market),
            category: dropdown(category),
        }
    }

    /// Case-insensitive substring match on name or handle, exact match on
    /// market and category.
    pub fn matches(&self, row: &impl Listed) -> bool {
        let matches_search = self.search.is_empty()
            || row.name().to_lowercase().contains(&self.search)
            || row.handle().to_lowercase().contains(&self.search);
        let matches_market = self.market.as_deref().is_none_or(|m| row.market() == m);
        let matches_category = self.category.as_deref().is_none_or(|c| row.category() == c);

        matches_search && matches_market && matches_category
    }

    pub fn apply<'a, T: Listed>(&self, rows: &'a [T]) -> Vec<&'a T> {
        rows.iter().filter(|row| self.matches(*row)).collect()
    }
}

/// Ids of the rows a filter left visible.
pub fn visible_ids<'a, T: Listed>(rows: &[&'a T]) -> Vec<&'a InfluencerId> {
    rows.iter().map(|row| Listed::id(*row)).collect()
}
