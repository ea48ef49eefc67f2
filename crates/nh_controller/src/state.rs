use nh_core::{Article, FilterSet, Source};

/// Controller-owned state. Presentation reads a cloned snapshot; all
/// mutation happens through the controller's intent handlers.
#[derive(Debug, Clone)]
pub struct RetrievalState {
    /// Country currently driving both endpoints; in sync with
    /// `applied_filters.country`.
    pub selected_country: String,
    /// Filters last sent to the articles endpoint.
    pub applied_filters: FilterSet,
    /// Filters being edited, not yet applied.
    pub draft_filters: FilterSet,
    /// Articles in API response order.
    pub articles: Vec<Article>,
    /// Total match count reported by the API; may exceed `articles.len()`.
    pub total_results: u64,
    /// Sources for the last country+language queried.
    pub source_list: Vec<Source>,
    /// True strictly between an articles dispatch and its resolution.
    pub loading_articles: bool,
    /// Message of the last failed articles fetch; cleared on every new
    /// dispatch.
    pub last_error: Option<String>,
}

impl Default for RetrievalState {
    fn default() -> Self {
        let filters = FilterSet::default();
        Self {
            selected_country: filters.country.clone(),
            applied_filters: filters.clone(),
            draft_filters: filters,
            articles: Vec::new(),
            total_results: 0,
            source_list: Vec::new(),
            loading_articles: false,
            last_error: None,
        }
    }
}
