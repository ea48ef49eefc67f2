use async_trait::async_trait;

use crate::filter::FilterSet;
use crate::types::{ArticlesPage, SourcesPage};
use crate::Result;

/// The news aggregation API as seen by the controller. Implemented over
/// HTTP by `nh_client`; mocked in controller tests.
#[async_trait]
pub trait NewsApi: Send + Sync {
    /// Fetch one page of articles matching the filter set.
    async fn fetch_articles(&self, filters: &FilterSet) -> Result<ArticlesPage>;

    /// Fetch the sources available for a country and language.
    async fn fetch_sources(
        &self,
        country: &str,
        language: &str,
        category: Option<&str>,
    ) -> Result<SourcesPage>;

    /// Fetch previously stored articles matching the filter set.
    async fn fetch_stored(&self, filters: &FilterSet) -> Result<ArticlesPage>;

    /// Raw health status of the API server.
    async fn health_check(&self) -> Result<serde_json::Value>;
}
