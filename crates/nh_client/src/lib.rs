use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use nh_core::{ArticlesPage, Error, FilterSet, NewsApi, Result, SourcesPage};

pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

/// HTTP implementation of [`NewsApi`] against the remote aggregation API.
/// The base URL is supplied at construction; there is no global instance.
pub struct NewsClient {
    http: reqwest::Client,
    base_url: String,
}

impl NewsClient {
    pub fn new(base_url: &str) -> Result<Self> {
        // Validate eagerly so a bad URL fails at construction, not on the
        // first fetch.
        Url::parse(base_url).map_err(|e| Error::InvalidUrl(format!("{}: {}", base_url, e)))?;
        Ok(Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, path: &str, pairs: &[(&str, &str)]) -> Result<Url> {
        let mut url = Url::parse(&format!("{}/{}", self.base_url, path))
            .map_err(|e| Error::InvalidUrl(e.to_string()))?;
        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs.iter().copied());
        }
        Ok(url)
    }

    /// GET the URL, fail on an embedded error indicator even when the
    /// transport layer reports success, then deserialize the page.
    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        tracing::debug!(url = %url, "requesting");
        let body: Value = self.http.get(url).send().await?.json().await?;
        if let Some(message) = embedded_error(&body) {
            return Err(Error::Api(message));
        }
        Ok(serde_json::from_value(body)?)
    }
}

/// An application-level error in a parsed body: a truthy `error` field.
/// The surfaced message is `message` when present, the error code
/// otherwise.
fn embedded_error(body: &Value) -> Option<String> {
    let error = body.get("error")?;
    match error {
        Value::Null | Value::Bool(false) => None,
        Value::String(code) if code.is_empty() => None,
        _ => {
            let message = body
                .get("message")
                .and_then(Value::as_str)
                .filter(|m| !m.is_empty());
            Some(match (message, error) {
                (Some(m), _) => m.to_string(),
                (None, Value::String(code)) => code.clone(),
                (None, other) => other.to_string(),
            })
        }
    }
}

#[async_trait]
impl NewsApi for NewsClient {
    async fn fetch_articles(&self, filters: &FilterSet) -> Result<ArticlesPage> {
        let url = self.endpoint("news", &filters.query_pairs())?;
        self.get_json(url).await
    }

    async fn fetch_sources(
        &self,
        country: &str,
        language: &str,
        category: Option<&str>,
    ) -> Result<SourcesPage> {
        let mut pairs = Vec::new();
        if !country.is_empty() {
            pairs.push(("country", country));
        }
        if !language.is_empty() {
            pairs.push(("language", language));
        }
        if let Some(category) = category.filter(|c| !c.is_empty()) {
            pairs.push(("category", category));
        }
        let url = self.endpoint("sources", &pairs)?;
        self.get_json(url).await
    }

    async fn fetch_stored(&self, filters: &FilterSet) -> Result<ArticlesPage> {
        let url = self.endpoint("news/stored", &filters.query_pairs())?;
        self.get_json(url).await
    }

    async fn health_check(&self) -> Result<Value> {
        let url = self.endpoint("health", &[])?;
        tracing::debug!(url = %url, "health check");
        Ok(self.http.get(url).send().await?.json().await?)
    }
}
