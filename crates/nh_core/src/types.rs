use serde::{Deserialize, Serialize};

/// A single article as returned by the aggregation API. Everything except
/// `url` and `title` may be missing from a response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub url: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url_to_image: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub source: ArticleSource,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArticleSource {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// A publisher recognized by the API, scoped by country and language.
/// `id` is the value accepted by the `sources` filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Source {
    pub id: String,
    pub name: String,
}

/// One page of articles. `total_results` may exceed `articles.len()` when
/// the API reports a larger match count than it returns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticlesPage {
    #[serde(default)]
    pub articles: Vec<Article>,
    #[serde(default)]
    pub total_results: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourcesPage {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub sources: Vec<Source>,
}

impl SourcesPage {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn article_accepts_minimal_payload() {
        let article: Article = serde_json::from_str(
            r#"{"url": "http://example.com/a", "title": "Headline"}"#,
        )
        .unwrap();
        assert_eq!(article.url, "http://example.com/a");
        assert!(article.description.is_none());
        assert!(article.source.id.is_none());
    }

    #[test]
    fn article_reads_camel_case_fields() {
        let article: Article = serde_json::from_str(
            r#"{
                "url": "http://example.com/a",
                "title": "Headline",
                "urlToImage": "http://example.com/a.jpg",
                "publishedAt": "2024-05-01T12:00:00Z",
                "source": {"id": "bbc-news", "name": "BBC News"}
            }"#,
        )
        .unwrap();
        assert_eq!(article.url_to_image.as_deref(), Some("http://example.com/a.jpg"));
        assert_eq!(article.published_at.as_deref(), Some("2024-05-01T12:00:00Z"));
        assert_eq!(article.source.name.as_deref(), Some("BBC News"));
    }

    #[test]
    fn articles_page_defaults_missing_fields() {
        let page: ArticlesPage = serde_json::from_str("{}").unwrap();
        assert!(page.articles.is_empty());
        assert_eq!(page.total_results, 0);
    }

    #[test]
    fn sources_page_status_check() {
        let page: SourcesPage =
            serde_json::from_str(r#"{"status": "ok", "sources": []}"#).unwrap();
        assert!(page.is_ok());
        let page: SourcesPage = serde_json::from_str(r#"{"status": "error"}"#).unwrap();
        assert!(!page.is_ok());
    }
}
