use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use nh_core::{FilterSet, FilterUpdate, NewsApi};

use crate::state::RetrievalState;

/// Owns filter state and the loading/error/result lifecycle, and turns
/// user intents into articles and sources fetches. The two fetch families
/// are dispatched independently and race freely against each other.
///
/// Within a family, each dispatch takes a monotonically increasing ticket;
/// a resolution is applied only while its ticket is still the latest, so
/// the visible result set always reflects the most recently requested
/// filters rather than the most recently resolved response. Requests are
/// never cancelled.
pub struct RetrievalController {
    api: Arc<dyn NewsApi>,
    state: Arc<RwLock<RetrievalState>>,
    articles_seq: Arc<AtomicU64>,
    sources_seq: Arc<AtomicU64>,
    tasks: Arc<Mutex<Vec<JoinHandle<()>>>>,
}

impl RetrievalController {
    pub fn new(api: Arc<dyn NewsApi>) -> Self {
        Self {
            api,
            state: Arc::new(RwLock::new(RetrievalState::default())),
            articles_seq: Arc::new(AtomicU64::new(0)),
            sources_seq: Arc::new(AtomicU64::new(0)),
            tasks: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Read-only snapshot for presentation.
    pub async fn state(&self) -> RetrievalState {
        self.state.read().await.clone()
    }

    /// First activation: fetch articles and sources for the default
    /// filter set, concurrently.
    pub async fn start(&self) {
        let filters = self.state.read().await.applied_filters.clone();
        info!("🚀 Loading headlines and sources for {}", filters.country);
        let country = filters.country.clone();
        let language = filters.language.clone();
        self.dispatch_articles(filters).await;
        self.dispatch_sources(country, language).await;
    }

    /// Country change takes effect immediately, bypassing apply. Any
    /// unapplied draft edits are discarded. The sources fetch uses the
    /// language that was in effect before the transition.
    pub async fn country_changed(&self, code: &str) {
        let (filters, language) = {
            let mut state = self.state.write().await;
            let language = state.applied_filters.language.clone();
            let filters = state.applied_filters.with_country(code);
            state.selected_country = code.to_string();
            state.applied_filters = filters.clone();
            state.draft_filters = filters.clone();
            (filters, language)
        };
        info!("🌍 Country changed to {}", code);
        self.dispatch_articles(filters).await;
        self.dispatch_sources(code.to_string(), language).await;
    }

    /// Merge a partial edit into the draft. Applied filters are untouched
    /// and no request is made.
    pub async fn filters_edited(&self, update: FilterUpdate) {
        let mut state = self.state.write().await;
        state.draft_filters.merge(update);
    }

    /// Commit a filter set: refetch articles, and refetch sources iff the
    /// country differs from the one applied before this call.
    pub async fn apply_filters(&self, filters: FilterSet) {
        let prev_country = {
            let mut state = self.state.write().await;
            let prev_country = state.applied_filters.country.clone();
            state.applied_filters = filters.clone();
            state.draft_filters = filters.clone();
            state.selected_country = filters.country.clone();
            prev_country
        };
        info!("🔍 Applying filters for {}", filters.country);
        let country = filters.country.clone();
        let language = filters.language.clone();
        self.dispatch_articles(filters).await;
        if country != prev_country {
            self.dispatch_sources(country, language).await;
        }
    }

    /// Restore the default filter set and refetch articles. Reset is a
    /// fetch, not merely a UI clear.
    pub async fn reset_filters(&self) {
        let filters = FilterSet::default();
        {
            let mut state = self.state.write().await;
            state.applied_filters = filters.clone();
            state.draft_filters = filters.clone();
            state.selected_country = filters.country.clone();
        }
        info!("↩️ Filters reset to defaults");
        self.dispatch_articles(filters).await;
    }

    /// Wait for every in-flight fetch to resolve. Used by one-shot
    /// callers; a live UI never needs this.
    pub async fn wait_idle(&self) {
        loop {
            let handles: Vec<_> = self.tasks.lock().await.drain(..).collect();
            if handles.is_empty() {
                break;
            }
            futures::future::join_all(handles).await;
        }
    }

    async fn dispatch_articles(&self, filters: FilterSet) {
        let ticket = self.articles_seq.fetch_add(1, Ordering::SeqCst) + 1;
        {
            // Loading turns on and any stale error clears the moment the
            // request is dispatched, before its outcome is known.
            let mut state = self.state.write().await;
            state.loading_articles = true;
            state.last_error = None;
        }
        let api = self.api.clone();
        let state = self.state.clone();
        let latest = self.articles_seq.clone();
        let handle = tokio::spawn(async move {
            let result = api.fetch_articles(&filters).await;
            let mut state = state.write().await;
            if latest.load(Ordering::SeqCst) != ticket {
                debug!(ticket, "discarding stale articles response");
                return;
            }
            match result {
                Ok(page) => {
                    debug!(
                        count = page.articles.len(),
                        total = page.total_results,
                        "articles loaded"
                    );
                    state.articles = page.articles;
                    state.total_results = page.total_results;
                    state.last_error = None;
                    state.loading_articles = false;
                }
                Err(err) => {
                    warn!(error = %err, "articles fetch failed");
                    state.articles = Vec::new();
                    state.last_error = Some(err.to_string());
                    state.loading_articles = false;
                }
            }
        });
        self.tasks.lock().await.push(handle);
    }

    async fn dispatch_sources(&self, country: String, language: String) {
        let ticket = self.sources_seq.fetch_add(1, Ordering::SeqCst) + 1;
        let api = self.api.clone();
        let state = self.state.clone();
        let latest = self.sources_seq.clone();
        let handle = tokio::spawn(async move {
            let result = api.fetch_sources(&country, &language, None).await;
            let mut state = state.write().await;
            if latest.load(Ordering::SeqCst) != ticket {
                debug!(ticket, "discarding stale sources response");
                return;
            }
            // Sources are best-effort: failures and non-ok statuses keep
            // whatever list is already held and never touch the articles
            // lifecycle.
            match result {
                Ok(page) if page.is_ok() => {
                    debug!(count = page.sources.len(), country = %country, "sources loaded");
                    state.source_list = page.sources;
                }
                Ok(page) => {
                    warn!(status = %page.status, "sources fetch returned non-ok status");
                }
                Err(err) => {
                    warn!(error = %err, "sources fetch failed");
                }
            }
        });
        self.tasks.lock().await.push(handle);
    }
}
