use std::sync::Arc;

use anyhow::bail;
use chrono::{DateTime, NaiveDate};
use clap::{Args, Parser, Subcommand};
use tracing::info;

use nh_client::NewsClient;
use nh_controller::RetrievalController;
use nh_core::{Article, Category, FilterSet, NewsApi, COUNTRIES};

#[derive(Parser, Debug)]
#[command(author, version, about = "Browse headlines from a news aggregation API", long_about = None)]
struct Cli {
    /// Base URL of the aggregation API
    #[arg(long, env = "NEWSHUB_API_URL", default_value = nh_client::DEFAULT_API_URL)]
    api_url: String,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Fetch top headlines for a filter set
    Top(FilterArgs),
    /// Fetch previously stored headlines
    Stored(FilterArgs),
    /// List news sources for a country and language
    Sources {
        #[arg(long, default_value = "us")]
        country: String,
        #[arg(long, default_value = "en")]
        language: String,
        #[arg(long)]
        category: Option<Category>,
    },
    /// List supported countries
    Countries {
        /// Render as a card grid instead of one per line
        #[arg(long)]
        cards: bool,
    },
    /// Check that the API server is up
    Health,
}

#[derive(Args, Debug)]
struct FilterArgs {
    #[arg(long, default_value = "us")]
    country: String,
    #[arg(long)]
    category: Option<Category>,
    #[arg(long, default_value = "en")]
    language: String,
    /// Source id, as listed by `nh sources`
    #[arg(long)]
    source: Option<String>,
    /// Earliest publication date (YYYY-MM-DD)
    #[arg(long)]
    from: Option<NaiveDate>,
    /// Latest publication date (YYYY-MM-DD)
    #[arg(long)]
    to: Option<NaiveDate>,
    /// Free-text search query
    #[arg(long)]
    query: Option<String>,
}

impl FilterArgs {
    fn into_filters(self) -> FilterSet {
        FilterSet {
            country: self.country,
            category: self
                .category
                .map(|c| c.as_str().to_string())
                .unwrap_or_default(),
            language: self.language,
            sources: self.source.unwrap_or_default(),
            from: self.from.map(|d| d.to_string()).unwrap_or_default(),
            to: self.to.map(|d| d.to_string()).unwrap_or_default(),
            q: self.query.unwrap_or_default(),
        }
    }
}

/// How the country catalog is rendered.
enum CountryView {
    List,
    Cards,
}

fn print_countries(view: CountryView) {
    match view {
        CountryView::List => {
            for country in COUNTRIES {
                println!("{} {:<3} {}", country.flag, country.code, country.name);
            }
        }
        CountryView::Cards => {
            for row in COUNTRIES.chunks(4) {
                let cells: Vec<String> = row
                    .iter()
                    .map(|c| format!("{} {:<18}", c.flag, c.name))
                    .collect();
                println!("{}", cells.join("  "));
            }
        }
    }
}

fn format_published(raw: &str) -> String {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

fn print_articles(articles: &[Article], total_results: u64) {
    for article in articles {
        let source = article.source.name.as_deref().unwrap_or("unknown source");
        let published = article
            .published_at
            .as_deref()
            .map(format_published)
            .unwrap_or_default();
        println!("• {} — {} {}", article.title, source, published);
        if let Some(description) = &article.description {
            println!("    {}", description);
        }
        println!("    {}", article.url);
    }
    if total_results > 0 {
        println!("\nFound {} articles ({} shown)", total_results, articles.len());
    } else {
        println!("\nNo articles found with current filters");
    }
}

async fn run_top(api: Arc<dyn NewsApi>, filters: FilterSet) -> anyhow::Result<()> {
    info!("📰 Fetching top headlines for {}", filters.country);
    let controller = RetrievalController::new(api);
    controller.apply_filters(filters).await;
    controller.wait_idle().await;

    let state = controller.state().await;
    if let Some(error) = state.last_error {
        bail!("news fetch failed: {}", error);
    }
    print_articles(&state.articles, state.total_results);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();
    let client = NewsClient::new(&cli.api_url)?;

    match cli.command {
        Commands::Top(args) => {
            run_top(Arc::new(client), args.into_filters()).await?;
        }
        Commands::Stored(args) => {
            let filters = args.into_filters();
            info!("🗄️ Fetching stored headlines for {}", filters.country);
            let page = client.fetch_stored(&filters).await?;
            print_articles(&page.articles, page.total_results);
        }
        Commands::Sources {
            country,
            language,
            category,
        } => {
            info!("🗞️ Fetching sources for {}/{}", country, language);
            let page = client
                .fetch_sources(&country, &language, category.map(|c| c.as_str()))
                .await?;
            if !page.is_ok() {
                bail!("sources endpoint returned status {:?}", page.status);
            }
            for source in &page.sources {
                println!("{:<24} {}", source.id, source.name);
            }
            println!("\n{} sources available", page.sources.len());
        }
        Commands::Countries { cards } => {
            let view = if cards {
                CountryView::Cards
            } else {
                CountryView::List
            };
            print_countries(view);
        }
        Commands::Health => {
            let status = client.health_check().await?;
            println!("{}", serde_json::to_string_pretty(&status)?);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_args_map_onto_the_filter_set() {
        let args = FilterArgs {
            country: "gb".to_string(),
            category: Some(Category::Sports),
            language: "en".to_string(),
            source: None,
            from: Some("2024-01-01".parse().unwrap()),
            to: None,
            query: Some("world cup".to_string()),
        };
        let filters = args.into_filters();
        assert_eq!(filters.country, "gb");
        assert_eq!(filters.category, "sports");
        assert_eq!(filters.from, "2024-01-01");
        assert_eq!(filters.to, "");
        assert_eq!(filters.sources, "");
        assert_eq!(filters.q, "world cup");
    }

    #[test]
    fn unparseable_timestamps_pass_through_unformatted() {
        assert_eq!(format_published("yesterday"), "yesterday");
        assert_eq!(
            format_published("2024-05-01T12:30:00Z"),
            "2024-05-01 12:30"
        );
    }
}
