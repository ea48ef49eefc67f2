pub mod api;
pub mod catalog;
pub mod error;
pub mod filter;
pub mod types;

pub use api::NewsApi;
pub use catalog::{Category, Country, Language, COUNTRIES, LANGUAGES};
pub use error::Error;
pub use filter::{FilterSet, FilterUpdate};
pub use types::{Article, ArticleSource, ArticlesPage, Source, SourcesPage};

pub type Result<T> = std::result::Result<T, Error>;
