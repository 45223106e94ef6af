use chrono::{DateTime, Utc};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ArticleStatus {
  #[default]
  Draft,
  Published,
  Scheduled,
}

/// `{ id, name }` pair the backend nests for an article's category.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CategoryRef {
  pub id: i64,
  #[serde(default, deserialize_with = "crate::models::null_as_default")]
  pub name: String,
}

/// `{ id, name }` pair the backend nests for an article's author.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AuthorRef {
  pub id: i64,
  #[serde(default, deserialize_with = "crate::models::null_as_default")]
  pub name: String,
}

/// A news article as the backend serves it.
///
/// The site only ever holds read-only copies of these, fetched per request.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Article {
  pub id: i64,
  #[serde(default, deserialize_with = "crate::models::null_as_default")]
  pub title: String,
  #[serde(default)]
  pub excerpt: Option<String>,
  #[serde(default, deserialize_with = "crate::models::null_as_default")]
  pub content: String,
  #[serde(default, deserialize_with = "crate::models::null_as_default")]
  pub category: CategoryRef,
  #[serde(default)]
  pub subcategory: Option<String>,
  #[serde(default, deserialize_with = "crate::models::null_as_default")]
  pub author: AuthorRef,
  #[serde(default)]
  pub featured_image: Option<String>,
  #[serde(default, deserialize_with = "crate::models::null_as_default")]
  pub publish_date: String,
  #[serde(default, deserialize_with = "crate::models::null_as_default")]
  pub publish_time: String,
  #[serde(default)]
  pub updated_at: Option<DateTime<Utc>>,
  #[serde(default, deserialize_with = "crate::models::null_as_default")]
  pub views: u64,
  #[serde(default, deserialize_with = "crate::models::null_as_default")]
  pub is_featured: bool,
  #[serde(default, deserialize_with = "crate::models::null_as_default")]
  pub is_trending: bool,
  #[serde(default, deserialize_with = "crate::models::null_as_default")]
  pub is_hot: bool,
  #[serde(default, deserialize_with = "crate::models::null_as_default")]
  pub is_breaking: bool,
  #[serde(default, deserialize_with = "crate::models::null_as_default")]
  pub tags: Vec<String>,
  #[serde(default, deserialize_with = "crate::models::null_as_default")]
  pub status: ArticleStatus,
  #[serde(default, deserialize_with = "crate::models::null_as_default")]
  pub read_time: u32,
  #[serde(default, deserialize_with = "crate::models::null_as_default")]
  pub seo_title: String,
  #[serde(default, deserialize_with = "crate::models::null_as_default")]
  pub seo_description: String,
  #[serde(default, deserialize_with = "crate::models::null_as_default")]
  pub seo_keywords: String,
}

impl Article {
  pub fn excerpt(&self) -> &str {
    self.excerpt.as_deref().unwrap_or("")
  }
}

/// The article collection answers with either a bare array or a paginated envelope.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ArticlePage {
  List(Vec<Article>),
  Paged {
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    results: Vec<Article>,
    #[serde(default)]
    count: Option<u64>,
  },
}

impl ArticlePage {
  pub fn into_articles(self) -> Vec<Article> {
    match self {
      ArticlePage::List(articles) => articles,
      ArticlePage::Paged { results, .. } => results,
    }
  }
}

/// Editorial counters from `article-stats/`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ArticleStats {
  #[serde(default, deserialize_with = "crate::models::null_as_default")]
  pub total_articles: u64,
  #[serde(default, deserialize_with = "crate::models::null_as_default")]
  pub published_articles: u64,
  #[serde(default, deserialize_with = "crate::models::null_as_default")]
  pub draft_articles: u64,
  #[serde(default, deserialize_with = "crate::models::null_as_default")]
  pub scheduled_articles: u64,
  #[serde(default, deserialize_with = "crate::models::null_as_default")]
  pub total_views: u64,
}
