//! List shaping for the public pages and admin tables.
//!
//! Everything here works on the small in-memory pages the backend returns.

use std::cmp::Reverse;

use serde::Serialize;

use chrono::NaiveDateTime;

use crate::models::*;

pub const SIDEBAR_LEN: usize = 10;
pub const RELATED_LEN: usize = 4;

/// Most recently updated first. Articles without `updatedAt` go last.
pub fn sort_latest(articles: &mut [Article]) {
  articles.sort_by_key(|article| Reverse(article.updated_at));
}

pub fn latest(articles: &[Article], n: usize) -> Vec<Article> {
  let mut sorted = articles.to_vec();
  sort_latest(&mut sorted);
  sorted.truncate(n);
  sorted
}

/// Other articles from the same category as `current`, latest first.
pub fn related(articles: &[Article], current: &Article, n: usize) -> Vec<Article> {
  let same: Vec<Article> = articles.iter()
    .filter(|a| a.category.name == current.category.name && a.id != current.id)
    .cloned()
    .collect();
  latest(&same, n)
}

pub fn in_category(articles: &[Article], name: &str) -> Vec<Article> {
  articles.iter()
    .filter(|a| a.category.name == name)
    .cloned()
    .collect()
}

pub fn breaking(articles: &[Article]) -> Vec<Article> {
  articles.iter().filter(|a| a.is_breaking).cloned().collect()
}

pub fn featured(articles: &[Article]) -> Vec<Article> {
  articles.iter().filter(|a| a.is_featured).cloned().collect()
}

pub fn trending(articles: &[Article]) -> Vec<Article> {
  articles.iter().filter(|a| a.is_trending).cloned().collect()
}

/// Everything the detail page shows around one article.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NewsDetail {
  pub news: DisplayCard,
  pub sidebar: Vec<DisplayCard>,
  pub related: Vec<DisplayCard>,
}

impl NewsDetail {
  pub fn build(article: &Article, pool: &[Article], now: NaiveDateTime) -> Self {
    Self {
      news: DisplayCard::from_article(article, now),
      sidebar: map_articles(&latest(pool, SIDEBAR_LEN), now),
      related: map_articles(&related(pool, article, RELATED_LEN), now),
    }
  }
}

/// A category landing page.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CategoryPage {
  pub category: String,
  pub featured: Option<DisplayCard>,
  pub related: Vec<DisplayCard>,
  pub main: Vec<DisplayCard>,
  pub latest: Vec<DisplayCard>,
}

impl CategoryPage {
  pub const RELATED_LEN: usize = 20;
  pub const MAIN_LEN: usize = 15;
  pub const LATEST_LEN: usize = 21;

  pub fn build(articles: &[Article], name: &str, now: NaiveDateTime) -> Self {
    let mut articles = in_category(articles, name);
    sort_latest(&mut articles);

    let featured = articles.first();
    let related: Vec<&Article> = articles.iter()
      .filter(|a| Some(a.id) != featured.map(|f| f.id))
      .take(Self::RELATED_LEN)
      .collect();

    Self {
      category: name.to_string(),
      featured: map_article(featured, now),
      related: map_articles(related, now),
      main: map_articles(articles.iter().take(Self::MAIN_LEN), now),
      latest: map_articles(articles.iter().take(Self::LATEST_LEN), now),
    }
  }
}

pub fn active_categories(categories: &[Category]) -> Vec<Category> {
  categories.iter().filter(|c| c.is_active).cloned().collect()
}

pub fn active_writers(writers: &[Writer]) -> Vec<Writer> {
  writers.iter().filter(|w| w.is_active()).cloned().collect()
}

/// Admin video table filter. `None` for type or status means all.
#[derive(Debug, Clone, Default)]
pub struct VideoFilter {
  pub search: String,
  pub video_type: Option<VideoType>,
  pub status: Option<VideoStatus>,
}

impl VideoFilter {
  pub fn matches(&self, video: &Video) -> bool {
    let search = self.search.to_lowercase();
    video.title.to_lowercase().contains(&search)
      && self.video_type.map_or(true, |t| t == video.video_type)
      && self.status.map_or(true, |s| s == video.status)
  }

  pub fn apply(&self, videos: &[Video]) -> Vec<Video> {
    videos.iter().filter(|v| self.matches(v)).cloned().collect()
  }
}

/// Streams currently on air and their combined audience.
pub fn live_now(videos: &[Video]) -> (Vec<Video>, u64) {
  let live: Vec<Video> = videos.iter().filter(|v| v.is_on_air()).cloned().collect();
  let viewers = live.iter().map(|v| v.views).sum();
  (live, viewers)
}
