use chrono::NaiveDateTime;

use serde::{Deserialize, Serialize};

use crate::models::Article;
use crate::util::format_time_ago;

/// Flat projection of an [`Article`] used by list and detail views.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayCard {
  pub id: String,
  pub title: String,
  pub excerpt: String,
  pub image: Option<String>,
  pub category: String,
  pub time: String,
  pub views: String,
  pub content: String,
  pub reporter: String,
}

impl DisplayCard {
  pub fn from_article(article: &Article, now: NaiveDateTime) -> Self {
    Self {
      id: article.id.to_string(),
      title: article.title.clone(),
      excerpt: article.excerpt().to_string(),
      image: article.featured_image.clone(),
      category: article.category.name.clone(),
      time: format_time_ago(&article.publish_date, &article.publish_time, now),
      views: article.views.to_string(),
      content: article.content.clone(),
      reporter: article.author.name.clone(),
    }
  }

  /// Content lines with blank ones dropped.
  pub fn paragraphs(&self) -> Vec<&str> {
    self.content.lines()
      .filter(|line| !line.trim().is_empty())
      .collect()
  }
}

pub fn map_article(article: Option<&Article>, now: NaiveDateTime) -> Option<DisplayCard> {
  article.map(|article| DisplayCard::from_article(article, now))
}

pub fn map_articles<'a, I>(articles: I, now: NaiveDateTime) -> Vec<DisplayCard>
where
  I: IntoIterator<Item = &'a Article>,
{
  articles.into_iter()
    .map(|article| DisplayCard::from_article(article, now))
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::models::{AuthorRef, CategoryRef};

  fn now() -> NaiveDateTime {
    NaiveDateTime::parse_from_str("2024-05-10 15:30:00", "%Y-%m-%d %H:%M:%S").unwrap()
  }

  fn article() -> Article {
    Article {
      id: 42,
      title: "सडक विस्तार सुरु".into(),
      excerpt: Some("काठमाडौंमा सडक".into()),
      content: "पहिलो अनुच्छेद\n\n  \nदोस्रो अनुच्छेद".into(),
      category: CategoryRef { id: 1, name: "विकास".into() },
      author: AuthorRef { id: 9, name: "सीता शर्मा".into() },
      featured_image: Some("http://cdn.test/road.jpg".into()),
      publish_date: "2024-05-10".into(),
      publish_time: "12:30".into(),
      views: 1520,
      ..Default::default()
    }
  }

  #[test]
  fn none_maps_to_none() {
    assert_eq!(map_article(None, now()), None);
  }

  #[test]
  fn renames_and_flattens() {
    let card = map_article(Some(&article()), now()).unwrap();
    assert_eq!(card.id, "42");
    assert_eq!(card.title, "सडक विस्तार सुरु");
    assert_eq!(card.excerpt, "काठमाडौंमा सडक");
    assert_eq!(card.image.as_deref(), Some("http://cdn.test/road.jpg"));
    assert_eq!(card.category, "विकास");
    assert_eq!(card.time, "3 घण्टा अगाडि");
    assert_eq!(card.views, "1520");
    assert_eq!(card.reporter, "सीता शर्मा");
  }

  #[test]
  fn absent_excerpt_is_empty() {
    let mut article = article();
    article.excerpt = None;
    let card = DisplayCard::from_article(&article, now());
    assert_eq!(card.excerpt, "");
  }

  #[test]
  fn paragraphs_skip_blank_lines() {
    let card = DisplayCard::from_article(&article(), now());
    assert_eq!(card.paragraphs(), vec!["पहिलो अनुच्छेद", "दोस्रो अनुच्छेद"]);
  }
}
