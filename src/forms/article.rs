use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

use chrono::NaiveDateTime;

use crate::error::*;
use crate::models::{Article, ArticleStatus, Category};
use crate::util::read_time;

#[derive(Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct PageRequest {
  pub page: u32,
  pub page_size: u32,
}

impl PageRequest {
  pub fn first(page_size: u32) -> Self {
    Self { page: 1, page_size }
  }
}

/// Article editor state, serialized as the create/update body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ArticleForm {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub id: Option<i64>,
  pub title: String,
  pub excerpt: String,
  pub content: String,
  pub category: Option<i64>,
  pub subcategory: String,
  pub author: Option<i64>,
  pub featured_image: Option<String>,
  pub tags: Vec<String>,
  pub status: ArticleStatus,
  pub is_featured: bool,
  pub is_hot: bool,
  pub is_trending: bool,
  pub is_breaking: bool,
  pub publish_date: String,
  pub publish_time: String,
  pub seo_title: String,
  pub seo_description: String,
  pub seo_keywords: String,
  pub read_time: u32,
}

impl ArticleForm {
  /// Empty draft scheduled for `now`.
  pub fn new(now: NaiveDateTime) -> Self {
    Self {
      publish_date: now.format("%Y-%m-%d").to_string(),
      publish_time: now.format("%H:%M").to_string(),
      ..Default::default()
    }
  }

  /// Load an existing article into the editor.
  pub fn from_article(article: &Article, now: NaiveDateTime) -> Self {
    let mut form = Self::new(now);
    form.id = Some(article.id);
    form.title = article.title.clone();
    form.excerpt = article.excerpt().to_string();
    form.content = article.content.clone();
    form.category = Some(article.category.id);
    form.subcategory = article.subcategory.clone().unwrap_or_default();
    form.author = Some(article.author.id);
    form.featured_image = article.featured_image.clone();
    form.tags = article.tags.clone();
    form.status = article.status;
    form.is_featured = article.is_featured;
    form.is_hot = article.is_hot;
    form.is_trending = article.is_trending;
    form.is_breaking = article.is_breaking;
    if !article.publish_date.is_empty() {
      form.publish_date = article.publish_date.clone();
    }
    if !article.publish_time.is_empty() {
      form.publish_time = article.publish_time.clone();
    }
    form.seo_title = article.seo_title.clone();
    form.seo_description = article.seo_description.clone();
    form.seo_keywords = article.seo_keywords.clone();
    form.read_time = article.read_time;
    form
  }

  pub fn set_content(&mut self, html: &str) {
    self.content = html.to_string();
    if !html.is_empty() {
      self.read_time = read_time(html);
    }
  }

  /// Switching category invalidates the chosen subcategory.
  pub fn set_category(&mut self, category: i64) {
    self.category = Some(category);
    self.subcategory.clear();
  }

  /// Returns false when the tag is blank or already present.
  pub fn add_tag(&mut self, tag: &str) -> bool {
    let tag = tag.trim();
    if tag.is_empty() || self.tags.iter().any(|t| t == tag) {
      return false;
    }
    self.tags.push(tag.to_string());
    true
  }

  pub fn remove_tag(&mut self, tag: &str) {
    self.tags.retain(|t| t != tag);
  }

  pub fn with_status(mut self, status: ArticleStatus) -> Self {
    self.status = status;
    self
  }

  pub fn validate(&self, categories: &[Category]) -> Result<()> {
    let mut errors = Map::new();
    let mut require = |field: &str, value: bool, message: &str| {
      if !value {
        errors.insert(field.to_string(), JsonValue::from(message));
      }
    };
    require("title", !self.title.trim().is_empty(), "Title is required");
    require("excerpt", !self.excerpt.trim().is_empty(), "Excerpt is required");
    require("content", !self.content.trim().is_empty(), "Content is required");
    require("category", self.category.is_some(), "Category is required");
    require("author", self.author.is_some(), "Author is required");

    if let (Some(category), false) = (self.category, self.subcategory.is_empty()) {
      let selected = categories.iter().find(|c| c.id == Some(category));
      if let Some(selected) = selected {
        if !selected.has_subcategory(&self.subcategory) {
          errors.insert("subcategory".to_string(), JsonValue::from(format!(
            "Subcategory '{}' is not valid for category '{}'",
            self.subcategory, selected.name
          )));
        }
      }
    }

    if errors.is_empty() {
      Ok(())
    } else {
      Err(Error::UnprocessableEntity(json!({ "errors": errors })))
    }
  }
}
