use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub id: Option<i64>,
  #[serde(default, deserialize_with = "crate::models::null_as_default")]
  pub name: String,
  #[serde(default, deserialize_with = "crate::models::null_as_default")]
  pub name_english: String,
  #[serde(default, deserialize_with = "crate::models::null_as_default")]
  pub description: String,
  #[serde(default, deserialize_with = "crate::models::null_as_default")]
  pub color: String,
  #[serde(default, deserialize_with = "crate::models::null_as_default")]
  pub icon: String,
  #[serde(default, deserialize_with = "crate::models::null_as_default")]
  pub subcategories: Vec<String>,
  #[serde(default, deserialize_with = "crate::models::null_as_default")]
  pub seo_title: String,
  #[serde(default, deserialize_with = "crate::models::null_as_default")]
  pub seo_description: String,
  #[serde(default, deserialize_with = "crate::models::null_as_default")]
  pub is_active: bool,
  #[serde(default, deserialize_with = "crate::models::null_as_default")]
  pub articles_count: u64,
  #[serde(default, deserialize_with = "crate::models::null_as_default")]
  pub order: i32,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub created_at: Option<String>,
}

impl Category {
  pub fn has_subcategory(&self, name: &str) -> bool {
    self.subcategories.iter().any(|sub| sub == name)
  }
}

/// Categories for the video section, a smaller record than article categories.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VideoCategory {
  pub id: i64,
  #[serde(default, deserialize_with = "crate::models::null_as_default")]
  pub name: String,
  #[serde(default, deserialize_with = "crate::models::null_as_default")]
  pub is_active: bool,
}
