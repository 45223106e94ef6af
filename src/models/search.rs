use serde::{Deserialize, Serialize};

use crate::models::Article;

/// An article paired with its relevance for one query.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
  #[serde(flatten)]
  pub article: Article,
  pub match_score: u32,
}
