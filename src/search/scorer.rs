use crate::models::{Article, SearchResult};

/// Fixed bonus added once per query word for each field it appears in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldBonus {
  pub title: u32,
  pub category: u32,
  pub excerpt: u32,
}

impl Default for FieldBonus {
  fn default() -> Self {
    Self {
      title: 10,
      category: 5,
      excerpt: 1,
    }
  }
}

/// Substring-count relevance scorer over title, category name and excerpt.
#[derive(Debug, Clone, Copy, Default)]
pub struct Scorer {
  bonus: FieldBonus,
}

impl Scorer {
  pub fn new(bonus: FieldBonus) -> Self {
    Self { bonus }
  }

  pub fn bonus(&self) -> FieldBonus {
    self.bonus
  }

  pub fn score(&self, query: &str, article: &Article) -> u32 {
    self.score_words(&query_words(query), article)
  }

  fn score_words(&self, words: &[String], article: &Article) -> u32 {
    let title = article.title.to_lowercase();
    let category = article.category.name.to_lowercase();
    let excerpt = article.excerpt().to_lowercase();

    words.iter()
      .map(|word| {
        field_score(&title, word, self.bonus.title)
          + field_score(&category, word, self.bonus.category)
          + field_score(&excerpt, word, self.bonus.excerpt)
      })
      .sum()
  }

  /// Score every candidate, drop non-matches, best first, at most `limit`.
  ///
  /// Equal scores keep the order the candidates arrived in.
  pub fn rank<I>(&self, query: &str, candidates: I, limit: usize) -> Vec<SearchResult>
  where
    I: IntoIterator<Item = Article>,
  {
    let words = query_words(query);
    if words.is_empty() {
      return Vec::new();
    }

    let mut results: Vec<SearchResult> = candidates.into_iter()
      .map(|article| {
        let match_score = self.score_words(&words, &article);
        SearchResult { article, match_score }
      })
      .filter(|result| result.match_score > 0)
      .collect();

    // `sort_by` is stable.
    results.sort_by(|a, b| b.match_score.cmp(&a.match_score));
    results.truncate(limit);
    results
  }
}

/// Lower-cased, whitespace separated query words.
pub fn query_words(query: &str) -> Vec<String> {
  query.to_lowercase()
    .split_whitespace()
    .map(String::from)
    .collect()
}

fn field_score(field: &str, word: &str, bonus: u32) -> u32 {
  let count = field.matches(word).count() as u32;
  if count > 0 {
    count + bonus
  } else {
    0
  }
}

pub fn match_score(query: &str, article: &Article) -> u32 {
  Scorer::default().score(query, article)
}

pub fn rank<I>(query: &str, candidates: I, limit: usize) -> Vec<SearchResult>
where
  I: IntoIterator<Item = Article>,
{
  Scorer::default().rank(query, candidates, limit)
}
