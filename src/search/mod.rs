use std::time::Duration;

use crate::error::*;
use crate::app::AppConfig;

mod scorer;
pub use scorer::*;

mod orchestrator;
pub use orchestrator::*;

pub const DEFAULT_DEBOUNCE_MS: u64 = 300;
pub const DEFAULT_POOL_SIZE: u32 = 100;
pub const DEFAULT_LIMIT: usize = 10;

#[derive(Debug, Clone)]
pub struct SearchSettings {
  pub debounce: Duration,
  /// Number of articles fetched as the candidate pool.
  pub pool_size: u32,
  /// Maximum number of ranked results kept.
  pub limit: usize,
  pub bonus: FieldBonus,
  pub timeout: Option<Duration>,
}

impl Default for SearchSettings {
  fn default() -> Self {
    Self {
      debounce: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
      pool_size: DEFAULT_POOL_SIZE,
      limit: DEFAULT_LIMIT,
      bonus: FieldBonus::default(),
      timeout: None,
    }
  }
}

impl SearchSettings {
  /// Load `search.*` settings, falling back to defaults for missing keys.
  pub fn load_app_config(config: &AppConfig) -> Result<Self> {
    let defaults = Self::default();
    let bonus = FieldBonus {
      title: config.get_uint("search.title_bonus")?.unwrap_or(defaults.bonus.title),
      category: config.get_uint("search.category_bonus")?.unwrap_or(defaults.bonus.category),
      excerpt: config.get_uint("search.excerpt_bonus")?.unwrap_or(defaults.bonus.excerpt),
    };
    Ok(Self {
      debounce: config.get_uint("search.debounce_ms")?
        .map(Duration::from_millis)
        .unwrap_or(defaults.debounce),
      pool_size: config.get_uint("search.pool_size")?.unwrap_or(defaults.pool_size),
      limit: config.get_uint("search.limit")?.unwrap_or(defaults.limit),
      bonus,
      timeout: config.get_uint("api.timeout_secs")?
        .filter(|secs: &u64| *secs > 0)
        .map(Duration::from_secs),
    })
  }
}
