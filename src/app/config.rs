use serde::de::Deserialize;

use clap::ArgMatches;
use config::{Config, ConfigError, Value, File, FileFormat, Environment};

use crate::error::*;

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub conf: Config
}

impl AppConfig {
  pub fn new(config_file: Option<&str>) -> Result<Self> {
    // Load defaults
    let mut builder = Config::builder()
      .add_source(File::with_name("conf/default").required(false));

    if let Some(config_file) = config_file {
      builder = builder.add_source(File::with_name(config_file));
    } else {
      // Get RUN_MODE from environment
      let env = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
      builder = builder
        .add_source(File::with_name(&format!("conf/{}", env)).required(false))
        // Allow overrides from environment, e.g. APP__API__BASE_URL
        .add_source(Environment::with_prefix("app").separator("__"));
    }

    Ok(AppConfig {
      conf: builder.build()?,
    })
  }

  pub fn new_clap(cli: &ArgMatches) -> Result<Self> {
    Self::new(cli.get_one::<String>("config").map(String::as_str))
  }

  /// Build a config from an inline TOML document.
  pub fn from_toml(source: &str) -> Result<Self> {
    let conf = Config::builder()
      .add_source(File::from_str(source, FileFormat::Toml))
      .build()?;
    Ok(AppConfig { conf })
  }

  pub fn get<'de, T: Deserialize<'de>>(&self, key: &str) -> Result<Option<T>> {
    Ok(self.conf.get(key).map(Some).or_else(|e| {
      match e {
        ConfigError::NotFound(_) => Ok(None),
        err => Err(err),
      }
    })?)
  }

  pub fn get_str(&self, key: &str) -> Result<Option<String>> {
    let val = if let Some(val) = self.get::<Value>(key)? {
      Some(val.into_string()?)
    } else {
      None
    };
    Ok(val)
  }

  pub fn get_int(&self, key: &str) -> Result<Option<i64>> {
    let val = if let Some(val) = self.get::<Value>(key)? {
      Some(val.into_int()?)
    } else {
      None
    };
    Ok(val)
  }

  /// An integer that must fit `T`, e.g. a non-negative count or size.
  pub fn get_uint<T>(&self, key: &str) -> Result<Option<T>>
  where
    T: TryFrom<i64>,
  {
    match self.get_int(key)? {
      Some(val) => T::try_from(val)
        .map(Some)
        .map_err(|_| Error::BadRequest(format!("{} is out of range: {}", key, val))),
      None => Ok(None),
    }
  }

  pub fn get_bool(&self, key: &str) -> Result<Option<bool>> {
    let val = if let Some(val) = self.get::<Value>(key)? {
      Some(val.into_bool()?)
    } else {
      None
    };
    Ok(val)
  }

  pub fn get_array(&self, key: &str) -> Result<Option<Vec<Value>>> {
    let val = if let Some(val) = self.get::<Value>(key)? {
      Some(val.into_array()?)
    } else {
      None
    };
    Ok(val)
  }

  /// A list of strings, e.g. `servers = ["public"]`.
  pub fn get_str_list(&self, key: &str) -> Result<Option<Vec<String>>> {
    let val = if let Some(list) = self.get_array(key)? {
      let mut out = Vec::with_capacity(list.len());
      for item in list {
        out.push(item.into_string()?);
      }
      Some(out)
    } else {
      None
    };
    Ok(val)
  }
}
