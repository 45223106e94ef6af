//! Typed client for the news backend's REST API.
//!
//! All paths are relative to `api.base_url`, e.g. `http://localhost:8000/api/`.
//! Admin calls carry the current session token; a 401/403 from the backend
//! ends that session.

use log::*;

use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;

use reqwest::{Method, RequestBuilder, Response, StatusCode};
use url::Url;

use crate::error::*;
use crate::app::AppConfig;
use crate::auth::SessionService;
use crate::util::absolute_media_url;

mod articles;
pub use articles::*;

mod auth;

mod categories;

mod videos;

mod writers;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api/";

#[derive(Debug, Clone)]
pub struct ApiSettings {
  pub base_url: Url,
  /// Host that relative media paths are served from.
  pub media_base_url: String,
  pub timeout: Option<Duration>,
}

impl ApiSettings {
  pub fn new(base_url: &str) -> Result<Self> {
    let base_url = parse_base_url(base_url)?;
    let media_base_url = base_url.origin().ascii_serialization();
    Ok(Self {
      base_url,
      media_base_url,
      timeout: None,
    })
  }

  pub fn load_app_config(config: &AppConfig) -> Result<Self> {
    let base_url = config.get_str("api.base_url")?
      .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
    let mut settings = Self::new(&base_url)?;
    if let Some(media) = config.get_str("api.media_base_url")? {
      settings.media_base_url = media;
    }
    settings.timeout = config.get_uint("api.timeout_secs")?
      .filter(|secs: &u64| *secs > 0)
      .map(Duration::from_secs);
    Ok(settings)
  }
}

// `Url::join` drops the last path segment unless the base ends in '/'.
fn parse_base_url(base_url: &str) -> Result<Url> {
  if base_url.ends_with('/') {
    Ok(Url::parse(base_url)?)
  } else {
    Ok(Url::parse(&format!("{}/", base_url))?)
  }
}

#[derive(Debug, Clone)]
pub struct ApiClient {
  http: reqwest::Client,
  base_url: Url,
  media_base_url: String,
  session: SessionService,
}

impl ApiClient {
  pub fn new(settings: ApiSettings, session: SessionService) -> Result<Self> {
    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = settings.timeout {
      builder = builder.timeout(timeout);
    }
    Ok(Self {
      http: builder.build()?,
      base_url: settings.base_url,
      media_base_url: settings.media_base_url,
      session,
    })
  }

  pub fn session(&self) -> &SessionService {
    &self.session
  }

  /// Absolute URL for a media path returned by the backend.
  pub fn media_url(&self, path: &str) -> String {
    absolute_media_url(&self.media_base_url, path)
  }

  fn request(&self, method: Method, path: &str) -> Result<RequestBuilder> {
    let url = self.base_url.join(path)?;
    let mut req = self.http.request(method, url);
    if let Some(auth) = self.session.authorization() {
      req = req.header(reqwest::header::AUTHORIZATION, auth);
    }
    Ok(req)
  }

  async fn send<T: DeserializeOwned>(&self, req: RequestBuilder, endpoint: &str) -> Result<T> {
    let resp = self.check(req.send().await?, endpoint).await?;
    Ok(resp.json().await?)
  }

  async fn send_empty(&self, req: RequestBuilder, endpoint: &str) -> Result<()> {
    self.check(req.send().await?, endpoint).await?;
    Ok(())
  }

  async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
    let req = self.request(Method::GET, path)?;
    self.send(req, &format!("GET {}", path)).await
  }

  async fn write<B, T>(&self, method: Method, path: &str, body: &B) -> Result<T>
  where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
  {
    let endpoint = format!("{} {}", method, path);
    let req = self.request(method, path)?.json(body);
    self.send(req, &endpoint).await
  }

  async fn delete(&self, path: &str) -> Result<()> {
    let req = self.request(Method::DELETE, path)?;
    self.send_empty(req, &format!("DELETE {}", path)).await
  }

  /// Map non-2xx answers onto the crate error, ending the session on 401/403.
  async fn check(&self, resp: Response, endpoint: &str) -> Result<Response> {
    let status = resp.status();
    if status.is_success() {
      return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    debug!("{}: status={} body={}", endpoint, status, body);
    match status {
      StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
        warn!("{}: access denied, ending session", endpoint);
        self.session.end();
        Err(Error::Unauthorized(detail(&body).unwrap_or_else(|| status.to_string())))
      },
      StatusCode::NOT_FOUND => Err(Error::NotFound(endpoint.to_string())),
      StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
        let body = serde_json::from_str(&body).unwrap_or(serde_json::Value::String(body));
        Err(Error::UnprocessableEntity(body))
      },
      _ => Err(Error::Api {
        status: status.as_u16(),
        body,
      }),
    }
  }
}

// DRF puts human readable errors under `detail`.
fn detail(body: &str) -> Option<String> {
  let value: serde_json::Value = serde_json::from_str(body).ok()?;
  value.get("detail")?.as_str().map(String::from)
}
