use log::*;

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::Value as JsonValue;

use jsonwebtoken::errors::Error as JwtError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
  // 401/403, the session has been torn down.
  #[error("unauthorized: {0}")]
  Unauthorized(String),

  // 404
  #[error("not found: {0}")]
  NotFound(String),

  // 400/422, form or backend validation.
  #[error("unprocessable entity: {0}")]
  UnprocessableEntity(JsonValue),

  // Any other non-2xx answer from the backend.
  #[error("api error: status={status} body={body}")]
  Api {
    status: u16,
    body: String,
  },

  #[error("bad request: {0}")]
  BadRequest(String),

  #[error("timed out: {0}")]
  Timeout(String),

  #[error("http error: {source}")]
  HttpError {
    #[from]
    source: reqwest::Error,
  },

  #[error("url error: {source}")]
  UrlError {
    #[from]
    source: url::ParseError,
  },

  #[error("Json error: {source}")]
  JsonError {
    #[from]
    source: serde_json::Error,
  },

  #[error("JWT error")]
  JwtError {
    #[from]
    source: JwtError,
  },

  #[error("std io error")]
  IOError {
    #[from]
    source: std::io::Error,
  },

  #[error("config error: {source}")]
  ConfigError {
    #[from]
    source: config::ConfigError,
  },

  #[error(transparent)]
  Other(#[from] anyhow::Error),
}

impl Error {
  /// Errors that should tear down the current admin session.
  pub fn is_auth_failure(&self) -> bool {
    matches!(self, Error::Unauthorized(_))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl ResponseError for Error {
  fn status_code(&self) -> StatusCode {
    match self {
      Error::Unauthorized(_) => StatusCode::UNAUTHORIZED,
      Error::NotFound(_) => StatusCode::NOT_FOUND,
      Error::UnprocessableEntity(_) => StatusCode::UNPROCESSABLE_ENTITY,
      Error::BadRequest(_) => StatusCode::BAD_REQUEST,
      Error::HttpError { ref source } if source.is_timeout() => StatusCode::GATEWAY_TIMEOUT,
      Error::Api { .. } | Error::HttpError { .. } => StatusCode::BAD_GATEWAY,
      Error::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
      _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    match self {
      Error::Unauthorized(ref message) => HttpResponse::Unauthorized().json(message),
      Error::NotFound(ref message) => HttpResponse::NotFound().json(message),
      Error::UnprocessableEntity(ref message) => {
        HttpResponse::build(StatusCode::UNPROCESSABLE_ENTITY).json(message)
      },
      Error::BadRequest(ref message) => {
        HttpResponse::build(StatusCode::BAD_REQUEST).json(message)
      },
      Error::Api { status, .. } => {
        error!("Backend answered with status {}", status);
        HttpResponse::build(StatusCode::BAD_GATEWAY).json("Backend error")
      },
      Error::HttpError { ref source } if source.is_timeout() => {
        warn!("Backend timed out: {}", source);
        HttpResponse::build(StatusCode::GATEWAY_TIMEOUT).json("Backend timed out")
      },
      Error::HttpError { ref source } => {
        error!("Backend unreachable: {}", source);
        HttpResponse::build(StatusCode::BAD_GATEWAY).json("Backend unreachable")
      },
      Error::Timeout(ref message) => {
        HttpResponse::build(StatusCode::GATEWAY_TIMEOUT).json(message)
      },
      ref err => {
        error!("InternalServerError: {:?}", err);
        HttpResponse::InternalServerError().json("Internal Server Error")
      },
    }
  }
}
