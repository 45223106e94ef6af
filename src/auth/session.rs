use log::*;

use std::sync::{Arc, PoisonError, RwLock};

use chrono::{DateTime, Utc};

use crate::models::User;

use super::jwt::TokenExpiry;

const TOKEN_PREFIX: &str = "Token ";

/// An authenticated admin session.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
  pub token: String,
  pub user: User,
  pub started_at: DateTime<Utc>,
}

/// Holds the current admin session.
///
/// Started by a successful login, ended by logout or by the backend
/// rejecting the token. Clones share the same session.
#[derive(Debug, Clone, Default)]
pub struct SessionService {
  inner: Arc<RwLock<Option<Session>>>,
}

impl SessionService {
  pub fn new() -> Self {
    Default::default()
  }

  pub fn start(&self, token: String, user: User) {
    info!("Session started for {}", user.username);
    let session = Session {
      token,
      user,
      started_at: Utc::now(),
    };
    *self.inner.write().unwrap_or_else(PoisonError::into_inner) = Some(session);
  }

  pub fn end(&self) {
    let previous = self.inner.write().unwrap_or_else(PoisonError::into_inner).take();
    if let Some(session) = previous {
      info!("Session ended for {}", session.user.username);
    }
  }

  /// The live session, if any. An expired token ends the session.
  pub fn current(&self) -> Option<Session> {
    let session = self.inner.read().unwrap_or_else(PoisonError::into_inner).clone()?;
    if session.token.as_str().is_expired_at(Utc::now()) {
      debug!("Session token expired");
      self.end();
      return None;
    }
    Some(session)
  }

  pub fn is_authenticated(&self) -> bool {
    self.current().is_some()
  }

  pub fn user(&self) -> Option<User> {
    self.current().map(|session| session.user)
  }

  /// Value for the `Authorization` header.
  pub fn authorization(&self) -> Option<String> {
    self.current().map(|session| format!("{}{}", TOKEN_PREFIX, session.token))
  }
}
