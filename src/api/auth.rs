use log::*;

use reqwest::Method;

use crate::error::*;
use crate::forms::user::*;
use crate::models::User;

use super::ApiClient;

const INVALID_CREDENTIALS: &str = "अमान्य प्रयोगकर्ता नाम वा पासवर्ड";

impl ApiClient {
  /// Log in and start a session.
  pub async fn login(&self, username: &str, password: &str) -> Result<User> {
    let body = LoginUser {
      username: username.to_string(),
      password: password.to_string(),
    };
    let resp = self.request(Method::POST, "login/")?.json(&body).send().await?;

    if !resp.status().is_success() {
      let status = resp.status();
      let err: LoginError = resp.json().await.unwrap_or_default();
      let message = err.message().unwrap_or_else(|| INVALID_CREDENTIALS.to_string());
      warn!("Login rejected: status={} message={}", status, message);
      return Err(Error::Unauthorized(message));
    }

    let login: LoginResponse = resp.json().await?;
    match (login.message.as_str(), login.token, login.user) {
      (LOGIN_SUCCESSFUL, Some(token), Some(user)) => {
        self.session.start(token, user.clone());
        Ok(user)
      },
      _ => Err(Error::Unauthorized(INVALID_CREDENTIALS.to_string())),
    }
  }

  /// Ask the backend whether the session is still valid, ending it if not.
  pub async fn check_auth(&self) -> Result<bool> {
    if !self.session.is_authenticated() {
      return Ok(false);
    }
    match self.get::<CheckAuthResponse>("check-auth/").await {
      Ok(CheckAuthResponse { is_authenticated: true }) => Ok(true),
      Ok(_) => {
        info!("Backend reports session expired");
        self.session.end();
        Ok(false)
      },
      Err(err) if err.is_auth_failure() => {
        info!("Backend rejected the session token");
        Ok(false)
      },
      Err(err) => {
        error!("Auth check failed: {}", err);
        self.session.end();
        Ok(false)
      },
    }
  }

  /// Revoke the token on the backend, then end the local session.
  ///
  /// The session ends even when the backend call fails.
  pub async fn logout(&self) {
    if self.session.is_authenticated() {
      let sent = match self.request(Method::POST, "logout/") {
        Ok(req) => self.send_empty(req, "POST logout/").await,
        Err(err) => Err(err),
      };
      if let Err(err) = sent {
        warn!("Logout request failed: {}", err);
      }
    }
    self.session.end();
  }
}
