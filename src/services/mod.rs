use log::*;

use std::collections::HashSet;

use actix_web::web;

use crate::error::*;
use crate::app::*;
use crate::api::{ApiClient, ApiSettings};
use crate::auth::SessionService;

mod news;
mod search;

type BoxService = Box<dyn Service>;

pub trait Service: ServiceClone + Send {
  /// Read this service's settings, e.g. `news.page_size`.
  fn load_app_config(&mut self, config: &AppConfig, prefix: &str) -> Result<()>;

  /// Register routes under `/api`.
  fn api_config(&self, web: &mut web::ServiceConfig);
}

pub trait ServiceClone {
  fn clone_box(&self) -> BoxService;
}

impl<T> ServiceClone for T
where
    T: 'static + Service + Clone,
{
  fn clone_box(&self) -> BoxService {
    Box::new(self.clone())
  }
}

impl Clone for BoxService {
  fn clone(&self) -> BoxService {
    self.clone_box()
  }
}

#[derive(Clone)]
pub struct Services {
  api: ApiClient,
  services: Vec<BoxService>,
}

impl Services {
  pub fn new(api: ApiClient) -> Services {
    Services {
      api,
      services: Vec::new(),
    }
  }

  fn build_service(name: &str, config: &AppConfig, prefix: &str) -> Result<BoxService> {
    let mut service: BoxService = match name {
      "News" => Box::new(news::new_factory()),
      "Search" => Box::new(search::new_factory()),
      _ => return Err(anyhow::anyhow!("Unknown Service: {}", name).into()),
    };
    service.load_app_config(config, prefix)?;
    Ok(service)
  }

  /// Build the services listed in `<prefix>.services`, News and Search by default.
  pub fn load_app_config(&mut self, config: &AppConfig, prefix: &str) -> Result<()> {
    let names = config.get_str_list(&format!("{}.services", prefix))?
      .unwrap_or_else(|| vec!["News".to_string(), "Search".to_string()]);
    let mut seen = HashSet::new();
    for name in names {
      if !seen.insert(name.clone()) {
        return Err(anyhow::anyhow!("Service {} listed twice for {}", name, prefix).into());
      }
      info!("{}: loading {}Service", prefix, name);
      self.services.push(Self::build_service(&name, config, prefix)?);
    }
    Ok(())
  }

  /// Shared backend client plus every service's routes, all under `/api`.
  pub fn web_config(&self, cfg: &mut web::ServiceConfig) {
    cfg
      .app_data(web::Data::new(self.api.clone()))
      .service(web::scope("/api").configure(|scope| {
        for service in &self.services {
          service.api_config(scope);
        }
      }));
  }
}

pub fn config_services(config: &AppConfig, prefix: &str) -> Result<Services> {
  // The public site never logs in, so its session stays empty.
  let api = ApiClient::new(ApiSettings::load_app_config(config)?, SessionService::new())?;
  let mut services = Services::new(api);
  services.load_app_config(config, prefix)?;
  Ok(services)
}
