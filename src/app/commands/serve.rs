use log::*;

use futures::future::try_join_all;

use actix_cors::Cors;
use actix_files::Files;
use actix_rt::System;
use actix_web::{dev::Server, middleware, App, HttpServer};

use crate::{
  error::*,
  app::*,
  api::{ApiClient, ApiSettings},
  auth::SessionService,
  forms::article::PageRequest,
  services::config_services,
};

pub const DEFAULT_LISTEN: &str = "127.0.0.1:8080";

pub fn execute(config: AppConfig) -> Result<()> {
  let servers = config.get_str_list("servers")?
    .unwrap_or_else(|| vec!["public".to_string()]);

  System::new().block_on(async move {
    let debug = config.get_bool("debug")?.unwrap_or(false);
    debug!("Debug = {:?}", debug);
    if debug {
      probe_backend(&config).await?;
    }

    let mut running = Vec::with_capacity(servers.len());
    for prefix in servers.iter() {
      debug!("Start server: {}", prefix);
      running.push(build_server(&config, prefix)?);
    }

    try_join_all(running).await?;
    info!("Stopped all servers.");
    Ok::<(), Error>(())
  })
}

// Fail early when the backend is unreachable.
async fn probe_backend(config: &AppConfig) -> Result<()> {
  let api = ApiClient::new(ApiSettings::load_app_config(config)?, SessionService::new())?;
  let articles = api.list_articles(&PageRequest::first(1)).await?;
  info!("Backend reachable, sample page has {} article(s)", articles.len());
  Ok(())
}

fn build_server(config: &AppConfig, prefix: &str) -> Result<Server> {
  // configure services
  info!("Serve.Services: configure services. prefix={}", prefix);
  let services = config_services(config, prefix)?;

  let cors = config.get_bool(&format!("{}.cors", prefix))?.unwrap_or(false);
  let static_dir = config.get_str("web.static_dir")?;
  if let Some(ref dir) = static_dir {
    info!("Serving static files from: {}", dir);
  }

  let mut server = HttpServer::new(move || {
    let mut app = App::new()
      .wrap(middleware::Condition::new(cors, Cors::permissive()))
      .wrap(middleware::Compress::default())
      .wrap(middleware::Logger::default())
      .configure(|web| services.web_config(web));

    // Static site last, so it never shadows `/api`.
    if let Some(ref dir) = static_dir {
      app = app.service(Files::new("/", dir).index_file("index.html"));
    }

    app
  });

  // workers
  let workers = match config.get_int(&format!("{}.workers", prefix))? {
    Some(workers) if workers > 0 => workers as usize,
    Some(workers) => {
      return Err(Error::BadRequest(format!("{}.workers must be > 0, got {}", prefix, workers)));
    },
    None => num_cpus::get(),
  };
  info!("Workers: {}", workers);
  server = server.workers(workers);

  // listen backlog
  if let Some(backlog) = config.get_uint::<u32>(&format!("{}.backlog", prefix))? {
    info!("Listen backlog: {}", backlog);
    server = server.backlog(backlog);
  }

  // setup binds.
  let listen = config.get_str(&format!("{}.listen", prefix))?
    .unwrap_or_else(|| DEFAULT_LISTEN.to_string());
  info!("{} services listening on: {}", prefix, listen);
  server = server.bind(listen)?;

  Ok(server.run())
}
