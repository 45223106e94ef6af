use log::*;

use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};

use crate::{
  error::*,
  app::*,
  api::{ApiClient, ApiSettings, ArticlePool},
  auth::SessionService,
  models::SearchResult,
  search::{CandidateSource, Scorer, SearchOrchestrator, SearchSettings, SearchSnapshot, SearchState},
  util::{format_time_ago, local_now},
};

pub struct SearchArgs {
  pub query: String,
  pub limit: Option<usize>,
  pub interactive: bool,
}

pub fn execute(config: AppConfig, args: SearchArgs) -> Result<()> {
  let mut settings = SearchSettings::load_app_config(&config)?;
  if let Some(limit) = args.limit {
    settings.limit = limit;
  }
  let api = ApiClient::new(ApiSettings::load_app_config(&config)?, SessionService::new())?;
  let pool = ArticlePool::new(api, settings.pool_size);

  let rt = tokio::runtime::Runtime::new()?;
  if args.interactive {
    rt.block_on(interactive(pool, settings, args.query))
  } else {
    rt.block_on(once(pool, settings, &args.query))
  }
}

fn print_result(rank: usize, result: &SearchResult, marker: &str) {
  let article = &result.article;
  let time = format_time_ago(&article.publish_date, &article.publish_time, local_now());
  println!("{}{:>2}. [{:>3}] {} | {} | {}",
    marker, rank + 1, result.match_score, article.title, article.category.name, time);
}

async fn once(pool: ArticlePool, settings: SearchSettings, query: &str) -> Result<()> {
  if query.trim().is_empty() {
    return Err(Error::BadRequest("search query is empty".into()));
  }
  let candidates = pool.fetch_candidates().await?;
  debug!("Ranking {} candidates", candidates.len());
  let results = Scorer::new(settings.bonus).rank(query, candidates, settings.limit);
  if results.is_empty() {
    println!("कुनै परिणाम फेला परेन");
  }
  for (rank, result) in results.iter().enumerate() {
    print_result(rank, result, "  ");
  }
  Ok(())
}

fn render(snap: &SearchSnapshot) {
  match snap.state {
    SearchState::Idle => println!("-- closed"),
    SearchState::Typing => (),
    SearchState::Searching => println!("-- searching {:?}", snap.query),
    SearchState::NoResults => println!("-- no results for {:?}", snap.results_query),
    SearchState::Error => {
      println!("-- error: {}", snap.error.as_deref().unwrap_or("unknown"));
    },
    SearchState::ResultsReady => {
      println!("-- results for {:?}", snap.results_query);
      for (rank, result) in snap.results.iter().enumerate() {
        let marker = if rank as isize == snap.selected_index { "> " } else { "  " };
        print_result(rank, result, marker);
      }
    },
  }
}

/// Line driven search overlay: each line replaces the search box text.
async fn interactive(pool: ArticlePool, settings: SearchSettings, initial: String) -> Result<()> {
  let mut search = SearchOrchestrator::new(Arc::new(pool), settings);
  let mut rx = search.subscribe();
  if !initial.trim().is_empty() {
    search.input(&initial);
  }

  println!("Type to search. Commands: /next /prev /open /click N /close /quit");
  let mut lines = BufReader::new(tokio::io::stdin()).lines();
  loop {
    tokio::select! {
      line = lines.next_line() => {
        let line = match line? {
          Some(line) => line,
          None => break,
        };
        match line.trim() {
          "/quit" => break,
          "/next" => { search.select_next(); },
          "/prev" => { search.select_prev(); },
          "/close" => search.close(),
          "/open" => match search.activate() {
            Some(result) => println!("open article {}: {}", result.article.id, result.article.title),
            None => println!("-- nothing selected"),
          },
          cmd if cmd.starts_with("/click ") => {
            match cmd["/click ".len()..].trim().parse::<usize>() {
              Ok(n) if n > 0 => match search.click(n - 1) {
                Some(result) => println!("open article {}: {}", result.article.id, result.article.title),
                None => println!("-- no result {}", n),
              },
              _ => println!("-- usage: /click N"),
            }
          },
          _ => search.input(&line),
        }
      },
      changed = rx.changed() => {
        if changed.is_err() {
          break;
        }
        let snap = rx.borrow_and_update().clone();
        render(&snap);
      },
    }
  }
  info!("Interactive search finished");
  Ok(())
}
