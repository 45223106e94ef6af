use log::*;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{sleep, timeout};

use crate::error::*;
use crate::models::{Article, SearchResult};

use super::{Scorer, SearchSettings};

/// Where the search overlay gets its candidate pool from.
#[async_trait]
pub trait CandidateSource: Send + Sync + 'static {
  async fn fetch_candidates(&self) -> Result<Vec<Article>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
  Idle,
  /// Debounce window open.
  Typing,
  /// Request in flight.
  Searching,
  ResultsReady,
  NoResults,
  Error,
}

/// What the overlay shows at one point in time.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchSnapshot {
  pub state: SearchState,
  /// The text currently in the search box.
  pub query: String,
  /// The query `results` were ranked against.
  pub results_query: String,
  pub results: Vec<SearchResult>,
  /// -1 when nothing is selected.
  pub selected_index: isize,
  pub error: Option<String>,
}

impl Default for SearchSnapshot {
  fn default() -> Self {
    Self {
      state: SearchState::Idle,
      query: String::new(),
      results_query: String::new(),
      results: Vec::new(),
      selected_index: -1,
      error: None,
    }
  }
}

impl SearchSnapshot {
  pub fn selected(&self) -> Option<&SearchResult> {
    if self.selected_index < 0 {
      return None;
    }
    self.results.get(self.selected_index as usize)
  }
}

/// Shared by the debounce timer and the request tasks it spawns.
struct Dispatch<S> {
  source: Arc<S>,
  scorer: Scorer,
  settings: SearchSettings,
  state: watch::Sender<SearchSnapshot>,
  // Sequence number of the most recently issued request.
  latest: AtomicU64,
}

impl<S: CandidateSource> Dispatch<S> {
  fn invalidate(&self) -> u64 {
    self.latest.fetch_add(1, Ordering::SeqCst) + 1
  }

  fn is_latest(&self, seq: u64) -> bool {
    self.latest.load(Ordering::SeqCst) == seq
  }

  fn issue(this: &Arc<Self>, query: String) {
    let seq = this.invalidate();
    debug!("search: issue request seq={} query={:?}", seq, query);
    this.state.send_modify(|snap| {
      snap.state = SearchState::Searching;
    });
    let dispatch = this.clone();
    tokio::spawn(async move {
      dispatch.run(seq, query).await;
    });
  }

  async fn fetch(&self) -> Result<Vec<Article>> {
    match self.settings.timeout {
      Some(limit) => {
        match timeout(limit, self.source.fetch_candidates()).await {
          Ok(res) => res,
          Err(_) => Err(Error::Timeout(format!("search request exceeded {:?}", limit))),
        }
      },
      None => self.source.fetch_candidates().await,
    }
  }

  async fn run(&self, seq: u64, query: String) {
    let fetched = self.fetch().await;

    let applied = self.state.send_if_modified(|snap| {
      // Checked under the channel lock so `close` cannot interleave.
      if !self.is_latest(seq) {
        return false;
      }
      match fetched {
        Ok(articles) => {
          let results = self.scorer.rank(&query, articles, self.settings.limit);
          snap.state = if results.is_empty() {
            SearchState::NoResults
          } else {
            SearchState::ResultsReady
          };
          snap.results = results;
          snap.error = None;
        },
        Err(ref err) => {
          error!("Search failed: {}", err);
          snap.state = SearchState::Error;
          snap.results = Vec::new();
          snap.error = Some(err.to_string());
        },
      }
      snap.results_query = query.clone();
      snap.selected_index = -1;
      true
    });

    if !applied {
      debug!("search: discard stale response seq={} query={:?}", seq, query);
    }
  }
}

/// Debounced, race-free driver for the search overlay.
///
/// Every keystroke restarts the debounce timer. When it fires a request is
/// issued with the next sequence number, and only the response of the latest
/// issued request may update the snapshot.
pub struct SearchOrchestrator<S: CandidateSource> {
  dispatch: Arc<Dispatch<S>>,
  pending: Option<JoinHandle<()>>,
}

impl<S: CandidateSource> SearchOrchestrator<S> {
  pub fn new(source: Arc<S>, settings: SearchSettings) -> Self {
    let (state, _) = watch::channel(SearchSnapshot::default());
    Self {
      dispatch: Arc::new(Dispatch {
        source,
        scorer: Scorer::new(settings.bonus),
        settings,
        state,
        latest: AtomicU64::new(0),
      }),
      pending: None,
    }
  }

  pub fn subscribe(&self) -> watch::Receiver<SearchSnapshot> {
    self.dispatch.state.subscribe()
  }

  pub fn snapshot(&self) -> SearchSnapshot {
    self.dispatch.state.borrow().clone()
  }

  fn cancel_pending(&mut self) {
    if let Some(timer) = self.pending.take() {
      timer.abort();
    }
  }

  /// The search box now contains `query`.
  pub fn input(&mut self, query: &str) {
    self.cancel_pending();

    if query.trim().is_empty() {
      self.reset(query);
      return;
    }

    self.dispatch.state.send_modify(|snap| {
      snap.state = SearchState::Typing;
      snap.query = query.to_string();
    });

    let dispatch = self.dispatch.clone();
    let query = query.to_string();
    let debounce = dispatch.settings.debounce;
    self.pending = Some(tokio::spawn(async move {
      sleep(debounce).await;
      Dispatch::issue(&dispatch, query);
    }));
  }

  /// Close the overlay. Responses still in flight are ignored.
  pub fn close(&mut self) {
    self.cancel_pending();
    self.reset("");
  }

  fn reset(&self, query: &str) {
    self.dispatch.invalidate();
    self.dispatch.state.send_modify(|snap| {
      *snap = SearchSnapshot {
        query: query.to_string(),
        ..Default::default()
      };
    });
  }

  /// Arrow down: move the selection towards the last result.
  pub fn select_next(&self) -> isize {
    self.move_selection(|idx, len| if idx < len - 1 { idx + 1 } else { idx })
  }

  /// Arrow up: move the selection back, past the first result to none.
  pub fn select_prev(&self) -> isize {
    self.move_selection(|idx, _| if idx > 0 { idx - 1 } else { -1 })
  }

  fn move_selection<F>(&self, step: F) -> isize
  where
    F: Fn(isize, isize) -> isize,
  {
    let mut selected = -1;
    self.dispatch.state.send_if_modified(|snap| {
      if snap.state != SearchState::ResultsReady {
        selected = snap.selected_index;
        return false;
      }
      let next = step(snap.selected_index, snap.results.len() as isize);
      selected = next;
      if next == snap.selected_index {
        return false;
      }
      snap.selected_index = next;
      true
    });
    selected
  }

  /// Enter: open the selected result, closing the overlay.
  pub fn activate(&mut self) -> Option<SearchResult> {
    let chosen = self.snapshot().selected().cloned();
    if chosen.is_some() {
      self.close();
    }
    chosen
  }

  /// Pointer click on the result at `index`.
  pub fn click(&mut self, index: usize) -> Option<SearchResult> {
    let chosen = {
      let snap = self.dispatch.state.borrow();
      if snap.state == SearchState::ResultsReady {
        snap.results.get(index).cloned()
      } else {
        None
      }
    };
    if chosen.is_some() {
      self.close();
    }
    chosen
  }
}

impl<S: CandidateSource> Drop for SearchOrchestrator<S> {
  fn drop(&mut self) {
    self.cancel_pending();
  }
}
