use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use tracing::{debug, warn};

use crate::{
    debounce::Debouncer,
    model::LocationCandidate,
    provider::WeatherApi,
    view::{Panel, SharedView, WeatherView, lock},
};

/// Shorter queries never reach the network.
pub const MIN_QUERY_CHARS: usize = 2;

#[derive(Debug, Clone, PartialEq)]
pub enum SuggestionOutcome {
    Show(Vec<LocationCandidate>),
    Hide,
}

/// Best-effort autocomplete lookups. Failures only ever hide the list.
#[derive(Debug, Clone)]
pub struct SuggestionFetcher {
    api: Arc<dyn WeatherApi>,
    limit: u8,
}

impl SuggestionFetcher {
    pub fn new(api: Arc<dyn WeatherApi>, limit: u8) -> Self {
        Self { api, limit }
    }

    pub async fn fetch(&self, query: &str) -> SuggestionOutcome {
        let query = query.trim();
        if query.chars().count() < MIN_QUERY_CHARS {
            return SuggestionOutcome::Hide;
        }

        match self.api.geocode(query, self.limit).await {
            Ok(found) if found.is_empty() => SuggestionOutcome::Hide,
            Ok(found) => {
                debug!(query, count = found.len(), "suggestions fetched");
                SuggestionOutcome::Show(found)
            }
            Err(err) => {
                warn!(query, error = %err, "error fetching suggestions");
                SuggestionOutcome::Hide
            }
        }
    }
}

/// The autocomplete list under the city input.
#[derive(Debug)]
pub struct SuggestionBox<V> {
    view: SharedView<V>,
    fetcher: SuggestionFetcher,
    debouncer: Debouncer,
    shown: Arc<Mutex<Vec<LocationCandidate>>>,
}

impl<V: WeatherView> SuggestionBox<V> {
    pub fn new(view: SharedView<V>, fetcher: SuggestionFetcher, quiet: Duration) -> Self {
        Self {
            view,
            fetcher,
            debouncer: Debouncer::new(quiet),
            shown: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// React to an edit of the input. The lookup runs once typing pauses.
    pub fn input_changed(&mut self) {
        let view = self.view.clone();
        let fetcher = self.fetcher.clone();
        let shown = self.shown.clone();

        self.debouncer.schedule(async move {
            let query = lock(&view).input();
            let outcome = fetcher.fetch(&query).await;

            let mut view = lock(&view);
            let mut shown = lock(&shown);
            match outcome {
                SuggestionOutcome::Show(found) => {
                    let labels: Vec<String> = found.iter().map(LocationCandidate::label).collect();
                    view.render_suggestions(&labels);
                    view.set_visible(Panel::Suggestions, true);
                    *shown = found;
                }
                SuggestionOutcome::Hide => {
                    view.set_visible(Panel::Suggestions, false);
                    shown.clear();
                }
            }
        });
    }

    /// Pick the `index`-th shown suggestion: fill the input and close the list.
    pub fn select(&mut self, index: usize) -> Option<LocationCandidate> {
        let picked = lock(&self.shown).get(index).cloned()?;
        {
            let mut view = lock(&self.view);
            view.set_input(&picked.input_text());
            view.set_visible(Panel::Suggestions, false);
        }
        Some(picked)
    }

    pub fn dismiss(&mut self) {
        lock(&self.view).set_visible(Panel::Suggestions, false);
    }

    pub fn candidates(&self) -> Vec<LocationCandidate> {
        lock(&self.shown).clone()
    }

    /// Wait for a pending lookup to finish.
    pub async fn settle(&mut self) {
        self.debouncer.settle().await;
    }

    /// Drop any pending lookup without rendering it.
    pub fn cancel(&mut self) {
        self.debouncer.cancel();
    }
}
