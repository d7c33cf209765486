use crate::client::ProfileSource;
use crate::error::FetchError;
use crate::fetcher::{self, FetchOptions};
use crate::types::{Profile, ProfileLookup, Repository};

pub const DEFAULT_DISPLAY_LIMIT: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Error,
    Success,
}

/// Identifies one call to [`SearchSession::begin_search`]. Only the ticket of
/// the most recent search may complete it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchTicket(u64);

/// State behind the search view: the last handle searched, how that search
/// went, and whether the repository list is expanded.
#[derive(Debug)]
pub struct SearchSession {
    handle: String,
    status: FetchStatus,
    error: Option<String>,
    profile: Option<Profile>,
    repositories: Vec<Repository>,
    show_all: bool,
    generation: u64,
    display_limit: usize,
    options: FetchOptions,
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::new(DEFAULT_DISPLAY_LIMIT, FetchOptions::default())
    }
}

impl SearchSession {
    pub fn new(display_limit: usize, options: FetchOptions) -> Self {
        SearchSession {
            handle: String::new(),
            status: FetchStatus::Idle,
            error: None,
            profile: None,
            repositories: Vec::new(),
            show_all: false,
            generation: 0,
            display_limit,
            options,
        }
    }

    /// Runs a whole search against `source`. Returns `false` without touching
    /// any state when `handle` is empty.
    pub fn start_search(&mut self, source: &dyn ProfileSource, handle: &str) -> bool {
        let Some(ticket) = self.begin_search(handle) else {
            return false;
        };
        let result = fetcher::fetch_profile(source, handle, self.options);
        self.complete_search(ticket, result)
    }

    /// Moves to `Loading` and clears everything from the previous search.
    pub fn begin_search(&mut self, handle: &str) -> Option<SearchTicket> {
        if handle.is_empty() {
            return None;
        }
        self.generation += 1;
        self.handle = handle.to_string();
        self.status = FetchStatus::Loading;
        self.error = None;
        self.profile = None;
        self.repositories.clear();
        self.show_all = false;
        tracing::debug!(handle, generation = self.generation, "search started");
        Some(SearchTicket(self.generation))
    }

    /// Stores the outcome of a search. Results from a superseded search are
    /// dropped and `false` is returned.
    pub fn complete_search(
        &mut self,
        ticket: SearchTicket,
        result: Result<ProfileLookup, FetchError>,
    ) -> bool {
        if ticket.0 != self.generation {
            tracing::debug!(
                stale = ticket.0,
                current = self.generation,
                "discarding superseded search result"
            );
            return false;
        }

        match result {
            Ok(lookup) => {
                tracing::info!(
                    handle = %self.handle,
                    repositories = lookup.repositories.len(),
                    "search succeeded"
                );
                self.profile = Some(lookup.profile);
                self.repositories = lookup.repositories;
                self.status = FetchStatus::Success;
            }
            Err(e) => {
                tracing::info!(handle = %self.handle, error = %e, "search failed");
                self.error = Some(e.to_string());
                self.status = FetchStatus::Error;
            }
        }
        true
    }

    pub fn toggle_show_all(&mut self) {
        self.show_all = !self.show_all;
    }

    /// Every repository when expanded, otherwise the first few in received order.
    pub fn displayed_repositories(&self) -> &[Repository] {
        if self.show_all {
            &self.repositories
        } else {
            let end = self.repositories.len().min(self.display_limit);
            &self.repositories[..end]
        }
    }

    pub fn has_more(&self) -> bool {
        self.repositories.len() > self.display_limit
    }

    /// Caption for the expand/collapse control, absent when everything fits.
    pub fn toggle_label(&self) -> Option<String> {
        if !self.has_more() {
            None
        } else if self.show_all {
            Some("Show Less".to_string())
        } else {
            Some(format!("Show All ({})", self.repositories.len()))
        }
    }

    pub fn handle(&self) -> &str {
        &self.handle
    }

    pub fn status(&self) -> FetchStatus {
        self.status
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    pub fn repositories(&self) -> &[Repository] {
        &self.repositories
    }

    #[cfg(test)]
    pub fn show_all(&self) -> bool {
        self.show_all
    }

    pub fn fetch_options(&self) -> FetchOptions {
        self.options
    }
}
