use thiserror::Error;
use tracing::debug;

use crate::model::WeatherRecord;
use crate::provider::{NotFoundError, WeatherProvider};

/// The two user-visible failure kinds. Everything that can go wrong
/// during a search collapses into one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WidgetError {
    #[error("Please Enter a Valid Location.")]
    EmptyInput,
    #[error("City Not Found Please Try Again.")]
    LookupFailed,
}

/// Proof that a search was started; must be handed back to
/// [`WeatherWidget::finish_search`]. Carries the sequence number used
/// to discard completions that a newer submission has superseded.
#[derive(Debug)]
pub struct SearchTicket {
    seq: u64,
    location: String,
}

impl SearchTicket {
    /// The trimmed location this search was issued for.
    pub fn location(&self) -> &str {
        &self.location
    }
}

/// Weather search widget: one text input, one submit, one result.
///
/// Holds the transient UI state (input text, loading flag, last result,
/// last error) and drives a [`WeatherProvider`] on submit. `weather` and
/// `error` are mutually exclusive; at most one is set at any time.
///
/// Overlapping searches are resolved by submission order: each submit
/// bumps a sequence number, and a completion whose ticket is stale is
/// dropped on the floor. The latest submission wins regardless of which
/// network call settles last.
#[derive(Debug)]
pub struct WeatherWidget {
    provider: Box<dyn WeatherProvider>,
    location: String,
    weather: Option<WeatherRecord>,
    error: Option<WidgetError>,
    is_loading: bool,
    seq: u64,
}

impl WeatherWidget {
    pub fn new(provider: Box<dyn WeatherProvider>) -> Self {
        Self {
            provider,
            location: String::new(),
            weather: None,
            error: None,
            is_loading: false,
            seq: 0,
        }
    }

    /// Replace the input text. Called on every keystroke by the
    /// presentation layer; does not touch the rest of the state.
    pub fn set_location(&mut self, text: impl Into<String>) {
        self.location = text.into();
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn weather(&self) -> Option<&WeatherRecord> {
        self.weather.as_ref()
    }

    pub fn error(&self) -> Option<WidgetError> {
        self.error
    }

    /// True strictly between submit and fetch completion.
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Handle a submit. With blank (post-trim) input, fail immediately
    /// with [`WidgetError::EmptyInput`], clear the weather and issue no
    /// fetch (returns `None`). Otherwise enter the loading state, clear
    /// the previous error and return a ticket for the fetch.
    pub fn begin_search(&mut self) -> Option<SearchTicket> {
        let trimmed = self.location.trim();
        if trimmed.is_empty() {
            self.error = Some(WidgetError::EmptyInput);
            self.weather = None;
            return None;
        }

        self.seq += 1;
        self.is_loading = true;
        self.error = None;

        Some(SearchTicket { seq: self.seq, location: trimmed.to_string() })
    }

    /// Apply the outcome of a fetch started by [`Self::begin_search`].
    ///
    /// Stale tickets (a newer search has begun since) are discarded
    /// without touching any state.
    pub fn finish_search(
        &mut self,
        ticket: SearchTicket,
        result: Result<WeatherRecord, NotFoundError>,
    ) {
        if ticket.seq != self.seq {
            debug!(
                stale = ticket.seq,
                current = self.seq,
                "discarding superseded search result"
            );
            return;
        }

        self.is_loading = false;
        match result {
            Ok(record) => {
                self.weather = Some(record);
                self.error = None;
            }
            Err(NotFoundError) => {
                self.error = Some(WidgetError::LookupFailed);
                self.weather = None;
            }
        }
    }

    /// Run one full submit-fetch-apply cycle against the provider.
    pub async fn search(&mut self) {
        let Some(ticket) = self.begin_search() else {
            return;
        };

        let result = self.provider.current(ticket.location()).await;
        self.finish_search(ticket, result);
    }
}
