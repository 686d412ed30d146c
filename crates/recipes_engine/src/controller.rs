use recipes_core::ViewState;
use recipes_logging::{recipes_info, recipes_warn, with_request_context};

use crate::Fetcher;

/// Drives one fetch cycle against a `ViewState` in process: admission, network
/// call, settlement.
///
/// This is the direct way to run a fetch from async code that owns the state.
/// The UI instead goes through `update` and `EngineHandle`, which split the same
/// cycle across the message loop and the engine thread.
///
/// The network call is the only await point; the state is untouched while it runs.
pub struct FetchController<F> {
    fetcher: F,
}

impl<F: Fetcher> FetchController<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Returns false when the fetch was coalesced into one already in flight.
    pub async fn fetch_page(&self, state: &mut ViewState) -> bool {
        let Some(ticket) = state.begin_fetch() else {
            return false;
        };

        let result = self.fetcher.fetch_page(&ticket.request).await;
        with_request_context(ticket.request_id, || match &result {
            Ok(page) => recipes_info!(
                "settled with {} rows",
                page.data.as_ref().map_or(0, Vec::len)
            ),
            Err(err) => recipes_warn!("settled with {}: {}", err.kind, err.message),
        });
        state.settle_fetch(ticket.request_id, result.map_err(|err| err.to_string()));
        true
    }
}
