use std::sync::{mpsc, Arc};
use std::thread;

use recipes_core::Effect;
use recipes_logging::{recipes_debug, recipes_warn, with_request_context};

use crate::fetch::{FetchSettings, Fetcher, ReqwestFetcher};
use crate::EngineEvent;

/// Runs fetch effects on a background tokio runtime and reports settlements.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<Effect>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: FetchSettings) -> std::io::Result<Self> {
        Self::with_fetcher(Arc::new(ReqwestFetcher::new(settings)))
    }

    pub fn with_fetcher(fetcher: Arc<dyn Fetcher>) -> std::io::Result<Self> {
        let (cmd_tx, cmd_rx) = mpsc::channel::<Effect>();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Runtime::new()?;

        thread::spawn(move || {
            while let Ok(effect) = cmd_rx.recv() {
                let fetcher = fetcher.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_effect(fetcher.as_ref(), effect, event_tx).await;
                });
            }
        });

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn execute(&self, effect: Effect) {
        if self.cmd_tx.send(effect).is_err() {
            recipes_warn!("Engine thread is gone; effect dropped");
        }
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }
}

async fn handle_effect(fetcher: &dyn Fetcher, effect: Effect, event_tx: mpsc::Sender<EngineEvent>) {
    match effect {
        Effect::FetchPage {
            request_id,
            request,
        } => {
            with_request_context(request_id, || {
                recipes_debug!("fetching {:?} page {}", request.mode, request.page)
            });
            let result = fetcher.fetch_page(&request).await;
            if let Err(err) = &result {
                with_request_context(request_id, || recipes_warn!("fetch failed: {}", err.kind));
            }
            let _ = event_tx.send(EngineEvent::PageSettled { request_id, result });
        }
        Effect::FetchStats => {
            let result = fetcher.fetch_stats().await;
            let _ = event_tx.send(EngineEvent::StatsSettled(result));
        }
    }
}
