use recipes_core::{Effect, Msg};
use recipes_engine::{EngineEvent, EngineHandle, FetchSettings};
use recipes_logging::{recipes_info, recipes_warn, with_request_context};

/// Forwards core effects to the engine and turns its events back into messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(settings: FetchSettings) -> std::io::Result<Self> {
        recipes_info!("Engine targets {}", settings.base_url);
        Ok(Self {
            engine: EngineHandle::new(settings)?,
        })
    }

    pub fn execute(&self, effects: Vec<Effect>) {
        for effect in effects {
            match &effect {
                Effect::FetchPage {
                    request_id,
                    request,
                } => with_request_context(*request_id, || {
                    recipes_info!(
                        "FetchPage mode={:?} page={} limit={}",
                        request.mode,
                        request.page,
                        request.limit
                    )
                }),
                Effect::FetchStats => recipes_info!("FetchStats"),
            }
            self.engine.execute(effect);
        }
    }

    /// Everything the engine has settled since the last call.
    pub fn drain_events(&self) -> Vec<Msg> {
        let mut inbox = Vec::new();
        while let Some(event) = self.engine.try_recv() {
            if let Some(msg) = map_event(event) {
                inbox.push(msg);
            }
        }
        inbox
    }
}

fn map_event(event: EngineEvent) -> Option<Msg> {
    match event {
        EngineEvent::PageSettled { request_id, result } => Some(Msg::FetchSettled {
            request_id,
            outcome: result.map_err(|err| err.reason().to_string()),
        }),
        EngineEvent::StatsSettled(Ok(statistics)) => Some(Msg::StatsLoaded(statistics)),
        EngineEvent::StatsSettled(Err(err)) => {
            recipes_warn!("Statistics unavailable: {} ({})", err.reason(), err.kind);
            None
        }
    }
}
