use enumland_core::{Effect, Msg};
use enumland_engine::{EngineEvent, EngineHandle};
use enumland_logging::{enumland_info, enumland_warn};

/// Executes core effects against the engine and turns engine events back
/// into messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle) -> Self {
        Self { engine }
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchDomains { request_id, query } => {
                    enumland_info!("FetchDomains request_id={} query={:?}", request_id, query);
                    self.engine.submit(request_id, query);
                }
            }
        }
    }

    /// Collect every completion that arrived since the last call.
    pub fn drain(&self) -> Vec<Msg> {
        let mut inbox = Vec::new();
        while let Some(event) = self.engine.try_recv() {
            inbox.push(map_event(event));
        }
        inbox
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::QueryCompleted {
            request_id,
            query,
            result,
        } => {
            let result = result.map_err(|err| {
                enumland_warn!("Request {} failed ({}): {}", request_id, err.kind, err);
                err.message
            });
            Msg::QueryCompleted {
                request_id,
                query,
                result,
            }
        }
    }
}
