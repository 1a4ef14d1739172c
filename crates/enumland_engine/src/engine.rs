use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use enumland_logging::{enumland_debug, enumland_warn};

use crate::source::{DomainSource, EngineSettings, ReqwestDomainSource};
use crate::{EngineError, EngineEvent, RequestId};

enum EngineCommand {
    Lookup { request_id: RequestId, query: String },
}

/// Runs lookups on a background tokio runtime and reports completions.
///
/// Requests are never cancelled; every submitted lookup eventually yields
/// exactly one [`EngineEvent::QueryCompleted`], in completion order.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: &EngineSettings) -> Result<Self, EngineError> {
        let source = ReqwestDomainSource::new(settings)?;
        Self::with_source(Arc::new(source))
    }

    pub fn with_source(source: Arc<dyn DomainSource>) -> Result<Self, EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("enumland-engine")
            .enable_all()
            .build()?;

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let source = source.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(source.as_ref(), command, event_tx).await;
                });
            }
            enumland_debug!("engine command channel closed");
        });

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn submit(&self, request_id: RequestId, query: impl Into<String>) {
        let command = EngineCommand::Lookup {
            request_id,
            query: query.into(),
        };
        if self.cmd_tx.send(command).is_err() {
            enumland_warn!("engine thread gone; dropped request {}", request_id);
        }
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    source: &dyn DomainSource,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Lookup { request_id, query } => {
            let result = source.get_domains(&query).await;
            let _ = event_tx.send(EngineEvent::QueryCompleted {
                request_id,
                query,
                result,
            });
        }
    }
}
