//! enumland engine: HTTP query execution off the UI thread.
mod engine;
mod source;
mod types;

pub use engine::EngineHandle;
pub use source::{endpoint_url, DomainSource, EngineSettings, ReqwestDomainSource, DOMAIN_PATH};
pub use types::{EngineError, EngineEvent, FailureKind, QueryError, RequestId};
