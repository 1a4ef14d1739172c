//! enumland core: pure state machine, debouncer and render selection.
mod debounce;
mod effect;
mod msg;
mod query_client;
mod state;
mod update;
mod view_model;

pub use debounce::{Debouncer, DEFAULT_DEBOUNCE};
pub use effect::Effect;
pub use msg::Msg;
pub use query_client::{Completion, QueryClient, QueryClientSettings, RequestId};
pub use state::{AppState, RequestState};
pub use update::update;
pub use view_model::{AppViewModel, RenderState, INPUT_PLACEHOLDER};
