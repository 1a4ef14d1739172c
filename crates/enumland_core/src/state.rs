use std::time::Duration;

use crate::view_model::{AppViewModel, RenderState};
use crate::Debouncer;

/// Request state for the committed query.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestState {
    /// Nothing committed; no request is made for an empty query.
    #[default]
    Idle,
    Pending {
        query: String,
    },
    Failed {
        query: String,
        message: String,
    },
    Succeeded {
        query: String,
        domains: Vec<String>,
    },
}

impl RequestState {
    pub fn query(&self) -> Option<&str> {
        match self {
            RequestState::Idle => None,
            RequestState::Pending { query }
            | RequestState::Failed { query, .. }
            | RequestState::Succeeded { query, .. } => Some(query.as_str()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Pending { .. })
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            RequestState::Failed { message, .. } => Some(message.as_str()),
            _ => None,
        }
    }

    pub fn data(&self) -> Option<&[String]> {
        match self {
            RequestState::Succeeded { domains, .. } => Some(domains.as_slice()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    input: String,
    debouncer: Debouncer,
    request: RequestState,
    selected: Option<usize>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_debounce(window: Duration) -> Self {
        Self {
            debouncer: Debouncer::new(window),
            ..Self::default()
        }
    }

    pub fn view(&self) -> AppViewModel {
        let render = RenderState::select(
            self.request.is_loading(),
            self.request.error(),
            self.request.data(),
        );
        AppViewModel {
            input: self.input.clone(),
            placeholder_visible: self.input.is_empty(),
            render,
            selected: self.selected,
            dirty: self.dirty,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn committed_query(&self) -> &str {
        self.debouncer.committed()
    }

    pub fn request(&self) -> &RequestState {
        &self.request
    }

    /// Returns whether a render is due and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn debouncer_mut(&mut self) -> &mut Debouncer {
        &mut self.debouncer
    }

    pub(crate) fn set_input(&mut self, value: String) {
        if self.input != value {
            self.input = value;
            self.dirty = true;
        }
    }

    pub(crate) fn set_request(&mut self, request: RequestState) {
        if self.request != request {
            self.selected = match request.data() {
                Some(domains) if !domains.is_empty() => Some(0),
                _ => None,
            };
            self.request = request;
            self.dirty = true;
        }
    }

    pub(crate) fn scroll(&mut self, delta: i32) {
        let len = self.request.data().map_or(0, <[String]>::len);
        let Some(current) = self.selected else {
            return;
        };
        if len == 0 {
            return;
        }
        let last = (len - 1) as i64;
        let next = (current as i64 + i64::from(delta)).clamp(0, last) as usize;
        if next != current {
            self.selected = Some(next);
            self.dirty = true;
        }
    }
}
