use crate::{AppState, Completion, Effect, Msg, QueryClient, RequestState};

/// Pure update function: applies a message to state and returns any effects.
///
/// `client` is the session's request bookkeeping; it is passed in rather
/// than owned by the state so a single instance outlives every view.
pub fn update(mut state: AppState, msg: Msg, client: &mut QueryClient) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::InputChanged { value, at } => {
            state.debouncer_mut().input(value.clone(), at);
            state.set_input(value);
            Vec::new()
        }
        Msg::Tick(now) => match state.debouncer_mut().poll(now) {
            Some(query) => commit_query(&mut state, query, client),
            None => Vec::new(),
        },
        Msg::QueryCompleted {
            request_id,
            query,
            result,
        } => {
            match client.complete(request_id, &query, result) {
                Completion::Current(Ok(domains)) => {
                    state.set_request(RequestState::Succeeded { query, domains });
                }
                Completion::Current(Err(message)) => {
                    state.set_request(RequestState::Failed { query, message });
                }
                Completion::Stale => {}
            }
            Vec::new()
        }
        Msg::ResultsScrolled(delta) => {
            state.scroll(delta);
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn commit_query(state: &mut AppState, query: String, client: &mut QueryClient) -> Vec<Effect> {
    if query.is_empty() {
        client.abandon();
        state.set_request(RequestState::Idle);
        return Vec::new();
    }

    if let Some(domains) = client.cached(&query) {
        let domains = domains.to_vec();
        client.abandon();
        state.set_request(RequestState::Succeeded { query, domains });
        return Vec::new();
    }

    let request_id = client.begin(&query);
    state.set_request(RequestState::Pending {
        query: query.clone(),
    });
    vec![Effect::FetchDomains { request_id, query }]
}
