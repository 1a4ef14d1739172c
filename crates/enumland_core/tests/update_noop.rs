use enumland_core::{update, AppState, Msg, QueryClient};

#[test]
fn update_is_noop() {
    let state = AppState::new();
    let mut client = QueryClient::default();
    let (next, effects) = update(state.clone(), Msg::NoOp, &mut client);

    assert_eq!(state, next);
    assert!(effects.is_empty());
    assert_eq!(client.in_flight(), None);
}
