use std::time::Instant;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the search box (raw, not yet debounced).
    InputChanged { value: String, at: Instant },
    /// UI loop tick; drives the debouncer.
    Tick(Instant),
    /// Engine completion for a request.
    QueryCompleted {
        request_id: crate::RequestId,
        query: String,
        result: Result<Vec<String>, String>,
    },
    /// User moved the cursor over the result rows.
    ResultsScrolled(i32),
    /// Fallback for placeholder wiring.
    NoOp,
}
