#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Issue one GET for the committed query.
    FetchDomains {
        request_id: crate::RequestId,
        query: String,
    },
}
