use std::collections::HashMap;

pub type RequestId = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryClientSettings {
    /// Reuse successful results for a query seen earlier in this session.
    pub cache_results: bool,
}

impl Default for QueryClientSettings {
    fn default() -> Self {
        Self {
            cache_results: true,
        }
    }
}

/// Outcome of handing a finished request back to the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// The request is the latest one issued; its result should be shown.
    Current(Result<Vec<String>, String>),
    /// A newer request superseded this one; drop the result.
    Stale,
}

/// Request bookkeeping shared by the whole session.
///
/// Constructed once at startup and handed to [`crate::update`] explicitly.
/// Only the most recently issued request may drive the view; anything that
/// finishes after being superseded is reported as [`Completion::Stale`].
#[derive(Debug, Clone, Default)]
pub struct QueryClient {
    settings: QueryClientSettings,
    next_id: RequestId,
    latest: Option<(RequestId, String)>,
    cache: HashMap<String, Vec<String>>,
}

impl QueryClient {
    pub fn new(settings: QueryClientSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    /// Allocate an id for a new request and mark it as the latest.
    pub fn begin(&mut self, query: &str) -> RequestId {
        self.next_id += 1;
        self.latest = Some((self.next_id, query.to_string()));
        self.next_id
    }

    /// Record the outcome of `request_id`.
    ///
    /// Successful results are sorted here, so both the returned result and
    /// the cached copy are in ascending order.
    pub fn complete(
        &mut self,
        request_id: RequestId,
        query: &str,
        mut result: Result<Vec<String>, String>,
    ) -> Completion {
        if let Ok(domains) = &mut result {
            domains.sort();
            if self.settings.cache_results {
                self.cache.insert(query.to_string(), domains.clone());
            }
        }

        match &self.latest {
            Some((latest_id, _)) if *latest_id == request_id => {
                self.latest = None;
                Completion::Current(result)
            }
            _ => Completion::Stale,
        }
    }

    /// Forget the in-flight request, so any pending completion turns stale.
    pub fn abandon(&mut self) {
        self.latest = None;
    }

    pub fn cached(&self, query: &str) -> Option<&[String]> {
        if !self.settings.cache_results {
            return None;
        }
        self.cache.get(query).map(Vec::as_slice)
    }

    pub fn in_flight(&self) -> Option<(RequestId, &str)> {
        self.latest.as_ref().map(|(id, query)| (*id, query.as_str()))
    }

    pub fn clear(&mut self) {
        self.latest = None;
        self.cache.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn domains(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn ids_are_monotonic() {
        let mut client = QueryClient::default();
        let first = client.begin("a.com");
        let second = client.begin("b.com");
        assert!(second > first);
        assert_eq!(client.in_flight(), Some((second, "b.com")));
    }

    #[test]
    fn superseded_request_is_stale_but_still_cached() {
        let mut client = QueryClient::new(QueryClientSettings::default());
        let old = client.begin("a.com");
        let new = client.begin("b.com");

        let stale = client.complete(old, "a.com", Ok(domains(&["x.a.com"])));
        assert_eq!(stale, Completion::Stale);
        assert_eq!(client.cached("a.com"), Some(&domains(&["x.a.com"])[..]));

        let current = client.complete(new, "b.com", Ok(domains(&["y.b.com"])));
        assert_eq!(current, Completion::Current(Ok(domains(&["y.b.com"]))));
        assert_eq!(client.in_flight(), None);
    }

    #[test]
    fn results_are_sorted_before_caching() {
        let mut client = QueryClient::default();
        let id = client.begin("x.com");
        let outcome = client.complete(id, "x.com", Ok(domains(&["b.x.com", "a.x.com"])));
        assert_eq!(
            outcome,
            Completion::Current(Ok(domains(&["a.x.com", "b.x.com"])))
        );
        assert_eq!(
            client.cached("x.com"),
            Some(&domains(&["a.x.com", "b.x.com"])[..])
        );
    }

    #[test]
    fn failures_are_never_cached() {
        let mut client = QueryClient::default();
        let id = client.begin("a.com");
        let outcome = client.complete(id, "a.com", Err("boom".to_string()));
        assert_eq!(outcome, Completion::Current(Err("boom".to_string())));
        assert_eq!(client.cached("a.com"), None);
    }

    #[test]
    fn cache_can_be_disabled() {
        let mut client = QueryClient::new(QueryClientSettings {
            cache_results: false,
        });
        let id = client.begin("a.com");
        client.complete(id, "a.com", Ok(domains(&["x.a.com"])));
        assert_eq!(client.cached("a.com"), None);
    }

    #[test]
    fn clear_forgets_cache_and_in_flight() {
        let mut client = QueryClient::default();
        let done = client.begin("a.com");
        client.complete(done, "a.com", Ok(domains(&["x.a.com"])));
        let pending = client.begin("b.com");

        client.clear();

        assert_eq!(client.cached("a.com"), None);
        assert_eq!(client.in_flight(), None);
        assert_eq!(
            client.complete(pending, "b.com", Ok(Vec::new())),
            Completion::Stale
        );
    }

    #[test]
    fn abandoned_request_completes_stale() {
        let mut client = QueryClient::default();
        let id = client.begin("a.com");
        client.abandon();
        assert_eq!(
            client.complete(id, "a.com", Ok(Vec::new())),
            Completion::Stale
        );
    }
}
