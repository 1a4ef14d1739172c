/// Hint shown in the empty search box.
pub const INPUT_PLACEHOLDER: &str = "example.com";

/// The single visual state the body area shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RenderState {
    Loading,
    Error(String),
    /// Labeled list of subdomains, one row per entry, already sorted.
    Results(Vec<String>),
    #[default]
    Nothing,
}

impl RenderState {
    /// Pick exactly one state from the `{loading, error, data}` triple.
    ///
    /// Priority: loading, then error, then data, then nothing.
    pub fn select(loading: bool, error: Option<&str>, data: Option<&[String]>) -> Self {
        if loading {
            return RenderState::Loading;
        }
        if let Some(message) = error {
            return RenderState::Error(message.to_string());
        }
        match data {
            Some(domains) => RenderState::Results(domains.to_vec()),
            None => RenderState::Nothing,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub input: String,
    pub placeholder_visible: bool,
    pub render: RenderState,
    pub selected: Option<usize>,
    pub dirty: bool,
}
