#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("definition service answered HTTP {status}")]
    Http { status: u16 },

    #[error("request failed: {0}")]
    Network(#[source] reqwest::Error),

    #[error("could not decode response body: {0}")]
    Decode(#[source] reqwest::Error),

    #[error("definition service returned no entries")]
    EmptyResponse,
}
