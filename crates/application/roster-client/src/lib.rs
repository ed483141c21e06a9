pub mod remote;

pub use remote::{CharacterSource, HttpCharacterSource};

/// High-level error type for remote catalog fetches.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Request error: {0}")]
    Http(String),
    #[error("Decode error: {0}")]
    Decode(String),
    #[error("Invalid API url: {0}")]
    InvalidUrl(String),
}

pub fn default_http_client() -> anyhow::Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .user_agent(concat!("roster/", env!("CARGO_PKG_VERSION")))
        .timeout(std::time::Duration::from_secs(30))
        .build()?;
    Ok(client)
}

/// Convenience constructor for the default HTTP source.
pub fn default_source(
    client: reqwest::Client,
    api_url: &str,
) -> Result<HttpCharacterSource, FetchError> {
    HttpCharacterSource::new(client, api_url)
}
