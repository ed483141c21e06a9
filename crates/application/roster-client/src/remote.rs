use crate::FetchError;
use reqwest::Client;
use roster_core::formats::{parse_page, CharacterPage};
use tracing::debug;

#[async_trait::async_trait]
pub trait CharacterSource: Send + Sync {
    async fn fetch_page(&self, page: u32) -> Result<CharacterPage, FetchError>;
}

/// HTTP-based source that fetches character pages from the remote API.
pub struct HttpCharacterSource {
    client: Client,
    base: reqwest::Url,
}

/// Normalize an API URL so it can be used as a base for the character
/// endpoint. Supports inputs ending with or without `character`.
pub(crate) fn normalize_api_base(api_url: &str) -> Result<reqwest::Url, FetchError> {
    let mut url = reqwest::Url::parse(api_url)
        .map_err(|e| FetchError::InvalidUrl(format!("invalid api url {api_url}: {e}")))?;

    if let Some(last) = url
        .path_segments()
        .and_then(|mut s| s.next_back().map(|p| p.to_string()))
    {
        if last == "character" {
            url.path_segments_mut()
                .map_err(|_| FetchError::InvalidUrl("invalid api url".into()))?
                .pop();
        }
    }

    // Treat the input as a *directory base* even when the caller provided
    // something like `https://host/api` without a trailing slash.
    //
    // Without this, `Url::join("character")` would resolve to
    // `https://host/character` (replacing `api`) rather than
    // `https://host/api/character`.
    if !url.path().ends_with('/') {
        url.set_path(&format!("{}/", url.path()));
    }

    Ok(url)
}

impl HttpCharacterSource {
    pub fn new(client: Client, api_url: &str) -> Result<Self, FetchError> {
        let base = normalize_api_base(api_url)?;
        Ok(Self { client, base })
    }

    fn page_url(&self, page: u32) -> Result<reqwest::Url, FetchError> {
        let mut url = self
            .base
            .join("character")
            .map_err(|e| FetchError::InvalidUrl(format!("bad character url from {}: {e}", self.base)))?;
        url.query_pairs_mut().append_pair("page", &page.to_string());
        Ok(url)
    }
}

#[async_trait::async_trait]
impl CharacterSource for HttpCharacterSource {
    async fn fetch_page(&self, page: u32) -> Result<CharacterPage, FetchError> {
        let url = self.page_url(page)?;

        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Http(format!("page {page} request failed: {e}")))?;

        if !resp.status().is_success() {
            return Err(FetchError::Http(format!(
                "page {page} request returned {}",
                resp.status()
            )));
        }

        let bytes = resp
            .bytes()
            .await
            .map_err(|e| FetchError::Http(format!("page {page} body failed: {e}")))?;

        let parsed =
            parse_page(&bytes).map_err(|e| FetchError::Decode(format!("page {page}: {e}")))?;
        debug!(page, results = parsed.results.len(), "fetched character page");
        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_without_trailing_slash_keeps_path() {
        let base = normalize_api_base("https://host.example/api").unwrap();
        assert_eq!(base.as_str(), "https://host.example/api/");
    }

    #[test]
    fn base_with_character_suffix_is_popped() {
        let base = normalize_api_base("https://host.example/api/character").unwrap();
        assert_eq!(base.as_str(), "https://host.example/api/");
    }

    #[test]
    fn page_url_appends_endpoint_and_query() {
        let src =
            HttpCharacterSource::new(Client::new(), "https://host.example/api/").unwrap();
        let url = src.page_url(3).unwrap();
        assert_eq!(url.as_str(), "https://host.example/api/character?page=3");
    }

    #[test]
    fn rejects_unparseable_url() {
        assert!(matches!(
            normalize_api_base("not a url"),
            Err(FetchError::InvalidUrl(_))
        ));
    }
}
