//! Blocking HTTP collaborators
//!
//! Requires the `http` feature (on by default):
//! ```toml
//! seoscope = { version = "0.1", features = ["http"] }
//! ```

#[cfg(feature = "http")]
use super::html::{extract_text, result_links};
use super::{CollaboratorError, PageFetcher, SearchProvider};
use crate::config::HttpSettings;
use url::Url;

#[cfg(not(feature = "http"))]
const DISABLED: &str = "HTTP feature not enabled. Rebuild with: cargo build --features http";

#[cfg(feature = "http")]
fn build_client(settings: &HttpSettings) -> Result<reqwest::blocking::Client, CollaboratorError> {
    if settings.accept_invalid_certs {
        log::debug!("TLS certificate verification disabled for this client");
    }
    reqwest::blocking::Client::builder()
        .timeout(std::time::Duration::from_secs(settings.timeout_secs))
        .user_agent(settings.user_agent.as_str())
        .danger_accept_invalid_certs(settings.accept_invalid_certs)
        .build()
        .map_err(|e| CollaboratorError::Request(e.to_string()))
}

/// GET a URL and return the body, treating non-2xx as an error
#[cfg(feature = "http")]
fn get_text(request: reqwest::blocking::RequestBuilder, url: &str) -> Result<String, CollaboratorError> {
    let response = request
        .send()
        .map_err(|e| CollaboratorError::Request(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(CollaboratorError::Status {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }

    response
        .text()
        .map_err(|e| CollaboratorError::Request(e.to_string()))
}

/// Fetches a page and reduces it to its visible text
pub struct HttpFetcher {
    #[cfg(feature = "http")]
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    #[cfg(feature = "http")]
    pub fn new(settings: &HttpSettings) -> Result<Self, CollaboratorError> {
        Ok(Self {
            client: build_client(settings)?,
        })
    }

    /// Stub implementation when http feature is disabled
    #[cfg(not(feature = "http"))]
    pub fn new(_settings: &HttpSettings) -> Result<Self, CollaboratorError> {
        Ok(Self {})
    }
}

impl PageFetcher for HttpFetcher {
    #[cfg(feature = "http")]
    fn fetch(&self, url: &str) -> Result<String, CollaboratorError> {
        let parsed = Url::parse(url).map_err(|e| CollaboratorError::InvalidUrl(format!("{}: {}", url, e)))?;
        let html = get_text(self.client.get(parsed), url)?;
        let text = extract_text(&html);
        if text.trim().is_empty() {
            return Err(CollaboratorError::EmptyContent(url.to_string()));
        }
        Ok(text)
    }

    #[cfg(not(feature = "http"))]
    fn fetch(&self, url: &str) -> Result<String, CollaboratorError> {
        Url::parse(url).map_err(|e| CollaboratorError::InvalidUrl(format!("{}: {}", url, e)))?;
        Err(CollaboratorError::Request(DISABLED.to_string()))
    }
}

/// Queries an HTML search page and scrapes its result links
pub struct HttpSearch {
    endpoint: Url,
    query_param: String,
    result_selector: String,
    #[cfg(feature = "http")]
    client: reqwest::blocking::Client,
}

impl HttpSearch {
    pub fn new(settings: &HttpSettings) -> Result<Self, CollaboratorError> {
        let endpoint = Url::parse(&settings.search_url)
            .map_err(|e| CollaboratorError::InvalidUrl(format!("{}: {}", settings.search_url, e)))?;
        Ok(Self {
            endpoint,
            query_param: settings.query_param.clone(),
            result_selector: settings.result_selector.clone(),
            #[cfg(feature = "http")]
            client: build_client(settings)?,
        })
    }

    /// Search page URL for a query
    pub fn query_url(&self, query: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut().append_pair(&self.query_param, query);
        url
    }
}

impl SearchProvider for HttpSearch {
    #[cfg(feature = "http")]
    fn search(&self, query: &str, limit: usize) -> Result<Vec<String>, CollaboratorError> {
        let url = self.query_url(query);
        let html = get_text(self.client.get(url.clone()), url.as_str())?;
        result_links(&html, &self.endpoint, &self.result_selector, limit)
    }

    #[cfg(not(feature = "http"))]
    fn search(&self, _query: &str, _limit: usize) -> Result<Vec<String>, CollaboratorError> {
        Err(CollaboratorError::Request(DISABLED.to_string()))
    }
}

/// Check if the HTTP collaborators are compiled in
pub fn is_http_available() -> bool {
    cfg!(feature = "http")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_url_encodes_query() {
        let search = HttpSearch::new(&HttpSettings::default()).unwrap();
        let url = search.query_url("Competitor1 vegan baking");
        assert_eq!(
            url.as_str(),
            "https://html.duckduckgo.com/html/?q=Competitor1+vegan+baking"
        );
    }

    #[test]
    fn test_query_url_keeps_existing_params() {
        let settings = HttpSettings {
            search_url: "https://search.example.com/find?lang=en".to_string(),
            query_param: "term".to_string(),
            ..HttpSettings::default()
        };
        let search = HttpSearch::new(&settings).unwrap();
        assert_eq!(
            search.query_url("seo").as_str(),
            "https://search.example.com/find?lang=en&term=seo"
        );
    }

    #[test]
    fn test_invalid_search_url() {
        let settings = HttpSettings {
            search_url: "not a url".to_string(),
            ..HttpSettings::default()
        };
        assert!(matches!(
            HttpSearch::new(&settings),
            Err(CollaboratorError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_fetch_rejects_invalid_url() {
        let fetcher = HttpFetcher::new(&HttpSettings::default()).unwrap();
        assert!(matches!(
            fetcher.fetch("::nope::"),
            Err(CollaboratorError::InvalidUrl(_))
        ));
    }
}
