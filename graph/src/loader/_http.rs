use super::{bare_content_type, Loader, LoaderError};
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use std::sync::OnceLock;
use std::time::Duration;

/// The timeout of [`HttpLoader`]s, unless configured otherwise.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// A loader fetching `http:` and `https:` IRIs with a blocking HTTP client.
///
/// Non-success statuses are errors;
/// no request is ever retried.
///
/// The underlying client is built on the first request,
/// then shared by every later request (and every clone of the loader),
/// so that connections are pooled.
#[derive(Clone, Debug)]
pub struct HttpLoader {
    timeout: Duration,
    user_agent: String,
    client: OnceLock<Client>,
}

impl HttpLoader {
    /// A loader with [`DEFAULT_TIMEOUT`].
    pub fn new() -> Self {
        HttpLoader {
            timeout: DEFAULT_TIMEOUT,
            user_agent: concat!("trove/", env!("CARGO_PKG_VERSION")).into(),
            client: OnceLock::new(),
        }
    }

    /// Set the timeout of every request.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self.client = OnceLock::new();
        self
    }

    /// Set the `User-Agent` header of every request.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_string();
        self.client = OnceLock::new();
        self
    }

    /// The timeout of every request.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn client(&self) -> Result<&Client, reqwest::Error> {
        if let Some(client) = self.client.get() {
            return Ok(client);
        }
        let client = Client::builder()
            .timeout(self.timeout)
            .user_agent(&self.user_agent)
            .build()?;
        Ok(self.client.get_or_init(|| client))
    }
}

impl Default for HttpLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl Loader for HttpLoader {
    fn get(&self, iri: &str, accept: &str) -> Result<(Vec<u8>, String), LoaderError> {
        let http_err = |e: reqwest::Error| LoaderError::Http(iri.to_string(), e.to_string());
        if !(iri.starts_with("http://") || iri.starts_with("https://")) {
            return Err(LoaderError::UnsupportedIri(
                iri.to_string(),
                "not an HTTP(S) IRI".into(),
            ));
        }
        log::debug!("GET <{iri}> (Accept: {accept})");
        let resp = self
            .client()
            .map_err(http_err)?
            .get(iri)
            .header(ACCEPT, accept)
            .send()
            .map_err(http_err)?;
        let status = resp.status();
        if status == reqwest::StatusCode::NOT_FOUND || status == reqwest::StatusCode::GONE {
            return Err(LoaderError::NotFound(iri.to_string()));
        }
        if !status.is_success() {
            log::warn!("GET <{iri}> answered {status}");
            return Err(LoaderError::HttpStatus(iri.to_string(), status.as_u16()));
        }
        let ctype = resp
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(bare_content_type)
            .unwrap_or_else(|| "application/octet-stream".into());
        let data = resp.bytes().map_err(http_err)?.to_vec();
        Ok((data, ctype))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn rejects_non_http() {
        let ldr = HttpLoader::new().with_timeout(Duration::from_secs(1));
        assert_eq!(ldr.timeout(), Duration::from_secs(1));
        assert!(matches!(
            ldr.get("file:///etc/hosts", "*/*"),
            Err(LoaderError::UnsupportedIri(..)),
        ));
    }

    #[test]
    fn client_is_built_once() -> Result<(), Box<dyn std::error::Error>> {
        let ldr = HttpLoader::new();
        assert!(ldr.client.get().is_none());
        let first: *const Client = ldr.client()?;
        let second: *const Client = ldr.client()?;
        assert_eq!(first, second);

        let ldr = ldr.with_timeout(Duration::from_secs(2));
        assert!(ldr.client.get().is_none());
        assert_eq!(ldr.timeout(), Duration::from_secs(2));
        Ok(())
    }

    #[test]
    fn invalid_user_agent() {
        let ldr = HttpLoader::new().with_user_agent("bad\nagent");
        assert!(matches!(
            ldr.get("http://example.org/", "*/*"),
            Err(LoaderError::Http(..)),
        ));
    }

    #[test]
    #[ignore]
    fn fetch_remote() -> Result<(), Box<dyn std::error::Error>> {
        let iri = std::env::var("TROVE_HTTP_TEST_IRI")
            .unwrap_or_else(|_| "https://www.w3.org/1999/02/22-rdf-syntax-ns".into());
        let (data, ctype) = HttpLoader::new().get(&iri, "text/turtle")?;
        assert!(!data.is_empty());
        assert!(!ctype.contains(';'));
        Ok(())
    }
}
