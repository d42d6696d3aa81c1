/// Synchronous loader for the country dataset.
///
/// The dataset is a single JSON array served at `{base_url}/data.json`, or read
/// from a local fixture file. One call to [`Client::load`] issues exactly one
/// request; there is no retry and no caching between calls.
///
/// Typical usage:
/// ```no_run
/// # use countries_rs::{Client, Source};
/// let client = Client::new(Source::parse("http://127.0.0.1:8080"));
/// let dataset = client.load()?;
/// println!("{} countries", dataset.len());
/// # Ok::<(), countries_rs::LoadError>(())
/// ```
use crate::error::LoadError;
use crate::models::{CountryRecord, Dataset};
use log::debug;
use reqwest::blocking::Client as HttpClient;
use reqwest::redirect::Policy;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// Fixed resource name of the dataset below a remote base URL.
pub const DATA_PATH: &str = "data.json";

/// Environment variable consulted by the binaries for the default source.
pub const SOURCE_ENV: &str = "COUNTRIES_SOURCE";

/// Where the dataset comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Fetch `{base_url}/data.json` over HTTP(S).
    Remote { base_url: String },
    /// Read a local JSON fixture.
    File(PathBuf),
}

impl Source {
    /// `http://` and `https://` prefixes select a remote source; anything else is a path.
    pub fn parse(s: &str) -> Self {
        let s = s.trim();
        if s.starts_with("http://") || s.starts_with("https://") {
            Source::Remote {
                base_url: s.trim_end_matches('/').to_string(),
            }
        } else {
            Source::File(PathBuf::from(s))
        }
    }

    /// Full URL of the dataset for remote sources.
    pub fn data_url(&self) -> Option<String> {
        match self {
            Source::Remote { base_url } => Some(format!("{}/{}", base_url, DATA_PATH)),
            Source::File(_) => None,
        }
    }
}

impl Default for Source {
    fn default() -> Self {
        Source::File(PathBuf::from(DATA_PATH))
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Remote { .. } => write!(f, "{}", self.data_url().unwrap_or_default()),
            Source::File(p) => write!(f, "{}", p.display()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Client {
    pub source: Source,
    http: HttpClient,
}

impl Default for Client {
    fn default() -> Self {
        Self::new(Source::default())
    }
}

impl Client {
    /// Client without a request timeout.
    pub fn new(source: Source) -> Self {
        Self::with_timeout(source, None)
    }

    /// Client with an optional total request timeout.
    pub fn with_timeout(source: Source, timeout: Option<Duration>) -> Self {
        let mut builder = HttpClient::builder()
            .redirect(Policy::limited(5)) // cap redirects
            .user_agent(concat!("countries_rs/", env!("CARGO_PKG_VERSION")));
        // reqwest's blocking client defaults to 30s; `None` here means no timeout at all.
        builder = builder.timeout(timeout);
        let http = builder.build().expect("reqwest client build");
        Self { source, http }
    }

    /// Load the full dataset once.
    ///
    /// ### Errors
    /// - Network failure ([`LoadError::Transport`])
    /// - Non-success HTTP status ([`LoadError::Status`])
    /// - Body is not a JSON array of country records ([`LoadError::Decode`])
    /// - Local fixture unreadable ([`LoadError::Io`])
    pub fn load(&self) -> Result<Dataset, LoadError> {
        let records = match &self.source {
            Source::Remote { .. } => {
                let url = self.source.data_url().unwrap_or_default();
                debug!("GET {}", url);
                let resp = self.http.get(&url).send().map_err(|source| {
                    LoadError::Transport {
                        url: url.clone(),
                        source,
                    }
                })?;
                let status = resp.status();
                if !status.is_success() {
                    return Err(LoadError::Status { url, status });
                }
                let body = resp
                    .bytes()
                    .map_err(|source| LoadError::Transport { url, source })?;
                parse_records(&body)?
            }
            Source::File(path) => {
                debug!("reading {}", path.display());
                let body = std::fs::read(path).map_err(|source| LoadError::Io {
                    path: path.clone(),
                    source,
                })?;
                parse_records(&body)?
            }
        };
        debug!("loaded {} country records from {}", records.len(), self.source);
        Ok(Dataset::new(records))
    }
}

/// Parse a response body as a JSON array of country records.
pub fn parse_records(body: &[u8]) -> Result<Vec<CountryRecord>, LoadError> {
    Ok(serde_json::from_slice(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_source_kinds() {
        assert_eq!(
            Source::parse("https://example.org/static/"),
            Source::Remote {
                base_url: "https://example.org/static".into()
            }
        );
        assert_eq!(
            Source::parse("fixtures/data.json"),
            Source::File(PathBuf::from("fixtures/data.json"))
        );
    }

    #[test]
    fn remote_url_appends_fixed_path() {
        let s = Source::parse("http://localhost:8080");
        assert_eq!(s.data_url().as_deref(), Some("http://localhost:8080/data.json"));
        assert_eq!(Source::default().data_url(), None);
    }

    #[test]
    fn client_with_and_without_timeout_loads_file() {
        let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/data.json");
        for timeout in [None, Some(Duration::from_secs(5))] {
            let client = Client::with_timeout(Source::File(path.clone()), timeout);
            assert_eq!(client.load().unwrap().len(), 5);
        }
    }

    #[test]
    fn non_array_body_is_decode_error() {
        let err = parse_records(br#"{"name":"France"}"#).unwrap_err();
        assert!(matches!(err, LoadError::Decode(_)));
    }
}
