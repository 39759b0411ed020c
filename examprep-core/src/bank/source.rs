//! Where the bank document comes from

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use reqwest::header::AUTHORIZATION;

use super::{LoadOptions, QuestionBank};
use crate::error::{LoadError, SourceError};

/// Timeout for fetching the document over HTTP
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Location of the question bank document
#[derive(Clone, PartialEq, Eq)]
pub enum BankSource {
    /// A JSON file on disk
    File(PathBuf),
    /// A JSON document served over HTTP(S)
    ///
    /// `token` is sent as `Authorization: token <token>`, the form GitHub
    /// accepts for private raw content.
    Url { url: String, token: Option<String> },
}

impl BankSource {
    /// Read or download the raw document
    pub async fn fetch(&self) -> Result<String, SourceError> {
        match self {
            Self::File(path) => {
                tokio::fs::read_to_string(path)
                    .await
                    .map_err(|source| SourceError::Io {
                        path: path.clone(),
                        source,
                    })
            }
            Self::Url { url, token } => fetch_url(url, token.as_deref()).await,
        }
    }
}

async fn fetch_url(url: &str, token: Option<&str>) -> Result<String, SourceError> {
    let http_error = |source: reqwest::Error| SourceError::Http {
        url: url.to_string(),
        source,
    };

    let client = reqwest::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()
        .map_err(http_error)?;

    let mut request = client.get(url);
    if let Some(token) = token {
        request = request.header(AUTHORIZATION, format!("token {token}"));
    }

    let response = request.send().await.map_err(http_error)?;
    let status = response.status();
    if !status.is_success() {
        return Err(SourceError::Status {
            url: url.to_string(),
            status,
        });
    }

    response.text().await.map_err(http_error)
}

impl fmt::Display for BankSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Url { url, .. } => write!(f, "{}", url),
        }
    }
}

// Keeps the token out of logs
impl fmt::Debug for BankSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => f.debug_tuple("File").field(path).finish(),
            Self::Url { url, token } => f
                .debug_struct("Url")
                .field("url", url)
                .field("token", &token.as_ref().map(|_| "***"))
                .finish(),
        }
    }
}

/// Fetch the document from `source` and build the bank
pub async fn load_bank(source: &BankSource, options: LoadOptions) -> Result<QuestionBank, LoadError> {
    tracing::info!(%source, "loading question bank");
    let document = source.fetch().await?;
    QuestionBank::from_json(&document, options)
}
