use std::path::PathBuf;

use examprep_core::{BankSource, LoadOptions};
use serde::{Deserialize, Serialize};

/// Default host for the examprep server
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Default port for the examprep server
pub const DEFAULT_PORT: u16 = 8000;
/// Frontend dev server allowed by CORS when nothing is configured
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:5173";

/// Configuration as stored in TOML files (with optional fields for merging)
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawExamprepConfig {
    #[serde(default)]
    pub server: RawServerSection,

    #[serde(default)]
    pub bank: RawBankSection,

    #[serde(default)]
    pub exam: ExamSection,
}

/// Server section as stored in TOML
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawServerSection {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub cors_origins: Option<Vec<String>>,
}

/// Bank section as stored in TOML
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawBankSection {
    pub path: Option<PathBuf>,
    pub url: Option<String>,
    pub github_token: Option<String>,
    pub reject_duplicate_ids: Option<bool>,
}

/// Final configuration with defaults applied
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ExamprepConfig {
    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub bank: BankSection,

    #[serde(default)]
    pub exam: ExamSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSection {
    /// Host address to bind to
    pub host: String,

    /// Port to listen on
    pub port: u16,

    /// Browser origins allowed to call the API; empty disables CORS
    pub cors_origins: Vec<String>,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            cors_origins: vec![DEFAULT_CORS_ORIGIN.to_string()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct BankSection {
    /// Question bank JSON file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,

    /// Question bank JSON URL; used instead of `path` when both are set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Sent as `Authorization: token ...` when fetching `url`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_token: Option<String>,

    /// Fail on repeated question ids instead of keeping the last one
    #[serde(default)]
    pub reject_duplicate_ids: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ExamSection {
    /// Fixed sampler seed; draws are reproducible when set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl ExamprepConfig {
    /// The configured bank location, if any
    pub fn bank_source(&self) -> Option<BankSource> {
        if let Some(url) = &self.bank.url {
            return Some(BankSource::Url {
                url: url.clone(),
                token: self.bank.github_token.clone(),
            });
        }
        self.bank.path.clone().map(BankSource::File)
    }

    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            reject_duplicate_ids: self.bank.reject_duplicate_ids,
        }
    }

    pub fn server_config(&self) -> examprep_server::ServerConfig {
        examprep_server::ServerConfig {
            host: self.server.host.clone(),
            port: self.server.port,
            cors_origins: self.server.cors_origins.clone(),
        }
    }

    /// Copy safe to print, with the token hidden
    pub fn masked(&self) -> Self {
        let mut masked = self.clone();
        if masked.bank.github_token.is_some() {
            masked.bank.github_token = Some("***".to_string());
        }
        masked
    }
}
