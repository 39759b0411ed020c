use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;

use super::types::{
    BankSection, DEFAULT_CORS_ORIGIN, DEFAULT_HOST, DEFAULT_PORT, ExamSection, ExamprepConfig,
    RawBankSection, RawExamprepConfig, RawServerSection, ServerSection,
};

/// Overrides the project config directory (useful for isolated tests)
pub const PROJECT_CONFIG_DIR_ENV: &str = "EXAMPREP_PROJECT_CONFIG_DIR";

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load merged configuration (user + project + environment)
    pub fn load() -> Result<ExamprepConfig> {
        Self::load_from(
            Self::user_config_path().as_deref(),
            &Self::project_config_path(),
            |key| std::env::var(key).ok(),
        )
    }

    /// Load from explicit file locations and an environment lookup
    pub fn load_from(
        user_path: Option<&Path>,
        project_path: &Path,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<ExamprepConfig> {
        let mut raw = RawExamprepConfig::default();

        // Layer 1: User config
        if let Some(user_path) = user_path
            && let Some(user_config) = Self::read_layer(user_path)?
        {
            raw = Self::merge_raw(raw, user_config);
        }

        // Layer 2: Project config
        if let Some(project_config) = Self::read_layer(project_path)? {
            raw = Self::merge_raw(raw, project_config);
        }

        // Layer 3: Environment
        let raw = Self::apply_env(raw, env)?;

        Ok(Self::finalize(raw))
    }

    fn read_layer(path: &Path) -> Result<Option<RawExamprepConfig>> {
        if !path.exists() {
            return Ok(None);
        }
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config = toml::from_str(&contents)
            .with_context(|| format!("invalid config file {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded config layer");
        Ok(Some(config))
    }

    /// Get user config path (platform-specific)
    pub fn user_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "examprep").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Get project config path
    pub fn project_config_path() -> PathBuf {
        if let Ok(dir) = std::env::var(PROJECT_CONFIG_DIR_ENV) {
            PathBuf::from(dir).join("config.toml")
        } else {
            PathBuf::from(".examprep/config.toml")
        }
    }

    /// Merge two raw configs (overlay values override base only if explicitly set)
    fn merge_raw(base: RawExamprepConfig, overlay: RawExamprepConfig) -> RawExamprepConfig {
        RawExamprepConfig {
            server: RawServerSection {
                host: overlay.server.host.or(base.server.host),
                port: overlay.server.port.or(base.server.port),
                cors_origins: overlay.server.cors_origins.or(base.server.cors_origins),
            },
            bank: RawBankSection {
                path: overlay.bank.path.or(base.bank.path),
                url: overlay.bank.url.or(base.bank.url),
                github_token: overlay.bank.github_token.or(base.bank.github_token),
                reject_duplicate_ids: overlay
                    .bank
                    .reject_duplicate_ids
                    .or(base.bank.reject_duplicate_ids),
            },
            exam: ExamSection {
                seed: overlay.exam.seed.or(base.exam.seed),
            },
        }
    }

    /// Overlay environment variables; empty values count as unset
    fn apply_env(
        mut raw: RawExamprepConfig,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<RawExamprepConfig> {
        let var = |key: &str| env(key).filter(|value| !value.trim().is_empty());

        // A path from the environment beats a url from a file
        if let Some(path) = var("QUESTIONS_PATH") {
            raw.bank.path = Some(PathBuf::from(path));
            raw.bank.url = None;
        }
        if let Some(url) = var("QUESTIONS_URL") {
            raw.bank.url = Some(url);
        }
        if let Some(token) = var("GITHUB_TOKEN") {
            raw.bank.github_token = Some(token);
        }
        if let Some(host) = var("EXAMPREP_HOST") {
            raw.server.host = Some(host);
        }
        if let Some(port) = var("EXAMPREP_PORT") {
            let port = port
                .trim()
                .parse::<u16>()
                .with_context(|| format!("EXAMPREP_PORT is not a valid port: {port}"))?;
            raw.server.port = Some(port);
        }

        Ok(raw)
    }

    /// Convert raw config to final config with defaults applied
    fn finalize(raw: RawExamprepConfig) -> ExamprepConfig {
        ExamprepConfig {
            server: ServerSection {
                host: raw.server.host.unwrap_or_else(|| DEFAULT_HOST.to_string()),
                port: raw.server.port.unwrap_or(DEFAULT_PORT),
                cors_origins: raw
                    .server
                    .cors_origins
                    .unwrap_or_else(|| vec![DEFAULT_CORS_ORIGIN.to_string()]),
            },
            bank: BankSection {
                path: raw.bank.path,
                url: raw.bank.url,
                github_token: raw.bank.github_token,
                reject_duplicate_ids: raw.bank.reject_duplicate_ids.unwrap_or(false),
            },
            exam: raw.exam,
        }
    }
}
