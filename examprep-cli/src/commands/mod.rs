pub mod check;
pub mod config;
pub mod serve;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use examprep_core::{QuestionBank, load_bank};

use crate::config::ExamprepConfig;

/// Where to load the question bank from, overriding config and environment
#[derive(Debug, Default, Args)]
pub struct BankArgs {
    /// Path to a question bank JSON file
    #[arg(long, value_name = "PATH", conflicts_with = "questions_url")]
    pub questions: Option<PathBuf>,

    /// URL of a question bank JSON document
    #[arg(long, value_name = "URL")]
    pub questions_url: Option<String>,
}

impl BankArgs {
    /// Apply the flags on top of the loaded config
    pub fn apply(&self, config: &mut ExamprepConfig) {
        if let Some(path) = &self.questions {
            config.bank.path = Some(path.clone());
            config.bank.url = None;
        }
        if let Some(url) = &self.questions_url {
            config.bank.url = Some(url.clone());
        }
    }
}

/// Load the bank named by `config`, failing if none is configured
pub async fn load_configured_bank(config: &ExamprepConfig) -> Result<QuestionBank> {
    let source = config.bank_source().context(
        "no question bank configured: pass --questions or --questions-url, \
         set QUESTIONS_PATH or QUESTIONS_URL, or set bank.path or bank.url in the config file",
    )?;

    load_bank(&source, config.load_options())
        .await
        .with_context(|| format!("failed to load question bank from {source}"))
}
