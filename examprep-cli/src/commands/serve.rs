//! Serve command: load the bank, then run the HTTP API until Ctrl-C

use std::sync::Arc;

use anyhow::Result;
use clap::Args;
use examprep_core::{Sampler, StdRngSampler, ThreadRngSampler};
use examprep_server::{AppState, ExamprepServer};
use tracing::info;

use super::{BankArgs, load_configured_bank};
use crate::config::{ConfigLoader, ExamprepConfig};

/// Arguments for the serve command
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Host to bind to
    #[arg(long)]
    pub host: Option<String>,

    #[command(flatten)]
    pub bank: BankArgs,
}

impl ServeArgs {
    fn apply(&self, config: &mut ExamprepConfig) {
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        self.bank.apply(config);
    }
}

/// Run the serve command
pub async fn run(args: ServeArgs) -> Result<()> {
    let mut config = ConfigLoader::load()?;
    args.apply(&mut config);

    let bank = load_configured_bank(&config).await?;
    info!(
        questions = bank.len(),
        subjects = bank.subject_count(),
        "question bank ready"
    );

    let state = AppState::new(bank).with_sampler(sampler_for(config.exam.seed));
    let server = ExamprepServer::new(config.server_config(), Arc::new(state));
    server.run().await?;

    Ok(())
}

/// Seeded draws when a seed is configured, thread-local randomness otherwise
fn sampler_for(seed: Option<u64>) -> Arc<dyn Sampler> {
    match seed {
        Some(seed) => {
            info!(seed, "using seeded sampler");
            Arc::new(StdRngSampler::with_seed(seed))
        }
        None => Arc::new(ThreadRngSampler),
    }
}
