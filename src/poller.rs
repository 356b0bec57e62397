//! The fetch-then-sleep loop

use crate::config::Config;
use crate::errors::{CheckerError, Result};
use crate::source::{AddressSource, HttpAddressSource};

use std::sync::Arc;
use tokio::time::sleep;
use tracing::{error, info, warn};
use uuid::Uuid;

/// Runs the check loop: one timed fetch per cycle, log the outcome, sleep
/// for the configured interval, repeat until the process is interrupted.
#[derive(Clone)]
pub struct Poller {
    config: Config,
    source: Arc<dyn AddressSource>,
    checker_id: String,
}

impl Poller {
    /// Create a poller backed by the real HTTP source.
    ///
    /// The shared client is built here, once, before the loop begins.
    pub fn new(config: Config) -> Result<Self> {
        config.validate().map_err(CheckerError::Config)?;

        let source = Arc::new(HttpAddressSource::new(
            config.ip_check_url.clone(),
            config.request_timeout,
            config.session_timeout,
        )?);

        Ok(Self::with_source(config, source))
    }

    /// Create a poller with an injected address source.
    pub fn with_source(config: Config, source: Arc<dyn AddressSource>) -> Self {
        Self {
            config,
            source,
            checker_id: Uuid::new_v4().to_string(),
        }
    }

    /// Start the checker: log the startup line, then run until interrupted.
    ///
    /// Ctrl-C is awaited at the outermost scope so shutdown gets a final
    /// log line and the process exits cleanly.
    pub async fn start(&self) -> Result<()> {
        info!(
            "[{}] Starting egress IP checker (interval={}s, checker={})",
            self.config.service_name,
            self.config.check_interval.as_secs(),
            self.checker_id
        );

        tokio::select! {
            _ = self.run() => {}
            signal = tokio::signal::ctrl_c() => {
                signal.map_err(|e| {
                    CheckerError::Other(format!("Failed to wait for shutdown signal: {}", e))
                })?;
                info!("[{}] Stopped by signal.", self.config.service_name);
            }
        }

        Ok(())
    }

    /// The loop itself. Never returns on its own; fetch failures are
    /// handled inside the cycle and the next cycle always follows.
    pub async fn run(&self) {
        loop {
            self.run_cycle().await;
            sleep(self.config.check_interval).await;
        }
    }

    /// One cycle: fetch, then log the outcome at the appropriate level.
    pub async fn run_cycle(&self) {
        match self.source.fetch_address().await {
            Ok(observation) => {
                info!(
                    "[{}] External egress IP: {}",
                    self.config.service_name, observation.address
                );
            }
            Err(e) => {
                warn!("[{}] Failed to fetch IP: {}", self.config.service_name, e);
                error!(
                    "[{}] Could not determine external IP.",
                    self.config.service_name
                );
            }
        }
    }
}
