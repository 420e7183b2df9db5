//! Logging for the plasma validator.
//!
//! The validator only emits `tracing` events; embedding applications and tests decide
//! where they go. This crate installs a `tracing-subscriber` stack for them.

use serde::{Deserialize, Serialize};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer,
};

/// Verbosity of validator events.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LogLevel {
    /// Every proof fold and signature check.
    Trace,
    /// Reasons for rejected proofs and signatures.
    Debug,
    /// Default.
    #[default]
    Info,
    /// Structural failures only.
    Warn,
    /// Errors only.
    Error,
}

/// Logging configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Level applied to the validator crates.
    pub level: LogLevel,
    /// Emit JSON lines instead of human readable output.
    pub json: bool,
    /// Full `EnvFilter` directive, overriding `level` when set.
    pub filter: Option<String>,
}

impl LoggingConfig {
    /// The filter directive this configuration resolves to.
    pub fn directive(&self) -> String {
        self.filter.clone().unwrap_or_else(|| {
            format!(
                "warn,plasma_validator={level},plasma_primitives={level}",
                level = self.level
            )
        })
    }
}

/// Install the global subscriber. `RUST_LOG` takes precedence over the configuration.
pub fn init_logging(config: &LoggingConfig) -> eyre::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(config.directive()))?;

    let layer = fmt::Layer::new().with_span_events(FmtSpan::CLOSE);
    let layer = if config.json {
        layer.json().boxed()
    } else {
        layer.with_ansi(true).boxed()
    };

    tracing_subscriber::registry()
        .with(layer)
        .with(env_filter)
        .try_init()?;

    tracing::info!(directive = %config.directive(), json = config.json, "logging initialized");
    Ok(())
}

/// Route events to the test harness output at `debug`. Safe to call from every test.
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("plasma_validator=debug")),
        )
        .with_test_writer()
        .try_init();
}
