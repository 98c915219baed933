//! Structured logging via `tracing`.
//!
//! Level conventions used across the core:
//! - `trace!` refused state requests
//! - `debug!` state transitions, prop throws, contact resolution
//! - `info!` spawn, death, despawn, battery depletion
//! - `warn!` player death, replay divergence
//!
//! The subscriber is installed at most once per process.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Once;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

const MONSTER_TARGET: &str = "haunt_core::monster";

/// Installs the global subscriber when added to an app.
#[derive(Default)]
pub struct LoggingPlugin {
    pub config: LogConfig,
}

impl Plugin for LoggingPlugin {
    fn build(&self, _app: &mut App) {
        init_tracing(&self.config);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: LogLevel,
    /// Per-target levels, e.g. `haunt_core::monster -> Debug`
    pub overrides: BTreeMap<String, LogLevel>,
    pub timestamps: bool,
    pub targets: bool,
    pub thread_ids: bool,
    pub source_location: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            overrides: BTreeMap::new(),
            timestamps: true,
            targets: true,
            thread_ids: false,
            source_location: false,
        }
    }
}

impl LogConfig {
    /// `EnvFilter` directives, e.g. `info,haunt_core::monster=debug`
    pub fn directives(&self) -> String {
        std::iter::once(self.level.to_string())
            .chain(self.overrides.iter().map(|(target, level)| format!("{target}={level}")))
            .collect::<Vec<_>>()
            .join(",")
    }

    pub fn with_override(mut self, target: impl Into<String>, level: LogLevel) -> Self {
        self.overrides.insert(target.into(), level);
        self
    }

    /// Surface every monster state transition and refused request.
    pub fn trace_transitions(self) -> Self {
        self.with_override(MONSTER_TARGET, LogLevel::Trace)
    }
}

static TRACING_INIT: Once = Once::new();

/// Install the fmt subscriber. `RUST_LOG` wins over `config` when set; a
/// subscriber installed earlier by the host is left alone.
pub fn init_tracing(config: &LogConfig) {
    let config = config.clone();
    TRACING_INIT.call_once(move || {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(config.directives()));

        let builder = tracing_subscriber::fmt()
            .compact()
            .with_env_filter(filter)
            .with_target(config.targets)
            .with_thread_ids(config.thread_ids)
            .with_file(config.source_location)
            .with_line_number(config.source_location);

        let _ = if config.timestamps {
            builder.try_init()
        } else {
            builder.without_time().try_init()
        };
    });
}

/// Enter an info-level span for a named operation; it closes when the
/// guard drops.
pub fn operation_span(name: &'static str) -> tracing::span::EnteredSpan {
    tracing::info_span!("haunt", op = name).entered()
}
