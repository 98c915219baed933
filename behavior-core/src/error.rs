//! Errors for the fallible edges of the crate.
//!
//! The simulation itself never fails: bad patrol data, damage after death,
//! missing throw props and undeclared state requests are all handled as local
//! no-ops. Only loading configs and replays can go wrong.

use std::path::PathBuf;

use crate::monster::MonsterKind;

#[derive(Debug, thiserror::Error)]
pub enum HauntError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("RON error: {0}")]
    Ron(#[from] ron::error::SpannedError),

    #[error("Unsupported config format: {0} (expected .json or .ron)")]
    UnsupportedFormat(PathBuf),

    #[error("Invalid {kind:?} tuning: {field} = {value}")]
    InvalidTuning {
        kind: MonsterKind,
        field: &'static str,
        value: f32,
    },

    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

pub type HauntResult<T> = Result<T, HauntError>;
