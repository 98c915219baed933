use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{HauntError, HauntResult};
use crate::logging::LogConfig;
use crate::monster::tuning::MonsterTuning;
use crate::monster::MonsterKind;

/// One tuning per variant. Copied into each monster at spawn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bestiary {
    pub ghost: MonsterTuning,
    pub shadow: MonsterTuning,
    pub wraith: MonsterTuning,
    pub poltergeist: MonsterTuning,
}

impl Default for Bestiary {
    fn default() -> Self {
        Self {
            ghost: MonsterTuning::for_kind(MonsterKind::Ghost),
            shadow: MonsterTuning::for_kind(MonsterKind::Shadow),
            wraith: MonsterTuning::for_kind(MonsterKind::Wraith),
            poltergeist: MonsterTuning::for_kind(MonsterKind::Poltergeist),
        }
    }
}

impl Bestiary {
    pub fn tuning(&self, kind: MonsterKind) -> MonsterTuning {
        match kind {
            MonsterKind::Ghost => self.ghost,
            MonsterKind::Shadow => self.shadow,
            MonsterKind::Wraith => self.wraith,
            MonsterKind::Poltergeist => self.poltergeist,
        }
    }

    pub fn validate(&self) -> HauntResult<()> {
        for kind in MonsterKind::ALL {
            self.tuning(kind).validate(kind)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HauntConfig {
    /// World seed; every monster's RNG is derived from it
    pub seed: u64,
    /// Fixed ticks per second for headless drivers
    pub tick_rate: u32,
    pub bestiary: Bestiary,
    pub logging: LogConfig,
}

impl Default for HauntConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            tick_rate: 60,
            bestiary: Bestiary::default(),
            logging: LogConfig::default(),
        }
    }
}

impl HauntConfig {
    /// Load from `.json` or `.ron`, then validate.
    pub fn load(path: impl AsRef<Path>) -> HauntResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| HauntError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: HauntConfig = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => serde_json::from_str(&text)?,
            Some("ron") => ron::de::from_str(&text)?,
            _ => return Err(HauntError::UnsupportedFormat(path.to_path_buf())),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> HauntResult<()> {
        if self.tick_rate == 0 {
            return Err(HauntError::InvalidConfig("tick_rate must be positive".into()));
        }
        self.bestiary.validate()
    }

    /// Fixed tick length in milliseconds
    pub fn tick_ms(&self) -> f32 {
        1000.0 / self.tick_rate.max(1) as f32
    }

    pub fn to_json(&self) -> HauntResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
