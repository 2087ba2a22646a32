//! Runtime configuration, loaded from TOML.
//!
//! Every field has a default, so an empty file (or no file) is valid:
//!
//! ```toml
//! root = "notman"
//! tempo_bpm = 120.0
//! note_duration = "16n"
//!
//! [ambient]
//! base_db = -18.0
//! multiplier_db = 12.0
//!
//! [audio]
//! queue_size = 256
//! level_smoothing = 0.05
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::{
    error::{Error, Result},
    presence::location::SiteLayout,
    sonify::{ambient::AmbientParams, duration::Duration, trigger::NOTE_DURATION},
};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Root namespace of every directory path on the site.
    pub root: String,
    /// Tempo used to turn note durations into seconds.
    pub tempo_bpm: f32,
    /// Length of every event note, in transport notation.
    pub note_duration: Duration,
    pub ambient: AmbientParams,
    pub audio: AudioConfig,
}

/// Settings of the audio engine.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AudioConfig {
    /// Capacity of the control queue into the audio thread.
    pub queue_size: usize,
    /// Time constant (seconds) for drone level changes.
    pub level_smoothing: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: SiteLayout::DEFAULT_ROOT.to_string(),
            tempo_bpm: 120.0,
            note_duration: NOTE_DURATION,
            ambient: AmbientParams::default(),
            audio: AudioConfig::default(),
        }
    }
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            queue_size: 256,
            level_smoothing: 0.05,
        }
    }
}

impl Config {
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: Config = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text)
    }

    pub fn layout(&self) -> SiteLayout {
        SiteLayout::new(self.root.clone())
    }

    fn validate(&self) -> Result<()> {
        if self.root.is_empty() || self.root.contains(':') {
            return Err(Error::ConfigValue(format!(
                "root must be a single non-empty segment, got {:?}",
                self.root
            )));
        }
        if !(self.tempo_bpm.is_finite() && self.tempo_bpm > 0.0) {
            return Err(Error::ConfigValue(format!(
                "tempo_bpm must be positive, got {}",
                self.tempo_bpm
            )));
        }
        if !self.ambient.base_db.is_finite() {
            return Err(Error::ConfigValue(format!(
                "ambient.base_db must be finite, got {}",
                self.ambient.base_db
            )));
        }
        if !(self.ambient.multiplier_db.is_finite() && self.ambient.multiplier_db >= 0.0) {
            return Err(Error::ConfigValue(format!(
                "ambient.multiplier_db must be finite and >= 0, got {}",
                self.ambient.multiplier_db
            )));
        }
        if self.audio.queue_size == 0 {
            return Err(Error::ConfigValue("audio.queue_size must be at least 1".into()));
        }
        if self.audio.level_smoothing.is_nan() || self.audio.level_smoothing < 0.0 {
            return Err(Error::ConfigValue(format!(
                "audio.level_smoothing must be >= 0, got {}",
                self.audio.level_smoothing
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_default() {
        assert_eq!(Config::from_toml("").unwrap(), Config::default());
    }

    #[test]
    fn overrides() {
        let config = Config::from_toml(
            r#"
            root = "lab"
            note_duration = "8n"

            [ambient]
            multiplier_db = 6.0
            "#,
        )
        .unwrap();

        assert_eq!(config.root, "lab");
        assert_eq!(config.note_duration, Duration::EIGHTH);
        assert_eq!(config.ambient.base_db, AmbientParams::DEFAULT_BASE_DB);
        assert_eq!(config.ambient.multiplier_db, 6.0);
        assert_eq!(config.layout().zone_path(crate::presence::Zone::Cafe), "lab:cafe");
    }

    #[test]
    fn zero_multiplier_is_allowed() {
        let config = Config::from_toml("[ambient]\nmultiplier_db = 0.0").unwrap();
        assert_eq!(config.ambient.level(3, 3), config.ambient.base_db);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(Config::from_toml("root = \"a:b\""), Err(Error::ConfigValue(_))));
        assert!(matches!(Config::from_toml("tempo_bpm = 0.0"), Err(Error::ConfigValue(_))));
        assert!(matches!(Config::from_toml("note_duration = \"3n\""), Err(Error::Config(_))));
        assert!(matches!(Config::from_toml("volume = 3"), Err(Error::Config(_))));
        assert!(matches!(
            Config::from_toml("[ambient]\nmultiplier_db = -12.0"),
            Err(Error::ConfigValue(_))
        ));
        assert!(matches!(
            Config::from_toml("[ambient]\nbase_db = nan"),
            Err(Error::ConfigValue(_))
        ));
        assert!(matches!(
            Config::from_toml("[ambient]\nmultiplier_db = inf"),
            Err(Error::ConfigValue(_))
        ));
        assert!(matches!(
            Config::from_toml("[ambient]\nbase_db = -inf"),
            Err(Error::ConfigValue(_))
        ));
    }
}
