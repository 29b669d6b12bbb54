//! Session configuration loaded from TOML and validated before startup.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use life_core::GridDimensions;
use life_pattern_catalog::RandomFill;
use serde::Deserialize;
use thiserror::Error;

/// Tunable session parameters; missing keys fall back to the defaults.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct LifeConfig {
    /// Window width in pixels.
    pub(crate) window_width: u32,
    /// Window height in pixels.
    pub(crate) window_height: u32,
    /// Side length of a cell in pixels.
    pub(crate) cell_size: u32,
    /// Frames, and therefore generations, per second.
    pub(crate) frames_per_second: u32,
    /// Probability of life used by the random fill.
    pub(crate) density: f64,
    /// Seed for random fills; drawn at startup when absent.
    pub(crate) seed: Option<u64>,
    /// Whether the measured frame rate is logged once per second.
    pub(crate) show_fps: bool,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            window_width: 1020,
            window_height: 560,
            cell_size: 10,
            frames_per_second: 10,
            density: RandomFill::DEFAULT_DENSITY,
            seed: None,
            show_fps: false,
        }
    }
}

/// Errors raised while loading or validating a [`LifeConfig`].
#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to read configuration file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse configuration")]
    Parse(#[from] toml::de::Error),
    #[error("cell size must be positive")]
    ZeroCellSize,
    #[error(
        "window size {width}x{height} must be a positive multiple of the cell size {cell_size}"
    )]
    WindowNotCellAligned {
        width: u32,
        height: u32,
        cell_size: u32,
    },
    #[error("frames per second must be positive")]
    ZeroFrameRate,
    #[error("density {density} must lie within 0.0..=1.0")]
    DensityOutOfRange { density: f64 },
}

impl LifeConfig {
    /// Reads and parses the configuration stored at `path`.
    pub(crate) fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    pub(crate) fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Checks the invariants the rest of the program relies on.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.cell_size == 0 {
            return Err(ConfigError::ZeroCellSize);
        }
        let aligned = |length: u32| length > 0 && length % self.cell_size == 0;
        if !aligned(self.window_width) || !aligned(self.window_height) {
            return Err(ConfigError::WindowNotCellAligned {
                width: self.window_width,
                height: self.window_height,
                cell_size: self.cell_size,
            });
        }
        if self.frames_per_second == 0 {
            return Err(ConfigError::ZeroFrameRate);
        }
        if !(0.0..=1.0).contains(&self.density) {
            return Err(ConfigError::DensityOutOfRange {
                density: self.density,
            });
        }
        Ok(())
    }

    /// Grid size implied by the window and cell sizes.
    pub(crate) fn grid_dimensions(&self) -> GridDimensions {
        let cell_size = self.cell_size.max(1);
        GridDimensions::new(self.window_width / cell_size, self.window_height / cell_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_describe_the_standard_board() {
        let config = LifeConfig::default();

        config.validate().expect("defaults are valid");
        assert_eq!(config.grid_dimensions(), GridDimensions::new(102, 56));
        assert_eq!(config.frames_per_second, 10);
        assert_eq!(config.density, 0.25);
        assert!(config.seed.is_none());
    }

    #[test]
    fn partial_files_keep_remaining_defaults() {
        let config = LifeConfig::from_toml_str("seed = 9\nframes_per_second = 30\n")
            .expect("valid toml");

        assert_eq!(config.seed, Some(9));
        assert_eq!(config.frames_per_second, 30);
        assert_eq!(config.window_width, 1020);
        assert_eq!(config.cell_size, 10);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let error = LifeConfig::from_toml_str("colour = \"red\"").expect_err("unknown key");
        assert!(matches!(error, ConfigError::Parse(_)));
    }

    #[test]
    fn window_must_be_a_multiple_of_the_cell_size() {
        let config = LifeConfig {
            window_width: 1025,
            ..LifeConfig::default()
        };

        assert!(matches!(
            config.validate(),
            Err(ConfigError::WindowNotCellAligned {
                width: 1025,
                height: 560,
                cell_size: 10
            })
        ));
    }

    #[test]
    fn zero_sizes_and_rates_are_rejected() {
        let zero_cell = LifeConfig {
            cell_size: 0,
            ..LifeConfig::default()
        };
        assert!(matches!(zero_cell.validate(), Err(ConfigError::ZeroCellSize)));

        let zero_window = LifeConfig {
            window_height: 0,
            ..LifeConfig::default()
        };
        assert!(matches!(
            zero_window.validate(),
            Err(ConfigError::WindowNotCellAligned { .. })
        ));

        let zero_rate = LifeConfig {
            frames_per_second: 0,
            ..LifeConfig::default()
        };
        assert!(matches!(zero_rate.validate(), Err(ConfigError::ZeroFrameRate)));
    }

    #[test]
    fn density_must_be_a_probability() {
        for density in [-0.1, 1.5, f64::NAN] {
            let config = LifeConfig {
                density,
                ..LifeConfig::default()
            };
            assert!(matches!(
                config.validate(),
                Err(ConfigError::DensityOutOfRange { .. })
            ));
        }
    }

    #[test]
    fn missing_files_report_their_path() {
        let path = Path::new("/nonexistent/life.toml");
        let error = LifeConfig::load(path).expect_err("missing file");

        assert!(error.to_string().contains("/nonexistent/life.toml"));
    }
}
