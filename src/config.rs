//! Simulation and window settings, loadable from YAML.
//!
//! Every field has a default, so a config file only needs the keys it
//! changes:
//!
//! ```yaml
//! simulation:
//!   ball_count: 60
//!   seed: 7
//!   overlap_rule: radius_sum     # or doubled_radius
//!   max_placement_attempts: 10000
//! window:
//!   width: 1024
//!   height: 768
//!   fps: 60
//! ```

use crate::error::{Error, Result};
use crate::items::MAX_RADIUS;
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// How close two centers must be before a ball treats its neighbour as hit.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum OverlapRule {
    /// Twice the acting ball's own radius, ignoring the other's size.
    #[default]
    DoubledRadius,
    /// Sum of both radii.
    RadiusSum,
}

impl OverlapRule {
    /// Center distance below which `radius` (acting) and `other_radius` overlap.
    pub fn threshold(self, radius: f64, other_radius: f64) -> f64 {
        match self {
            OverlapRule::DoubledRadius => radius * 2.0,
            OverlapRule::RadiusSum => radius + other_radius,
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SimConfig {
    pub ball_count: usize,
    pub seed: Option<u64>,        // None draws from OS entropy
    pub overlap_rule: OverlapRule,
    pub max_placement_attempts: Option<u32>, // None retries forever
}

impl Default for SimConfig {
    fn default() -> Self {
        SimConfig {
            ball_count: 100,
            seed: None,
            overlap_rule: OverlapRule::default(),
            max_placement_attempts: None,
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub fps: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            title: "Elastic collisions".to_string(),
            width: 1280,
            height: 720,
            fps: 60,
        }
    }
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub simulation: SimConfig,
    pub window: WindowConfig,
}

impl Config {
    pub fn from_yaml_str(text: &str) -> Result<Config> {
        let config: Config = serde_yaml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml_file(path: &Path) -> Result<Config> {
        let reader = BufReader::new(File::open(path)?);
        let config: Config = serde_yaml::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let min_side = (MAX_RADIUS * 2.0) as u32;
        if self.window.width < min_side || self.window.height < min_side {
            return Err(Error::InvalidParam(format!(
                "window must be at least {min_side}x{min_side}, got {}x{}",
                self.window.width, self.window.height
            )));
        }
        if self.window.fps == 0 {
            return Err(Error::InvalidParam("fps must be > 0".into()));
        }
        if self.simulation.max_placement_attempts == Some(0) {
            return Err(Error::InvalidParam("max_placement_attempts must be > 0".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() -> Result<()> {
        let config = Config::from_yaml_str("{}")?;
        assert_eq!(config, Config::default());
        assert_eq!(config.simulation.ball_count, 100);
        assert_eq!(config.simulation.overlap_rule, OverlapRule::DoubledRadius);
        assert_eq!(config.simulation.max_placement_attempts, None);
        Ok(())
    }

    #[test]
    fn partial_document_overrides() -> Result<()> {
        let config = Config::from_yaml_str(
            "simulation:\n  ball_count: 12\n  seed: 3\n  overlap_rule: radius_sum\nwindow:\n  width: 640\n",
        )?;
        assert_eq!(config.simulation.ball_count, 12);
        assert_eq!(config.simulation.seed, Some(3));
        assert_eq!(config.simulation.overlap_rule, OverlapRule::RadiusSum);
        assert_eq!(config.window.width, 640);
        assert_eq!(config.window.height, 720);
        Ok(())
    }

    #[test]
    fn tiny_window_rejected() {
        let err = Config::from_yaml_str("window:\n  width: 40\n").unwrap_err();
        assert!(err.to_string().contains("window"));
    }

    #[test]
    fn zero_attempt_cap_rejected() {
        let err = Config::from_yaml_str("simulation:\n  max_placement_attempts: 0\n").unwrap_err();
        assert!(matches!(err, Error::InvalidParam(_)));
    }

    #[test]
    fn unknown_rule_is_a_config_error() {
        let err = Config::from_yaml_str("simulation:\n  overlap_rule: swept\n").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn thresholds() {
        assert_eq!(OverlapRule::DoubledRadius.threshold(10.0, 30.0), 20.0);
        assert_eq!(OverlapRule::RadiusSum.threshold(10.0, 30.0), 40.0);
    }
}
