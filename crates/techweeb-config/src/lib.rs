//! User configuration for the techweeb portfolio.
//!
//! Read from `<config dir>/techweeb/config.toml`. A missing or malformed file
//! never fails startup; every field falls back to its default.

use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;
use serde::Deserialize;
use techweeb_core::AnimationSpeed;

/// Particle density multipliers outside this range are treated as typos.
const DENSITY_RANGE: (f32, f32) = (0.1, 4.0);

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Skip the intro greeting sequence and go straight to the home page.
    pub skip_intro: bool,
    /// Global animation speed: slow, medium or fast.
    pub animation_speed: AnimationSpeed,
    /// Multiplier on the per-page particle counts.
    pub particle_density: f32,
    /// Capture mouse movement for the particle repulsion effect.
    pub mouse_capture: bool,
    /// Free-form location line shown on the contact page.
    pub location: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            skip_intro: false,
            animation_speed: AnimationSpeed::default(),
            particle_density: 1.0,
            mouse_capture: true,
            location: String::new(),
        }
    }
}

impl Config {
    /// Load the configuration from disk, falling back to defaults on any
    /// missing file or parse failure.
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };
        let Ok(raw) = fs::read_to_string(&path) else {
            return Self::default();
        };
        Self::from_toml(&raw)
    }

    /// Parse a configuration from TOML text, sanitizing numeric fields.
    pub fn from_toml(raw: &str) -> Self {
        toml::from_str::<Config>(raw)
            .unwrap_or_default()
            .sanitized()
    }

    /// Path to the configuration file, if a config directory exists for
    /// this platform.
    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "techweeb").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Apply the density multiplier to a preset particle count.
    pub fn scaled_count(&self, count: usize) -> usize {
        ((count as f32 * self.particle_density) as usize).max(1)
    }

    fn sanitized(mut self) -> Self {
        if !self.particle_density.is_finite() {
            self.particle_density = 1.0;
        }
        self.particle_density = self.particle_density.clamp(DENSITY_RANGE.0, DENSITY_RANGE.1);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(!config.skip_intro);
        assert_eq!(config.animation_speed, AnimationSpeed::Medium);
        assert_eq!(config.particle_density, 1.0);
        assert!(config.mouse_capture);
    }

    #[test]
    fn test_parse_full() {
        let config = Config::from_toml(
            r#"
            skip_intro = true
            animation_speed = "fast"
            particle_density = 0.5
            mouse_capture = false
            location = "Tokyo, Japan"
            "#,
        );
        assert!(config.skip_intro);
        assert_eq!(config.animation_speed, AnimationSpeed::Fast);
        assert_eq!(config.particle_density, 0.5);
        assert!(!config.mouse_capture);
        assert_eq!(config.location, "Tokyo, Japan");
    }

    #[test]
    fn test_parse_partial_keeps_defaults() {
        let config = Config::from_toml("skip_intro = true");
        assert!(config.skip_intro);
        assert_eq!(config.animation_speed, AnimationSpeed::Medium);
        assert_eq!(config.particle_density, 1.0);
    }

    #[test]
    fn test_invalid_toml_falls_back() {
        let config = Config::from_toml("not even = [ toml");
        assert_eq!(config.particle_density, 1.0);
    }

    #[test]
    fn test_density_clamped() {
        let config = Config::from_toml("particle_density = 1000.0");
        assert_eq!(config.particle_density, 4.0);
        let config = Config::from_toml("particle_density = 0.0");
        assert_eq!(config.particle_density, 0.1);
    }

    #[test]
    fn test_scaled_count() {
        let mut config = Config::default();
        config.particle_density = 0.5;
        assert_eq!(config.scaled_count(800), 400);
        config.particle_density = 0.1;
        assert_eq!(config.scaled_count(1), 1); // never drops to zero
    }
}
