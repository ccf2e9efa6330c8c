use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Service catalog compiled into the bundle.
pub const SERVICES_JSON: &str = include_str!("../assets/services.json");

/// Tuning for the gallery lightbox.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LightboxConfig {
    pub min_scale: f64,
    pub max_scale: f64,
    /// Scale change for one wheel notch or one zoom button press.
    pub zoom_step: f64,
}

impl Default for LightboxConfig {
    fn default() -> Self {
        Self {
            min_scale: 1.0,
            max_scale: 5.0,
            zoom_step: 0.2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_lightbox_bounds() {
        let config = LightboxConfig::default();
        assert_eq!(config.min_scale, 1.0);
        assert_eq!(config.max_scale, 5.0);
        assert!(config.zoom_step > 0.0 && config.zoom_step < config.max_scale);
    }
}
