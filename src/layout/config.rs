//! Configuration for the layout model and preset engine

use serde::{Deserialize, Serialize};

use super::types::Size;

/// Configuration options for layout resolution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Size used by a full preset reset when the current size is degenerate
    pub fallback_size: Size,

    /// Size of the layout produced for an absent item
    pub default_size: Size,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            fallback_size: Size::new(100.0, 100.0),
            default_size: Size::new(100.0, 100.0),
        }
    }
}

impl LayoutConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the full-reset fallback size
    pub fn with_fallback_size(mut self, width: f64, height: f64) -> Self {
        self.fallback_size = Size::new(width, height);
        self
    }

    /// Set the size used for absent items
    pub fn with_default_size(mut self, width: f64, height: f64) -> Self {
        self.default_size = Size::new(width, height);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LayoutConfig::default();
        assert_eq!(config.fallback_size, Size::new(100.0, 100.0));
        assert_eq!(config.default_size, Size::new(100.0, 100.0));
    }

    #[test]
    fn test_builder_pattern() {
        let config = LayoutConfig::new()
            .with_fallback_size(320.0, 180.0)
            .with_default_size(64.0, 64.0);

        assert_eq!(config.fallback_size, Size::new(320.0, 180.0));
        assert_eq!(config.default_size, Size::new(64.0, 64.0));
    }

    #[test]
    fn test_deserialize_partial() {
        let config: LayoutConfig = toml::from_str(
            r#"
fallback_size = { width = 50.0, height = 25.0 }
"#,
        )
        .expect("Should parse");
        assert_eq!(config.fallback_size, Size::new(50.0, 25.0));
        assert_eq!(config.default_size, Size::new(100.0, 100.0));
    }
}
