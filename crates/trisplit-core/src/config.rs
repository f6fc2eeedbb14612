// ABOUTME: Layout configuration handling.
// ABOUTME: Loads settings from TOML and validates them into an immutable LayoutConfig.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::Interpolator;

pub const DEFAULT_SLIDE_DURATION_MS: u64 = 300;

/// Integer pane weights, the way device resources express them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaneWeights {
    pub folder_list: u32,
    pub conversation_list: u32,
    pub conversation_view: u32,
}

/// On-disk layout settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Share of the width the folder pane takes next to the list (0.0 to 1.0)
    pub folder_list_weight: f64,

    /// Share of the width the list pane takes next to a conversation (0.0 to 1.0)
    pub conversation_list_weight: f64,

    /// Hide the list off-screen while a conversation is open (narrow devices)
    pub list_collapsible: bool,

    /// Slide transition length in milliseconds
    pub slide_duration_ms: i64,

    /// Slide transition curve
    pub interpolator: Interpolator,

    /// Integer weights; when set these replace the two fractional weights
    pub pane_weights: Option<PaneWeights>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            folder_list_weight: 0.3,
            conversation_list_weight: 0.4,
            pane_weights: None,
            list_collapsible: false,
            slide_duration_ms: DEFAULT_SLIDE_DURATION_MS as i64,
            interpolator: Interpolator::default(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),

    #[error("{name} must be within [0, 1], got {value}")]
    InvalidWeight { name: &'static str, value: f64 },

    #[error("pane weights {first} + {second} sum to zero")]
    ZeroPaneWeights { first: u32, second: u32 },

    #[error("slide duration must not be negative, got {0}ms")]
    NegativeDuration(i64),
}

impl Settings {
    /// Get the default settings path (~/.config/trisplit/layout.toml)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("trisplit").join("layout.toml"))
    }

    pub fn load(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let settings = toml::from_str(&content)?;
        Ok(settings)
    }

    /// Load settings from default path, or return defaults if not found
    pub fn load_or_default() -> Self {
        Self::default_path()
            .and_then(|path| Self::load(&path).ok())
            .unwrap_or_default()
    }

    pub fn save(&self, path: &std::path::Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate into the immutable config the layout engine runs on
    pub fn layout_config(&self) -> Result<LayoutConfig, ConfigError> {
        if self.slide_duration_ms < 0 {
            return Err(ConfigError::NegativeDuration(self.slide_duration_ms));
        }
        let slide_duration = Duration::from_millis(self.slide_duration_ms as u64);

        match self.pane_weights {
            Some(weights) => LayoutConfig::from_pane_weights(
                weights,
                self.list_collapsible,
                slide_duration,
                self.interpolator,
            ),
            None => LayoutConfig::new(
                self.folder_list_weight,
                self.conversation_list_weight,
                self.list_collapsible,
                slide_duration,
                self.interpolator,
            ),
        }
    }
}

/// Validated, immutable layout configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    folder_list_weight: f64,
    conversation_list_weight: f64,
    list_collapsible: bool,
    slide_duration: Duration,
    interpolator: Interpolator,
}

impl LayoutConfig {
    pub fn new(
        folder_list_weight: f64,
        conversation_list_weight: f64,
        list_collapsible: bool,
        slide_duration: Duration,
        interpolator: Interpolator,
    ) -> Result<Self, ConfigError> {
        check_weight("folder_list_weight", folder_list_weight)?;
        check_weight("conversation_list_weight", conversation_list_weight)?;
        Ok(Self {
            folder_list_weight,
            conversation_list_weight,
            list_collapsible,
            slide_duration,
            interpolator,
        })
    }

    /// Derive fractional weights from integer pane weights:
    /// the folder share is taken against the list, the list share against the conversation.
    pub fn from_pane_weights(
        weights: PaneWeights,
        list_collapsible: bool,
        slide_duration: Duration,
        interpolator: Interpolator,
    ) -> Result<Self, ConfigError> {
        let folder_list_weight = ratio(weights.folder_list, weights.conversation_list)?;
        let conversation_list_weight = ratio(weights.conversation_list, weights.conversation_view)?;
        Self::new(
            folder_list_weight,
            conversation_list_weight,
            list_collapsible,
            slide_duration,
            interpolator,
        )
    }

    pub fn folder_list_weight(&self) -> f64 {
        self.folder_list_weight
    }

    pub fn conversation_list_weight(&self) -> f64 {
        self.conversation_list_weight
    }

    pub fn list_collapsible(&self) -> bool {
        self.list_collapsible
    }

    pub fn slide_duration(&self) -> Duration {
        self.slide_duration
    }

    pub fn interpolator(&self) -> Interpolator {
        self.interpolator
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            folder_list_weight: 0.3,
            conversation_list_weight: 0.4,
            list_collapsible: false,
            slide_duration: Duration::from_millis(DEFAULT_SLIDE_DURATION_MS),
            interpolator: Interpolator::default(),
        }
    }
}

fn check_weight(name: &'static str, value: f64) -> Result<(), ConfigError> {
    // NaN fails the range check too
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::InvalidWeight { name, value })
    }
}

fn ratio(first: u32, second: u32) -> Result<f64, ConfigError> {
    let total = u64::from(first) + u64::from(second);
    if total == 0 {
        return Err(ConfigError::ZeroPaneWeights { first, second });
    }
    Ok(f64::from(first) / total as f64)
}
