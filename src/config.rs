use log::{info, warn, Level};
use serde::Deserialize;
use web_sys::window;

use crate::showcase::progress::DEFAULT_EPSILON;

/// Id of the optional JSON `<script>` element in `index.html`.
pub const CONFIG_ELEMENT_ID: &str = "showcase-config";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ShowcaseConfig {
    pub organization_name: String,
    pub organization_url: String,
    pub progress_epsilon: f64,
    /// Height of the showcase region in `vh`; derived from the catalog
    /// length when unset.
    pub showcase_height_vh: Option<u32>,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            organization_name: "Troibits Infotech".to_string(),
            organization_url: "http://www.troibits.com".to_string(),
            progress_epsilon: DEFAULT_EPSILON,
            showcase_height_vh: None,
        }
    }
}

impl ShowcaseConfig {
    /// Reads the page's embedded config, falling back to defaults.
    pub fn load() -> Self {
        let raw = window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        match raw {
            Some(raw) => Self::from_json(&raw),
            None => {
                info!("No embedded showcase config, using defaults");
                Self::default()
            }
        }
    }

    pub fn from_json(raw: &str) -> Self {
        match serde_json::from_str::<ShowcaseConfig>(raw) {
            Ok(config) => {
                info!("Loaded showcase config");
                config.validated()
            }
            Err(e) => {
                warn!("Invalid showcase config, using defaults: {}", e);
                Self::default()
            }
        }
    }

    fn validated(mut self) -> Self {
        if !(self.progress_epsilon > 0.0 && self.progress_epsilon < 1.0) {
            warn!(
                "progress_epsilon {} outside (0, 1), using {}",
                self.progress_epsilon, DEFAULT_EPSILON
            );
            self.progress_epsilon = DEFAULT_EPSILON;
        }
        if self.showcase_height_vh == Some(0) {
            warn!("showcase_height_vh must be positive, deriving from catalog");
            self.showcase_height_vh = None;
        }
        self
    }

    /// One viewport of scroll per feature unless overridden.
    pub fn showcase_height_vh(&self, feature_count: usize) -> u32 {
        self.showcase_height_vh
            .unwrap_or_else(|| (feature_count as u32).saturating_mul(100))
    }
}
