use std::env;
use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::errors::{DeckError, Result};
use crate::models::{colors::Color, geometry::Canvas};

/// Environment variable holding the path of a JSON deck configuration.
pub const CONFIG_ENV_VAR: &str = "SLIDES_LAYOUT_CONFIG";

/// Page geometry and margins used when assembling a deck.
///
/// Every field has a default, so a configuration file only needs to list
/// what it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeckConfig {
    pub canvas: Canvas,
    /// Left edge of the header, title and content bands.
    pub margin_x: f64,
    /// Width of the header, title and content bands.
    pub content_width: f64,
    /// Space kept free below the content box.
    pub bottom_margin: f64,
    pub background: Color,
    /// Page geometry name passed through to the document writer.
    pub layout_name: String,
}

impl Default for DeckConfig {
    fn default() -> Self {
        DeckConfig {
            canvas: Canvas::default(),
            margin_x: 0.5,
            content_width: 9.0,
            bottom_margin: 0.2,
            background: Color::WHITE,
            layout_name: "LAYOUT_16x9".to_string(),
        }
    }
}

impl DeckConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("[config] loading deck configuration from {}", path.display());
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Loads the file named by `SLIDES_LAYOUT_CONFIG`, or the defaults when it is unset.
    pub fn from_env() -> Result<Self> {
        match env::var(CONFIG_ENV_VAR) {
            Ok(path) => Self::from_json_file(path),
            Err(env::VarError::NotPresent) => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Checks that the page and the content band have a usable size.
    pub fn validate(&self) -> Result<()> {
        if !(self.canvas.width > 0.0 && self.canvas.height > 0.0) {
            return Err(DeckError::MissingData(format!(
                "canvas must have a positive size, got {}x{}",
                self.canvas.width, self.canvas.height
            )));
        }
        if !(self.content_width > 0.0) || self.margin_x < 0.0 || self.bottom_margin < 0.0 {
            return Err(DeckError::InvalidInput(
                "content band needs a positive width and non-negative margins".to_string(),
            ));
        }
        if self.margin_x + self.content_width > self.canvas.width {
            return Err(DeckError::InvalidInput(format!(
                "content band ({} + {}) is wider than the canvas ({})",
                self.margin_x, self.content_width, self.canvas.width
            )));
        }
        Ok(())
    }
}
