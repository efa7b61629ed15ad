// src/models/style.rs

use serde::{Deserialize, Serialize};

use crate::models::colors::Color;

/// Horizontal alignment of text inside its box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

/// Vertical alignment of text inside its box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAlign {
    #[default]
    Top,
    Middle,
    Bottom,
}

/// The display mode a class string asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Display {
    Block,
    Flex,
    Grid,
}

/// Main axis of a flex container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlexDirection {
    Row,
    Column,
}

/// Cross-axis alignment (`items-*`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CrossAlign {
    Start,
    Center,
    End,
    Stretch,
    Baseline,
}

/// Main-axis justification (`justify-*`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Justify {
    Start,
    Center,
    End,
    Between,
    Around,
    Evenly,
}

/// A two-stop linear gradient.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gradient {
    pub from: Color,
    pub to: Color,
    /// Angle in degrees, 0 = left to right, 90 = top to bottom.
    pub angle: f64,
}

/// Explicit line height request (`leading-*`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LineHeight {
    /// Absolute height in canvas units.
    Absolute(f64),
    /// Multiplier of the font size.
    Relative(f64),
}

/// Visual attributes resolved from a style-class string.
///
/// Every field is optional; `None` means "use the default of the current
/// context", never zero. Sizes are in canvas units except `font_size`
/// (points), `border_width` (points) and `border_radius` (pixels, the
/// radius bucket of the source class).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleRecord {
    pub background: Option<Color>,
    pub gradient: Option<Gradient>,
    pub color: Option<Color>,
    pub font_size: Option<f64>,
    pub bold: Option<bool>,
    pub text_align: Option<TextAlign>,

    /// Set when any border token is present, even without width or color.
    pub border: Option<bool>,
    pub border_color: Option<Color>,
    pub border_width: Option<f64>,
    pub border_radius: Option<f64>,
    pub shadow: Option<bool>,

    pub width: Option<f64>,
    pub height: Option<f64>,
    pub gap: Option<f64>,
    pub padding: Option<f64>,
    pub padding_x: Option<f64>,
    pub padding_y: Option<f64>,
    pub margin_top: Option<f64>,
    pub margin_bottom: Option<f64>,

    pub display: Option<Display>,
    pub flex_direction: Option<FlexDirection>,
    pub grid_columns: Option<u32>,
    /// Set by `space-y-*`: children stack vertically with `gap` between them.
    pub stack: Option<bool>,
    pub align_items: Option<CrossAlign>,
    pub justify: Option<Justify>,
    pub line_height: Option<LineHeight>,
}

impl StyleRecord {
    /// Whether the class string declares a visible border.
    pub fn has_border(&self) -> bool {
        let present = self.border.unwrap_or(false) || self.border_color.is_some();
        present && self.border_width.map_or(true, |w| w > 0.0)
    }

    /// Whether the class string declares a fill (solid or gradient).
    pub fn has_fill(&self) -> bool {
        self.background.is_some() || self.gradient.is_some()
    }

    /// Resolves the explicit line height for a given font size, if one was declared.
    pub fn line_height_for(&self, font_size: f64) -> Option<f64> {
        self.line_height.map(|lh| match lh {
            LineHeight::Absolute(h) => h,
            LineHeight::Relative(m) => m * font_size / 72.0,
        })
    }

    /// Horizontal padding, falling back to the uniform padding and then `default`.
    pub fn padding_x_or(&self, default: f64) -> f64 {
        self.padding_x.or(self.padding).unwrap_or(default)
    }

    /// Vertical padding, falling back to the uniform padding and then `default`.
    pub fn padding_y_or(&self, default: f64) -> f64 {
        self.padding_y.or(self.padding).unwrap_or(default)
    }

    pub fn is_bold(&self) -> bool {
        self.bold.unwrap_or(false)
    }
}
