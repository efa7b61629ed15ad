use serde::{Deserialize, Serialize};

use crate::models::{
    colors::Color,
    geometry::{Canvas, LayoutBox},
    slide::Metadata,
    style::{TextAlign, VerticalAlign},
};

/// Geometry of a shape primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ShapeKind {
    Rect,
    RoundRect,
    Ellipse,
}

/// How a shape is filled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Fill {
    Solid(Color),
    LinearGradient {
        /// Angle in degrees.
        angle: f64,
        /// Color stops at positions 0 and 1.
        stops: [Color; 2],
    },
}

/// The outline of a shape or table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineStyle {
    pub color: Color,
    /// Stroke width in points.
    pub width: f64,
}

/// An outer drop shadow.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shadow {
    pub blur: f64,
    pub offset: f64,
    pub angle: f64,
    pub color: Color,
    /// Opacity from 0 to 100.
    pub opacity: u8,
}

/// Visual attributes of a shape primitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<Fill>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<LineStyle>,
    /// Corner radius in canvas units, only meaningful for `RoundRect`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow: Option<Shadow>,
}

/// Visual attributes of a text run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextAttributes {
    /// Font size in points.
    pub font_size: f64,
    pub bold: bool,
    pub color: Color,
    pub align: TextAlign,
    pub valign: VerticalAlign,
}

/// One styled cell of a table primitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableCellData {
    pub text: String,
    pub fill: Color,
    pub color: Color,
    pub bold: bool,
    pub font_size: f64,
    pub align: TextAlign,
}

/// Visual attributes shared by every cell of a table primitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableAttributes {
    pub row_height: f64,
    pub column_count: usize,
    pub border: LineStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapePrimitive {
    pub kind: ShapeKind,
    pub frame: LayoutBox,
    #[serde(flatten)]
    pub attributes: ShapeAttributes,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextPrimitive {
    pub frame: LayoutBox,
    pub text: String,
    #[serde(flatten)]
    pub attributes: TextAttributes,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TablePrimitive {
    /// Top-left at the owning box, full box width, height = rows × row height.
    pub frame: LayoutBox,
    pub rows: Vec<Vec<TableCellData>>,
    #[serde(flatten)]
    pub attributes: TableAttributes,
}

/// One positioned drawing instruction. Z-order is emission order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Primitive {
    Shape(ShapePrimitive),
    Text(TextPrimitive),
    Table(TablePrimitive),
}

impl Primitive {
    pub fn frame(&self) -> &LayoutBox {
        match self {
            Primitive::Shape(s) => &s.frame,
            Primitive::Text(t) => &t.frame,
            Primitive::Table(t) => &t.frame,
        }
    }

    pub fn as_text(&self) -> Option<&TextPrimitive> {
        match self {
            Primitive::Text(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_shape(&self) -> Option<&ShapePrimitive> {
        match self {
            Primitive::Shape(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_table(&self) -> Option<&TablePrimitive> {
        match self {
            Primitive::Table(t) => Some(t),
            _ => None,
        }
    }
}

/// The primitives of one output page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlidePage {
    /// 0-based position of the slide in the input.
    pub index: usize,
    pub background: Color,
    pub primitives: Vec<Primitive>,
}

/// The assembled output deck handed to a document writer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub canvas: Canvas,
    /// Page geometry name understood by presentation writers (e.g. `LAYOUT_16x9`).
    pub layout_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    pub slides: Vec<SlidePage>,
}

impl Document {
    /// Serializes the document to pretty JSON.
    pub fn to_json(&self) -> crate::errors::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
