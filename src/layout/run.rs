//! Typography of a single text run, resolved from a node's own style and the
//! style of the node it sits in.

use super::constants::*;
use super::text::estimate_text_height;
use crate::models::{
    colors::Color,
    document::TextAttributes,
    node::{Node, Tag},
    style::{StyleRecord, TextAlign, VerticalAlign},
};
use crate::style::palette;

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct RunStyle {
    pub font_size: f64,
    pub bold: bool,
    pub color: Color,
    pub align: TextAlign,
    pub line_height: Option<f64>,
}

impl RunStyle {
    /// A bare text leaf takes everything from the enclosing node.
    pub fn leaf(parent: &StyleRecord) -> Self {
        let font_size = parent.font_size.unwrap_or(DEFAULT_FONT_SIZE);
        RunStyle {
            font_size,
            bold: parent.is_bold(),
            color: parent.color.unwrap_or(palette::GRAY_800),
            align: parent.text_align.unwrap_or_default(),
            line_height: parent.line_height_for(font_size),
        }
    }

    pub fn heading(level: u8, own: &StyleRecord, parent: &StyleRecord) -> Self {
        let index = usize::from(level.clamp(1, 4) - 1);
        let font_size = own.font_size.unwrap_or(HEADING_FONT_SIZES[index]);
        RunStyle {
            font_size,
            bold: own.bold.unwrap_or(true),
            color: own.color.or(parent.color).unwrap_or(palette::GRAY_800),
            align: own.text_align.or(parent.text_align).unwrap_or_default(),
            line_height: own.line_height_for(font_size),
        }
    }

    /// Paragraphs and inline emphasis inherit size, color and alignment.
    pub fn inline(strong: bool, own: &StyleRecord, parent: &StyleRecord) -> Self {
        let font_size = own
            .font_size
            .or(parent.font_size)
            .unwrap_or(DEFAULT_FONT_SIZE);
        RunStyle {
            font_size,
            bold: own.bold.unwrap_or(strong),
            color: own.color.or(parent.color).unwrap_or(palette::GRAY_800),
            align: own.text_align.or(parent.text_align).unwrap_or_default(),
            line_height: own
                .line_height_for(font_size)
                .or_else(|| parent.line_height_for(font_size)),
        }
    }

    pub fn list(style: &StyleRecord) -> Self {
        let font_size = style.font_size.unwrap_or(LIST_FONT_SIZE);
        RunStyle {
            font_size,
            bold: style.is_bold(),
            color: style.color.unwrap_or(palette::GRAY_600),
            align: style.text_align.unwrap_or_default(),
            line_height: style.line_height_for(font_size),
        }
    }

    /// The run style of a node drawn as one block of text (headings,
    /// paragraphs, inline tags), or `None` for structural nodes.
    pub fn for_text_node(node: &Node, own: &StyleRecord, parent: &StyleRecord) -> Option<Self> {
        match &node.tag {
            Tag::Heading(level) => Some(RunStyle::heading(*level, own, parent)),
            Tag::Paragraph => Some(RunStyle::inline(false, own, parent)),
            Tag::Inline { strong, .. } => Some(RunStyle::inline(*strong, own, parent)),
            _ => None,
        }
    }

    /// Margin below a text block when its own style declares none.
    pub fn default_margin_bottom(tag: &Tag) -> f64 {
        match tag {
            Tag::Paragraph | Tag::Inline { .. } => PARAGRAPH_MARGIN_BOTTOM,
            _ => 0.0,
        }
    }

    pub fn estimate(&self, text: &str, width: f64) -> f64 {
        estimate_text_height(text, self.font_size, width, self.line_height)
    }

    pub fn attributes(&self) -> TextAttributes {
        TextAttributes {
            font_size: self.font_size,
            bold: self.bold,
            color: self.color,
            align: self.align,
            valign: VerticalAlign::Top,
        }
    }
}
