//! Strategies that draw something themselves: surfaces, icons, decorative
//! shapes, lists and tables.

use log::{debug, warn};

use super::constants::*;
use super::run::RunStyle;
use super::strategy::arrangement;
use super::text::{extract_text, line_height};
use super::{LayoutContext, LayoutEngine, LayoutStrategy};
use crate::models::{
    colors::Color,
    document::{
        Fill, LineStyle, Shadow, ShapeAttributes, ShapeKind, TableAttributes, TableCellData,
        TextAttributes,
    },
    geometry::LayoutBox,
    node::{Node, Tag},
    style::{StyleRecord, TextAlign, VerticalAlign},
};
use crate::style::{palette, resolve};

/// A glyph standing in for an icon component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct IconGlyph {
    pub glyph: &'static str,
    pub color: Option<Color>,
}

const ICONS: &[(&str, IconGlyph)] = &[
    ("Zap", IconGlyph { glyph: "⚡", color: Some(palette::BLUE_600) }),
    ("ThermometerSun", IconGlyph { glyph: "🌡️", color: Some(palette::RED_600) }),
    ("Cpu", IconGlyph { glyph: "🖥️", color: Some(palette::GRAY_800) }),
    ("ChevronLeft", IconGlyph { glyph: "◀", color: None }),
    ("ChevronRight", IconGlyph { glyph: "▶", color: None }),
    ("ArrowRight", IconGlyph { glyph: "→", color: None }),
    ("Check", IconGlyph { glyph: "✓", color: Some(Color::rgb(0x16, 0xA3, 0x4A)) }),
    ("X", IconGlyph { glyph: "✕", color: Some(palette::RED_600) }),
    ("Star", IconGlyph { glyph: "★", color: Some(Color::rgb(0xF5, 0x9E, 0x0B)) }),
];

pub(crate) fn lookup_icon(name: &str) -> Option<IconGlyph> {
    ICONS
        .iter()
        .find(|(known, _)| *known == name)
        .map(|(_, icon)| *icon)
}

/// Width and height of an icon glyph: at least one line of its font size.
pub(crate) fn icon_extent(style: &StyleRecord) -> (f64, f64) {
    let line = line_height(style.font_size.unwrap_or(ICON_FONT_SIZE));
    let height = style.height.unwrap_or(line).max(line);
    let width = style.width.unwrap_or(height).max(height);
    (width, height)
}

/// Collects the styled rows of a table: rows directly under the table and
/// rows inside header, body and footer groups, in document order. Rows
/// without any cell are dropped.
pub(crate) fn table_rows(table: &Node) -> Vec<Vec<TableCellData>> {
    let mut rows = Vec::new();
    for child in table.element_children() {
        match child.tag {
            Tag::TableSection(_) => {
                for row in child.element_children().filter(|r| r.tag == Tag::TableRow) {
                    push_row(&mut rows, row);
                }
            }
            Tag::TableRow => push_row(&mut rows, child),
            _ => debug!("[table] ignoring <{}> inside table", child.tag.name()),
        }
    }
    rows
}

fn push_row(rows: &mut Vec<Vec<TableCellData>>, row: &Node) {
    let cells: Vec<TableCellData> = row
        .element_children()
        .filter_map(|cell| match cell.tag {
            Tag::TableCell { header } => Some(table_cell(cell, header)),
            _ => None,
        })
        .collect();
    if cells.is_empty() {
        debug!("[table] skipping row without cells");
    } else {
        rows.push(cells);
    }
}

fn table_cell(cell: &Node, header: bool) -> TableCellData {
    let style = resolve(&cell.class_name);
    let (fill, color) = if header {
        (palette::GRAY_100, palette::GRAY_800)
    } else {
        (Color::WHITE, palette::GRAY_600)
    };
    TableCellData {
        text: extract_text(cell),
        fill: style.background.unwrap_or(fill),
        color: style.color.unwrap_or(color),
        bold: header || style.is_bold(),
        font_size: style.font_size.unwrap_or(TABLE_FONT_SIZE),
        align: style.text_align.unwrap_or(TextAlign::Left),
    }
}

/// Picks the outline of a surface from its radius bucket. Fully rounded,
/// roughly square boxes become ellipses.
fn surface_kind(radius: Option<f64>, frame: &LayoutBox) -> ShapeKind {
    let radius = match radius {
        Some(r) if r > ROUNDED_RADIUS_THRESHOLD => r,
        _ => return ShapeKind::Rect,
    };
    let short = frame.width.min(frame.height);
    let long = frame.width.max(frame.height);
    let squarish = long > 0.0 && short / long >= SQUARE_ASPECT_RATIO;
    let circular = radius > CIRCULAR_RADIUS_THRESHOLD || 2.0 * radius / PX_PER_UNIT >= short;
    if squarish && circular {
        ShapeKind::Ellipse
    } else {
        ShapeKind::RoundRect
    }
}

fn border_line(style: &StyleRecord) -> Option<LineStyle> {
    if let Some(color) = style.border_color {
        if style.border_width == Some(0.0) {
            return None;
        }
        let width = (style.border_width.unwrap_or(1.0) / 2.0).max(MIN_LINE_WIDTH);
        return Some(LineStyle { color, width });
    }
    style.has_border().then_some(LineStyle {
        color: palette::GRAY_300,
        width: DEFAULT_BORDER_LINE_WIDTH,
    })
}

fn surface_attributes(style: &StyleRecord, kind: ShapeKind, default_fill: Color) -> ShapeAttributes {
    let fill = match style.gradient {
        Some(gradient) => Fill::LinearGradient {
            angle: gradient.angle,
            stops: [gradient.from, gradient.to],
        },
        None => Fill::Solid(style.background.unwrap_or(default_fill)),
    };
    let corner_radius = match (kind, style.border_radius) {
        (ShapeKind::RoundRect, Some(r)) => Some((r / CORNER_RADIUS_DIVISOR).min(MAX_CORNER_RADIUS)),
        _ => None,
    };
    let shadow = style.shadow.unwrap_or(false).then_some(Shadow {
        blur: 6.0,
        offset: 0.05,
        angle: 90.0,
        color: palette::SHADOW_GRAY,
        opacity: 30,
    });
    ShapeAttributes {
        fill: Some(fill),
        line: border_line(style),
        corner_radius,
        shadow,
    }
}

impl LayoutEngine<'_> {
    /// Draws the surface over the whole frame, then arranges the children
    /// inside the padding. Claims the full frame height.
    pub(super) fn layout_container(
        &mut self,
        node: &Node,
        style: &StyleRecord,
        frame: LayoutBox,
        ctx: &LayoutContext<'_>,
    ) -> f64 {
        let kind = surface_kind(style.border_radius, &frame);
        self.emitter
            .shape(kind, frame, surface_attributes(style, kind, Color::WHITE));

        let content = frame.inset(
            style.padding_x_or(CONTAINER_PADDING),
            style.padding_y_or(CONTAINER_PADDING),
        );
        match arrangement(node, style) {
            LayoutStrategy::Generic | LayoutStrategy::ShapeBlock => {
                self.layout_flow(node, style, content, ctx)
            }
            other => self.arrange(other, node, style, content, ctx),
        };
        frame.height
    }

    pub(super) fn layout_icon(&mut self, node: &Node, style: &StyleRecord, frame: LayoutBox) -> f64 {
        let Tag::Icon(name) = &node.tag else {
            return 0.0;
        };
        let Some(icon) = lookup_icon(name) else {
            warn!("[icon] no glyph for component <{}>, skipping", name);
            return 0.0;
        };

        let (width, height) = icon_extent(style);
        let glyph_frame = LayoutBox::new(
            frame.x,
            frame.y,
            width.min(frame.width),
            height.min(frame.height),
        );
        self.emitter.text(
            glyph_frame,
            icon.glyph,
            TextAttributes {
                font_size: style.font_size.unwrap_or(ICON_FONT_SIZE),
                bold: false,
                color: style.color.or(icon.color).unwrap_or(palette::GRAY_800),
                align: TextAlign::Center,
                valign: VerticalAlign::Middle,
            },
        );
        glyph_frame.height
    }

    /// Decorative marker drawn at its own declared size in the frame's top-left corner.
    pub(super) fn layout_shape_block(&mut self, style: &StyleRecord, frame: LayoutBox) -> f64 {
        let width = style
            .width
            .unwrap_or(SHAPE_DEFAULT_SIZE)
            .max(SHAPE_MIN_SIZE)
            .min(frame.width);
        let height = style
            .height
            .unwrap_or(SHAPE_DEFAULT_SIZE)
            .max(SHAPE_MIN_SIZE)
            .min(frame.height);
        let shape_frame = LayoutBox::new(frame.x, frame.y, width, height);
        let kind = surface_kind(style.border_radius, &shape_frame);
        self.emitter
            .shape(kind, shape_frame, surface_attributes(style, kind, palette::BLUE_600));
        height
    }

    /// One bulleted text run per list item, clipped to the frame.
    pub(super) fn layout_list(&mut self, node: &Node, style: &StyleRecord, frame: LayoutBox) -> f64 {
        let items: Vec<&Node> = node
            .element_children()
            .filter(|child| child.tag == Tag::ListItem)
            .collect();
        if items.is_empty() {
            debug!("[list] <{}> has no items", node.tag.name());
            return 0.0;
        }

        let run = RunStyle::list(style);
        let text_width = (frame.width - LIST_BULLET_INDENT).max(0.0);
        let bottom = frame.bottom();
        let mut cursor = frame.y;
        for (index, item) in items.iter().enumerate() {
            if cursor >= bottom {
                debug!("[list] dropping {} items past the bottom", items.len() - index);
                break;
            }
            let text = extract_text(item);
            let height = run.estimate(&text, text_width).min(bottom - cursor);
            self.emitter.text(
                LayoutBox::new(frame.x, cursor, frame.width, height),
                &format!("{}{}", LIST_BULLET, text),
                run.attributes(),
            );
            cursor += height + LIST_ITEM_GAP;
        }
        (cursor - frame.y).min(frame.height)
    }

    /// Emits the whole table as one primitive at the frame's top-left.
    /// Rows shrink evenly if the default row height would overflow.
    pub(super) fn layout_table(&mut self, node: &Node, frame: LayoutBox) -> f64 {
        let rows = table_rows(node);
        if rows.is_empty() {
            warn!("[table] table without rows, skipping");
            return 0.0;
        }

        let column_count = rows.iter().map(Vec::len).max().unwrap_or(0);
        let row_height = TABLE_ROW_HEIGHT.min(frame.height / rows.len() as f64);
        let height = row_height * rows.len() as f64;
        self.emitter.table(
            LayoutBox::new(frame.x, frame.y, frame.width, height),
            rows,
            TableAttributes {
                row_height,
                column_count,
                border: LineStyle {
                    color: palette::GRAY_300,
                    width: TABLE_BORDER_WIDTH,
                },
            },
        );
        height
    }
}
