use crate::layout::text::is_blank_text;
use crate::models::{
    node::{Node, Tag},
    style::{Display, FlexDirection, StyleRecord},
};

/// How a node and its children are placed. Derived once per node, first match wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutStrategy {
    /// A single glyph for an icon component.
    Icon,
    /// A fixed vertical advance, nothing drawn.
    LineBreak,
    /// A filled and/or bordered surface whose children flow inside its padding.
    Container,
    /// Row-major cells of equal size.
    Grid,
    FlexRow,
    FlexColumn,
    /// Vertical stack with a declared gap (`space-y-*`).
    Stack,
    /// A fixed-size decorative rectangle or ellipse with no content.
    ShapeBlock,
    List,
    Table,
    /// Top-down walk of the children.
    Generic,
}

/// Classifies a node from its tag, its resolved style and the shape of its children.
pub fn classify(node: &Node, style: &StyleRecord) -> LayoutStrategy {
    match node.tag {
        Tag::Icon(_) => return LayoutStrategy::Icon,
        Tag::LineBreak => return LayoutStrategy::LineBreak,
        _ => {}
    }

    if has_surface(style) && !is_decorative(node, style) {
        return LayoutStrategy::Container;
    }
    arrangement(node, style)
}

/// The strategy that places a node's children, ignoring any surface the node draws.
/// Containers use it for the content inside their padding.
pub fn arrangement(node: &Node, style: &StyleRecord) -> LayoutStrategy {
    if style.grid_columns.is_some() {
        return LayoutStrategy::Grid;
    }
    if style.display == Some(Display::Flex) || style.flex_direction.is_some() {
        return match style.flex_direction {
            Some(FlexDirection::Column) => LayoutStrategy::FlexColumn,
            _ => LayoutStrategy::FlexRow,
        };
    }
    if style.stack == Some(true) {
        return LayoutStrategy::Stack;
    }
    if is_decorative(node, style) {
        return LayoutStrategy::ShapeBlock;
    }

    match node.tag {
        Tag::List => LayoutStrategy::List,
        Tag::Table => LayoutStrategy::Table,
        _ => LayoutStrategy::Generic,
    }
}

/// Empty fixed-size boxes are markers (dots, badges) drawn at their own size.
fn is_decorative(node: &Node, style: &StyleRecord) -> bool {
    style.width.is_some() && style.height.is_some() && node.children.iter().all(is_blank_text)
}

/// A border is always a visible surface. A fill only counts when something
/// else marks the node as a card (radius, padding or border); a bare `bg-*`
/// on a spacing wrapper stays transparent.
fn has_surface(style: &StyleRecord) -> bool {
    if style.has_border() {
        return true;
    }
    let card_like = style.border_radius.is_some()
        || style.padding.is_some()
        || style.padding_x.is_some()
        || style.padding_y.is_some();
    style.has_fill() && card_like
}
