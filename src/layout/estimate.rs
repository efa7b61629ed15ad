//! Height estimation ahead of layout.
//!
//! Stacks and flex columns size their children from these estimates before
//! laying them out. The estimate mirrors what each strategy would consume,
//! but never emits anything. An explicit `h-*` always wins.

use super::blocks::{icon_extent, lookup_icon, table_rows};
use super::constants::*;
use super::grid::GridGeometry;
use super::run::RunStyle;
use super::stack::{fixed_width, plan_row};
use super::strategy::{arrangement, classify, LayoutStrategy};
use super::text::{extract_text, is_blank_text, normalize_text};
use crate::models::{
    node::{Child, Node, Tag},
    style::StyleRecord,
};
use crate::style::resolve;

/// Estimated height of one child (text leaf or node) placed in `width`.
pub fn estimate_child(child: &Child, width: f64, parent: &StyleRecord) -> f64 {
    match child {
        Child::Text(raw) => {
            let text = normalize_text(raw);
            if text.is_empty() {
                0.0
            } else {
                RunStyle::leaf(parent).estimate(&text, width)
            }
        }
        Child::Node(node) => estimate_node(node, width, parent),
    }
}

/// Estimated height of `node` placed in `width` inside a node styled `parent`.
pub fn estimate_node(node: &Node, width: f64, parent: &StyleRecord) -> f64 {
    let style = resolve(&node.class_name);
    let strategy = classify(node, &style);

    if strategy == LayoutStrategy::ShapeBlock {
        return style
            .height
            .unwrap_or(SHAPE_DEFAULT_SIZE)
            .max(SHAPE_MIN_SIZE);
    }
    if let Some(height) = style.height {
        return height;
    }

    match strategy {
        LayoutStrategy::Icon => match &node.tag {
            Tag::Icon(name) if lookup_icon(name).is_some() => icon_extent(&style).1,
            _ => 0.0,
        },
        LayoutStrategy::LineBreak => LINE_BREAK_ADVANCE,
        LayoutStrategy::Container => {
            let pad_x = style.padding_x_or(CONTAINER_PADDING);
            let pad_y = style.padding_y_or(CONTAINER_PADDING);
            let inner_width = (width - 2.0 * pad_x).max(0.0);
            estimate_arranged(arrangement(node, &style), node, &style, inner_width, parent)
                + 2.0 * pad_y
        }
        other => estimate_arranged(other, node, &style, width, parent),
    }
}

fn estimate_arranged(
    strategy: LayoutStrategy,
    node: &Node,
    style: &StyleRecord,
    width: f64,
    parent: &StyleRecord,
) -> f64 {
    match strategy {
        LayoutStrategy::Grid => estimate_grid(node, style, width),
        LayoutStrategy::FlexRow => estimate_row(node, style, width),
        LayoutStrategy::FlexColumn => estimate_column(node, style, width, FLEX_GAP),
        LayoutStrategy::Stack => estimate_column(node, style, width, STACK_GAP),
        LayoutStrategy::List => estimate_list(node, style, width),
        LayoutStrategy::Table => table_rows(node).len() as f64 * TABLE_ROW_HEIGHT,
        _ => match RunStyle::for_text_node(node, style, parent) {
            Some(run) => {
                let text = extract_text(node);
                if text.is_empty() {
                    0.0
                } else {
                    run.estimate(&text, width)
                }
            }
            None => estimate_flow(node, style, width),
        },
    }
}

/// Mirrors the generic walk without the bottom cut-off.
fn estimate_flow(node: &Node, style: &StyleRecord, width: f64) -> f64 {
    node.children
        .iter()
        .filter(|child| !is_blank_text(child))
        .map(|child| match child {
            Child::Text(_) => {
                estimate_child(child, width, style) + style.margin_bottom.unwrap_or(0.0)
            }
            Child::Node(inner) => {
                let inner_style = resolve(&inner.class_name);
                let margin_top = inner_style.margin_top.unwrap_or(0.0);
                let body = if inner.tag == Tag::LineBreak {
                    FLOW_LINE_BREAK_ADVANCE
                } else if let Some(run) = RunStyle::for_text_node(inner, &inner_style, style) {
                    let text = extract_text(inner);
                    if text.is_empty() {
                        0.0
                    } else {
                        run.estimate(&text, width)
                            + inner_style
                                .margin_bottom
                                .unwrap_or_else(|| RunStyle::default_margin_bottom(&inner.tag))
                    }
                } else {
                    estimate_node(inner, width, style) + inner_style.margin_bottom.unwrap_or(0.0)
                };
                margin_top + body
            }
        })
        .sum()
}

fn estimate_grid(node: &Node, style: &StyleRecord, width: f64) -> f64 {
    let cells: Vec<&Node> = node.element_children().collect();
    if cells.is_empty() {
        return 0.0;
    }
    let columns = style.grid_columns.unwrap_or(1).max(1) as usize;
    let gap = style.gap.unwrap_or(GRID_GAP);
    let cell_width = GridGeometry::cell_extent(width, columns, gap);

    let rows: Vec<f64> = cells
        .chunks(columns)
        .map(|row| {
            row.iter()
                .map(|cell| estimate_node(cell, cell_width, style))
                .fold(0.0, f64::max)
        })
        .collect();
    rows.iter().sum::<f64>() + gap * (rows.len() - 1) as f64
}

/// Tallest child at its planned width, never below the row minimum.
fn estimate_row(node: &Node, style: &StyleRecord, width: f64) -> f64 {
    let children: Vec<&Child> = node.children.iter().filter(|c| !is_blank_text(c)).collect();
    if children.is_empty() {
        return 0.0;
    }
    let fixed: Vec<Option<f64>> = children.iter().map(|child| fixed_width(child)).collect();
    let plan = plan_row(&fixed, style.gap.unwrap_or(FLEX_GAP), width, None);
    children
        .iter()
        .zip(&plan.widths)
        .map(|(child, share)| estimate_child(child, *share, style))
        .fold(FLEX_ROW_MIN_HEIGHT, f64::max)
}

fn estimate_column(node: &Node, style: &StyleRecord, width: f64, default_gap: f64) -> f64 {
    let children: Vec<&Child> = node.children.iter().filter(|c| !is_blank_text(c)).collect();
    if children.is_empty() {
        return 0.0;
    }
    let gap = style.gap.unwrap_or(default_gap);
    let content: f64 = children
        .iter()
        .map(|child| estimate_child(child, width, style))
        .sum();
    content + gap * (children.len() - 1) as f64
}

fn estimate_list(node: &Node, style: &StyleRecord, width: f64) -> f64 {
    let run = RunStyle::list(style);
    let text_width = (width - LIST_BULLET_INDENT).max(0.0);
    node.element_children()
        .filter(|item| item.tag == Tag::ListItem)
        .map(|item| run.estimate(&extract_text(item), text_width) + LIST_ITEM_GAP)
        .sum()
}
