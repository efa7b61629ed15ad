use log::debug;

use super::constants::FLOW_LINE_BREAK_ADVANCE;
use super::run::RunStyle;
use super::text::{extract_text, is_blank_text, normalize_text};
use super::{LayoutContext, LayoutEngine};
use crate::models::{
    geometry::LayoutBox,
    node::{Child, Node, Tag},
    style::StyleRecord,
};
use crate::style::resolve;

impl LayoutEngine<'_> {
    /// Fallback strategy. Text nodes are drawn as one block of flattened
    /// text; anything else walks its children top-down.
    pub(super) fn layout_generic(
        &mut self,
        node: &Node,
        style: &StyleRecord,
        frame: LayoutBox,
        ctx: &LayoutContext<'_>,
    ) -> f64 {
        match RunStyle::for_text_node(node, style, ctx.parent) {
            Some(run) => {
                let text = extract_text(node);
                if text.is_empty() {
                    return 0.0;
                }
                self.text_block(&text, &run, frame)
            }
            None => self.layout_flow(node, style, frame, ctx),
        }
    }

    /// Walks the children of `node` top-down from the top of `frame`.
    ///
    /// Every child starts at the running cursor with the rest of the frame as
    /// its box. Once the cursor reaches the bottom the remaining children are
    /// dropped. Returns the height consumed, at most the frame height.
    pub(super) fn layout_flow(
        &mut self,
        node: &Node,
        style: &StyleRecord,
        frame: LayoutBox,
        ctx: &LayoutContext<'_>,
    ) -> f64 {
        let inner = ctx.nested(style);
        let bottom = frame.bottom();
        let mut cursor = frame.y;

        let children: Vec<&Child> = node.children.iter().filter(|c| !is_blank_text(c)).collect();
        for (index, child) in children.iter().enumerate() {
            if cursor >= bottom {
                debug!(
                    "[flow] <{}> out of room, dropping {} trailing children",
                    node.tag.name(),
                    children.len() - index
                );
                break;
            }

            match child {
                Child::Text(raw) => {
                    let text = normalize_text(raw);
                    let run = RunStyle::leaf(style);
                    let slot = LayoutBox::new(frame.x, cursor, frame.width, bottom - cursor);
                    cursor += self.text_block(&text, &run, slot);
                    cursor += style.margin_bottom.unwrap_or(0.0);
                }
                Child::Node(child) => {
                    let child_style = resolve(&child.class_name);
                    cursor += child_style.margin_top.unwrap_or(0.0);
                    if cursor >= bottom {
                        continue;
                    }
                    let slot = LayoutBox::new(frame.x, cursor, frame.width, bottom - cursor);
                    cursor += self.flow_node(child, &child_style, style, slot, &inner);
                }
            }
        }

        (cursor - frame.y).clamp(0.0, frame.height)
    }

    /// Places one element child of a flow at the top of `slot` and returns the
    /// cursor advance. A declared `w-*`/`h-*` narrows the slot.
    fn flow_node(
        &mut self,
        child: &Node,
        child_style: &StyleRecord,
        parent_style: &StyleRecord,
        slot: LayoutBox,
        inner: &LayoutContext<'_>,
    ) -> f64 {
        if child.tag == Tag::LineBreak {
            return FLOW_LINE_BREAK_ADVANCE;
        }

        let margin_bottom = child_style.margin_bottom;
        if let Some(run) = RunStyle::for_text_node(child, child_style, parent_style) {
            let text = extract_text(child);
            if text.is_empty() {
                return 0.0;
            }
            let height = self.text_block(&text, &run, slot);
            return height + margin_bottom.unwrap_or_else(|| RunStyle::default_margin_bottom(&child.tag));
        }

        let sized = LayoutBox::new(
            slot.x,
            slot.y,
            child_style.width.map_or(slot.width, |w| w.min(slot.width)),
            child_style.height.map_or(slot.height, |h| h.min(slot.height)),
        );
        let used = self.layout(child, sized, inner);
        (used + margin_bottom.unwrap_or(0.0)).min(slot.height)
    }

    /// Draws `text` at the top of `slot`, as tall as its estimate but never
    /// taller than the slot. Returns the drawn height.
    pub(super) fn text_block(&mut self, text: &str, run: &RunStyle, slot: LayoutBox) -> f64 {
        if text.is_empty() {
            return 0.0;
        }
        let height = run.estimate(text, slot.width).min(slot.height).max(0.0);
        self.emitter.text(
            LayoutBox::new(slot.x, slot.y, slot.width, height),
            text,
            run.attributes(),
        );
        height
    }
}
