//! Flex rows, flex columns and `space-y` stacks.
//!
//! Sizing is planned before anything is drawn: children are estimated (or,
//! in a row, given their declared widths), and if the demand exceeds the
//! available extent every child is scaled by the same ratio.

use log::debug;

use super::constants::*;
use super::estimate::estimate_child;
use super::grid::GridGeometry;
use super::run::RunStyle;
use super::text::{is_blank_text, normalize_text};
use super::{LayoutContext, LayoutEngine};
use crate::models::{
    geometry::LayoutBox,
    node::{Child, Node, Tag},
    style::{CrossAlign, Justify, StyleRecord},
};
use crate::style::resolve;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum StackKind {
    FlexColumn,
    /// `space-y-*`; may center its content vertically.
    Stack,
}

/// Main-axis allocation of a vertical stack.
#[derive(Debug, Clone, PartialEq)]
pub struct StackPlan {
    /// Ratio applied to every estimate; 1 when the content fits.
    pub scale: f64,
    /// Height allotted to each child.
    pub heights: Vec<f64>,
    /// Offset of the first child from the top of the box.
    pub offset: f64,
}

/// Plans a vertical stack of children with the given estimated heights.
///
/// When estimates plus gaps exceed `available`, every height is multiplied by
/// `(available - gaps) / sum(estimates)`. Heights are never scaled up. With
/// `center` set and the content fitting, the stack is centred vertically.
pub fn plan_stack(estimates: &[f64], gap: f64, available: f64, center: bool) -> StackPlan {
    let content: f64 = estimates.iter().sum();
    let gaps = gap * estimates.len().saturating_sub(1) as f64;
    let demand = content + gaps;

    let scale = if demand > available {
        ((available - gaps) / content.max(MIN_ESTIMATE_DIVISOR)).max(0.0)
    } else {
        1.0
    };
    let offset = if center && demand < available {
        (available - demand) / 2.0
    } else {
        0.0
    };

    StackPlan {
        scale,
        heights: estimates.iter().map(|e| e * scale).collect(),
        offset,
    }
}

/// Main-axis allocation of a flex row.
#[derive(Debug, Clone, PartialEq)]
pub struct RowPlan {
    pub scale: f64,
    pub widths: Vec<f64>,
    /// Left edge of each child relative to the row's left edge.
    pub offsets: Vec<f64>,
}

/// Plans a flex row. `fixed[i]` is the declared width of child `i`, if any.
///
/// Fixed widths are taken verbatim; the children without one split what is
/// left evenly. If the total exceeds the width left after gaps, all widths
/// are scaled by the same ratio. Justification only applies when every
/// child has a fixed width and the row has room to spare. Gaps that alone
/// exceed `width` are narrowed so the row never spills past its right edge.
pub fn plan_row(fixed: &[Option<f64>], gap: f64, width: f64, justify: Option<Justify>) -> RowPlan {
    let count = fixed.len();
    let gap = GridGeometry::fit_gap(width, count, gap);
    let available = (width - gap * count.saturating_sub(1) as f64).max(0.0);
    let fixed_total: f64 = fixed.iter().flatten().sum();
    let auto_count = fixed.iter().filter(|w| w.is_none()).count();
    let auto_width = if auto_count > 0 {
        (available - fixed_total).max(FLEX_ROW_MIN_REMAINING) / auto_count as f64
    } else {
        0.0
    };

    let natural: Vec<f64> = fixed.iter().map(|w| w.unwrap_or(auto_width)).collect();
    let total: f64 = natural.iter().sum();
    let scale = if total > available && total > 0.0 {
        available / total
    } else {
        1.0
    };
    let widths: Vec<f64> = natural.iter().map(|w| w * scale).collect();

    let spare = if auto_count == 0 {
        (available - total * scale).max(0.0)
    } else {
        0.0
    };
    let n = count as f64;
    let (lead, extra) = match justify {
        Some(Justify::Center) => (spare / 2.0, 0.0),
        Some(Justify::End) => (spare, 0.0),
        Some(Justify::Between) if count > 1 => (0.0, spare / (n - 1.0)),
        Some(Justify::Around) if count > 0 => (spare / (2.0 * n), spare / n),
        Some(Justify::Evenly) => (spare / (n + 1.0), spare / (n + 1.0)),
        _ => (0.0, 0.0),
    };

    let mut offsets = Vec::with_capacity(count);
    let mut cursor = lead;
    for w in &widths {
        offsets.push(cursor);
        cursor += w + gap + extra;
    }

    RowPlan {
        scale,
        widths,
        offsets,
    }
}

/// Declared width of a row child; icons have a fixed slot.
pub(super) fn fixed_width(child: &Child) -> Option<f64> {
    let node = child.as_node()?;
    let style = resolve(&node.class_name);
    match (style.width, &node.tag) {
        (Some(width), _) => Some(width),
        (None, Tag::Icon(_)) => Some(ICON_FLEX_WIDTH),
        _ => None,
    }
}

impl LayoutEngine<'_> {
    /// Flex column and stack strategy: estimate, scale, then lay out top-down.
    ///
    /// Each child advances the cursor by the larger of its allotted and used
    /// height, clipped to the box. Returns the extent reached.
    pub(super) fn layout_stack(
        &mut self,
        node: &Node,
        style: &StyleRecord,
        frame: LayoutBox,
        ctx: &LayoutContext<'_>,
        kind: StackKind,
    ) -> f64 {
        let children: Vec<&Child> = node.children.iter().filter(|c| !is_blank_text(c)).collect();
        if children.is_empty() {
            return 0.0;
        }

        let gap = style.gap.unwrap_or(match kind {
            StackKind::FlexColumn => FLEX_GAP,
            StackKind::Stack => STACK_GAP,
        });
        let estimates: Vec<f64> = children
            .iter()
            .map(|child| estimate_child(child, frame.width, style))
            .collect();
        let center = kind == StackKind::Stack && style.justify == Some(Justify::Center);
        let plan = plan_stack(&estimates, gap, frame.height, center);
        if plan.scale < 1.0 {
            debug!(
                "[stack] <{}> overflows {:.3}, scaling children by {:.3}",
                node.tag.name(),
                frame.height,
                plan.scale
            );
        }

        let inner = ctx.nested(style);
        let bottom = frame.bottom();
        let mut cursor = frame.y + plan.offset;
        let mut extent = frame.y;

        for (index, (child, allotted)) in children.iter().zip(&plan.heights).enumerate() {
            if cursor >= bottom {
                debug!("[stack] out of room after {} of {} children", index, children.len());
                break;
            }
            let slot = LayoutBox::new(frame.x, cursor, frame.width, allotted.min(bottom - cursor));
            let used = match child {
                Child::Text(raw) => {
                    let text = normalize_text(raw);
                    let run = RunStyle::leaf(style);
                    self.emitter.text(slot, &text, run.attributes());
                    slot.height
                }
                Child::Node(inner_node) => self.layout(inner_node, slot, &inner),
            };
            cursor += used.max(*allotted).min(bottom - cursor);
            extent = extent.max(cursor);
            if index + 1 < children.len() {
                cursor += gap;
            }
        }

        (extent - frame.y).clamp(0.0, frame.height)
    }

    /// Flex row strategy. Children sit side by side at their planned widths
    /// inside a band as tall as the tallest estimate (or the declared height);
    /// `items-center`/`items-end` shift each child within the band.
    pub(super) fn layout_flex_row(
        &mut self,
        node: &Node,
        style: &StyleRecord,
        frame: LayoutBox,
        ctx: &LayoutContext<'_>,
    ) -> f64 {
        let children: Vec<&Child> = node.children.iter().filter(|c| !is_blank_text(c)).collect();
        if children.is_empty() {
            return 0.0;
        }

        let fixed: Vec<Option<f64>> = children.iter().map(|child| fixed_width(child)).collect();
        let gap = style.gap.unwrap_or(FLEX_GAP);
        let plan = plan_row(&fixed, gap, frame.width, style.justify);
        if plan.scale < 1.0 {
            debug!(
                "[row] <{}> overflows {:.3}, scaling widths by {:.3}",
                node.tag.name(),
                frame.width,
                plan.scale
            );
        }

        let estimates: Vec<f64> = children
            .iter()
            .zip(&plan.widths)
            .map(|(child, width)| estimate_child(child, *width, style))
            .collect();
        let band = style
            .height
            .unwrap_or_else(|| estimates.iter().copied().fold(FLEX_ROW_MIN_HEIGHT, f64::max))
            .min(frame.height);

        let align = style.align_items.unwrap_or(CrossAlign::Start);
        let inner = ctx.nested(style);
        let mut max_height = 0.0_f64;

        for (index, child) in children.iter().enumerate() {
            let x = frame.x + plan.offsets[index];
            let width = plan.widths[index];
            match child {
                Child::Text(raw) => {
                    let text = normalize_text(raw);
                    let run = RunStyle::leaf(style);
                    let height = self.text_block(&text, &run, LayoutBox::new(x, frame.y, width, band));
                    max_height = max_height.max(height);
                }
                Child::Node(inner_node) => {
                    let estimated = estimates[index];
                    let drop = match align {
                        CrossAlign::Center if estimated < band => (band - estimated) / 2.0,
                        CrossAlign::End if estimated < band => band - estimated,
                        _ => 0.0,
                    };
                    let slot = LayoutBox::new(x, frame.y + drop, width, band - drop);
                    let used = self.layout(inner_node, slot, &inner);
                    max_height = max_height.max(used);
                }
            }
        }

        band.max(max_height).min(frame.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stack_scales_uniformly_on_overflow() {
        let plan = plan_stack(&[0.3, 0.3, 0.3], 0.1, 1.0, false);
        assert!((plan.scale - 0.8 / 0.9).abs() < 1e-9);
        for h in &plan.heights {
            assert!((h - 0.267).abs() < 0.001);
        }
        let used: f64 = plan.heights.iter().sum::<f64>() + 0.2;
        assert!((used - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_stack_never_scales_up() {
        let plan = plan_stack(&[0.2, 0.5], 0.1, 3.0, false);
        assert_eq!(plan.scale, 1.0);
        assert_eq!(plan.heights, vec![0.2, 0.5]);
        assert_eq!(plan.offset, 0.0);
    }

    #[test]
    fn test_stack_centering_only_when_fitting() {
        let centred = plan_stack(&[0.4], 0.1, 1.0, true);
        assert!((centred.offset - 0.3).abs() < 1e-9);
        let overflowing = plan_stack(&[0.8, 0.8], 0.1, 1.0, true);
        assert_eq!(overflowing.offset, 0.0);
    }

    #[test]
    fn test_uneven_estimates_share_one_ratio() {
        let estimates = [0.2, 1.3, 0.55, 0.9];
        let plan = plan_stack(&estimates, 0.16, 2.0, false);
        for (h, e) in plan.heights.iter().zip(&estimates) {
            assert!((h / e - plan.scale).abs() < 1e-9);
        }
    }

    #[test]
    fn test_row_splits_remaining_width_evenly() {
        let plan = plan_row(&[Some(0.35), None, None], 0.1, 4.0, None);
        assert_eq!(plan.scale, 1.0);
        assert!((plan.widths[1] - 1.725).abs() < 1e-9);
        assert!((plan.widths[2] - 1.725).abs() < 1e-9);
        assert!((plan.offsets[1] - 0.45).abs() < 1e-9);
        assert!((plan.offsets[2] - 2.275).abs() < 1e-9);
    }

    #[test]
    fn test_row_scales_fixed_widths_on_overflow() {
        let plan = plan_row(&[Some(2.0), Some(3.0)], 0.0, 2.5, None);
        assert!((plan.scale - 0.5).abs() < 1e-9);
        assert_eq!(plan.widths, vec![1.0, 1.5]);
    }

    #[test]
    fn test_row_narrows_gaps_wider_than_the_row() {
        let plan = plan_row(&[None, None, None], 0.2, 0.3, None);
        assert_eq!(plan.widths, vec![0.0, 0.0, 0.0]);
        for (offset, width) in plan.offsets.iter().zip(&plan.widths) {
            assert!(offset + width <= 0.3 + 1e-9);
        }
        assert!((plan.offsets[2] - 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_row_justification() {
        let fixed = [Some(1.0), Some(1.0)];
        let center = plan_row(&fixed, 0.0, 4.0, Some(Justify::Center));
        assert_eq!(center.offsets, vec![1.0, 2.0]);
        let between = plan_row(&fixed, 0.0, 4.0, Some(Justify::Between));
        assert_eq!(between.offsets, vec![0.0, 3.0]);
        let end = plan_row(&fixed, 0.0, 4.0, Some(Justify::End));
        assert_eq!(end.offsets, vec![2.0, 3.0]);
        // Auto children absorb the spare width, so justification is moot.
        let auto = plan_row(&[Some(1.0), None], 0.0, 4.0, Some(Justify::Center));
        assert_eq!(auto.offsets, vec![0.0, 1.0]);
    }
}
