//! The layout engine.
//!
//! [`LayoutEngine::layout`] walks a content tree, classifies every node into a
//! [`LayoutStrategy`], carves sub-boxes for its children and emits drawing
//! primitives through a [`SlideEmitter`]. Each call returns the height it
//! consumed so the caller can advance its own cursor. Layout never fails:
//! shapes it cannot place are skipped and contribute no height.

pub mod constants;
pub mod text;

mod blocks;
mod estimate;
mod flow;
mod grid;
mod run;
mod stack;
mod strategy;

use log::debug;

use crate::emitter::SlideEmitter;
use crate::models::{geometry::LayoutBox, node::Node, style::StyleRecord};
use crate::style::resolve;

pub use estimate::{estimate_child, estimate_node};
pub use grid::GridGeometry;
pub use stack::{plan_row, plan_stack, RowPlan, StackPlan};
pub use strategy::{arrangement, classify, LayoutStrategy};

/// What a node inherits from where it is placed.
#[derive(Debug, Clone, Copy)]
pub struct LayoutContext<'s> {
    /// Resolved style of the enclosing node; text leaves and inline runs inherit from it.
    pub parent: &'s StyleRecord,
    /// Nesting depth, for diagnostics only.
    pub depth: usize,
}

impl<'s> LayoutContext<'s> {
    pub fn new(parent: &'s StyleRecord) -> Self {
        LayoutContext { parent, depth: 0 }
    }

    /// The context seen by the children of a node with style `parent`.
    pub fn nested<'t>(&self, parent: &'t StyleRecord) -> LayoutContext<'t> {
        LayoutContext {
            parent,
            depth: self.depth + 1,
        }
    }
}

/// Lays out content trees onto one slide.
pub struct LayoutEngine<'e> {
    emitter: &'e mut SlideEmitter,
}

impl<'e> LayoutEngine<'e> {
    pub fn new(emitter: &'e mut SlideEmitter) -> Self {
        LayoutEngine { emitter }
    }

    /// Lays out a slide's content tree with no inherited style.
    pub fn layout_root(&mut self, node: &Node, frame: LayoutBox) -> f64 {
        let root = StyleRecord::default();
        self.layout(node, frame, &LayoutContext::new(&root))
    }

    /// Lays out `node` inside `frame` and returns the height it consumed.
    pub fn layout(&mut self, node: &Node, frame: LayoutBox, ctx: &LayoutContext<'_>) -> f64 {
        let style = resolve(&node.class_name);
        let strategy = classify(node, &style);
        debug!(
            "[layout] {:indent$}<{}> {:?} at ({:.3}, {:.3}) {:.3}x{:.3}",
            "",
            node.tag.name(),
            strategy,
            frame.x,
            frame.y,
            frame.width,
            frame.height,
            indent = ctx.depth * 2
        );

        match strategy {
            LayoutStrategy::Icon => self.layout_icon(node, &style, frame),
            LayoutStrategy::LineBreak => constants::LINE_BREAK_ADVANCE,
            LayoutStrategy::Container => self.layout_container(node, &style, frame, ctx),
            other => self.arrange(other, node, &style, frame, ctx),
        }
    }

    /// Places the children of `node` according to a non-terminal strategy.
    fn arrange(
        &mut self,
        strategy: LayoutStrategy,
        node: &Node,
        style: &StyleRecord,
        frame: LayoutBox,
        ctx: &LayoutContext<'_>,
    ) -> f64 {
        match strategy {
            LayoutStrategy::Grid => self.layout_grid(node, style, frame, ctx),
            LayoutStrategy::FlexRow => self.layout_flex_row(node, style, frame, ctx),
            LayoutStrategy::FlexColumn => {
                self.layout_stack(node, style, frame, ctx, stack::StackKind::FlexColumn)
            }
            LayoutStrategy::Stack => {
                self.layout_stack(node, style, frame, ctx, stack::StackKind::Stack)
            }
            LayoutStrategy::ShapeBlock => self.layout_shape_block(style, frame),
            LayoutStrategy::List => self.layout_list(node, style, frame),
            LayoutStrategy::Table => self.layout_table(node, frame),
            _ => self.layout_generic(node, style, frame, ctx),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::document::{Primitive, ShapeKind};
    use crate::style::palette;

    fn run(node: &Node, frame: LayoutBox) -> (f64, Vec<Primitive>) {
        let mut emitter = SlideEmitter::new();
        let used = LayoutEngine::new(&mut emitter).layout_root(node, frame);
        (used, emitter.finish())
    }

    fn texts(primitives: &[Primitive]) -> Vec<&str> {
        primitives
            .iter()
            .filter_map(Primitive::as_text)
            .map(|t| t.text.as_str())
            .collect()
    }

    /// A slide-sized tree touching every strategy.
    fn dashboard() -> Node {
        let card = |title: &str, icon: &str| {
            Node::new("div", "bg-white rounded-xl p-3 border border-gray-200 shadow")
                .child(
                    Node::new("div", "flex items-center gap-2")
                        .child(Node::new(icon, "text-blue-600"))
                        .child(Node::new("h3", "font-semibold").text(title)),
                )
                .child(
                    Node::new("ul", "text-sm")
                        .child(Node::new("li", "").text("Throughput up 12% quarter on quarter"))
                        .child(Node::new("li", "").text("Cooling costs flat"))
                        .child(Node::new("li", "").text("Two new racks online")),
                )
        };
        Node::new("div", "")
            .child(Node::new("h2", "mb-2").text("Data center overview"))
            .child(
                Node::new("div", "space-y-2")
                    .child(Node::new("p", "text-gray-600").text("Quarterly summary of capacity and efficiency."))
                    .child(
                        Node::new("div", "flex gap-3")
                            .child(Node::new("div", "w-3 h-3 bg-green-500 rounded-full"))
                            .child(Node::new("span", "text-sm").text("All systems nominal")),
                    ),
            )
            .child(
                Node::new("div", "grid grid-cols-3 gap-4")
                    .child(card("Power", "Zap"))
                    .child(card("Thermals", "ThermometerSun"))
                    .child(card("Compute", "Cpu")),
            )
            .child(
                Node::new("table", "")
                    .child(Node::new("thead", "").child(
                        Node::new("tr", "")
                            .child(Node::new("th", "").text("Site"))
                            .child(Node::new("th", "").text("PUE")),
                    ))
                    .child(Node::new("tbody", "").child(
                        Node::new("tr", "")
                            .child(Node::new("td", "").text("North"))
                            .child(Node::new("td", "").text("1.3")),
                    )),
            )
    }

    #[test]
    fn test_grid_cells_split_the_box_evenly() {
        let mut grid = Node::new("div", "grid grid-cols-3 gap-4");
        for _ in 0..6 {
            grid = grid.child(Node::new("div", "border"));
        }
        let frame = LayoutBox::new(0.5, 1.0, 9.0, 3.0);
        let (used, primitives) = run(&grid, frame);

        assert_eq!(used, 3.0);
        assert_eq!(primitives.len(), 6);
        let cells: Vec<&LayoutBox> = primitives.iter().map(Primitive::frame).collect();
        assert!((cells[0].width - 2.867).abs() < 0.001);
        assert!((cells[0].height - 1.4).abs() < 1e-9);
        assert!((cells[3].y - 2.6).abs() < 1e-9);
        assert!((cells[3].x - 0.5).abs() < 1e-9);
        assert!((cells[2].right() - 9.5).abs() < 1e-9);
    }

    #[test]
    fn test_grid_without_elements_is_skipped() {
        let grid = Node::new("div", "grid grid-cols-2").text("only text");
        let (used, primitives) = run(&grid, LayoutBox::new(0.0, 0.0, 4.0, 2.0));
        assert_eq!(used, 0.0);
        assert!(primitives.is_empty());
    }

    #[test]
    fn test_overflowing_stack_scales_text_children() {
        let stack = Node::new("div", "space-y-2 leading-6")
            .text("first")
            .text("second")
            .text("third");
        let (used, primitives) = run(&stack, LayoutBox::new(0.0, 0.0, 4.0, 1.0));

        assert_eq!(texts(&primitives), vec!["first", "second", "third"]);
        let ys: Vec<f64> = primitives.iter().map(|p| p.frame().y).collect();
        for primitive in &primitives {
            assert!((primitive.frame().height - 0.267).abs() < 0.001);
        }
        assert!((ys[1] - (0.8 / 3.0 + 0.1)).abs() < 1e-9);
        assert!((used - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_stack_children_share_one_scale() {
        let stack = Node::new("div", "space-y-2")
            .child(Node::new("p", "leading-6").text("a"))
            .child(Node::new("p", "leading-8").text("b"))
            .child(Node::new("p", "leading-4").text("c"));
        let (_, primitives) = run(&stack, LayoutBox::new(0.0, 0.0, 4.0, 0.6));

        let heights: Vec<f64> = primitives.iter().map(|p| p.frame().height).collect();
        let ratios: Vec<f64> = heights.iter().zip([0.3, 0.4, 0.2]).map(|(h, e)| h / e).collect();
        assert!((ratios[0] - 0.4 / 0.9).abs() < 1e-9);
        assert!(ratios.iter().all(|r| (r - ratios[0]).abs() < 1e-9));
    }

    #[test]
    fn test_centered_stack_starts_lower() {
        let stack = Node::new("div", "space-y-2 justify-center leading-6").text("only");
        let (used, primitives) = run(&stack, LayoutBox::new(0.0, 0.0, 4.0, 1.0));
        assert!((primitives[0].frame().y - 0.35).abs() < 1e-9);
        assert!((used - 0.65).abs() < 1e-9);
    }

    #[test]
    fn test_table_emits_one_primitive() {
        let header = Node::new("tr", "")
            .child(Node::new("th", "").text("Name"))
            .child(Node::new("th", "").text("Role"))
            .child(Node::new("th", "").text("Site"));
        let body_row = |a: &str| {
            Node::new("tr", "")
                .child(Node::new("td", "").text(a))
                .child(Node::new("td", "").text("Engineer"))
                .child(Node::new("td", "").text("North"))
        };
        let table = Node::new("table", "")
            .child(Node::new("thead", "").child(header))
            .child(Node::new("tbody", "").child(body_row("Ada")).child(body_row("Lin")));
        let (used, primitives) = run(&table, LayoutBox::new(0.5, 1.0, 9.0, 3.0));

        assert_eq!(primitives.len(), 1);
        let table = primitives[0].as_table().expect("table primitive");
        assert_eq!(table.rows.len(), 3);
        assert_eq!(table.attributes.column_count, 3);
        assert!(table.rows[0].iter().all(|c| c.bold && c.fill == palette::GRAY_100));
        assert!(table.rows[1].iter().all(|c| !c.bold));
        assert_eq!(table.rows[2][0].text, "Lin");
        assert!((used - 0.75).abs() < 1e-9);
        assert!((table.frame.height - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_generic_walk_applies_heading_margin() {
        let node = Node::new("div", "")
            .child(Node::new("h2", "mb-2").text("Heading"))
            .child(Node::new("p", "").text("Body"));
        let (used, primitives) = run(&node, LayoutBox::new(0.5, 1.0, 9.0, 3.0));

        let heading = primitives[0].as_text().expect("heading");
        let body = primitives[1].as_text().expect("paragraph");
        assert_eq!(heading.text, "Heading");
        assert!(heading.attributes.bold);
        assert_eq!(heading.attributes.font_size, 24.0);
        assert!((heading.frame.height - 0.45).abs() < 1e-9);
        assert!((body.frame.y - (1.0 + 0.45 + 0.1)).abs() < 1e-9);
        assert!((used - (0.45 + 0.1 + 0.225 + 0.02)).abs() < 1e-9);
    }

    #[test]
    fn test_generic_walk_drops_overflow() {
        let mut node = Node::new("div", "");
        for i in 0..20 {
            node = node.child(Node::new("p", "").text(&format!("line {}", i)));
        }
        let frame = LayoutBox::new(0.0, 0.0, 5.0, 1.0);
        let (used, primitives) = run(&node, frame);
        assert!(primitives.len() < 20);
        assert_eq!(texts(&primitives)[0], "line 0");
        assert!(used <= 1.0 + 1e-9);
        assert!(primitives.iter().all(|p| frame.contains(p.frame(), 1e-9)));
    }

    #[test]
    fn test_flex_row_places_icon_before_text() {
        let row = Node::new("div", "flex gap-2")
            .child(Node::new("Zap", ""))
            .child(Node::new("span", "").text("Fast"));
        let (used, primitives) = run(&row, LayoutBox::new(1.0, 1.0, 4.0, 1.0));

        assert_eq!(texts(&primitives), vec!["⚡", "Fast"]);
        assert!((primitives[1].frame().x - (1.0 + 0.35 + 0.1)).abs() < 1e-9);
        assert!((used - 0.4).abs() < 1e-9);
    }

    #[test]
    fn test_container_draws_surface_then_children() {
        let card = Node::new("div", "bg-blue-600 text-white font-bold rounded-xl p-3").text("Badge");
        let frame = LayoutBox::new(0.0, 0.0, 3.0, 1.0);
        let (used, primitives) = run(&card, frame);

        assert_eq!(used, 1.0);
        let surface = primitives[0].as_shape().expect("surface first");
        assert_eq!(surface.kind, ShapeKind::RoundRect);
        assert_eq!(surface.frame, frame);
        let label = primitives[1].as_text().expect("label");
        assert!((label.frame.x - 0.15).abs() < 1e-9);
        assert_eq!(label.attributes.color, crate::models::colors::Color::WHITE);
        assert!(label.attributes.bold);
    }

    #[test]
    fn test_grid_with_oversized_gap_stays_inside() {
        let grid = Node::new("div", "grid grid-cols-3 gap-4")
            .child(Node::new("div", "border").text("a"))
            .child(Node::new("div", "border").text("b"))
            .child(Node::new("div", "border").text("c"));
        let frame = LayoutBox::new(0.5, 0.5, 0.3, 1.0);
        let (_, primitives) = run(&grid, frame);

        assert_eq!(primitives.iter().filter(|p| p.as_shape().is_some()).count(), 3);
        assert!(primitives.iter().all(|p| frame.contains(p.frame(), 1e-9)));
    }

    #[test]
    fn test_flex_row_with_oversized_gap_stays_inside() {
        let row = Node::new("div", "flex gap-4").text("a").text("b").text("c");
        let frame = LayoutBox::new(0.0, 0.0, 0.3, 1.0);
        let (_, primitives) = run(&row, frame);

        assert_eq!(primitives.len(), 3);
        assert!(primitives.iter().all(|p| frame.contains(p.frame(), 1e-9)));
    }

    #[test]
    fn test_flex_row_aligns_children_in_the_band() {
        let frame = LayoutBox::new(0.0, 1.0, 4.0, 2.0);
        let centered = Node::new("div", "flex items-center h-20")
            .child(Node::new("p", "leading-6").text("mid"));
        let (used, primitives) = run(&centered, frame);
        // Band 1.0, child estimate 0.3.
        assert!((used - 1.0).abs() < 1e-9);
        assert!((primitives[0].frame().y - 1.35).abs() < 1e-9);

        let bottom = Node::new("div", "flex items-end h-20")
            .child(Node::new("p", "leading-6").text("low"));
        let (_, primitives) = run(&bottom, frame);
        assert!((primitives[0].frame().y - 1.7).abs() < 1e-9);

        let top = Node::new("div", "flex h-20").child(Node::new("p", "leading-6").text("high"));
        let (_, primitives) = run(&top, frame);
        assert!((primitives[0].frame().y - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_flex_column_uses_its_own_gap() {
        let column = Node::new("div", "flex flex-col")
            .child(Node::new("p", "leading-6").text("one"))
            .child(Node::new("p", "leading-6").text("two"));
        let (used, primitives) = run(&column, LayoutBox::new(0.0, 0.0, 4.0, 3.0));

        assert!((primitives[1].frame().y - (0.3 + constants::FLEX_GAP)).abs() < 1e-9);
        assert!((used - (0.6 + constants::FLEX_GAP)).abs() < 1e-9);
    }

    #[test]
    fn test_generic_walk_honours_declared_container_height() {
        let body = Node::new("div", "")
            .child(Node::new("div", "bg-white border rounded-lg p-2 h-16").text("Card"))
            .child(Node::new("p", "").text("After the card"));
        let (_, primitives) = run(&body, LayoutBox::new(0.0, 0.0, 4.0, 4.0));

        let surface = primitives[0].as_shape().expect("card surface");
        assert!((surface.frame.height - 0.8).abs() < 1e-9);
        let after = primitives
            .iter()
            .filter_map(Primitive::as_text)
            .find(|t| t.text == "After the card")
            .expect("sibling below the card");
        assert!((after.frame.y - 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_list_prefixes_bullets() {
        let list = Node::new("ul", "")
            .child(Node::new("li", "").text("one"))
            .child(Node::new("li", "").text("two"));
        let (_, primitives) = run(&list, LayoutBox::new(0.0, 0.0, 4.0, 2.0));
        assert_eq!(texts(&primitives), vec!["• one", "• two"]);
    }

    #[test]
    fn test_layout_is_deterministic() {
        let tree = dashboard();
        let frame = LayoutBox::new(0.5, 1.2, 9.0, 4.2);
        let (first_used, first) = run(&tree, frame);
        let (second_used, second) = run(&tree, frame);
        assert_eq!(first_used, second_used);
        assert_eq!(first, second);
        assert!(!first.is_empty());
    }

    #[test]
    fn test_everything_stays_inside_the_box() {
        let tree = dashboard();
        for frame in [
            LayoutBox::new(0.5, 1.2, 9.0, 4.2),
            LayoutBox::new(0.0, 0.0, 3.0, 1.5),
            LayoutBox::new(2.0, 2.0, 1.0, 0.4),
        ] {
            let (used, primitives) = run(&tree, frame);
            assert!(used <= frame.height + 1e-9);
            for primitive in &primitives {
                assert!(
                    frame.contains(primitive.frame(), 1e-9),
                    "{:?} escapes {:?}",
                    primitive.frame(),
                    frame
                );
            }
        }
    }

    #[test]
    fn test_sibling_order_is_draw_order() {
        let tree = dashboard();
        let (_, primitives) = run(&tree, LayoutBox::new(0.5, 1.2, 9.0, 4.2));
        let all = texts(&primitives);
        let position = |needle: &str| all.iter().position(|t| *t == needle);
        assert!(position("Data center overview") < position("Power"));
        assert!(position("Power") < position("Thermals"));
        assert!(position("Thermals") < position("Compute"));
    }
}
