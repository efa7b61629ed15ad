use log::debug;

use super::constants::GRID_GAP;
use super::{LayoutContext, LayoutEngine};
use crate::models::{geometry::LayoutBox, node::Node, style::StyleRecord};

/// Equal-sized row-major cells carved out of a box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridGeometry {
    pub origin_x: f64,
    pub origin_y: f64,
    pub columns: usize,
    pub rows: usize,
    pub column_gap: f64,
    pub row_gap: f64,
    pub cell_width: f64,
    pub cell_height: f64,
}

impl GridGeometry {
    /// Splits `frame` into `columns` columns and as many rows as `count` cells need.
    pub fn new(frame: LayoutBox, columns: usize, count: usize, gap: f64) -> Self {
        let columns = columns.max(1);
        let rows = count.div_ceil(columns).max(1);
        GridGeometry {
            origin_x: frame.x,
            origin_y: frame.y,
            columns,
            rows,
            column_gap: Self::fit_gap(frame.width, columns, gap),
            row_gap: Self::fit_gap(frame.height, rows, gap),
            cell_width: Self::cell_extent(frame.width, columns, gap),
            cell_height: Self::cell_extent(frame.height, rows, gap),
        }
    }

    /// The gap between `count` tracks, narrowed so the gaps alone never exceed `total`.
    pub fn fit_gap(total: f64, count: usize, gap: f64) -> f64 {
        if count > 1 {
            gap.min(total.max(0.0) / (count - 1) as f64)
        } else {
            gap
        }
    }

    /// Size of one of `count` equal tracks sharing `total` with `gap` between them.
    pub fn cell_extent(total: f64, count: usize, gap: f64) -> f64 {
        let count = count.max(1);
        let gap = Self::fit_gap(total, count, gap);
        ((total - gap * (count - 1) as f64) / count as f64).max(0.0)
    }

    /// The box of the cell at row-major `index`.
    pub fn cell(&self, index: usize) -> LayoutBox {
        let row = index / self.columns;
        let column = index % self.columns;
        LayoutBox::new(
            self.origin_x + column as f64 * (self.cell_width + self.column_gap),
            self.origin_y + row as f64 * (self.cell_height + self.row_gap),
            self.cell_width,
            self.cell_height,
        )
    }
}

impl LayoutEngine<'_> {
    /// Grid strategy: element children fill equal cells in row-major order.
    /// Text leaves are not placed. Consumes the whole frame.
    pub(super) fn layout_grid(
        &mut self,
        node: &Node,
        style: &StyleRecord,
        frame: LayoutBox,
        ctx: &LayoutContext<'_>,
    ) -> f64 {
        let cells: Vec<&Node> = node.element_children().collect();
        if cells.is_empty() {
            debug!("[grid] <{}> has no element children, skipping", node.tag.name());
            return 0.0;
        }

        let columns = style.grid_columns.unwrap_or(1) as usize;
        let geometry = GridGeometry::new(frame, columns, cells.len(), style.gap.unwrap_or(GRID_GAP));
        debug!(
            "[grid] {}x{} cells of {:.3}x{:.3}",
            geometry.columns, geometry.rows, geometry.cell_width, geometry.cell_height
        );

        let inner = ctx.nested(style);
        for (index, cell) in cells.into_iter().enumerate() {
            self.layout(cell, geometry.cell(index), &inner);
        }
        frame.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_columns_two_rows() {
        let frame = LayoutBox::new(0.5, 1.0, 9.0, 3.0);
        let grid = GridGeometry::new(frame, 3, 6, 0.2);
        assert_eq!(grid.rows, 2);
        assert!((grid.cell_width - 2.8667).abs() < 0.001);
        assert!((grid.cell_height - 1.4).abs() < 1e-9);

        let last = grid.cell(5);
        assert!((last.x - (0.5 + 2.0 * (grid.cell_width + 0.2))).abs() < 1e-9);
        assert!((last.y - 2.6).abs() < 1e-9);
        assert!(frame.contains(&last, 1e-9));
    }

    #[test]
    fn test_partial_last_row() {
        let grid = GridGeometry::new(LayoutBox::new(0.0, 0.0, 4.0, 2.0), 2, 3, 0.0);
        assert_eq!(grid.rows, 2);
        assert_eq!(grid.cell(2), LayoutBox::new(0.0, 1.0, 2.0, 1.0));
    }

    #[test]
    fn test_oversized_gap_collapses_cells() {
        assert_eq!(GridGeometry::cell_extent(0.3, 3, 0.2), 0.0);
    }

    #[test]
    fn test_gap_wider_than_the_box_is_narrowed() {
        let frame = LayoutBox::new(1.0, 0.0, 0.3, 2.0);
        let grid = GridGeometry::new(frame, 3, 3, 0.2);
        assert!((grid.column_gap - 0.15).abs() < 1e-9);
        assert_eq!(grid.row_gap, 0.2);
        for index in 0..3 {
            assert!(frame.contains(&grid.cell(index), 1e-9));
        }
    }
}
