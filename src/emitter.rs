//! The drawing emitter: turns a resolved box plus visual attributes into one
//! primitive on the current slide. It makes no layout decisions.

use log::trace;

use crate::models::{
    document::{
        Primitive, ShapeAttributes, ShapeKind, ShapePrimitive, TableAttributes, TableCellData,
        TablePrimitive, TextAttributes, TextPrimitive,
    },
    geometry::LayoutBox,
};

/// Collects the primitives of one slide in emission (z-)order.
#[derive(Debug, Default)]
pub struct SlideEmitter {
    primitives: Vec<Primitive>,
}

impl SlideEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a filled and/or outlined shape covering `frame`.
    pub fn shape(&mut self, kind: ShapeKind, frame: LayoutBox, attributes: ShapeAttributes) {
        trace!("[emit] shape {:?} at {:?}", kind, frame);
        self.primitives.push(Primitive::Shape(ShapePrimitive {
            kind,
            frame,
            attributes,
        }));
    }

    /// Appends a text run; the wrap width is the frame width.
    pub fn text(&mut self, frame: LayoutBox, text: &str, attributes: TextAttributes) {
        trace!("[emit] text {:?} at {:?}", text, frame);
        self.primitives.push(Primitive::Text(TextPrimitive {
            frame,
            text: text.to_string(),
            attributes,
        }));
    }

    /// Appends a table; columns share the frame width evenly.
    pub fn table(
        &mut self,
        frame: LayoutBox,
        rows: Vec<Vec<TableCellData>>,
        attributes: TableAttributes,
    ) {
        trace!(
            "[emit] table {}x{} at {:?}",
            rows.len(),
            attributes.column_count,
            frame
        );
        self.primitives.push(Primitive::Table(TablePrimitive {
            frame,
            rows,
            attributes,
        }));
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Consumes the emitter, returning the primitives in emission order.
    pub fn finish(self) -> Vec<Primitive> {
        self.primitives
    }
}
