//! Defaults used by the layout engine when a style record leaves a field unset.
//! Each strategy has its own defaults; they are part of the output contract.

// Text metrics
pub const LINE_HEIGHT_FACTOR: f64 = 1.35;
pub const MIN_LINE_HEIGHT: f64 = 0.18;
pub const AVG_CHAR_WIDTH_RATIO: f64 = 0.55;
pub const MIN_TEXT_WIDTH: f64 = 0.5;
pub const PT_PER_UNIT: f64 = 72.0;

// Font sizes (pt)
pub const DEFAULT_FONT_SIZE: f64 = 12.0;
pub const HEADING_FONT_SIZES: [f64; 4] = [30.0, 24.0, 20.0, 15.0];
pub const ICON_FONT_SIZE: f64 = 18.0;
pub const LIST_FONT_SIZE: f64 = 11.0;
pub const TABLE_FONT_SIZE: f64 = 10.0;

// Spacing (canvas units)
pub const GRID_GAP: f64 = 0.18;
pub const FLEX_GAP: f64 = 0.12;
pub const STACK_GAP: f64 = 0.16;
pub const CONTAINER_PADDING: f64 = 0.18;
pub const PARAGRAPH_MARGIN_BOTTOM: f64 = 0.02;
pub const LIST_ITEM_GAP: f64 = 0.06;
pub const LIST_BULLET_INDENT: f64 = 0.3;
pub const LIST_BULLET: &str = "• ";

// Vertical advances of line breaks
pub const LINE_BREAK_ADVANCE: f64 = 0.12;
pub const FLOW_LINE_BREAK_ADVANCE: f64 = 0.15;

// Sizes
pub const MIN_ESTIMATE_DIVISOR: f64 = 0.1;
pub const FLEX_ROW_MIN_HEIGHT: f64 = 0.4;
pub const FLEX_ROW_MIN_REMAINING: f64 = 0.2;
pub const ICON_FLEX_WIDTH: f64 = 0.35;
pub const SHAPE_DEFAULT_SIZE: f64 = 0.25;
pub const SHAPE_MIN_SIZE: f64 = 0.2;
pub const TABLE_ROW_HEIGHT: f64 = 0.25;

// Shapes
/// Radius (px) above which a box is drawn rounded.
pub const ROUNDED_RADIUS_THRESHOLD: f64 = 6.0;
/// Radius (px) above which a box is drawn as an ellipse.
pub const CIRCULAR_RADIUS_THRESHOLD: f64 = 30.0;
/// Pixels per canvas unit when comparing a radius with a box size.
pub const PX_PER_UNIT: f64 = 96.0;
/// Smallest width/height ratio still drawn as a circle when fully rounded.
pub const SQUARE_ASPECT_RATIO: f64 = 0.8;
pub const MAX_CORNER_RADIUS: f64 = 0.4;
pub const CORNER_RADIUS_DIVISOR: f64 = 20.0;
pub const MIN_LINE_WIDTH: f64 = 0.25;
pub const DEFAULT_BORDER_LINE_WIDTH: f64 = 0.75;
pub const TABLE_BORDER_WIDTH: f64 = 0.5;
