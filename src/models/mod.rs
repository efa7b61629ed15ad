pub mod colors;
pub mod document;
pub mod geometry;
pub mod node;
pub mod slide;
pub mod style;
