//! Style resolution: utility-class strings to [`StyleRecord`]s.
//!
//! No layout knowledge lives here; the layout engine consults
//! [`resolve`] on demand and applies its own contextual defaults.
//!
//! [`StyleRecord`]: crate::models::style::StyleRecord

pub mod palette;
mod resolver;

pub use resolver::{resolve, DEFAULT_GRADIENT_ANGLE, ROUNDED_FULL, SPACING_UNIT};
